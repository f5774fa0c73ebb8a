use std::{fs, time::Duration};

use proptest::{
    prelude::*,
    test_runner::{Config, TestRunner},
};
use tempfile::TempDir;

use super::{CONFIG_FILE, SiteConfig, install, load, site};
use crate::types::{AbsUrl, LangCode, TimezoneId};

#[test]
fn builtin_matches_literal() {
    let config = SiteConfig::builtin();
    assert_eq!(config.website().as_str(), "https://blog.pranshu-raj.me/");
    assert_eq!(config.author(), "Pranshu Raj");
    assert_eq!(config.profile().as_str(), "https://pranshu-raj.me/");
    assert_eq!(config.desc(), "Pranshu's Blog.");
    assert_eq!(config.title(), "Systems & Sidequests");
    assert_eq!(config.og_image(), "og.png");
    assert!(config.light_and_dark_mode());
    assert_eq!(config.post_per_index(), 4);
    assert_eq!(config.post_per_page(), 4);
    assert_eq!(config.scheduled_post_margin(), Duration::from_secs(15 * 60));
    assert!(!config.show_archives());
    assert!(config.show_back_button());
    assert!(config.edit_post().enabled());
    assert_eq!(config.edit_post().text(), "Suggest Changes");
    assert_eq!(
        config.edit_post().url(),
        "https://github.com/pranshu-raj-211/blog/"
    );
    assert!(config.dynamic_og_image());
    assert_eq!(config.lang(), "en");
    assert_eq!(config.timezone().as_str(), "Asia/Kolkata");
}

#[test]
fn builtin_constants_are_well_formed() {
    let config = SiteConfig::builtin();
    config.validate().expect("built-in config is valid");
    assert!(AbsUrl::parse(config.website().as_str()).is_some());
    assert!(AbsUrl::parse(config.profile().as_str()).is_some());
    assert!(LangCode::parse(config.lang_code().as_str()).is_some());
    assert!(TimezoneId::parse(config.timezone().as_str()).is_some());
}

#[test]
fn site_is_one_shared_value() {
    let first = site();
    let second = site();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first, second);

    // Reading has already initialised the global.
    assert!(install(SiteConfig::builtin()).is_err());
    assert!(std::ptr::eq(site(), first));
}

#[test]
fn install_validates_before_touching_the_global() {
    let invalid: SiteConfig =
        serde_json::from_str(r#"{"editPost": {"enabled": true, "url": ""}}"#).unwrap();
    assert!(invalid.validate().is_err());

    let before = site();
    let err = install(invalid).expect_err("invalid config must be rejected");
    assert!(err.to_string().contains("editPost"));
    assert!(std::ptr::eq(site(), before));
    assert_eq!(site(), &SiteConfig::builtin());
}

#[test]
fn empty_object_is_builtin() {
    let config = load::from_str("{}").expect("empty object");
    assert_eq!(config, SiteConfig::builtin());
}

#[test]
fn overlay_keeps_unspecified_fields() {
    let mut runner = TestRunner::new(Config {
        cases: 32,
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&(1usize..100, 0u64..10_000_000), |(per_page, margin)| {
            let raw = format!(r#"{{"postPerPage": {per_page}, "scheduledPostMargin": {margin}}}"#);
            let config = load::from_str(&raw).expect("valid overlay");
            let builtin = SiteConfig::builtin();
            prop_assert_eq!(config.post_per_page(), per_page);
            prop_assert_eq!(config.scheduled_post_margin(), Duration::from_millis(margin));
            prop_assert_eq!(config.post_per_index(), builtin.post_per_index());
            prop_assert_eq!(config.title(), builtin.title());
            prop_assert_eq!(config.edit_post(), builtin.edit_post());
            Ok(())
        })
        .unwrap();
}

#[test]
fn edit_post_overlays_per_field() {
    let config = load::from_str(r#"{"editPost": {"text": "Edit on GitHub"}}"#).unwrap();
    assert!(config.edit_post().enabled());
    assert_eq!(config.edit_post().text(), "Edit on GitHub");
    assert_eq!(
        config.edit_post().url(),
        SiteConfig::builtin().edit_post().url()
    );
}

#[test]
fn empty_lang_falls_back_to_en() {
    let config = load::from_str(r#"{"lang": ""}"#).unwrap();
    assert!(config.lang_code().is_empty());
    assert_eq!(config.lang(), "en");

    let config = load::from_str(r#"{"lang": "pt-BR"}"#).unwrap();
    assert_eq!(config.lang(), "pt-BR");
}

#[test]
fn rejects_invalid_values() {
    for raw in [
        r#"{"postPerIndex": 0}"#,
        r#"{"postPerPage": 0}"#,
        r#"{"scheduledPostMargin": -1}"#,
        r#"{"website": "blog.example.com"}"#,
        r#"{"profile": "/about"}"#,
        r#"{"timezone": "kolkata"}"#,
        r#"{"lang": "english please"}"#,
        r#"{"editPost": {"enabled": true, "url": ""}}"#,
        r#"{"showArchives": "yes"}"#,
        r#"{"unknownKey": 1}"#,
        "not json",
    ] {
        assert!(load::from_str(raw).is_err(), "{raw} should be rejected");
    }
}

#[test]
fn disabled_edit_post_may_have_no_url() {
    let config = load::from_str(r#"{"editPost": {"enabled": false, "url": ""}}"#).unwrap();
    assert!(!config.edit_post().enabled());
}

#[test]
fn serialised_config_reloads_identically() {
    let builtin = SiteConfig::builtin();
    let json = serde_json::to_string(&builtin).unwrap();
    assert!(json.contains("\"postPerPage\":4"));
    assert!(json.contains("\"editPost\""));
    assert_eq!(load::from_str(&json).unwrap(), builtin);
}

#[test]
fn discover_reads_site_json() {
    let tmp = TempDir::new().expect("tempdir");
    assert_eq!(load::discover(tmp.path()).unwrap(), SiteConfig::builtin());

    fs::write(
        tmp.path().join(CONFIG_FILE),
        r#"{"title": "Other", "timezone": "UTC"}"#,
    )
    .unwrap();
    let config = load::discover(tmp.path()).unwrap();
    assert_eq!(config.title(), "Other");
    assert_eq!(config.timezone().as_str(), "UTC");
}

#[test]
fn from_path_reports_missing_and_malformed_files() {
    let tmp = TempDir::new().expect("tempdir");
    assert!(load::from_path(&tmp.path().join("missing.json")).is_err());

    let broken = tmp.path().join(CONFIG_FILE);
    fs::write(&broken, "{ \"title\": ").unwrap();
    assert!(load::from_path(&broken).is_err());
    assert!(load::discover(tmp.path()).is_err());
}
