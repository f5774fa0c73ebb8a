use std::{num::NonZeroUsize, sync::OnceLock, time::Duration};

use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{AbsUrl, LangCode, PageSize, TimezoneId};

pub mod load;

/// File looked up in the site root by [`load::discover`].
pub const CONFIG_FILE: &str = "site.json";

// Built-in site metadata.
pub const SITE_WEBSITE: &str = "https://blog.pranshu-raj.me/";
pub const SITE_AUTHOR: &str = "Pranshu Raj";
pub const SITE_PROFILE: &str = "https://pranshu-raj.me/";
pub const SITE_DESC: &str = "Pranshu's Blog.";
pub const SITE_TITLE: &str = "Systems & Sidequests";
pub const SITE_OG_IMAGE: &str = "og.png";
pub const SITE_LANG: &str = "en";
// Default global timezone, IANA format.
pub const SITE_TIMEZONE: &str = "Asia/Kolkata";

pub const SITE_POST_PER_INDEX: NonZeroUsize = NonZeroUsize::new(4).expect("non-zero");
pub const SITE_POST_PER_PAGE: NonZeroUsize = NonZeroUsize::new(4).expect("non-zero");
// 15 minutes.
pub const SITE_SCHEDULED_POST_MARGIN_MS: u64 = 15 * 60 * 1000;

pub const SITE_EDIT_POST_TEXT: &str = "Suggest Changes";
pub const SITE_EDIT_POST_URL: &str = "https://github.com/pranshu-raj-211/blog/";

static SITE: OnceLock<SiteConfig> = OnceLock::new();

/// Site-wide settings, read by every page renderer.
///
/// Fields are only reachable through `&self` accessors, so a value can not be
/// changed once built:
///
/// ```compile_fail
/// let config = libsite::config::site();
/// config.title = String::from("Something else");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SiteConfig {
    website: AbsUrl,
    author: String,
    profile: AbsUrl,
    desc: String,
    title: String,
    og_image: String,
    light_and_dark_mode: bool,
    post_per_index: PageSize,
    post_per_page: PageSize,
    scheduled_post_margin: u64,
    show_archives: bool,
    show_back_button: bool,
    edit_post: EditPost,
    dynamic_og_image: bool,
    lang: LangCode,
    timezone: TimezoneId,
}

/// The "edit this post" link shown under each post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditPost {
    enabled: bool,
    text: String,
    url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Default for EditPost {
    fn default() -> Self {
        Self {
            enabled: true,
            text: SITE_EDIT_POST_TEXT.to_string(),
            url: SITE_EDIT_POST_URL.to_string(),
        }
    }
}

impl SiteConfig {
    /// The configuration compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            website: AbsUrl::from_static(SITE_WEBSITE),
            author: SITE_AUTHOR.to_string(),
            profile: AbsUrl::from_static(SITE_PROFILE),
            desc: SITE_DESC.to_string(),
            title: SITE_TITLE.to_string(),
            og_image: SITE_OG_IMAGE.to_string(),
            light_and_dark_mode: true,
            post_per_index: PageSize::new(SITE_POST_PER_INDEX),
            post_per_page: PageSize::new(SITE_POST_PER_PAGE),
            scheduled_post_margin: SITE_SCHEDULED_POST_MARGIN_MS,
            show_archives: false,
            show_back_button: true,
            edit_post: EditPost::default(),
            dynamic_og_image: true,
            lang: LangCode::from_static(SITE_LANG),
            timezone: TimezoneId::from_static(SITE_TIMEZONE),
        }
    }

    /// Checks the rules serde can not express on a single field.
    pub fn validate(&self) -> color_eyre::Result<()> {
        if self.edit_post.enabled && AbsUrl::parse(&self.edit_post.url).is_none() {
            return Err(eyre!(
                "editPost is enabled but its url `{}` is not an absolute http(s) URL",
                self.edit_post.url
            ));
        }
        Ok(())
    }

    pub fn website(&self) -> &AbsUrl {
        &self.website
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn profile(&self) -> &AbsUrl {
        &self.profile
    }

    pub fn desc(&self) -> &str {
        &self.desc
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Default social preview image, relative to the site root unless absolute.
    pub fn og_image(&self) -> &str {
        &self.og_image
    }

    pub fn light_and_dark_mode(&self) -> bool {
        self.light_and_dark_mode
    }

    pub fn post_per_index(&self) -> usize {
        self.post_per_index.get()
    }

    pub fn post_per_page(&self) -> usize {
        self.post_per_page.get()
    }

    /// Grace window before a future-dated post counts as published.
    pub fn scheduled_post_margin(&self) -> Duration {
        Duration::from_millis(self.scheduled_post_margin)
    }

    pub fn show_archives(&self) -> bool {
        self.show_archives
    }

    pub fn show_back_button(&self) -> bool {
        self.show_back_button
    }

    pub fn edit_post(&self) -> &EditPost {
        &self.edit_post
    }

    pub fn dynamic_og_image(&self) -> bool {
        self.dynamic_og_image
    }

    /// Language for `<html lang>`; `"en"` when configured empty.
    pub fn lang(&self) -> &str {
        self.lang.effective()
    }

    pub fn lang_code(&self) -> &LangCode {
        &self.lang
    }

    pub fn timezone(&self) -> &TimezoneId {
        &self.timezone
    }
}

impl EditPost {
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// The process-wide configuration.
///
/// Falls back to [`SiteConfig::builtin`] when nothing was [`install`]ed first.
pub fn site() -> &'static SiteConfig {
    SITE.get_or_init(|| {
        debug!("no site configuration installed, using the built-in one");
        SiteConfig::builtin()
    })
}

/// Make `config` the process-wide configuration. Only the first call wins.
pub fn install(config: SiteConfig) -> color_eyre::Result<&'static SiteConfig> {
    config.validate()?;
    SITE.set(config)
        .map_err(|_| eyre!("site configuration was already initialised"))?;
    debug!("installed site configuration");
    Ok(site())
}

#[cfg(test)]
mod tests;
