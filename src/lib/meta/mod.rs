//! Page metadata values and per-post links derived from the site configuration.

use crate::{config::SiteConfig, post::PostMeta, types::AbsUrl};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditLink {
    pub text: String,
    pub href: String,
}

pub fn canonical_url(config: &SiteConfig, path: &str) -> String {
    config.website().join(path)
}

/// Absolute URL of the social preview image.
///
/// An image set on the post wins, then the generated per-post image when
/// `dynamicOgImage` is on, then the site default.
pub fn og_image_url(config: &SiteConfig, post: Option<&PostMeta>) -> String {
    let image = match post {
        Some(PostMeta {
            og_image: Some(image),
            ..
        }) => image.clone(),
        Some(p) if config.dynamic_og_image() => format!("{}index.png", p.href()),
        _ => config.og_image().to_string(),
    };
    absolutise(config.website(), &image)
}

fn absolutise(base: &AbsUrl, target: &str) -> String {
    match AbsUrl::parse(target) {
        Some(url) => url.to_string(),
        None => base.join(target),
    }
}

/// The "edit this post" link for a post stored at `file_path`, if enabled.
pub fn edit_link(config: &SiteConfig, file_path: &str) -> Option<EditLink> {
    let edit = config.edit_post();
    if !edit.enabled() {
        return None;
    }
    let base = AbsUrl::parse(edit.url())?;
    Some(EditLink {
        text: edit.text().to_string(),
        href: base.join(file_path),
    })
}

/// `<title>` text: "Page | Site", or the site title alone.
pub fn page_title(config: &SiteConfig, title: Option<&str>) -> String {
    match title {
        Some(t) if !t.is_empty() => format!("{t} | {}", config.title()),
        _ => config.title().to_string(),
    }
}
