use chrono::{DateTime, FixedOffset};

use crate::utils::slugify;

/// Directory posts are published under.
pub const POSTS_DIR: &str = "posts";

/// What a post exposes to the pieces that read the site configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostMeta {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub pub_datetime: DateTime<FixedOffset>,
    pub mod_datetime: Option<DateTime<FixedOffset>>,
    pub draft: bool,
    pub tags: Vec<String>,
    /// Explicit social image, overriding the generated or site-wide one.
    pub og_image: Option<String>,
    /// Source path relative to the repository root, used for edit links.
    pub file_path: String,
}

impl PostMeta {
    pub fn new(title: &str, pub_datetime: DateTime<FixedOffset>) -> Self {
        let slug = slugify(title);
        Self {
            title: title.to_string(),
            file_path: format!("src/data/blog/{slug}.md"),
            slug,
            description: String::new(),
            pub_datetime,
            mod_datetime: None,
            draft: false,
            tags: Vec::new(),
            og_image: None,
        }
    }

    /// Modification time, falling back to publication time. Listings sort on this.
    pub fn last_touched(&self) -> DateTime<FixedOffset> {
        self.mod_datetime.unwrap_or(self.pub_datetime)
    }

    /// Site-relative URL path, e.g. `posts/hello-world/`.
    pub fn href(&self) -> String {
        format!("{POSTS_DIR}/{}/", self.slug)
    }
}
