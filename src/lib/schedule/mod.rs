//! Which posts are visible at a given instant.
//!
//! A post dated in the future becomes visible once `now` is within the
//! configured scheduled-post margin of its publication time.

use chrono::{DateTime, TimeDelta, Utc};
use itertools::Itertools;
use tracing::debug;

use crate::{config::SiteConfig, post::PostMeta};

/// Instant from which `post` is shown, or `None` if it lies before the representable range.
pub fn visible_from(config: &SiteConfig, post: &PostMeta) -> Option<DateTime<Utc>> {
    let margin = TimeDelta::from_std(config.scheduled_post_margin()).unwrap_or(TimeDelta::MAX);
    post.pub_datetime
        .with_timezone(&Utc)
        .checked_sub_signed(margin)
}

pub fn is_published(config: &SiteConfig, post: &PostMeta, now: DateTime<Utc>) -> bool {
    if post.draft {
        return false;
    }
    match visible_from(config, post) {
        Some(from) => now > from,
        None => true,
    }
}

/// Published posts, newest first by last modification, ties broken by title.
pub fn published_posts<'a>(
    config: &SiteConfig,
    posts: &'a [PostMeta],
    now: DateTime<Utc>,
) -> Vec<&'a PostMeta> {
    let visible = posts
        .iter()
        .filter(|p| is_published(config, p, now))
        .sorted_by(|a, b| {
            b.last_touched()
                .cmp(&a.last_touched())
                .then_with(|| a.title.cmp(&b.title))
        })
        .collect::<Vec<_>>();

    debug!(
        total = posts.len(),
        visible = visible.len(),
        "filtered drafts and scheduled posts"
    );
    visible
}
