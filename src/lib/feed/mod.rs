use chrono::{DateTime, Utc};
use rss::{Category, Channel, Guid, Item};

use crate::{config::SiteConfig, post::PostMeta, schedule::published_posts};

/// RSS 2.0 document listing the posts visible at `now`.
pub fn build_rss(config: &SiteConfig, posts: &[PostMeta], now: DateTime<Utc>) -> String {
    let mut channel = Channel::default();
    channel.set_title(config.title().to_string());
    channel.set_link(config.website().to_string());
    channel.set_description(config.desc().to_string());
    channel.set_language(Some(config.lang().to_string()));

    let items = published_posts(config, posts, now)
        .into_iter()
        .map(|post| feed_item(config, post))
        .collect::<Vec<_>>();

    channel.set_items(items);
    channel.to_string()
}

fn feed_item(config: &SiteConfig, post: &PostMeta) -> Item {
    let url = config.website().join(&post.href());

    let mut item = Item::default();
    item.set_title(Some(post.title.clone()));
    item.set_link(Some(url.clone()));
    item.set_guid(Some(Guid {
        value: url,
        permalink: true,
    }));
    item.set_pub_date(Some(post.pub_datetime.to_rfc2822()));

    if !post.description.is_empty() {
        item.set_description(Some(post.description.clone()));
    }

    if !post.tags.is_empty() {
        let cats: Vec<Category> = post
            .tags
            .iter()
            .map(|t| {
                let mut c = Category::default();
                c.set_name(t.clone());
                c
            })
            .collect();
        item.set_categories(cats);
    }

    item
}
