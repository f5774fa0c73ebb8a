//! Splitting post lists according to `postPerIndex` and `postPerPage`.

use crate::{config::SiteConfig, post::POSTS_DIR};

/// One listing page. `number` is 1-based.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub number: usize,
    pub total: usize,
    pub items: &'a [T],
}

impl<T> Page<'_, T> {
    pub fn href(&self) -> String {
        page_href(self.number)
    }

    pub fn prev_href(&self) -> Option<String> {
        (self.number > 1).then(|| page_href(self.number - 1))
    }

    pub fn next_href(&self) -> Option<String> {
        (self.number < self.total).then(|| page_href(self.number + 1))
    }
}

/// Site-relative path of listing page `number`; page 1 is the bare posts directory.
pub fn page_href(number: usize) -> String {
    if number <= 1 {
        format!("{POSTS_DIR}/")
    } else {
        format!("{POSTS_DIR}/{number}/")
    }
}

/// Number of listing pages for `items` entries. There is always at least one.
pub fn page_count(items: usize, per_page: usize) -> usize {
    items.div_ceil(per_page.max(1)).max(1)
}

/// The posts shown on the home page.
pub fn index_posts<'a, T>(config: &SiteConfig, posts: &'a [T]) -> &'a [T] {
    &posts[..posts.len().min(config.post_per_index())]
}

pub fn paginate<'a, T>(config: &SiteConfig, posts: &'a [T]) -> Vec<Page<'a, T>> {
    let total = page_count(posts.len(), config.post_per_page());
    if posts.is_empty() {
        return vec![Page {
            number: 1,
            total,
            items: posts,
        }];
    }

    posts
        .chunks(config.post_per_page())
        .enumerate()
        .map(|(i, items)| Page {
            number: i + 1,
            total,
            items,
        })
        .collect()
}

/// Page `number`, or `None` when it is out of range.
pub fn page<'a, T>(config: &SiteConfig, posts: &'a [T], number: usize) -> Option<Page<'a, T>> {
    let per_page = config.post_per_page();
    let total = page_count(posts.len(), per_page);
    if number == 0 || number > total {
        return None;
    }
    let start = (number - 1) * per_page;
    let end = posts.len().min(start + per_page);
    Some(Page {
        number,
        total,
        items: &posts[start..end],
    })
}
