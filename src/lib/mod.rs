//! Site-wide configuration for a static blog, and the small helpers page
//! renderers use to apply it.

pub mod config;
pub mod feed;
pub mod meta;
pub mod pagination;
pub mod post;
pub mod schedule;
pub mod types;
pub mod utils;
