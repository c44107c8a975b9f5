//! Derived list view: search filter plus fixed-size pages.

use std::ops::RangeInclusive;

use blog_core::domain::Post;

/// Posts per page.
pub const PAGE_SIZE: usize = 5;

/// Posts whose title or content contains `search`, case-insensitively.
/// An empty search keeps everything.
pub fn filter_posts<'a>(posts: &'a [Post], search: &str) -> Vec<&'a Post> {
    posts.iter().filter(|post| post.matches(search)).collect()
}

pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// One rendered page of the filtered cache. Recomputed on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView<'a> {
    pub posts: Vec<&'a Post>,
    pub current_page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
}

impl<'a> ListView<'a> {
    /// Filter `posts` by `search` and cut out the window of 1-based `page`.
    /// A page past the end yields an empty window.
    pub fn build(posts: &'a [Post], search: &str, page: usize) -> Self {
        let filtered = filter_posts(posts, search);
        let filtered_count = filtered.len();
        let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);

        Self {
            posts: filtered.into_iter().skip(start).take(PAGE_SIZE).collect(),
            current_page: page,
            total_pages: total_pages(filtered_count),
            filtered_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn prev_disabled(&self) -> bool {
        self.current_page <= 1
    }

    pub fn next_disabled(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// Page numbers offered for direct navigation.
    pub fn pages(&self) -> RangeInclusive<usize> {
        1..=self.total_pages
    }
}
