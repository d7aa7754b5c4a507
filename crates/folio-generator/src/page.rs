//! Page descriptors handed to the site renderer.

use serde::Serialize;

/// One page of an index listing.
#[derive(Debug, PartialEq, Serialize)]
#[serde(bound(serialize = "T: Serialize"))]
pub struct Page<'a, T> {
    /// Output path relative to the index root; empty for the first page.
    pub path: String,

    /// Layouts the renderer should try, in order.
    pub layout: Vec<String>,

    /// Template data for this page.
    pub data: PageData<'a, T>,
}

/// Template data for one index page.
#[derive(Debug, PartialEq, Serialize)]
#[serde(bound(serialize = "T: Serialize"))]
pub struct PageData<'a, T> {
    /// Root of the index section.
    pub base: String,

    /// Total number of pages.
    pub total: usize,

    /// 1-based page number.
    pub current: usize,

    /// Same as the page path.
    pub current_url: String,

    /// Posts on this page, in listing order.
    pub posts: Vec<&'a T>,

    /// Previous page number, 0 on the first page.
    pub prev: usize,

    /// Path of the previous page; empty when there is none or it is the first page.
    pub prev_link: String,

    /// Next page number, 0 on the last page.
    pub next: usize,

    /// Path of the next page; empty on the last page.
    pub next_link: String,

    /// Marks index-page data for templates.
    #[serde(rename = "__index")]
    pub is_index: bool,
}

impl<T> PageData<'_, T> {
    /// Whether a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.prev != 0
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.next != 0
    }
}

impl<T> Clone for Page<'_, T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            layout: self.layout.clone(),
            data: self.data.clone(),
        }
    }
}

impl<T> Clone for PageData<'_, T> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            total: self.total,
            current: self.current,
            current_url: self.current_url.clone(),
            posts: self.posts.clone(),
            prev: self.prev,
            prev_link: self.prev_link.clone(),
            next: self.next,
            next_link: self.next_link.clone(),
            is_index: self.is_index,
        }
    }
}
