//! Index pagination.
//!
//! Splits the visible posts into pages and computes the links between them.

use folio_core::{Collection, IndexSettings, Item};
use tracing::debug;

use crate::page::{Page, PageData};

/// Paginate `items` with `settings`.
///
/// Shorthand for `IndexGenerator::new(settings.clone()).generate(items)`.
pub fn paginate<'a, T: Item>(items: &'a [T], settings: &IndexSettings) -> Vec<Page<'a, T>> {
    IndexGenerator::new(settings.clone()).generate(items)
}

/// Generator for the paginated post index.
#[derive(Debug, Clone, Default)]
pub struct IndexGenerator {
    settings: IndexSettings,
}

impl IndexGenerator {
    /// Create a new index generator.
    #[must_use]
    pub fn new(settings: IndexSettings) -> Self {
        Self { settings }
    }

    /// The settings this generator was built with.
    pub fn settings(&self) -> &IndexSettings {
        &self.settings
    }

    /// Generate index pages for a slice of posts, hidden ones included.
    pub fn generate<'a, T: Item>(&self, items: &'a [T]) -> Vec<Page<'a, T>> {
        self.generate_from(&Collection::new(items))
    }

    /// Generate index pages for a collection view.
    ///
    /// Always returns at least one page, even when no post is visible.
    pub fn generate_from<'a, T: Item>(&self, collection: &Collection<'a, T>) -> Vec<Page<'a, T>> {
        let settings = &self.settings;
        let visible = collection.visible();

        if !visible.is_empty() && !visible.has_field(&settings.order_by.field) {
            debug!(order_by = %settings.order_by, "sort key not found on any post, keeping input order");
        }

        let posts = visible.sorted_by(&settings.order_by).sticky_first();
        let per_page = settings.per_page;
        let (_, total) = posts.page(1, per_page);

        debug!(
            posts = posts.len(),
            hidden = collection.len() - posts.len(),
            per_page,
            total,
            "paginating index"
        );

        (1..=total)
            .map(|current| {
                let (page_posts, _) = posts.page(current, per_page);
                let path = self.page_path(current);
                let prev = current - 1;
                let next = if current < total { current + 1 } else { 0 };

                Page {
                    path: path.clone(),
                    layout: settings.layout.clone(),
                    data: PageData {
                        base: String::new(),
                        total,
                        current,
                        current_url: path,
                        posts: page_posts.to_vec(),
                        prev,
                        prev_link: self.link(prev),
                        next,
                        next_link: self.link(next),
                        is_index: true,
                    },
                }
            })
            .collect()
    }

    /// Output path of 1-based page `page`. The first page lives at the index root.
    pub fn page_path(&self, page: usize) -> String {
        if page <= 1 {
            String::new()
        } else {
            format!("{}/{page}/", self.settings.pagination_dir)
        }
    }

    // 0 means no such page.
    fn link(&self, page: usize) -> String {
        if page == 0 {
            String::new()
        } else {
            self.page_path(page)
        }
    }
}
