//! Borrowed, ordered views over content items.

use std::{cmp::Ordering, ops::Range};

use crate::{
    content::{FieldValue, Item},
    order::OrderBy,
};

/// An ordered view over borrowed items.
///
/// Every operation returns a new view; the items themselves are never
/// touched.
#[derive(Debug)]
pub struct Collection<'a, T> {
    items: Vec<&'a T>,
}

impl<T> Clone for Collection<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T> Default for Collection<'_, T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<'a, T> FromIterator<&'a T> for Collection<'a, T> {
    fn from_iter<I: IntoIterator<Item = &'a T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> Collection<'a, T> {
    /// View a slice of items in its current order.
    pub fn new(items: &'a [T]) -> Self {
        items.iter().collect()
    }

    /// Number of items in the view.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the view holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items within `range`, clamped to the view bounds.
    pub fn slice(&self, range: Range<usize>) -> &[&'a T] {
        let end = range.end.min(self.items.len());
        let start = range.start.min(end);
        &self.items[start..end]
    }

    /// Items on 1-based page `page` with `per_page` items per page, plus the
    /// total page count. A `per_page` of zero puts everything on page 1.
    pub fn page(&self, page: usize, per_page: usize) -> (&[&'a T], usize) {
        if per_page == 0 {
            let items = if page == 1 { &self.items[..] } else { &self.items[..0] };
            return (items, 1);
        }

        let total_pages = self.items.len().div_ceil(per_page).max(1);
        let start = page.saturating_sub(1).saturating_mul(per_page);
        (self.slice(start..start.saturating_add(per_page)), total_pages)
    }

    /// Iterate over the items in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.items.iter().copied()
    }
}

impl<'a, T: Item> Collection<'a, T> {
    /// Drop hidden items.
    pub fn visible(&self) -> Self {
        self.iter().filter(|item| !item.is_hidden()).collect()
    }

    /// Whether any item carries a value for `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.items.iter().any(|item| item.field(field).is_some())
    }

    /// Stable sort by `order`.
    ///
    /// Items without a value for the field go after items that have one, in
    /// either direction. When no item has the field the order is unchanged.
    pub fn sorted_by(&self, order: &OrderBy) -> Self {
        let mut keyed: Vec<(Option<FieldValue>, &'a T)> = self
            .iter()
            .map(|item| (item.field(&order.field), item))
            .collect();

        if keyed.iter().all(|(key, _)| key.is_none()) {
            return self.clone();
        }

        keyed.sort_by(|(a, _), (b, _)| match (a, b) {
            (Some(a), Some(b)) => order.direction.apply(a.cmp(b)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        keyed.into_iter().map(|(_, item)| item).collect()
    }

    /// Stable sort moving items with a higher sticky weight to the front.
    pub fn sticky_first(&self) -> Self {
        let mut items = self.items.clone();
        items.sort_by_key(|item| std::cmp::Reverse(item.sticky()));
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Post;

    fn posts() -> Vec<Post> {
        vec![
            Post::new("foo.md", "foo").with_extra("order", 0),
            Post::new("bar.md", "bar").with_extra("order", 10),
            Post::new("baz.md", "baz").with_extra("order", 1),
            Post::new("qux.md", "qux").with_extra("order", 8).hidden(),
        ]
    }

    fn slugs<'a>(collection: &Collection<'a, Post>) -> Vec<&'a str> {
        collection.iter().map(|p| p.slug.as_str()).collect()
    }

    #[test]
    fn test_visible_drops_hidden() {
        let posts = posts();
        let visible = Collection::new(&posts).visible();
        assert_eq!(slugs(&visible), vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn test_sorted_ascending_and_descending() {
        let posts = posts();
        let visible = Collection::new(&posts).visible();

        let asc = visible.sorted_by(&OrderBy::parse("order"));
        assert_eq!(slugs(&asc), vec!["foo", "baz", "bar"]);

        let desc = visible.sorted_by(&OrderBy::parse("-order"));
        assert_eq!(slugs(&desc), vec!["bar", "baz", "foo"]);
    }

    #[test]
    fn test_sort_unknown_field_keeps_order() {
        let posts = posts();
        let visible = Collection::new(&posts).visible();
        assert!(!visible.has_field("something"));

        let sorted = visible.sorted_by(&OrderBy::parse("-something"));
        assert_eq!(slugs(&sorted), vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn test_sort_missing_values_go_last() {
        let posts = vec![
            Post::new("a.md", "a"),
            Post::new("b.md", "b").with_extra("rank", 2),
            Post::new("c.md", "c"),
            Post::new("d.md", "d").with_extra("rank", 1),
        ];
        let view = Collection::new(&posts);

        let asc = view.sorted_by(&OrderBy::parse("rank"));
        assert_eq!(slugs(&asc), vec!["d", "b", "a", "c"]);

        let desc = view.sorted_by(&OrderBy::parse("-rank"));
        assert_eq!(slugs(&desc), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_sticky_first_is_stable() {
        let mut posts = posts();
        posts[2].sticky = 1;
        let view = Collection::new(&posts).visible().sticky_first();
        assert_eq!(slugs(&view), vec!["baz", "foo", "bar"]);
    }

    #[test]
    fn test_page() {
        let items: Vec<Post> = (1..=10)
            .map(|i| Post::new(format!("{i}.md"), i.to_string()))
            .collect();
        let view = Collection::new(&items);

        let (page1, total) = view.page(1, 3);
        assert_eq!(page1.len(), 3);
        assert_eq!(page1[0].slug, "1");
        assert_eq!(total, 4);

        let (page4, _) = view.page(4, 3);
        assert_eq!(page4.len(), 1);
        assert_eq!(page4[0].slug, "10");

        let (page5, _) = view.page(5, 3);
        assert!(page5.is_empty());
    }

    #[test]
    fn test_page_unpaginated_and_empty() {
        let items = posts();
        let view = Collection::new(&items);
        let (all, total) = view.page(1, 0);
        assert_eq!(all.len(), 4);
        assert_eq!(total, 1);

        let empty: Collection<'_, Post> = Collection::default();
        let (page, total) = empty.page(1, 10);
        assert!(page.is_empty());
        assert_eq!(total, 1);
    }

    #[test]
    fn test_slice_clamps() {
        let items = posts();
        let view = Collection::new(&items);
        assert_eq!(view.slice(2..10).len(), 2);
        assert!(view.slice(7..9).is_empty());
    }

    #[test]
    fn test_operations_leave_source_untouched() {
        let items = posts();
        let view = Collection::new(&items);
        let _ = view.visible().sorted_by(&OrderBy::parse("-order"));
        assert_eq!(slugs(&view), vec!["foo", "bar", "baz", "qux"]);
    }
}
