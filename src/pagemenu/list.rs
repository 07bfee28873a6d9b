//! # Paginated Lists
//!
//! [`PaginatedList`] pairs a caller-owned slice of item templates with a set of
//! [`ListOptions`] and produces the completed template for any page.
//!
//! A page is assembled from up to five fragments, joined with newlines:
//!
//! ```text
//!   header            (skipped when the header template is empty)
//!   <blank>           (space_after_header)
//!   item<sep>item...  (each item expanded on its own, joined by the item separator)
//!   <blank>           (space_before_footer)
//!   footer            (skipped when the footer template is empty)
//! ```
//!
//! Two entry points exist on purpose:
//! - [`PaginatedList::page`] is strict and fails with
//!   [`PaginationError::PageOutOfRange`] for pages outside `1..=total_pages`.
//! - [`PaginatedList::nearest_valid_page`] clamps first and then delegates to the strict
//!   path, so it can only come up empty when the list has no pages at all.
//!
//! Nothing is cached; every call recomputes the page from the items and options.

use crate::error::{PaginationError, Result};
use crate::options::{ListOptions, DEFAULT_OPTIONS};
use crate::page::{clamp_page, items_for_page, total_pages};
use crate::placeholder::Expander;
use crate::render::Renderer;
use tracing::{debug, trace};

const FRAGMENT_SEPARATOR: &str = "\n";

/// A list of item templates ready to be shown one page at a time.
#[derive(Debug, Clone, Copy)]
pub struct PaginatedList<'a, S> {
    items: &'a [S],
    options: &'a ListOptions,
}

impl<'a, S: AsRef<str>> PaginatedList<'a, S> {
    /// Paginates `items` with the shared default options.
    pub fn of(items: &'a [S]) -> Self {
        Self::with_options(items, &DEFAULT_OPTIONS)
    }

    pub fn with_options(items: &'a [S], options: &'a ListOptions) -> Self {
        Self { items, options }
    }

    pub fn items(&self) -> &'a [S] {
        self.items
    }

    pub fn options(&self) -> &'a ListOptions {
        self.options
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.items.len(), self.options.items_per_page())
    }

    /// The item templates shown on `page`, unexpanded. Empty for pages out of range.
    pub fn items_for_page(&self, page: usize) -> &'a [S] {
        items_for_page(self.items, page, self.options.items_per_page())
    }

    /// Expands a single template for `page` against this list.
    pub fn expand(&self, template: &str, page: usize) -> String {
        self.expander().expand(template, page)
    }

    /// The completed template for `page`.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::PageOutOfRange`] if `page` is `0` or greater than
    /// [`total_pages`](Self::total_pages). An empty list has no valid page.
    pub fn page(&self, page: usize) -> Result<String> {
        Ok(self.raw_page(page)?.join(FRAGMENT_SEPARATOR))
    }

    /// The completed template for the page closest to `requested`.
    ///
    /// Returns `None` only when the list is empty.
    pub fn nearest_valid_page(&self, requested: usize) -> Option<String> {
        let total_pages = self.total_pages();
        let page = clamp_page(requested, total_pages)?;
        if page != requested {
            trace!(requested, page, total_pages, "clamped page request");
        }
        self.page(page).ok()
    }

    /// The ordered fragments of `page` before they are joined.
    pub fn raw_page(&self, page: usize) -> Result<Vec<String>> {
        let total_pages = self.validate(page)?;
        debug!(
            page,
            total_pages,
            total_items = self.items.len(),
            "rendering page"
        );

        let expander = self.expander();
        let options = self.options;
        let mut fragments = Vec::with_capacity(5);

        if !options.header_template().is_empty() {
            fragments.push(expander.expand(options.header_template(), page));
            if options.space_after_header() {
                fragments.push(String::new());
            }
        }

        let items = self
            .items_for_page(page)
            .iter()
            .map(|item| expander.expand(item.as_ref(), page))
            .collect::<Vec<_>>()
            .join(options.item_separator());
        fragments.push(items);

        if !options.footer_template().is_empty() {
            if options.space_before_footer() {
                fragments.push(String::new());
            }
            fragments.push(expander.expand(options.footer_template(), page));
        }

        Ok(fragments)
    }

    /// Renders `page` through an external renderer.
    pub fn render_page<R: Renderer>(&self, page: usize, renderer: &R) -> Result<R::Output> {
        let completed = self.page(page)?;
        Ok(renderer.render(&completed))
    }

    /// Renders the page closest to `requested` through an external renderer.
    pub fn render_nearest_valid_page<R: Renderer>(
        &self,
        requested: usize,
        renderer: &R,
    ) -> Option<R::Output> {
        self.nearest_valid_page(requested)
            .map(|completed| renderer.render(&completed))
    }

    /// Checks `page` against `1..=total_pages`, returning the total on success.
    fn validate(&self, page: usize) -> Result<usize> {
        let total_pages = self.total_pages();
        if page < 1 || page > total_pages {
            return Err(PaginationError::PageOutOfRange { page, total_pages });
        }
        Ok(total_pages)
    }

    fn expander(&self) -> Expander<'a> {
        Expander::new(self.options, self.items.len())
    }
}
