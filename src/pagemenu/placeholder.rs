//! # Placeholder Expansion
//!
//! Templates carry `%name%` tokens that are replaced with values computed for one page.
//!
//! ## Scanning
//!
//! A template is read left to right by a two-state machine:
//!
//! ```text
//!   Literal ──'%'──▶ Name ──'%'──▶ Literal
//!      │               │
//!   copy char     accumulate name
//! ```
//!
//! There is no escape sequence: `%%` is an empty placeholder name and expands to nothing.
//! A `%` that is never closed swallows the rest of the template into a name that is
//! discarded. Names are matched case-insensitively; unknown names expand to nothing.
//!
//! ## Recursion
//!
//! Several placeholders expand another template from [`ListOptions`] (`%topic%`,
//! `%previous_page_button%`, `%page_jumpers%`, ...). Expansion recurses through plain function
//! calls. The vocabulary has no cycles of its own, but a user template that references
//! itself (a topic containing `%topic%`) would recurse without bound, so nesting is capped
//! at [`MAX_EXPANSION_DEPTH`].

use crate::jumpers;
use crate::options::ListOptions;
use crate::page::{page_bounds, total_pages};
use std::fmt::Write;
use tracing::trace;

/// Deepest template nesting expanded before further placeholders are dropped.
pub const MAX_EXPANSION_DEPTH: usize = 8;

/// The fixed placeholder vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Topic,
    Color,
    FirstItemOnPageIndex,
    LastItemOnPageIndex,
    TotalItems,
    CurrentPage,
    TotalPages,
    PreviousPageButton,
    NextPageButton,
    NextPageIndex,
    PreviousPageIndex,
    Command,
    PageJumpers,
    PageJumpButtons,
}

impl Placeholder {
    pub const ALL: [Placeholder; 14] = [
        Placeholder::Topic,
        Placeholder::Color,
        Placeholder::FirstItemOnPageIndex,
        Placeholder::LastItemOnPageIndex,
        Placeholder::TotalItems,
        Placeholder::CurrentPage,
        Placeholder::TotalPages,
        Placeholder::PreviousPageButton,
        Placeholder::NextPageButton,
        Placeholder::NextPageIndex,
        Placeholder::PreviousPageIndex,
        Placeholder::Command,
        Placeholder::PageJumpers,
        Placeholder::PageJumpButtons,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Placeholder::Topic => "topic",
            Placeholder::Color => "color",
            Placeholder::FirstItemOnPageIndex => "first_item_on_page_index",
            Placeholder::LastItemOnPageIndex => "last_item_on_page_index",
            Placeholder::TotalItems => "total_items",
            Placeholder::CurrentPage => "current_page",
            Placeholder::TotalPages => "total_pages",
            Placeholder::PreviousPageButton => "previous_page_button",
            Placeholder::NextPageButton => "next_page_button",
            Placeholder::NextPageIndex => "next_page_index",
            Placeholder::PreviousPageIndex => "previous_page_index",
            Placeholder::Command => "command",
            Placeholder::PageJumpers => "page_jumpers",
            Placeholder::PageJumpButtons => "page_jump_buttons",
        }
    }

    /// Looks up a placeholder by name, ignoring case.
    pub fn parse(name: &str) -> Option<Placeholder> {
        let lowered = name.to_lowercase();
        Placeholder::ALL
            .into_iter()
            .find(|placeholder| placeholder.name() == lowered)
    }
}

/// A piece of a scanned template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'t> {
    Literal(&'t str),
    /// The raw text between two `%` delimiters, not yet matched against the vocabulary.
    Placeholder(&'t str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Literal,
    Name,
}

/// Splits a template into literal runs and placeholder names.
pub fn scan(template: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut state = ScanState::Literal;
    let mut start = 0;

    for (i, c) in template.char_indices() {
        if c != '%' {
            continue;
        }
        match state {
            ScanState::Literal => {
                if i > start {
                    segments.push(Segment::Literal(&template[start..i]));
                }
                state = ScanState::Name;
            }
            ScanState::Name => {
                segments.push(Segment::Placeholder(&template[start..i]));
                state = ScanState::Literal;
            }
        }
        start = i + 1;
    }

    match state {
        ScanState::Literal if start < template.len() => {
            segments.push(Segment::Literal(&template[start..]));
        }
        ScanState::Name => trace!(
            dropped = &template[start..],
            "unterminated placeholder discarded"
        ),
        _ => {}
    }

    segments
}

/// Expands templates against one list's item count and options.
///
/// Only the number of items matters for expansion; the items themselves are expanded
/// individually by [`crate::list::PaginatedList`] through this same type.
#[derive(Debug, Clone, Copy)]
pub struct Expander<'a> {
    options: &'a ListOptions,
    item_count: usize,
    /// Set while expanding a single jump button; `%page_jump_buttons%` is empty there.
    in_jump_button: bool,
}

impl<'a> Expander<'a> {
    pub fn new(options: &'a ListOptions, item_count: usize) -> Self {
        Self {
            options,
            item_count,
            in_jump_button: false,
        }
    }

    /// The same expander, for the body of one jump button.
    pub(crate) fn for_jump_button(&self) -> Self {
        Self {
            in_jump_button: true,
            ..*self
        }
    }

    pub fn options(&self) -> &'a ListOptions {
        self.options
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.item_count, self.options.items_per_page())
    }

    /// Expands every placeholder in `template` for `page`.
    pub fn expand(&self, template: &str, page: usize) -> String {
        self.expand_nested(template, page, 0)
    }

    pub(crate) fn expand_nested(&self, template: &str, page: usize, depth: usize) -> String {
        let mut out = String::with_capacity(template.len());
        for segment in scan(template) {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => match Placeholder::parse(name) {
                    Some(placeholder) => self.resolve(&mut out, placeholder, page, depth),
                    None => trace!(name, "unknown placeholder dropped"),
                },
            }
        }
        out
    }

    /// Appends the value of one placeholder.
    fn resolve(&self, out: &mut String, placeholder: Placeholder, page: usize, depth: usize) {
        let per_page = self.options.items_per_page();
        let page_offset = page.saturating_sub(1).saturating_mul(per_page.get());
        let total_pages = self.total_pages();

        // Writing into a String never fails.
        let _ = match placeholder {
            Placeholder::Topic => self.nested(out, self.options.topic_template(), page, depth),
            Placeholder::Color => write!(out, "{}", self.options.accent_color()),
            Placeholder::FirstItemOnPageIndex => write!(out, "{}", page_offset.saturating_add(1)),
            Placeholder::LastItemOnPageIndex => {
                let shown = page_bounds(self.item_count, page, per_page).len();
                write!(out, "{}", page_offset.saturating_add(shown))
            }
            Placeholder::TotalItems => write!(out, "{}", self.item_count),
            Placeholder::CurrentPage => write!(out, "{}", page),
            Placeholder::TotalPages => write!(out, "{}", total_pages),
            Placeholder::PreviousPageButton if page > 1 => {
                self.nested(out, self.options.previous_button_template(), page, depth)
            }
            Placeholder::NextPageButton if page < total_pages => {
                self.nested(out, self.options.next_button_template(), page, depth)
            }
            Placeholder::PreviousPageButton | Placeholder::NextPageButton => Ok(()),
            Placeholder::NextPageIndex => write!(out, "{}", page.saturating_add(1)),
            Placeholder::PreviousPageIndex => write!(out, "{}", page.saturating_sub(1)),
            Placeholder::Command => write!(out, "{}", self.options.command_name()),
            Placeholder::PageJumpers if total_pages > 2 => {
                self.nested(out, self.options.page_jumpers_template(), page, depth)
            }
            Placeholder::PageJumpers => Ok(()),
            Placeholder::PageJumpButtons if self.in_jump_button => {
                trace!("page jump buttons inside a jump button dropped");
                Ok(())
            }
            Placeholder::PageJumpButtons if depth < MAX_EXPANSION_DEPTH => {
                out.push_str(&jumpers::jump_buttons_nested(self, page, depth + 1));
                Ok(())
            }
            Placeholder::PageJumpButtons => {
                trace!(depth, "expansion depth limit reached");
                Ok(())
            }
        };
    }

    fn nested(
        &self,
        out: &mut String,
        template: &str,
        page: usize,
        depth: usize,
    ) -> std::fmt::Result {
        if depth >= MAX_EXPANSION_DEPTH {
            trace!(depth, "expansion depth limit reached");
            return Ok(());
        }
        out.push_str(&self.expand_nested(template, page, depth + 1));
        Ok(())
    }
}
