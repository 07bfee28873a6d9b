//! # Pagemenu Architecture
//!
//! Pagemenu turns a list of item templates into **navigable, multi-page text menus**: a header,
//! one page of items, and a footer with previous/next buttons and numbered page jumpers.
//!
//! The library is markup-agnostic. It works on template strings with `%name%` placeholders and
//! hands back the completed template; turning that into coloured or clickable text is the job
//! of a [`render::Renderer`] supplied by the embedding application.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Reads items and config, prints pages, owns exit codes    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  PaginatedList (list.rs)                                    │
//! │  - Validates pages, assembles header / items / footer       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Expansion (placeholder.rs, jumpers.rs, page.rs)            │
//! │  - Scans templates, resolves placeholders, page jumpers     │
//! │  - Pure functions of (item count, options, page)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Stateless Rendering
//!
//! Everything below the CLI is synchronous and free of I/O. [`options::ListOptions`] is
//! immutable once built and the items are borrowed, so any number of pages can be rendered
//! from the same list, on any thread, without coordination. Nothing is cached.
//!
//! ## Quick Example
//!
//! ```rust
//! use pagemenu::list::PaginatedList;
//! use pagemenu::options::ListOptions;
//!
//! let options = ListOptions::builder()
//!     .items_per_page(2)
//!     .header_template("%topic% (%current_page%/%total_pages%)")
//!     .footer_template("%previous_page_button%%next_page_button%")
//!     .previous_button_template("<prev>")
//!     .next_button_template("<next>")
//!     .build();
//! let items = vec!["a", "b", "c"];
//! let list = PaginatedList::with_options(&items, &options);
//!
//! assert_eq!(list.page(1).unwrap(), "List (1/2)\n\na\nb\n\n<next>");
//! assert!(list.page(3).is_err());
//! assert_eq!(list.nearest_valid_page(3), list.page(2).ok());
//! ```
//!
//! ## Module Overview
//!
//! - [`list`]: `PaginatedList`, the entry point
//! - [`options`]: `ListOptions` and its builder, default templates
//! - [`placeholder`]: the placeholder vocabulary, scanner and expander
//! - [`jumpers`]: page jump button grouping
//! - [`page`]: page arithmetic
//! - [`color`]: accent colour
//! - [`render`]: the renderer seam
//! - [`config`]: JSON configuration files
//! - [`error`]: error types

pub mod color;
pub mod config;
pub mod error;
pub mod jumpers;
pub mod list;
pub mod options;
pub mod page;
pub mod placeholder;
pub mod render;

pub use error::{PaginationError, Result};
pub use list::PaginatedList;
pub use options::{ListOptions, ListOptionsBuilder};
