//! # List Options
//!
//! Templates and layout parameters used to build every page of a [`PaginatedList`].
//!
//! Options are assembled once through [`ListOptionsBuilder`] and are read-only afterwards,
//! so a single instance can be shared between any number of lists (and threads).
//!
//! Every template may contain `%name%` placeholders; see [`crate::placeholder`] for the
//! vocabulary. The defaults use MineDown-style `[text](format)` runs, but nothing here
//! interprets that markup: it is passed through verbatim to whatever [`crate::render::Renderer`]
//! the caller picks.
//!
//! [`PaginatedList`]: crate::list::PaginatedList

use crate::color::Rgb;
use once_cell::sync::Lazy;
use std::num::NonZeroUsize;
use tracing::warn;

pub const DEFAULT_HEADER_TEMPLATE: &str = "[Viewing %topic%](%color%) [(%first_item_on_page_index%-%last_item_on_page_index% of](%color%) [%total_items%](%color% bold)[)](%color%)";
pub const DEFAULT_FOOTER_TEMPLATE: &str = "%previous_page_button%Page [%current_page%](%color%)/[%total_pages%](%color%)%next_page_button%   %page_jumpers%";
pub const DEFAULT_PREVIOUS_BUTTON_TEMPLATE: &str = "[◀](white show_text=&7View previous page run_command=/%command% %previous_page_index%) ";
pub const DEFAULT_NEXT_BUTTON_TEMPLATE: &str =
    " [▶](white show_text=&7View next page run_command=/%command% %next_page_index%)";
pub const DEFAULT_PAGE_JUMPERS_TEMPLATE: &str = "(%page_jump_buttons%)";
pub const DEFAULT_PAGE_JUMPER_PAGE_SEPARATOR: &str = "|";
pub const DEFAULT_PAGE_JUMPER_GROUP_SEPARATOR: &str = "…";
pub const DEFAULT_PAGE_JUMPER_CURRENT_PAGE_TEMPLATE: &str = "[%current_page%](%color%)";
pub const DEFAULT_PAGE_JUMPER_PAGE_TEMPLATE: &str = "[%target_page_index%](show_text=&7Jump to page %target_page_index% run_command=/%command% %target_page_index%)";
pub const DEFAULT_TOPIC_TEMPLATE: &str = "List";
pub const DEFAULT_COMMAND_NAME: &str = "example";
pub const DEFAULT_ACCENT_COLOR: Rgb = Rgb::from_hex(0x00fb9a);
pub const DEFAULT_ITEM_SEPARATOR: &str = "\n";
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
pub const DEFAULT_PAGE_JUMPER_START_WINDOW: usize = 3;
pub const DEFAULT_PAGE_JUMPER_END_WINDOW: usize = 3;

/// Shared default options, used by [`crate::list::PaginatedList::of`].
pub static DEFAULT_OPTIONS: Lazy<ListOptions> = Lazy::new(ListOptions::default);

/// Immutable formatting configuration for a paginated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    header_template: String,
    footer_template: String,
    previous_button_template: String,
    next_button_template: String,
    page_jumpers_template: String,
    page_jumper_page_separator: String,
    page_jumper_group_separator: String,
    page_jumper_current_page_template: String,
    page_jumper_page_template: String,
    topic_template: String,
    command_name: String,
    accent_color: Rgb,
    space_after_header: bool,
    space_before_footer: bool,
    item_separator: String,
    items_per_page: NonZeroUsize,
    page_jumper_start_window: usize,
    page_jumper_end_window: usize,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            header_template: DEFAULT_HEADER_TEMPLATE.to_string(),
            footer_template: DEFAULT_FOOTER_TEMPLATE.to_string(),
            previous_button_template: DEFAULT_PREVIOUS_BUTTON_TEMPLATE.to_string(),
            next_button_template: DEFAULT_NEXT_BUTTON_TEMPLATE.to_string(),
            page_jumpers_template: DEFAULT_PAGE_JUMPERS_TEMPLATE.to_string(),
            page_jumper_page_separator: DEFAULT_PAGE_JUMPER_PAGE_SEPARATOR.to_string(),
            page_jumper_group_separator: DEFAULT_PAGE_JUMPER_GROUP_SEPARATOR.to_string(),
            page_jumper_current_page_template: DEFAULT_PAGE_JUMPER_CURRENT_PAGE_TEMPLATE
                .to_string(),
            page_jumper_page_template: DEFAULT_PAGE_JUMPER_PAGE_TEMPLATE.to_string(),
            topic_template: DEFAULT_TOPIC_TEMPLATE.to_string(),
            command_name: DEFAULT_COMMAND_NAME.to_string(),
            accent_color: DEFAULT_ACCENT_COLOR,
            space_after_header: true,
            space_before_footer: true,
            item_separator: DEFAULT_ITEM_SEPARATOR.to_string(),
            items_per_page: NonZeroUsize::new(DEFAULT_ITEMS_PER_PAGE)
                .unwrap_or(NonZeroUsize::MIN),
            page_jumper_start_window: DEFAULT_PAGE_JUMPER_START_WINDOW,
            page_jumper_end_window: DEFAULT_PAGE_JUMPER_END_WINDOW,
        }
    }
}

impl ListOptions {
    pub fn builder() -> ListOptionsBuilder {
        ListOptionsBuilder::new()
    }

    /// Starts a builder pre-filled with these options, for deriving a variant.
    pub fn to_builder(&self) -> ListOptionsBuilder {
        ListOptionsBuilder {
            options: self.clone(),
        }
    }

    pub fn header_template(&self) -> &str {
        &self.header_template
    }

    pub fn footer_template(&self) -> &str {
        &self.footer_template
    }

    pub fn previous_button_template(&self) -> &str {
        &self.previous_button_template
    }

    pub fn next_button_template(&self) -> &str {
        &self.next_button_template
    }

    pub fn page_jumpers_template(&self) -> &str {
        &self.page_jumpers_template
    }

    pub fn page_jumper_page_separator(&self) -> &str {
        &self.page_jumper_page_separator
    }

    pub fn page_jumper_group_separator(&self) -> &str {
        &self.page_jumper_group_separator
    }

    pub fn page_jumper_current_page_template(&self) -> &str {
        &self.page_jumper_current_page_template
    }

    /// Template for a non-current jump button; `%target_page_index%` is replaced first.
    pub fn page_jumper_page_template(&self) -> &str {
        &self.page_jumper_page_template
    }

    pub fn topic_template(&self) -> &str {
        &self.topic_template
    }

    pub fn command_name(&self) -> &str {
        &self.command_name
    }

    pub fn accent_color(&self) -> Rgb {
        self.accent_color
    }

    pub fn space_after_header(&self) -> bool {
        self.space_after_header
    }

    pub fn space_before_footer(&self) -> bool {
        self.space_before_footer
    }

    /// Literal join string between items. Never expanded.
    pub fn item_separator(&self) -> &str {
        &self.item_separator
    }

    pub fn items_per_page(&self) -> NonZeroUsize {
        self.items_per_page
    }

    pub fn page_jumper_start_window(&self) -> usize {
        self.page_jumper_start_window
    }

    pub fn page_jumper_end_window(&self) -> usize {
        self.page_jumper_end_window
    }
}

/// Chained builder for [`ListOptions`], starting from the defaults.
///
/// ```rust
/// use pagemenu::options::ListOptions;
///
/// let options = ListOptions::builder()
///     .topic_template("Homes")
///     .command_name("homelist")
///     .items_per_page(5)
///     .build();
/// assert_eq!(options.items_per_page().get(), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListOptionsBuilder {
    options: ListOptions,
}

impl ListOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header_template(mut self, template: impl Into<String>) -> Self {
        self.options.header_template = template.into();
        self
    }

    pub fn footer_template(mut self, template: impl Into<String>) -> Self {
        self.options.footer_template = template.into();
        self
    }

    pub fn previous_button_template(mut self, template: impl Into<String>) -> Self {
        self.options.previous_button_template = template.into();
        self
    }

    pub fn next_button_template(mut self, template: impl Into<String>) -> Self {
        self.options.next_button_template = template.into();
        self
    }

    pub fn page_jumpers_template(mut self, template: impl Into<String>) -> Self {
        self.options.page_jumpers_template = template.into();
        self
    }

    pub fn page_jumper_page_separator(mut self, separator: impl Into<String>) -> Self {
        self.options.page_jumper_page_separator = separator.into();
        self
    }

    pub fn page_jumper_group_separator(mut self, separator: impl Into<String>) -> Self {
        self.options.page_jumper_group_separator = separator.into();
        self
    }

    pub fn page_jumper_current_page_template(mut self, template: impl Into<String>) -> Self {
        self.options.page_jumper_current_page_template = template.into();
        self
    }

    pub fn page_jumper_page_template(mut self, template: impl Into<String>) -> Self {
        self.options.page_jumper_page_template = template.into();
        self
    }

    pub fn topic_template(mut self, template: impl Into<String>) -> Self {
        self.options.topic_template = template.into();
        self
    }

    pub fn command_name(mut self, command: impl Into<String>) -> Self {
        self.options.command_name = command.into();
        self
    }

    pub fn accent_color(mut self, color: impl Into<Rgb>) -> Self {
        self.options.accent_color = color.into();
        self
    }

    pub fn space_after_header(mut self, enabled: bool) -> Self {
        self.options.space_after_header = enabled;
        self
    }

    pub fn space_before_footer(mut self, enabled: bool) -> Self {
        self.options.space_before_footer = enabled;
        self
    }

    pub fn item_separator(mut self, separator: impl Into<String>) -> Self {
        self.options.item_separator = separator.into();
        self
    }

    /// Sets the page size. A size of zero is ignored and the previous value kept.
    pub fn items_per_page(mut self, items_per_page: usize) -> Self {
        match NonZeroUsize::new(items_per_page) {
            Some(n) => self.options.items_per_page = n,
            None => warn!(
                kept = self.options.items_per_page.get(),
                "ignoring items_per_page of 0"
            ),
        }
        self
    }

    pub fn page_jumper_start_window(mut self, window: usize) -> Self {
        self.options.page_jumper_start_window = window;
        self
    }

    pub fn page_jumper_end_window(mut self, window: usize) -> Self {
        self.options.page_jumper_end_window = window;
        self
    }

    pub fn build(self) -> ListOptions {
        self.options
    }
}
