use crate::color::Rgb;
use crate::error::{PaginationError, Result};
use crate::options::{self, ListOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";

/// On-disk form of [`ListOptions`], stored as `config.json`.
///
/// Every field is optional in the file; missing ones take the library defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MenuConfig {
    pub header_template: String,
    pub footer_template: String,
    pub previous_button_template: String,
    pub next_button_template: String,
    pub page_jumpers_template: String,
    pub page_jumper_page_separator: String,
    pub page_jumper_group_separator: String,
    pub page_jumper_current_page_template: String,
    pub page_jumper_page_template: String,
    /// Topic shown by `%topic%`; may itself contain placeholders.
    pub topic: String,
    pub command: String,
    pub accent_color: Rgb,
    pub space_after_header: bool,
    pub space_before_footer: bool,
    pub item_separator: String,
    pub items_per_page: usize,
    pub page_jumper_start_window: usize,
    pub page_jumper_end_window: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self::from_options(&ListOptions::default())
    }
}

impl MenuConfig {
    pub fn from_options(opts: &ListOptions) -> Self {
        Self {
            header_template: opts.header_template().to_string(),
            footer_template: opts.footer_template().to_string(),
            previous_button_template: opts.previous_button_template().to_string(),
            next_button_template: opts.next_button_template().to_string(),
            page_jumpers_template: opts.page_jumpers_template().to_string(),
            page_jumper_page_separator: opts.page_jumper_page_separator().to_string(),
            page_jumper_group_separator: opts.page_jumper_group_separator().to_string(),
            page_jumper_current_page_template: opts
                .page_jumper_current_page_template()
                .to_string(),
            page_jumper_page_template: opts.page_jumper_page_template().to_string(),
            topic: opts.topic_template().to_string(),
            command: opts.command_name().to_string(),
            accent_color: opts.accent_color(),
            space_after_header: opts.space_after_header(),
            space_before_footer: opts.space_before_footer(),
            item_separator: opts.item_separator().to_string(),
            items_per_page: opts.items_per_page().get(),
            page_jumper_start_window: opts.page_jumper_start_window(),
            page_jumper_end_window: opts.page_jumper_end_window(),
        }
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: MenuConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Validates the values and builds immutable [`ListOptions`].
    pub fn to_options(&self) -> Result<ListOptions> {
        if self.items_per_page == 0 {
            return Err(PaginationError::Config(
                "items_per_page must be at least 1".to_string(),
            ));
        }

        Ok(options::ListOptionsBuilder::new()
            .header_template(self.header_template.as_str())
            .footer_template(self.footer_template.as_str())
            .previous_button_template(self.previous_button_template.as_str())
            .next_button_template(self.next_button_template.as_str())
            .page_jumpers_template(self.page_jumpers_template.as_str())
            .page_jumper_page_separator(self.page_jumper_page_separator.as_str())
            .page_jumper_group_separator(self.page_jumper_group_separator.as_str())
            .page_jumper_current_page_template(self.page_jumper_current_page_template.as_str())
            .page_jumper_page_template(self.page_jumper_page_template.as_str())
            .topic_template(self.topic.as_str())
            .command_name(self.command.as_str())
            .accent_color(self.accent_color)
            .space_after_header(self.space_after_header)
            .space_before_footer(self.space_before_footer)
            .item_separator(self.item_separator.as_str())
            .items_per_page(self.items_per_page)
            .page_jumper_start_window(self.page_jumper_start_window)
            .page_jumper_end_window(self.page_jumper_end_window)
            .build())
    }
}
