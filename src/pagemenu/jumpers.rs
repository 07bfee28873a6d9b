//! # Page Jump Buttons
//!
//! Produces the `%page_jump_buttons%` value: one button per visible page, grouped into
//! contiguous runs so long lists collapse to something like `1|2|3…5…8|9|10`.
//!
//! A page is visible when it falls in the start window, the end window, or is the current
//! page. A window of `0` disables that side. When both windows together cover every page
//! there is never a gap and a single group results.

use crate::placeholder::Expander;

const TARGET_PAGE_INDEX: &str = "%target_page_index%";

/// True when page `index` gets a jump button while `page` is shown.
pub fn is_visible(
    index: usize,
    page: usize,
    total_pages: usize,
    start_window: usize,
    end_window: usize,
) -> bool {
    index <= start_window || index > total_pages.saturating_sub(end_window) || index == page
}

/// Visible page indices for `page`, split into runs wherever pages were skipped.
pub fn visible_groups(
    page: usize,
    total_pages: usize,
    start_window: usize,
    end_window: usize,
) -> Vec<Vec<usize>> {
    let mut groups = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut last_visible = 1;

    for index in 1..=total_pages {
        if !is_visible(index, page, total_pages, start_window, end_window) {
            continue;
        }
        if index - last_visible > 1 && !current.is_empty() {
            groups.push(std::mem::take(&mut current));
        }
        current.push(index);
        last_visible = index;
    }

    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

/// Renders the jump buttons for `page`, using the expander's options and item count.
pub fn jump_buttons(expander: &Expander<'_>, page: usize) -> String {
    jump_buttons_nested(expander, page, 0)
}

pub(crate) fn jump_buttons_nested(expander: &Expander<'_>, page: usize, depth: usize) -> String {
    let options = expander.options();
    let groups = visible_groups(
        page,
        expander.total_pages(),
        options.page_jumper_start_window(),
        options.page_jumper_end_window(),
    );

    groups
        .iter()
        .map(|group| {
            group
                .iter()
                .map(|&index| render_button(expander, page, index, depth))
                .collect::<Vec<_>>()
                .join(options.page_jumper_page_separator())
        })
        .collect::<Vec<_>>()
        .join(options.page_jumper_group_separator())
}

fn render_button(expander: &Expander<'_>, page: usize, index: usize, depth: usize) -> String {
    let expander = expander.for_jump_button();
    let options = expander.options();
    if index == page {
        expander.expand_nested(options.page_jumper_current_page_template(), index, depth)
    } else {
        let template = options
            .page_jumper_page_template()
            .replace(TARGET_PAGE_INDEX, &index.to_string());
        expander.expand_nested(&template, index, depth)
    }
}
