use pagemenu::color::Rgb;
use pagemenu::jumpers::visible_groups;
use pagemenu::list::PaginatedList;
use pagemenu::options::ListOptions;
use pagemenu::page::{items_for_page, total_pages};
use proptest::prelude::*;
use std::num::NonZeroUsize;

fn compact_options(per_page: usize) -> ListOptions {
    ListOptions::builder()
        .items_per_page(per_page)
        .header_template("%current_page%/%total_pages%")
        .footer_template("%previous_page_button%|%next_page_button%|%page_jumpers%")
        .previous_button_template("<")
        .next_button_template(">")
        .page_jumpers_template("J")
        .build()
}

proptest! {
    #[test]
    fn prop_total_pages_is_ceiling(count in 0usize..5000, per_page in 1usize..200) {
        let per = NonZeroUsize::new(per_page).unwrap();
        let expected = (count + per_page - 1) / per_page;
        prop_assert_eq!(total_pages(count, per), expected);
    }

    #[test]
    fn prop_pages_partition_items(count in 0usize..500, per_page in 1usize..40) {
        let items: Vec<usize> = (0..count).collect();
        let per = NonZeroUsize::new(per_page).unwrap();
        let pages = total_pages(count, per);

        let mut rebuilt = Vec::new();
        for page in 1..=pages {
            let slice = items_for_page(&items, page, per);
            if page < pages {
                prop_assert_eq!(slice.len(), per_page);
            } else {
                prop_assert!(!slice.is_empty() && slice.len() <= per_page);
            }
            rebuilt.extend_from_slice(slice);
        }
        prop_assert_eq!(rebuilt, items);
    }

    #[test]
    fn prop_nearest_valid_page_matches_clamped_strict(
        count in 1usize..200,
        per_page in 1usize..20,
        requested in 0usize..300,
    ) {
        let items: Vec<String> = (0..count).map(|i| format!("item {}", i)).collect();
        let options = compact_options(per_page);
        let list = PaginatedList::with_options(&items, &options);
        let pages = list.total_pages();

        prop_assert!(list.page(0).is_err());
        prop_assert!(list.page(pages + 1).is_err());

        let clamped = requested.clamp(1, pages);
        prop_assert_eq!(list.nearest_valid_page(requested), Some(list.page(clamped).unwrap()));
    }

    #[test]
    fn prop_navigation_buttons_follow_position(count in 1usize..200, per_page in 1usize..20) {
        let items: Vec<String> = (0..count).map(|i| i.to_string()).collect();
        let options = compact_options(per_page);
        let list = PaginatedList::with_options(&items, &options);
        let pages = list.total_pages();
        let footer = "%previous_page_button%|%next_page_button%|%page_jumpers%";

        for page in 1..=pages {
            let expanded = list.expand(footer, page);
            let prev = if page > 1 { "<" } else { "" };
            let next = if page < pages { ">" } else { "" };
            let jumpers = if pages > 2 { "J" } else { "" };
            prop_assert_eq!(expanded, format!("{}|{}|{}", prev, next, jumpers));
        }
    }

    #[test]
    fn prop_templates_without_percent_are_unchanged(text in "[^%]*", page in 1usize..10) {
        let items = vec!["x"];
        let list = PaginatedList::of(&items);
        prop_assert_eq!(list.expand(&text, page), text);
    }

    #[test]
    fn prop_color_is_seven_chars(value in 0u32..=0xffffff) {
        let code = Rgb::from_hex(value).to_hex_code();
        prop_assert_eq!(code.len(), 7);
        prop_assert!(code.starts_with('#'));
        prop_assert_eq!(u32::from_str_radix(&code[1..], 16).unwrap(), value);
    }

    #[test]
    fn prop_jump_groups_keep_current_page_and_order(
        total in 1usize..60,
        page_seed in 0usize..60,
        start in 0usize..6,
        end in 0usize..6,
    ) {
        let page = page_seed % total + 1;
        let groups = visible_groups(page, total, start, end);
        let flat: Vec<usize> = groups.iter().flatten().copied().collect();

        prop_assert!(flat.contains(&page));
        prop_assert!(flat.windows(2).all(|w| w[0] < w[1]));
        for group in &groups {
            prop_assert!(group.windows(2).all(|w| w[1] == w[0] + 1));
        }
        for pair in groups.windows(2) {
            let last = *pair[0].last().unwrap();
            let first = pair[1][0];
            prop_assert!(first > last + 1);
        }
    }
}

#[test]
fn test_color_boundaries() {
    assert_eq!(Rgb::from_hex(0x000000).to_hex_code(), "#000000");
    assert_eq!(Rgb::from_hex(0xffffff).to_hex_code(), "#ffffff");
}

#[test]
fn test_five_items_two_per_page() {
    let items = vec!["a", "b", "c", "d", "e"];
    let options = ListOptions::builder().items_per_page(2).build();
    let list = PaginatedList::with_options(&items, &options);

    assert_eq!(list.total_pages(), 3);
    assert_eq!(list.items_for_page(2), &["c", "d"]);
    assert_eq!(
        list.expand(
            "%first_item_on_page_index% %last_item_on_page_index% %total_items%",
            2
        ),
        "3 4 5"
    );
}
