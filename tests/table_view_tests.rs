#[cfg(test)]
mod tests {
    use admin_table::view::{
        ColumnDescriptor, FilterDescriptor, SortDirection, TableBody, TableOptions, TableView,
    };
    use admin_table::{DataValue, Record};

    fn key(record: &Record) -> String {
        record.text("id").unwrap_or_default()
    }

    fn people() -> Vec<Record> {
        vec![
            Record::new().with("id", "1").with("name", "Bob").with("age", 30),
            Record::new()
                .with("id", "2")
                .with("name", "Amy")
                .with("age", None::<i64>),
            Record::new().with("id", "3").with("name", "Cid").with("age", 25),
        ]
    }

    fn people_view() -> TableView {
        TableView::new(
            vec![
                ColumnDescriptor::new("name", "Name"),
                ColumnDescriptor::new("age", "Age"),
            ],
            people(),
            key,
        )
    }

    /// 25 numbered bookings; every fifth one rejected, the rest approved
    fn bookings(count: usize) -> Vec<Record> {
        (1..=count)
            .map(|i| {
                let status = if i % 5 == 0 { "Rejected" } else { "Approved" };
                Record::new()
                    .with("id", format!("BK-{:03}", i))
                    .with("seq", i as i64)
                    .with("status", status)
            })
            .collect()
    }

    fn booking_view(records: Vec<Record>) -> TableView {
        TableView::new(
            vec![
                ColumnDescriptor::new("id", "Booking"),
                ColumnDescriptor::new("status", "Status").with_status_badge(),
            ],
            records,
            key,
        )
        .with_options(TableOptions::default().with_filter_options(vec![
            FilterDescriptor::new("status", "Status")
                .with_option("Approved", "Approved")
                .with_option("Rejected", "Rejected"),
        ]))
    }

    fn keys(view: &TableView) -> Vec<String> {
        view.visible_keys()
    }

    #[test]
    fn test_sort_by_age_puts_null_last() {
        let mut view = people_view();
        view.request_sort("age");
        assert_eq!(keys(&view), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_sort_descending_still_puts_null_last() {
        let mut view = people_view();
        view.sort_by("age", SortDirection::Descending);
        assert_eq!(keys(&view), vec!["1", "3", "2"]);
    }

    #[test]
    fn test_search_am_matches_amy_only() {
        let mut view = people_view();
        view.set_search_text("am");
        assert_eq!(keys(&view), vec!["2"]);
    }

    #[test]
    fn test_third_page_of_25() {
        let mut view = booking_view(bookings(25));
        view.set_page(3);

        assert_eq!(view.total_pages(), 3);
        assert_eq!(view.current_page(), 3);
        assert_eq!(
            keys(&view),
            vec!["BK-021", "BK-022", "BK-023", "BK-024", "BK-025"]
        );
    }

    #[test]
    fn test_filter_change_resets_page() {
        // 12 records, 10 approved
        let records: Vec<Record> = (1..=12)
            .map(|i| {
                let status = if i > 10 { "Rejected" } else { "Approved" };
                Record::new()
                    .with("id", format!("R{}", i))
                    .with("status", status)
            })
            .collect();
        let mut view = booking_view(records)
            .with_options(TableOptions::default().with_page_size(5));

        view.set_filter("status", "Approved");
        assert_eq!(view.filtered_count(), 10);
        view.set_page(2);
        assert_eq!(view.current_page(), 2);

        view.set_filter("status", "Rejected");
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.filtered_count(), 2);
    }

    #[test]
    fn test_search_change_resets_page() {
        let mut view = booking_view(bookings(25));
        view.set_page(3);
        view.set_search_text("bk-0");
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.filtered_count(), 25);
    }

    #[test]
    fn test_render_function_output_is_cell_text() {
        let view = booking_view(bookings(5));
        let rendered = view.render();
        assert_eq!(rendered.rows()[0].texts(), vec!["BK-001", "Approved"]);
        assert!(rendered.rows()[0].cells[1].tone.is_some());
    }

    #[test]
    fn test_empty_records_render_one_placeholder_row() {
        let view = booking_view(Vec::new());
        let rendered = view.render();

        assert_eq!(rendered.body_row_count(), 1);
        assert_eq!(
            rendered.body,
            TableBody::Placeholder {
                text: "No data available".to_string(),
                colspan: 2,
            }
        );
    }

    #[test]
    fn test_search_and_filter_combine_with_and() {
        let mut view = booking_view(bookings(25));
        view.set_filter("status", "rejected");
        view.set_search_text("BK-01");

        // Rejected: 5,10,15,20,25; matching "bk-01": 10..19
        assert_eq!(keys(&view), vec!["BK-010", "BK-015"]);
    }

    #[test]
    fn test_search_result_is_matching_subset() {
        let records = bookings(25);
        let mut view = booking_view(records.clone());
        view.set_search_text("2");

        let visible = view.filtered_records();
        assert!(visible.len() <= records.len());
        for record in visible {
            assert!(records.contains(record));
            let id = record.text("id").unwrap();
            let status = record.text("status").unwrap();
            assert!(id.contains('2') || status.contains('2'));
        }
    }

    #[test]
    fn test_filter_result_is_exact_subset() {
        let records = bookings(25);
        let mut view = booking_view(records.clone());
        view.set_filter("status", "APPROVED");

        let expected: Vec<&Record> = records
            .iter()
            .filter(|r| r.text("status").unwrap().eq_ignore_ascii_case("approved"))
            .collect();
        assert_eq!(view.filtered_records(), expected);
    }

    #[test]
    fn test_sort_is_stable() {
        let records = bookings(25);
        let mut view =
            booking_view(records).with_options(TableOptions::default().with_paginate(false));
        view.request_sort("status");

        let ids = keys(&view);
        let approved: Vec<&String> = ids.iter().take(20).collect();
        // Equal keys keep input order
        let mut sorted = approved.clone();
        sorted.sort();
        assert_eq!(approved, sorted);
        assert_eq!(ids[20], "BK-005");
        assert_eq!(ids[24], "BK-025");
    }

    #[test]
    fn test_numeric_sort_not_lexical() {
        let mut view = booking_view(bookings(12));
        view.sort_by("seq", SortDirection::Descending);
        assert_eq!(keys(&view)[0], "BK-012");
        assert_eq!(keys(&view)[2], "BK-010");
    }

    #[test]
    fn test_page_clamped_when_records_shrink() {
        let mut view = booking_view(bookings(25));
        view.set_page(3);
        view.set_records(bookings(12));
        assert_eq!(view.total_pages(), 2);
        assert_eq!(view.current_page(), 2);

        view.set_records(Vec::<Record>::new());
        assert_eq!(view.total_pages(), 0);
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let mut view = booking_view(bookings(25));
        view.set_page(99);
        assert_eq!(view.current_page(), 3);
        view.set_page(0);
        assert_eq!(view.current_page(), 1);
        view.previous_page();
        assert_eq!(view.current_page(), 1);
        view.last_page();
        view.next_page();
        assert_eq!(view.current_page(), 3);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut view = booking_view(bookings(25));
        view.set_filter("status", "Approved");
        view.request_sort("id");
        view.request_sort("id");
        view.set_page(2);
        let first = view.render();

        // Re-applying the same state lands on the same output
        view.set_filter("status", "Approved");
        view.sort_by("id", SortDirection::Descending);
        view.set_page(2);
        assert_eq!(view.render(), first);
    }

    #[test]
    fn test_filter_missing_field_excluded() {
        let records = vec![
            Record::new().with("id", "a").with("status", "Approved"),
            Record::new().with("id", "b"),
        ];
        let mut view = booking_view(records);
        view.set_filter("status", "Approved");
        assert_eq!(keys(&view), vec!["a"]);
    }

    #[test]
    fn test_filterable_off_ignores_filters() {
        let mut view = booking_view(bookings(25))
            .with_options(TableOptions::default().with_filterable(false));
        view.set_filter("status", "Rejected");
        assert_eq!(view.filtered_count(), 25);
        assert!(!view.show_filters());
    }

    #[test]
    fn test_controls_visibility() {
        let view = booking_view(bookings(25));
        assert!(view.show_search());
        assert!(view.show_filters());
        assert!(view.show_export());
        assert!(view.show_pagination());

        let small = booking_view(bookings(3));
        assert!(!small.show_pagination());

        let no_filters = people_view();
        assert!(!no_filters.show_filters());
    }

    #[test]
    fn test_no_paginate_shows_everything() {
        let view = booking_view(bookings(25))
            .with_options(TableOptions::default().with_paginate(false));
        assert_eq!(view.visible_records().len(), 25);
        assert!(view.page_links().is_empty());
    }

    #[test]
    fn test_reset_filters_clears_search_too() {
        let mut view = booking_view(bookings(25));
        view.set_search_text("BK-00");
        view.set_filter("status", "Approved");
        view.reset_filters();
        assert_eq!(view.search_text(), "");
        assert_eq!(view.filter_value("status"), None);
        assert_eq!(view.filtered_count(), 25);
    }

    #[test]
    fn test_duplicate_keys_are_tolerated() {
        let records = vec![
            Record::new().with("id", "dup").with("status", "Approved"),
            Record::new().with("id", "dup").with("status", "Pending"),
        ];
        let view = booking_view(records);
        assert_eq!(keys(&view), vec!["dup", "dup"]);
    }

    #[test]
    fn test_mixed_value_types_sort_without_panic() {
        let records = vec![
            Record::new().with("id", "a").with("v", "text"),
            Record::new().with("id", "b").with("v", 3),
            Record::new().with("id", "c").with("v", true),
            Record::new().with("id", "d").with("v", DataValue::Null),
            Record::new().with("id", "e"),
        ];
        let mut view = TableView::new(vec![ColumnDescriptor::new("v", "V")], records, key);
        view.request_sort("v");
        let ids = keys(&view);
        assert_eq!(&ids[3..], &["d".to_string(), "e".to_string()]);
    }
}
