//! Pagination arithmetic and sort-parsing tests

use core_kernel::pagination::{Page, PageRequest, Sort, SortDirection, MAX_PAGE_SIZE};
use proptest::prelude::*;

#[test]
fn default_request_is_first_page_of_twenty() {
    let request = PageRequest::default();
    assert_eq!(request.page, 0);
    assert_eq!(request.size, 20);
    assert_eq!(request.offset(), 0);
    assert_eq!(request.limit(), 20);
    assert!(request.sort.is_none());
}

#[test]
fn offset_advances_by_whole_pages() {
    let request = PageRequest::new(3, 25);
    assert_eq!(request.offset(), 75);
    assert_eq!(request.limit(), 25);
}

#[test]
fn page_map_preserves_metadata() {
    let request = PageRequest::new(1, 2);
    let page = Page::new(vec![1, 2], 5, &request);
    let mapped = page.map(|n| n.to_string());

    assert_eq!(mapped.items, vec!["1".to_string(), "2".to_string()]);
    assert_eq!(mapped.total_count, 5);
    assert_eq!(mapped.page, 1);
    assert_eq!(mapped.size, 2);
}

#[test]
fn total_pages_rounds_up() {
    let request = PageRequest::new(0, 2);
    assert_eq!(Page::new(vec![1, 2], 5, &request).total_pages(), 3);
    assert_eq!(Page::new(vec![1, 2], 4, &request).total_pages(), 2);
    assert_eq!(Page::<i32>::new(vec![], 0, &request).total_pages(), 0);
}

#[test]
fn sort_expression_round_trips_both_directions() {
    assert_eq!(
        Sort::parse("generalExamination,desc").unwrap(),
        Sort::descending("generalExamination")
    );
    assert_eq!(Sort::parse("name,asc").unwrap(), Sort::ascending("name"));
}

proptest! {
    #[test]
    fn size_is_always_in_bounds(page in 0u32..10_000, size in 0u32..100_000) {
        let request = PageRequest::new(page, size);
        prop_assert!(request.size >= 1);
        prop_assert!(request.size <= MAX_PAGE_SIZE);
    }

    #[test]
    fn offset_is_page_times_size(page in 0u32..10_000, size in 1u32..=MAX_PAGE_SIZE) {
        let request = PageRequest::new(page, size);
        prop_assert_eq!(request.offset(), i64::from(page) * i64::from(request.size));
    }

    #[test]
    fn total_pages_covers_every_record(total in 0u64..1_000_000, size in 1u32..=MAX_PAGE_SIZE) {
        let request = PageRequest::new(0, size);
        let page = Page::<u64>::new(vec![], total, &request);
        let pages = page.total_pages();
        prop_assert!(pages * u64::from(request.size) >= total);
        prop_assert!(pages == 0 || (pages - 1) * u64::from(request.size) < total);
    }

    #[test]
    fn parse_accepts_any_plain_field(field in "[A-Za-z][A-Za-z0-9_]{0,30}") {
        let sort = Sort::parse(&field).unwrap();
        prop_assert_eq!(sort.field, field);
        prop_assert_eq!(sort.direction, SortDirection::Ascending);
    }
}
