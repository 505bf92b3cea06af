//! Tests for pagination module

use super::*;
use crate::error::Error;
use crate::source::StaticSource;
use crate::types::{Feed, Item, ItemId};
use std::sync::Arc;
use std::time::Duration;
use test_case::test_case;

fn paginator(page_size: usize, n: u64) -> (Paginator<StaticSource>, Arc<StaticSource>) {
    let source = Arc::new(StaticSource::new().with_feed(Feed::Top, 1..=n));
    let mut paginator = Paginator::new(Arc::clone(&source), page_size).unwrap();
    paginator.set_identifiers((1..=n).collect());
    (paginator, source)
}

fn ids_of(items: &[Item]) -> Vec<ItemId> {
    items.iter().map(|item| item.id).collect()
}

// ============================================================================
// PageBounds Tests
// ============================================================================

#[test_case(0, 10, 25 => Some((0, 10)); "first page")]
#[test_case(2, 10, 25 => Some((20, 25)); "partial tail clamps end")]
#[test_case(3, 10, 25 => None; "start past end")]
#[test_case(2, 10, 20 => Some((20, 20)); "empty page at exact end")]
#[test_case(0, 10, 0 => Some((0, 0)); "empty list page zero")]
#[test_case(1, 5, 3 => None; "page size larger than list")]
#[test_case(usize::MAX, 2, 10 => None; "overflowing start")]
fn test_page_bounds_compute(page: usize, size: usize, len: usize) -> Option<(usize, usize)> {
    PageBounds::compute(page, size, len).map(|b| (b.start, b.end))
}

#[test]
fn test_page_bounds_accessors() {
    let bounds = PageBounds::compute(1, 4, 6).unwrap();
    assert_eq!(bounds.page, 1);
    assert_eq!(bounds.len(), 2);
    assert!(!bounds.is_empty());
    assert_eq!(bounds.range(), 4..6);

    assert!(PageBounds::compute(0, 4, 0).unwrap().is_empty());
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_new_rejects_zero_page_size() {
    let source = Arc::new(StaticSource::new());
    let result = Paginator::new(source, 0);
    assert!(matches!(result, Err(Error::InvalidPageSize)));
}

#[tokio::test]
async fn test_new_initial_state() {
    let source = Arc::new(StaticSource::new());
    let paginator = Paginator::new(source, 10).unwrap();

    assert_eq!(paginator.current_page(), 0);
    assert_eq!(paginator.total_pages(), 0);
    assert_eq!(paginator.page_size(), 10);
    assert_eq!(paginator.page_timeout(), DEFAULT_PAGE_TIMEOUT);
    assert!(paginator.is_empty());
    assert!(!paginator.has_next());
    assert!(!paginator.has_previous());
    assert!(paginator.load_current().await.unwrap().is_empty());
}

#[test_case(10, 25 => 2)]
#[test_case(10, 20 => 2)]
#[test_case(10, 0 => 0)]
#[test_case(5, 3 => 0)]
#[test_case(1, 7 => 7)]
#[test_case(3, 9 => 3)]
fn test_total_pages(page_size: usize, n: u64) -> usize {
    let source = Arc::new(StaticSource::new());
    let mut paginator = Paginator::new(source, page_size).unwrap();
    paginator.set_identifiers((1..=n).collect());
    paginator.total_pages()
}

#[test]
fn test_set_identifiers_recomputes_total_pages() {
    let source = Arc::new(StaticSource::new());
    let mut paginator = Paginator::new(source, 10).unwrap();

    paginator.set_identifiers((1..=25).collect());
    assert_eq!(paginator.total_pages(), 2);

    paginator.set_identifiers((1..=5).collect());
    assert_eq!(paginator.total_pages(), 0);
    assert_eq!(paginator.len(), 5);

    paginator.set_identifiers((1..=40).collect());
    assert_eq!(paginator.total_pages(), 4);
}

// ============================================================================
// Scenario Tests
// ============================================================================

#[tokio::test]
async fn test_partial_tail_reachable_but_not_advertised() {
    let (mut paginator, _) = paginator(10, 25);
    assert_eq!(paginator.total_pages(), 2);

    let first = paginator.load_current().await.unwrap();
    assert_eq!(ids_of(&first), (1..=10).collect::<Vec<_>>());
    assert!(paginator.has_next());
    assert!(!paginator.has_previous());

    let second = paginator.next().await.unwrap();
    assert_eq!(ids_of(&second), (11..=20).collect::<Vec<_>>());
    assert_eq!(paginator.current_page(), 1);
    assert!(paginator.has_next());

    let tail = paginator.next().await.unwrap();
    assert_eq!(ids_of(&tail), (21..=25).collect::<Vec<_>>());
    assert_eq!(paginator.current_page(), 2);
    assert!(!paginator.has_next());
    assert!(paginator.has_previous());

    let err = paginator.next().await.unwrap_err();
    assert!(matches!(err, Error::OutOfBounds { page: 3, len: 25 }));
    assert_eq!(paginator.current_page(), 2);
}

#[tokio::test]
async fn test_empty_identifier_list() {
    let (mut paginator, source) = paginator(10, 0);

    assert!(paginator.load_current().await.unwrap().is_empty());
    assert!(!paginator.has_next());
    assert!(!paginator.has_previous());

    assert!(paginator.next().await.unwrap_err().is_out_of_bounds());
    assert!(paginator.previous().await.unwrap_err().is_out_of_bounds());
    assert_eq!(paginator.current_page(), 0);
    assert_eq!(source.item_requests(), 0);
}

#[tokio::test]
async fn test_page_size_larger_than_list() {
    let (mut paginator, _) = paginator(5, 3);
    assert_eq!(paginator.total_pages(), 0);
    assert!(!paginator.has_next());

    let items = paginator.load_current().await.unwrap();
    assert_eq!(ids_of(&items), vec![1, 2, 3]);

    let err = paginator.next().await.unwrap_err();
    assert!(matches!(err, Error::OutOfBounds { page: 1, len: 3 }));
    assert_eq!(paginator.current_page(), 0);
}

#[test_case(0; "empty list")]
#[test_case(3; "short list")]
#[test_case(25; "long list")]
#[tokio::test]
async fn test_previous_on_first_page_is_out_of_bounds(n: u64) {
    let (mut paginator, source) = paginator(10, n);

    let err = paginator.previous().await.unwrap_err();
    assert!(matches!(err, Error::OutOfBounds { page: -1, .. }));
    assert_eq!(paginator.current_page(), 0);
    assert_eq!(source.item_requests(), 0);
}

#[tokio::test]
async fn test_exact_multiple_ends_on_empty_page() {
    let (mut paginator, _) = paginator(10, 20);

    paginator.next().await.unwrap();
    assert!(paginator.has_next());

    let last = paginator.next().await.unwrap();
    assert!(last.is_empty());
    assert_eq!(paginator.current_page(), 2);
    assert!(!paginator.has_next());

    assert!(paginator.next().await.unwrap_err().is_out_of_bounds());
}

// ============================================================================
// Property Tests
// ============================================================================

#[test_case(10, 25)]
#[test_case(10, 20)]
#[test_case(5, 3)]
#[test_case(1, 4)]
#[test_case(7, 50)]
#[tokio::test]
async fn test_load_current_page_lengths(page_size: usize, n: u64) {
    let (mut paginator, _) = paginator(page_size, n);
    let n = n as usize;

    for p in 0..=paginator.total_pages() {
        if p > 0 {
            paginator.next().await.unwrap();
        }
        assert_eq!(paginator.current_page(), p);

        let items = paginator.load_current().await.unwrap();
        let start = p * page_size;
        let expected = page_size.min(n.saturating_sub(start));
        assert_eq!(items.len(), expected, "page {p}");

        let expected_ids: Vec<ItemId> = (start..start + expected).map(|i| i as u64 + 1).collect();
        assert_eq!(ids_of(&items), expected_ids);
    }
}

#[test_case(10, 25)]
#[test_case(3, 10)]
#[test_case(4, 8)]
#[tokio::test]
async fn test_next_then_previous_round_trip(page_size: usize, n: u64) {
    let (mut paginator, _) = paginator(page_size, n);

    while paginator.has_next() {
        let index = paginator.current_page();
        let before = paginator.load_current().await.unwrap();

        paginator.next().await.unwrap();
        let back = paginator.previous().await.unwrap();

        assert_eq!(paginator.current_page(), index);
        assert_eq!(back, before);

        paginator.next().await.unwrap();
    }
}

#[test_case(10, 25)]
#[test_case(10, 20)]
#[test_case(2, 9)]
#[tokio::test]
async fn test_has_next_implies_next_succeeds(page_size: usize, n: u64) {
    let (mut paginator, _) = paginator(page_size, n);

    while paginator.has_next() {
        assert!(paginator.next().await.is_ok());
    }
    assert_eq!(paginator.current_page(), paginator.total_pages());

    while paginator.has_previous() {
        assert!(paginator.previous().await.is_ok());
    }
    assert_eq!(paginator.current_page(), 0);
}

#[tokio::test]
async fn test_load_page_does_not_move_cursor() {
    let (paginator, _) = paginator(10, 25);

    let tail = paginator.load_page(2).await.unwrap();
    assert_eq!(ids_of(&tail), (21..=25).collect::<Vec<_>>());
    assert_eq!(paginator.current_page(), 0);

    assert!(paginator.load_page(3).await.unwrap_err().is_out_of_bounds());
}

// ============================================================================
// Failure Tests
// ============================================================================

#[tokio::test]
async fn test_failed_fetch_does_not_move_index() {
    let source = Arc::new(
        StaticSource::new()
            .with_feed(Feed::New, 1..=30)
            .without_item(15),
    );
    let mut paginator = Paginator::new(source, 10).unwrap();
    paginator.set_identifiers((1..=30).collect());

    let err = paginator.next().await.unwrap_err();
    assert!(matches!(err, Error::ItemNotFound { id: 15 }));
    assert!(err.is_fetch_failure());
    assert_eq!(paginator.current_page(), 0);
}

#[tokio::test]
async fn test_failed_previous_does_not_move_index() {
    let source = Arc::new(
        StaticSource::new()
            .with_feed(Feed::New, 1..=30)
            .without_item(3),
    );
    let mut paginator = Paginator::new(source, 10).unwrap();
    paginator.set_identifiers((1..=30).collect());

    paginator.next().await.unwrap();
    assert!(paginator.previous().await.is_err());
    assert_eq!(paginator.current_page(), 1);
}

#[tokio::test]
async fn test_page_timeout() {
    let source = Arc::new(
        StaticSource::new()
            .with_feed(Feed::Best, 1..=4)
            .with_delay(Duration::from_millis(500)),
    );
    let mut paginator = Paginator::new(source, 2)
        .unwrap()
        .with_page_timeout(Duration::from_millis(20));
    paginator.set_identifiers((1..=4).collect());

    let err = paginator.next().await.unwrap_err();
    assert!(matches!(err, Error::Timeout { timeout_ms: 20 }));
    assert_eq!(paginator.current_page(), 0);
}

#[tokio::test]
async fn test_out_of_bounds_makes_no_requests() {
    let (mut paginator, source) = paginator(10, 25);

    paginator.next().await.unwrap();
    paginator.next().await.unwrap();
    let served = source.item_requests();

    assert!(paginator.next().await.is_err());
    assert_eq!(source.item_requests(), served);
}

// ============================================================================
// Reload Tests
// ============================================================================

#[tokio::test]
async fn test_reload_keeps_page_index() {
    let (mut paginator, _) = paginator(10, 25);
    paginator.next().await.unwrap();

    paginator.set_identifiers((1..=40).collect());
    assert_eq!(paginator.current_page(), 1);

    let items = paginator.load_current().await.unwrap();
    assert_eq!(ids_of(&items), (11..=20).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_reload_shorter_list_then_reset() {
    let (mut paginator, _) = paginator(10, 25);
    paginator.next().await.unwrap();
    paginator.next().await.unwrap();

    paginator.set_identifiers((1..=5).collect());
    assert_eq!(paginator.current_page(), 2);
    assert!(paginator.load_current().await.unwrap_err().is_out_of_bounds());
    assert!(paginator.current_identifiers().is_err());

    paginator.reset_page();
    assert_eq!(paginator.current_page(), 0);
    let items = paginator.load_current().await.unwrap();
    assert_eq!(ids_of(&items), vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_load_identifiers_from_source() {
    let source = Arc::new(StaticSource::new().with_feed(Feed::Ask, 100..=112));
    let mut paginator = Paginator::new(Arc::clone(&source), 5).unwrap();

    let count = paginator.load_identifiers(Feed::Ask).await.unwrap();
    assert_eq!(count, 13);
    assert_eq!(paginator.total_pages(), 2);
    assert_eq!(paginator.current_identifiers().unwrap(), &[100, 101, 102, 103, 104]);
    assert_eq!(source.feed_requests(), 1);
}

// ============================================================================
// Sharing Tests
// ============================================================================

#[tokio::test]
async fn test_shared_paginator_serializes_navigation() {
    let (paginator, _) = paginator(5, 30);
    let shared = Arc::new(tokio::sync::Mutex::new(paginator));

    let handles: Vec<_> = (0..3)
        .map(|_| {
            let shared = Arc::clone(&shared);
            tokio::spawn(async move { shared.lock().await.next().await.map(|items| items.len()) })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), 5);
    }
    assert_eq!(shared.lock().await.current_page(), 3);
}

#[test]
fn test_paginator_debug() {
    let (paginator, _) = paginator(10, 25);
    let debug_str = format!("{paginator:?}");
    assert!(debug_str.contains("Paginator"));
    assert!(debug_str.contains("total_pages: 2"));
}
