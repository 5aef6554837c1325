// Wave-based batching: bounded group sizes, bounded concurrency, strict
// join-then-merge per wave, all-or-nothing failure.

#[path = "../common/mock_api.rs"]
mod mock_api;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use mock_api::{line, MockCommerceApi};
use prestalytics::core::AppError;
use prestalytics::modules::batching::{BatchFetcher, MAX_IDS_PER_BATCH};

fn ids(count: u64) -> Vec<u64> {
    (1..=count).collect()
}

#[tokio::test]
async fn test_empty_input_issues_no_requests() {
    let api = Arc::new(MockCommerceApi::new());
    let fetcher = BatchFetcher::new(api.clone(), 50, 5);

    let lines = fetcher.fetch_lines_for_orders(&[], None).await.unwrap();

    assert!(lines.is_empty());
    assert_eq!(api.line_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_ids_split_into_contiguous_groups() {
    let api = Arc::new(MockCommerceApi::new());
    let fetcher = BatchFetcher::new(api.clone(), 50, 5);

    fetcher.fetch_lines_for_orders(&ids(120), None).await.unwrap();

    assert_eq!(api.line_calls.load(Ordering::SeqCst), 3);
    assert_eq!(*api.seen_group_sizes.lock().unwrap(), vec![50, 50, 20]);
}

#[tokio::test]
async fn test_group_size_clamped_to_url_safety_ceiling() {
    let api = Arc::new(MockCommerceApi::new());
    // misconfigured far above the hard cap
    let fetcher = BatchFetcher::new(api.clone(), 10_000, 5);

    fetcher.fetch_lines_for_orders(&ids(500), None).await.unwrap();

    let sizes = api.seen_group_sizes.lock().unwrap().clone();
    assert_eq!(sizes, vec![MAX_IDS_PER_BATCH, MAX_IDS_PER_BATCH, 100]);
}

#[tokio::test]
async fn test_wave_concurrency_is_bounded() {
    let api = Arc::new(MockCommerceApi::new());
    // 12 groups of 10 ids, waves of 3
    let fetcher = BatchFetcher::new(api.clone(), 10, 3);

    fetcher.fetch_lines_for_orders(&ids(120), None).await.unwrap();

    assert_eq!(api.line_calls.load(Ordering::SeqCst), 12);
    let peak = api.peak_in_flight_line_calls.load(Ordering::SeqCst);
    assert!(peak <= 3, "peak concurrency {} exceeded the wave size", peak);
    assert!(peak >= 2, "waves never overlapped requests (peak {})", peak);
}

#[tokio::test]
async fn test_results_flatten_across_groups() {
    let all_lines: Vec<_> = (1..=120)
        .map(|order_id| {
            line(
                order_id * 10,
                order_id,
                42,
                "Widget",
                1,
                "10.00",
                "8.33",
                "10.00",
            )
        })
        .collect();

    let api = Arc::new(MockCommerceApi::new().with_lines(all_lines));
    let fetcher = BatchFetcher::new(api.clone(), 50, 2);

    let fetched = fetcher.fetch_lines_for_orders(&ids(120), None).await.unwrap();

    assert_eq!(fetched.len(), 120);
    let mut seen_orders: Vec<u64> = fetched.iter().map(|l| l.id_order).collect();
    seen_orders.sort_unstable();
    seen_orders.dedup();
    assert_eq!(seen_orders.len(), 120);
}

#[tokio::test]
async fn test_product_filter_reaches_every_group() {
    let api = Arc::new(MockCommerceApi::new());
    let fetcher = BatchFetcher::new(api.clone(), 50, 5);

    fetcher
        .fetch_lines_for_orders(&ids(120), Some(42))
        .await
        .unwrap();

    let filters = api.seen_product_filters.lock().unwrap().clone();
    assert_eq!(filters, vec![Some(42), Some(42), Some(42)]);
}

#[tokio::test]
async fn test_group_failure_aborts_whole_fetch() {
    let api = Arc::new(MockCommerceApi::new().failing_line_fetches());
    let fetcher = BatchFetcher::new(api.clone(), 10, 3);

    let result = fetcher.fetch_lines_for_orders(&ids(100), None).await;

    assert!(matches!(result, Err(AppError::Remote(_))));
}

#[tokio::test]
async fn test_zero_batch_size_falls_back_to_one() {
    let api = Arc::new(MockCommerceApi::new());
    let fetcher = BatchFetcher::new(api.clone(), 0, 0);

    fetcher.fetch_lines_for_orders(&ids(3), None).await.unwrap();

    assert_eq!(*api.seen_group_sizes.lock().unwrap(), vec![1, 1, 1]);
}
