//! Contract tests for the skeleton downloader.
//!
//! Every operation in the taxonomy, blocking and suspending, historical and
//! real-time, must fail with the not-implemented signal naming the invoked
//! operation when no concrete override exists.

use chrono::{TimeZone, Utc};
use market_downloader_core::{
    DownloadError, Downloader, HistoricalDownloader, RealTimeDownloader, SkeletonDownloader,
};

type Skeleton = SkeletonDownloader<Vec<u8>, Vec<u8>, Vec<u8>>;

fn assert_not_implemented<T>(result: Result<T, DownloadError>, expected_op: &str) {
    match result {
        Err(DownloadError::NotImplemented { operation }) => {
            assert_eq!(operation, expected_op);
        }
        Err(other) => panic!("expected NotImplemented, got {other:?}"),
        Ok(_) => panic!("expected {expected_op} to fail"),
    }
}

#[test]
fn test_availability_check_not_implemented() {
    let skeleton = Skeleton::new();
    assert_not_implemented(
        skeleton.check_exchange_availability(),
        "check_exchange_availability",
    );
}

#[tokio::test]
async fn test_availability_check_async_not_implemented() {
    let skeleton = Skeleton::new();
    assert_not_implemented(
        skeleton.check_exchange_availability_async().await,
        "check_exchange_availability_async",
    );
}

/// Historical operations accept a start boundary and an absent end boundary;
/// the skeleton rejects the invocation itself, not the arguments.
#[test]
fn test_historical_operations_not_implemented() {
    let skeleton = Skeleton::new();
    let start = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2022, 6, 1, 0, 0, 0).unwrap();

    assert_not_implemented(
        HistoricalDownloader::download_trades(&skeleton, start, None),
        "download_trades",
    );
    assert_not_implemented(
        HistoricalDownloader::download_candles(&skeleton, start, Some(end)),
        "download_candles",
    );
    assert_not_implemented(
        HistoricalDownloader::download_order_books(&skeleton, start, None),
        "download_order_books",
    );
}

#[tokio::test]
async fn test_historical_operations_async_not_implemented() {
    let skeleton = Skeleton::new();
    let start = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();

    assert_not_implemented(
        HistoricalDownloader::download_trades_async(&skeleton, start, None).await,
        "download_trades_async",
    );
    assert_not_implemented(
        HistoricalDownloader::download_candles_async(&skeleton, start, None).await,
        "download_candles_async",
    );
    assert_not_implemented(
        HistoricalDownloader::download_order_books_async(&skeleton, start, None).await,
        "download_order_books_async",
    );
}

/// Real-time operations take zero temporal arguments.
#[test]
fn test_real_time_operations_not_implemented() {
    let skeleton = Skeleton::new();

    assert_not_implemented(
        RealTimeDownloader::download_trades(&skeleton),
        "download_trades",
    );
    assert_not_implemented(
        RealTimeDownloader::download_candles(&skeleton),
        "download_candles",
    );
    assert_not_implemented(
        RealTimeDownloader::download_order_books(&skeleton),
        "download_order_books",
    );
}

#[tokio::test]
async fn test_real_time_operations_async_not_implemented() {
    let skeleton = Skeleton::new();

    assert_not_implemented(
        RealTimeDownloader::download_trades_async(&skeleton).await,
        "download_trades_async",
    );
    assert_not_implemented(
        RealTimeDownloader::download_candles_async(&skeleton).await,
        "download_candles_async",
    );
    assert_not_implemented(
        RealTimeDownloader::download_order_books_async(&skeleton).await,
        "download_order_books_async",
    );
}
