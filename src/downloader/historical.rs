//! Historical-mode downloader capability.

use crate::downloader::Downloader;
use crate::error::DownloadResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Downloader for date-ranged historical data.
///
/// Every operation takes a mandatory start boundary and an optional end
/// boundary. An absent end boundary (`None`) means "through the present
/// moment". Adapters decide how the range maps onto exchange requests;
/// pagination, chunking, and retry are entirely their concern.
#[async_trait]
pub trait HistoricalDownloader: Downloader {
    /// Download trades from `start` until `end`, or until now when `end`
    /// is `None`.
    fn download_trades(
        &self,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    ) -> DownloadResult<Self::Trades>;

    /// Suspending variant of [`download_trades`](Self::download_trades).
    async fn download_trades_async(
        &self,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    ) -> DownloadResult<Self::Trades>;

    /// Download candles from `start` until `end`, or until now when `end`
    /// is `None`.
    fn download_candles(
        &self,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    ) -> DownloadResult<Self::Candles>;

    /// Suspending variant of [`download_candles`](Self::download_candles).
    async fn download_candles_async(
        &self,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    ) -> DownloadResult<Self::Candles>;

    /// Download order-book snapshots from `start` until `end`, or until now
    /// when `end` is `None`.
    fn download_order_books(
        &self,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    ) -> DownloadResult<Self::OrderBooks>;

    /// Suspending variant of [`download_order_books`](Self::download_order_books).
    async fn download_order_books_async(
        &self,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    ) -> DownloadResult<Self::OrderBooks>;
}
