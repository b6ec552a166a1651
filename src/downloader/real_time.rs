//! Real-time-mode downloader capability.

use crate::downloader::Downloader;
use crate::error::DownloadResult;
use async_trait::async_trait;

/// Downloader for live data starting from the present moment.
///
/// Operations take no temporal parameters: the start is implicitly "now" and
/// there is no end boundary. How long an adapter collects before returning a
/// container (one snapshot, a fixed window, until disconnect) is an adapter
/// decision.
#[async_trait]
pub trait RealTimeDownloader: Downloader {
    /// Download trades starting from now.
    fn download_trades(&self) -> DownloadResult<Self::Trades>;

    /// Suspending variant of [`download_trades`](Self::download_trades).
    async fn download_trades_async(&self) -> DownloadResult<Self::Trades>;

    /// Download candles starting from now.
    fn download_candles(&self) -> DownloadResult<Self::Candles>;

    /// Suspending variant of [`download_candles`](Self::download_candles).
    async fn download_candles_async(&self) -> DownloadResult<Self::Candles>;

    /// Download order-book snapshots starting from now.
    fn download_order_books(&self) -> DownloadResult<Self::OrderBooks>;

    /// Suspending variant of [`download_order_books`](Self::download_order_books).
    async fn download_order_books_async(&self) -> DownloadResult<Self::OrderBooks>;
}
