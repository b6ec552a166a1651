//! Placeholder downloader that answers every operation with
//! [`DownloadError::NotImplemented`].

use crate::downloader::{Downloader, HistoricalDownloader, RealTimeDownloader};
use crate::error::{DownloadError, DownloadResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::marker::PhantomData;
use tracing::warn;

/// A downloader skeleton with no concrete overrides.
///
/// `SkeletonDownloader` claims every capability in the taxonomy but fails
/// each invocation with the not-implemented signal. It stands in for a real
/// adapter during wiring and testing, and documents the full operation set a
/// concrete adapter must supply. The container types are free parameters
/// because the skeleton never produces a value of any of them.
pub struct SkeletonDownloader<T, C, B> {
    _containers: PhantomData<fn() -> (T, C, B)>,
}

impl<T, C, B> SkeletonDownloader<T, C, B> {
    /// Create a skeleton downloader.
    pub fn new() -> Self {
        Self {
            _containers: PhantomData,
        }
    }
}

impl<T, C, B> Default for SkeletonDownloader<T, C, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C, B> std::fmt::Debug for SkeletonDownloader<T, C, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkeletonDownloader").finish()
    }
}

fn unimplemented_op<T>(operation: &'static str) -> DownloadResult<T> {
    warn!(operation, "downloader operation invoked without a concrete override");
    Err(DownloadError::not_implemented(operation))
}

#[async_trait]
impl<T, C, B> Downloader for SkeletonDownloader<T, C, B>
where
    T: Send,
    C: Send,
    B: Send,
{
    type Trades = T;
    type Candles = C;
    type OrderBooks = B;

    fn check_exchange_availability(&self) -> DownloadResult<bool> {
        unimplemented_op("check_exchange_availability")
    }

    async fn check_exchange_availability_async(&self) -> DownloadResult<bool> {
        unimplemented_op("check_exchange_availability_async")
    }
}

#[async_trait]
impl<T, C, B> HistoricalDownloader for SkeletonDownloader<T, C, B>
where
    T: Send,
    C: Send,
    B: Send,
{
    fn download_trades(
        &self,
        _start: DateTime<Utc>,
        _end: Option<DateTime<Utc>>,
    ) -> DownloadResult<T> {
        unimplemented_op("download_trades")
    }

    async fn download_trades_async(
        &self,
        _start: DateTime<Utc>,
        _end: Option<DateTime<Utc>>,
    ) -> DownloadResult<T> {
        unimplemented_op("download_trades_async")
    }

    fn download_candles(
        &self,
        _start: DateTime<Utc>,
        _end: Option<DateTime<Utc>>,
    ) -> DownloadResult<C> {
        unimplemented_op("download_candles")
    }

    async fn download_candles_async(
        &self,
        _start: DateTime<Utc>,
        _end: Option<DateTime<Utc>>,
    ) -> DownloadResult<C> {
        unimplemented_op("download_candles_async")
    }

    fn download_order_books(
        &self,
        _start: DateTime<Utc>,
        _end: Option<DateTime<Utc>>,
    ) -> DownloadResult<B> {
        unimplemented_op("download_order_books")
    }

    async fn download_order_books_async(
        &self,
        _start: DateTime<Utc>,
        _end: Option<DateTime<Utc>>,
    ) -> DownloadResult<B> {
        unimplemented_op("download_order_books_async")
    }
}

#[async_trait]
impl<T, C, B> RealTimeDownloader for SkeletonDownloader<T, C, B>
where
    T: Send,
    C: Send,
    B: Send,
{
    fn download_trades(&self) -> DownloadResult<T> {
        unimplemented_op("download_trades")
    }

    async fn download_trades_async(&self) -> DownloadResult<T> {
        unimplemented_op("download_trades_async")
    }

    fn download_candles(&self) -> DownloadResult<C> {
        unimplemented_op("download_candles")
    }

    async fn download_candles_async(&self) -> DownloadResult<C> {
        unimplemented_op("download_candles_async")
    }

    fn download_order_books(&self) -> DownloadResult<B> {
        unimplemented_op("download_order_books")
    }

    async fn download_order_books_async(&self) -> DownloadResult<B> {
        unimplemented_op("download_order_books_async")
    }
}
