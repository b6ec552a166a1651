//! Base capability set shared by every downloader mode.

use crate::error::DownloadResult;
use async_trait::async_trait;

/// Capabilities every market-data downloader must supply.
///
/// The trait fixes the result containers as opaque associated types: this
/// crate never inspects trades, candles, or order books, it only routes them
/// from an adapter to its caller. Mode-specific download operations live on
/// the sub-traits [`HistoricalDownloader`](crate::downloader::HistoricalDownloader)
/// and [`RealTimeDownloader`](crate::downloader::RealTimeDownloader), because
/// the two modes disagree on parameter shape.
///
/// Every operation exists in a blocking form and a suspending `_async` form.
/// The blocking form runs to completion before returning; the `_async` form
/// may suspend (e.g. while awaiting network I/O) without blocking other work
/// on the same runtime. No ordering, cancellation, or timeout policy is
/// defined at this layer.
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Container produced by trade downloads.
    type Trades: Send;

    /// Container produced by candle downloads.
    type Candles: Send;

    /// Container produced by order-book downloads.
    type OrderBooks: Send;

    /// Check whether the underlying exchange is currently reachable.
    fn check_exchange_availability(&self) -> DownloadResult<bool>;

    /// Check whether the underlying exchange is currently reachable,
    /// suspending while the probe is in flight.
    async fn check_exchange_availability_async(&self) -> DownloadResult<bool>;
}
