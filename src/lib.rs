//! # Market Downloader Core
//!
//! Abstract contracts for market-data downloader components: adapters that
//! fetch trades, candles, and order-book snapshots from exchanges. This crate
//! defines the capability taxonomy only; it contains no networking, parsing,
//! rate limiting, or persistence. Concrete exchange adapters live in their
//! own crates and implement these traits.
//!
//! ## Capability taxonomy
//!
//! - [`Downloader`] - base capability set: opaque result-container types plus
//!   the exchange-availability check
//! - [`HistoricalDownloader`] - date-ranged downloads with a mandatory start
//!   boundary and an optional end boundary (`None` means "up to now")
//! - [`RealTimeDownloader`] - downloads with an implicit start of "now" and
//!   no end boundary
//!
//! Every operation comes in a blocking form and a suspending `_async` form.
//!
//! ## Quick Start
//!
//! ```
//! use market_downloader_core::{DownloadError, HistoricalDownloader, SkeletonDownloader};
//! use chrono::{TimeZone, Utc};
//!
//! // A skeleton claims every capability but fails each invocation with the
//! // not-implemented signal. Concrete adapters replace it.
//! let skeleton: SkeletonDownloader<Vec<u8>, Vec<u8>, Vec<u8>> = SkeletonDownloader::new();
//!
//! let start = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
//! let err = skeleton.download_trades(start, None).unwrap_err();
//! assert!(matches!(err, DownloadError::NotImplemented { .. }));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Downloader capability traits and the skeleton implementation
pub mod downloader;

/// Error types shared by all downloader operations
pub mod error;

// Re-export commonly used types
pub use downloader::{Downloader, HistoricalDownloader, RealTimeDownloader, SkeletonDownloader};
pub use error::{DownloadError, DownloadResult};
