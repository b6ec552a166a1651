//! Downloader capability taxonomy.
//!
//! The taxonomy has two levels. [`Downloader`] is the base capability set:
//! the opaque result-container types and the exchange-availability check,
//! the check in blocking and suspending form. The two mode traits extend it
//! with the download operations themselves:
//!
//! - [`HistoricalDownloader`] — date-ranged retrieval with a mandatory start
//!   boundary and an optional end boundary (`None` = up to now).
//! - [`RealTimeDownloader`] — retrieval with an implicit start of "now" and
//!   no end boundary.
//!
//! [`SkeletonDownloader`] implements both modes and fails every operation
//! with the not-implemented signal; it is the starting point for concrete
//! exchange adapters.

pub mod base;
pub mod historical;
pub mod real_time;
pub mod skeleton;

pub use base::Downloader;
pub use historical::HistoricalDownloader;
pub use real_time::RealTimeDownloader;
pub use skeleton::SkeletonDownloader;
