//! On-disk table cache for Loglens.
//!
//! Tables are stored as CSV files with a header row, one file per project:
//! ```text
//! <cache dir>/
//! ├── 12.csv
//! ├── 57.csv
//! └── ...
//! ```
//!
//! A cached table is refreshed by fetching only rows created after its
//! watermark (the maximum row timestamp) and appending them.

mod error;
mod store;

pub use error::{CacheError, CacheResult};
pub use store::{CacheStore, CachedTable};
