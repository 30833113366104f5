//! # region-dist
//!
//! Shows how the regions of a PD-managed key-value cluster are spread over
//! its stores:
//! - Decodes memcomparable region boundaries for display
//! - Lays stores out as columns and regions as rows, sorted by start key
//! - Marks leader, follower and learner peers with colored glyphs
//! - Exports the same grid, or hot-region statistics, as a spreadsheet
//!
//! ## Output
//!
//! ```text
//!      S1  S2  S3  start               end
//! R2   ▀   ▀   ▀                       748000000000000005
//! R14  ▀   ▀   ▀   748000000000000005  748000000000000007
//! R20  ▀   ▀       748000000000000007
//! ```
//!
//! Leader peers are red, learners yellow and followers blue.
//!
//! ## Usage
//!
//! ```bash
//! # Print the region map
//! region-dist -u http://127.0.0.1:2379 region print
//!
//! # Only show some stores
//! region-dist --stores 1,4 region print
//!
//! # Export to CSV / JSON
//! region-dist region export --output region.csv
//! region-dist hot read --format json
//!
//! # Interactive shell
//! region-dist -i
//! ```

pub mod common;
pub mod export;
pub mod grid;
pub mod ops;
pub mod pd;
pub mod shell;
pub mod topology;

// Re-export commonly used types
pub use common::{Config, Error, ExportFormat, Result};
pub use grid::{Cell, GridLayout, Renderer};
pub use pd::{HotKind, PdClient};
pub use topology::{decode_key, RegionInfo, StoreInfo, TopologyIndex};

/// Current version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
