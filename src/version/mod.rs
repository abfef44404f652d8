//! Version parsing and comparison engine
//!
//! Turns loosely structured version strings (`1.22.3b1`, `1.0.0-rc.1`) into
//! [`Version`] values and orders them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  raw &str   │────▶│   Parser    │────▶│   Version   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │   Latest    │◀────│  Comparator │
//!                     │ (helpers)   │     │  (Ordering) │
//!                     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`parser`]: Regex grammar and [`parse_version`]
//! - [`compare`]: Total order over versions
//! - [`latest`]: Update checks and sorting built on the order
//! - [`types`]: [`Version`] and [`PreReleaseAtom`]
//! - [`error`]: [`VersionError`]

pub mod compare;
pub mod error;
pub mod latest;
pub mod parser;
pub mod types;

pub use compare::{compare, compare_str};
pub use error::VersionError;
pub use latest::{CompareResult, SortOptions, SortOrder, compare_to_latest, sort_versions};
pub use parser::parse_version;
pub use types::{PreReleaseAtom, Version};
