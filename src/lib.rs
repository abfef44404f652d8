//! Parse loosely structured version strings (`1.22.3b1`, `1.0.0-rc.1`) and
//! compare them with a total order.
//!
//! ```
//! use vercmp::version::parse_version;
//!
//! let a = parse_version("1.0.0-rc.1").unwrap();
//! let b = parse_version("1.0.0").unwrap();
//! assert!(a < b);
//! ```

pub mod cli;
pub mod config;
pub mod logging;
pub mod version;
