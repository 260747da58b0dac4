//! # plib
//!
//! **Tier 0 (Core Types)**
//!
//! A strict integer 2D point value type.
//!
//! ## What belongs here
//! * The `Point` value type and its arithmetic
//! * Display/JSON representations and their byte-level contract
//! * The `PointError` taxonomy
//!
//! ## What does NOT belong here
//! * Floating-point or N-dimensional vectors
//! * Alternative distance metrics
//! * Any I/O beyond writing JSON into a caller-provided writer
//!
//! ## JSON contract
//!
//! A point serializes as `{"x": <int>, "y": <int>}`: keys in that order, one
//! space after each colon and after each separating comma.
//!
//! ```
//! use plib::Point;
//!
//! let p = Point::new(3, 4);
//! assert_eq!(p.to_json(), r#"{"x": 3, "y": 4}"#);
//! assert_eq!(Point::from_json(&p.to_json()).unwrap(), p);
//! assert_eq!(p.to_string(), "Point(3, 4)");
//! ```

#![forbid(unsafe_code)]

mod error;
mod json;
mod point;

pub use error::PointError;
pub use json::SpacedFormatter;
pub use point::Point;
