//! Plain value objects and JSON helpers.
//!
//! # Usage
//!
//! ```
//! use objects::{Rectangle, from_json, to_json};
//!
//! let r = Rectangle::new(10.0, 20.0);
//! assert_eq!(r.area(), 200.0);
//!
//! let json = to_json(&r).unwrap();
//! assert_eq!(json, r#"{"width":10,"height":20}"#);
//!
//! let back: Rectangle = from_json(&json).unwrap();
//! assert_eq!(back, r);
//! ```

pub mod error;
pub mod json;
pub mod rectangle;

// Re-export main types at crate root
pub use error::ObjectError;
pub use json::{from_json, to_json};
pub use rectangle::Rectangle;
