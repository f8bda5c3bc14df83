//! padtable: SDL gamepad database to standard-gamepad lookup table.
//!
//! Reads the community `gamecontrollerdb.txt` format (one controller per line,
//! `control:source` fields) and produces a table keyed by `vendor:product` whose
//! values say, for every control of the standard gamepad layout, which physical
//! button or half-axis implements it.
//!
//! ```
//! let db = "030000005e0400008e02000014010000,X360 Controller,a:b0,leftx:a0,dpup:h0.1,";
//! let table = padtable::convert_str(db).unwrap();
//! assert_eq!(
//!     table.get("045e:028e"),
//!     Some("b0 x x x x x x x x x x x a2- x x x x a0- a0+ x x x x x x"),
//! );
//! ```

pub mod database;
pub mod error;
pub mod ident;
pub mod logger;
pub mod resolve;
pub mod source;
pub mod standard;
pub mod table;

pub use database::*;
pub use error::*;
pub use ident::*;
pub use resolve::*;
pub use source::*;
pub use standard::*;
pub use table::*;
