// inlistrs/src/lib.rs

//! A Rust-native reader for MESA inlists.
//!
//! This library provides functionality to:
//! - Normalize inlist values (Fortran reals, logicals, raw strings)
//! - Parse single `name = value ! comment` lines
//! - Read one namelist section (`&controls` ... `/`) out of an inlist
//! - Read whole `.defaults` files shipped with a MESA installation

pub mod error;
pub mod line;
pub mod namelist;
pub mod options;
pub mod reader;
pub mod value;

pub use error::{InlistError, Result};
pub use line::parse_line;
pub use namelist::{NamelistKind, Section};
pub use options::{unquote, OptionMap};
pub use reader::{parse_defaults, parse_section, read_defaults, read_section, NamelistRead};
pub use value::InlistValue;
