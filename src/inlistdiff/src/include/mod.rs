// inlistdiff/src/include/mod.rs

pub mod resolver;

pub use resolver::{extra_inlists, resolve_inlist_path, resolve_namelist};
