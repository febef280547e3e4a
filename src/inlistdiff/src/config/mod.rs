// inlistdiff/src/config/mod.rs

pub mod mesa_dir;
pub mod settings;

pub use mesa_dir::MesaDir;
pub use settings::{OutputFormat, Settings};
