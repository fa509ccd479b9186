//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where configuration and logs live and expands user-supplied
//! paths.

pub mod paths;

pub use paths::{default_config_path, display_name, expand_tilde, get_config_dir, get_data_dir};
