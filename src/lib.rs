//! Core library for `createfile`.
//!
//! Creates a file under a desired name; when that name is taken, the first free
//! numbered variant is used instead (`report.txt` -> `report(1).txt` -> `report(2).txt`).
//!
//! Layout:
//! - `naming`: stem/extension split and numbered candidate generation
//! - `fs_ops`: the allocator, the `NameStore` seam and `create_unique`
//! - `config` / `cli`: settings from defaults, XML and flags
//! - `platform`, `output`, `shutdown`: OS helpers, user messages, signal flag

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod naming;
pub mod output;
pub mod platform;
pub mod shutdown;

pub use config::{
    Config, LogLevel, config_path, create_template_config, default_config_path, default_log_path,
    load_config, load_config_from_xml_path, path_has_symlink_ancestor,
};
pub use errors::CreateFileError;
pub use fs_ops::{
    Allocator, Created, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_NAME_LEN, DirStore, NameStore,
    create_unique,
};
pub use naming::{DotfilePolicy, ParsedName, decimal, generate, split_name};
