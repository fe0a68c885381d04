//! Shared utilities: float formatting, topology naming, interactive prompts.

pub mod float;
pub mod naming;
pub mod prompt;

pub use float::format_python_float;
pub use naming::{output_file_name, topology_name};
pub use prompt::{ask, parse_flag};
