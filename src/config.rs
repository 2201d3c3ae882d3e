//! Configuration loader and schema types.
//!
//! Settings decide where albums are read from, how track URLs are built
//! and where the manifest is written.

mod load;
mod schema;

pub use load::resolve_config_path;
pub use schema::*;

#[cfg(test)]
mod tests;
