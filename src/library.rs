//! Album library: the data model, the directory scanner and the JSON manifest writer.

mod manifest;
mod model;
mod naming;
mod scan;

pub use manifest::write_manifest;
pub use scan::scan;
