use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{CatalogError, Result};

use super::model::Library;

/// Render the library as pretty JSON: two-space indent, non-ASCII left as is,
/// no trailing newline.
pub fn to_json(library: &Library) -> Result<String> {
    Ok(serde_json::to_string_pretty(library)?)
}

/// Write the manifest to `root/file_name`, replacing any previous file.
pub fn write_manifest(root: &Path, file_name: &str, library: &Library) -> Result<PathBuf> {
    let path = root.join(file_name);
    let json = to_json(library)?;

    let write_err = |source| CatalogError::Write {
        path: path.clone(),
        source,
    };
    let file = File::create(&path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    out.write_all(json.as_bytes()).map_err(write_err)?;
    out.flush().map_err(write_err)?;

    tracing::info!(
        path = %path.display(),
        albums = library.album_count(),
        tracks = library.track_count(),
        "wrote manifest"
    );
    Ok(path)
}
