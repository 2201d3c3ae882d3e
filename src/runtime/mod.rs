use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{Settings, resolve_config_path};
use crate::error::Result;
use crate::library::{scan, write_manifest};
use crate::logging;

mod settings;

/// What a finished run produced.
#[derive(Debug)]
pub struct Summary {
    pub path: PathBuf,
    pub file_name: String,
    pub albums: usize,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Library JSON generated at '{}' with {} albums. Upload '{}' alongside the album files.",
            self.path.display(),
            self.albums,
            self.file_name
        )
    }
}

pub fn run(cli: &Cli) -> Result<Summary> {
    let settings = settings::load_settings(cli)?;
    logging::init(&settings.log.level);
    if let Some(path) = cli.config.clone().or_else(resolve_config_path) {
        tracing::debug!(path = %path.display(), "config file");
    }
    catalog(&settings)
}

/// Scan the configured root and write its manifest.
pub fn catalog(settings: &Settings) -> Result<Summary> {
    let root = &settings.library.root;
    tracing::debug!(root = %root.display(), base_url = %settings.library.base_url, "scanning");

    let library = scan(root, &settings.library)?;
    let path = write_manifest(root, &settings.output.file_name, &library)?;

    Ok(Summary {
        path,
        file_name: settings.output.file_name.clone(),
        albums: library.album_count(),
    })
}
