use std::path::PathBuf;

use clap::Parser;

/// Catalog a folder of album directories into a JSON manifest for a web music player.
///
/// Every flag is optional; unset values come from the config file, the
/// environment (`ALBUMDEX__SECTION__KEY`) or built-in defaults.
#[derive(Debug, Default, Parser)]
#[command(name = "albumdex", version, long_about = None)]
pub struct Cli {
    /// Folder containing one subfolder per album
    pub root: Option<PathBuf>,

    /// Prefix for every track URL, used verbatim (include the trailing slash)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Manifest file name, written inside the album root
    #[arg(short, long, value_name = "NAME")]
    pub output: Option<String>,

    /// Track file extension; repeat to accept several (replaces the configured list)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip dot-prefixed albums and tracks
    #[arg(long)]
    pub skip_hidden: bool,

    /// Do not treat symlinked directories as albums
    #[arg(long)]
    pub no_follow_links: bool,

    /// Log each album decision to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
