use std::fs;
use std::io;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::config::LibrarySettings;
use crate::error::{CatalogError, Result};

use super::model::{Album, Library, Track};
use super::naming::{has_audio_extension, title_from_filename, track_url};

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Names of the entries directly inside `dir` that pass `keep`.
///
/// Failing to open `dir` itself is fatal. A single unreadable entry (for example a
/// dangling symlink while following links) is logged and skipped.
fn list_children(
    dir: &Path,
    follow_links: bool,
    keep: impl Fn(&DirEntry) -> bool,
) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(follow_links)
    {
        let entry = match entry {
            Ok(e) => e,
            Err(err) if err.depth() > 0 => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                continue;
            }
            Err(err) => return Err(CatalogError::from_walk(dir, err)),
        };
        if !keep(&entry) {
            continue;
        }
        match entry.file_name().to_str() {
            Some(name) => names.push(name.to_string()),
            None => tracing::warn!(
                path = %entry.path().display(),
                "skipping entry whose name is not valid UTF-8"
            ),
        }
    }
    Ok(names)
}

/// Scan `root` for album directories and their tracks.
///
/// Only direct children of `root` are albums and only direct children of an album
/// are tracks; nothing deeper is visited.
pub fn scan(root: &Path, settings: &LibrarySettings) -> Result<Library> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(CatalogError::NotADirectory {
                path: root.to_path_buf(),
            });
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CatalogError::RootNotFound {
                path: root.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(CatalogError::Read {
                path: root.to_path_buf(),
                source,
            });
        }
    }

    let album_names = list_children(root, settings.follow_links, |e| e.file_type().is_dir())?;

    let mut listed: Vec<(String, Vec<String>)> = Vec::with_capacity(album_names.len());
    for name in album_names {
        if !settings.include_hidden && is_hidden(&name) {
            continue;
        }
        let files = list_children(&root.join(&name), false, |_| true)?;
        listed.push((name, files));
    }

    Ok(build_library(listed, settings))
}

/// Turn `(album name, file names)` listings into a sorted `Library`.
///
/// Files not matching the configured extensions are dropped and albums left
/// without tracks are omitted.
pub fn build_library<I>(listing: I, settings: &LibrarySettings) -> Library
where
    I: IntoIterator<Item = (String, Vec<String>)>,
{
    let mut listing: Vec<(String, Vec<String>)> = listing.into_iter().collect();
    listing.sort_by(|a, b| a.0.cmp(&b.0));

    let mut albums = Vec::new();
    for (name, mut files) in listing {
        if !settings.include_hidden && is_hidden(&name) {
            continue;
        }
        files.sort();

        let tracks: Vec<Track> = files
            .iter()
            .filter(|f| settings.include_hidden || !is_hidden(f))
            .filter(|f| has_audio_extension(f, &settings.extensions))
            .map(|f| Track {
                title: title_from_filename(f).to_string(),
                url: track_url(&settings.base_url, &name, f),
            })
            .collect();

        if tracks.is_empty() {
            tracing::debug!(album = %name, "no tracks, skipping album");
            continue;
        }
        tracing::debug!(album = %name, tracks = tracks.len(), "cataloged album");
        albums.push(Album { name, tracks });
    }

    Library { albums }
}
