//! Pure filename helpers. Nothing here touches the file system.

/// Strip the final extension from a file name.
///
/// Leading dots never start an extension, so `.mp3` is returned unchanged
/// while `a.b.mp3` becomes `a.b`.
pub fn title_from_filename(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) if name[..dot].bytes().any(|b| b != b'.') => &name[..dot],
        _ => name,
    }
}

/// Whether `name` ends with `.<ext>` for one of `extensions`, ignoring case.
///
/// Configured values may carry a leading dot or stray whitespace; blank ones are ignored.
pub fn has_audio_extension(name: &str, extensions: &[String]) -> bool {
    let lowered = name.to_lowercase();
    extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_lowercase())
        .filter(|e| !e.is_empty())
        .any(|ext| {
            lowered
                .strip_suffix(ext.as_str())
                .is_some_and(|rest| rest.ends_with('.'))
        })
}

/// `<base><album>/<filename>`, verbatim. No percent-encoding is applied.
pub fn track_url(base: &str, album: &str, filename: &str) -> String {
    format!("{base}{album}/{filename}")
}
