//! URL path helpers.
//!
//! All functions work on the path part of a URL as rendered in the listing
//! and never allocate unless they build a new path.

/// Drop a query string and fragment, if any.
pub fn strip_query(url: &str) -> &str {
    url.find(['?', '#']).map_or(url, |i| &url[..i])
}

/// Last path segment (may be empty for paths ending in `/`).
pub fn file_name(path: &str) -> &str {
    let path = strip_query(path);
    path.rsplit('/').next().unwrap_or(path)
}

/// Byte offset of the extension dot within `path`, if the last segment has one.
///
/// Dot-files such as `.hidden` have no extension.
fn extension_dot(path: &str) -> Option<usize> {
    let name = file_name(path);
    let dot = name.rfind('.').filter(|&i| i > 0)?;
    Some(path.len() - name.len() + dot)
}

/// Extension of the last path segment, without the dot.
pub fn extension(path: &str) -> Option<&str> {
    let path = strip_query(path);
    extension_dot(path).map(|i| &path[i + 1..])
}

/// The path with the last segment's extension removed.
///
/// Query and fragment are dropped. A path without an extension is returned
/// unchanged.
pub fn strip_extension(path: &str) -> &str {
    let path = strip_query(path);
    extension_dot(path).map_or(path, |i| &path[..i])
}

/// Parent directory of a location path, with a trailing `/`.
///
/// Returns `None` at the root.
pub fn parent_path(path: &str) -> Option<String> {
    let trimmed = strip_query(path).trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    let cut = trimmed.rfind('/')?;
    Some(format!("{}/", &trimmed[..cut]))
}
