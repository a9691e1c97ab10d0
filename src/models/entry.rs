//! Listing entries as rendered by the server.

use super::MediaType;

/// One navigable row of the directory listing.
///
/// Entries are immutable once read from the page. They carry no index of
/// their own; position in the [`RowIndex`](crate::core::RowIndex) is the identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Display name without a trailing `/`.
    pub name: String,
    /// Link target exactly as rendered.
    pub href: String,
    /// Whether the entry is a directory (the parent link counts as one).
    pub is_directory: bool,
    /// Whether the entry is the "parent directory" link.
    pub is_parent_link: bool,
}

impl Entry {
    /// Classify a row from its link text and target.
    ///
    /// `marked_parent` is set when the server tagged the row as the parent link.
    pub fn from_link(text: &str, href: &str, marked_parent: bool) -> Self {
        let text = text.trim();
        let is_parent_link = marked_parent || matches!(text, ".." | "../");
        let is_directory = is_parent_link || text.ends_with('/') || href.ends_with('/');
        let name = if text == "/" {
            text
        } else {
            text.strip_suffix('/').unwrap_or(text)
        };

        Self {
            name: name.to_string(),
            href: href.to_string(),
            is_directory,
            is_parent_link,
        }
    }

    /// Whether activating this entry opens the in-page preview.
    pub fn is_video(&self) -> bool {
        !self.is_directory && MediaType::from_path(&self.name).is_some()
    }
}
