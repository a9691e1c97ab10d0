//! Ordered index of the listing's navigable rows.

use crate::models::Entry;
use crate::utils::path;

/// One `<tr>` of the rendered listing table, as read from the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRow {
    /// The row sits inside `<thead>`.
    pub in_thead: bool,
    /// The row has `<th>` cells.
    pub has_header_cells: bool,
    /// Text and `href` of the row's link, if it has one.
    pub link: Option<(String, String)>,
    /// The server marked the row with the parent-directory class.
    pub parent_class: bool,
}

impl RawRow {
    /// The entry this row contributes. Header rows and rows without a link
    /// are not navigable.
    pub fn entry(&self) -> Option<Entry> {
        if self.in_thead || self.has_header_cells {
            return None;
        }
        let (text, href) = self.link.as_ref()?;
        Some(Entry::from_link(text, href, self.parent_class))
    }
}

/// Navigable entries in server order, built once per page load.
///
/// Never reordered or shrunk after construction; the position of an entry is
/// the only identity the focus controller works with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowIndex {
    entries: Vec<Entry>,
}

impl RowIndex {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Index the navigable rows of a table, keeping their order.
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a RawRow>) -> Self {
        rows.into_iter().filter_map(RawRow::entry).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Target of the rendered parent-directory link, if the page has one.
    pub fn parent_href(&self) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.is_parent_link)
            .map(|e| e.href.as_str())
    }

    /// Where "go to parent" leads from `location_path`.
    ///
    /// Prefers the rendered parent link and falls back to trimming the last
    /// segment of the current location. `None` at the root.
    pub fn parent_target(&self, location_path: &str) -> Option<String> {
        self.parent_href()
            .map(String::from)
            .or_else(|| path::parent_path(location_path))
    }
}

impl FromIterator<Entry> for RowIndex {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
