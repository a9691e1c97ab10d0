//! Bridge between the server-rendered listing table and the focus state.
//!
//! Rows are read once at start-up into a [`RowIndex`]; which rows count is
//! decided by [`RawRow::entry`]. Elements are not kept around; they are
//! looked up again by position whenever the view changes.

use leptos::logging::log;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::app::AppContext;
use crate::config::dom::{FOCUSED_CLASS, PARENT_ROW_CLASS, ROW_LINK_SELECTOR, ROW_SELECTOR};
use crate::core::{FocusMove, FocusView, RawRow, RowIndex};
use crate::utils::dom;

/// A `<tr>` of the listing and what was read from it.
struct DomRow {
    row: Element,
    link: Option<Element>,
    raw: RawRow,
}

/// Every candidate row of the table, in document order.
fn read_rows() -> Vec<DomRow> {
    let Some(nodes) = dom::document().and_then(|d| d.query_selector_all(ROW_SELECTOR).ok())
    else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i)?.dyn_into::<Element>().ok())
        .map(|row| {
            let link = row.query_selector(ROW_LINK_SELECTOR).ok().flatten();
            let raw = RawRow {
                in_thead: matches!(row.closest("thead"), Ok(Some(_))),
                has_header_cells: matches!(row.query_selector("th"), Ok(Some(_))),
                link: link.as_ref().map(|l| {
                    (
                        l.text_content().unwrap_or_default(),
                        l.get_attribute("href").unwrap_or_default(),
                    )
                }),
                parent_class: row.class_list().contains(PARENT_ROW_CLASS),
            };
            DomRow { row, link, raw }
        })
        .collect()
}

/// Rows and links of the navigable rows, aligned with the [`RowIndex`].
fn row_elements() -> Vec<(Element, Element)> {
    read_rows()
        .into_iter()
        .filter(|r| r.raw.entry().is_some())
        .filter_map(|r| Some((r.row, r.link?)))
        .collect()
}

/// Build the row index from the current document.
pub fn scan_rows() -> RowIndex {
    let rows = read_rows();
    let index = RowIndex::from_rows(rows.iter().map(|r| &r.raw));
    log!("{} rows indexed", index.len());
    index
}

/// Focus markers on the live table rows.
pub struct DomRows {
    rows: Vec<Element>,
}

impl DomRows {
    pub fn current() -> Self {
        Self {
            rows: row_elements().into_iter().map(|(row, _)| row).collect(),
        }
    }
}

impl FocusView for DomRows {
    fn set_marker(&self, index: usize, focused: bool) {
        let Some(row) = self.rows.get(index) else {
            return;
        };
        let classes = row.class_list();
        let _ = if focused {
            classes.add_1(FOCUSED_CLASS)
        } else {
            classes.remove_1(FOCUSED_CLASS)
        };
    }

    fn reveal(&self, index: usize) {
        if let Some(row) = self.rows.get(index) {
            dom::reveal(row);
        }
    }
}

/// Hover focus and video click interception on every indexed row.
///
/// Modified clicks (new tab, download) are left to the browser.
/// Listeners live as long as the page, so their closures are leaked.
pub fn attach_row_handlers(ctx: AppContext) {
    for (index, (row, link)) in row_elements().into_iter().enumerate() {
        let hover = Closure::wrap(Box::new(move || {
            ctx.listing.apply(FocusMove::To(index));
        }) as Box<dyn Fn()>);
        let _ = row.add_event_listener_with_callback("mouseenter", hover.as_ref().unchecked_ref());
        hover.forget();

        let click = Closure::wrap(Box::new(move |ev: MouseEvent| {
            let modified = ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key();
            if !modified && ctx.listing.is_video(index) {
                ev.prevent_default();
                ctx.listing.apply(FocusMove::To(index));
                ctx.activate(index);
            }
        }) as Box<dyn Fn(MouseEvent)>);
        let _ = link.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
        click.forget();
    }
}
