//! Keyboard and pointer focus over the row index.
//!
//! [`FocusController`] is a small state machine over "no row focused" and the
//! valid row positions. Mouse hover and keyboard moves share the same state.
//! Rendering is a projection: every change is pushed to a [`FocusView`]
//! which clears the old marker before setting the new one.

use crate::models::Entry;

/// A requested focus move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusMove {
    /// Down / `j`
    Next,
    /// Up / `k`
    Previous,
    /// Home
    First,
    /// End
    Last,
    /// Pointer hover over a row.
    To(usize),
}

/// Result of a move that changed the focused row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusChange {
    pub previous: Option<usize>,
    pub current: usize,
}

/// Focus state over `len` rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusController {
    len: usize,
    current: Option<usize>,
}

impl FocusController {
    /// Unfocused controller over `len` rows.
    pub fn new(len: usize) -> Self {
        Self { len, current: None }
    }

    /// Whether routed focus keys belong to the listing.
    ///
    /// With rows present a move is consumed even when it clamps, so the page
    /// does not scroll the focused row away. Without rows the browser keeps
    /// the key.
    pub fn handles_moves(&self) -> bool {
        self.len > 0
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Focused position, `-1` when nothing is focused.
    #[cfg(test)]
    pub fn current_index(&self) -> isize {
        self.current
            .and_then(|i| isize::try_from(i).ok())
            .unwrap_or(-1)
    }

    /// Apply a move. Returns the change, or `None` when focus stayed put.
    ///
    /// Moves clamp at both ends; every move is a no-op when there are no rows.
    pub fn apply(&mut self, mv: FocusMove) -> Option<FocusChange> {
        let last = self.len.checked_sub(1)?;
        let target = match (mv, self.current) {
            (FocusMove::Next, None) => 0,
            (FocusMove::Next, Some(i)) => (i + 1).min(last),
            (FocusMove::Previous, None) => last,
            (FocusMove::Previous, Some(i)) => i.saturating_sub(1),
            (FocusMove::First, _) => 0,
            (FocusMove::Last, _) => last,
            (FocusMove::To(i), _) if i <= last => i,
            (FocusMove::To(_), _) => return None,
        };

        if self.current == Some(target) {
            return None;
        }

        let change = FocusChange {
            previous: self.current,
            current: target,
        };
        self.current = Some(target);
        Some(change)
    }
}

/// Visual projection of the focus state.
pub trait FocusView {
    /// Add or remove the focused marker on row `index`.
    fn set_marker(&self, index: usize, focused: bool);

    /// Scroll row `index` into view if it is not visible.
    fn reveal(&self, index: usize);
}

/// Push a focus change to the view: old marker off, new marker on, reveal.
pub fn project(view: &impl FocusView, change: FocusChange) {
    if let Some(previous) = change.previous {
        view.set_marker(previous, false);
    }
    view.set_marker(change.current, true);
    view.reveal(change.current);
}

/// What activating a row does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Open the in-page preview for this media URL.
    Preview(String),
    /// Follow the link with a full navigation.
    Follow(String),
}

impl Activation {
    pub fn for_entry(entry: &Entry) -> Self {
        if entry.is_video() {
            Self::Preview(entry.href.clone())
        } else {
            Self::Follow(entry.href.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::BTreeSet;

    #[derive(Default)]
    struct MarkerView {
        marked: RefCell<BTreeSet<usize>>,
        revealed: RefCell<Vec<usize>>,
    }

    impl FocusView for MarkerView {
        fn set_marker(&self, index: usize, focused: bool) {
            if focused {
                self.marked.borrow_mut().insert(index);
            } else {
                self.marked.borrow_mut().remove(&index);
            }
        }

        fn reveal(&self, index: usize) {
            self.revealed.borrow_mut().push(index);
        }
    }

    fn drive(focus: &mut FocusController, view: &MarkerView, mv: FocusMove) {
        if let Some(change) = focus.apply(mv) {
            project(view, change);
        }
    }

    #[test]
    fn test_initial_state_is_unfocused() {
        let focus = FocusController::new(3);
        assert_eq!(focus.current(), None);
        assert_eq!(focus.current_index(), -1);
    }

    #[test]
    fn test_down_three_times_clamps() {
        let mut focus = FocusController::new(3);
        let mut seen = Vec::new();
        for _ in 0..3 {
            focus.apply(FocusMove::Next);
            seen.push(focus.current_index());
        }
        focus.apply(FocusMove::Next);
        seen.push(focus.current_index());
        assert_eq!(seen, vec![0, 1, 2, 2]);
    }

    #[test]
    fn test_next_and_previous_follow_min_max() {
        for n in 1..6usize {
            for i in 0..n {
                let mut focus = FocusController::new(n);
                focus.apply(FocusMove::To(i));
                focus.apply(FocusMove::Next);
                assert_eq!(focus.current(), Some((i + 1).min(n - 1)));

                let mut focus = FocusController::new(n);
                focus.apply(FocusMove::To(i));
                focus.apply(FocusMove::Previous);
                assert_eq!(focus.current(), Some(i.saturating_sub(1)));
            }
        }
    }

    #[test]
    fn test_boundaries_are_no_ops() {
        let mut focus = FocusController::new(3);
        focus.apply(FocusMove::Last);
        assert_eq!(focus.apply(FocusMove::Next), None);
        focus.apply(FocusMove::First);
        assert_eq!(focus.apply(FocusMove::Previous), None);
        assert_eq!(focus.current(), Some(0));
    }

    #[test]
    fn test_previous_from_unfocused_goes_to_last() {
        let mut focus = FocusController::new(4);
        assert_eq!(
            focus.apply(FocusMove::Previous),
            Some(FocusChange {
                previous: None,
                current: 3
            })
        );
    }

    #[test]
    fn test_home_and_end() {
        let mut focus = FocusController::new(5);
        focus.apply(FocusMove::To(2));
        focus.apply(FocusMove::Last);
        assert_eq!(focus.current(), Some(4));
        focus.apply(FocusMove::First);
        assert_eq!(focus.current(), Some(0));
    }

    #[test]
    fn test_empty_listing_ignores_every_move() {
        let mut focus = FocusController::new(0);
        for mv in [
            FocusMove::Next,
            FocusMove::Previous,
            FocusMove::First,
            FocusMove::Last,
            FocusMove::To(0),
        ] {
            assert_eq!(focus.apply(mv), None);
        }
        assert_eq!(focus.current_index(), -1);
    }

    #[test]
    fn test_clamped_moves_are_still_handled() {
        let mut focus = FocusController::new(3);
        focus.apply(FocusMove::Last);

        assert_eq!(focus.apply(FocusMove::Next), None);
        assert_eq!(focus.apply(FocusMove::Last), None);
        assert!(focus.handles_moves());
        assert!(!FocusController::new(0).handles_moves());
    }

    #[test]
    fn test_hover_out_of_range_is_ignored() {
        let mut focus = FocusController::new(2);
        assert_eq!(focus.apply(FocusMove::To(2)), None);
        assert_eq!(focus.current(), None);
    }

    #[test]
    fn test_at_most_one_marker() {
        let view = MarkerView::default();
        let mut focus = FocusController::new(4);
        let moves = [
            FocusMove::Next,
            FocusMove::To(3),
            FocusMove::Previous,
            FocusMove::Last,
            FocusMove::Next,
            FocusMove::First,
            FocusMove::To(2),
            FocusMove::To(2),
            FocusMove::Previous,
        ];
        for mv in moves {
            drive(&mut focus, &view, mv);
            let marked = view.marked.borrow();
            assert_eq!(marked.len(), 1);
            assert_eq!(marked.iter().next().copied(), focus.current());
        }
    }

    #[test]
    fn test_projection_reveals_new_row() {
        let view = MarkerView::default();
        let mut focus = FocusController::new(3);
        drive(&mut focus, &view, FocusMove::Next);
        drive(&mut focus, &view, FocusMove::Next);
        drive(&mut focus, &view, FocusMove::Next);
        drive(&mut focus, &view, FocusMove::Next);
        assert_eq!(*view.revealed.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_activation_policy() {
        let video = Entry::from_link("movie.mp4", "/v/movie.mp4", false);
        let doc = Entry::from_link("readme.txt", "/v/readme.txt", false);
        let dir = Entry::from_link("docs/", "/v/docs/", false);

        assert_eq!(
            Activation::for_entry(&video),
            Activation::Preview("/v/movie.mp4".to_string())
        );
        assert_eq!(
            Activation::for_entry(&doc),
            Activation::Follow("/v/readme.txt".to_string())
        );
        assert_eq!(
            Activation::for_entry(&dir),
            Activation::Follow("/v/docs/".to_string())
        );
    }
}
