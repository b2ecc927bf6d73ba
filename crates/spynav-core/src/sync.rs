//! Active-index reconciliation and programmatic-scroll coordination.
//!
//! [`SpyState`] owns the two pieces of mutable synchronization state: the
//! active section index and the scroll phase. Scroll-driven evaluation and
//! heading selection both funnel through it; it never touches a viewport
//! itself but hands scroll targets back to the presentation layer.

use tracing::debug;

use crate::geometry::PaneGeometry;
use crate::hooks::SpyHooks;
use crate::visibility;

/// Coordinator state for programmatic scrolling.
///
/// While a selection-driven content animation is in flight, scroll changes
/// reported by the animation itself must not move the active index; the
/// phase carries the target so completion can settle on exactly that
/// section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPhase {
    Idle,
    ProgrammaticScrollInFlight { target: usize },
}

/// Synchronization state shared by the two panes.
pub struct SpyState {
    section_count: usize,
    active: usize,
    phase: ScrollPhase,
    hooks: SpyHooks,
}

impl SpyState {
    /// `section_count` must be nonzero; [`crate::Sections`] guarantees that
    /// for states built from a validated section list.
    pub fn new(section_count: usize, hooks: SpyHooks) -> Self {
        Self {
            section_count,
            active: 0,
            phase: ScrollPhase::Idle,
            hooks,
        }
    }

    /// Replace the callback set. Intended for builder-style construction
    /// before the first event is handled.
    pub fn set_hooks(&mut self, hooks: SpyHooks) {
        self.hooks = hooks;
    }

    pub fn section_count(&self) -> usize {
        self.section_count
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn is_scroll_in_flight(&self) -> bool {
        matches!(self.phase, ScrollPhase::ProgrammaticScrollInFlight { .. })
    }

    /// Entry point for every content-pane scroll change.
    ///
    /// Evaluates the most visible section and reconciles it against the
    /// active index. Returns the index of a heading the navigation pane
    /// should scroll into view, when the new active heading is not fully
    /// visible there. No-op while a programmatic scroll is in flight.
    pub fn handle_content_scroll(
        &mut self,
        content: &PaneGeometry,
        nav: &PaneGeometry,
    ) -> Option<usize> {
        if self.is_scroll_in_flight() {
            return None;
        }
        let candidate = visibility::most_visible(content)?;
        self.reconcile(candidate, nav)
    }

    fn reconcile(&mut self, candidate: usize, nav: &PaneGeometry) -> Option<usize> {
        if candidate == self.active {
            return None;
        }

        debug!(from = self.active, to = candidate, "active section changed");
        self.active = candidate;
        self.hooks.notify_content_visible(candidate);

        // Reveal the heading only when it is not already fully inside the
        // navigation viewport. Unmeasured nav geometry defers the reveal to
        // a later pass.
        let needs_reveal = nav
            .section(candidate)
            .map(|bounds| !bounds.fully_visible(nav.viewport_height))
            .unwrap_or(false);
        needs_reveal.then_some(candidate)
    }

    /// A heading was selected (click, keyboard, or embedder call).
    ///
    /// Fires `on_heading_selected` unconditionally for every in-range
    /// selection. Returns the section the content pane should scroll to,
    /// unless the index is out of range or a programmatic scroll is already
    /// in flight; a selection during an in-flight animation is dropped and
    /// the original target wins.
    pub fn select_section(&mut self, index: usize) -> Option<usize> {
        if index >= self.section_count {
            return None;
        }

        self.hooks.notify_heading_selected(index);

        if let ScrollPhase::ProgrammaticScrollInFlight { target } = self.phase {
            debug!(index, target, "selection ignored, scroll already in flight");
            return None;
        }

        debug!(index, "programmatic scroll started");
        self.phase = ScrollPhase::ProgrammaticScrollInFlight { target: index };
        Some(index)
    }

    /// The programmatic content animation reached its target.
    ///
    /// Settles the active index on the target and returns to idle. The
    /// visibility hook fires only when the index actually changed.
    pub fn programmatic_scroll_done(&mut self) {
        let ScrollPhase::ProgrammaticScrollInFlight { target } = self.phase else {
            return;
        };

        debug!(target, "programmatic scroll finished");
        self.phase = ScrollPhase::Idle;
        if target != self.active {
            self.active = target;
            self.hooks.notify_content_visible(target);
        }
    }
}

impl std::fmt::Debug for SpyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpyState")
            .field("section_count", &self.section_count)
            .field("active", &self.active)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::SectionBounds;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn stacked(heights: &[u16], offset: u16, viewport_height: u16) -> PaneGeometry {
        let total: u16 = heights.iter().sum();
        let mut top = -i32::from(offset);
        let sections = heights
            .iter()
            .map(|&height| {
                let bounds = SectionBounds::new(top, height);
                top += i32::from(height);
                Some(bounds)
            })
            .collect();
        PaneGeometry {
            offset,
            max_offset: total.saturating_sub(viewport_height),
            viewport_height,
            sections,
        }
    }

    /// Nav pane tall enough that every heading is always fully visible.
    fn roomy_nav(count: usize) -> PaneGeometry {
        let heights = vec![1u16; count];
        stacked(&heights, 0, 100)
    }

    fn recorder() -> (Rc<RefCell<Vec<usize>>>, SpyHooks) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let hooks = SpyHooks::new().on_content_visible(move |i| sink.borrow_mut().push(i));
        (seen, hooks)
    }

    #[test]
    fn test_initial_state() {
        let state = SpyState::new(3, SpyHooks::new());
        assert_eq!(state.active_index(), 0);
        assert_eq!(state.phase(), ScrollPhase::Idle);
    }

    #[test]
    fn test_visible_hook_once_per_transition() {
        let (seen, hooks) = recorder();
        let mut state = SpyState::new(3, hooks);
        let heights = [100u16, 100, 100];
        let nav = roomy_nav(3);

        // Scroll continuously through sections 0 -> 1 -> 2. Several scroll
        // events land inside the same dominant range; the hook must fire
        // exactly at the two transitions.
        for offset in [10, 40, 80, 110, 140, 170, 200] {
            state.handle_content_scroll(&stacked(&heights, offset, 100), &nav);
        }

        assert_eq!(*seen.borrow(), vec![1, 2]);
        assert_eq!(state.active_index(), 2);
    }

    #[test]
    fn test_same_candidate_is_noop() {
        let (seen, hooks) = recorder();
        let mut state = SpyState::new(2, hooks);
        let nav = roomy_nav(2);

        state.handle_content_scroll(&stacked(&[100, 100], 0, 50), &nav);
        state.handle_content_scroll(&stacked(&[100, 100], 1, 50), &nav);
        assert!(seen.borrow().is_empty());
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn test_nav_reveal_requested_when_heading_hidden() {
        let mut state = SpyState::new(30, SpyHooks::new());
        // 30 one-row headings in a 10-row nav viewport at offset 0:
        // heading 25 is far below the visible bounds.
        let nav_heights = vec![1u16; 30];
        let nav = stacked(&nav_heights, 0, 10);
        let content_heights = vec![20u16; 30];
        // Deep scroll so section 25 dominates.
        let content = stacked(&content_heights, 25 * 20, 20);

        let reveal = state.handle_content_scroll(&content, &nav);
        assert_eq!(state.active_index(), 25);
        assert_eq!(reveal, Some(25));
    }

    #[test]
    fn test_no_reveal_when_heading_visible() {
        let mut state = SpyState::new(3, SpyHooks::new());
        let nav = roomy_nav(3);
        let reveal = state.handle_content_scroll(&stacked(&[50, 50, 50], 55, 40), &nav);
        assert_ne!(state.active_index(), 0);
        assert_eq!(reveal, None);
    }

    #[test]
    fn test_evaluation_suppressed_while_in_flight() {
        let (seen, hooks) = recorder();
        let mut state = SpyState::new(3, hooks);
        let nav = roomy_nav(3);

        assert_eq!(state.select_section(2), Some(2));
        assert!(state.is_scroll_in_flight());

        // Mid-animation scroll positions sweep across every section; none
        // of them may move the active index.
        for offset in [20, 60, 100, 140, 180] {
            let reveal = state.handle_content_scroll(&stacked(&[100, 100, 100], offset, 100), &nav);
            assert_eq!(reveal, None);
        }
        assert_eq!(state.active_index(), 0);
        assert!(seen.borrow().is_empty());

        state.programmatic_scroll_done();
        assert_eq!(state.active_index(), 2);
        assert_eq!(*seen.borrow(), vec![2]);
        assert_eq!(state.phase(), ScrollPhase::Idle);
    }

    #[test]
    fn test_selection_hook_fires_every_time() {
        let clicks = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&clicks);
        let hooks = SpyHooks::new().on_heading_selected(move |i| sink.borrow_mut().push(i));
        let mut state = SpyState::new(3, hooks);

        state.select_section(2);
        state.programmatic_scroll_done();
        // Re-selecting the already-active heading still notifies.
        state.select_section(2);
        assert_eq!(*clicks.borrow(), vec![2, 2]);
    }

    #[test]
    fn test_reselect_active_does_not_refire_visible_hook() {
        let (seen, hooks) = recorder();
        let mut state = SpyState::new(3, hooks);

        state.select_section(1);
        state.programmatic_scroll_done();
        assert_eq!(*seen.borrow(), vec![1]);

        state.select_section(1);
        state.programmatic_scroll_done();
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_selection_during_flight_ignored() {
        let mut state = SpyState::new(4, SpyHooks::new());

        assert_eq!(state.select_section(3), Some(3));
        // Second selection while animating: dropped, original target wins.
        assert_eq!(state.select_section(1), None);
        assert_eq!(
            state.phase(),
            ScrollPhase::ProgrammaticScrollInFlight { target: 3 }
        );

        state.programmatic_scroll_done();
        assert_eq!(state.active_index(), 3);
    }

    #[test]
    fn test_out_of_range_selection_is_noop() {
        let clicks = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&clicks);
        let hooks = SpyHooks::new().on_heading_selected(move |i| sink.borrow_mut().push(i));
        let mut state = SpyState::new(3, hooks);

        assert_eq!(state.select_section(3), None);
        assert_eq!(state.phase(), ScrollPhase::Idle);
        assert!(clicks.borrow().is_empty());
    }

    #[test]
    fn test_completion_without_flight_is_noop() {
        let (seen, hooks) = recorder();
        let mut state = SpyState::new(2, hooks);
        state.programmatic_scroll_done();
        assert_eq!(state.active_index(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_unmeasured_content_defers() {
        let (seen, hooks) = recorder();
        let mut state = SpyState::new(2, hooks);
        let content = PaneGeometry {
            offset: 30,
            max_offset: 100,
            viewport_height: 50,
            sections: vec![None, None],
        };
        let reveal = state.handle_content_scroll(&content, &roomy_nav(2));
        assert_eq!(reveal, None);
        assert_eq!(state.active_index(), 0);
        assert!(seen.borrow().is_empty());
    }
}
