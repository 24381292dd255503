// Drag-session coordination: tracks the active drag's origin and the
// document-order extent it has reached, and feeds each movement into the
// selection manager.

use crate::grid::{GridIndex, SectionedGrid};
use crate::selection::{SelectionHooks, SelectionManager};

/// State for one drag-to-select gesture.
///
/// The host's gesture recognizer hit-tests pointer coordinates to a
/// `GridIndex` and calls `begin` / `update` / `end`; extent tracking and
/// range recomputation happen here. A pointer position with no item under
/// it simply produces no `update` call.
///
/// Ending a drag is fully synchronous: after `end` the session stops
/// feeding the manager and nothing is left pending.
#[derive(Debug, Default)]
pub struct DragSession {
    active: bool,
    initial: Option<GridIndex>,
    last: Option<GridIndex>,
    min_reached: Option<GridIndex>,
    max_reached: Option<GridIndex>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag at `initial`.
    ///
    /// Refuses when a drag is already active, and when the host vetoes
    /// selecting the initial position — in both cases the session state is
    /// left inactive and nothing is selected. On success the initial
    /// position is selected immediately and `true` is returned.
    pub fn begin(
        &mut self,
        manager: &mut SelectionManager,
        grid: &mut impl SectionedGrid,
        hooks: &mut impl SelectionHooks,
        initial: GridIndex,
    ) -> bool {
        if self.active {
            log::debug!("drag selection already active, ignoring begin at {initial:?}");
            return false;
        }

        self.min_reached = None;
        self.max_reached = None;

        if !hooks.should_select(initial) {
            log::debug!("initial position {initial:?} is not selectable");
            self.initial = None;
            self.last = None;
            return false;
        }

        manager.set_selected(grid, hooks, initial, true);
        self.active = true;
        self.initial = Some(initial);
        self.last = Some(initial);
        log::debug!("drag selection started at {initial:?}");
        true
    }

    /// Feed one pointer movement, already hit-tested to `index`.
    ///
    /// Ignored while inactive and when the pointer is still over the same
    /// item as the previous call. Otherwise the running document-order
    /// extremes are updated and the selection is recomputed for the new
    /// snapshot.
    pub fn update(
        &mut self,
        manager: &mut SelectionManager,
        grid: &mut impl SectionedGrid,
        hooks: &mut impl SelectionHooks,
        index: GridIndex,
    ) {
        if !self.active || self.last == Some(index) {
            return;
        }
        let Some(initial) = self.initial else { return };

        self.last = Some(index);
        let min = self.min_reached.map_or(index, |m| m.min(index));
        let max = self.max_reached.map_or(index, |m| m.max(index));
        self.min_reached = Some(min);
        self.max_reached = Some(max);

        log::trace!("selecting from {initial:?} to {index:?}, extent {min:?}..{max:?}");
        manager.select_range(grid, hooks, initial, index, Some(min), Some(max));

        // Back on the origin: the tracked extent collapses to a point so
        // the next movement starts from a clean span.
        if index == initial {
            self.min_reached = Some(index);
            self.max_reached = Some(index);
        }
    }

    /// End the drag. Idempotent.
    pub fn end(&mut self) {
        if self.active {
            log::debug!("drag selection ended");
        }
        self.active = false;
    }

    /// Whether a drag is currently active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Position where the drag started. Retained until the next `begin`.
    pub fn initial(&self) -> Option<GridIndex> {
        self.initial
    }

    /// Most recent dragged-over position.
    pub fn last(&self) -> Option<GridIndex> {
        self.last
    }

    /// Document-order extent visited since the drag started, as
    /// `(min, max)`. `None` until the first movement away from the origin.
    pub fn extent(&self) -> Option<(GridIndex, GridIndex)> {
        self.min_reached.zip(self.max_reached)
    }
}
