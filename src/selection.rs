// Selection bookkeeping and the incremental drag-range algorithm:
// insertion-ordered selection state, veto/notification hooks, and the
// three-case recomputation applied on every drag movement.

use crate::grid::{GridIndex, RangeEnd, RangeWalk, SectionedGrid};

/// Host veto and notification hooks for selection transitions.
///
/// Override only what you need: the vetoes default to allowing every
/// transition and the notifications default to doing nothing. A host with
/// no selection policy at all can pass `&mut ()`.
pub trait SelectionHooks {
    /// Whether `index` may become selected.
    fn should_select(&self, index: GridIndex) -> bool {
        let _ = index;
        true
    }

    /// Whether `index` may become deselected.
    fn should_deselect(&self, index: GridIndex) -> bool {
        let _ = index;
        true
    }

    /// `index` transitioned to selected.
    fn did_select(&mut self, index: GridIndex) {
        let _ = index;
    }

    /// `index` transitioned to deselected.
    fn did_deselect(&mut self, index: GridIndex) {
        let _ = index;
    }
}

/// The no-policy hooks: every transition allowed, no notifications.
impl SelectionHooks for () {}

/// Tracks which grid positions are selected and applies selection changes.
///
/// The manager owns only its bookkeeping. The host grid and hooks are
/// passed into each operation and never retained, so the embedding
/// widget's lifetime stays entirely with the host.
///
/// All operations run synchronously to completion on the caller's thread;
/// the manager holds no locks and assumes no concurrent mutation.
#[derive(Debug, Default)]
pub struct SelectionManager {
    /// Selected positions in the order they were selected. The tail is the
    /// most recent — cap eviction removes from the tail first.
    selected: Vec<GridIndex>,
    max_selection_count: Option<usize>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current selection cap. `None` = unbounded.
    pub fn max_selection_count(&self) -> Option<usize> {
        self.max_selection_count
    }

    /// Set or clear the selection cap. `Some(0)` disables new selection.
    ///
    /// Lowering the cap below the current count synchronously deselects the
    /// most recently selected positions until the count fits, applying the
    /// host visual change and firing `did_deselect` for each. The cap is
    /// host policy and outranks the item-level veto: `should_deselect` is
    /// not consulted for these evictions.
    pub fn set_max_selection_count(
        &mut self,
        grid: &mut impl SectionedGrid,
        hooks: &mut impl SelectionHooks,
        cap: Option<usize>,
    ) {
        self.max_selection_count = cap;
        let Some(cap) = cap else { return };
        while self.selected.len() > cap {
            if let Some(index) = self.selected.pop() {
                grid.apply_selected(index, false);
                hooks.did_deselect(index);
            }
        }
    }

    /// Set the selected state of a single position.
    ///
    /// A vetoed transition, an already-satisfied state, and a selection
    /// attempt past the cap are all silent no-ops. Returns whether a
    /// transition actually happened; each real transition applies the host
    /// visual state and fires the matching notification exactly once.
    pub fn set_selected(
        &mut self,
        grid: &mut impl SectionedGrid,
        hooks: &mut impl SelectionHooks,
        index: GridIndex,
        selected: bool,
    ) -> bool {
        if selected && !hooks.should_select(index) {
            return false;
        }
        if !selected && !hooks.should_deselect(index) {
            return false;
        }

        if selected {
            let under_cap = self
                .max_selection_count
                .map_or(true, |cap| self.selected.len() < cap);
            if under_cap && !self.selected.contains(&index) {
                self.selected.push(index);
                grid.apply_selected(index, true);
                hooks.did_select(index);
                return true;
            }
            false
        } else if let Some(pos) = self.selected.iter().position(|i| *i == index) {
            self.selected.remove(pos);
            grid.apply_selected(index, false);
            hooks.did_deselect(index);
            true
        } else {
            false
        }
    }

    /// Toggle a position, subject to the same vetoes and cap as
    /// `set_selected`. Returns the resulting selected state.
    pub fn toggle_selected(
        &mut self,
        grid: &mut impl SectionedGrid,
        hooks: &mut impl SelectionHooks,
        index: GridIndex,
    ) -> bool {
        if self.is_selected(index) {
            let deselected = self.set_selected(grid, hooks, index, false);
            !deselected
        } else {
            self.set_selected(grid, hooks, index, true)
        }
    }

    /// Recompute the selection for the current drag snapshot.
    ///
    /// `from` is the position where the drag started, `to` the position
    /// currently under the pointer, and `min_reached`/`max_reached` the
    /// document-order extremes visited since the drag started (`None`
    /// until the first movement). The caller keeps the extremes current
    /// before each call and collapses them back to `to` whenever the drag
    /// returns to `from`.
    ///
    /// Work is proportional to the touched ranges, not the grid size.
    /// `from` is never deselected by any of the trimming walks, and every
    /// change goes through `set_selected`, so vetoes, the cap, and
    /// notifications apply uniformly.
    pub fn select_range(
        &mut self,
        grid: &mut impl SectionedGrid,
        hooks: &mut impl SelectionHooks,
        from: GridIndex,
        to: GridIndex,
        min_reached: Option<GridIndex>,
        max_reached: Option<GridIndex>,
    ) {
        if from == to {
            // Pointer is back on the initial item: everything else touched
            // during this drag goes back to deselected.
            if let (Some(min), Some(max)) = (min_reached, max_reached) {
                self.deselect_walk(grid, hooks, min, max, RangeEnd::Inclusive, from);
            }
            return;
        }

        if to < from {
            // Dragging backward past the origin.
            self.select_walk(grid, hooks, to, from);
            if let Some(min) = min_reached {
                if min < to {
                    // Selected earlier in this drag, now outside the span.
                    self.deselect_walk(grid, hooks, min, to, RangeEnd::Exclusive, from);
                }
            }
            if let Some(max) = max_reached {
                if from < max {
                    // The far side the drag has retreated from.
                    self.deselect_walk(grid, hooks, from, max, RangeEnd::Inclusive, from);
                }
            }
        } else {
            // Dragging forward.
            self.select_walk(grid, hooks, from, to);
            if let Some(max) = max_reached {
                if to < max {
                    if let Some(after_to) = to.next_in(grid) {
                        self.deselect_walk(grid, hooks, after_to, max, RangeEnd::Inclusive, from);
                    }
                }
            }
            if let Some(min) = min_reached {
                if min < from {
                    self.deselect_walk(grid, hooks, min, from, RangeEnd::Exclusive, from);
                }
            }
        }
    }

    fn select_walk(
        &mut self,
        grid: &mut impl SectionedGrid,
        hooks: &mut impl SelectionHooks,
        start: GridIndex,
        end: GridIndex,
    ) {
        let mut walk = RangeWalk::new(grid, start, end, RangeEnd::Inclusive);
        while let Some(index) = walk.advance(grid) {
            self.set_selected(grid, hooks, index, true);
        }
    }

    fn deselect_walk(
        &mut self,
        grid: &mut impl SectionedGrid,
        hooks: &mut impl SelectionHooks,
        start: GridIndex,
        end: GridIndex,
        range_end: RangeEnd,
        exempt: GridIndex,
    ) {
        let mut walk = RangeWalk::new(grid, start, end, range_end);
        while let Some(index) = walk.advance(grid) {
            if index != exempt {
                self.set_selected(grid, hooks, index, false);
            }
        }
    }

    /// Replace the selection with every selectable position in the grid.
    ///
    /// The current selection is dropped as a bulk reset (no per-item
    /// notifications for the drop), then every position is offered through
    /// `set_selected` in document order, so vetoes, the cap, and
    /// notifications apply as for any other selection. A grid with zero
    /// sections, or whose sections are all empty, ends with an empty
    /// selection and no notifications.
    pub fn select_all(
        &mut self,
        grid: &mut impl SectionedGrid,
        hooks: &mut impl SelectionHooks,
    ) {
        self.selected.clear();
        for section in 0..grid.section_count() {
            for item in 0..grid.item_count(section) {
                self.set_selected(grid, hooks, GridIndex::new(section, item), true);
            }
        }
    }

    /// Drop the entire selection as a bulk reset.
    ///
    /// No vetoes, visual changes, or notifications fire: the host performs
    /// its own deselect-all when it needs one.
    pub fn clear_selected(&mut self) {
        self.selected.clear();
    }

    /// Number of currently selected positions.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Whether `index` is currently selected.
    pub fn is_selected(&self, index: GridIndex) -> bool {
        self.selected.contains(&index)
    }

    /// Snapshot of the selected positions in selection order.
    ///
    /// The snapshot is a value copy: later mutation of the manager does
    /// not change a previously returned vector.
    pub fn selected_indices(&self) -> Vec<GridIndex> {
        self.selected.clone()
    }
}
