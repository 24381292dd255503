// Grid coordinates: document ordering, stepping across section boundaries,
// and lazy range walking over a sectioned grid.

/// A position in a sectioned grid.
///
/// Ordering is lexicographic on `(section, item)` — document order: every
/// position in section 0 sorts before every position in section 1, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridIndex {
    /// Section index. Sections are densely numbered from 0.
    pub section: usize,
    /// Item index within the section.
    pub item: usize,
}

/// Host grid queried during range walks and selection changes.
///
/// Implemented by the embedding widget. All queries must return immediately;
/// the engine calls them synchronously on the thread that delivers input
/// events.
pub trait SectionedGrid {
    /// Number of sections in the grid.
    fn section_count(&self) -> usize;

    /// Number of items in `section`. A section may legitimately contain
    /// zero items.
    fn item_count(&self, section: usize) -> usize;

    /// Apply the host's visual selected state for `index`.
    ///
    /// Called once per real selection transition. Default does nothing.
    fn apply_selected(&mut self, index: GridIndex, selected: bool) {
        let _ = (index, selected);
    }
}

impl GridIndex {
    pub fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }

    /// The next valid position in document order, skipping empty sections.
    ///
    /// Returns `None` once past the last item of the last section.
    pub fn next_in(self, grid: &impl SectionedGrid) -> Option<GridIndex> {
        if self.item + 1 < grid.item_count(self.section) {
            return Some(GridIndex::new(self.section, self.item + 1));
        }
        let mut section = self.section + 1;
        while section < grid.section_count() {
            if grid.item_count(section) > 0 {
                return Some(GridIndex::new(section, 0));
            }
            section += 1;
        }
        None
    }

    /// The previous valid position in document order, walking backward
    /// across any number of empty sections.
    ///
    /// Returns `None` at the first item of the grid.
    pub fn prev_in(self, grid: &impl SectionedGrid) -> Option<GridIndex> {
        if self.item > 0 {
            return Some(GridIndex::new(self.section, self.item - 1));
        }
        let mut section = self.section;
        while section > 0 {
            section -= 1;
            let count = grid.item_count(section);
            if count > 0 {
                return Some(GridIndex::new(section, count - 1));
            }
        }
        None
    }
}

/// Whether a range walk includes its end position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEnd {
    Inclusive,
    Exclusive,
}

/// Lazy forward walk over a range of grid positions.
///
/// Yields positions from `start` while they compare at or before the end
/// bound. Single-pass: once exhausted it stays exhausted. The walk has no
/// side effects of its own — the caller applies an action per position.
#[derive(Debug)]
pub struct RangeWalk {
    next: Option<GridIndex>,
    bound: Option<GridIndex>,
}

impl RangeWalk {
    /// Set up a walk from `start` to `end`.
    ///
    /// For `RangeEnd::Exclusive` the bound is `end`'s predecessor, computed
    /// once here; an exclusive walk whose end has no predecessor yields
    /// nothing. A walk with `start` past the bound also yields nothing.
    pub fn new(
        grid: &impl SectionedGrid,
        start: GridIndex,
        end: GridIndex,
        range_end: RangeEnd,
    ) -> Self {
        let bound = match range_end {
            RangeEnd::Inclusive => Some(end),
            RangeEnd::Exclusive => end.prev_in(grid),
        };
        Self {
            next: Some(start),
            bound,
        }
    }

    /// Yield the next position, or `None` when the walk is finished.
    pub fn advance(&mut self, grid: &impl SectionedGrid) -> Option<GridIndex> {
        let bound = self.bound?;
        let current = self.next?;
        if current > bound {
            self.next = None;
            return None;
        }
        self.next = current.next_in(grid);
        Some(current)
    }
}
