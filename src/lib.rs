// Drag-to-select for sectioned grid views: press an item, drag across
// others, and everything between the press point and the pointer is
// selected live, with optional auto-scroll when the drag nears the
// viewport edges.
//
// The host widget supplies hit-testing, rendering, and the auto-scroll
// timer; this crate supplies the selection-range algorithm, the selection
// state, the drag-session bookkeeping, and the hotspot/velocity math.

pub mod config;
pub mod drag;
pub mod grid;
pub mod scroll;
pub mod selection;

pub use config::{ConfigError, DragSelectConfig};
pub use drag::DragSession;
pub use grid::{GridIndex, RangeEnd, RangeWalk, SectionedGrid};
pub use scroll::{AutoScroller, HotspotZone};
pub use selection::{SelectionHooks, SelectionManager};
