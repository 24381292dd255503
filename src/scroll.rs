// Auto-scroll hotspots: classifies the drag pointer against the viewport's
// top and bottom bands and produces clamped per-tick scroll offsets.

use crate::config::DragSelectConfig;

/// Which hotspot band the pointer is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotspotZone {
    Top,
    Bottom,
    Outside,
}

/// Auto-scroll state driven by the host's drag-move handler and timer.
///
/// The engine only computes velocities and clamped offsets. The host owns
/// the periodic timer (a period of `auto_scroll_interval_ms` from the
/// config is the intended cadence) and the real viewport offset, and must
/// stop ticking when the drag ends or the pointer leaves both bands.
/// Selection state is never touched from here.
#[derive(Debug)]
pub struct AutoScroller {
    hotspot_height: Option<f32>,
    offset_top: f32,
    offset_bottom: f32,
    velocity: f32,
    in_top: bool,
    in_bottom: bool,
}

impl AutoScroller {
    /// Build from the hotspot geometry in `config`.
    pub fn new(config: &DragSelectConfig) -> Self {
        Self {
            hotspot_height: config.hotspot_height,
            offset_top: config.hotspot_offset_top,
            offset_bottom: config.hotspot_offset_bottom,
            velocity: 0.0,
            in_top: false,
            in_bottom: false,
        }
    }

    /// Classify the pointer and update the scroll velocity.
    ///
    /// `y` is the pointer's vertical position in viewport coordinates. The
    /// top band spans `[offset_top, offset_top + height]`, the bottom band
    /// `[viewport_height - offset_bottom - height, viewport_height -
    /// offset_bottom]`. Velocity scales with how deep into the band the
    /// pointer sits: half a point of scroll per point of depth. With
    /// hotspots disabled the pointer is always `Outside`.
    pub fn update_pointer(&mut self, y: f32, viewport_height: f32) -> HotspotZone {
        let Some(height) = self.hotspot_height else {
            return HotspotZone::Outside;
        };

        let top_start = self.offset_top;
        let top_end = self.offset_top + height;
        let bottom_start = viewport_height - self.offset_bottom - height;
        let bottom_end = viewport_height - self.offset_bottom;

        if y >= top_start && y <= top_end {
            self.in_bottom = false;
            if !self.in_top {
                self.in_top = true;
                log::debug!("pointer entered top auto-scroll hotspot");
            }
            self.velocity = 0.5 * (top_end - y);
            HotspotZone::Top
        } else if y >= bottom_start && y <= bottom_end {
            self.in_top = false;
            if !self.in_bottom {
                self.in_bottom = true;
                log::debug!("pointer entered bottom auto-scroll hotspot");
            }
            self.velocity = 0.5 * (y - bottom_start);
            HotspotZone::Bottom
        } else {
            if self.in_top || self.in_bottom {
                log::debug!("pointer left auto-scroll hotspots");
            }
            self.in_top = false;
            self.in_bottom = false;
            self.velocity = 0.0;
            HotspotZone::Outside
        }
    }

    /// One timer firing: the next viewport offset.
    ///
    /// Scrolls up (toward 0) in the top band and down in the bottom band,
    /// clamped to `[0, content_height - viewport_height]`. Outside both
    /// bands the offset comes back unchanged apart from clamping.
    pub fn tick(&self, offset: f32, content_height: f32, viewport_height: f32) -> f32 {
        let moved = if self.in_top {
            offset - self.velocity
        } else if self.in_bottom {
            offset + self.velocity
        } else {
            offset
        };
        let max_offset = (content_height - viewport_height).max(0.0);
        moved.min(max_offset).max(0.0)
    }

    /// Reset band state and velocity (drag ended).
    pub fn stop(&mut self) {
        self.in_top = false;
        self.in_bottom = false;
        self.velocity = 0.0;
    }

    /// Current scroll velocity in points per tick.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Whether the pointer is currently in a hotspot band.
    pub fn is_active(&self) -> bool {
        self.in_top || self.in_bottom
    }
}
