/// Inactivity after the last mouse move before the bar may hide again.
pub const MOUSE_IDLE_MS: u64 = 1_000;

/// Auto-hide of the navigation bar driven by scroll direction.
///
/// Only active on hover-capable viewports; elsewhere the bar stays visible.
/// Expects one `on_frame` call per animation frame, not per scroll event.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTracker {
    enabled: bool,
    last_y: f64,
    visible: bool,
    idle_check_at: Option<u64>,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self {
            enabled: false,
            last_y: 0.0,
            visible: true,
            idle_check_at: None,
        }
    }
}

impl ScrollTracker {
    pub fn new(enabled: bool, initial_y: f64) -> Self {
        Self {
            enabled,
            last_y: initial_y,
            ..Self::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn last_y(&self) -> f64 {
        self.last_y
    }

    pub fn on_frame(&mut self, y: f64) {
        if !self.enabled {
            return;
        }
        let delta = y - self.last_y;
        self.visible = delta <= 0.0 || y <= 0.0;
        self.last_y = y;
    }

    pub fn on_mouse_move(&mut self, now: u64) {
        if !self.enabled {
            return;
        }
        self.visible = true;
        self.idle_check_at = Some(now + MOUSE_IDLE_MS);
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.idle_check_at
    }

    pub fn advance(&mut self, now: u64) {
        match self.idle_check_at {
            Some(at) if at <= now => {
                self.idle_check_at = None;
                if self.last_y > 0.0 {
                    self.visible = false;
                }
            }
            _ => {}
        }
    }

    pub fn cancel(&mut self) {
        self.idle_check_at = None;
    }
}
