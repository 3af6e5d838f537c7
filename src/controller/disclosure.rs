/// Length of the exit animation played before a panel is removed.
pub const CLOSE_ANIMATION_MS: u64 = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Closed,
    /// `auto_close_at` is a pending delayed close (hover-out), if any.
    Open { auto_close_at: Option<u64> },
    /// Exit animation running; becomes `Closed` at `until`.
    Closing { until: u64 },
}

/// A panel that opens instantly and closes through a timed `Closing` phase.
///
/// Transitions:
///
/// | from            | event               | to                         |
/// |-----------------|---------------------|----------------------------|
/// | Closed          | toggle / open       | Open                       |
/// | Open            | toggle / begin_close| Closing(now + delay)       |
/// | Closing         | toggle              | Closing (ignored)          |
/// | Closing         | open / cancel       | Open                       |
/// | Open            | schedule_auto_close | Open(auto_close_at)        |
/// | Open(at)        | advance(>= at)      | Closing(at + delay)        |
/// | Closing(until)  | advance(>= until)   | Closed                     |
#[derive(Clone, Debug, PartialEq)]
pub struct Disclosure {
    phase: Phase,
    close_ms: u64,
}

impl Disclosure {
    pub fn new(close_ms: u64) -> Self {
        Self { phase: Phase::Closed, close_ms }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Rendered at all, including while the exit animation plays.
    pub fn is_open(&self) -> bool {
        !matches!(self.phase, Phase::Closed)
    }

    pub fn is_closing(&self) -> bool {
        matches!(self.phase, Phase::Closing { .. })
    }

    /// Opens immediately, cancelling any pending or running close.
    pub fn open(&mut self) -> bool {
        let next = Phase::Open { auto_close_at: None };
        self.replace(next)
    }

    pub fn begin_close(&mut self, now: u64) -> bool {
        match self.phase {
            Phase::Open { .. } => self.replace(Phase::Closing { until: now + self.close_ms }),
            Phase::Closed | Phase::Closing { .. } => false,
        }
    }

    /// Returns whether the phase changed. A toggle while closing is dropped.
    pub fn toggle(&mut self, now: u64) -> bool {
        match self.phase {
            Phase::Closed => self.open(),
            Phase::Open { .. } => self.begin_close(now),
            Phase::Closing { .. } => false,
        }
    }

    /// Replaces any pending delayed close with one firing at `at`.
    pub fn schedule_auto_close(&mut self, at: u64) -> bool {
        match self.phase {
            Phase::Open { .. } => self.replace(Phase::Open { auto_close_at: Some(at) }),
            Phase::Closed | Phase::Closing { .. } => false,
        }
    }

    pub fn cancel_pending_close(&mut self) -> bool {
        match self.phase {
            Phase::Open { auto_close_at: Some(_) } | Phase::Closing { .. } => self.open(),
            Phase::Open { auto_close_at: None } | Phase::Closed => false,
        }
    }

    pub fn next_deadline(&self) -> Option<u64> {
        match self.phase {
            Phase::Closed => None,
            Phase::Open { auto_close_at } => auto_close_at,
            Phase::Closing { until } => Some(until),
        }
    }

    /// Fires every deadline at or before `now`. Returns the instant the panel
    /// finished closing, if it did.
    pub fn advance(&mut self, now: u64) -> Option<u64> {
        loop {
            match self.phase {
                Phase::Open { auto_close_at: Some(at) } if at <= now => {
                    self.phase = Phase::Closing { until: at + self.close_ms };
                }
                Phase::Closing { until } if until <= now => {
                    self.phase = Phase::Closed;
                    return Some(until);
                }
                _ => return None,
            }
        }
    }

    fn replace(&mut self, next: Phase) -> bool {
        let changed = self.phase != next;
        self.phase = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_opens_then_closes_after_delay() {
        let mut panel = Disclosure::new(CLOSE_ANIMATION_MS);
        assert!(panel.toggle(0));
        assert!(panel.is_open() && !panel.is_closing());

        assert!(panel.toggle(10));
        assert_eq!(panel.phase(), Phase::Closing { until: 210 });
        assert_eq!(panel.advance(209), None);
        assert!(panel.is_closing());
        assert_eq!(panel.advance(210), Some(210));
        assert_eq!(panel.phase(), Phase::Closed);
    }

    #[test]
    fn test_toggle_during_closing_is_ignored() {
        let mut panel = Disclosure::new(CLOSE_ANIMATION_MS);
        panel.toggle(0);
        panel.toggle(0);
        assert!(!panel.toggle(50));
        assert_eq!(panel.phase(), Phase::Closing { until: 200 });
    }

    #[test]
    fn test_auto_close_is_cancel_and_replace() {
        let mut panel = Disclosure::new(CLOSE_ANIMATION_MS);
        panel.open();
        panel.schedule_auto_close(700);
        panel.schedule_auto_close(900);
        assert_eq!(panel.next_deadline(), Some(900));
        assert_eq!(panel.advance(800), None);
        assert!(!panel.is_closing());

        assert_eq!(panel.advance(1_100), Some(1_100));
        assert!(!panel.is_open());
    }

    #[test]
    fn test_cancel_pending_close_reopens() {
        let mut panel = Disclosure::new(CLOSE_ANIMATION_MS);
        panel.open();
        panel.schedule_auto_close(700);
        assert!(panel.cancel_pending_close());
        assert_eq!(panel.next_deadline(), None);

        panel.begin_close(100);
        assert!(panel.cancel_pending_close());
        assert_eq!(panel.phase(), Phase::Open { auto_close_at: None });
        assert!(!panel.cancel_pending_close());
    }

    #[test]
    fn test_closed_panel_ignores_close_requests() {
        let mut panel = Disclosure::new(CLOSE_ANIMATION_MS);
        assert!(!panel.begin_close(0));
        assert!(!panel.schedule_auto_close(10));
        assert_eq!(panel.next_deadline(), None);
        assert_eq!(panel.advance(u64::MAX), None);
    }
}
