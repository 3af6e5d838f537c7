use std::cell::{ Cell, RefCell };
use std::rc::Rc;
use dioxus::prelude::*;

pub const LOCK_BODY_SCRIPT: &str = r#"
const body = document.body;
if (body.dataset.lockY === undefined) {
    const y = window.scrollY;
    body.dataset.lockY = String(y);
    Object.assign(body.style, { overflow: "hidden", position: "fixed", top: `-${y}px`, width: "100%" });
}
"#;

pub const UNLOCK_BODY_SCRIPT: &str = r#"
const body = document.body;
if (body.dataset.lockY !== undefined) {
    const y = parseInt(body.dataset.lockY, 10) || 0;
    delete body.dataset.lockY;
    Object.assign(body.style, { overflow: "", position: "", top: "", width: "" });
    window.scrollTo(0, y);
}
"#;

/// Number of components currently pinning the page body.
///
/// The body is locked while at least one holder remains. Provided once at the
/// app root; clones share the count.
#[derive(Clone, Debug, Default)]
pub struct ScrollLock {
    holders: Rc<Cell<usize>>,
}

impl ScrollLock {
    /// Returns `true` when this is the first holder.
    pub fn acquire(&self) -> bool {
        let held = self.holders.get();
        self.holders.set(held + 1);
        held == 0
    }

    /// Returns `true` when the last holder let go.
    pub fn release(&self) -> bool {
        match self.holders.get() {
            0 => false,
            held => {
                self.holders.set(held - 1);
                held == 1
            }
        }
    }

    pub fn holders(&self) -> usize {
        self.holders.get()
    }
}

/// One component's claim on a [`ScrollLock`]; holds at most one count.
#[derive(Debug)]
pub struct LockClaim {
    lock: ScrollLock,
    held: bool,
}

impl LockClaim {
    pub fn new(lock: ScrollLock) -> Self {
        Self { lock, held: false }
    }

    /// Moves the claim to `want` and returns the body script to run when the
    /// shared lock flips.
    pub fn set(&mut self, want: bool) -> Option<&'static str> {
        if want == self.held {
            return None;
        }
        self.held = want;
        if want {
            self.lock.acquire().then_some(LOCK_BODY_SCRIPT)
        } else {
            self.lock.release().then_some(UNLOCK_BODY_SCRIPT)
        }
    }
}

/// Holds the app-wide body lock while `locked` is true and releases it on
/// unmount.
pub fn use_body_lock(locked: Memo<bool>) {
    let lock = use_context::<ScrollLock>();
    let claim = use_hook(|| Rc::new(RefCell::new(LockClaim::new(lock))));

    let tracked = claim.clone();
    use_effect(move || {
        let want = locked();
        if let Some(script) = tracked.borrow_mut().set(want) {
            document::eval(script);
        }
    });

    use_drop(move || {
        if let Some(script) = claim.borrow_mut().set(false) {
            document::eval(script);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_stays_locked_until_last_holder_releases() {
        let lock = ScrollLock::default();
        let mut menu = LockClaim::new(lock.clone());
        let mut popup = LockClaim::new(lock.clone());

        assert_eq!(menu.set(true), Some(LOCK_BODY_SCRIPT));
        assert_eq!(popup.set(true), None);
        assert_eq!(lock.holders(), 2);

        assert_eq!(menu.set(false), None);
        assert_eq!(lock.holders(), 1);
        assert_eq!(popup.set(false), Some(UNLOCK_BODY_SCRIPT));
        assert_eq!(lock.holders(), 0);
    }

    #[test]
    fn test_claim_counts_once() {
        let lock = ScrollLock::default();
        let mut menu = LockClaim::new(lock.clone());
        assert_eq!(menu.set(true), Some(LOCK_BODY_SCRIPT));
        assert_eq!(menu.set(true), None);
        assert_eq!(lock.holders(), 1);

        assert_eq!(menu.set(false), Some(UNLOCK_BODY_SCRIPT));
        assert_eq!(menu.set(false), None);
        assert!(!lock.release());
        assert_eq!(lock.holders(), 0);
    }

    #[test]
    fn test_unlocked_claim_does_not_disturb_holder() {
        let lock = ScrollLock::default();
        let mut popup = LockClaim::new(lock.clone());
        let mut menu = LockClaim::new(lock.clone());
        popup.set(true);

        assert_eq!(menu.set(false), None);
        assert_eq!(lock.holders(), 1);
    }
}
