use serde::Deserialize;
use crate::utils::PreferenceStore;
use super::nav::NavController;

/// Installs window/document listeners and forwards them to Rust.
///
/// Scroll events are coalesced with `requestAnimationFrame`, so at most one
/// `frame` message is sent per animation frame. Re-running the script tears
/// down the previous installation first.
pub const BRIDGE_SCRIPT: &str = r#"
if (window.__navBridge) { window.__navBridge.teardown(); }
let frame = 0;
const onScroll = () => {
    cancelAnimationFrame(frame);
    frame = requestAnimationFrame(() => dioxus.send({ kind: "frame", y: window.scrollY }));
};
const onMouseMove = () => dioxus.send({ kind: "mouse_move" });
const onOutside = (e) => {
    if (e.type === "mousedown" && e.button !== 0) return;
    if (e.target instanceof Element && e.target.closest(".navbar-container")) return;
    dioxus.send({ kind: "outside_click" });
};
const hover = !window.matchMedia("(hover: none)").matches;
if (hover) {
    window.addEventListener("scroll", onScroll, { passive: true });
    window.addEventListener("mousemove", onMouseMove);
}
document.addEventListener("mousedown", onOutside);
document.addEventListener("dblclick", onOutside);
window.__navBridge = {
    teardown() {
        cancelAnimationFrame(frame);
        window.removeEventListener("scroll", onScroll);
        window.removeEventListener("mousemove", onMouseMove);
        document.removeEventListener("mousedown", onOutside);
        document.removeEventListener("dblclick", onOutside);
        delete window.__navBridge;
    }
};
dioxus.send({ kind: "ready", hover: hover, y: window.scrollY });
"#;

pub const TEARDOWN_SCRIPT: &str = r#"
if (window.__navBridge) { window.__navBridge.teardown(); }
"#;

/// Messages posted by [`BRIDGE_SCRIPT`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BridgeEvent {
    Ready { hover: bool, y: f64 },
    Frame { y: f64 },
    MouseMove,
    OutsideClick,
}

impl BridgeEvent {
    pub fn apply<S: PreferenceStore>(self, nav: &mut NavController<S>, now: u64) {
        match self {
            BridgeEvent::Ready { hover, y } => nav.enable_scroll_tracking(hover, y),
            BridgeEvent::Frame { y } => nav.on_scroll_frame(y),
            BridgeEvent::MouseMove => nav.on_mouse_move(now),
            BridgeEvent::OutsideClick => nav.on_outside_click(now),
        }
    }
}
