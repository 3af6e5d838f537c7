pub mod disclosure;
pub mod scroll;
pub mod nav;
pub mod bridge;

// Re-export commonly used items
pub use disclosure::{ Disclosure, Phase, CLOSE_ANIMATION_MS };
pub use scroll::{ ScrollTracker, MOUSE_IDLE_MS };
pub use nav::{ NavController, DROPDOWN_HOVER_CLOSE_MS };
pub use bridge::{ BridgeEvent, BRIDGE_SCRIPT, TEARDOWN_SCRIPT };
