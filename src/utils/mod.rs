mod theme_state;
pub mod clock;
pub mod media;
pub mod storage;
pub mod scroll_lock;
pub mod timer;

pub use theme_state::{ ThemeId, ThemeState };
pub use storage::{ AppStore, MemoryStore, PreferenceStore };
pub use scroll_lock::{ use_body_lock, ScrollLock };
pub use timer::use_deadline_timer;
