use crate::utils::storage::{ read_pref, write_pref, SELECTED_THEME_KEY };
use crate::utils::{ PreferenceStore, ThemeId, ThemeState };
use super::disclosure::{ Disclosure, CLOSE_ANIMATION_MS };
use super::scroll::ScrollTracker;

/// Hover-out grace period before the theme dropdown starts closing.
pub const DROPDOWN_HOVER_CLOSE_MS: u64 = 700;

/// State behind the navigation bar: menu, theme dropdown, scroll auto-hide,
/// and the active theme.
///
/// Time is passed in explicitly as milliseconds. The host calls [`tick`]
/// at [`next_deadline`] and must cancel its pending timer before scheduling a
/// new one. After [`unmount`] every method is a no-op.
///
/// [`tick`]: NavController::tick
/// [`next_deadline`]: NavController::next_deadline
/// [`unmount`]: NavController::unmount
pub struct NavController<S: PreferenceStore> {
    store: S,
    menu: Disclosure,
    dropdown: Disclosure,
    scroll: ScrollTracker,
    theme: ThemeState,
    mounted: bool,
}

impl<S: PreferenceStore> NavController<S> {
    /// Restores the persisted theme (default `theme1`) and applies it.
    pub fn mount(store: S, is_dark: bool) -> Self {
        let theme = read_pref(&store, SELECTED_THEME_KEY)
            .and_then(|raw| raw.parse::<ThemeId>().ok())
            .unwrap_or_default();

        let mut controller = Self {
            store,
            menu: Disclosure::new(CLOSE_ANIMATION_MS),
            dropdown: Disclosure::new(CLOSE_ANIMATION_MS),
            scroll: ScrollTracker::default(),
            theme: ThemeState::new(theme, is_dark),
            mounted: true,
        };
        controller.apply_theme(theme, is_dark);
        log::debug!("Navigation mounted with {}", controller.theme.root_class());
        controller
    }

    /// Scroll auto-hide only runs on viewports that can hover.
    pub fn enable_scroll_tracking(&mut self, hover_capable: bool, scroll_y: f64) {
        if !self.mounted {
            return;
        }
        self.scroll = ScrollTracker::new(hover_capable, scroll_y);
    }

    /// Sole writer of theme identity: updates the active theme and persists it.
    pub fn apply_theme(&mut self, theme: ThemeId, is_dark: bool) -> ThemeState {
        if !self.mounted {
            return self.theme;
        }
        self.theme = ThemeState::new(theme, is_dark);
        write_pref(&mut self.store, SELECTED_THEME_KEY, theme.as_str());
        self.theme
    }

    pub fn toggle_menu(&mut self, now: u64) {
        if self.mounted && self.menu.toggle(now) {
            log::debug!("Menu -> {:?}", self.menu.phase());
        }
    }

    pub fn close_menu(&mut self, now: u64) {
        if self.mounted && self.menu.begin_close(now) {
            log::debug!("Menu closing");
        }
    }

    pub fn toggle_theme_dropdown(&mut self, now: u64) {
        if self.mounted && self.dropdown.toggle(now) {
            log::debug!("Theme dropdown -> {:?}", self.dropdown.phase());
        }
    }

    pub fn dropdown_mouse_leave(&mut self, now: u64) {
        if self.mounted {
            self.dropdown.schedule_auto_close(now + DROPDOWN_HOVER_CLOSE_MS);
        }
    }

    pub fn dropdown_mouse_enter(&mut self) {
        if self.mounted {
            self.dropdown.cancel_pending_close();
        }
    }

    /// Applies `theme` and closes both the dropdown and the menu.
    pub fn select_theme(&mut self, theme: ThemeId, now: u64) -> ThemeState {
        if !self.mounted {
            return self.theme;
        }
        let applied = self.apply_theme(theme, self.theme.is_dark);
        self.dropdown.begin_close(now);
        self.menu.begin_close(now);
        log::debug!("Theme selected: {}", applied.root_class());
        applied
    }

    /// Flips dark mode, re-applies the active theme, and closes the menu.
    /// The caller owns the flag and stores the returned value.
    pub fn toggle_dark_mode(&mut self, now: u64) -> ThemeState {
        if !self.mounted {
            return self.theme;
        }
        let applied = self.apply_theme(self.theme.theme, !self.theme.is_dark);
        self.menu.begin_close(now);
        applied
    }

    /// Re-applies the active theme when the owner's dark flag changed.
    pub fn sync_dark_mode(&mut self, is_dark: bool) -> ThemeState {
        if self.mounted && self.theme.is_dark != is_dark {
            return self.apply_theme(self.theme.theme, is_dark);
        }
        self.theme
    }

    pub fn on_scroll_frame(&mut self, scroll_y: f64) {
        if self.mounted {
            self.scroll.on_frame(scroll_y);
        }
    }

    pub fn on_mouse_move(&mut self, now: u64) {
        if self.mounted {
            self.scroll.on_mouse_move(now);
        }
    }

    /// Primary click or double-click that landed outside the nav container.
    pub fn on_outside_click(&mut self, now: u64) {
        self.close_menu(now);
    }

    pub fn on_links_double_click(&mut self, now: u64) {
        self.close_menu(now);
    }

    /// Fires every deadline at or before `now`, in deadline order.
    pub fn tick(&mut self, now: u64) {
        if !self.mounted {
            return;
        }
        if let Some(closed_at) = self.menu.advance(now) {
            log::debug!("Menu closed");
            self.dropdown.begin_close(closed_at);
        }
        if self.dropdown.advance(now).is_some() {
            log::debug!("Theme dropdown closed");
        }
        self.scroll.advance(now);
    }

    pub fn next_deadline(&self) -> Option<u64> {
        if !self.mounted {
            return None;
        }
        [self.menu.next_deadline(), self.dropdown.next_deadline(), self.scroll.next_deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    /// Drops every pending deadline; later events and ticks are ignored.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.scroll.cancel();
        self.mounted = false;
        log::debug!("Navigation unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn theme_state(&self) -> ThemeState {
        self.theme
    }

    pub fn active_theme(&self) -> ThemeId {
        self.theme.theme
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn is_menu_closing(&self) -> bool {
        self.menu.is_closing()
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown.is_open()
    }

    pub fn is_dropdown_closing(&self) -> bool {
        self.dropdown.is_closing()
    }

    pub fn is_bar_visible(&self) -> bool {
        self.scroll.is_visible()
    }

    /// Body scrolling is locked while the menu is shown.
    pub fn scroll_locked(&self) -> bool {
        self.mounted && self.menu.is_open()
    }

    pub fn nav_class(&self) -> String {
        let mut class = format!("navbar {}", self.theme.mode_class());
        if !self.scroll.is_visible() {
            class.push_str(" navbar-hidden");
        }
        class
    }

    pub fn links_class(&self) -> String {
        let mut class = String::from("navbar-links");
        if self.menu.is_open() {
            class.push_str(" active");
        }
        if self.menu.is_closing() {
            class.push_str(" closing");
        }
        class
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn observable(&self) -> (super::disclosure::Phase, super::disclosure::Phase, ScrollTracker, ThemeState) {
        (self.menu.phase(), self.dropdown.phase(), self.scroll.clone(), self.theme)
    }
}
