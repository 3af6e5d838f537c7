#[cfg(test)]
mod tests {
    use crate::controller::{ BridgeEvent, NavController, DROPDOWN_HOVER_CLOSE_MS };
    use crate::tests::common::mocks::{ DisabledStore, FullStore };
    use crate::tests::common::setup;
    use crate::utils::{ MemoryStore, ThemeId };

    #[test]
    fn test_unmount_with_pending_timers_freezes_state() {
        setup();
        let mut nav = NavController::mount(MemoryStore::new(), false);
        nav.enable_scroll_tracking(true, 0.0);
        nav.toggle_menu(0);
        nav.toggle_theme_dropdown(0);
        nav.dropdown_mouse_leave(10);
        nav.on_scroll_frame(300.0);
        nav.on_mouse_move(20);
        nav.toggle_menu(30);
        assert!(nav.next_deadline().is_some());

        nav.unmount();
        let frozen = nav.observable();
        assert_eq!(nav.next_deadline(), None);

        nav.tick(10_000);
        nav.toggle_menu(10_000);
        nav.toggle_theme_dropdown(10_000);
        nav.dropdown_mouse_enter();
        nav.select_theme(ThemeId::Theme6, 10_000);
        nav.toggle_dark_mode(10_000);
        BridgeEvent::Frame { y: 0.0 }.apply(&mut nav, 10_000);
        BridgeEvent::OutsideClick.apply(&mut nav, 10_000);
        nav.tick(20_000);

        assert_eq!(nav.observable(), frozen);
        assert!(!nav.is_mounted());
        assert!(!nav.scroll_locked());
    }

    #[test]
    fn test_disabled_storage_falls_back_to_defaults() {
        let mut nav = NavController::mount(DisabledStore::default(), true);
        assert_eq!(nav.active_theme(), ThemeId::Theme1);
        assert_eq!(nav.theme_state().root_class(), "theme1 dark");

        nav.select_theme(ThemeId::Theme4, 0);
        assert_eq!(nav.active_theme(), ThemeId::Theme4);
        assert_eq!(nav.store().attempted_writes, 2);
    }

    #[test]
    fn test_failed_writes_keep_in_memory_theme() {
        let store = FullStore { stored_theme: Some("theme2".to_string()) };
        let mut nav = NavController::mount(store, false);
        assert_eq!(nav.active_theme(), ThemeId::Theme2);
        nav.select_theme(ThemeId::Theme5, 0);
        assert_eq!(nav.active_theme(), ThemeId::Theme5);
    }

    #[test]
    fn test_hover_out_timer_is_replaced_not_stacked() {
        let mut nav = NavController::mount(MemoryStore::new(), false);
        nav.toggle_theme_dropdown(0);
        nav.dropdown_mouse_leave(0);
        nav.dropdown_mouse_enter();
        nav.dropdown_mouse_leave(500);
        nav.tick(DROPDOWN_HOVER_CLOSE_MS);
        assert!(nav.is_dropdown_open() && !nav.is_dropdown_closing());
        assert_eq!(nav.next_deadline(), Some(500 + DROPDOWN_HOVER_CLOSE_MS));
    }
}
