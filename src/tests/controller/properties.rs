#[cfg(test)]
mod tests {
    use crate::controller::{ NavController, CLOSE_ANIMATION_MS, MOUSE_IDLE_MS };
    use crate::tests::common::{ setup, Sequence };
    use crate::utils::{ MemoryStore, ThemeId };
    use crate::utils::storage::SELECTED_THEME_KEY;

    fn desktop_nav() -> NavController<MemoryStore> {
        setup();
        let mut nav = NavController::mount(MemoryStore::new(), false);
        nav.enable_scroll_tracking(true, 0.0);
        nav
    }

    #[test]
    fn test_menu_parity_over_generated_toggle_sequences() {
        for seed in 1..=64 {
            let mut nav = desktop_nav();
            let mut steps = Sequence::new(seed);
            let mut now = 0;
            let mut accepted = 0;

            for _ in 0..40 {
                now += steps.next_below(2 * CLOSE_ANIMATION_MS);
                nav.tick(now);
                let before = (nav.is_menu_open(), nav.is_menu_closing());
                nav.toggle_menu(now);
                if (nav.is_menu_open(), nav.is_menu_closing()) != before {
                    accepted += 1;
                }
            }
            nav.tick(now + CLOSE_ANIMATION_MS);

            assert!(!nav.is_menu_closing(), "seed {}", seed);
            assert_eq!(nav.is_menu_open(), accepted % 2 == 1, "seed {}", seed);
        }
    }

    #[test]
    fn test_every_theme_selection_yields_one_marker() {
        for dark in [false, true] {
            for theme in ThemeId::ALL {
                let store = MemoryStore::new();
                let mut nav = NavController::mount(store.clone(), dark);
                let applied = nav.select_theme(theme, 0);

                let class = applied.root_class();
                let markers: Vec<&str> = class.split_whitespace().collect();
                for other in ThemeId::ALL {
                    assert_eq!(markers.contains(&other.as_str()), other == theme);
                }
                assert_eq!(markers.contains(&"dark"), dark);
                assert_eq!(
                    store.snapshot().get(SELECTED_THEME_KEY).map(String::as_str),
                    Some(theme.as_str())
                );
            }
        }
    }

    #[test]
    fn test_return_to_top_always_shows_bar() {
        let mut steps = Sequence::new(7);
        for _ in 0..32 {
            let mut nav = desktop_nav();
            for _ in 0..10 {
                nav.on_scroll_frame(steps.next_below(5_000) as f64);
            }
            nav.on_scroll_frame(0.0);
            assert!(nav.is_bar_visible());
        }
    }

    #[test]
    fn test_scrolling_down_hides_bar() {
        let mut nav = desktop_nav();
        nav.on_scroll_frame(10.0);
        assert!(!nav.is_bar_visible());
        nav.on_scroll_frame(200.0);
        assert!(!nav.is_bar_visible());
    }

    #[test]
    fn test_mouse_move_reveals_then_idle_rehides_when_scrolled() {
        let mut nav = desktop_nav();
        nav.on_scroll_frame(640.0);
        nav.on_mouse_move(5_000);
        assert!(nav.is_bar_visible());
        assert_eq!(nav.next_deadline(), Some(5_000 + MOUSE_IDLE_MS));

        nav.tick(5_000 + MOUSE_IDLE_MS);
        assert!(!nav.is_bar_visible());
    }

    #[test]
    fn test_mouse_idle_at_top_keeps_bar() {
        let mut nav = desktop_nav();
        nav.on_mouse_move(0);
        nav.tick(MOUSE_IDLE_MS);
        assert!(nav.is_bar_visible());
    }

    #[test]
    fn test_theme_click_closes_dropdown_and_menu_together() {
        let mut nav = desktop_nav();
        nav.toggle_menu(0);
        nav.toggle_theme_dropdown(50);
        assert!(nav.is_menu_open() && nav.is_dropdown_open());

        nav.select_theme(ThemeId::Theme3, 100);
        assert!(nav.is_menu_closing());
        assert!(nav.is_dropdown_closing());

        nav.tick(100 + CLOSE_ANIMATION_MS);
        assert!(!nav.is_menu_open());
        assert!(!nav.is_dropdown_open());
        assert_eq!(nav.active_theme(), ThemeId::Theme3);
        assert_eq!(nav.next_deadline(), None);
    }
}
