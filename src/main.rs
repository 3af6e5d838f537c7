use dioxus::prelude::*;
use portfolio_site::storage::{
    self,
    read_dark_mode,
    read_pref,
    write_dark_mode,
    write_pref,
    INTRO_SHOWN_KEY,
    SELECTED_THEME_KEY,
};
use portfolio_site::media::prefers_dark_scheme;
use portfolio_site::{ Intro, Route, ScrollLock, ThemeId, ThemeState };

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const PAGES_CSS: Asset = asset!("/assets/styling/pages.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info).ok();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let theme = use_signal(|| {
        let store = storage::local_store();
        let is_dark = read_dark_mode(&store).unwrap_or_else(prefers_dark_scheme);
        // Read only; the navbar applies and persists the theme when it mounts.
        let theme = read_pref(&store, SELECTED_THEME_KEY)
            .and_then(|raw| raw.parse::<ThemeId>().ok())
            .unwrap_or_default();
        ThemeState::new(theme, is_dark)
    });
    use_context_provider(|| theme);
    use_context_provider(ScrollLock::default);

    let mut intro_done = use_signal(|| {
        read_pref(&storage::session_store(), INTRO_SHOWN_KEY).is_some()
    });

    use_effect(move || {
        let is_dark = theme.read().is_dark;
        write_dark_mode(&mut storage::local_store(), is_dark);
    });

    let root_class = theme.read().root_class();

    rsx! {
        div {
            class: "App {root_class}",
            document::Link { rel: "icon", href: FAVICON }
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            document::Link { rel: "stylesheet", href: PAGES_CSS }
            if intro_done() {
                Router::<Route> {}
            } else {
                Intro {
                    on_complete: move |_| {
                        write_pref(&mut storage::session_store(), INTRO_SHOWN_KEY, "true");
                        intro_done.set(true);
                    },
                }
            }
        }
    }
}
