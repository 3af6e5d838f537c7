use dioxus::prelude::*;
use crate::controller::{
    BridgeEvent,
    NavController,
    BRIDGE_SCRIPT,
    TEARDOWN_SCRIPT,
};
use crate::routes::Route;
use crate::utils::{
    clock::now_ms,
    storage,
    use_body_lock,
    use_deadline_timer,
    AppStore,
    ThemeId,
    ThemeState,
};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const LOGO: Asset = asset!("/assets/logo.svg");

#[component(no_case_check)]
pub fn Navbar() -> Element {
    let mut theme = use_context::<Signal<ThemeState>>();
    let mut nav = use_signal(|| {
        NavController::<AppStore>::mount(storage::local_store(), theme.peek().is_dark)
    });

    // Publish the theme restored at mount to the root element.
    use_effect(move || {
        let applied = nav.peek().theme_state();
        theme.set(applied);
    });

    use_effect(move || {
        let is_dark = theme.read().is_dark;
        nav.with_mut(|n| {
            n.sync_dark_mode(is_dark);
        });
    });

    use_deadline_timer(
        move || nav.read().next_deadline(),
        use_callback(move |now: u64| nav.with_mut(|n| n.tick(now)))
    );

    use_hook(move || {
        spawn(async move {
            let mut bridge = document::eval(BRIDGE_SCRIPT);
            loop {
                match bridge.recv::<BridgeEvent>().await {
                    Ok(event) => nav.with_mut(|n| event.apply(n, now_ms())),
                    Err(e) => {
                        log::debug!("Navigation event bridge closed: {:?}", e);
                        break;
                    }
                }
            }
        })
    });

    let scroll_locked = use_memo(move || nav.read().scroll_locked());
    use_body_lock(scroll_locked);

    use_drop(move || {
        if let Ok(mut controller) = nav.try_write() {
            controller.unmount();
        }
        document::eval(TEARDOWN_SCRIPT);
    });

    let close_menu = move |_: MouseEvent| nav.with_mut(|n| n.close_menu(now_ms()));

    let controller = nav.read();
    let menu_open = controller.is_menu_open();
    let menu_closing = controller.is_menu_closing();
    let dropdown_open = controller.is_dropdown_open();
    let dropdown_class = if controller.is_dropdown_closing() {
        "theme-dropdown closing"
    } else {
        "theme-dropdown"
    };
    let active_theme = controller.active_theme();
    let is_dark = controller.theme_state().is_dark;
    let nav_class = controller.nav_class();
    let links_class = controller.links_class();
    drop(controller);

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        nav { class: "{nav_class}",
            div { class: "side-box left-box" }
            div { class: "navbar-container",
                Link {
                    class: if menu_open { "navbar-logo logo-hidden" } else { "navbar-logo" },
                    to: Route::Home,
                    onclick: close_menu,
                    img { src: LOGO, alt: "Logo" }
                }

                div {
                    class: "{links_class}",
                    ondoubleclick: move |_| nav.with_mut(|n| n.on_links_double_click(now_ms())),

                    Link { to: Route::Home, onclick: close_menu, "Home" }
                    Link { to: Route::About, onclick: close_menu, "About" }
                    Link { to: Route::Projects, onclick: close_menu, "Projects" }
                    Link { to: Route::Contact, onclick: close_menu, "Contact" }

                    div {
                        class: "theme-selector-container",
                        onmouseleave: move |_| nav.with_mut(|n| n.dropdown_mouse_leave(now_ms())),
                        onmouseenter: move |_| nav.with_mut(|n| n.dropdown_mouse_enter()),
                        onclick: move |evt| {
                            evt.stop_propagation();
                            nav.with_mut(|n| n.toggle_theme_dropdown(now_ms()));
                        },
                        button {
                            class: "theme-selector-button",
                            aria_label: "Change theme",
                            h3 { class: "mytheme", "Themes" }
                        }

                        if dropdown_open {
                            div {
                                class: dropdown_class,
                                onclick: move |evt| evt.stop_propagation(),
                                div { class: "theme-grid",
                                    for option in ThemeId::ALL {
                                        button {
                                            key: "{option}",
                                            class: if option == active_theme { "theme-option active" } else { "theme-option" },
                                            "data-theme": "{option}",
                                            aria_label: format!("Theme {}", option.number()),
                                            style: format!("background-color: {}", option.swatch()),
                                            onclick: move |evt| {
                                                evt.stop_propagation();
                                                let applied = nav.write().select_theme(option, now_ms());
                                                theme.set(applied);
                                            },
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "dandmmode",
                        div { class: "togglewrap",
                            button {
                                class: "theme-toggle",
                                aria_label: "Toggle dark mode",
                                onclick: move |_| {
                                    let applied = nav.write().toggle_dark_mode(now_ms());
                                    theme.set(applied);
                                },
                                if is_dark { "🌞" } else { "🌙" }
                            }
                        }
                    }
                }

                button {
                    class: "mobile-menu-btn",
                    aria_label: "Menu",
                    onclick: move |_| nav.with_mut(|n| n.toggle_menu(now_ms())),
                    if menu_open { "✕" } else { "☰" }
                }
            }
            div { class: "side-box right-box" }
        }

        if menu_open {
            div {
                class: if menu_closing { "menu-overlay closing" } else { "menu-overlay" },
                onclick: close_menu,
            }
        }

        Outlet::<Route> {}
    }
}
