use std::collections::BTreeSet;
use dioxus::prelude::*;
use crate::content::OWNER_NAME;
use crate::routes::Route;
use crate::utils::{ clock, ThemeState };

pub const ROLE_TITLES: [&str; 7] = [
    "Full Stack Developer",
    "Software Engineer",
    "Problem Solver",
    "Innovation Explorer",
    "Digital Creator",
    "Cloud Learner",
    "AI Enthusiast",
];

/// Floating badges around the hero: id, name, label.
pub const TECH_ICONS: [(u32, &str, &str); 7] = [
    (1, "html", "HTML"),
    (2, "star", "★"),
    (3, "js", "JS"),
    (4, "react", "React"),
    (5, "vscode", "VS"),
    (6, "github", "GH"),
    (7, "css", "CSS"),
];

pub const ROTATE_EVERY_MS: u64 = 1_500;
pub const FADE_MS: u64 = 500;

/// Headline index and whether it is faded in, `elapsed_ms` after mount.
///
/// Every `ROTATE_EVERY_MS` the title fades out; `FADE_MS` later the next one
/// fades in.
pub fn headline_at(elapsed_ms: u64) -> (usize, bool) {
    let rotations = (elapsed_ms / ROTATE_EVERY_MS) as usize;
    let into_cycle = elapsed_ms % ROTATE_EVERY_MS;
    if rotations > 0 && into_cycle < FADE_MS {
        ((rotations - 1) % ROLE_TITLES.len(), false)
    } else {
        (rotations % ROLE_TITLES.len(), true)
    }
}

/// Milliseconds until `headline_at` next changes.
pub fn next_headline_change(elapsed_ms: u64) -> u64 {
    let into_cycle = elapsed_ms % ROTATE_EVERY_MS;
    if elapsed_ms >= ROTATE_EVERY_MS && into_cycle < FADE_MS {
        FADE_MS - into_cycle
    } else {
        ROTATE_EVERY_MS - into_cycle
    }
}

/// Icons the visitor clicked away. Not persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IconField {
    dismissed: BTreeSet<u32>,
}

impl IconField {
    /// Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u32) {
        if TECH_ICONS.iter().any(|(known, _, _)| *known == id) {
            self.dismissed.insert(id);
        }
    }

    pub fn is_active(&self, id: u32) -> bool {
        !self.dismissed.contains(&id)
    }

    pub fn active_count(&self) -> usize {
        TECH_ICONS.len() - self.dismissed.len()
    }
}

#[component]
pub fn Home() -> Element {
    let theme = use_context::<Signal<ThemeState>>();
    let started = use_hook(clock::now_ms);
    let mut headline = use_signal(|| headline_at(0));
    let mut icons = use_signal(IconField::default);

    use_future(move || async move {
        loop {
            let elapsed = clock::now_ms().saturating_sub(started);
            clock::sleep_ms(next_headline_change(elapsed)).await;
            headline.set(headline_at(clock::now_ms().saturating_sub(started)));
        }
    });

    let (index, faded_in) = headline();
    let title = ROLE_TITLES[index];
    let mode = theme().mode_class();

    rsx! {
        div { class: "main",
            section { id: "home", class: "home-section {mode}",
                div { class: "homewrapper",
                    div { class: "home-content",
                        h1 { class: "home-title",
                            "Hi, I'm "
                            span { class: "name-highlight", "{OWNER_NAME}" }
                        }
                        h2 { class: "home-subtitle",
                            "I am a "
                            span {
                                class: if faded_in { "animated-text fade-in" } else { "animated-text fade-out" },
                                "{title}"
                            }
                        }
                        p { class: "home-description",
                            "Turning ideas into interactive experiences that inspire and engage. "
                            "Every line of code is a step toward innovation."
                        }
                        div { class: "home-buttons",
                            Link { class: "btn btn-primary", to: Route::Projects, "Discover" }
                            Link { class: "btn btn-secondary", to: Route::About, "About" }
                        }
                    }
                    div { class: "home-image",
                        for (index, (id, name, label)) in TECH_ICONS.into_iter().enumerate() {
                            div {
                                key: "{id}",
                                class: if icons.read().is_active(id) { "tech-icon-container" } else { "tech-icon-container dismissed" },
                                style: "--slot: {index}",
                                role: "button",
                                aria_label: "{name} icon",
                                tabindex: 0,
                                onclick: move |_| icons.write().dismiss(id),
                                span { class: if name == "github" { "tech-icon profile" } else { "tech-icon" }, "{label}" }
                            }
                        }
                    }
                }
            }
            section { id: "section2", class: "section2 {mode}",
                div { class: "sec2container",
                    div { class: "txt1", "CREATIVITY MEETS TECHNOLOGY" }
                    div { class: "txt2", "SHAPING DIGITAL EXPERIENCES" }
                }
            }
            section { class: "section3 {mode}",
                div { class: "circle-content",
                    div { class: "big-word top-left", "IMAGINE" }
                    div { class: "big-word bottom-right", "CREATE" }
                }
            }
        }
    }
}
