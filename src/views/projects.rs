use std::collections::{ BTreeSet, HashMap };
use dioxus::prelude::*;
use crate::content::{ project, Project, PROJECTS };
use crate::utils::{ use_body_lock, ThemeState };

pub const MAX_RATING: u8 = 5;

/// Visitor-side bookkeeping for the project list. Not persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectBoard {
    liked: BTreeSet<u32>,
    ratings: HashMap<u32, u8>,
    selected: Option<u32>,
}

impl ProjectBoard {
    pub fn toggle_like(&mut self, id: u32) {
        if !self.liked.remove(&id) {
            self.liked.insert(id);
        }
    }

    pub fn is_liked(&self, id: u32) -> bool {
        self.liked.contains(&id)
    }

    /// Out-of-range ratings are ignored.
    pub fn rate(&mut self, id: u32, stars: u8) {
        if (1..=MAX_RATING).contains(&stars) {
            self.ratings.insert(id, stars);
        }
    }

    pub fn rating(&self, id: u32) -> u8 {
        self.ratings.get(&id).copied().unwrap_or(0)
    }

    pub fn open(&mut self, id: u32) {
        if project(id).is_some() {
            self.selected = Some(id);
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&'static Project> {
        self.selected.and_then(project)
    }
}

#[component]
fn StarRating(id: u32, mut board: Signal<ProjectBoard>) -> Element {
    let current = board.read().rating(id);
    rsx! {
        div { class: "star-rating",
            for stars in 1..=MAX_RATING {
                button {
                    key: "{stars}",
                    class: if stars <= current { "star filled" } else { "star" },
                    aria_label: "Rate {stars} of {MAX_RATING}",
                    onclick: move |_| board.write().rate(id, stars),
                    "★"
                }
            }
        }
    }
}

#[component]
fn ProjectRow(entry: Project, mut board: Signal<ProjectBoard>) -> Element {
    let id = entry.id;
    let liked = board.read().is_liked(id);

    rsx! {
        div { class: "project-row",
            div { class: "project-info",
                h3 { class: "project-title", "{entry.title}" }
                p { class: "project-description", "{entry.description}" }
                div { class: "project-tech",
                    for tech in entry.technologies.iter() {
                        span { class: "tech-tag", key: "{tech}", "{tech}" }
                    }
                }
                div { class: "project-actions",
                    button {
                        class: if liked { "like-btn liked" } else { "like-btn" },
                        aria_label: "Like project",
                        onclick: move |_| board.write().toggle_like(id),
                        if liked { "♥" } else { "♡" }
                    }
                    StarRating { id, board }
                    button {
                        class: "info-btn",
                        onclick: move |_| board.write().open(id),
                        "Details"
                    }
                    a { href: entry.github, target: "_blank", rel: "noopener noreferrer", "GitHub" }
                    if let Some(live) = entry.live {
                        a { href: live, target: "_blank", rel: "noopener noreferrer", "Live" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    let theme = use_context::<Signal<ThemeState>>();
    let mut board = use_signal(ProjectBoard::default);

    let popup_open = use_memo(move || board.read().selected().is_some());
    use_body_lock(popup_open);

    let mode = theme().mode_class();
    let selected = board.read().selected();

    rsx! {
        div { class: "app-container {mode}",
            section { id: "projects", class: "projects-section {mode}",
                h1 { class: "projects-heading", "Projects" }
                div { class: "projects-list",
                    for entry in PROJECTS {
                        ProjectRow { key: "{entry.id}", entry, board }
                    }
                }
            }

            if let Some(entry) = selected {
                div {
                    class: "popup-overlay",
                    onclick: move |_| board.write().close(),
                    div {
                        class: "popup-content {mode}",
                        onclick: move |evt| evt.stop_propagation(),
                        button {
                            class: "close-button",
                            aria_label: "Close details",
                            onclick: move |_| board.write().close(),
                            "✕"
                        }
                        h2 { "{entry.title}" }
                        for (index, paragraph) in entry.about.split(". ").enumerate() {
                            p { key: "{index}", "{paragraph}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_toggles_membership() {
        let mut board = ProjectBoard::default();
        board.toggle_like(2);
        board.toggle_like(3);
        board.toggle_like(2);
        assert!(!board.is_liked(2));
        assert!(board.is_liked(3));
    }

    #[test]
    fn test_rating_last_write_wins_and_range_checked() {
        let mut board = ProjectBoard::default();
        assert_eq!(board.rating(1), 0);
        board.rate(1, 4);
        board.rate(1, 2);
        board.rate(1, 0);
        board.rate(1, 6);
        assert_eq!(board.rating(1), 2);
    }

    #[test]
    fn test_popup_only_opens_known_projects() {
        let mut board = ProjectBoard::default();
        board.open(99);
        assert!(board.selected().is_none());
        board.open(4);
        assert_eq!(board.selected().map(|p| p.id), Some(4));
        board.close();
        assert!(board.selected().is_none());
    }
}
