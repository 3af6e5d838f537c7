use dioxus::prelude::*;
use crate::content::{ BIO, GITHUB_URL, LINKEDIN_URL, OWNER_NAME, RESUME_PATH, SKILLS, STATS };
use crate::routes::Route;
use crate::utils::ThemeState;

#[component]
pub fn About() -> Element {
    let theme = use_context::<Signal<ThemeState>>();
    let mode = theme().mode_class();

    rsx! {
        div { class: "app-container {mode}",
            section { id: "about", class: "about-section {mode}",
                div { class: "about-container",
                    div { class: "about-hero",
                        div { class: "about-hero-text",
                            h1 { class: "hero-title", "Hello!" }
                            p { class: "hero-subtitle",
                                "I'm "
                                span { class: "highlight", "{OWNER_NAME}" }
                                ", a curious mind exploring the intersection of design & development."
                            }
                            p { class: "hero-description",
                                "I build clean, scalable applications. My goal: experiences that not only work well but feel delightful to use."
                            }
                        }
                    }

                    div { class: "about-section-card",
                        h2 { class: "section-title", "Who I Am" }
                        div { class: "bio-details",
                            for item in BIO {
                                div { class: "bio-item", key: "{item.label}",
                                    h3 { "{item.label}" }
                                    p { "{item.value}" }
                                }
                            }
                        }
                    }

                    div { class: "stats-section",
                        for stat in STATS {
                            div { class: "stats-item", key: "{stat.label}",
                                h3 { span { class: "count-number", "{stat.count}" } "+" }
                                p { "{stat.label}" }
                            }
                        }
                    }

                    div { class: "about-section-card",
                        h2 { class: "section-title", "My Skills" }
                        div { class: "skills-grid",
                            for skill in SKILLS {
                                div { class: "skill-item", key: "{skill.name}",
                                    h3 { "{skill.name}" }
                                    div { class: "skill-bar",
                                        div { class: "skill-progress", style: "width: {skill.level}%" }
                                    }
                                    span { class: "skill-level", "{skill.level}%" }
                                }
                            }
                        }
                    }

                    div { class: "about-section-card",
                        h2 { class: "section-title", "My Resume" }
                        p { "Download my resume to learn more about my qualifications and experience." }
                        a { class: "resume-button", href: RESUME_PATH, download: "", "Resume" }
                    }

                    div { class: "about-section-card",
                        h2 { class: "section-title", "Let's Connect!" }
                        p { class: "section-text",
                            "Whether you want to discuss a project, share ideas, or just say hello, I'd love to hear from you."
                        }
                        div { class: "cta-buttons",
                            Link { class: "btn btn-primary {mode}", to: Route::Contact, "Reach me" }
                            div { class: "social-links",
                                a { href: GITHUB_URL, target: "_blank", rel: "noopener noreferrer", "GitHub" }
                                a { href: LINKEDIN_URL, target: "_blank", rel: "noopener noreferrer", "LinkedIn" }
                            }
                        }
                    }
                }
            }
        }
    }
}
