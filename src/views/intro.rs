use dioxus::prelude::*;
use crate::utils::clock;

pub const LETTERS: [&str; 15] = ["A", "L", "E", "X", "'S", "-", "P", "O", "R", "T", "F", "O", "L", "I", "O"];
const ACCENT_LETTERS: [usize; 3] = [1, 5, 7];

pub const LETTER_INTERVAL_MS: u64 = 100;
pub const MAX_VISIBLE_LETTERS: usize = 9;
pub const EXIT_AT_MS: u64 = 2_100;
pub const EXIT_ANIMATION_MS: u64 = 600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroStage {
    Entering,
    Exiting,
    Complete,
}

impl IntroStage {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Entering => "entering",
            Self::Exiting | Self::Complete => "exiting",
        }
    }
}

/// Stage and number of revealed letters `elapsed_ms` after the intro started.
pub fn intro_at(elapsed_ms: u64) -> (IntroStage, usize) {
    let revealed = ((elapsed_ms.min(EXIT_AT_MS) / LETTER_INTERVAL_MS) as usize).min(MAX_VISIBLE_LETTERS);
    let stage = if elapsed_ms < EXIT_AT_MS {
        IntroStage::Entering
    } else if elapsed_ms < EXIT_AT_MS + EXIT_ANIMATION_MS {
        IntroStage::Exiting
    } else {
        IntroStage::Complete
    };
    (stage, revealed)
}

fn letter_class(index: usize, revealed: usize) -> String {
    let mut class = String::new();
    if index < revealed {
        class.push_str("visible");
    }
    if ACCENT_LETTERS.contains(&index) {
        if !class.is_empty() {
            class.push(' ');
        }
        class.push_str("special-letter");
    }
    class
}

#[component]
pub fn Intro(on_complete: EventHandler<()>) -> Element {
    let started = use_hook(clock::now_ms);
    let mut elapsed = use_signal(|| 0u64);

    use_future(move || async move {
        loop {
            clock::sleep_ms(LETTER_INTERVAL_MS).await;
            let now = clock::now_ms().saturating_sub(started);
            elapsed.set(now);
            if intro_at(now).0 == IntroStage::Complete {
                on_complete.call(());
                break;
            }
        }
    });

    let (stage, revealed) = intro_at(elapsed());
    let stage_class = stage.class();

    rsx! {
        div { class: "intro-container {stage_class}",
            div { class: "portfolio-text",
                for (index, letter) in LETTERS.iter().enumerate() {
                    span {
                        key: "{index}",
                        class: letter_class(index, revealed),
                        style: "--i: {index}",
                        "{letter}"
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
    fn test_letters_reveal_and_cap() {
        assert_eq!(intro_at(0), (IntroStage::Entering, 0));
        assert_eq!(intro_at(350), (IntroStage::Entering, 3));
        assert_eq!(intro_at(1_500), (IntroStage::Entering, 9));
    }

    #[test]
    fn test_exit_then_complete() {
        assert_eq!(intro_at(2_099).0, IntroStage::Entering);
        assert_eq!(intro_at(2_100), (IntroStage::Exiting, 9));
        assert_eq!(intro_at(2_699).0, IntroStage::Exiting);
        assert_eq!(intro_at(2_700).0, IntroStage::Complete);
    }

    #[test]
    fn test_letter_class() {
        assert_eq!(letter_class(0, 0), "");
        assert_eq!(letter_class(1, 0), "special-letter");
        assert_eq!(letter_class(1, 2), "visible special-letter");
        assert_eq!(letter_class(3, 9), "visible");
    }
}
