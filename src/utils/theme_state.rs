use std::fmt::{ Display, Formatter };
use std::str::FromStr;

/// One of the six accent presets. Independent of dark/light mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ThemeId {
    #[default]
    Theme1,
    Theme2,
    Theme3,
    Theme4,
    Theme5,
    Theme6,
}

impl ThemeId {
    pub const ALL: [ThemeId; 6] = [
        ThemeId::Theme1,
        ThemeId::Theme2,
        ThemeId::Theme3,
        ThemeId::Theme4,
        ThemeId::Theme5,
        ThemeId::Theme6,
    ];

    /// Marker used both as the root class and as the persisted value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Theme1 => "theme1",
            Self::Theme2 => "theme2",
            Self::Theme3 => "theme3",
            Self::Theme4 => "theme4",
            Self::Theme5 => "theme5",
            Self::Theme6 => "theme6",
        }
    }

    /// 1-based position, as shown in the picker's aria labels.
    pub fn number(&self) -> usize {
        match self {
            Self::Theme1 => 1,
            Self::Theme2 => 2,
            Self::Theme3 => 3,
            Self::Theme4 => 4,
            Self::Theme5 => 5,
            Self::Theme6 => 6,
        }
    }

    /// Swatch color for the dropdown grid.
    pub fn swatch(&self) -> &'static str {
        match self {
            Self::Theme1 => "#8d50ff",
            Self::Theme2 => "#FF5252",
            Self::Theme3 => "#4CAF50",
            Self::Theme4 => "#FFC107",
            Self::Theme5 => "#2196F3",
            Self::Theme6 => "#9C27B0",
        }
    }
}

impl Display for ThemeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeId::ALL
            .iter()
            .copied()
            .find(|theme| theme.as_str() == s.trim())
            .ok_or_else(|| format!("unknown theme: {}", s))
    }
}

/// What the root element renders: the active preset plus the dark flag.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ThemeState {
    pub theme: ThemeId,
    pub is_dark: bool,
}

impl ThemeState {
    pub fn new(theme: ThemeId, is_dark: bool) -> Self {
        Self { theme, is_dark }
    }

    /// Root class list: exactly one theme marker, plus `dark` when enabled.
    pub fn root_class(&self) -> String {
        if self.is_dark {
            format!("{} dark", self.theme)
        } else {
            self.theme.to_string()
        }
    }

    /// `dark`/`light` suffix used by page sections.
    pub fn mode_class(&self) -> &'static str {
        if self.is_dark { "dark" } else { "light" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_class_has_exactly_one_theme_marker() {
        for theme in ThemeId::ALL {
            for dark in [false, true] {
                let class = ThemeState::new(theme, dark).root_class();
                let markers: Vec<&str> = class.split_whitespace().collect();
                let themes: Vec<&&str> = markers
                    .iter()
                    .filter(|m| m.starts_with("theme"))
                    .collect();
                assert_eq!(themes, vec![&theme.as_str()]);
                assert_eq!(markers.contains(&"dark"), dark);
            }
        }
    }

    #[test]
    fn test_parse_theme_id() {
        assert_eq!("theme4".parse::<ThemeId>(), Ok(ThemeId::Theme4));
        assert_eq!(" theme6\n".parse::<ThemeId>(), Ok(ThemeId::Theme6));
        assert!("theme7".parse::<ThemeId>().is_err());
        assert!("".parse::<ThemeId>().is_err());
    }
}
