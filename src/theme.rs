//! Theme table and the theme store.
//!
//! Each theme is a block of CSS custom properties injected at the document
//! root. The store is provided through component context; consumers read its
//! signal and re-render on change, and the selected value persists through the
//! storage adapter under a single key.

use crate::storage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    Paper,
    Sand,
    Forest,
    Ocean,
    Rose,
    Slate,
    Ember,
}

pub const ALL_THEMES: [Theme; 9] = [
    Theme::Light,
    Theme::Dark,
    Theme::Paper,
    Theme::Sand,
    Theme::Forest,
    Theme::Ocean,
    Theme::Rose,
    Theme::Slate,
    Theme::Ember,
];

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Paper => "paper",
            Theme::Sand => "sand",
            Theme::Forest => "forest",
            Theme::Ocean => "ocean",
            Theme::Rose => "rose",
            Theme::Slate => "slate",
            Theme::Ember => "ember",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "paper" => Some(Theme::Paper),
            "sand" => Some(Theme::Sand),
            "forest" => Some(Theme::Forest),
            "ocean" => Some(Theme::Ocean),
            "rose" => Some(Theme::Rose),
            "slate" => Some(Theme::Slate),
            "ember" => Some(Theme::Ember),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Paper => "Paper",
            Theme::Sand => "Sand",
            Theme::Forest => "Forest",
            Theme::Ocean => "Ocean",
            Theme::Rose => "Rose",
            Theme::Slate => "Slate",
            Theme::Ember => "Ember",
        }
    }
}

/// Theme read at startup: the persisted value when present and valid,
/// otherwise the default.
pub fn initial_theme() -> Theme {
    storage::get(storage::THEME_KEY)
        .and_then(|raw| Theme::parse(&raw))
        .unwrap_or_default()
}

pub fn persist_theme(theme: Theme) {
    storage::set(storage::THEME_KEY, theme.as_str());
}

pub struct ThemeDefinition {
    pub css: &'static str,
    pub logo_class: &'static str,
}

pub fn theme_definition(theme: Theme) -> ThemeDefinition {
    match theme {
        Theme::Light => ThemeDefinition {
            css: LIGHT_THEME,
            logo_class: "site-logo",
        },
        Theme::Dark => ThemeDefinition {
            css: DARK_THEME,
            logo_class: "site-logo site-logo-inverted",
        },
        Theme::Paper => ThemeDefinition {
            css: PAPER_THEME,
            logo_class: "site-logo",
        },
        Theme::Sand => ThemeDefinition {
            css: SAND_THEME,
            logo_class: "site-logo",
        },
        Theme::Forest => ThemeDefinition {
            css: FOREST_THEME,
            logo_class: "site-logo site-logo-inverted",
        },
        Theme::Ocean => ThemeDefinition {
            css: OCEAN_THEME,
            logo_class: "site-logo site-logo-inverted",
        },
        Theme::Rose => ThemeDefinition {
            css: ROSE_THEME,
            logo_class: "site-logo",
        },
        Theme::Slate => ThemeDefinition {
            css: SLATE_THEME,
            logo_class: "site-logo site-logo-inverted",
        },
        Theme::Ember => ThemeDefinition {
            css: EMBER_THEME,
            logo_class: "site-logo site-logo-inverted",
        },
    }
}

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #ffffff;
    --color-bg-secondary: #f6f6f4;
    --color-bg-overlay: rgba(255, 255, 255, 0.94);
    --color-text-primary: #17181a;
    --color-text-muted: #5c5f66;
    --color-border: #d9dadd;
    --color-surface-muted: #ededeb;
    --color-accent: #2456e6;
    --color-accent-soft: rgba(36, 86, 230, 0.12);
    --color-chat-user-bg: #17181a;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #f1f1ef;
    --color-chat-assistant-text: #17181a;
    --color-orb: radial-gradient(circle at 32% 30%, #6d8dff, #2456e6 70%);
}
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #0d0e10;
    --color-bg-secondary: #141519;
    --color-bg-overlay: rgba(13, 14, 16, 0.92);
    --color-text-primary: #f2f2f0;
    --color-text-muted: #9a9da4;
    --color-border: #2a2c31;
    --color-surface-muted: #1c1e22;
    --color-accent: #7d9bff;
    --color-accent-soft: rgba(125, 155, 255, 0.16);
    --color-chat-user-bg: #f2f2f0;
    --color-chat-user-text: #0d0e10;
    --color-chat-assistant-bg: #1c1e22;
    --color-chat-assistant-text: #f2f2f0;
    --color-orb: radial-gradient(circle at 32% 30%, #9db4ff, #4a6ae0 70%);
}
"#;

const PAPER_THEME: &str = r#"
:root {
    --color-bg-primary: #faf7f0;
    --color-bg-secondary: #f2ede1;
    --color-bg-overlay: rgba(250, 247, 240, 0.94);
    --color-text-primary: #262115;
    --color-text-muted: #6e6652;
    --color-border: #ddd4c2;
    --color-surface-muted: #ece5d6;
    --color-accent: #8a5a18;
    --color-accent-soft: rgba(138, 90, 24, 0.12);
    --color-chat-user-bg: #262115;
    --color-chat-user-text: #faf7f0;
    --color-chat-assistant-bg: #f0e9da;
    --color-chat-assistant-text: #262115;
    --color-orb: radial-gradient(circle at 32% 30%, #d9a85e, #8a5a18 70%);
}
"#;

const SAND_THEME: &str = r#"
:root {
    --color-bg-primary: #f5e9d9;
    --color-bg-secondary: #efdfc8;
    --color-bg-overlay: rgba(245, 233, 217, 0.94);
    --color-text-primary: #33271a;
    --color-text-muted: #7a6a54;
    --color-border: #d9c6a8;
    --color-surface-muted: #e8d8bf;
    --color-accent: #b3541e;
    --color-accent-soft: rgba(179, 84, 30, 0.14);
    --color-chat-user-bg: #33271a;
    --color-chat-user-text: #f5e9d9;
    --color-chat-assistant-bg: #eeddc4;
    --color-chat-assistant-text: #33271a;
    --color-orb: radial-gradient(circle at 32% 30%, #e08a4e, #b3541e 70%);
}
"#;

const FOREST_THEME: &str = r#"
:root {
    --color-bg-primary: #101b14;
    --color-bg-secondary: #16241b;
    --color-bg-overlay: rgba(16, 27, 20, 0.92);
    --color-text-primary: #e9f2ea;
    --color-text-muted: #94a898;
    --color-border: #2b3f31;
    --color-surface-muted: #1d2f24;
    --color-accent: #6fce8f;
    --color-accent-soft: rgba(111, 206, 143, 0.16);
    --color-chat-user-bg: #e9f2ea;
    --color-chat-user-text: #101b14;
    --color-chat-assistant-bg: #1d2f24;
    --color-chat-assistant-text: #e9f2ea;
    --color-orb: radial-gradient(circle at 32% 30%, #9be0b2, #3f9e63 70%);
}
"#;

const OCEAN_THEME: &str = r#"
:root {
    --color-bg-primary: #0a1622;
    --color-bg-secondary: #0f1f30;
    --color-bg-overlay: rgba(10, 22, 34, 0.92);
    --color-text-primary: #e8f1f8;
    --color-text-muted: #8ba3b5;
    --color-border: #24405a;
    --color-surface-muted: #152a3e;
    --color-accent: #53b6e8;
    --color-accent-soft: rgba(83, 182, 232, 0.16);
    --color-chat-user-bg: #e8f1f8;
    --color-chat-user-text: #0a1622;
    --color-chat-assistant-bg: #152a3e;
    --color-chat-assistant-text: #e8f1f8;
    --color-orb: radial-gradient(circle at 32% 30%, #8cd2f4, #2a86c0 70%);
}
"#;

const ROSE_THEME: &str = r#"
:root {
    --color-bg-primary: #fdf3f4;
    --color-bg-secondary: #f9e7ea;
    --color-bg-overlay: rgba(253, 243, 244, 0.94);
    --color-text-primary: #33171d;
    --color-text-muted: #84606a;
    --color-border: #e8cdd3;
    --color-surface-muted: #f4dde1;
    --color-accent: #c2375c;
    --color-accent-soft: rgba(194, 55, 92, 0.12);
    --color-chat-user-bg: #33171d;
    --color-chat-user-text: #fdf3f4;
    --color-chat-assistant-bg: #f6e1e5;
    --color-chat-assistant-text: #33171d;
    --color-orb: radial-gradient(circle at 32% 30%, #ec7f9d, #c2375c 70%);
}
"#;

const SLATE_THEME: &str = r#"
:root {
    --color-bg-primary: #1a1d23;
    --color-bg-secondary: #21252d;
    --color-bg-overlay: rgba(26, 29, 35, 0.92);
    --color-text-primary: #e6e8ec;
    --color-text-muted: #9aa0ab;
    --color-border: #353b46;
    --color-surface-muted: #2a2f38;
    --color-accent: #a0aec8;
    --color-accent-soft: rgba(160, 174, 200, 0.16);
    --color-chat-user-bg: #e6e8ec;
    --color-chat-user-text: #1a1d23;
    --color-chat-assistant-bg: #2a2f38;
    --color-chat-assistant-text: #e6e8ec;
    --color-orb: radial-gradient(circle at 32% 30%, #c3cde0, #707d96 70%);
}
"#;

const EMBER_THEME: &str = r#"
:root {
    --color-bg-primary: #190f0c;
    --color-bg-secondary: #221511;
    --color-bg-overlay: rgba(25, 15, 12, 0.92);
    --color-text-primary: #f5ece7;
    --color-text-muted: #af9a8f;
    --color-border: #442c22;
    --color-surface-muted: #2c1c15;
    --color-accent: #f07a3c;
    --color-accent-soft: rgba(240, 122, 60, 0.16);
    --color-chat-user-bg: #f5ece7;
    --color-chat-user-text: #190f0c;
    --color-chat-assistant-bg: #2c1c15;
    --color-chat-assistant-text: #f5ece7;
    --color-orb: radial-gradient(circle at 32% 30%, #ffab72, #d4541a 70%);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // The storage adapter is process-global; serialize tests that touch the
    // shared theme key.
    static THEME_KEY_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn every_theme_round_trips_through_storage() {
        let _guard = THEME_KEY_LOCK.lock().unwrap();
        for theme in ALL_THEMES {
            persist_theme(theme);
            assert_eq!(initial_theme(), theme, "theme {} did not survive", theme.as_str());
        }
        storage::remove(storage::THEME_KEY);
    }

    #[test]
    fn unknown_stored_value_falls_back_to_light() {
        let _guard = THEME_KEY_LOCK.lock().unwrap();
        storage::set(storage::THEME_KEY, "chartreuse");
        assert_eq!(initial_theme(), Theme::Light);
        storage::remove(storage::THEME_KEY);
    }

    #[test]
    fn missing_value_defaults_to_light() {
        let _guard = THEME_KEY_LOCK.lock().unwrap();
        storage::remove(storage::THEME_KEY);
        assert_eq!(initial_theme(), Theme::Light);
    }

    #[test]
    fn parse_rejects_labels() {
        // Stored values are the lowercase identifiers, not display labels.
        assert_eq!(Theme::parse("Dark"), None);
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    }

    #[test]
    fn every_theme_has_a_definition() {
        for theme in ALL_THEMES {
            let definition = theme_definition(theme);
            assert!(definition.css.contains("--color-bg-primary"));
        }
    }
}
