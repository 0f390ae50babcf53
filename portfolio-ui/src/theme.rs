//! Light/dark theming: two fixed palettes and the persisted preference.
//!
//! The two [`Theme`] values are statics. Nothing ever mutates a theme;
//! switching swaps which static is active, so components can hold plain
//! `&'static Theme` references.

/// Key the preference is stored under in the browser's local storage.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeName {
    Light,
    Dark,
}

impl ThemeName {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }
}

/// Base color table shared by both themes.
#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    pub blue_super_light: &'static str,
    pub blue_light: &'static str,
    pub blue_medium: &'static str,
    pub blue_dark: &'static str,
    pub blue_dark2: &'static str,
    pub blue_dark3: &'static str,
    pub red_light: &'static str,
    pub red_dark: &'static str,
    pub purple: &'static str,
    pub orange: &'static str,
    pub mint_green: &'static str,
    pub white: &'static str,
    pub gray: &'static str,
    pub gray_dark: &'static str,
    pub black: &'static str,
}

pub static PALETTE: Palette = Palette {
    blue_super_light: "#E3F4FF",
    blue_light: "#BBE1FA",
    blue_medium: "#26AFED",
    blue_dark: "#016E9F",
    blue_dark2: "#002837",
    blue_dark3: "#01161E",
    red_light: "#E41B4D",
    red_dark: "#B83B5E",
    purple: "#6A2C70",
    orange: "#FF7700",
    mint_green: "#04b07e",
    white: "#FFFFFF",
    gray: "#F2F2F2",
    gray_dark: "#BBBBBB",
    black: "#4B4B4B",
};

/// Immutable bundle of colors and gradients driving the page's look.
#[derive(Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: ThemeName,
    pub gradient1: &'static str,
    pub gradient2: &'static str,
    pub gradient_header: &'static str,
    pub bg_main: &'static str,
    pub bg_accent: &'static str,
    pub card_bg: &'static str,
    pub game_card_bg: &'static str,
    pub social_icon_bg: &'static str,
    pub social_icon_color: &'static str,
    pub switcher_bg: &'static str,
    pub switcher_color: &'static str,
    pub font_primary: &'static str,
    pub font_secondary: &'static str,
    pub font_invert: &'static str,
    pub project_header: &'static str,
    pub link_color: &'static str,
    pub base: &'static Palette,
}

pub static LIGHT: Theme = Theme {
    name: ThemeName::Light,
    gradient1: "linear-gradient(to right, #26AFED, #016E9F)",
    gradient2: "linear-gradient(to right, #016E9F, #002837)",
    gradient_header: "linear-gradient(to right, #26AFED, #016E9F)",
    bg_main: "#F2F2F2",
    bg_accent: "#BBE1FA",
    card_bg: "#FFFFFF",
    game_card_bg: "#FFFFFF",
    social_icon_bg: "#BBE1FA",
    social_icon_color: "#26AFED",
    switcher_bg: "#26AFED",
    switcher_color: "#002837",
    font_primary: "#4B4B4B",
    font_secondary: "#BBBBBB",
    font_invert: "#FFFFFF",
    project_header: "#016E9F",
    link_color: "#E41B4D",
    base: &PALETTE,
};

pub static DARK: Theme = Theme {
    name: ThemeName::Dark,
    gradient1: "linear-gradient(to right, #016E9F, #002837)",
    gradient2: "linear-gradient(to right, #002837, #01161E)",
    gradient_header: "linear-gradient(to right, #002837, #01161E)",
    bg_main: "#01161E",
    bg_accent: "#002837",
    card_bg: "#01161E",
    game_card_bg: "#002837",
    social_icon_bg: "#016E9F",
    social_icon_color: "#002837",
    switcher_bg: "#01161E",
    switcher_color: "#BBE1FA",
    font_primary: "#F2F2F2",
    font_secondary: "#BBBBBB",
    font_invert: "#FFFFFF",
    project_header: "#BBE1FA",
    link_color: "#E41B4D",
    base: &PALETTE,
};

/// Key-value preference storage. The browser implementation sits in
/// [`crate::interop`]; tests inject an in-memory one.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Owns the active theme and keeps the stored preference in sync with it.
pub struct ThemeController<S> {
    active: &'static Theme,
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Restores the last-chosen theme. Anything other than a stored `"dark"`
    /// (including an absent or unreadable value) falls back to light.
    pub fn new(store: S) -> Self {
        let active = match store.get(THEME_KEY).as_deref() {
            Some("dark") => &DARK,
            _ => &LIGHT,
        };
        Self { active, store }
    }

    /// Swaps light for dark (or back) and writes the choice through.
    pub fn toggle(&mut self) {
        self.active = if std::ptr::eq(self.active, &LIGHT) {
            &DARK
        } else {
            &LIGHT
        };
        self.store.set(THEME_KEY, self.active.name.as_str());
    }

    pub fn current(&self) -> &'static Theme {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
    }

    impl MemoryStore {
        fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.values.borrow_mut().insert(key.into(), value.into());
            store
        }
    }

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.values.borrow_mut().insert(key.into(), value.into());
        }
    }

    /// Storage that accepts nothing, like a browser with localStorage denied.
    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) {}
    }

    #[test]
    fn defaults_to_light_without_a_stored_preference() {
        let controller = ThemeController::new(MemoryStore::default());
        assert_eq!(controller.current().name, ThemeName::Light);
    }

    #[test]
    fn restores_a_stored_dark_preference() {
        let controller = ThemeController::new(MemoryStore::with(THEME_KEY, "dark"));
        assert_eq!(controller.current().name, ThemeName::Dark);
    }

    #[test]
    fn restores_a_stored_light_preference() {
        let controller = ThemeController::new(MemoryStore::with(THEME_KEY, "light"));
        assert_eq!(controller.current().name, ThemeName::Light);
    }

    #[test]
    fn unrecognized_stored_value_falls_back_to_light() {
        let controller = ThemeController::new(MemoryStore::with(THEME_KEY, "purple"));
        assert_eq!(controller.current().name, ThemeName::Light);
    }

    #[test]
    fn restore_is_stable_for_a_fixed_stored_value() {
        let store = MemoryStore::with(THEME_KEY, "dark");
        let first = ThemeController::new(MemoryStore::with(THEME_KEY, "dark"))
            .current()
            .name;
        let second = ThemeController::new(store).current().name;
        assert_eq!(first, second);
    }

    #[test]
    fn toggle_switches_and_persists() {
        let mut controller = ThemeController::new(MemoryStore::default());

        controller.toggle();
        assert_eq!(controller.current().name, ThemeName::Dark);
        assert_eq!(controller.store.get(THEME_KEY).as_deref(), Some("dark"));

        controller.toggle();
        assert_eq!(controller.current().name, ThemeName::Light);
        assert_eq!(controller.store.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn toggle_twice_returns_to_the_starting_theme() {
        for seed in ["light", "dark"] {
            let mut controller = ThemeController::new(MemoryStore::with(THEME_KEY, seed));
            let start = controller.current().name;
            controller.toggle();
            controller.toggle();
            assert_eq!(controller.current().name, start);
        }
    }

    #[test]
    fn store_mirrors_active_theme_across_a_toggle_sequence() {
        let mut controller = ThemeController::new(MemoryStore::default());
        for _ in 0..5 {
            controller.toggle();
            assert_eq!(
                controller.store.get(THEME_KEY).as_deref(),
                Some(controller.current().name.as_str())
            );
        }
    }

    #[test]
    fn switching_still_works_when_the_store_drops_writes() {
        let mut controller = ThemeController::new(BrokenStore);
        controller.toggle();
        assert_eq!(controller.current().name, ThemeName::Dark);
        controller.toggle();
        assert_eq!(controller.current().name, ThemeName::Light);
    }
}
