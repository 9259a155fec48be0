//! Implicit default theme
//!
//! The stock token set that resolution acts against: a base declaration
//! replaces an axis here wholesale, while an `extend` declaration overlays
//! it per key.

use std::collections::BTreeMap;

use super::tokens::{FontStack, ScreenWidth};

/// Default breakpoint widths
const DEFAULT_SCREENS: &[(&str, &str)] = &[
    ("sm", "640px"),
    ("md", "768px"),
    ("lg", "1024px"),
    ("xl", "1280px"),
    ("2xl", "1536px"),
];

/// Default font family stacks
const DEFAULT_FONT_FAMILIES: &[(&str, &[&str])] = &[
    ("sans", &["ui-sans-serif", "system-ui", "sans-serif"]),
    ("serif", &["ui-serif", "Georgia", "serif"]),
    ("mono", &["ui-monospace", "SFMono-Regular", "Menlo", "monospace"]),
];

/// The implicit default theme
#[derive(Debug, Clone)]
pub struct DefaultTheme {
    /// Stock font family stacks (sans, serif, mono)
    pub font_family: BTreeMap<String, FontStack>,

    /// Stock breakpoint widths (sm through 2xl)
    pub screens: BTreeMap<String, ScreenWidth>,
}

impl Default for DefaultTheme {
    fn default() -> Self {
        let font_family = DEFAULT_FONT_FAMILIES
            .iter()
            .map(|(family, fonts)| {
                let stack = FontStack::new(family, fonts.iter().map(|f| f.to_string()).collect())
                    .expect("default font stacks are non-empty");
                (family.to_string(), stack)
            })
            .collect();

        let screens = DEFAULT_SCREENS
            .iter()
            .map(|(name, width)| {
                let width =
                    ScreenWidth::parse(name, width).expect("default screens are valid lengths");
                (name.to_string(), width)
            })
            .collect();

        Self {
            font_family,
            screens,
        }
    }
}
