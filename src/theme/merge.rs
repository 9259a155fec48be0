//! Theme merge and resolution
//!
//! Resolution folds three layers per axis: the implicit defaults, the
//! declared base theme, and the optional `extend` overlay. A base
//! declaration is exhaustive for its axis and replaces the default
//! wholesale; extend entries are added per key on top of whatever the axis
//! resolved to, overriding on collision. Axes are `BTreeMap`-backed, so the
//! result is deterministic regardless of declaration order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::{ThemeOverrides, ThemeSection};

use super::defaults::DefaultTheme;
use super::tokens::{FontStack, ScreenWidth, TokenError};

/// The fully resolved theme consumed by the generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedTheme {
    /// Resolved font family stacks
    pub font_family: BTreeMap<String, FontStack>,

    /// Resolved breakpoint widths
    pub screens: BTreeMap<String, ScreenWidth>,
}

impl ResolvedTheme {
    /// Resolve a declared theme against the implicit defaults
    ///
    /// Pure function of its input; an entirely empty declaration yields the
    /// all-default theme.
    pub fn resolve(theme: &ThemeSection) -> Result<Self, TokenError> {
        Self::resolve_with(DefaultTheme::default(), theme)
    }

    /// Resolve a declared theme against a specific default set
    pub fn resolve_with(defaults: DefaultTheme, theme: &ThemeSection) -> Result<Self, TokenError> {
        let none = ThemeOverrides::default();
        let extend = theme.extend.as_ref().unwrap_or(&none);

        let font_family = resolve_axis(
            defaults.font_family,
            theme.font_family.as_ref(),
            extend.font_family.as_ref(),
            |family, fonts: &Vec<String>| FontStack::new(family, fonts.clone()),
        )?;

        let screens = resolve_axis(
            defaults.screens,
            theme.screens.as_ref(),
            extend.screens.as_ref(),
            |name, width: &String| ScreenWidth::parse(name, width),
        )?;

        Ok(Self {
            font_family,
            screens,
        })
    }
}

/// Fold one axis: base replaces the defaults wholesale, extend overlays
/// per key on top of the result.
fn resolve_axis<D, T>(
    defaults: BTreeMap<String, T>,
    base: Option<&BTreeMap<String, D>>,
    extend: Option<&BTreeMap<String, D>>,
    mut parse: impl FnMut(&str, &D) -> Result<T, TokenError>,
) -> Result<BTreeMap<String, T>, TokenError> {
    let mut resolved = match base {
        Some(declared) => declared
            .iter()
            .map(|(key, value)| Ok((key.clone(), parse(key, value)?)))
            .collect::<Result<BTreeMap<_, _>, TokenError>>()?,
        None => defaults,
    };

    if let Some(overlay) = extend {
        for (key, value) in overlay {
            resolved.insert(key.clone(), parse(key, value)?);
        }
    }

    Ok(resolved)
}
