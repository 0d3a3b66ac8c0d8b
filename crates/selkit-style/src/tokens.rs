#![forbid(unsafe_code)]

//! Semantic color tokens and their CSS custom-property references.
//!
//! A token is either direct (`border` → `hsl(var(--border) / <alpha-value>)`)
//! or compound, with one reference per [`Shade`] (`primary.DEFAULT`,
//! `primary.foreground`). The shade `DEFAULT` maps to `--<token>`, any other
//! shade to `--<token>-<shade>`.
//!
//! [`TokenMap`] is built once and never mutated; lookups are pure.

use ahash::AHashMap;

use crate::error::{Result, TokenError};

/// Member of a compound token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    Default,
    Foreground,
    Background,
}

impl Shade {
    /// Key used in token paths and exported configuration.
    pub const fn key(self) -> &'static str {
        match self {
            Shade::Default => "DEFAULT",
            Shade::Foreground => "foreground",
            Shade::Background => "background",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "DEFAULT" => Some(Shade::Default),
            "foreground" => Some(Shade::Foreground),
            "background" => Some(Shade::Background),
            _ => None,
        }
    }
}

const DIRECT: &[Shade] = &[];
const PAIR: &[Shade] = &[Shade::Default, Shade::Foreground];
const TRIPLE: &[Shade] = &[Shade::Default, Shade::Foreground, Shade::Background];

/// Semantic color tokens, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Border,
    Input,
    Ring,
    Background,
    Foreground,
    Primary,
    Secondary,
    Destructive,
    Muted,
    Accent,
    Popover,
    Card,
}

impl ColorToken {
    pub const ALL: [ColorToken; 12] = [
        ColorToken::Border,
        ColorToken::Input,
        ColorToken::Ring,
        ColorToken::Background,
        ColorToken::Foreground,
        ColorToken::Primary,
        ColorToken::Secondary,
        ColorToken::Destructive,
        ColorToken::Muted,
        ColorToken::Accent,
        ColorToken::Popover,
        ColorToken::Card,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ColorToken::Border => "border",
            ColorToken::Input => "input",
            ColorToken::Ring => "ring",
            ColorToken::Background => "background",
            ColorToken::Foreground => "foreground",
            ColorToken::Primary => "primary",
            ColorToken::Secondary => "secondary",
            ColorToken::Destructive => "destructive",
            ColorToken::Muted => "muted",
            ColorToken::Accent => "accent",
            ColorToken::Popover => "popover",
            ColorToken::Card => "card",
        }
    }

    /// Shades of a compound token; empty for direct tokens.
    pub const fn shades(self) -> &'static [Shade] {
        match self {
            ColorToken::Border
            | ColorToken::Input
            | ColorToken::Ring
            | ColorToken::Background
            | ColorToken::Foreground => DIRECT,
            ColorToken::Secondary => TRIPLE,
            ColorToken::Primary
            | ColorToken::Destructive
            | ColorToken::Muted
            | ColorToken::Accent
            | ColorToken::Popover
            | ColorToken::Card => PAIR,
        }
    }

    pub const fn is_compound(self) -> bool {
        !self.shades().is_empty()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// CSS custom property backing `shade` of this token.
    pub fn css_var(self, shade: Shade) -> String {
        match shade {
            Shade::Default => format!("--{}", self.name()),
            other => format!("--{}-{}", self.name(), other.key()),
        }
    }
}

/// `hsl(var(<var>) / <alpha>)`.
pub fn hsl_reference(var: &str, alpha: &str) -> String {
    format!("hsl(var({var}) / {alpha})")
}

/// Value of one token entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    Reference(String),
    Group(Vec<(Shade, String)>),
}

impl TokenValue {
    /// Reference for `shade`; a direct reference only answers `Default`.
    pub fn shade(&self, shade: Shade) -> Option<&str> {
        match self {
            TokenValue::Reference(r) if shade == Shade::Default => Some(r),
            TokenValue::Reference(_) => None,
            TokenValue::Group(shades) => shades
                .iter()
                .find(|(s, _)| *s == shade)
                .map(|(_, r)| r.as_str()),
        }
    }
}

/// Immutable color token table with dotted-path lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenMap {
    entries: Vec<(ColorToken, TokenValue)>,
    /// Flattened `token` / `token.shade` paths.
    index: AHashMap<String, String>,
}

impl TokenMap {
    /// Build the table, using `alpha` as the alpha slot of every reference.
    pub fn build(alpha: &str) -> Self {
        let mut entries = Vec::with_capacity(ColorToken::ALL.len());
        let mut index = AHashMap::new();

        for token in ColorToken::ALL {
            let value = if token.is_compound() {
                let shades: Vec<(Shade, String)> = token
                    .shades()
                    .iter()
                    .map(|&shade| (shade, hsl_reference(&token.css_var(shade), alpha)))
                    .collect();
                for (shade, reference) in &shades {
                    index.insert(format!("{}.{}", token.name(), shade.key()), reference.clone());
                    if *shade == Shade::Default {
                        index.insert(token.name().to_string(), reference.clone());
                    }
                }
                TokenValue::Group(shades)
            } else {
                let reference = hsl_reference(&token.css_var(Shade::Default), alpha);
                index.insert(token.name().to_string(), reference.clone());
                TokenValue::Reference(reference)
            };
            entries.push((token, value));
        }

        Self { entries, index }
    }

    /// Resolve a dotted path (`"ring"`, `"primary.foreground"`).
    ///
    /// A bare compound token name resolves to its `DEFAULT` shade.
    pub fn lookup(&self, path: &str) -> Result<&str> {
        let segments = path.split('.').count();
        if path.is_empty() || segments > 2 || path.split('.').any(str::is_empty) {
            return Err(TokenError::invalid(path));
        }
        self.index
            .get(path)
            .map(String::as_str)
            .ok_or_else(|| TokenError::unknown(path))
    }

    /// Like [`lookup()`](Self::lookup), without the error detail.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.lookup(path).ok()
    }

    pub fn value(&self, token: ColorToken) -> Option<&TokenValue> {
        self.entries
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, v)| v)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorToken, &TokenValue)> {
        self.entries.iter().map(|(t, v)| (*t, v))
    }

    /// Every fully-qualified path (`border`, `primary.DEFAULT`, ...).
    pub fn paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        for (token, value) in &self.entries {
            match value {
                TokenValue::Reference(_) => paths.push(token.name().to_string()),
                TokenValue::Group(shades) => paths.extend(
                    shades
                        .iter()
                        .map(|(s, _)| format!("{}.{}", token.name(), s.key())),
                ),
            }
        }
        paths
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHA: &str = "<alpha-value>";

    #[test]
    fn css_var_naming() {
        assert_eq!(ColorToken::Primary.css_var(Shade::Default), "--primary");
        assert_eq!(
            ColorToken::Primary.css_var(Shade::Foreground),
            "--primary-foreground"
        );
        assert_eq!(
            ColorToken::Secondary.css_var(Shade::Background),
            "--secondary-background"
        );
    }

    #[test]
    fn direct_and_compound_lookup() {
        let map = TokenMap::build(ALPHA);
        assert_eq!(map.lookup("border").ok(), Some("hsl(var(--border) / <alpha-value>)"));
        assert_eq!(
            map.lookup("primary.DEFAULT").ok(),
            Some("hsl(var(--primary) / <alpha-value>)")
        );
        assert_eq!(
            map.lookup("card.foreground").ok(),
            Some("hsl(var(--card-foreground) / <alpha-value>)")
        );
        assert_eq!(
            map.lookup("secondary.background").ok(),
            Some("hsl(var(--secondary-background) / <alpha-value>)")
        );
    }

    #[test]
    fn bare_compound_name_is_default_shade() {
        let map = TokenMap::build(ALPHA);
        assert_eq!(map.lookup("muted").ok(), map.lookup("muted.DEFAULT").ok());
    }

    #[test]
    fn only_secondary_has_background_shade() {
        let map = TokenMap::build(ALPHA);
        assert!(map.get("secondary.background").is_some());
        assert!(matches!(
            map.lookup("primary.background"),
            Err(TokenError::UnknownToken { .. })
        ));
    }

    #[test]
    fn rejects_malformed_paths() {
        let map = TokenMap::build(ALPHA);
        for path in ["", ".", "primary.", ".DEFAULT", "primary.DEFAULT.x", "a..b"] {
            assert!(
                matches!(map.lookup(path), Err(TokenError::InvalidPath { .. })),
                "{path:?} should be invalid"
            );
        }
    }

    #[test]
    fn unknown_token_error_names_path() {
        let map = TokenMap::build(ALPHA);
        let err = map.lookup("sidebar").unwrap_err();
        assert_eq!(err.to_string(), "unknown theme token: sidebar");
        assert!(matches!(
            map.lookup("border.DEFAULT"),
            Err(TokenError::UnknownToken { .. })
        ));
    }

    #[test]
    fn declaration_order_is_kept() {
        let map = TokenMap::build(ALPHA);
        let names: Vec<_> = map.iter().map(|(t, _)| t.name()).collect();
        assert_eq!(
            names,
            vec![
                "border",
                "input",
                "ring",
                "background",
                "foreground",
                "primary",
                "secondary",
                "destructive",
                "muted",
                "accent",
                "popover",
                "card"
            ]
        );
        assert_eq!(map.len(), 12);
    }

    #[test]
    fn paths_resolve() {
        let map = TokenMap::build(ALPHA);
        let paths = map.paths();
        assert_eq!(paths.len(), 5 + 2 + 3 + 2 * 5);
        for path in &paths {
            assert!(map.get(path).is_some(), "{path} does not resolve");
        }
    }

    #[test]
    fn token_value_shade_access() {
        let map = TokenMap::build("1");
        let primary = map.value(ColorToken::Primary).unwrap();
        assert_eq!(primary.shade(Shade::Foreground), Some("hsl(var(--primary-foreground) / 1)"));
        assert_eq!(primary.shade(Shade::Background), None);

        let ring = map.value(ColorToken::Ring).unwrap();
        assert_eq!(ring.shade(Shade::Default), Some("hsl(var(--ring) / 1)"));
        assert_eq!(ring.shade(Shade::Foreground), None);
    }

    #[test]
    fn names_round_trip() {
        for token in ColorToken::ALL {
            assert_eq!(ColorToken::from_name(token.name()), Some(token));
        }
        for shade in [Shade::Default, Shade::Foreground, Shade::Background] {
            assert_eq!(Shade::from_key(shade.key()), Some(shade));
        }
        assert_eq!(ColorToken::from_name("sidebar"), None);
    }
}
