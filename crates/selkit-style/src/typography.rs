#![forbid(unsafe_code)]

//! Typography color overrides.
//!
//! The prose plugin reads its colors from `--tw-prose-*` variables. This
//! module maps each of them onto a color token at a fixed opacity. The
//! mapping is keyed by a context name (`"theme"` by default) so the CSS side
//! can select it with a modifier class.

use crate::tokens::{ColorToken, Shade, hsl_reference};

/// Context name of the default typography variant.
pub const DEFAULT_CONTEXT: &str = "theme";

/// `--tw-prose-*` variables that receive an override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProseVar {
    Body,
    Headings,
    Lead,
    Links,
    Bold,
    Counters,
    Bullets,
    Hr,
    Quotes,
    QuoteBorders,
    Captions,
    Code,
    PreCode,
    PreBg,
    ThBorders,
    TdBorders,
}

impl ProseVar {
    pub const ALL: [ProseVar; 16] = [
        ProseVar::Body,
        ProseVar::Headings,
        ProseVar::Lead,
        ProseVar::Links,
        ProseVar::Bold,
        ProseVar::Counters,
        ProseVar::Bullets,
        ProseVar::Hr,
        ProseVar::Quotes,
        ProseVar::QuoteBorders,
        ProseVar::Captions,
        ProseVar::Code,
        ProseVar::PreCode,
        ProseVar::PreBg,
        ProseVar::ThBorders,
        ProseVar::TdBorders,
    ];

    pub const fn css_name(self) -> &'static str {
        match self {
            ProseVar::Body => "--tw-prose-body",
            ProseVar::Headings => "--tw-prose-headings",
            ProseVar::Lead => "--tw-prose-lead",
            ProseVar::Links => "--tw-prose-links",
            ProseVar::Bold => "--tw-prose-bold",
            ProseVar::Counters => "--tw-prose-counters",
            ProseVar::Bullets => "--tw-prose-bullets",
            ProseVar::Hr => "--tw-prose-hr",
            ProseVar::Quotes => "--tw-prose-quotes",
            ProseVar::QuoteBorders => "--tw-prose-quote-borders",
            ProseVar::Captions => "--tw-prose-captions",
            ProseVar::Code => "--tw-prose-code",
            ProseVar::PreCode => "--tw-prose-pre-code",
            ProseVar::PreBg => "--tw-prose-pre-bg",
            ProseVar::ThBorders => "--tw-prose-th-borders",
            ProseVar::TdBorders => "--tw-prose-td-borders",
        }
    }

    /// Token the variable is colored from.
    pub const fn source(self) -> ColorToken {
        match self {
            ProseVar::Links => ColorToken::Primary,
            ProseVar::Hr | ProseVar::QuoteBorders | ProseVar::ThBorders | ProseVar::TdBorders => {
                ColorToken::Border
            }
            ProseVar::PreBg => ColorToken::Background,
            _ => ColorToken::Foreground,
        }
    }

    pub const fn alpha(self) -> f32 {
        match self {
            ProseVar::Body | ProseVar::Lead | ProseVar::Quotes => 0.9,
            ProseVar::Counters | ProseVar::Bullets => 0.3,
            ProseVar::Captions => 0.6,
            _ => 1.0,
        }
    }

    /// `hsl(var(--<source>) / <alpha>)`.
    pub fn reference(self) -> String {
        hsl_reference(
            &self.source().css_var(Shade::Default),
            &self.alpha().to_string(),
        )
    }
}

/// Flat variable → reference mapping for one typography context.
#[derive(Debug, Clone, PartialEq)]
pub struct TypographyTheme {
    context: String,
    css: Vec<(ProseVar, String)>,
}

impl TypographyTheme {
    /// Build the overrides under `context`. Pure: same input, same output.
    pub fn generate(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            css: ProseVar::ALL.into_iter().map(|v| (v, v.reference())).collect(),
        }
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    /// Reference for a `--tw-prose-*` name.
    pub fn get(&self, css_name: &str) -> Option<&str> {
        self.css
            .iter()
            .find(|(v, _)| v.css_name() == css_name)
            .map(|(_, r)| r.as_str())
    }

    /// `(css variable, reference)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.css.iter().map(|(v, r)| (v.css_name(), r.as_str()))
    }

    pub fn len(&self) -> usize {
        self.css.len()
    }

    pub fn is_empty(&self) -> bool {
        self.css.is_empty()
    }
}

/// Overrides for the default `"theme"` context.
pub fn typography() -> TypographyTheme {
    TypographyTheme::generate(DEFAULT_CONTEXT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_formatting() {
        assert_eq!(ProseVar::Body.reference(), "hsl(var(--foreground) / 0.9)");
        assert_eq!(ProseVar::Headings.reference(), "hsl(var(--foreground) / 1)");
        assert_eq!(ProseVar::Counters.reference(), "hsl(var(--foreground) / 0.3)");
        assert_eq!(ProseVar::Captions.reference(), "hsl(var(--foreground) / 0.6)");
    }

    #[test]
    fn sources() {
        assert_eq!(ProseVar::Links.reference(), "hsl(var(--primary) / 1)");
        assert_eq!(ProseVar::Hr.reference(), "hsl(var(--border) / 1)");
        assert_eq!(ProseVar::PreBg.reference(), "hsl(var(--background) / 1)");
    }

    #[test]
    fn generator_is_pure() {
        assert_eq!(typography(), typography());
        assert_eq!(typography().context(), "theme");
        assert_eq!(typography().len(), 16);
    }

    #[test]
    fn lookup_by_css_name() {
        let t = typography();
        assert_eq!(
            t.get("--tw-prose-quote-borders"),
            Some("hsl(var(--border) / 1)")
        );
        assert_eq!(t.get("--tw-prose-kbd"), None);
    }

    #[test]
    fn custom_context() {
        let t = TypographyTheme::generate("invert");
        assert_eq!(t.context(), "invert");
        assert_eq!(t.iter().count(), ProseVar::ALL.len());
    }
}
