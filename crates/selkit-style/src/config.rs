#![forbid(unsafe_code)]

//! Theme configuration handed to the CSS build step.
//!
//! [`ThemeOptions`] holds the few knobs (content globs, alpha slot, radius
//! variable, typography context). [`ThemeConfig`] is the resolved, read-only
//! result. [`theme_config()`] builds the default configuration once per
//! process and hands out a shared reference afterwards.

use std::sync::OnceLock;

use crate::error::Result;
use crate::radius::BorderRadius;
use crate::tokens::TokenMap;
use crate::typography::{DEFAULT_CONTEXT, TypographyTheme};

/// Inputs for building a [`ThemeConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeOptions {
    /// Source globs the CSS generator scans for class names.
    pub content: Vec<String>,
    /// Alpha slot written into every color reference.
    /// Default: `<alpha-value>`.
    pub alpha_placeholder: String,
    /// Custom property all radii derive from.
    /// Default: `--radius`.
    pub radius_var: String,
    /// Typography variant name.
    /// Default: `theme`.
    pub typography_context: String,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            content: vec!["./src/**/*.{html,js,svelte,ts}".to_string()],
            alpha_placeholder: "<alpha-value>".to_string(),
            radius_var: "--radius".to_string(),
            typography_context: DEFAULT_CONTEXT.to_string(),
        }
    }
}

impl ThemeOptions {
    /// Replace the content globs.
    #[must_use]
    pub fn with_content<I, S>(mut self, globs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content = globs.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_alpha_placeholder(mut self, alpha: impl Into<String>) -> Self {
        self.alpha_placeholder = alpha.into();
        self
    }

    #[must_use]
    pub fn with_radius_var(mut self, var: impl Into<String>) -> Self {
        self.radius_var = var.into();
        self
    }

    #[must_use]
    pub fn with_typography_context(mut self, context: impl Into<String>) -> Self {
        self.typography_context = context.into();
        self
    }
}

/// Resolved theme: colors, radii, typography, plus build metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    content: Vec<String>,
    colors: TokenMap,
    border_radius: [(BorderRadius, String); 3],
    typography: TypographyTheme,
    plugins: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::from_options(&ThemeOptions::default())
    }
}

impl ThemeConfig {
    pub fn from_options(options: &ThemeOptions) -> Self {
        let colors = TokenMap::build(&options.alpha_placeholder);
        let border_radius = BorderRadius::ALL.map(|r| (r, r.css(&options.radius_var)));
        let typography = TypographyTheme::generate(options.typography_context.as_str());

        tracing::debug!(
            colors = colors.len(),
            radii = BorderRadius::ALL.len(),
            prose = typography.len(),
            context = typography.context(),
            "theme.tokens.built"
        );

        Self {
            content: options.content.clone(),
            colors,
            border_radius,
            typography,
            plugins: Vec::new(),
        }
    }

    pub fn content(&self) -> &[String] {
        &self.content
    }

    pub fn colors(&self) -> &TokenMap {
        &self.colors
    }

    /// Color reference by dotted path. See [`TokenMap::lookup`].
    pub fn lookup(&self, path: &str) -> Result<&str> {
        self.colors.lookup(path)
    }

    pub fn radius(&self, radius: BorderRadius) -> &str {
        &self.border_radius[radius.index()].1
    }

    pub fn border_radius(&self) -> &[(BorderRadius, String)] {
        &self.border_radius
    }

    pub fn typography(&self) -> &TypographyTheme {
        &self.typography
    }

    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }
}

/// Process-wide default configuration, built on first use.
pub fn theme_config() -> &'static ThemeConfig {
    static CONFIG: OnceLock<ThemeConfig> = OnceLock::new();
    CONFIG.get_or_init(ThemeConfig::default)
}
