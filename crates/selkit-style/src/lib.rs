#![forbid(unsafe_code)]

//! Theme tokens for selkit.
//!
//! Everything here is static data: color tokens mapped to CSS custom-property
//! references, border radii derived from one `--radius` variable, and the
//! typography color overrides. A [`ThemeConfig`] bundles them for an external
//! CSS build step; [`theme_config()`] returns the process-wide instance.

pub mod config;
pub mod error;
#[cfg(feature = "serde")]
mod export;
pub mod radius;
pub mod tokens;
pub mod typography;

pub use config::{ThemeConfig, ThemeOptions, theme_config};
pub use error::{Result, TokenError};
pub use radius::BorderRadius;
pub use tokens::{ColorToken, Shade, TokenMap, TokenValue};
pub use typography::{ProseVar, TypographyTheme, typography};
