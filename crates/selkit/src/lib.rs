#![forbid(unsafe_code)]

//! selkit public facade crate.
//!
//! Two independent leaves: reactive selection state ([`runtime`]) and the
//! static theme tokens ([`style`]).

pub use selkit_runtime as runtime;
pub use selkit_style as style;

pub mod prelude {
    pub use selkit_runtime::{
        Computed, Observable, SelectionCell, SelectionSnapshot, SelectionState, Subscription,
    };
    pub use selkit_style::{
        BorderRadius, ColorToken, Shade, ThemeConfig, ThemeOptions, TokenError, theme_config,
        typography,
    };
}
