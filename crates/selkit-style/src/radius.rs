#![forbid(unsafe_code)]

//! Border radii derived from a single radius variable.

/// Radius steps. `lg` is the base radius; `md` and `sm` subtract a fixed
/// offset from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderRadius {
    Lg,
    Md,
    Sm,
}

impl BorderRadius {
    pub const ALL: [BorderRadius; 3] = [BorderRadius::Lg, BorderRadius::Md, BorderRadius::Sm];

    pub const fn key(self) -> &'static str {
        match self {
            BorderRadius::Lg => "lg",
            BorderRadius::Md => "md",
            BorderRadius::Sm => "sm",
        }
    }

    /// Position in [`BorderRadius::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.key() == key)
    }

    /// Pixels subtracted from the base radius.
    pub const fn offset_px(self) -> u8 {
        match self {
            BorderRadius::Lg => 0,
            BorderRadius::Md => 2,
            BorderRadius::Sm => 4,
        }
    }

    /// CSS value in terms of `radius_var`, e.g. `calc(var(--radius) - 2px)`.
    pub fn css(self, radius_var: &str) -> String {
        match self.offset_px() {
            0 => format!("var({radius_var})"),
            offset => format!("calc(var({radius_var}) - {offset}px)"),
        }
    }

    /// Concrete radius for a base of `base_px`, floored at zero.
    pub fn resolve_px(self, base_px: f32) -> f32 {
        (base_px - f32::from(self.offset_px())).max(0.0)
    }
}
