#![forbid(unsafe_code)]

//! JSON export of a [`ThemeConfig`] in utility-framework config shape:
//!
//! ```text
//! { "content": [..],
//!   "theme": { "extend": { "colors": {..}, "borderRadius": {..},
//!                          "typography": { "<context>": { "css": {..} } } } },
//!   "plugins": [] }
//! ```

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::config::ThemeConfig;
use crate::error::Result;
use crate::radius::BorderRadius;
use crate::tokens::{TokenMap, TokenValue};
use crate::typography::TypographyTheme;

impl Serialize for TokenValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            TokenValue::Reference(r) => serializer.serialize_str(r),
            TokenValue::Group(shades) => {
                let mut map = serializer.serialize_map(Some(shades.len()))?;
                for (shade, reference) in shades {
                    map.serialize_entry(shade.key(), reference)?;
                }
                map.end()
            }
        }
    }
}

impl Serialize for TokenMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (token, value) in self.iter() {
            map.serialize_entry(token.name(), value)?;
        }
        map.end()
    }
}

struct CssBlock<'a>(&'a TypographyTheme);

impl Serialize for CssBlock<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("css", &CssVars(self.0))?;
        map.end()
    }
}

struct CssVars<'a>(&'a TypographyTheme);

impl Serialize for CssVars<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, reference) in self.0.iter() {
            map.serialize_entry(name, reference)?;
        }
        map.end()
    }
}

impl Serialize for TypographyTheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.context(), &CssBlock(self))?;
        map.end()
    }
}

struct Radii<'a>(&'a [(BorderRadius, String)]);

impl Serialize for Radii<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (radius, css) in self.0 {
            map.serialize_entry(radius.key(), css)?;
        }
        map.end()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Extend<'a> {
    colors: &'a TokenMap,
    border_radius: Radii<'a>,
    typography: &'a TypographyTheme,
}

#[derive(Serialize)]
struct Theme<'a> {
    extend: Extend<'a>,
}

#[derive(Serialize)]
struct Document<'a> {
    content: &'a [String],
    theme: Theme<'a>,
    plugins: &'a [String],
}

impl Serialize for ThemeConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        Document {
            content: self.content(),
            theme: Theme {
                extend: Extend {
                    colors: self.colors(),
                    border_radius: Radii(self.border_radius()),
                    typography: self.typography(),
                },
            },
            plugins: self.plugins(),
        }
        .serialize(serializer)
    }
}

impl ThemeConfig {
    /// Pretty-printed JSON document.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
