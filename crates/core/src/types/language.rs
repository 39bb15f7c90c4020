//! Language preference: a closed three-value set backed by a cookie.
//!
//! The preference is persisted in the `lang` cookie, readable by both the
//! client and the server. Resolution never fails: anything that is not one
//! of the recognized codes falls back to the default.

use serde::{Deserialize, Serialize};

/// Name of the cookie holding the language preference.
pub const LANG_COOKIE_NAME: &str = "lang";

/// Cookie lifetime in days.
pub const LANG_COOKIE_MAX_AGE_DAYS: i64 = 3;

/// Display language for the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Kz,
    #[default]
    Ru,
    En,
}

impl Language {
    /// Parse a recognized language code.
    ///
    /// Returns `None` for anything outside the closed set.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "kz" => Some(Self::Kz),
            "ru" => Some(Self::Ru),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Resolve a cookie value to a language.
    ///
    /// A recognized code is returned verbatim; an absent or unrecognized
    /// value resolves to the default.
    #[must_use]
    pub fn resolve(cookie_value: Option<&str>) -> Self {
        cookie_value.and_then(Self::from_code).unwrap_or_default()
    }

    /// The wire/cookie code for this language.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Kz => "kz",
            Self::Ru => "ru",
            Self::En => "en",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
