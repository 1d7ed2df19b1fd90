use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Locales this service can answer in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Locale {
    En,
    Vi,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Vi => "vi",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unsupported locale")]
pub struct UnsupportedLocale;

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "vi" => Ok(Locale::Vi),
            _ => Err(UnsupportedLocale),
        }
    }
}

/// Locale context for a request.
///
/// Resolved once by the middleware and immutable afterwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LocaleContext {
    locale: Locale,
}

impl LocaleContext {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}
