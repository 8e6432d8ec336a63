//! Locale list parsing.
//!
//! Locales arrive as a comma-separated string (`"en,fr,pt_BR"`); the first
//! token is the default locale for the run. No process-wide default is ever
//! set — the active locale is threaded explicitly through each pass.

use std::fmt;

/// One locale tag (`en`, `fr`, `pt_BR`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Locale(String);

impl Locale {
    /// Wrap a locale tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The full tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The language part of the tag (`pt_BR` → `pt`).
    ///
    /// Used for localized descriptor lookup and per-locale output
    /// subdirectories.
    #[must_use]
    pub fn language(&self) -> &str {
        self.0
            .split(['_', '-'])
            .next()
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered locale list; the first entry is the default locale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleList {
    locales: Vec<Locale>,
}

impl LocaleList {
    /// Parse a comma-separated locale string.
    ///
    /// Tokens are trimmed; empty tokens are dropped. Returns `None` when no
    /// token remains.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let locales: Vec<Locale> = input
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(Locale::new)
            .collect();
        if locales.is_empty() {
            None
        } else {
            Some(Self { locales })
        }
    }

    /// The default locale: the first token of the list.
    #[must_use]
    pub fn default_locale(&self) -> &Locale {
        &self.locales[0]
    }

    /// Iterate over all locales in list order.
    pub fn iter(&self) -> impl Iterator<Item = &Locale> {
        self.locales.iter()
    }

    /// Number of locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Whether the list is empty. Never true for a parsed list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_token() {
        let list = LocaleList::parse("en").unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.default_locale().as_str(), "en");
    }

    #[test]
    fn test_parse_trims_and_drops_empty_tokens() {
        let list = LocaleList::parse(" en , ,fr,").unwrap();
        let tags: Vec<_> = list.iter().map(Locale::as_str).collect();
        assert_eq!(tags, vec!["en", "fr"]);
    }

    #[test]
    fn test_parse_all_empty_is_none() {
        assert!(LocaleList::parse("").is_none());
        assert!(LocaleList::parse(" , ,").is_none());
    }

    #[test]
    fn test_first_token_is_default() {
        let list = LocaleList::parse("fr,en").unwrap();
        assert_eq!(list.default_locale().as_str(), "fr");
    }

    #[test]
    fn test_language_strips_region() {
        assert_eq!(Locale::new("pt_BR").language(), "pt");
        assert_eq!(Locale::new("en-US").language(), "en");
        assert_eq!(Locale::new("de").language(), "de");
    }
}
