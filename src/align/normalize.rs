//! Text normalization applied before fuzzy scoring.
//!
//! The two text sources rarely agree character for character. Normalizing
//! both sides the same way narrows the gap without touching the text that
//! ends up in the output.

use std::borrow::Cow;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

const LIGATURES: [(&str, &str); 7] = [
    ("\u{FB00}", "ff"),  // ﬀ
    ("\u{FB01}", "fi"),  // ﬁ
    ("\u{FB02}", "fl"),  // ﬂ
    ("\u{FB03}", "ffi"), // ﬃ
    ("\u{FB04}", "ffl"), // ﬄ
    ("\u{FB05}", "st"),  // ﬅ (long s + t)
    ("\u{FB06}", "st"),  // ﬆ
];

/// Normalization steps applied to both strings before they are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalization {
    /// Unicode NFKC (also folds ligatures and full-width forms)
    pub unicode: bool,

    /// Expand typographic ligatures (ﬁ, ﬂ, ...)
    pub fix_ligatures: bool,

    /// Collapse whitespace runs to one space and trim the ends
    pub collapse_whitespace: bool,
}

impl Normalization {
    /// Leave strings untouched.
    pub fn none() -> Self {
        Self {
            unicode: false,
            fix_ligatures: false,
            collapse_whitespace: false,
        }
    }

    /// Every step enabled.
    pub fn full() -> Self {
        Self {
            unicode: true,
            fix_ligatures: true,
            collapse_whitespace: true,
        }
    }

    pub fn is_noop(&self) -> bool {
        !(self.unicode || self.fix_ligatures || self.collapse_whitespace)
    }

    /// Build the normalizer for these settings.
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(*self)
    }
}

impl Default for Normalization {
    fn default() -> Self {
        Self {
            unicode: false,
            fix_ligatures: true,
            collapse_whitespace: true,
        }
    }
}

/// Applies a [`Normalization`] to strings.
#[derive(Debug, Clone)]
pub struct Normalizer {
    settings: Normalization,
    whitespace: Regex,
}

impl Normalizer {
    pub fn new(settings: Normalization) -> Self {
        Self {
            settings,
            whitespace: Regex::new(r"\s+").unwrap(),
        }
    }

    pub fn settings(&self) -> Normalization {
        self.settings
    }

    /// Normalize `text`, borrowing it when no step applies.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.settings.is_noop() {
            return Cow::Borrowed(text);
        }

        let mut result: Cow<'a, str> = Cow::Borrowed(text);

        if self.settings.unicode {
            result = Cow::Owned(result.nfkc().collect());
        }

        if self.settings.fix_ligatures && result.chars().any(is_ligature) {
            let mut owned = result.into_owned();
            for (ligature, replacement) in LIGATURES {
                owned = owned.replace(ligature, replacement);
            }
            result = Cow::Owned(owned);
        }

        if self.settings.collapse_whitespace {
            let collapsed = self.whitespace.replace_all(result.trim(), " ");
            if collapsed != result.as_ref() {
                result = Cow::Owned(collapsed.into_owned());
            }
        }

        result
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(Normalization::default())
    }
}

fn is_ligature(c: char) -> bool {
    ('\u{FB00}'..='\u{FB06}').contains(&c)
}
