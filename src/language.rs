//! Display languages for creature names.

use serde::{Deserialize, Serialize};

/// Languages a roster entry can carry a display name in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    French,
    Japanese,
    Chinese,
}

impl Language {
    pub fn all() -> &'static [Self] {
        &[Self::English, Self::French, Self::Japanese, Self::Chinese]
    }

    /// Code used on the command line and as a key in the roster file.
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::French => "french",
            Self::Japanese => "japanese",
            Self::Chinese => "chinese",
        }
    }

    /// Look up a language by its code. Unknown codes give `None`, which
    /// renders as an empty name rather than failing.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|lang| lang.code() == code)
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(Language::from_code("german"), None);
        // Matching is exact
        assert_eq!(Language::from_code("English"), None);
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Language::Japanese).unwrap();
        assert_eq!(json, "\"japanese\"");
        let lang: Language = serde_json::from_str("\"french\"").unwrap();
        assert_eq!(lang, Language::French);
    }
}
