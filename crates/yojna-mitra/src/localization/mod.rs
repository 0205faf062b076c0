//! Static bilingual string tables for prompts and choice labels.
//!
//! Every user-visible string in the core is addressed by a symbolic key so
//! the dialogue engine never embeds display text. A lookup miss is a real
//! error surfaced through [`translate`]; the conversational path uses
//! [`translate_or_key`], which logs the miss at error level in debug builds
//! instead of silently handing the key to the citizen.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Languages supported by the prompt and catalog tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Hi,
}

impl Locale {
    pub const fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
        }
    }

    pub fn from_code(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Locale::En),
            "hi" | "hindi" => Some(Locale::Hi),
            _ => None,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::En
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Raised when a symbolic key has no entry in the string table, or a caller
/// names a locale the tables do not carry.
#[derive(Debug, thiserror::Error)]
pub enum LocalizationError {
    #[error("missing localization key '{key}' for locale '{locale}'")]
    MissingKey { key: String, locale: Locale },
    #[error("unsupported locale '{0}'")]
    UnsupportedLocale(String),
}

/// Symbolic keys for the conversational prompts.
pub mod keys {
    pub const WELCOME: &str = "chat.welcome";
    pub const ASK_AGE: &str = "chat.ask_age";
    pub const ASK_STATE: &str = "chat.ask_state";
    pub const ASK_INCOME: &str = "chat.ask_income";
    pub const ASK_CATEGORY: &str = "chat.ask_category";
    pub const ASK_OCCUPATION: &str = "chat.ask_occupation";
    pub const CLOSING: &str = "chat.closing";
}

const PROMPTS: &[(&str, &str, &str)] = &[
    (
        keys::WELCOME,
        "Namaste! I am Yojna Mitra, your guide to government assistance programs. A few quick questions and I will find programs you may qualify for.",
        "नमस्ते! मैं योजना मित्र हूँ, सरकारी सहायता योजनाओं के लिए आपका साथी। कुछ छोटे सवालों के बाद मैं आपके लिए उपयुक्त योजनाएं खोजूँगा।",
    ),
    (keys::ASK_AGE, "What is your age?", "आपकी उम्र क्या है?"),
    (
        keys::ASK_STATE,
        "Which state do you live in?",
        "आप किस राज्य में रहते हैं?",
    ),
    (
        keys::ASK_INCOME,
        "Which yearly household income range fits you best?",
        "आपके परिवार की वार्षिक आय किस दायरे में आती है?",
    ),
    (
        keys::ASK_CATEGORY,
        "Which social category do you belong to?",
        "आप किस सामाजिक श्रेणी से हैं?",
    ),
    (
        keys::ASK_OCCUPATION,
        "What is your occupation?",
        "आपका पेशा क्या है?",
    ),
    (
        keys::CLOSING,
        "Thank you! I have everything I need. Opening your matched programs now.",
        "धन्यवाद! मुझे सारी जानकारी मिल गई है। अब आपकी योजनाएं दिखा रहा हूँ।",
    ),
];

/// Resolve a symbolic key for the given locale.
pub fn translate(key: &str, locale: Locale) -> Result<&'static str, LocalizationError> {
    PROMPTS
        .iter()
        .find(|(entry_key, _, _)| *entry_key == key)
        .map(|(_, en, hi)| match locale {
            Locale::En => *en,
            Locale::Hi => *hi,
        })
        .ok_or_else(|| LocalizationError::MissingKey {
            key: key.to_owned(),
            locale,
        })
}

/// Resolve a key, falling back to the key text itself on a miss.
///
/// The fallback keeps a live conversation usable when a table entry is
/// incomplete, but the miss is logged loudly so it cannot ship unnoticed.
pub fn translate_or_key(key: &str, locale: Locale) -> String {
    match translate(key, locale) {
        Ok(text) => text.to_owned(),
        Err(error) => {
            if cfg!(debug_assertions) {
                tracing::error!(%error, "localization table miss");
            } else {
                tracing::warn!(%error, "localization table miss");
            }
            key.to_owned()
        }
    }
}

/// Closed-choice question groups backed by fixed label tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceGroup {
    Income,
    Category,
    Occupation,
}

/// One selectable entry: a stable key plus its localized labels.
#[derive(Debug, Clone, Copy)]
pub struct ChoiceEntry {
    pub key: &'static str,
    en: &'static str,
    hi: &'static str,
}

impl ChoiceEntry {
    pub const fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Hi => self.hi,
        }
    }
}

const INCOME_ENTRIES: &[ChoiceEntry] = &[
    ChoiceEntry {
        key: "below1",
        en: "Below \u{20b9}1 lakh",
        hi: "\u{20b9}1 लाख से कम",
    },
    ChoiceEntry {
        key: "1to3",
        en: "\u{20b9}1 to \u{20b9}3 lakh",
        hi: "\u{20b9}1 से \u{20b9}3 लाख",
    },
    ChoiceEntry {
        key: "3to8",
        en: "\u{20b9}3 to \u{20b9}8 lakh",
        hi: "\u{20b9}3 से \u{20b9}8 लाख",
    },
    ChoiceEntry {
        key: "above8",
        en: "Above \u{20b9}8 lakh",
        hi: "\u{20b9}8 लाख से अधिक",
    },
];

const CATEGORY_ENTRIES: &[ChoiceEntry] = &[
    ChoiceEntry {
        key: "general",
        en: "General",
        hi: "सामान्य",
    },
    ChoiceEntry {
        key: "obc",
        en: "OBC",
        hi: "अन्य पिछड़ा वर्ग",
    },
    ChoiceEntry {
        key: "sc",
        en: "SC",
        hi: "अनुसूचित जाति",
    },
    ChoiceEntry {
        key: "st",
        en: "ST",
        hi: "अनुसूचित जनजाति",
    },
];

const OCCUPATION_ENTRIES: &[ChoiceEntry] = &[
    ChoiceEntry {
        key: "farmer",
        en: "Farmer",
        hi: "किसान",
    },
    ChoiceEntry {
        key: "student",
        en: "Student",
        hi: "विद्यार्थी",
    },
    ChoiceEntry {
        key: "business",
        en: "Business owner",
        hi: "व्यवसायी",
    },
    ChoiceEntry {
        key: "worker",
        en: "Daily wage worker",
        hi: "दिहाड़ी मज़दूर",
    },
    ChoiceEntry {
        key: "salaried",
        en: "Salaried employee",
        hi: "वेतनभोगी कर्मचारी",
    },
    ChoiceEntry {
        key: "unemployed",
        en: "Unemployed",
        hi: "बेरोज़गार",
    },
    ChoiceEntry {
        key: "other",
        en: "Other",
        hi: "अन्य",
    },
];

/// The fixed label table backing a closed-choice question.
pub const fn choice_entries(group: ChoiceGroup) -> &'static [ChoiceEntry] {
    match group {
        ChoiceGroup::Income => INCOME_ENTRIES,
        ChoiceGroup::Category => CATEGORY_ENTRIES,
        ChoiceGroup::Occupation => OCCUPATION_ENTRIES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_resolves_both_locales() {
        assert_eq!(
            translate(keys::ASK_AGE, Locale::En).expect("known key"),
            "What is your age?"
        );
        assert_eq!(
            translate(keys::ASK_AGE, Locale::Hi).expect("known key"),
            "आपकी उम्र क्या है?"
        );
    }

    #[test]
    fn translate_reports_missing_keys() {
        match translate("chat.no_such_key", Locale::En) {
            Err(LocalizationError::MissingKey { key, locale }) => {
                assert_eq!(key, "chat.no_such_key");
                assert_eq!(locale, Locale::En);
            }
            other => panic!("expected missing key error, got {other:?}"),
        }
    }

    #[test]
    fn translate_or_key_falls_back_to_the_key() {
        assert_eq!(
            translate_or_key("chat.no_such_key", Locale::Hi),
            "chat.no_such_key"
        );
    }

    #[test]
    fn choice_tables_have_stable_keys() {
        let income: Vec<&str> = choice_entries(ChoiceGroup::Income)
            .iter()
            .map(|entry| entry.key)
            .collect();
        assert_eq!(income, vec!["below1", "1to3", "3to8", "above8"]);

        let category = choice_entries(ChoiceGroup::Category);
        assert_eq!(category[0].label(Locale::En), "General");
        assert_eq!(category[0].label(Locale::Hi), "सामान्य");
    }

    #[test]
    fn locale_codes_round_trip() {
        assert_eq!(Locale::from_code("hi"), Some(Locale::Hi));
        assert_eq!(Locale::from_code("English"), Some(Locale::En));
        assert_eq!(Locale::from_code("ta"), None);
        assert_eq!(Locale::Hi.code(), "hi");
    }
}
