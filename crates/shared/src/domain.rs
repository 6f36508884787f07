use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::UnknownLanguage;

/// Plan used when an order reaches the form without a selection.
pub const TRIAL_PLAN: &str = "trial";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Fr,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Fr];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Fr,
            Language::Fr => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "fr" => Ok(Language::Fr),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// Position of a visitor in the pricing → form → thank-you checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[default]
    Pricing,
    Form,
    ThankYou,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Pricing, Step::Form, Step::ThankYou];

    pub fn as_str(self) -> &'static str {
        match self {
            Step::Pricing => "pricing",
            Step::Form => "form",
            Step::ThankYou => "thankyou",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_parses_case_insensitively() {
        assert_eq!(" EN ".parse::<Language>().expect("en"), Language::En);
        assert_eq!("fr".parse::<Language>().expect("fr"), Language::Fr);
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn language_toggle_flips_between_both_values() {
        assert_eq!(Language::En.toggle(), Language::Fr);
        assert_eq!(Language::Fr.toggle().toggle(), Language::Fr);
    }

    #[test]
    fn step_uses_single_word_wire_names() {
        assert_eq!(
            serde_json::to_string(&Step::ThankYou).expect("json"),
            "\"thankyou\""
        );
        assert_eq!(
            serde_json::from_str::<Step>("\"form\"").expect("step"),
            Step::Form
        );
    }
}
