//! Languages the advisor can answer in

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    English,
    #[serde(rename = "Mandarin Chinese")]
    MandarinChinese,
    Hindi,
    Spanish,
    Arabic,
    French,
    Bengali,
    Portuguese,
    Russian,
    Indonesian,
    Azerbaijani,
    Turkish,
}

impl Language {
    pub const ALL: [Language; 12] = [
        Language::English,
        Language::MandarinChinese,
        Language::Hindi,
        Language::Spanish,
        Language::Arabic,
        Language::French,
        Language::Bengali,
        Language::Portuguese,
        Language::Russian,
        Language::Indonesian,
        Language::Azerbaijani,
        Language::Turkish,
    ];

    /// Name used in prompts ("Respond fully in ...")
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::MandarinChinese => "Mandarin Chinese",
            Language::Hindi => "Hindi",
            Language::Spanish => "Spanish",
            Language::Arabic => "Arabic",
            Language::French => "French",
            Language::Bengali => "Bengali",
            Language::Portuguese => "Portuguese",
            Language::Russian => "Russian",
            Language::Indonesian => "Indonesian",
            Language::Azerbaijani => "Azerbaijani",
            Language::Turkish => "Turkish",
        }
    }

    pub fn is_right_to_left(&self) -> bool {
        matches!(self, Language::Arabic)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Language::ALL
            .iter()
            .copied()
            .find(|lang| {
                lang.name().eq_ignore_ascii_case(wanted)
                    || lang.name().replace(' ', "").eq_ignore_ascii_case(wanted)
            })
            .or_else(|| {
                // "Chinese" and "Mandarin" are what people actually type
                if wanted.eq_ignore_ascii_case("chinese") || wanted.eq_ignore_ascii_case("mandarin") {
                    Some(Language::MandarinChinese)
                } else {
                    None
                }
            })
            .ok_or_else(|| format!("Unsupported language: {}", wanted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("english".parse::<Language>().unwrap(), Language::English);
        assert_eq!(
            "Mandarin Chinese".parse::<Language>().unwrap(),
            Language::MandarinChinese
        );
        assert_eq!("mandarinchinese".parse::<Language>().unwrap(), Language::MandarinChinese);
        assert_eq!("Chinese".parse::<Language>().unwrap(), Language::MandarinChinese);
        assert_eq!("azerbaijani".parse::<Language>().unwrap(), Language::Azerbaijani);
        assert!("Klingon".parse::<Language>().is_err());
    }

    #[test]
    fn test_right_to_left() {
        assert!(Language::Arabic.is_right_to_left());
        assert!(!Language::Hindi.is_right_to_left());
    }

    #[test]
    fn test_serde_names_match_prompt_names() {
        for lang in Language::ALL {
            let json = serde_json::to_string(&lang).unwrap();
            assert_eq!(json, format!("\"{}\"", lang.name()));
        }
    }
}
