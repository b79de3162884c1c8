//! Display currencies
//!
//! Amounts are entered and stored in US dollars. The active display currency
//! converts them with a fixed rate before any report is computed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    /// Azerbaijani manat
    Azn,
}

impl Currency {
    /// Conversion rate from stored USD amounts
    pub fn rate(&self) -> f64 {
        match self {
            Currency::Usd => 1.0,
            Currency::Azn => 1.70,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Azn => "₼",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Azn => "AZN",
        }
    }

    /// Convert a stored amount into this currency's major units
    pub fn convert(&self, amount: Money) -> f64 {
        amount.to_major() * self.rate()
    }

    /// Format an already-converted value, e.g. `₼4250.00`
    pub fn format(&self, value: f64) -> String {
        if value < 0.0 {
            format!("-{}{:.2}", self.symbol(), value.abs())
        } else {
            format!("{}{:.2}", self.symbol(), value)
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" | "$" => Ok(Currency::Usd),
            "AZN" | "₼" => Ok(Currency::Azn),
            other => Err(format!("Unknown currency '{}' (expected USD or AZN)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert() {
        let amount = Money::from_units(100);
        assert_eq!(Currency::Usd.convert(amount), 100.0);
        assert!((Currency::Azn.convert(amount) - 170.0).abs() < 1e-9);
    }

    #[test]
    fn test_format() {
        assert_eq!(Currency::Usd.format(21.706), "$21.71");
        assert_eq!(Currency::Azn.format(-3.5), "-₼3.50");
    }

    #[test]
    fn test_parse() {
        assert_eq!("azn".parse::<Currency>().unwrap(), Currency::Azn);
        assert_eq!("USD".parse::<Currency>().unwrap(), Currency::Usd);
        assert!("EUR".parse::<Currency>().is_err());
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Currency::Azn).unwrap(), "\"AZN\"");
    }
}
