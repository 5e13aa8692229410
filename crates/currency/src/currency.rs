//! Supported display currencies and their fixed exchange rates.

use core::str::FromStr;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use solezone_core::DomainError;

/// A supported display currency.
///
/// Catalog prices are canonically denominated in USD; every other currency is
/// a fixed multiple of that. Invalid codes are unrepresentable — adding a
/// currency means adding a variant plus its row in the tables below.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Gel,
    Rub,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Gel, Currency::Rub];

    /// Fixed exchange rate against the canonical price unit.
    pub fn rate(&self) -> Decimal {
        match self {
            Currency::Usd => Decimal::ONE,
            Currency::Gel => dec!(2.70),
            Currency::Rub => dec!(91.50),
        }
    }

    /// Display symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Gel => "₾",
            Currency::Rub => "₽",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Gel => "GEL",
            Currency::Rub => "RUB",
        }
    }

    /// Convert a canonical amount into this currency.
    pub fn convert(&self, canonical: Decimal) -> Decimal {
        canonical * self.rate()
    }

    /// Render a canonical amount as a display string in this currency.
    ///
    /// Pure function of `self` and `canonical`; formatting rules are
    /// per-currency (see [`crate::format`]).
    pub fn format_price(&self, canonical: Decimal) -> String {
        crate::format::format_converted(*self, self.convert(canonical))
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USD" | "usd" => Ok(Currency::Usd),
            "GEL" | "gel" => Ok(Currency::Gel),
            "RUB" | "rub" => Ok(Currency::Rub),
            other => Err(DomainError::validation(format!(
                "unsupported currency code: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_match_the_reference_table() {
        assert_eq!(Currency::Usd.rate(), dec!(1));
        assert_eq!(Currency::Gel.rate(), dec!(2.70));
        assert_eq!(Currency::Rub.rate(), dec!(91.50));
    }

    #[test]
    fn convert_scales_by_the_rate() {
        assert_eq!(Currency::Gel.convert(dec!(1200)), dec!(3240.00));
        assert_eq!(Currency::Rub.convert(dec!(1200)), dec!(109800.00));
        assert_eq!(Currency::Usd.convert(dec!(19.99)), dec!(19.99));
    }

    #[test]
    fn from_str_accepts_known_codes_only() {
        assert_eq!("USD".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!("gel".parse::<Currency>().unwrap(), Currency::Gel);
        assert!("EUR".parse::<Currency>().is_err());
    }

    #[test]
    fn default_is_usd() {
        assert_eq!(Currency::default(), Currency::Usd);
    }
}
