//! Per-currency display formatting.
//!
//! Rules are reproduced from the storefront's reference formatter:
//!
//! - USD: `$` prefix, no space, up to two decimals with trailing zeros
//!   trimmed, `,` thousands grouping.
//! - GEL: symbol suffix with a space, otherwise like USD.
//! - RUB: symbol suffix with a space, rounded to whole units, thousands
//!   grouped with a non-breaking space (Russian locale convention).
//!
//! Midpoints round away from zero in all cases.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::currency::Currency;

/// Format an amount that has already been converted into `currency`.
pub fn format_converted(currency: Currency, converted: Decimal) -> String {
    match currency {
        Currency::Usd => format!("{}{}", currency.symbol(), trimmed_decimal(converted, ',')),
        Currency::Gel => format!("{} {}", trimmed_decimal(converted, ','), currency.symbol()),
        Currency::Rub => format!("{} {}", whole_units(converted, '\u{a0}'), currency.symbol()),
    }
}

/// Up to two decimal places, trailing zeros trimmed, grouped integer part.
fn trimmed_decimal(value: Decimal, group_sep: char) -> String {
    let rounded = value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.to_string();
    match text.split_once('.') {
        Some((int_part, frac_part)) => format!("{}.{}", group_digits(int_part, group_sep), frac_part),
        None => group_digits(&text, group_sep),
    }
}

/// Rounded to zero decimal places, grouped.
fn whole_units(value: Decimal, group_sep: char) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    group_digits(&rounded.to_string(), group_sep)
}

/// Insert `sep` every three digits, counting from the right.
fn group_digits(digits: &str, sep: char) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let len = digits.len();
    let mut out = String::with_capacity(sign.len() + len + len / 3);
    out.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}
