//! Money formatting

use rusty_money::{Money, iso};

/// Formats an amount in cents as US dollars, e.g. `4000000` as `$40,000.00`.
pub fn usd(cents: i64) -> String {
    Money::from_minor(cents, iso::USD).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_thousands_separator() {
        assert_eq!(usd(4_000_000), "$40,000.00");
    }

    #[test]
    fn always_shows_two_fractional_digits() {
        assert_eq!(usd(65_000), "$650.00");
        assert_eq!(usd(105), "$1.05");
        assert_eq!(usd(0), "$0.00");
    }
}
