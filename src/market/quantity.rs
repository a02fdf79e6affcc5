//! Quantities

use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Mul, Sub},
};

const I64_MIN_F64: f64 = -9_223_372_036_854_775_808.0;

/// An integer amount that may be "not a number".
///
/// Invalid numeric input coerces to [`Quantity::NAN`] instead of failing, and
/// every arithmetic operation involving it yields `NAN` again. Overflow also
/// yields `NAN`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Quantity(Option<i64>);

impl Quantity {
    /// Not a number
    pub const NAN: Self = Self(None);

    /// Zero
    pub const ZERO: Self = Self(Some(0));

    /// Create a quantity from an integer.
    pub const fn new(value: i64) -> Self {
        Self(Some(value))
    }

    /// The integer value, or `None` if this is not a number.
    pub const fn value(self) -> Option<i64> {
        self.0
    }

    /// Whether this is not a number.
    pub const fn is_nan(self) -> bool {
        self.0.is_none()
    }

    /// The smaller of two quantities, or not-a-number if either is.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        self.zip_with(other, |a, b| Some(a.min(b)))
    }

    /// Ordering for sorting: numbers ascending, not-a-number last.
    pub fn sort_cmp(self, other: Self) -> Ordering {
        match (self.0, other.0) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    fn zip_with(self, other: Self, op: impl FnOnce(i64, i64) -> Option<i64>) -> Self {
        Self(self.0.zip(other.0).and_then(|(a, b)| op(a, b)))
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, i64::checked_add)
    }
}

impl Sub for Quantity {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, i64::checked_sub)
    }
}

impl Mul for Quantity {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.zip_with(rhs, i64::checked_mul)
    }
}

impl PartialEq<i64> for Quantity {
    fn eq(&self, other: &i64) -> bool {
        self.0 == Some(*other)
    }
}

impl PartialEq<i32> for Quantity {
    fn eq(&self, other: &i32) -> bool {
        self.0 == Some(i64::from(*other))
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Quantity {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<i128> for Quantity {
    fn from(value: i128) -> Self {
        Self(i64::try_from(value).ok())
    }
}

impl From<Option<i64>> for Quantity {
    fn from(value: Option<i64>) -> Self {
        Self(value)
    }
}

impl From<f64> for Quantity {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "truncation toward zero is the coercion being modelled"
    )]
    fn from(value: f64) -> Self {
        let truncated = value.trunc();

        if truncated.is_finite() && (I64_MIN_F64..-I64_MIN_F64).contains(&truncated) {
            Self::new(truncated as i64)
        } else {
            Self::NAN
        }
    }
}

impl From<&str> for Quantity {
    fn from(value: &str) -> Self {
        parse_int(value)
    }
}

impl From<String> for Quantity {
    fn from(value: String) -> Self {
        parse_int(&value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("NaN"),
        }
    }
}

/// Parse the leading integer of a string.
///
/// Leading whitespace is skipped and an optional `+` or `-` sign is accepted.
/// A `0x` or `0X` prefix switches to hexadecimal; otherwise decimal digits are
/// read. Parsing stops at the first character that isn't a digit in that
/// radix. Input without any leading digits is not a number.
pub fn parse_int(input: &str) -> Quantity {
    let trimmed = input.trim_start();

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let (radix, digits) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, unsigned),
    };

    let mut value: Option<i64> = None;

    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        let next = value
            .unwrap_or(0)
            .checked_mul(i64::from(radix))
            .and_then(|v| v.checked_add(i64::from(digit)));

        let Some(next) = next else {
            return Quantity::NAN;
        };

        value = Some(next);
    }

    Quantity(value.map(|v| if negative { -v } else { v }))
}
