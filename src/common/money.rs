use bigdecimal::BigDecimal;
use bigdecimal::*;
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
const SCALE: i64 = 10_000;

#[derive(Debug, Clone, Copy, Default)]
/// A monetary value stored as an integer number of ten-thousandths.
///
/// Amounts typed by the user are parsed through `BigDecimal` and rounded to
/// four fractional digits, so balances never accumulate floating-point drift.
/// Reports show two fractional digits.
///
/// # Examples
/// ```
/// use wallet_ledger::common::money::Money;
///
/// let amount: Money = "12.5".parse().unwrap();
/// assert_eq!(amount.as_i64(), 125_000);
/// assert_eq!(amount.to_string(), "12.50");
/// ```
pub struct Money(i64);

impl Money {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Whole currency units, e.g. `Money::units(5)` is `5.00`.
    pub fn units(value: i64) -> Self {
        Money(value * SCALE)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// `None` when the result does not fit.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// `None` when the result does not fit.
    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    /// Clamps at the representable bounds instead of wrapping.
    pub fn saturating_add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }

    pub fn to_string_4dp(&self) -> String {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(SCALE);
        format!("{:.4}", bd)
    }

    pub fn to_string_2dp(&self) -> String {
        let bd = (BigDecimal::from(self.0) / BigDecimal::from(SCALE))
            .with_scale_round(2, RoundingMode::HalfEven);
        format!("{:.2}", bd)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        let scaled = (bd * BigDecimal::from(SCALE)).round(0);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_2dp())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;
    fn neg(self) -> Money {
        Money(self.0.saturating_neg())
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Money::saturating_add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_units() {
        assert_eq!(Money::units(5), Money(50_000));
        assert_eq!(Money::units(-2), Money(-20_000));
    }

    #[test]
    fn test_from_str_valid() {
        assert_eq!(Money::from_str("1").unwrap(), Money(10000));
        assert_eq!(Money::from_str("1.5").unwrap(), Money(15000));
        assert_eq!(Money::from_str("1.2345").unwrap(), Money(12345));
        assert_eq!(Money::from_str("  2.0000 ").unwrap(), Money(20000));
        assert_eq!(Money::from_str("-3").unwrap(), Money(-30000));
    }

    #[test]
    fn test_from_str_rounding() {
        assert_eq!(Money::from_str("1.99999").unwrap(), Money(20000));
        assert_eq!(Money::from_str("0.00001").unwrap(), Money(0));
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(Money::from_str("").is_err());
        assert!(Money::from_str("   ").is_err());
        assert!(Money::from_str("abc").is_err());
    }

    #[test]
    fn test_to_string_2dp() {
        assert_eq!(Money(10000).to_string_2dp(), "1.00");
        assert_eq!(Money(1_205_000).to_string_2dp(), "120.50");
        assert_eq!(Money(0).to_string_2dp(), "0.00");
        assert_eq!(Money(-9_000_000).to_string_2dp(), "-900.00");
    }

    #[test]
    fn test_display_uses_two_decimals() {
        assert_eq!(Money::units(380).to_string(), "380.00");
        assert_eq!(Money(5000).to_string(), "0.50");
    }

    #[test]
    fn test_sign_helpers() {
        assert!(Money(1).is_positive());
        assert!(!Money::zero().is_positive());
        assert!(Money(-1).is_negative());
        assert_eq!(-Money::units(10), Money::units(-10));
    }

    #[test]
    fn test_sum() {
        let values = [Money::units(50), Money::units(70)];
        assert_eq!(values.iter().sum::<Money>(), Money::units(120));
        assert_eq!(Vec::<Money>::new().into_iter().sum::<Money>(), Money::zero());
    }

    #[test]
    fn test_add_sub_assign() {
        let mut m = Money(10000);
        m += Money(5000);
        assert_eq!(m, Money(15000));
        m -= Money(15000);
        assert_eq!(m, Money::zero());
    }

    #[test]
    fn test_checked_arithmetic() {
        let big = Money::from_str("900000000000000").unwrap();
        assert_eq!(big.checked_add(big), None);
        assert_eq!(Money(-i64::MAX).checked_sub(Money(2)), None);
        assert_eq!(Money(5).checked_add(Money(7)), Some(Money(12)));
        assert_eq!(Money(5).checked_sub(Money(7)), Some(Money(-2)));
    }

    #[test]
    fn test_sum_and_neg_saturate() {
        let big = Money(i64::MAX - 1);
        assert_eq!([big, big].iter().sum::<Money>(), Money(i64::MAX));
        assert_eq!(-Money(i64::MIN), Money(i64::MAX));
    }

    #[test]
    fn test_ordering() {
        assert!(Money(10000) < Money(15000));
        assert!(Money(-1) < Money::zero());
        assert_eq!(Money(3).max(Money(7)), Money(7));
    }
}
