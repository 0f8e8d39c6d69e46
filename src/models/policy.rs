//! Salary calculation policies.

use rust_decimal::Decimal;
use std::fmt;

/// Rule deriving an employee's calculated salary from their base salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SalaryPolicy {
    /// Permanent staff receive a 20% bonus on top of the base salary.
    Permanent,
    /// Contract staff receive the base salary unchanged.
    Contract,
}

impl SalaryPolicy {
    /// Returns all policies in console menu order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Permanent, Self::Contract]
    }

    /// Multiplier applied to the base salary of permanent staff (1.2).
    #[must_use]
    pub fn permanent_multiplier() -> Decimal {
        Decimal::new(12, 1)
    }

    /// Computes the salary for the given base amount.
    ///
    /// Arithmetic is fixed-point, so `1000 * 1.2` is exactly `1200`. Bases
    /// rejected by [`is_priceable`](Self::is_priceable) never reach the
    /// store; for those the result is rounded or saturated rather than exact.
    #[must_use]
    pub fn compute(self, base: Decimal) -> Decimal {
        self.checked_compute(base)
            .unwrap_or_else(|| base.saturating_mul(Self::permanent_multiplier()))
    }

    /// Computes the salary, or `None` if the exact result does not fit in a
    /// [`Decimal`] (96-bit mantissa, at most 28 decimal places).
    #[must_use]
    pub fn checked_compute(self, base: Decimal) -> Option<Decimal> {
        match self {
            Self::Permanent => {
                // base * 1.2 == (mantissa * 12) / 10^(scale + 1)
                let mut mantissa = base.mantissa().checked_mul(12)?;
                let mut scale = base.scale() + 1;
                while scale > 0 && mantissa % 10 == 0 {
                    mantissa /= 10;
                    scale -= 1;
                }
                Decimal::try_from_i128_with_scale(mantissa, scale).ok()
            },
            Self::Contract => Some(base),
        }
    }

    /// Returns true if `base` can be priced exactly under every policy.
    #[must_use]
    pub fn is_priceable(base: Decimal) -> bool {
        Self::all()
            .iter()
            .all(|policy| policy.checked_compute(base).is_some())
    }

    /// Maps a console menu choice (`1` or `2`) to a policy.
    #[must_use]
    pub const fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::Permanent),
            2 => Some(Self::Contract),
            _ => None,
        }
    }

    /// Returns the policy name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Permanent => "Permanent",
            Self::Contract => "Contract",
        }
    }
}

impl fmt::Display for SalaryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
