//! Canonical time units and their millisecond factors.
//!
//! Arithmetic on [`Tempora`](crate::Tempora) values accepts both short codes
//! (`y`, `M`, `d`, `h`, `m`, `s`, `ms`, `w`) and long singular/plural English
//! unit names — all aliases resolve to the same canonical [`Unit`]. Month and
//! year factors are the fixed approximations (30 and 365 days) used by the
//! relative-time machinery; calendar-exact month/year math lives in the field
//! setters instead.

use std::str::FromStr;

use crate::error::TemporaError;

/// A canonical unit of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    /// Milliseconds per unit. Month is a 30-day approximation, year 365 days.
    pub fn factor_ms(self) -> i64 {
        match self {
            Unit::Millisecond => 1,
            Unit::Second => 1_000,
            Unit::Minute => 60_000,
            Unit::Hour => 3_600_000,
            Unit::Day => 86_400_000,
            Unit::Week => 604_800_000,
            Unit::Month => 2_592_000_000,
            Unit::Year => 31_536_000_000,
        }
    }
}

/// `amount` of `unit`, expressed in milliseconds.
pub fn duration_ms(amount: i64, unit: Unit) -> i64 {
    amount * unit.factor_ms()
}

impl FromStr for Unit {
    type Err = TemporaError;

    /// Resolve a unit name or alias.
    ///
    /// Short codes are case-sensitive where it matters: `M` is month,
    /// `m` is minute.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ms" | "millisecond" | "milliseconds" => Ok(Unit::Millisecond),
            "s" | "second" | "seconds" => Ok(Unit::Second),
            "m" | "minute" | "minutes" => Ok(Unit::Minute),
            "h" | "hour" | "hours" => Ok(Unit::Hour),
            "d" | "day" | "days" => Ok(Unit::Day),
            "w" | "week" | "weeks" => Ok(Unit::Week),
            "M" | "month" | "months" => Ok(Unit::Month),
            "y" | "Y" | "year" | "years" => Ok(Unit::Year),
            other => Err(TemporaError::UnknownUnit(other.to_string())),
        }
    }
}
