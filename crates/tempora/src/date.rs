//! The date value itself.
//!
//! A [`Tempora`] wraps an epoch-millisecond instant plus a little display
//! state: UTC or local mode, the active locale key, and the ceiling past
//! which relative phrasing falls back to a plain date. Values are cheap to
//! clone and every mutator consumes and returns `self`, so call sites read
//! as chains:
//!
//! ```
//! use tempora::{Tempora, Unit};
//!
//! let label = Tempora::utc("1991-08-25T20:57:08+00:00")
//!     .add(3, Unit::Day)
//!     .start_of(Unit::Day)
//!     .format("{D} {MMMM} {YYYY}");
//! assert_eq!(label, "28 August 1991");
//! ```
//!
//! An unparseable input yields an *invalid* value rather than an error:
//! it formats as `"invalid date"`, reports zero for every field, and stays
//! invalid through arithmetic. Use [`Tempora::try_parse`] when you want the
//! failure surfaced as a `Result`.

use std::fmt;

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};

use crate::error::{Result, TemporaError};
use crate::humanize;
use crate::locale::{self, Locale, PhraseCategory, WeekSpec};
use crate::parse;
use crate::pattern::compile_cached;
use crate::render::{self, FieldView};
use crate::unit::{duration_ms, Unit};

/// What an invalid value formats and displays as.
pub(crate) const INVALID_DISPLAY: &str = "invalid date";

/// Pattern used by `Display` and `to_string`.
pub const DEFAULT_FORMAT: &str = "{YYYY}-{MM}-{DD}T{HH}:{mm}:{ss}.{SSS}{Z}";

/// Default relative-phrasing ceiling: 30 days, in seconds.
const DEFAULT_MAX_DIFF_SECONDS: i64 = 2_592_000;

// ── The value ───────────────────────────────────────────────────────────────

/// A date/time value: an instant plus display mode, locale, and the
/// relative-phrasing ceiling. See the module docs for the overall model.
#[derive(Debug, Clone)]
pub struct Tempora {
    /// Epoch milliseconds, `None` for an invalid value.
    instant: Option<i64>,
    utc: bool,
    /// Ceiling (seconds) beyond which `from_now` prints a date instead.
    max_diff: i64,
    lang: String,
}

/// Signed per-unit views of one millisecond difference. `relative` rounds
/// each unit to the nearest whole and drops the sign; `strict` keeps the
/// exact signed fraction.
#[derive(Debug, Clone, Copy)]
pub struct DiffBreakdown {
    pub relative: DiffUnits<i64>,
    pub strict: DiffUnits<f64>,
}

/// One difference expressed simultaneously in every unit. Months are the
/// 30-day approximation and years the 365-day one, matching [`Unit`]'s
/// fixed factors; none of these are calendar-aware.
#[derive(Debug, Clone, Copy)]
pub struct DiffUnits<T> {
    pub milliseconds: T,
    pub seconds: T,
    pub minutes: T,
    pub hours: T,
    pub days: T,
    pub months: T,
    pub years: T,
}

impl Tempora {
    fn with_instant(instant: Option<i64>) -> Tempora {
        Tempora {
            instant,
            utc: false,
            max_diff: DEFAULT_MAX_DIFF_SECONDS,
            lang: locale::global_registry().default_key(),
        }
    }

    // ── Construction ────────────────────────────────────────────────────

    /// The current instant, in local mode.
    pub fn now() -> Tempora {
        Tempora::with_instant(Some(Utc::now().timestamp_millis()))
    }

    /// Start of the current local day.
    pub fn today() -> Tempora {
        Tempora::now().start_of(Unit::Day)
    }

    /// Start of the next local day.
    pub fn tomorrow() -> Tempora {
        Tempora::now().add(1, Unit::Day).start_of(Unit::Day)
    }

    /// Start of the previous local day.
    pub fn yesterday() -> Tempora {
        Tempora::now().add(-1, Unit::Day).start_of(Unit::Day)
    }

    /// A value from epoch milliseconds.
    pub fn from_timestamp_millis(millis: i64) -> Tempora {
        Tempora::with_instant(Some(millis))
    }

    /// A value from a Unix timestamp in whole seconds.
    pub fn unix(seconds: i64) -> Tempora {
        Tempora::from_timestamp_millis(seconds.saturating_mul(1_000))
    }

    /// Parse a string in local mode: ISO-8601 shapes are autodetected,
    /// then a small fallback grammar of common layouts is tried. A string
    /// nothing recognizes yields an invalid value.
    pub fn parse(input: &str) -> Tempora {
        let locale = locale::global_registry().get(&locale::global_registry().default_key());
        Tempora::with_instant(parse::parse_string(input, None, false, &locale))
    }

    /// Parse a string against an explicit token pattern (or a locale
    /// format shortcut such as `"LT"`).
    pub fn parse_format(input: &str, format: &str) -> Tempora {
        let locale = locale::global_registry().get(&locale::global_registry().default_key());
        Tempora::with_instant(parse::parse_string(input, Some(format), false, &locale))
    }

    /// Like [`Tempora::parse`], but reports failure instead of producing
    /// an invalid value.
    ///
    /// # Errors
    ///
    /// Returns [`TemporaError::Parse`] when the input matches nothing.
    pub fn try_parse(input: &str) -> Result<Tempora> {
        let value = Tempora::parse(input);
        if value.is_valid() {
            Ok(value)
        } else {
            Err(TemporaError::Parse(input.to_string()))
        }
    }

    /// Like [`Tempora::parse_format`], but reports failure.
    ///
    /// # Errors
    ///
    /// Returns [`TemporaError::Parse`] when the input does not satisfy
    /// the pattern.
    pub fn try_parse_format(input: &str, format: &str) -> Result<Tempora> {
        let value = Tempora::parse_format(input, format);
        if value.is_valid() {
            Ok(value)
        } else {
            Err(TemporaError::Parse(input.to_string()))
        }
    }

    /// A value from calendar components `[year, month0, day, hour, minute,
    /// second, millisecond]` — any suffix may be omitted and the month is
    /// zero-based. Interpreted on the local clock.
    pub fn from_components(parts: &[i64]) -> Tempora {
        let mut value = Tempora::with_instant(parse::from_components(parts, false));
        value.utc = false;
        value
    }

    /// Like [`Tempora::from_components`], but reports failure.
    ///
    /// # Errors
    ///
    /// Returns [`TemporaError::InvalidComponents`] when the components do
    /// not name a real calendar moment (month 12, day 0 of month, hour 25).
    pub fn try_from_components(parts: &[i64]) -> Result<Tempora> {
        let value = Tempora::from_components(parts);
        if value.is_valid() {
            Ok(value)
        } else {
            Err(TemporaError::InvalidComponents(format!("{parts:?}")))
        }
    }

    /// The current instant, in UTC mode.
    pub fn utc_now() -> Tempora {
        Tempora::now().utc_mode()
    }

    /// Parse a string in UTC mode: inputs without an explicit offset are
    /// read as UTC wall-clock time, and fields render in UTC.
    pub fn utc(input: &str) -> Tempora {
        let locale = locale::global_registry().get(&locale::global_registry().default_key());
        let mut value = Tempora::with_instant(parse::parse_string(input, None, true, &locale));
        value.utc = true;
        value
    }

    /// UTC-mode parse against an explicit pattern.
    pub fn utc_format(input: &str, format: &str) -> Tempora {
        let locale = locale::global_registry().get(&locale::global_registry().default_key());
        let mut value =
            Tempora::with_instant(parse::parse_string(input, Some(format), true, &locale));
        value.utc = true;
        value
    }

    /// UTC-mode value from calendar components.
    pub fn utc_components(parts: &[i64]) -> Tempora {
        let mut value = Tempora::with_instant(parse::from_components(parts, true));
        value.utc = true;
        value
    }

    // ── Display state ───────────────────────────────────────────────────

    /// Whether this value holds a real instant.
    pub fn is_valid(&self) -> bool {
        self.instant.is_some()
    }

    pub fn is_utc(&self) -> bool {
        self.utc
    }

    /// Switch field reads and formatting to UTC. The instant is unchanged.
    pub fn utc_mode(mut self) -> Tempora {
        self.utc = true;
        self
    }

    /// Switch field reads and formatting to the local clock.
    pub fn local_mode(mut self) -> Tempora {
        self.utc = false;
        self
    }

    /// Switch the value to a registered locale. An unregistered key is
    /// ignored and the active locale kept.
    pub fn lang(mut self, key: &str) -> Tempora {
        if locale::global_registry().contains(key) {
            self.lang = key.to_string();
        }
        self
    }

    /// Key of the locale this value formats with.
    pub fn locale_key(&self) -> &str {
        &self.lang
    }

    /// Set the relative-phrasing ceiling, in seconds.
    pub fn max_diff(mut self, seconds: i64) -> Tempora {
        self.max_diff = seconds;
        self
    }

    pub(crate) fn max_diff_seconds(&self) -> i64 {
        self.max_diff
    }

    pub(crate) fn locale(&self) -> std::sync::Arc<Locale> {
        locale::global_registry().get(&self.lang)
    }

    // ── Field reads ─────────────────────────────────────────────────────

    /// Epoch milliseconds; 0 for an invalid value.
    pub fn timestamp_millis(&self) -> i64 {
        self.instant.unwrap_or(0)
    }

    /// Unix timestamp in whole seconds, floored.
    pub fn unix_timestamp(&self) -> i64 {
        self.timestamp_millis().div_euclid(1_000)
    }

    pub fn year(&self) -> i64 {
        self.view().map_or(0, |v| i64::from(v.naive.year()))
    }

    /// Zero-based month: January is 0.
    pub fn month(&self) -> i64 {
        self.view().map_or(0, |v| i64::from(v.naive.month0()))
    }

    /// Day of the month, 1-based.
    pub fn date(&self) -> i64 {
        self.view().map_or(0, |v| i64::from(v.naive.day()))
    }

    pub fn hours(&self) -> i64 {
        self.view().map_or(0, |v| i64::from(v.naive.hour()))
    }

    pub fn minutes(&self) -> i64 {
        self.view().map_or(0, |v| i64::from(v.naive.minute()))
    }

    pub fn seconds(&self) -> i64 {
        self.view().map_or(0, |v| i64::from(v.naive.second()))
    }

    pub fn milliseconds(&self) -> i64 {
        self.view()
            .map_or(0, |v| i64::from(v.naive.nanosecond() / 1_000_000))
    }

    /// Day of the week, Sunday-based: 0 = Sunday.
    pub fn day(&self) -> i64 {
        self.view()
            .map_or(0, |v| i64::from(v.naive.weekday().num_days_from_sunday()))
    }

    /// Day of the week relative to the locale's week start: with a Monday
    /// start, Monday is 0 and Sunday 6.
    pub fn weekday(&self) -> i64 {
        let week_start = self.locale().week.week_start;
        self.view()
            .map_or(0, |v| i64::from(locale_weekday(v.naive.date(), week_start)))
    }

    /// ISO weekday: Monday 1 through Sunday 7.
    pub fn iso_weekday(&self) -> i64 {
        match self.day() {
            0 => 7,
            d => d,
        }
    }

    /// Ordinal day of the year, 1-based.
    pub fn day_of_year(&self) -> i64 {
        self.view().map_or(0, |v| i64::from(v.naive.ordinal()))
    }

    /// Week of the year under the locale's week rules.
    pub fn week(&self) -> i64 {
        let spec = self.locale().week;
        self.view()
            .map_or(0, |v| week_of_year(v.naive.date(), &spec, false))
    }

    /// Week of the year counted absolutely from January 1st.
    pub fn week_absolute(&self) -> i64 {
        let spec = self.locale().week;
        self.view()
            .map_or(0, |v| week_of_year(v.naive.date(), &spec, true))
    }

    // ── Arithmetic ──────────────────────────────────────────────────────

    /// Shift the instant by a fixed-length amount of `unit`. Months and
    /// years use the 30- and 365-day approximations.
    pub fn add(mut self, amount: i64, unit: Unit) -> Tempora {
        self.instant = self
            .instant
            .map(|ms| ms.saturating_add(duration_ms(amount, unit)));
        self
    }

    /// Shift the instant backwards; `sub(n, u)` is `add(-n, u)`.
    pub fn sub(self, amount: i64, unit: Unit) -> Tempora {
        self.add(amount.saturating_neg(), unit)
    }

    // ── Field writes ────────────────────────────────────────────────────

    /// Set one field by unit. Dispatches to the unit-specific setter, so
    /// the same overflow rules apply.
    pub fn set(self, unit: Unit, value: i64) -> Tempora {
        match unit {
            Unit::Millisecond => self.set_milliseconds(value),
            Unit::Second => self.set_seconds(value),
            Unit::Minute => self.set_minutes(value),
            Unit::Hour => self.set_hours(value),
            Unit::Day => self.set_date(value),
            Unit::Week => self.set_week(value),
            Unit::Month => self.set_month(value),
            Unit::Year => self.set_year(value),
        }
    }

    /// Set the year, keeping month and day. A February 29th moving to a
    /// non-leap year clamps to the 28th.
    pub fn set_year(self, year: i64) -> Tempora {
        let naive = self.view().and_then(|v| {
            let y = i32::try_from(year).ok()?;
            let day = v.naive.day().min(days_in_month(y, v.naive.month()));
            NaiveDate::from_ymd_opt(y, v.naive.month(), day).map(|d| d.and_time(v.naive.time()))
        });
        self.rebuild(naive)
    }

    /// Set the zero-based month. Values outside `0..=11` roll the year;
    /// a day past the end of the target month clamps to its last day.
    pub fn set_month(self, month: i64) -> Tempora {
        let naive = self.view().and_then(|v| {
            let year = i64::from(v.naive.year()) + month.div_euclid(12);
            let y = i32::try_from(year).ok()?;
            let m = month.rem_euclid(12) as u32 + 1;
            let day = v.naive.day().min(days_in_month(y, m));
            NaiveDate::from_ymd_opt(y, m, day).map(|d| d.and_time(v.naive.time()))
        });
        self.rebuild(naive)
    }

    /// Set the day of the month. A day past the end of the month rolls
    /// into the following month by the excess; zero and negatives roll
    /// backwards from the 1st.
    pub fn set_date(self, day: i64) -> Tempora {
        let naive = self.view().and_then(|v| {
            let (y, m) = (v.naive.year(), v.naive.month());
            let dim = i64::from(days_in_month(y, m));
            let date = if (1..=dim).contains(&day) {
                NaiveDate::from_ymd_opt(y, m, day as u32)
            } else {
                let (anchor, excess) = if day < 1 { (1, day - 1) } else { (dim, day - dim) };
                NaiveDate::from_ymd_opt(y, m, anchor as u32)
                    .and_then(|d| d.checked_add_signed(Duration::days(excess)))
            };
            date.map(|d| d.and_time(v.naive.time()))
        });
        self.rebuild(naive)
    }

    /// Set the hour of day; out-of-range hours roll into adjacent days.
    pub fn set_hours(self, hours: i64) -> Tempora {
        let current = self.hours();
        self.add(hours - current, Unit::Hour)
    }

    pub fn set_minutes(self, minutes: i64) -> Tempora {
        let current = self.minutes();
        self.add(minutes - current, Unit::Minute)
    }

    pub fn set_seconds(self, seconds: i64) -> Tempora {
        let current = self.seconds();
        self.add(seconds - current, Unit::Second)
    }

    pub fn set_milliseconds(self, millis: i64) -> Tempora {
        let current = self.milliseconds();
        self.add(millis - current, Unit::Millisecond)
    }

    /// Move to the given Sunday-based weekday within the current week's
    /// frame: the shift is the signed day delta from the current weekday.
    pub fn set_day(self, day: i64) -> Tempora {
        let current = self.day();
        self.add(day - current, Unit::Day)
    }

    /// Like [`Tempora::set_day`] with the locale-relative weekday number.
    pub fn set_weekday(self, weekday: i64) -> Tempora {
        let current = self.weekday();
        self.add(weekday - current, Unit::Day)
    }

    /// Move to the given week of the year, keeping weekday and time.
    pub fn set_week(self, week: i64) -> Tempora {
        let current = self.week();
        self.add((week - current) * 7, Unit::Day)
    }

    /// Move to the given ordinal day of the year.
    pub fn set_day_of_year(self, ordinal: i64) -> Tempora {
        let current = self.day_of_year();
        self.add(ordinal - current, Unit::Day)
    }

    // ── Truncation ──────────────────────────────────────────────────────

    /// Truncate to the start of `unit`: `start_of(Month)` is the first of
    /// the month at midnight, `start_of(Week)` midnight of the locale's
    /// week-start day.
    pub fn start_of(self, unit: Unit) -> Tempora {
        let week_start = self.locale().week.week_start;
        let naive = self.view().and_then(|v| {
            let t = v.naive;
            match unit {
                Unit::Millisecond => Some(t),
                Unit::Second => t.with_nanosecond(0),
                Unit::Minute => t.with_nanosecond(0).and_then(|t| t.with_second(0)),
                Unit::Hour => t
                    .with_nanosecond(0)
                    .and_then(|t| t.with_second(0))
                    .and_then(|t| t.with_minute(0)),
                Unit::Day => Some(t.date().and_hms_opt(0, 0, 0)?),
                Unit::Week => {
                    let back = i64::from(locale_weekday(t.date(), week_start));
                    let date = t.date().checked_sub_signed(Duration::days(back))?;
                    date.and_hms_opt(0, 0, 0)
                }
                Unit::Month => {
                    NaiveDate::from_ymd_opt(t.year(), t.month(), 1)?.and_hms_opt(0, 0, 0)
                }
                Unit::Year => NaiveDate::from_ymd_opt(t.year(), 1, 1)?.and_hms_opt(0, 0, 0),
            }
        });
        self.rebuild(naive)
    }

    /// Last millisecond of `unit`. Month and year ends are calendar-exact;
    /// the fixed-length units are the next boundary minus one millisecond.
    pub fn end_of(self, unit: Unit) -> Tempora {
        match unit {
            Unit::Month => self
                .start_of(Unit::Month)
                .set_month_raw(1)
                .sub(1, Unit::Millisecond),
            Unit::Year => self
                .start_of(Unit::Year)
                .set_year_raw(1)
                .sub(1, Unit::Millisecond),
            _ => self
                .start_of(unit)
                .add(1, unit)
                .sub(1, Unit::Millisecond),
        }
    }

    // Relative month/year steps for `end_of`, exact rather than 30/365-day.
    fn set_month_raw(self, delta: i64) -> Tempora {
        let month = self.month();
        self.set_month(month + delta)
    }

    fn set_year_raw(self, delta: i64) -> Tempora {
        let year = self.year();
        self.set_year(year + delta)
    }

    // ── Differences ─────────────────────────────────────────────────────

    /// Absolute rounded difference between two values, in `unit`.
    pub fn diff(&self, other: &Tempora, unit: Unit) -> i64 {
        self.diff_signed(other, unit).round().abs() as i64
    }

    /// Exact signed difference `self − other`, in fractional `unit`s.
    pub fn diff_signed(&self, other: &Tempora, unit: Unit) -> f64 {
        let millis = self.timestamp_millis() - other.timestamp_millis();
        millis as f64 / Unit::factor_ms(unit) as f64
    }

    /// The difference in every unit at once, both rounded-absolute and
    /// exact-signed.
    pub fn diff_breakdown(&self, other: &Tempora) -> DiffBreakdown {
        let strict = DiffUnits {
            milliseconds: self.diff_signed(other, Unit::Millisecond),
            seconds: self.diff_signed(other, Unit::Second),
            minutes: self.diff_signed(other, Unit::Minute),
            hours: self.diff_signed(other, Unit::Hour),
            days: self.diff_signed(other, Unit::Day),
            months: self.diff_signed(other, Unit::Month),
            years: self.diff_signed(other, Unit::Year),
        };
        let rounded = |v: f64| v.round().abs() as i64;
        DiffBreakdown {
            relative: DiffUnits {
                milliseconds: rounded(strict.milliseconds),
                seconds: rounded(strict.seconds),
                minutes: rounded(strict.minutes),
                hours: rounded(strict.hours),
                days: rounded(strict.days),
                months: rounded(strict.months),
                years: rounded(strict.years),
            },
            strict,
        }
    }

    // ── Formatting and phrasing ─────────────────────────────────────────

    /// Render through a token pattern, e.g. `"{D} {MMMM} {YYYY}"`. The
    /// pattern may also be one of the locale's named shortcuts (`"LT"`,
    /// `"L"`, …). An invalid value renders as `"invalid date"`.
    pub fn format(&self, pattern: &str) -> String {
        self.format_in(pattern, PhraseCategory::Neutral)
    }

    pub(crate) fn format_in(&self, pattern: &str, phrase: PhraseCategory) -> String {
        let locale = self.locale();
        let pattern = locale.formats.get(pattern).map_or(pattern, |s| s.as_str());
        match self.view() {
            Some(view) => render::render(&compile_cached(pattern), &view, &locale, phrase),
            None => INVALID_DISPLAY.to_string(),
        }
    }

    /// Humanized distance from the current instant: "5 minutes ago",
    /// "через час". Past the value's `max_diff` ceiling this prints a
    /// plain date instead.
    pub fn from_now(&self) -> String {
        self.relative_to(&Tempora::now())
    }

    /// Humanized distance from an explicit reference instant.
    pub fn relative_to(&self, reference: &Tempora) -> String {
        humanize::relative_phrase(self, reference)
    }

    /// Calendar-relative phrase for the value against today: "Today at
    /// 14:30", "Last Sunday at 09:00", or a plain date further out.
    pub fn calendar(&self) -> String {
        humanize::calendar_phrase(self)
    }

    // ── Internals ───────────────────────────────────────────────────────

    /// Wall-clock fields in the value's display mode.
    pub(crate) fn view(&self) -> Option<FieldView> {
        let millis = self.instant?;
        if self.utc {
            let dt = Utc.timestamp_millis_opt(millis).single()?;
            Some(FieldView {
                naive: dt.naive_utc(),
                offset_minutes: 0,
            })
        } else {
            let dt = Local.timestamp_millis_opt(millis).single()?;
            Some(FieldView {
                naive: dt.naive_local(),
                offset_minutes: dt.offset().local_minus_utc() / 60,
            })
        }
    }

    /// Re-anchor the value on a naive timestamp read back through the
    /// same display mode it was produced in.
    fn rebuild(mut self, naive: Option<NaiveDateTime>) -> Tempora {
        self.instant = naive.and_then(|n| {
            if self.utc {
                Some(n.and_utc().timestamp_millis())
            } else {
                parse::local_instant(n)
            }
        });
        self
    }
}

impl fmt::Display for Tempora {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DEFAULT_FORMAT))
    }
}

impl From<chrono::DateTime<Utc>> for Tempora {
    fn from(dt: chrono::DateTime<Utc>) -> Tempora {
        Tempora::from_timestamp_millis(dt.timestamp_millis()).utc_mode()
    }
}

impl From<chrono::DateTime<Local>> for Tempora {
    fn from(dt: chrono::DateTime<Local>) -> Tempora {
        Tempora::from_timestamp_millis(dt.timestamp_millis())
    }
}

// ── Calendar helpers ────────────────────────────────────────────────────────

/// Day count of `month` (1-based) in `year`.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .and_then(|d| d.pred_opt())
        .map_or(30, |d| d.day())
}

/// Weekday number relative to the locale's week start.
pub(crate) fn locale_weekday(date: NaiveDate, week_start: u32) -> u32 {
    (date.weekday().num_days_from_sunday() + 7 - week_start) % 7
}

/// Week-of-year under a locale's `WeekSpec`: shift the date onto its
/// anchor weekday, then count week-lengths from January 1st. `absolute`
/// anchors on the original date's year and truncates; the default anchors
/// on the shifted date's year and rounds up, which is the ISO-style
/// numbering when `year_start` is 4.
pub(crate) fn week_of_year(date: NaiveDate, week: &WeekSpec, absolute: bool) -> i64 {
    let sunday = i64::from(date.weekday().num_days_from_sunday());
    let day = if week.week_start != 0 && sunday == 0 { 7 } else { sunday };
    let Some(shifted) = date.checked_add_signed(Duration::days(i64::from(week.year_start) - day))
    else {
        return 0;
    };
    let anchor_year = if absolute { date.year() } else { shifted.year() };
    let Some(jan1) = NaiveDate::from_ymd_opt(anchor_year, 1, 1) else {
        return 0;
    };
    let diff_ms = (shifted - jan1).num_days() * 86_400_000;
    if absolute {
        (diff_ms + 1).div_euclid(604_800_000)
    } else {
        ((diff_ms + 1) as f64 / 604_800_000.0).ceil() as i64
    }
}
