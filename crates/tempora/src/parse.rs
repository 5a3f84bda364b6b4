//! The date parser: input strings → epoch-millisecond instants.
//!
//! Two paths produce an instant from a string. With an explicit format, the
//! compiled token list drives a left-to-right scan of the input: each token
//! matches its sub-pattern against the unconsumed remainder and records a
//! typed field. Without a format, a structural ISO-8601 regex picks out the
//! date / time / offset sub-shapes present and synthesizes an equivalent
//! token pattern for the same scan.
//!
//! A captured timezone offset is never applied as a field: it is held as
//! pending signed minutes and consumed once, after all other fields, to
//! shift the field-constructed timestamp to the correct absolute instant.

use std::sync::LazyLock;

use chrono::offset::LocalResult;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, TimeZone};
use regex::Regex;

use crate::locale::Locale;
use crate::pattern::{compile_cached, CompiledFormat, Field, Token};

// ISO 8601 structural shape: calendar date, ordinal date or week date,
// optional time of day, optional offset. Week dates are recognized but
// bind only the year (week-of-year is a derived field).
static ISO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:[+-]\d{6}|\d{4})-(?:(?P<md>\d\d-\d\d)|(?P<wk>W\d\d$)|(?P<wkd>W\d\d-\d)|(?P<ord>\d\d\d))(?:(T| )(?P<time>\d\d(?::\d\d(?::\d\d(?P<frac>\.\d+)?)?)?)?(?P<tz>\s*Z|[+-]\d\d(?::?\d\d)?)?)?\s*$",
    )
    .expect("static regex")
});

// Narrow fixed fallback grammar for strings the ISO shape rejects.
// Deliberately small: every accepted layout is spelled out here instead of
// deferring to platform parsing heuristics.
const FALLBACK_FORMATS: &[&str] = &[
    "{YYYY}/{MM}/{DD} {HH}:{mm}:{ss}",
    "{YYYY}/{MM}/{DD}",
    "{DD}.{MM}.{YYYY}",
];

/// Parse a string, with an explicit format, a locale format shortcut, or
/// (when `format` is `None`) ISO autodetection plus the fallback grammar.
/// Returns `None` when no attempt produces an instant.
pub(crate) fn parse_string(
    input: &str,
    format: Option<&str>,
    utc_mode: bool,
    locale: &Locale,
) -> Option<i64> {
    match format {
        Some(f) => {
            let pattern = locale.formats.get(f).map_or(f, |s| s.as_str());
            parse_with_compiled(input, &compile_cached(pattern), utc_mode, locale)
        }
        None => parse_iso(input, utc_mode, locale).or_else(|| {
            FALLBACK_FORMATS.iter().find_map(|pattern| {
                parse_with_compiled(input, &compile_cached(pattern), utc_mode, locale)
            })
        }),
    }
}

/// ISO-8601 autodetection: match the structural shape, synthesize a token
/// pattern from whichever sub-shapes are present, then delegate to the
/// token-driven scan.
fn parse_iso(input: &str, utc_mode: bool, locale: &Locale) -> Option<i64> {
    let caps = ISO.captures(input)?;
    let mut pattern = String::new();
    if caps.name("md").is_some() {
        pattern.push_str("{YYYY}-{MM}-{DD}");
    } else if caps.name("ord").is_some() {
        pattern.push_str("{YYYY}-{DDD}");
    } else if caps.name("wk").is_some() || caps.name("wkd").is_some() {
        // Week-date shapes are recognized structurally; only the year
        // binds, since week-of-year is a derived field.
        pattern.push_str("{YYYY}");
    }
    if let Some(time) = caps.name("time") {
        pattern.push(' ');
        match time.as_str().matches(':').count() {
            0 => pattern.push_str("{HH}"),
            1 => pattern.push_str("{HH}:{mm}"),
            _ => pattern.push_str("{HH}:{mm}:{ss}"),
        }
        // A fractional part contributes milliseconds when it has at least
        // three digits; shorter fractions are consumed structurally only.
        if caps.name("frac").is_some_and(|f| f.as_str().len() >= 4) {
            pattern.push_str(".{SSS}");
        }
    }
    if caps.name("tz").is_some() {
        pattern.push_str("{Z}");
    }
    if pattern.is_empty() {
        return None;
    }
    parse_with_compiled(input, &compile_cached(&pattern), utc_mode, locale)
}

/// Token-driven scan: for each token in order, match its sub-pattern
/// against the unconsumed remainder and record the captured value. Any
/// token that fails to match fails the attempt.
pub(crate) fn parse_with_compiled(
    input: &str,
    compiled: &CompiledFormat,
    utc_mode: bool,
    locale: &Locale,
) -> Option<i64> {
    if !compiled.has_tokens() {
        return None;
    }
    let mut fields = FieldSet::default();
    let mut pos = 0;
    for token in compiled.tokens() {
        let matched = token.sub_pattern().find(&input[pos..])?;
        fields.apply(token, matched.as_str(), locale)?;
        pos += matched.end();
    }
    fields.resolve(utc_mode)
}

/// Build an instant from a `[year, month0, day, hour, minute, second, ms]`
/// component array. Missing trailing components default to zero (day to 1);
/// the month is zero-based exactly as supplied.
pub(crate) fn from_components(parts: &[i64], utc_mode: bool) -> Option<i64> {
    let get = |i: usize| parts.get(i).copied().unwrap_or(0);
    let year = i32::try_from(get(0)).ok()?;
    let month = u32::try_from(get(1) + 1).ok()?;
    let day = u32::try_from(parts.get(2).copied().unwrap_or(1)).ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let naive = date.and_hms_milli_opt(
        u32::try_from(get(3)).ok()?,
        u32::try_from(get(4)).ok()?,
        u32::try_from(get(5)).ok()?,
        u32::try_from(get(6)).ok()?,
    )?;
    if utc_mode {
        Some(naive.and_utc().timestamp_millis())
    } else {
        local_instant(naive)
    }
}

/// Interpret a naive timestamp in the platform's local timezone. Ambiguous
/// wall-clock times (fall-back DST hour) take the earlier instant; times in
/// a spring-forward gap have no instant.
pub(crate) fn local_instant(naive: NaiveDateTime) -> Option<i64> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt.timestamp_millis()),
        LocalResult::Ambiguous(earlier, _) => Some(earlier.timestamp_millis()),
        LocalResult::None => None,
    }
}

/// Decode a numeric offset token into signed minutes east of UTC.
///
/// `Z` is zero; otherwise a sign and one or two two-digit groups, the first
/// hours, the second (if present) minutes.
pub(crate) fn decode_offset(token: &str) -> i32 {
    let token = token.trim();
    if token == "Z" {
        return 0;
    }
    let negative = token.starts_with('-');
    let digits: Vec<u8> = token.bytes().filter(u8::is_ascii_digit).collect();
    let group = |range: std::ops::Range<usize>| -> i32 {
        digits
            .get(range)
            .and_then(|g| std::str::from_utf8(g).ok())
            .and_then(|g| g.parse().ok())
            .unwrap_or(0)
    };
    let minutes = group(0..2) * 60 + group(2..4);
    if negative {
        -minutes
    } else {
        minutes
    }
}

// ── Field collection ────────────────────────────────────────────────────────

/// Typed values captured during a scan, applied all at once at the end.
#[derive(Debug, Default)]
struct FieldSet {
    year: Option<i64>,
    month0: Option<i64>,
    day: Option<i64>,
    day_of_year: Option<i64>,
    hour: Option<i64>,
    minute: Option<i64>,
    second: Option<i64>,
    millisecond: Option<i64>,
    meridiem_pm: Option<bool>,
    offset_minutes: Option<i32>,
}

impl FieldSet {
    fn apply(&mut self, token: Token, value: &str, locale: &Locale) -> Option<()> {
        match token.field() {
            Field::Millisecond => self.millisecond = Some(value.parse().ok()?),
            Field::Second => self.second = Some(value.parse().ok()?),
            Field::Minute => self.minute = Some(value.parse().ok()?),
            Field::Hour => self.hour = Some(value.parse().ok()?),
            Field::Meridiem => self.meridiem_pm = Some(value.eq_ignore_ascii_case("pm")),
            Field::DayOfMonth => self.day = Some(value.parse().ok()?),
            Field::DayOfYear => self.day_of_year = Some(value.parse().ok()?),
            // Internal representation is zero-based.
            Field::MonthNum => self.month0 = Some(value.parse::<i64>().ok()? - 1),
            Field::MonthName => self.month0 = Some(locale.months.lookup(value)? as i64),
            Field::Year => self.year = Some(value.parse().ok()?),
            Field::Offset => self.offset_minutes = Some(decode_offset(value)),
            // Weekday and week-of-year are derived fields: consumed, not set.
            Field::Derived => {}
        }
        Some(())
    }

    /// Assemble the captured fields into an instant. Unset fields default
    /// to today's local date at 00:00:00.000.
    fn resolve(self, utc_mode: bool) -> Option<i64> {
        let today = Local::now().date_naive();
        let year = self.year.unwrap_or_else(|| i64::from(today.year()));
        let date = if let Some(ordinal) = self.day_of_year {
            NaiveDate::from_yo_opt(i32::try_from(year).ok()?, u32::try_from(ordinal).ok()?)?
        } else {
            let month0 = self.month0.unwrap_or_else(|| i64::from(today.month0()));
            let day = self.day.unwrap_or_else(|| i64::from(today.day()));
            NaiveDate::from_ymd_opt(
                i32::try_from(year).ok()?,
                u32::try_from(month0 + 1).ok()?,
                u32::try_from(day).ok()?,
            )?
        };
        let mut hour = self.hour.unwrap_or(0);
        match self.meridiem_pm {
            Some(true) if hour < 12 => hour += 12,
            Some(false) if hour == 12 => hour = 0,
            _ => {}
        }
        let naive = date.and_hms_milli_opt(
            u32::try_from(hour).ok()?,
            u32::try_from(self.minute.unwrap_or(0)).ok()?,
            u32::try_from(self.second.unwrap_or(0)).ok()?,
            u32::try_from(self.millisecond.unwrap_or(0)).ok()?,
        )?;
        match self.offset_minutes {
            // The fields describe wall-clock time at the captured offset;
            // shifting by it yields the absolute instant.
            Some(minutes) => Some(naive.and_utc().timestamp_millis() - i64::from(minutes) * 60_000),
            None if utc_mode => Some(naive.and_utc().timestamp_millis()),
            None => local_instant(naive),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en() -> Locale {
        Locale::english()
    }

    #[test]
    fn iso_date_time_offset_yields_the_absolute_instant() {
        let ms = parse_string("1991-08-25T20:57:08+00:00", None, false, &en()).unwrap();
        assert_eq!(ms / 1000, 683_153_828);
    }

    #[test]
    fn iso_offset_is_subtracted() {
        let zero = parse_string("1991-08-25T20:57:08Z", None, false, &en()).unwrap();
        let plus_two = parse_string("1991-08-25T20:57:08+02:00", None, false, &en()).unwrap();
        assert_eq!(zero - plus_two, 2 * 3_600_000);
        let minus_0530 = parse_string("1991-08-25T20:57:08-05:30", None, false, &en()).unwrap();
        assert_eq!(minus_0530 - zero, 5 * 3_600_000 + 30 * 60_000);
    }

    #[test]
    fn utc_mode_reads_naive_fields_as_utc() {
        let ms = parse_string("1991-08-25 20:57:08", None, true, &en()).unwrap();
        assert_eq!(ms / 1000, 683_153_828);
        let with_format = parse_string(
            "1991-08-25 20:57:08",
            Some("{YYYY}-{MM}-{DD} {HH}:{mm}:{ss}"),
            true,
            &en(),
        )
        .unwrap();
        assert_eq!(with_format, ms);
    }

    #[test]
    fn iso_ordinal_date() {
        // 1991-237 is 1991-08-25.
        let ordinal = parse_string("1991-237", None, true, &en()).unwrap();
        let calendar = parse_string("1991-08-25", None, true, &en()).unwrap();
        assert_eq!(ordinal, calendar);
    }

    #[test]
    fn iso_fractional_seconds() {
        let ms = parse_string("1991-08-25T20:57:08.123Z", None, false, &en()).unwrap();
        assert_eq!(ms % 1000, 123);
        // Short fractions are consumed structurally but contribute nothing.
        let short = parse_string("1991-08-25T20:57:08.5Z", None, false, &en()).unwrap();
        assert_eq!(short % 1000, 0);
    }

    #[test]
    fn textual_month_parses_through_the_locale() {
        let ms = parse_string("25 August 1991", Some("{DD} {MMMM} {YYYY}"), true, &en()).unwrap();
        let iso = parse_string("1991-08-25", None, true, &en()).unwrap();
        assert_eq!(ms, iso);
    }

    #[test]
    fn meridiem_adjusts_a_twelve_hour_clock() {
        let pm = parse_string("1991-08-25 08:30 pm", Some("{YYYY}-{MM}-{DD} {hh}:{mm} {a}"), true, &en())
            .unwrap();
        let twenty = parse_string("1991-08-25 20:30", None, true, &en()).unwrap();
        assert_eq!(pm, twenty);
        let midnight =
            parse_string("1991-08-25 12:00 am", Some("{YYYY}-{MM}-{DD} {hh}:{mm} {a}"), true, &en())
                .unwrap();
        let zero = parse_string("1991-08-25 00:00", None, true, &en()).unwrap();
        assert_eq!(midnight, zero);
    }

    #[test]
    fn failed_token_match_fails_the_attempt() {
        assert!(parse_string("not a date at all", None, true, &en()).is_none());
        assert!(parse_string("1991-08", Some("{YYYY}-{MM}-{DD}"), true, &en()).is_none());
    }

    #[test]
    fn fallback_grammar_covers_slash_and_dot_dates() {
        let slash = parse_string("1991/08/25", None, true, &en()).unwrap();
        let dotted = parse_string("25.08.1991", None, true, &en()).unwrap();
        let iso = parse_string("1991-08-25", None, true, &en()).unwrap();
        assert_eq!(slash, iso);
        assert_eq!(dotted, iso);
    }

    #[test]
    fn offset_decoding() {
        assert_eq!(decode_offset("Z"), 0);
        assert_eq!(decode_offset("+02:00"), 120);
        assert_eq!(decode_offset("+0530"), 330);
        assert_eq!(decode_offset("-07"), -420);
        assert_eq!(decode_offset("-00:45"), -45);
    }

    #[test]
    fn invalid_calendar_dates_fail() {
        assert!(parse_string("2023-02-30", None, true, &en()).is_none());
        assert!(parse_string("2023-13-01", None, true, &en()).is_none());
    }

    #[test]
    fn components_default_trailing_fields() {
        let full = from_components(&[1991, 7, 25, 20, 57, 8, 0], true).unwrap();
        assert_eq!(full / 1000, 683_153_828);
        let date_only = from_components(&[1991, 7, 25], true).unwrap();
        assert_eq!(date_only / 1000, 683_078_400);
    }
}
