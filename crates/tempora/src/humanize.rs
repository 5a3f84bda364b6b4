//! Relative-time and calendar-relative phrasing.
//!
//! `relative_phrase` walks a threshold cascade over the magnitude of the
//! difference between two instants ("5 minutes ago", "через час") and
//! falls back to a long-form date once the gap exceeds the value's
//! configured ceiling. `calendar_phrase` names the value relative to the
//! current day ("Today at 14:30", "В прошлую субботу").

use std::sync::LazyLock;

use regex::Regex;

use crate::date::{Tempora, INVALID_DISPLAY};
use crate::locale::{PhraseCategory, Pluralizer};
use crate::unit::Unit;

/// `[a|b|c]` choice group inside a phrase template.
static CHOICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]").expect("static regex"));

/// Humanized difference of `value` relative to `reference`.
pub(crate) fn relative_phrase(value: &Tempora, reference: &Tempora) -> String {
    if !value.is_valid() || !reference.is_valid() {
        return INVALID_DISPLAY.to_string();
    }
    let locale = value.locale();
    let rt = &locale.relative;
    let d = value.diff_breakdown(reference);

    // Beyond the ceiling the phrase stops being useful; print a date.
    if d.strict.seconds.abs() > value.max_diff_seconds() as f64 {
        let pattern = if value.year() == reference.year() {
            &rt.format_same_year
        } else {
            &rt.format_other_year
        };
        return value.format_in(pattern, PhraseCategory::Neutral);
    }

    let negative = d.strict.seconds < 0.0;
    let (prefix, suffix) = if negative {
        (rt.prefix_ago.as_deref(), rt.suffix_ago.as_deref())
    } else {
        (rt.prefix_from_now.as_deref(), rt.suffix_from_now.as_deref())
    };

    let r = &d.relative;
    let (template, n) = if r.seconds < 45 {
        (&rt.seconds, r.seconds)
    } else if r.seconds < 90 {
        (&rt.minute, 1)
    } else if r.minutes < 45 {
        (&rt.minutes, r.minutes)
    } else if r.minutes < 90 {
        (&rt.hour, 1)
    } else if r.hours < 24 {
        (&rt.hours, r.hours)
    } else if r.hours < 42 {
        (&rt.day, 1)
    } else if r.days < 31 {
        (&rt.days, r.days)
    } else if r.months < 12 {
        (&rt.months, r.months)
    } else if d.strict.years.abs() < 1.5 {
        (&rt.year, r.years)
    } else {
        (&rt.years, r.years)
    };

    let phrase = fill(
        template,
        locale.pluralizer,
        n,
        prefix.unwrap_or(""),
        suffix.unwrap_or(""),
    );
    // Templates may embed date tokens (the long-form fallbacks do), so the
    // assembled phrase still goes through the formatter.
    value.format_in(&phrase, PhraseCategory::Neutral)
}

/// Day-bucket phrase for `value` relative to the start of today.
pub(crate) fn calendar_phrase(value: &Tempora) -> String {
    if !value.is_valid() {
        return INVALID_DISPLAY.to_string();
    }
    let locale = value.locale();
    let days = value.diff_signed(&Tempora::now().start_of(Unit::Day), Unit::Day);
    let (entry, phrase) = if days < -6.0 {
        (&locale.calendar.same_else, PhraseCategory::Neutral)
    } else if days < -1.0 {
        (&locale.calendar.last_week, PhraseCategory::LastWeek)
    } else if days < 0.0 {
        (&locale.calendar.last_day, PhraseCategory::Neutral)
    } else if days < 1.0 {
        (&locale.calendar.same_day, PhraseCategory::Neutral)
    } else if days < 2.0 {
        (&locale.calendar.next_day, PhraseCategory::Neutral)
    } else if days < 7.0 {
        (&locale.calendar.next_week, PhraseCategory::NextWeek)
    } else {
        (&locale.calendar.same_else, PhraseCategory::Neutral)
    };
    let template = entry.template(value.day() as usize);
    value.format_in(template, phrase)
}

/// Resolve choice groups and substitute `{diff}`/`{prefix}`/`{suffix}`.
fn fill(template: &str, plural: Pluralizer, n: i64, prefix: &str, suffix: &str) -> String {
    let resolved = CHOICE_RE.replace_all(template, |caps: &regex::Captures<'_>| {
        let options: Vec<&str> = caps[1].split('|').collect();
        options[plural.index(n).min(options.len() - 1)].to_string()
    });
    resolved
        .replace("{diff}", &n.to_string())
        .replace("{prefix}", prefix)
        .replace("{suffix}", suffix)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::duration_ms;

    fn anchor() -> Tempora {
        Tempora::from_timestamp_millis(683_153_828_000).utc_mode()
    }

    fn shifted(amount: i64, unit: Unit) -> Tempora {
        let base = anchor();
        base.clone().add(amount, unit)
    }

    #[test]
    fn fill_substitutes_and_trims() {
        let out = fill(
            "{prefix} {diff} [minutes] {suffix}",
            Pluralizer::OneOther,
            5,
            "",
            "ago",
        );
        assert_eq!(out, "5 minutes ago");
    }

    #[test]
    fn fill_slavic_choice_groups() {
        let t = "{prefix} {diff} [минуту|минуты|минут] {suffix}";
        assert_eq!(
            fill(t, Pluralizer::Slavic, 1, "через", ""),
            "через 1 минуту"
        );
        assert_eq!(fill(t, Pluralizer::Slavic, 2, "", "назад"), "2 минуты назад");
        assert_eq!(fill(t, Pluralizer::Slavic, 5, "", "назад"), "5 минут назад");
        assert_eq!(
            fill(t, Pluralizer::Slavic, 11, "", "назад"),
            "11 минут назад"
        );
        assert_eq!(
            fill(t, Pluralizer::Slavic, 21, "через", ""),
            "через 21 минуту"
        );
    }

    #[test]
    fn cascade_boundaries_past() {
        let now = anchor();
        let case = |amount: i64, unit: Unit, expected: &str| {
            let value = shifted(-amount, unit);
            assert_eq!(relative_phrase(&value, &now), expected, "{amount} {unit:?}");
        };
        case(0, Unit::Second, "just now");
        case(30, Unit::Second, "just now");
        case(50, Unit::Second, "a minute ago");
        case(5, Unit::Minute, "5 minutes ago");
        case(44, Unit::Minute, "44 minutes ago");
        case(45, Unit::Minute, "an hour ago");
        case(70, Unit::Minute, "an hour ago");
        case(5, Unit::Hour, "5 hours ago");
        case(20, Unit::Hour, "20 hours ago");
        case(24, Unit::Hour, "a day ago");
        case(30, Unit::Hour, "a day ago");
        case(5, Unit::Day, "5 days ago");
        case(29, Unit::Day, "29 days ago");
    }

    #[test]
    fn thirty_one_days_is_past_the_default_ceiling() {
        let now = anchor();
        assert_eq!(relative_phrase(&shifted(-31, Unit::Day), &now), "25 July");
    }

    #[test]
    fn cascade_future_uses_from_now_suffix() {
        let now = anchor();
        assert_eq!(relative_phrase(&shifted(10, Unit::Minute), &now), "10 minutes from now");
    }

    #[test]
    fn long_gaps_use_approximate_months_and_years() {
        let now = anchor().max_diff(i64::MAX);
        let months = now.clone().add(-duration_ms(100, Unit::Day), Unit::Millisecond);
        assert_eq!(relative_phrase(&months, &now), "3 months ago");
        let years = now.clone().add(-duration_ms(800, Unit::Day), Unit::Millisecond);
        assert_eq!(relative_phrase(&years, &now), "2 years ago");
    }

    #[test]
    fn beyond_max_diff_falls_back_to_date() {
        // Anchor is 1991-08-25; 40 days back is July of the same year.
        let now = anchor();
        let value = shifted(-40, Unit::Day);
        assert_eq!(relative_phrase(&value, &now), "16 July");
        let far = shifted(-400, Unit::Day);
        assert_eq!(relative_phrase(&far, &now), "21 July 1990");
    }

    #[test]
    fn russian_phrases_decline() {
        let now = anchor().lang("ru");
        let past = now.clone().add(-5, Unit::Minute);
        assert_eq!(relative_phrase(&past, &now), "5 минут назад");
        let future = now.clone().add(1, Unit::Hour);
        assert_eq!(relative_phrase(&future, &now), "через час");
    }

    #[test]
    fn russian_long_form_uses_accusative_month() {
        let now = anchor().lang("ru");
        let value = now.clone().add(-40, Unit::Day);
        assert_eq!(relative_phrase(&value, &now), "16 июля");
    }

    #[test]
    fn invalid_values_humanize_to_sentinel() {
        let bad = Tempora::parse("not a date");
        assert_eq!(relative_phrase(&bad, &anchor()), INVALID_DISPLAY);
        assert_eq!(calendar_phrase(&bad), INVALID_DISPLAY);
    }

    #[test]
    fn calendar_buckets() {
        let today = Tempora::now();
        assert!(calendar_phrase(&today).starts_with("Today at "));
        let tomorrow = Tempora::now().add(1, Unit::Day);
        assert!(calendar_phrase(&tomorrow).starts_with("Tomorrow at "));
        let yesterday = Tempora::now().add(-1, Unit::Day);
        assert!(calendar_phrase(&yesterday).starts_with("Yesterday at "));
        let far = Tempora::now().add(30, Unit::Day);
        assert!(!calendar_phrase(&far).contains('{'));
    }
}
