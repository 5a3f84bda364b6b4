//! Built-in English locale bundle.

use std::collections::BTreeMap;

use super::{
    Calendar, CalendarEntry, Locale, MonthNames, Pluralizer, RelativeTime, WeekSpec, WeekdayNames,
};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub(super) fn locale() -> Locale {
    Locale {
        relative: RelativeTime {
            prefix_ago: None,
            prefix_from_now: None,
            suffix_ago: Some("ago".to_string()),
            suffix_from_now: Some("from now".to_string()),
            seconds: "just now".to_string(),
            minute: "{prefix} [a minute] {suffix}".to_string(),
            minutes: "{prefix} {diff} [minutes] {suffix}".to_string(),
            hour: "{prefix} [an hour] {suffix}".to_string(),
            hours: "{prefix} {diff} [hours] {suffix}".to_string(),
            day: "{prefix} [a day] {suffix}".to_string(),
            days: "{prefix} {diff} [days] {suffix}".to_string(),
            month: "{prefix} [a month] {suffix}".to_string(),
            months: "{prefix} {diff} [months] {suffix}".to_string(),
            year: "{prefix} [a year] {suffix}".to_string(),
            years: "{prefix} {diff} [years] {suffix}".to_string(),
            format_same_year: "{D} {MMMM}".to_string(),
            format_other_year: "{D} {MMMM} {YYYY}".to_string(),
        },
        pluralizer: Pluralizer::OneOther,
        calendar: Calendar {
            same_day: CalendarEntry::Fixed("Today at {HH}:{mm}".to_string()),
            next_day: CalendarEntry::Fixed("Tomorrow at {HH}:{mm}".to_string()),
            next_week: CalendarEntry::Fixed("{wwww} at {HH}:{mm}".to_string()),
            last_day: CalendarEntry::Fixed("Yesterday at {HH}:{mm}".to_string()),
            last_week: CalendarEntry::Fixed("Last {wwww} at {HH}:{mm}".to_string()),
            same_else: CalendarEntry::Fixed("{D} {MMMM} {YYYY}".to_string()),
        },
        week: WeekSpec {
            week_start: 0,
            year_start: 4,
        },
        months: MonthNames {
            nominative: names(&[
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]),
            accusative: None,
            brief: names(&[
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]),
        },
        weekdays: WeekdayNames {
            nominative: names(&[
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ]),
            accusative: None,
            brief: names(&["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
        },
        formats: BTreeMap::from([
            ("LT".to_string(), "{HH}:{mm}".to_string()),
            ("LTS".to_string(), "{HH}:{mm}:{ss}".to_string()),
            ("L".to_string(), "{MM}/{DD}/{YYYY}".to_string()),
            ("l".to_string(), "{M}/{D}/{YYYY}".to_string()),
            ("LL".to_string(), "{MMMM} {D} {YYYY}".to_string()),
            ("ll".to_string(), "{MMM} {D} {YYYY}".to_string()),
            ("LLL".to_string(), "{MMMM} {D} {YYYY}, {HH}:{mm}".to_string()),
            ("lll".to_string(), "{MMM} {D} {YYYY}, {HH}:{mm}".to_string()),
            (
                "LLLL".to_string(),
                "{wwww}, {MMMM} {D} {YYYY}, {HH}:{mm}".to_string(),
            ),
            (
                "llll".to_string(),
                "{www}, {MMM} {D} {YYYY}, {HH}:{mm}".to_string(),
            ),
        ]),
    }
}
