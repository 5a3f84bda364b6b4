//! Built-in Russian locale bundle.
//!
//! Month names render in accusative case right after a day-of-month token
//! ("5 января"), weekday names in accusative inside last/next-week phrases.
//! The last-week calendar phrase varies with the weekday's grammatical
//! gender.

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
            prefix_from_now: Some("через".to_string()),
            suffix_ago: Some("назад".to_string()),
            suffix_from_now: None,
            seconds: "только что".to_string(),
            minute: "{prefix} [минуту] {suffix}".to_string(),
            minutes: "{prefix} {diff} [минуту|минуты|минут] {suffix}".to_string(),
            hour: "{prefix} [час] {suffix}".to_string(),
            hours: "{prefix} {diff} [час|часа|часов] {suffix}".to_string(),
            day: "{prefix} [день] {suffix}".to_string(),
            days: "{prefix} {diff} [день|дня|дней] {suffix}".to_string(),
            month: "{prefix} [месяц] {suffix}".to_string(),
            months: "{prefix} {diff} [месяц|месяца|месяцев] {suffix}".to_string(),
            year: "{prefix} [год] {suffix}".to_string(),
            years: "{prefix} {diff} [год|года|лет] {suffix}".to_string(),
            format_same_year: "{D} {MMMM}".to_string(),
            format_other_year: "{D} {MMMM} {YYYY}".to_string(),
        },
        pluralizer: Pluralizer::Slavic,
        calendar: Calendar {
            same_day: CalendarEntry::Fixed("Сегодня".to_string()),
            next_day: CalendarEntry::Fixed("Завтра".to_string()),
            // "Во вторник", "В среду" — the preposition depends on the day.
            next_week: CalendarEntry::ByWeekday(names(&[
                "В {wwww} в {H}:{m}",
                "В {wwww} в {H}:{m}",
                "Во {wwww} в {H}:{m}",
                "В {wwww} в {H}:{m}",
                "В {wwww} в {H}:{m}",
                "В {wwww} в {H}:{m}",
                "В {wwww} в {H}:{m}",
            ])),
            last_day: CalendarEntry::Fixed("Вчера".to_string()),
            // Gender of the weekday picks прошлое/прошлый/прошлую.
            last_week: CalendarEntry::ByWeekday(names(&[
                "В прошлое {wwww}",
                "В прошлый {wwww}",
                "В прошлый {wwww}",
                "В прошлую {wwww}",
                "В прошлый {wwww}",
                "В прошлую {wwww}",
                "В прошлую {wwww}",
            ])),
            same_else: CalendarEntry::Fixed("{D} {MMMM} {YYYY}".to_string()),
        },
        week: WeekSpec {
            week_start: 1,
            year_start: 4,
        },
        months: MonthNames {
            nominative: names(&[
                "январь",
                "февраль",
                "март",
                "апрель",
                "май",
                "июнь",
                "июль",
                "август",
                "сентябрь",
                "октябрь",
                "ноябрь",
                "декабрь",
            ]),
            accusative: Some(names(&[
                "января",
                "февраля",
                "марта",
                "апреля",
                "мая",
                "июня",
                "июля",
                "августа",
                "сентября",
                "октября",
                "ноября",
                "декабря",
            ])),
            brief: names(&[
                "янв", "фев", "мар", "апр", "май", "июн", "июл", "авг", "сен", "окт", "ноя", "дек",
            ]),
        },
        // Week starts on Monday, so index 0 is понедельник.
        weekdays: WeekdayNames {
            nominative: names(&[
                "понедельник",
                "вторник",
                "среда",
                "четверг",
                "пятница",
                "суббота",
                "воскресенье",
            ]),
            accusative: Some(names(&[
                "понедельник",
                "вторник",
                "среду",
                "четверг",
                "пятницу",
                "субботу",
                "воскресенье",
            ])),
            brief: names(&["пн", "вт", "ср", "чт", "пт", "сб", "вс"]),
        },
        formats: BTreeMap::from([
            ("LT".to_string(), "{HH}:{mm}".to_string()),
            ("LTS".to_string(), "{HH}:{mm}:{ss}".to_string()),
            ("L".to_string(), "{DD}.{MM}.{YYYY}".to_string()),
            ("l".to_string(), "{D}.{M}.{YYYY}".to_string()),
            ("LL".to_string(), "{D} {MMMM} {YYYY}".to_string()),
            ("ll".to_string(), "{D} {MMM}. {YYYY}".to_string()),
            ("LLL".to_string(), "{D} {MMMM} {YYYY}, {HH}:{mm}".to_string()),
            ("lll".to_string(), "{D} {MMM}. {YYYY}, {HH}:{mm}".to_string()),
            (
                "LLLL".to_string(),
                "{wwww}, {D} {MMMM} {YYYY}, {HH}:{mm}".to_string(),
            ),
            (
                "llll".to_string(),
                "{www}, {D} {MMM}. {YYYY}, {HH}:{mm}".to_string(),
            ),
        ]),
    }
}
