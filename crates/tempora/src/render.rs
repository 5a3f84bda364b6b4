//! The date formatter: compiled patterns + an instant → text.
//!
//! Rendering reads calendar fields off a [`FieldView`] — the wall-clock
//! fields of the instant in the value's display mode — and consults the
//! active locale for month/weekday names and named format shortcuts.
//! Formatting never fails: unrecognized placeholders are literals.

use chrono::{Datelike, Timelike};

use crate::date::{locale_weekday, week_of_year};
use crate::locale::{Locale, NameContext, PhraseCategory};
use crate::pattern::{CompiledFormat, Segment, Token};

/// Wall-clock fields for rendering: the naive timestamp as seen in the
/// value's display mode, plus the offset to render for `Z`/`ZZ` (zero in
/// UTC mode, the platform offset at the instant otherwise).
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldView {
    pub naive: chrono::NaiveDateTime,
    pub offset_minutes: i32,
}

pub(crate) fn render(
    compiled: &CompiledFormat,
    view: &FieldView,
    locale: &Locale,
    phrase: PhraseCategory,
) -> String {
    let mut out = String::new();
    let mut last_token: Option<Token> = None;
    for segment in compiled.segments() {
        match segment {
            Segment::Literal(text) => {
                out.push_str(text);
                // Whitespace and punctuation keep a day-of-month token
                // "immediately preceding" the next name token; words reset it.
                if text.chars().any(|c| c.is_alphanumeric()) {
                    last_token = None;
                }
            }
            Segment::Token(token) => {
                let ctx = NameContext {
                    after_day_of_month: last_token.is_some_and(Token::is_day_of_month),
                    phrase,
                };
                out.push_str(&render_token(*token, view, locale, ctx));
                last_token = Some(*token);
            }
        }
    }
    out
}

fn render_token(token: Token, view: &FieldView, locale: &Locale, ctx: NameContext) -> String {
    let t = &view.naive;
    let millis = t.nanosecond() / 1_000_000;
    match token {
        Token::MillisShort => format!("{}", millis / 100),
        Token::MillisTwo => format!("{:02}", millis / 10),
        Token::Millis => format!("{millis:03}"),
        Token::Second => format!("{}", t.second()),
        Token::SecondPad => format!("{:02}", t.second()),
        Token::Minute => format!("{}", t.minute()),
        Token::MinutePad => format!("{:02}", t.minute()),
        Token::Hour24 => format!("{}", t.hour()),
        Token::Hour24Pad => format!("{:02}", t.hour()),
        Token::Hour12 => format!("{}", hour12(t.hour())),
        Token::Hour12Pad => format!("{:02}", hour12(t.hour())),
        Token::MeridiemLower => if t.hour() >= 12 { "pm" } else { "am" }.to_string(),
        Token::MeridiemUpper => if t.hour() >= 12 { "PM" } else { "AM" }.to_string(),
        Token::DayOfMonth => format!("{}", t.day()),
        Token::DayOfMonthPad => format!("{:02}", t.day()),
        Token::DayOfYear => format!("{}", t.ordinal()),
        Token::DayOfYearPad => format!("{:03}", t.ordinal()),
        Token::MonthNum => format!("{}", t.month()),
        Token::MonthNumPad => format!("{:02}", t.month()),
        Token::MonthBrief => locale.months.name(t.month0() as usize, ctx, true).to_string(),
        Token::MonthFull => locale.months.name(t.month0() as usize, ctx, false).to_string(),
        Token::WeekdayNum => format!("{}", locale_weekday(t.date(), locale.week.week_start)),
        Token::WeekdayNumPad => {
            format!("{:02}", locale_weekday(t.date(), locale.week.week_start))
        }
        Token::WeekdayBrief => {
            let day = locale_weekday(t.date(), locale.week.week_start) as usize;
            locale.weekdays.name(day, ctx, true).to_string()
        }
        Token::WeekdayFull => {
            let day = locale_weekday(t.date(), locale.week.week_start) as usize;
            locale.weekdays.name(day, ctx, false).to_string()
        }
        Token::Week => format!("{}", week_of_year(t.date(), &locale.week, false)),
        Token::WeekPad => format!("{:02}", week_of_year(t.date(), &locale.week, false)),
        Token::WeekAbs => format!("{}", week_of_year(t.date(), &locale.week, true)),
        Token::WeekAbsPad => format!("{:02}", week_of_year(t.date(), &locale.week, true)),
        Token::YearTwo | Token::YearTwoPad => format!("{:02}", t.year().rem_euclid(100)),
        Token::YearFull => format!("{}", t.year()),
        Token::OffsetColon => offset_text(view.offset_minutes, true),
        Token::Offset => offset_text(view.offset_minutes, false),
    }
}

/// 12-hour clock: 0 renders as 12, 13-23 drop back below 12.
fn hour12(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

/// Fixed-width signed offset, `+` for east of UTC.
fn offset_text(minutes_east: i32, colon: bool) -> String {
    let sign = if minutes_east < 0 { '-' } else { '+' };
    let abs = minutes_east.unsigned_abs();
    if colon {
        format!("{}{:02}:{:02}", sign, abs / 60, abs % 60)
    } else {
        format!("{}{:02}{:02}", sign, abs / 60, abs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use crate::pattern::compile;
    use chrono::NaiveDate;

    fn view(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32, ms: u32) -> FieldView {
        FieldView {
            naive: NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_milli_opt(h, min, s, ms)
                .unwrap(),
            offset_minutes: 0,
        }
    }

    fn fmt(pattern: &str, view: &FieldView, locale: &Locale) -> String {
        render(
            &compile(pattern),
            view,
            locale,
            PhraseCategory::Neutral,
        )
    }

    #[test]
    fn numeric_tokens_pad_as_specified() {
        let en = Locale::english();
        let v = view(1991, 8, 5, 9, 7, 3, 42);
        assert_eq!(fmt("{YYYY}-{MM}-{DD}", &v, &en), "1991-08-05");
        assert_eq!(fmt("{M}/{D}", &v, &en), "8/5");
        assert_eq!(fmt("{HH}:{mm}:{ss}.{SSS}", &v, &en), "09:07:03.042");
        assert_eq!(fmt("{H}:{m}:{s}", &v, &en), "9:7:3");
        assert_eq!(fmt("{Y} {YY}", &v, &en), "91 91");
    }

    #[test]
    fn millisecond_precisions() {
        let en = Locale::english();
        let v = view(2020, 1, 1, 0, 0, 0, 987);
        assert_eq!(fmt("{S}|{SS}|{SSS}", &v, &en), "9|98|987");
    }

    #[test]
    fn twelve_hour_clock_and_meridiem() {
        let en = Locale::english();
        assert_eq!(fmt("{h} {a} {A}", &view(2020, 1, 1, 0, 0, 0, 0), &en), "12 am AM");
        assert_eq!(fmt("{hh} {a}", &view(2020, 1, 1, 13, 0, 0, 0), &en), "01 pm");
        assert_eq!(fmt("{h} {A}", &view(2020, 1, 1, 12, 0, 0, 0), &en), "12 PM");
        assert_eq!(fmt("{h} {a}", &view(2020, 1, 1, 23, 0, 0, 0), &en), "11 pm");
    }

    #[test]
    fn month_and_weekday_names() {
        let en = Locale::english();
        // 1991-08-25 was a Sunday.
        let v = view(1991, 8, 25, 0, 0, 0, 0);
        assert_eq!(fmt("{MMM} {MMMM}", &v, &en), "Aug August");
        assert_eq!(fmt("{www} {wwww}", &v, &en), "Sun Sunday");
        assert_eq!(fmt("{w}", &v, &en), "0");

        let ru = Locale::russian();
        // Week starts Monday: Sunday is locale weekday 6.
        assert_eq!(fmt("{w}", &v, &ru), "6");
        assert_eq!(fmt("{wwww}", &v, &ru), "воскресенье");
    }

    #[test]
    fn russian_month_takes_accusative_after_day_of_month() {
        let ru = Locale::russian();
        let v = view(1991, 8, 25, 0, 0, 0, 0);
        assert_eq!(fmt("{D} {MMMM}", &v, &ru), "25 августа");
        assert_eq!(fmt("{MMMM}", &v, &ru), "август");
        // A word between the tokens breaks the adjacency.
        assert_eq!(fmt("{D} день {MMMM}", &v, &ru), "25 день август");
    }

    #[test]
    fn offset_tokens() {
        let en = Locale::english();
        let mut v = view(2020, 6, 1, 12, 0, 0, 0);
        assert_eq!(fmt("{Z}", &v, &en), "+00:00");
        v.offset_minutes = 330;
        assert_eq!(fmt("{Z}", &v, &en), "+05:30");
        assert_eq!(fmt("{ZZ}", &v, &en), "+0530");
        v.offset_minutes = -300;
        assert_eq!(fmt("{Z}", &v, &en), "-05:00");
        assert_eq!(fmt("{ZZ}", &v, &en), "-0500");
    }

    #[test]
    fn day_of_year_tokens() {
        let en = Locale::english();
        let v = view(1991, 2, 5, 0, 0, 0, 0);
        assert_eq!(fmt("{DDD} {DDDD}", &v, &en), "36 036");
    }

    #[test]
    fn unrecognized_tokens_pass_through() {
        let en = Locale::english();
        let v = view(1991, 8, 25, 0, 0, 0, 0);
        assert_eq!(fmt("{QQ} {YYYY}", &v, &en), "{QQ} 1991");
    }
}
