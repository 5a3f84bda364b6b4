//! End-to-end checks through the public API: parse/format round-trips,
//! humanized phrasing, and runtime locale registration.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use tempora::{register_locale, Locale, Tempora, Unit};

const ANCHOR_MS: i64 = 683_153_828_000; // 1991-08-25T20:57:08Z

#[test]
fn iso_shapes_parse_to_the_same_instant() {
    let expected = 683_153_828;
    for input in [
        "1991-08-25T20:57:08+00:00",
        "1991-08-25T20:57:08Z",
        "1991-08-25 20:57:08",
        "1991-08-25T22:57:08+02:00",
        "1991-08-25T16:27:08-04:30",
    ] {
        assert_eq!(Tempora::utc(input).unix_timestamp(), expected, "{input}");
    }
}

#[test]
fn ordinal_and_week_date_shapes_are_accepted() {
    assert_eq!(
        Tempora::utc("1991-237").format("{YYYY}-{MM}-{DD}"),
        "1991-08-25"
    );
    // Week-date shapes are recognized structurally; only the year binds.
    assert!(Tempora::utc("2004-W53-7").is_valid());
    assert!(Tempora::utc("2004-W53").is_valid());
}

#[test]
fn fallback_grammar_layouts() {
    assert_eq!(
        Tempora::utc("1991/08/25 20:57:08").unix_timestamp(),
        683_153_828
    );
    assert_eq!(
        Tempora::utc("25.08.1991").format("{YYYY}-{MM}-{DD}"),
        "1991-08-25"
    );
}

#[test]
fn explicit_patterns_parse_text_and_meridiem() {
    let value = Tempora::utc_format("25 August 1991, 8:57 pm", "{D} {MMMM} {YYYY}, {h}:{mm} {a}");
    assert_eq!(value.format("{YYYY}-{MM}-{DD} {HH}:{mm}"), "1991-08-25 20:57");

    let midnight = Tempora::utc_format("12:30 am", "{h}:{mm} {a}");
    assert_eq!(midnight.hours(), 0);
    assert_eq!(midnight.minutes(), 30);
}

#[test]
fn named_format_shortcuts_format_and_parse() {
    let value = Tempora::from_timestamp_millis(ANCHOR_MS).utc_mode();
    let long = value.format("LL");
    assert_eq!(long, "August 25 1991");
    let back = Tempora::utc_format(&long, "LL");
    assert_eq!(back.format("{YYYY}-{MM}-{DD}"), "1991-08-25");
}

#[test]
fn display_round_trips_through_utc_parse() {
    let value = Tempora::from_timestamp_millis(ANCHOR_MS).utc_mode();
    let text = value.to_string();
    assert_eq!(text, "1991-08-25T20:57:08.000+00:00");
    assert_eq!(
        Tempora::utc(&text).timestamp_millis(),
        value.timestamp_millis()
    );
}

#[test]
fn humanized_phrases_through_the_public_api() {
    let now = Tempora::from_timestamp_millis(ANCHOR_MS).utc_mode();
    let cases: &[(i64, Unit, &str)] = &[
        (-30, Unit::Second, "just now"),
        (-50, Unit::Second, "a minute ago"),
        (-5, Unit::Minute, "5 minutes ago"),
        (-70, Unit::Minute, "an hour ago"),
        (-5, Unit::Hour, "5 hours ago"),
        (-30, Unit::Hour, "a day ago"),
        (-5, Unit::Day, "5 days ago"),
        (10, Unit::Minute, "10 minutes from now"),
    ];
    for &(amount, unit, expected) in cases {
        let value = now.clone().add(amount, unit);
        assert_eq!(value.relative_to(&now), expected);
    }
}

#[test]
fn russian_phrases_through_the_public_api() {
    let now = Tempora::from_timestamp_millis(ANCHOR_MS).utc_mode().lang("ru");
    assert_eq!(now.clone().add(-2, Unit::Minute).relative_to(&now), "2 минуты назад");
    assert_eq!(now.clone().add(5, Unit::Hour).relative_to(&now), "через 5 часов");
    assert_eq!(
        now.clone().add(-40, Unit::Day).relative_to(&now),
        "16 июля"
    );
    assert_eq!(
        now.clone().format("{D} {MMMM} {YYYY}"),
        "25 августа 1991"
    );
}

#[test]
fn registered_locales_take_effect() {
    let mut pirate = Locale::english();
    pirate.relative.suffix_ago = Some("afore now".to_string());
    register_locale("en-pirate", pirate);

    let now = Tempora::from_timestamp_millis(ANCHOR_MS).utc_mode().lang("en-pirate");
    assert_eq!(now.locale_key(), "en-pirate");
    assert_eq!(
        now.clone().add(-5, Unit::Minute).relative_to(&now),
        "5 minutes afore now"
    );
}

#[test]
fn calendar_is_phrased_not_tokenized() {
    for offset in [-8, -3, -1, 0, 1, 3, 10] {
        let value = Tempora::now().add(offset, Unit::Day);
        let phrase = value.calendar();
        assert!(!phrase.contains('{'), "{offset}: {phrase}");
        assert!(!phrase.is_empty());
    }
}

#[test]
fn invalid_values_are_inert() {
    let bad = Tempora::parse("gibberish");
    assert!(!bad.is_valid());
    assert_eq!(bad.to_string(), "invalid date");
    assert_eq!(bad.from_now(), "invalid date");
    assert_eq!(bad.calendar(), "invalid date");
    assert!(!bad.add(1, Unit::Year).is_valid());
}

proptest! {
    #[test]
    fn default_format_round_trips(millis in 0i64..4_102_444_800_000) {
        let value = Tempora::from_timestamp_millis(millis).utc_mode();
        let parsed = Tempora::utc(&value.to_string());
        prop_assert_eq!(parsed.timestamp_millis(), millis);
    }

    #[test]
    fn second_precision_pattern_round_trips(seconds in 0i64..4_102_444_800) {
        let pattern = "{YYYY}-{MM}-{DD} {HH}:{mm}:{ss}";
        let value = Tempora::unix(seconds).utc_mode();
        let parsed = Tempora::utc_format(&value.format(pattern), pattern);
        prop_assert_eq!(parsed.unix_timestamp(), seconds);
    }

    #[test]
    fn add_then_sub_is_identity(millis in 0i64..4_102_444_800_000, amount in -10_000i64..10_000, unit_idx in 0usize..8) {
        let units = [
            Unit::Millisecond, Unit::Second, Unit::Minute, Unit::Hour,
            Unit::Day, Unit::Week, Unit::Month, Unit::Year,
        ];
        let unit = units[unit_idx];
        let value = Tempora::from_timestamp_millis(millis).add(amount, unit).sub(amount, unit);
        prop_assert_eq!(value.timestamp_millis(), millis);
    }

    #[test]
    fn diff_matches_what_was_added(minutes in 1i64..100_000) {
        let base = Tempora::from_timestamp_millis(ANCHOR_MS);
        let later = base.clone().add(minutes, Unit::Minute);
        prop_assert_eq!(base.diff(&later, Unit::Minute), minutes);
        prop_assert_eq!(later.diff(&base, Unit::Minute), minutes);
    }
}
