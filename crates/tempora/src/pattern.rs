//! The pattern compiler: `{token}` placeholders → compiled segment lists.
//!
//! A pattern string such as `{YYYY}-{MM}-{DD}` compiles to an ordered list
//! of literal segments and recognized tokens. Each token carries a matching
//! sub-pattern for the parser and a semantic field; rendering lives in
//! [`crate::render`]. Compiled formats are immutable and cached process-wide
//! by the literal pattern text.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, RwLock};

use regex::Regex;

// ── Token vocabulary ────────────────────────────────────────────────────────

/// One recognized `{word}` placeholder.
///
/// The full vocabulary: `S SS SSS s ss m mm H HH h hh a A D DD DDD DDDD
/// M MM MMM MMMM w ww www wwww W WW WWW WWWW Y YY YYYY Z ZZ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `S` — tenths of a second.
    MillisShort,
    /// `SS` — hundredths of a second, zero-padded.
    MillisTwo,
    /// `SSS` — milliseconds, zero-padded to 3.
    Millis,
    /// `s` / `ss` — seconds.
    Second,
    SecondPad,
    /// `m` / `mm` — minutes.
    Minute,
    MinutePad,
    /// `H` / `HH` — 24-hour clock.
    Hour24,
    Hour24Pad,
    /// `h` / `hh` — 12-hour clock.
    Hour12,
    Hour12Pad,
    /// `a` / `A` — meridiem marker.
    MeridiemLower,
    MeridiemUpper,
    /// `D` / `DD` — day of month.
    DayOfMonth,
    DayOfMonthPad,
    /// `DDD` / `DDDD` — day of year.
    DayOfYear,
    DayOfYearPad,
    /// `M` / `MM` — month number (1-12 in text, 0-based internally).
    MonthNum,
    MonthNumPad,
    /// `MMM` / `MMMM` — month name, brief / full.
    MonthBrief,
    MonthFull,
    /// `w` / `ww` — locale-relative weekday number.
    WeekdayNum,
    WeekdayNumPad,
    /// `www` / `wwww` — weekday name, brief / full.
    WeekdayBrief,
    WeekdayFull,
    /// `W` / `WW` — week of year.
    Week,
    WeekPad,
    /// `WWW` / `WWWW` — week of year, absolute (floor) mode.
    WeekAbs,
    WeekAbsPad,
    /// `Y` / `YY` — two-digit year.
    YearTwo,
    YearTwoPad,
    /// `YYYY` — four-digit year.
    YearFull,
    /// `Z` — signed offset with colon (`+01:00`).
    OffsetColon,
    /// `ZZ` — signed offset without colon (`+0100`).
    Offset,
}

/// The semantic field a token maps to when parsing. Timezone tokens do not
/// set a date field: they produce a pending signed-minutes offset consumed
/// once, after all other fields. Derived tokens (weekday, week-of-year)
/// consume input but set nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Millisecond,
    Second,
    Minute,
    Hour,
    Meridiem,
    DayOfMonth,
    DayOfYear,
    MonthNum,
    MonthName,
    Year,
    Offset,
    Derived,
}

// Shared sub-pattern shapes. Matching is unanchored: the parser scans for
// the first occurrence in the unconsumed remainder.
static RE_D1: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").expect("static regex"));
static RE_D1_2: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{1,2}").expect("static regex"));
static RE_D1_3: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{1,3}").expect("static regex"));
static RE_D2: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{2}").expect("static regex"));
static RE_D3: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{3}").expect("static regex"));
static RE_D4: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}").expect("static regex"));
static RE_AMPM_LOWER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"am|pm").expect("static regex"));
static RE_AMPM_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"AM|PM").expect("static regex"));
static RE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]*['\p{L}]+").expect("static regex"));
static RE_OFFSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Z|[+-]\d\d(?::?\d\d)?").expect("static regex"));

impl Token {
    pub(crate) fn from_name(name: &str) -> Option<Token> {
        let token = match name {
            "S" => Token::MillisShort,
            "SS" => Token::MillisTwo,
            "SSS" => Token::Millis,
            "s" => Token::Second,
            "ss" => Token::SecondPad,
            "m" => Token::Minute,
            "mm" => Token::MinutePad,
            "H" => Token::Hour24,
            "HH" => Token::Hour24Pad,
            "h" => Token::Hour12,
            "hh" => Token::Hour12Pad,
            "a" => Token::MeridiemLower,
            "A" => Token::MeridiemUpper,
            "D" => Token::DayOfMonth,
            "DD" => Token::DayOfMonthPad,
            "DDD" => Token::DayOfYear,
            "DDDD" => Token::DayOfYearPad,
            "M" => Token::MonthNum,
            "MM" => Token::MonthNumPad,
            "MMM" => Token::MonthBrief,
            "MMMM" => Token::MonthFull,
            "w" => Token::WeekdayNum,
            "ww" => Token::WeekdayNumPad,
            "www" => Token::WeekdayBrief,
            "wwww" => Token::WeekdayFull,
            "W" => Token::Week,
            "WW" => Token::WeekPad,
            "WWW" => Token::WeekAbs,
            "WWWW" => Token::WeekAbsPad,
            "Y" => Token::YearTwo,
            "YY" => Token::YearTwoPad,
            "YYYY" => Token::YearFull,
            "Z" => Token::OffsetColon,
            "ZZ" => Token::Offset,
            _ => return None,
        };
        Some(token)
    }

    /// The textual shape this token may consume when parsing.
    pub(crate) fn sub_pattern(self) -> &'static Regex {
        match self {
            Token::MillisShort | Token::DayOfYear => &RE_D1_3,
            Token::MillisTwo
            | Token::SecondPad
            | Token::MinutePad
            | Token::Hour24Pad
            | Token::Hour12Pad
            | Token::DayOfMonthPad
            | Token::MonthNumPad
            | Token::WeekdayNumPad
            | Token::WeekPad
            | Token::WeekAbsPad
            | Token::YearTwo
            | Token::YearTwoPad => &RE_D2,
            Token::Millis | Token::DayOfYearPad => &RE_D3,
            Token::Second
            | Token::Minute
            | Token::Hour24
            | Token::Hour12
            | Token::DayOfMonth
            | Token::MonthNum
            | Token::Week
            | Token::WeekAbs => &RE_D1_2,
            Token::MeridiemLower => &RE_AMPM_LOWER,
            Token::MeridiemUpper => &RE_AMPM_UPPER,
            Token::MonthBrief | Token::MonthFull | Token::WeekdayBrief | Token::WeekdayFull => {
                &RE_WORD
            }
            Token::WeekdayNum => &RE_D1,
            Token::YearFull => &RE_D4,
            Token::OffsetColon | Token::Offset => &RE_OFFSET,
        }
    }

    pub(crate) fn field(self) -> Field {
        match self {
            Token::MillisShort | Token::MillisTwo | Token::Millis => Field::Millisecond,
            Token::Second | Token::SecondPad => Field::Second,
            Token::Minute | Token::MinutePad => Field::Minute,
            Token::Hour24 | Token::Hour24Pad | Token::Hour12 | Token::Hour12Pad => Field::Hour,
            Token::MeridiemLower | Token::MeridiemUpper => Field::Meridiem,
            Token::DayOfMonth | Token::DayOfMonthPad => Field::DayOfMonth,
            Token::DayOfYear | Token::DayOfYearPad => Field::DayOfYear,
            Token::MonthNum | Token::MonthNumPad => Field::MonthNum,
            Token::MonthBrief | Token::MonthFull => Field::MonthName,
            Token::YearTwo | Token::YearTwoPad | Token::YearFull => Field::Year,
            Token::OffsetColon | Token::Offset => Field::Offset,
            Token::WeekdayNum
            | Token::WeekdayNumPad
            | Token::WeekdayBrief
            | Token::WeekdayFull
            | Token::Week
            | Token::WeekPad
            | Token::WeekAbs
            | Token::WeekAbsPad => Field::Derived,
        }
    }

    /// True for `D`/`DD` — used to pick grammatical case for a following
    /// month name.
    pub(crate) fn is_day_of_month(self) -> bool {
        matches!(self, Token::DayOfMonth | Token::DayOfMonthPad)
    }
}

// ── Compiled formats ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Token(Token),
}

/// Pre-parsed representation of a pattern string. No mutable state; safe to
/// share across values and threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFormat {
    segments: Vec<Segment>,
}

impl CompiledFormat {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Tokens in order, skipping literals (the parse path).
    pub(crate) fn tokens(&self) -> impl Iterator<Item = Token> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Token(t) => Some(*t),
            Segment::Literal(_) => None,
        })
    }

    pub fn has_tokens(&self) -> bool {
        self.segments.iter().any(|s| matches!(s, Segment::Token(_)))
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)\}").expect("static regex"));

/// Compile a pattern string into literal/token segments.
///
/// One non-overlapping left-to-right scan; `{word}` placeholders that are
/// not in the token vocabulary stay literal text, passed through unchanged
/// by both the parser and the formatter.
pub fn compile(pattern: &str) -> CompiledFormat {
    let mut segments = Vec::new();
    let mut cursor = 0;
    for caps in PLACEHOLDER.captures_iter(pattern) {
        let whole = caps.get(0).expect("group 0 always present");
        let name = caps.get(1).expect("group 1 in pattern").as_str();
        match Token::from_name(name) {
            Some(token) => {
                if whole.start() > cursor {
                    segments.push(Segment::Literal(pattern[cursor..whole.start()].to_string()));
                }
                segments.push(Segment::Token(token));
                cursor = whole.end();
            }
            // Unrecognized placeholder: leave it (and the text before it)
            // for the trailing-literal push below.
            None => {}
        }
    }
    if cursor < pattern.len() {
        segments.push(Segment::Literal(pattern[cursor..].to_string()));
    }
    CompiledFormat { segments }
}

static CACHE: LazyLock<RwLock<HashMap<String, Arc<CompiledFormat>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Compile with a process-wide cache keyed by the literal pattern text.
///
/// Token-less patterns (humanized phrases, plain literals) bypass the cache
/// so it only ever holds genuine format strings.
pub fn compile_cached(pattern: &str) -> Arc<CompiledFormat> {
    if !pattern.contains('{') {
        return Arc::new(compile(pattern));
    }
    if let Ok(cache) = CACHE.read() {
        if let Some(compiled) = cache.get(pattern) {
            return Arc::clone(compiled);
        }
    }
    let compiled = Arc::new(compile(pattern));
    if let Ok(mut cache) = CACHE.write() {
        // A racing writer may have beaten us; keep the first entry so
        // repeated callers observe one shared Arc.
        return Arc::clone(
            cache
                .entry(pattern.to_string())
                .or_insert_with(|| Arc::clone(&compiled)),
        );
    }
    compiled
}
