//! Locale bundles and the locale registry.
//!
//! A [`Locale`] is pure configuration data: relative-time phrase templates,
//! a pluralization rule, calendar phrase templates, week-numbering parameters
//! and month/weekday name tables. Bundles are serde-serializable so they can
//! be shipped as JSON configuration and registered at runtime.
//!
//! Grammatical-case selection (e.g. Russian accusative month names after a
//! day-of-month token) is driven by a typed [`NameContext`] supplied by the
//! formatter, never by re-parsing the pattern string inside the locale.
//!
//! The [`LocaleRegistry`] is an explicit object with lookup-or-default
//! semantics: an unknown key always falls back to the built-in `en` bundle.
//! A process-wide default registry backs the convenience constructors, but
//! any call site can substitute its own registry for testing.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, LazyLock, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TemporaError};

mod en;
mod ru;

// ── Typed name-selection context ────────────────────────────────────────────

/// The phrase family a template belongs to. Some locales render weekday
/// names in a different grammatical case inside "last/next week" phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhraseCategory {
    #[default]
    Neutral,
    NextWeek,
    LastWeek,
}

/// Context handed to name lookups so a locale can pick a grammatical form
/// without inspecting the raw pattern string.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameContext {
    /// The name token is immediately preceded by a day-of-month token
    /// (`{D} {MMMM}` and friends). Russian renders the month in accusative.
    pub after_day_of_month: bool,
    /// Which phrase family the surrounding template belongs to.
    pub phrase: PhraseCategory,
}

// ── Pluralization ───────────────────────────────────────────────────────────

/// Maps a cardinal number to a choice-group index inside `[a|b|c]` groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pluralizer {
    /// Two forms: n == 1 picks the first, everything else the second.
    OneOther,
    /// Slavic three-way rule: ends in 1 but not 11 → 0; ends in 2-4 but
    /// not 12-14 → 1; everything else → 2.
    Slavic,
}

impl Pluralizer {
    pub fn index(self, n: i64) -> usize {
        let n = n.abs();
        match self {
            Pluralizer::OneOther => {
                if n == 1 {
                    0
                } else {
                    1
                }
            }
            Pluralizer::Slavic => {
                if n % 10 == 1 && n % 100 != 11 {
                    0
                } else if (2..=4).contains(&(n % 10)) && !(10..20).contains(&(n % 100)) {
                    1
                } else {
                    2
                }
            }
        }
    }
}

// ── Relative-time phrases ───────────────────────────────────────────────────

/// Phrase templates for the relative-time humanizer.
///
/// Templates may contain `{prefix}`, `{suffix}` and `{diff}` placeholders,
/// `[singular|plural|other]` choice groups, and ordinary format tokens
/// (the rendered phrase is run through the formatter).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelativeTime {
    pub prefix_ago: Option<String>,
    pub prefix_from_now: Option<String>,
    pub suffix_ago: Option<String>,
    pub suffix_from_now: Option<String>,
    pub seconds: String,
    pub minute: String,
    pub minutes: String,
    pub hour: String,
    pub hours: String,
    pub day: String,
    pub days: String,
    pub month: String,
    pub months: String,
    pub year: String,
    pub years: String,
    /// Long-form fallback pattern when the difference exceeds `max_diff`
    /// and both instants share a year.
    pub format_same_year: String,
    /// Long-form fallback pattern when the two instants differ in year.
    pub format_other_year: String,
}

// ── Calendar phrases ────────────────────────────────────────────────────────

/// One calendar phrase: either a fixed template or one template per weekday
/// (Sunday-indexed), for locales where grammar varies with the day name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CalendarEntry {
    Fixed(String),
    ByWeekday(Vec<String>),
}

impl CalendarEntry {
    /// Template for a Sunday-based weekday index.
    pub fn template(&self, weekday: usize) -> &str {
        match self {
            CalendarEntry::Fixed(t) => t,
            CalendarEntry::ByWeekday(list) => list.get(weekday % 7).map_or("", |s| s.as_str()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calendar {
    pub same_day: CalendarEntry,
    pub next_day: CalendarEntry,
    pub next_week: CalendarEntry,
    pub last_day: CalendarEntry,
    pub last_week: CalendarEntry,
    pub same_else: CalendarEntry,
}

// ── Week numbering ──────────────────────────────────────────────────────────

/// Week-numbering parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeekSpec {
    /// First day of the week, Sunday-based: 0 = Sunday (US), 1 = Monday.
    pub week_start: u32,
    /// Which weekday of week 1 anchors the year. 4 = first Thursday rule.
    pub year_start: u32,
}

// ── Name tables ─────────────────────────────────────────────────────────────

/// Month names, January-first. `accusative` is optional; locales without
/// grammatical case just leave it out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthNames {
    pub nominative: Vec<String>,
    #[serde(default)]
    pub accusative: Option<Vec<String>>,
    pub brief: Vec<String>,
}

impl MonthNames {
    /// Name of zero-based month `month0` for the given context.
    pub fn name(&self, month0: usize, ctx: NameContext, brief: bool) -> &str {
        let table = if brief {
            &self.brief
        } else if ctx.after_day_of_month {
            self.accusative.as_ref().unwrap_or(&self.nominative)
        } else {
            &self.nominative
        };
        table.get(month0).map_or("", |s| s.as_str())
    }

    /// Resolve a month name captured from input back to a zero-based index.
    /// Matches any of the three tables case-insensitively; brief names also
    /// match as a prefix of the captured word.
    pub fn lookup(&self, word: &str) -> Option<usize> {
        let w = word.to_lowercase();
        let tables = [Some(&self.nominative), self.accusative.as_ref(), Some(&self.brief)];
        for table in tables.into_iter().flatten() {
            if let Some(idx) = table.iter().position(|n| n.to_lowercase() == w) {
                return Some(idx);
            }
        }
        self.brief
            .iter()
            .position(|n| !n.is_empty() && w.starts_with(&n.to_lowercase()))
    }
}

/// Weekday names in locale-relative order (index 0 = the locale's week
/// start day).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekdayNames {
    pub nominative: Vec<String>,
    #[serde(default)]
    pub accusative: Option<Vec<String>>,
    pub brief: Vec<String>,
}

impl WeekdayNames {
    /// Name of locale-relative weekday `day` for the given context.
    pub fn name(&self, day: usize, ctx: NameContext, brief: bool) -> &str {
        let accusative_phrase =
            matches!(ctx.phrase, PhraseCategory::NextWeek | PhraseCategory::LastWeek);
        let table = if brief {
            &self.brief
        } else if accusative_phrase {
            self.accusative.as_ref().unwrap_or(&self.nominative)
        } else {
            &self.nominative
        };
        table.get(day % 7).map_or("", |s| s.as_str())
    }
}

// ── The bundle ──────────────────────────────────────────────────────────────

/// A named bundle of text templates and naming tables for a language/region.
/// Immutable once registered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Locale {
    pub relative: RelativeTime,
    pub pluralizer: Pluralizer,
    pub calendar: Calendar,
    pub week: WeekSpec,
    pub months: MonthNames,
    pub weekdays: WeekdayNames,
    /// Named format shortcuts (`LT`, `L`, `LL`, ...) expanded before
    /// pattern compilation.
    #[serde(default)]
    pub formats: BTreeMap<String, String>,
}

impl Locale {
    /// Built-in English bundle.
    pub fn english() -> Locale {
        en::locale()
    }

    /// Built-in Russian bundle.
    pub fn russian() -> Locale {
        ru::locale()
    }

    /// Deserialize a locale bundle from JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TemporaError::Locale`] when the JSON does not describe a
    /// complete bundle.
    pub fn from_json(json: &str) -> Result<Locale> {
        serde_json::from_str(json).map_err(|e| TemporaError::Locale(e.to_string()))
    }
}

// ── Registry ────────────────────────────────────────────────────────────────

/// Maps locale keys to immutable bundles, with lookup-or-default semantics.
///
/// Registration and default-key switches take a write lock; lookups take a
/// read lock, so concurrent readers are safe.
pub struct LocaleRegistry {
    locales: RwLock<HashMap<String, Arc<Locale>>>,
    default_key: RwLock<String>,
}

impl LocaleRegistry {
    /// An empty registry. Lookups still fall back to the built-in `en`.
    pub fn new() -> LocaleRegistry {
        LocaleRegistry {
            locales: RwLock::new(HashMap::new()),
            default_key: RwLock::new("en".to_string()),
        }
    }

    /// A registry pre-populated with the built-in `en` and `ru` bundles.
    pub fn with_builtins() -> LocaleRegistry {
        let registry = LocaleRegistry::new();
        registry.register("en", Locale::english());
        registry.register("ru", Locale::russian());
        registry
    }

    /// Register a bundle under `key`. Re-registering a key swaps the bundle
    /// for subsequent lookups; values already holding the old `Arc` keep it.
    pub fn register(&self, key: &str, locale: Locale) {
        if let Ok(mut map) = self.locales.write() {
            map.insert(key.to_string(), Arc::new(locale));
        }
    }

    /// Look up `key`, falling back to `en`, then to the built-in English
    /// bundle. Never fails.
    pub fn get(&self, key: &str) -> Arc<Locale> {
        if let Ok(map) = self.locales.read() {
            if let Some(locale) = map.get(key) {
                return Arc::clone(locale);
            }
            if let Some(locale) = map.get("en") {
                return Arc::clone(locale);
            }
        }
        Arc::new(Locale::english())
    }

    /// True when `key` has a registered bundle.
    pub fn contains(&self, key: &str) -> bool {
        self.locales.read().map(|m| m.contains_key(key)).unwrap_or(false)
    }

    /// Switch the default key used by newly constructed values. Unregistered
    /// keys are ignored, leaving the default unchanged.
    pub fn set_default(&self, key: &str) {
        if self.contains(key) {
            if let Ok(mut default) = self.default_key.write() {
                key.clone_into(&mut default);
            }
        }
    }

    /// The current default locale key.
    pub fn default_key(&self) -> String {
        self.default_key
            .read()
            .map(|k| k.clone())
            .unwrap_or_else(|_| "en".to_string())
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        LocaleRegistry::with_builtins()
    }
}

static GLOBAL: LazyLock<LocaleRegistry> = LazyLock::new(LocaleRegistry::with_builtins);

/// The process-wide default registry backing the convenience constructors.
pub fn global_registry() -> &'static LocaleRegistry {
    &GLOBAL
}

/// Register a locale bundle in the process-wide registry.
pub fn register_locale(key: &str, locale: Locale) {
    global_registry().register(key, locale);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_falls_back_to_english() {
        let registry = LocaleRegistry::with_builtins();
        let fallback = registry.get("tlh");
        assert_eq!(fallback.relative.seconds, Locale::english().relative.seconds);
    }

    #[test]
    fn set_default_ignores_unregistered_keys() {
        let registry = LocaleRegistry::with_builtins();
        registry.set_default("ru");
        assert_eq!(registry.default_key(), "ru");
        registry.set_default("tlh");
        assert_eq!(registry.default_key(), "ru");
    }

    #[test]
    fn slavic_pluralizer_buckets() {
        let p = Pluralizer::Slavic;
        assert_eq!(p.index(1), 0);
        assert_eq!(p.index(21), 0);
        assert_eq!(p.index(2), 1);
        assert_eq!(p.index(25), 2);
        assert_eq!(p.index(5), 2);
        assert_eq!(p.index(11), 2);
    }

    #[test]
    fn one_other_pluralizer() {
        assert_eq!(Pluralizer::OneOther.index(1), 0);
        assert_eq!(Pluralizer::OneOther.index(0), 1);
        assert_eq!(Pluralizer::OneOther.index(7), 1);
    }

    #[test]
    fn month_lookup_matches_full_and_brief_forms() {
        let months = Locale::english().months;
        assert_eq!(months.lookup("January"), Some(0));
        assert_eq!(months.lookup("dec"), Some(11));
        assert_eq!(months.lookup("Sep"), Some(8));
        assert_eq!(months.lookup("notamonth"), None);
    }

    #[test]
    fn russian_month_case_follows_context() {
        let months = Locale::russian().months;
        let after_day = NameContext {
            after_day_of_month: true,
            ..Default::default()
        };
        assert_eq!(months.name(0, NameContext::default(), false), "январь");
        assert_eq!(months.name(0, after_day, false), "января");
    }

    #[test]
    fn locale_bundle_round_trips_through_json() {
        let json = serde_json::to_string(&Locale::russian()).unwrap();
        let back = Locale::from_json(&json).unwrap();
        assert_eq!(back.pluralizer, Pluralizer::Slavic);
        assert_eq!(back.week.week_start, 1);
        assert_eq!(back.months.name(4, NameContext::default(), true), "май");
    }
}
