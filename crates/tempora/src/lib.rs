//! # tempora
//!
//! Lightweight date/time values with a chainable API.
//!
//! Tempora wraps an epoch-millisecond instant in a small value type with
//! token-pattern parsing and formatting, fixed-factor calendar arithmetic,
//! locale-aware relative-time phrasing ("5 minutes ago", "через час"),
//! and calendar-relative naming ("Today at 14:30"). Locales ship for
//! English and Russian and new ones can be registered at runtime, from
//! code or from JSON bundles.
//!
//! ```
//! use tempora::{Tempora, Unit};
//!
//! let released = Tempora::utc("1991-08-25T20:57:08+00:00");
//! assert_eq!(released.format("{D} {MMMM} {YYYY}"), "25 August 1991");
//! assert_eq!(released.clone().add(1, Unit::Week).date(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`date`] — the [`Tempora`] value: construction, field access, arithmetic
//! - [`pattern`] — token patterns (`{YYYY}-{MM}-{DD}`) and the compiled-format cache
//! - [`locale`] — locale bundles, pluralizers, and the process-wide registry
//! - [`unit`] — time units and their name aliases
//! - [`error`] — error types

pub mod date;
pub mod error;
pub mod locale;
pub mod pattern;
pub mod unit;

mod humanize;
mod parse;
mod render;

pub use date::{DiffBreakdown, DiffUnits, Tempora, DEFAULT_FORMAT};
pub use error::{Result, TemporaError};
pub use locale::{
    global_registry, register_locale, Locale, LocaleRegistry, PhraseCategory, Pluralizer,
};
pub use pattern::{compile, CompiledFormat};
pub use unit::Unit;
