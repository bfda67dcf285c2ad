//! Name-to-object lookup tables.
//!
//! Registries are plain values passed to whoever needs them; there is no
//! process-wide instance. Entries keep insertion order, and the first
//! registration of a name wins.

use std::fmt;

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::calendars::CalendarKind;
use crate::daycounts::DayCountConvention;
use crate::error::{CoreError, CoreResult};

/// A registry of objects by name.
///
/// # Example
///
/// ```rust
/// use tenor_core::registry::ObjectRegistry;
///
/// let mut registry = ObjectRegistry::new("colour");
/// registry.register("red", 0xff0000);
/// registry.register("red", 0x000000);
/// assert_eq!(registry.from_name("red").copied().unwrap(), 0xff0000);
/// assert!(registry.from_name("blue").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ObjectRegistry<T> {
    kind: String,
    entries: Vec<(String, T)>,
}

impl<T> ObjectRegistry<T> {
    /// Creates an empty registry for objects of the given kind.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            entries: Vec::new(),
        }
    }

    /// What the registry holds, e.g. `"calendar"`.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Registers `object` under `name`.
    ///
    /// Returns false and leaves the registry untouched if the name is taken.
    pub fn register(&mut self, name: impl Into<String>, object: T) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.entries.push((name, object));
        true
    }

    /// Looks up `name`.
    pub fn from_name(&self, name: &str) -> CoreResult<&T> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, obj)| obj)
            .ok_or_else(|| CoreError::unknown_name(&self.kind, name))
    }

    /// True if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Registered names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, object)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(n, obj)| (n.as_str(), obj))
    }
}

impl<T: fmt::Display> ObjectRegistry<T> {
    /// Human-readable listing of valid names.
    #[must_use]
    pub fn help(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Name".to_string(), capitalize(&self.kind)]);
        for (name, obj) in &self.entries {
            builder.push_record([name.clone(), obj.to_string()]);
        }
        let table = builder.build().with(Style::psql()).to_string();
        format!("Valid names are:\n\n{table}")
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Calendars by market name.
#[must_use]
pub fn calendar_registry() -> ObjectRegistry<CalendarKind> {
    let mut registry = ObjectRegistry::new("calendar");
    registry.register("TARGET", CalendarKind::Target);
    registry.register("WeekendsOnly", CalendarKind::WeekendsOnly);
    registry.register("Null", CalendarKind::Null);
    registry
}

/// Day count conventions by their usual names.
#[must_use]
pub fn day_count_registry() -> ObjectRegistry<DayCountConvention> {
    let mut registry = ObjectRegistry::new("day count");
    registry.register("Actual360", DayCountConvention::Act360);
    registry.register("Actual365Fixed", DayCountConvention::Act365Fixed);
    registry.register("ActualActual", DayCountConvention::ActActIsda);
    registry.register("Thirty360", DayCountConvention::Thirty360US);
    registry.register("Thirty360E", DayCountConvention::Thirty360E);
    registry
}
