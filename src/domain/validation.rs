//! # Validation Engine
//!
//! Field maps, error collection and the two-phase validate cycle shared by
//! every entity.
//!
//! Entities are built from an [`Attributes`] map through their own
//! allow-list ([`Assignable::assign`]). Validation is run on demand with
//! [`Validateable::is_valid`], which clears previous errors, runs the
//! entity's normalization hook and then its rules.
//!
//! # Examples
//!
//! ```
//! use freightquote::domain::entities::Stop;
//! use freightquote::domain::validation::{Assignable, Attributes, Validateable};
//!
//! let mut stop = Stop::from_attributes(Attributes::new().with("zip_code", "4620")).unwrap();
//! assert!(!stop.is_valid());
//! assert_eq!(
//!     stop.errors().full_messages(),
//!     vec!["Zip code is not a 5 or 9 digit zip code".to_string()]
//! );
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// A loosely typed scalar supplied by the caller for an entity field.
///
/// Entities keep the raw value so that rules such as "must literally be
/// `true` or `false`" can reject input of the wrong kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text value.
    String(String),
    /// Integer value.
    Integer(i64),
    /// Floating point value.
    Float(f64),
    /// Boolean value.
    Boolean(bool),
    /// No value.
    #[default]
    Null,
}

impl FieldValue {
    /// Returns true for null, `false`, and empty or whitespace-only text.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null | Self::Boolean(false) => true,
            Self::String(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Returns true if the value is null.
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the text if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the flag if this is a boolean value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns true only for the literal boolean `true`.
    #[inline]
    #[must_use]
    pub fn is_true(&self) -> bool {
        matches!(self, Self::Boolean(true))
    }

    /// Returns true for integer and float values.
    #[inline]
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Lenient integer coercion.
    ///
    /// Floats are truncated, text contributes its leading integer (or zero),
    /// anything else is zero.
    #[must_use]
    pub fn to_integer(&self) -> i64 {
        match self {
            Self::Integer(i) => *i,
            Self::Float(f) => f.trunc() as i64,
            Self::String(s) => leading_number(s)
                .and_then(|(_, whole)| whole.parse::<i64>().ok())
                .unwrap_or(0),
            Self::Boolean(_) | Self::Null => 0,
        }
    }

    /// Lenient float coercion, following the same rules as [`to_integer`].
    ///
    /// [`to_integer`]: Self::to_integer
    #[must_use]
    pub fn to_float(&self) -> f64 {
        match self {
            Self::Integer(i) => *i as f64,
            Self::Float(f) => *f,
            Self::String(s) => leading_number(s)
                .and_then(|(number, _)| number.parse::<f64>().ok())
                .unwrap_or(0.0),
            Self::Boolean(_) | Self::Null => 0.0,
        }
    }

    /// Upper-cases a string value in place. Other kinds are left untouched.
    pub fn make_uppercase(&mut self) {
        if let Self::String(s) = self {
            *s = s.to_uppercase();
        }
    }
}

/// Splits the leading signed number of `text`, after any whitespace, into
/// the full number and its integer part.
fn leading_number(text: &str) -> Option<(&str, &str)> {
    static NUMBER_REGEX: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    let captures = NUMBER_REGEX
        .get_or_init(|| Regex::new(r"^\s*(([+-]?[0-9]+)(?:\.[0-9]+)?)"))
        .as_ref()
        .ok()?
        .captures(text)?;
    Some((captures.get(1)?.as_str(), captures.get(2)?.as_str()))
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{}", s),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{:.1}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Null => Ok(()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// An insertion-ordered map of field name to value.
///
/// Later inserts of an existing key replace its value in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Attributes {
    entries: IndexMap<String, FieldValue>,
}

impl Attributes {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field and returns the map, for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a field.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Removes a field, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.entries.shift_remove(key)
    }

    /// Returns a field's value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.get(key)
    }

    /// Returns true if the map has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns an iterator over the fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for Attributes {
    type Item = (String, FieldValue);
    type IntoIter = indexmap::map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}

/// Accumulated validation messages, keyed by field.
///
/// Keys keep their first-insertion order. The [`Errors::BASE`] key holds
/// messages about the whole object.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Errors {
    entries: IndexMap<String, Vec<String>>,
}

impl Errors {
    /// Key for whole-object messages.
    pub const BASE: &'static str = "base";

    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message for `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.entries
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Replaces every message for `field` with `message`.
    ///
    /// A field seen before keeps its original position.
    pub fn set(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.entries.insert(field.into(), vec![message.into()]);
    }

    /// Appends a whole-object message.
    pub fn add_to_base(&mut self, message: impl Into<String>) {
        self.add(Self::BASE, message);
    }

    /// Returns the first message for `field`, if any.
    #[must_use]
    pub fn on(&self, field: &str) -> Option<&str> {
        self.get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// Returns every message recorded for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.entries.get(field).map(Vec::as_slice)
    }

    /// Returns true if `field` has at least one message.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Returns the number of fields with messages.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no messages were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every message.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator over fields and their messages.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, messages)| (k.as_str(), messages.as_slice()))
    }

    /// Renders the first message of each field as `"<Field> <message>"`.
    ///
    /// Whole-object messages are rendered verbatim.
    #[must_use]
    pub fn full_messages(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter_map(|(field, messages)| {
                let message = messages.first()?;
                if field.as_str() == Self::BASE {
                    Some(message.clone())
                } else {
                    Some(format!("{} {}", humanize(field), message))
                }
            })
            .collect()
    }
}

/// Turns a field name into a label: `remit_to_zip_code` becomes `Remit to zip code`.
#[must_use]
pub fn humanize(field: &str) -> String {
    let field = field.strip_suffix("_id").unwrap_or(field);
    let spaced = field.replace('_', " ").to_lowercase();
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Construction from a field map through an explicit allow-list.
pub trait Assignable: Default {
    /// Entity name used in construction errors.
    const ENTITY: &'static str;

    /// Sets a single field.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownAttribute` if `attribute` is not one of
    /// the entity's fields.
    fn assign(&mut self, attribute: &str, value: FieldValue) -> DomainResult<()>;

    /// Builds the entity from `attributes`, stopping at the first unknown key.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownAttribute` for the first key outside the
    /// allow-list.
    fn from_attributes(attributes: Attributes) -> DomainResult<Self> {
        let mut entity = Self::default();
        for (key, value) in attributes {
            entity.assign(&key, value)?;
        }
        Ok(entity)
    }

    /// Error for an attribute outside the allow-list.
    #[must_use]
    fn unknown_attribute(attribute: &str) -> DomainError {
        DomainError::unknown_attribute(Self::ENTITY, attribute)
    }
}

/// On-demand validation with an error collection.
pub trait Validateable {
    /// Errors recorded by the last validation run.
    fn errors(&self) -> &Errors;

    /// Mutable access to the stored errors.
    fn errors_mut(&mut self) -> &mut Errors;

    /// Normalization run before the rules. Does nothing by default.
    fn before_validate(&mut self) {}

    /// The entity's rules. Messages go into `errors`.
    fn validate(&mut self, errors: &mut Errors);

    /// Clears previous errors, normalizes, runs the rules and reports
    /// whether no errors were recorded.
    fn is_valid(&mut self) -> bool {
        self.errors_mut().clear();
        self.before_validate();
        let mut errors = Errors::new();
        self.validate(&mut errors);
        let valid = errors.is_empty();
        *self.errors_mut() = errors;
        valid
    }
}
