//! wxarchive core library: weather-station archive record decoding.
//!
//! This crate decodes the fixed-layout 52-byte archive record a
//! weather station emits into an ordered mapping of named,
//! physical-unit fields. The decoder is a data-definition layer: a
//! byte-layout descriptor, a per-field transform table, and static
//! lookup tables for wind direction and forecast text. Decoding is
//! byte-oriented and side-effect free; all I/O belongs to callers.
//!
//! Invariants:
//! - Descriptor widths sum to exactly 52 bytes, matching the wire.
//! - Every descriptor field has exactly one registered transform.
//! - Decoded output order equals the canonical field order minus any
//!   exclusions; decoding the same buffer twice yields identical
//!   output.
//!
//! # Examples
//! ```
//! use wxarchive_core::{RECORD_LEN, Value, decode_record};
//!
//! let buf = [0u8; RECORD_LEN];
//! let record = decode_record(&buf)?;
//! assert_eq!(record.get("time"), Some(&Value::Text("0:00".to_string())));
//! assert_eq!(record.get("hi_wind_dir"), Some(&Value::Text("N".to_string())));
//! # Ok::<(), wxarchive_core::DecodeError>(())
//! ```

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

pub mod record;

pub use record::error::DecodeError;
pub use record::layout::{FIELD_ORDER, RECORD_LEN};
pub use record::parser::{decode_record, decode_record_selected};

/// One decoded field value: a converted scalar or a display string.
///
/// Serializes as the bare value (no tag), so a decoded record becomes
/// a flat JSON object.
///
/// # Examples
/// ```
/// use wxarchive_core::Value;
///
/// let json = serde_json::to_string(&Value::Float(73.5)).unwrap();
/// assert_eq!(json, "73.5");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Text(value) => write!(f, "{value}"),
        }
    }
}

/// Ordered mapping from field name to decoded value.
///
/// Iteration and serialization preserve insertion order, which equals
/// the canonical field order minus any exclusions.
///
/// # Examples
/// ```
/// use wxarchive_core::{RECORD_LEN, decode_record};
///
/// let record = decode_record(&[0u8; RECORD_LEN])?;
/// let first = record.iter().next().map(|(name, _)| name);
/// assert_eq!(first, Some("date"));
/// # Ok::<(), wxarchive_core::DecodeError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedRecord {
    fields: Vec<(&'static str, Value)>,
}

impl DecodedRecord {
    pub(crate) fn from_fields(fields: Vec<(&'static str, Value)>) -> Self {
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.fields.iter().map(|(name, value)| (*name, value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for DecodedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Which fields a decode call keeps, in canonical order.
///
/// Built once at configuration time; unknown names are rejected here,
/// never per-record.
///
/// # Examples
/// ```
/// use wxarchive_core::FieldSelection;
///
/// let selection = FieldSelection::excluding(["leaf_wet1", "leaf_wet2"])?;
/// assert!(!selection.contains("leaf_wet1"));
/// assert!(selection.contains("date"));
/// # Ok::<(), wxarchive_core::DecodeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FieldSelection {
    included: Vec<&'static str>,
}

impl FieldSelection {
    /// Keep every field in the canonical order.
    pub fn all() -> Self {
        Self {
            included: FIELD_ORDER.to_vec(),
        }
    }

    /// Keep every field except the named ones.
    ///
    /// Fails with [`DecodeError::UnknownField`] if a name is not in
    /// the canonical field order.
    pub fn excluding<'a, I>(excluded: I) -> Result<Self, DecodeError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let excluded: Vec<&str> = excluded.into_iter().collect();
        for name in &excluded {
            if !FIELD_ORDER.iter().any(|field| field == name) {
                return Err(DecodeError::UnknownField {
                    name: (*name).to_string(),
                });
            }
        }
        Ok(Self {
            included: FIELD_ORDER
                .iter()
                .copied()
                .filter(|name| !excluded.iter().any(|field| field == name))
                .collect(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.included.iter().any(|field| *field == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.included.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.included.len()
    }

    pub fn is_empty(&self) -> bool {
        self.included.is_empty()
    }
}

impl Default for FieldSelection {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::{DecodedRecord, FieldSelection, Value};

    #[test]
    fn record_serializes_as_ordered_map() {
        let record = DecodedRecord::from_fields(vec![
            ("time", Value::Text("13:45".to_string())),
            ("out_temp", Value::Float(73.5)),
            ("avg_wind", Value::Int(3)),
        ]);
        let json = serde_json::to_string(&record).expect("record json");
        assert_eq!(json, r#"{"time":"13:45","out_temp":73.5,"avg_wind":3}"#);
    }

    #[test]
    fn selection_rejects_unknown_name() {
        let err = FieldSelection::excluding(["wind_chill"]).unwrap_err();
        assert!(err.to_string().contains("unknown field name"));
    }

    #[test]
    fn selection_preserves_canonical_order() {
        let selection = FieldSelection::excluding(["date"]).unwrap();
        let names: Vec<_> = selection.names().collect();
        assert_eq!(names.first(), Some(&"time"));
        assert_eq!(names.len(), 38);
    }

    #[test]
    fn value_display_matches_json_scalars() {
        assert_eq!(Value::Float(73.5).to_string(), "73.5");
        assert_eq!(Value::Int(-105).to_string(), "-105");
        assert_eq!(Value::Text("E".to_string()).to_string(), "E");
    }
}
