//! Byte layout of the 52-byte archive record (source of truth).
//!
//! Multi-byte values are stored least significant byte first, per the
//! station vendor's serial documentation.

/// Exact size of one archive record on the wire.
pub const RECORD_LEN: usize = 52;

/// Primitive storage type of one descriptor entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Unsigned 16-bit, little-endian.
    U16,
    /// Signed 16-bit, little-endian, two's complement.
    I16,
    /// Unsigned 8-bit.
    U8,
    /// Padding byte: consumed, never decoded.
    Pad,
}

impl FieldKind {
    pub const fn width(self) -> usize {
        match self {
            FieldKind::U16 | FieldKind::I16 => 2,
            FieldKind::U8 | FieldKind::Pad => 1,
        }
    }
}

/// One entry of the Field Descriptor: a named slot in the wire layout.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, kind }
}

const fn pad() -> FieldSpec {
    FieldSpec {
        name: "",
        kind: FieldKind::Pad,
    }
}

/// The full descriptor, in wire order. Widths sum to [`RECORD_LEN`].
pub const ARCHIVE_FIELDS: [FieldSpec; 40] = [
    field("date", FieldKind::U16),
    field("time", FieldKind::U16),
    field("out_temp", FieldKind::I16),
    field("hi_out_temp", FieldKind::I16),
    field("low_out_temp", FieldKind::I16),
    field("rainfall", FieldKind::U16),
    field("hi_rain_rate", FieldKind::U16),
    field("barometer", FieldKind::U16),
    field("solar_rad", FieldKind::U16),
    field("num_wind_samples", FieldKind::U16),
    field("inside_temp", FieldKind::I16),
    field("in_humidity", FieldKind::U8),
    field("out_humidity", FieldKind::U8),
    field("avg_wind", FieldKind::U8),
    field("hi_wind", FieldKind::U8),
    field("hi_wind_dir", FieldKind::U8),
    field("prevailing_dir", FieldKind::U8),
    field("avg_UV", FieldKind::U8),
    field("ET", FieldKind::U8),
    field("high_solar_rad", FieldKind::U16),
    field("high_UV", FieldKind::U8),
    field("forecast_rule", FieldKind::U8),
    field("leaf_temp1", FieldKind::U8),
    field("leaf_temp2", FieldKind::U8),
    field("leaf_wet1", FieldKind::U8),
    field("leaf_wet2", FieldKind::U8),
    field("soil_temp1", FieldKind::U8),
    field("soil_temp2", FieldKind::U8),
    field("soil_temp3", FieldKind::U8),
    field("soil_temp4", FieldKind::U8),
    pad(),
    field("extra_hum1", FieldKind::U8),
    field("extra_hum2", FieldKind::U8),
    field("extra_temp1", FieldKind::U8),
    field("extra_temp2", FieldKind::U8),
    field("extra_temp3", FieldKind::U8),
    field("soil_moist1", FieldKind::U8),
    field("soil_moist2", FieldKind::U8),
    field("soil_moist3", FieldKind::U8),
    field("soil_moist4", FieldKind::U8),
];

/// Canonical presentation order of the decoded fields.
///
/// Downstream consumers rely on this order for fixed-column output;
/// it matches the descriptor's wire order exactly.
pub const FIELD_ORDER: [&str; 39] = [
    "date",
    "time",
    "out_temp",
    "hi_out_temp",
    "low_out_temp",
    "rainfall",
    "hi_rain_rate",
    "barometer",
    "solar_rad",
    "num_wind_samples",
    "inside_temp",
    "in_humidity",
    "out_humidity",
    "avg_wind",
    "hi_wind",
    "hi_wind_dir",
    "prevailing_dir",
    "avg_UV",
    "ET",
    "high_solar_rad",
    "high_UV",
    "forecast_rule",
    "leaf_temp1",
    "leaf_temp2",
    "leaf_wet1",
    "leaf_wet2",
    "soil_temp1",
    "soil_temp2",
    "soil_temp3",
    "soil_temp4",
    "extra_hum1",
    "extra_hum2",
    "extra_temp1",
    "extra_temp2",
    "extra_temp3",
    "soil_moist1",
    "soil_moist2",
    "soil_moist3",
    "soil_moist4",
];

#[cfg(test)]
mod tests {
    use super::{ARCHIVE_FIELDS, FIELD_ORDER, FieldKind, RECORD_LEN};

    #[test]
    fn descriptor_widths_sum_to_record_len() {
        let total: usize = ARCHIVE_FIELDS.iter().map(|f| f.kind.width()).sum();
        assert_eq!(total, RECORD_LEN);
    }

    #[test]
    fn descriptor_names_match_field_order() {
        let named: Vec<&str> = ARCHIVE_FIELDS
            .iter()
            .filter(|f| f.kind != FieldKind::Pad)
            .map(|f| f.name)
            .collect();
        assert_eq!(named, FIELD_ORDER);
    }

    #[test]
    fn padding_entries_are_unnamed() {
        for spec in ARCHIVE_FIELDS {
            assert_eq!(spec.kind == FieldKind::Pad, spec.name.is_empty());
        }
    }
}
