use crate::{DecodedRecord, FieldSelection};

use super::error::DecodeError;
use super::layout::{self, FieldKind};
use super::reader::RecordReader;
use super::transform;

/// Decode a 52-byte archive record into the full ordered field mapping.
pub fn decode_record(buf: &[u8]) -> Result<DecodedRecord, DecodeError> {
    decode_record_selected(buf, &FieldSelection::all())
}

/// Decode a 52-byte archive record, keeping only the selected fields.
///
/// Output insertion order is the canonical field order minus the
/// selection's exclusions. Any length or transform error yields no
/// partial output.
pub fn decode_record_selected(
    buf: &[u8],
    selection: &FieldSelection,
) -> Result<DecodedRecord, DecodeError> {
    let raw = read_raw_fields(buf)?;
    let mut fields = Vec::with_capacity(selection.len());
    for (name, value) in raw {
        if !selection.contains(name) {
            continue;
        }
        let transform =
            transform::transform_for(name).ok_or(DecodeError::MissingTransform { name })?;
        fields.push((name, transform.apply(value)));
    }
    Ok(DecodedRecord::from_fields(fields))
}

/// Layout pass: one raw little-endian scalar per logical field, in
/// descriptor order. Padding is consumed but produces no value.
fn read_raw_fields(buf: &[u8]) -> Result<Vec<(&'static str, i64)>, DecodeError> {
    let mut reader = RecordReader::new(buf);
    reader.require_exact_len(layout::RECORD_LEN)?;

    let mut raw = Vec::with_capacity(layout::FIELD_ORDER.len());
    for spec in layout::ARCHIVE_FIELDS {
        let value = match spec.kind {
            FieldKind::U16 => i64::from(reader.take_u16_le()?),
            FieldKind::I16 => i64::from(reader.take_i16_le()?),
            FieldKind::U8 => i64::from(reader.take_u8()?),
            FieldKind::Pad => {
                reader.skip(spec.kind.width())?;
                continue;
            }
        };
        raw.push((spec.name, value));
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::{decode_record, decode_record_selected};
    use crate::record::layout::RECORD_LEN;
    use crate::{FieldSelection, Value};

    #[test]
    fn zeroed_record_decodes_every_field() {
        let buf = [0u8; RECORD_LEN];
        let decoded = decode_record(&buf).unwrap();
        assert_eq!(decoded.len(), 39);
        assert_eq!(decoded.get("date"), Some(&Value::Text("0/0/1900".into())));
        assert_eq!(decoded.get("time"), Some(&Value::Text("0:00".into())));
        assert_eq!(decoded.get("out_temp"), Some(&Value::Float(0.0)));
        assert_eq!(decoded.get("avg_wind"), Some(&Value::Int(0)));
    }

    #[test]
    fn signed_field_uses_twos_complement() {
        let mut buf = [0u8; RECORD_LEN];
        // out_temp occupies bytes 4..6; -105 tenths = -10.5 degrees
        buf[4..6].copy_from_slice(&(-105i16).to_le_bytes());
        let decoded = decode_record(&buf).unwrap();
        assert_eq!(decoded.get("out_temp"), Some(&Value::Float(-10.5)));
    }

    #[test]
    fn wind_and_forecast_fields_render_text() {
        let mut buf = [0u8; RECORD_LEN];
        buf[26] = 4; // hi_wind_dir
        buf[33] = 0; // forecast_rule
        let decoded = decode_record(&buf).unwrap();
        assert_eq!(decoded.get("hi_wind_dir"), Some(&Value::Text("E".into())));
        assert_eq!(
            decoded.get("forecast_rule"),
            Some(&Value::Text("Mostly clear and cooler.".into()))
        );
    }

    #[test]
    fn short_buffer_is_rejected() {
        let buf = [0u8; RECORD_LEN - 1];
        let err = decode_record(&buf).unwrap_err();
        assert!(err.to_string().contains("length mismatch"));
    }

    #[test]
    fn long_buffer_is_rejected() {
        let buf = [0u8; RECORD_LEN + 1];
        assert!(decode_record(&buf).is_err());
    }

    #[test]
    fn exclusion_removes_field_and_keeps_the_rest() {
        let mut buf = [0u8; RECORD_LEN];
        buf[26] = 4;
        let selection = FieldSelection::excluding(["barometer"]).unwrap();
        let decoded = decode_record_selected(&buf, &selection).unwrap();
        assert_eq!(decoded.len(), 38);
        assert_eq!(decoded.get("barometer"), None);
        assert_eq!(decoded.get("hi_wind_dir"), Some(&Value::Text("E".into())));
    }

    #[test]
    fn decoding_is_deterministic() {
        let mut buf = [0u8; RECORD_LEN];
        for (index, byte) in buf.iter_mut().enumerate() {
            *byte = index as u8;
        }
        let first = decode_record(&buf).unwrap();
        let second = decode_record(&buf).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
