use wxarchive_core::{
    FIELD_ORDER, FieldSelection, RECORD_LEN, Value, decode_record, decode_record_selected,
};

/// A plausible summer-afternoon archive record, built field by field.
fn sample_record() -> [u8; RECORD_LEN] {
    let mut buf = [0u8; RECORD_LEN];
    let date = (6u16 << 12) | (23 << 7) | 94; // 23/6/1994
    buf[0..2].copy_from_slice(&date.to_le_bytes());
    buf[2..4].copy_from_slice(&1345u16.to_le_bytes()); // 13:45
    buf[4..6].copy_from_slice(&735i16.to_le_bytes()); // 73.5 degrees
    buf[6..8].copy_from_slice(&781i16.to_le_bytes());
    buf[8..10].copy_from_slice(&702i16.to_le_bytes());
    buf[10..12].copy_from_slice(&12u16.to_le_bytes()); // 0.12 in
    buf[12..14].copy_from_slice(&36u16.to_le_bytes());
    buf[14..16].copy_from_slice(&29921u16.to_le_bytes()); // 29.921 inHg
    buf[18..20].copy_from_slice(&294u16.to_le_bytes()); // wind samples
    buf[20..22].copy_from_slice(&688i16.to_le_bytes()); // inside temp
    buf[22] = 62; // in_humidity
    buf[23] = 48; // out_humidity
    buf[24] = 3; // avg_wind
    buf[25] = 9; // hi_wind
    buf[26] = 4; // hi_wind_dir: E
    buf[27] = 6; // prevailing_dir: SE
    buf[33] = 45; // forecast_rule
    buf
}

#[test]
fn full_decode_covers_every_ordered_field() {
    let decoded = decode_record(&sample_record()).expect("decode");
    let names: Vec<&str> = decoded.iter().map(|(name, _)| name).collect();
    assert_eq!(names, FIELD_ORDER);
}

#[test]
fn decoded_values_carry_physical_units() {
    let decoded = decode_record(&sample_record()).expect("decode");
    assert_eq!(decoded.get("date"), Some(&Value::Text("23/6/1994".into())));
    assert_eq!(decoded.get("time"), Some(&Value::Text("13:45".into())));
    assert_eq!(decoded.get("out_temp"), Some(&Value::Float(73.5)));
    assert_eq!(decoded.get("rainfall"), Some(&Value::Float(0.12)));
    assert_eq!(decoded.get("barometer"), Some(&Value::Float(29.921)));
    assert_eq!(decoded.get("num_wind_samples"), Some(&Value::Int(294)));
    assert_eq!(decoded.get("hi_wind_dir"), Some(&Value::Text("E".into())));
    assert_eq!(decoded.get("prevailing_dir"), Some(&Value::Text("SE".into())));
    assert_eq!(
        decoded.get("forecast_rule"),
        Some(&Value::Text(
            "Increasing clouds with little temperature change.".into()
        ))
    );
}

#[test]
fn decode_is_idempotent_over_json() {
    let buf = sample_record();
    let first = serde_json::to_string(&decode_record(&buf).expect("decode")).expect("json");
    let second = serde_json::to_string(&decode_record(&buf).expect("decode")).expect("json");
    assert_eq!(first, second);
}

#[test]
fn exclusions_drop_fields_without_touching_others() {
    let buf = sample_record();
    let full = decode_record(&buf).expect("decode");
    let selection = FieldSelection::excluding(["solar_rad", "avg_UV", "ET"]).expect("selection");
    let trimmed = decode_record_selected(&buf, &selection).expect("decode");

    assert_eq!(trimmed.len(), FIELD_ORDER.len() - 3);
    assert_eq!(trimmed.get("solar_rad"), None);
    for (name, value) in trimmed.iter() {
        assert_eq!(full.get(name), Some(value), "field {name}");
    }
}

#[test]
fn wrong_length_yields_no_output() {
    for len in [0, 1, RECORD_LEN - 1, RECORD_LEN + 1, RECORD_LEN * 2] {
        let buf = vec![0u8; len];
        assert!(decode_record(&buf).is_err(), "length {len}");
    }
}
