//! Per-field value transforms: raw scalar in, physical/display value out.

use crate::Value;

use super::forecast;
use super::wind;

/// Decode rule applied to one field's raw scalar.
///
/// One transform per field, registered in [`transform_for`]; there is
/// no fallback dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Raw tenths: divide by 10 (e.g. tenths of a degree to degrees).
    DivTen,
    /// Raw hundredths: divide by 100 (e.g. rain clicks to inches).
    DivHundred,
    /// Raw thousandths: divide by 1000 (e.g. barometer to inches Hg).
    DivThousand,
    /// Packed calendar date, rendered `"day/month/year"`.
    Date,
    /// Packed clock time, rendered `"hour:minute"`.
    Time,
    /// Wind direction code, rendered as a compass abbreviation.
    WindDir,
    /// Forecast rule code, rendered as canned forecast text.
    Forecast,
    /// Identity: the raw scalar, unchanged.
    Raw,
}

impl Transform {
    pub fn apply(self, raw: i64) -> Value {
        match self {
            Transform::DivTen => Value::Float(raw as f64 / 10.0),
            Transform::DivHundred => Value::Float(raw as f64 / 100.0),
            Transform::DivThousand => Value::Float(raw as f64 / 1000.0),
            Transform::Date => Value::Text(decompress_date(raw)),
            Transform::Time => Value::Text(decompress_time(raw)),
            Transform::WindDir => Value::Text(wind::wind_direction(raw).to_string()),
            Transform::Forecast => Value::Text(forecast::forecast_text(raw).to_string()),
            Transform::Raw => Value::Int(raw),
        }
    }
}

/// The Transform Table: field name to decode rule.
///
/// Fields mapped to [`Transform::Raw`] either need no unit conversion
/// (wind speeds are already in whole units) or belong to sensors this
/// station family does not populate.
pub fn transform_for(name: &str) -> Option<Transform> {
    let transform = match name {
        "date" => Transform::Date,
        "time" => Transform::Time,
        "out_temp" => Transform::DivTen,
        "hi_out_temp" => Transform::DivTen,
        "low_out_temp" => Transform::DivTen,
        "rainfall" => Transform::DivHundred,
        "hi_rain_rate" => Transform::DivHundred,
        "barometer" => Transform::DivThousand,
        "solar_rad" => Transform::Raw,
        "num_wind_samples" => Transform::Raw,
        "inside_temp" => Transform::DivTen,
        "in_humidity" => Transform::DivHundred,
        "out_humidity" => Transform::DivHundred,
        "avg_wind" => Transform::Raw,
        "hi_wind" => Transform::Raw,
        "hi_wind_dir" => Transform::WindDir,
        "prevailing_dir" => Transform::WindDir,
        "avg_UV" => Transform::Raw,
        "ET" => Transform::Raw,
        "high_solar_rad" => Transform::Raw,
        "high_UV" => Transform::Raw,
        "forecast_rule" => Transform::Forecast,
        "leaf_temp1" => Transform::Raw,
        "leaf_temp2" => Transform::Raw,
        "leaf_wet1" => Transform::Raw,
        "leaf_wet2" => Transform::Raw,
        "soil_temp1" => Transform::Raw,
        "soil_temp2" => Transform::Raw,
        "soil_temp3" => Transform::Raw,
        "soil_temp4" => Transform::Raw,
        "extra_hum1" => Transform::Raw,
        "extra_hum2" => Transform::Raw,
        "extra_temp1" => Transform::Raw,
        "extra_temp2" => Transform::Raw,
        "extra_temp3" => Transform::Raw,
        "soil_moist1" => Transform::Raw,
        "soil_moist2" => Transform::Raw,
        "soil_moist3" => Transform::Raw,
        "soil_moist4" => Transform::Raw,
        _ => return None,
    };
    Some(transform)
}

/// Unpack the station's 16-bit date stamp into `"day/month/year"`.
///
/// Bit allocation, high to low: month (4 bits), day (5 bits), year
/// offset from 1900 (7 bits). The packing is a fixed wire-format
/// detail of the station firmware.
fn decompress_date(raw: i64) -> String {
    let raw = raw as u16;
    let month = (raw >> 12) & 0x0f;
    let day = (raw >> 7) & 0x1f;
    let year = 1900 + u32::from(raw & 0x7f);
    format!("{day}/{month}/{year}")
}

/// Unpack the station's time stamp (`hour * 100 + minute`) into
/// `"hour:minute"`, minute zero-padded.
fn decompress_time(raw: i64) -> String {
    let hour = raw / 100;
    let minute = raw % 100;
    format!("{hour}:{minute:02}")
}
