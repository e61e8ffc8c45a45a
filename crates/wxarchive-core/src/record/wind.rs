//! Wind direction lookup: station code to 16-point compass abbreviation.

/// Compass rose in rotational order, starting north, one step per 22.5°.
pub const WIND_DIRECTIONS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Sentinel the station sends (code 255) when no direction was recorded.
pub const NO_DATA: &str = "DASH";

/// Map a raw wind direction code to its compass abbreviation.
///
/// Codes outside 0..=15 (255 included) yield [`NO_DATA`]; tolerating
/// out-of-range codes keeps a noisy sensor from failing the whole
/// record.
pub fn wind_direction(code: i64) -> &'static str {
    match code {
        0..=15 => WIND_DIRECTIONS[code as usize],
        _ => NO_DATA,
    }
}

#[cfg(test)]
mod tests {
    use super::{NO_DATA, WIND_DIRECTIONS, wind_direction};

    #[test]
    fn cardinal_points_sit_on_quarter_turns() {
        assert_eq!(wind_direction(0), "N");
        assert_eq!(wind_direction(4), "E");
        assert_eq!(wind_direction(8), "S");
        assert_eq!(wind_direction(12), "W");
    }

    #[test]
    fn all_sixteen_points_in_order() {
        for (code, expected) in WIND_DIRECTIONS.iter().enumerate() {
            assert_eq!(wind_direction(code as i64), *expected);
        }
    }

    #[test]
    fn no_data_sentinel() {
        assert_eq!(wind_direction(255), NO_DATA);
    }

    #[test]
    fn out_of_range_codes_fall_back() {
        assert_eq!(wind_direction(16), NO_DATA);
        assert_eq!(wind_direction(-1), NO_DATA);
        assert_eq!(wind_direction(1000), NO_DATA);
    }
}
