use serde::{Deserialize, Serialize};

use crate::provider::FetchError;

/// A city lookup submitted by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub city: String,
}

impl WeatherQuery {
    /// Returns `None` for a missing or blank city.
    pub fn from_form(city: Option<&str>) -> Option<Self> {
        match city {
            Some(city) if !city.is_empty() => Some(Self { city: city.to_string() }),
            _ => None,
        }
    }
}

/// Current-weather document as returned by OpenWeather (`units=metric`).
///
/// Only the fields the page needs are declared; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawWeatherReading {
    pub name: String,
    pub sys: RawSys,
    pub main: RawMain,
    pub weather: Vec<RawCondition>,
    pub wind: RawWind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSys {
    pub country: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMain {
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCondition {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawWind {
    /// Meters per second.
    pub speed: f64,
}

/// Flattened record handed to the page template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherDisplay {
    pub city: String,
    pub country: String,
    pub temperature: i32,
    pub description: String,
    pub icon: String,
    pub temp_min: i32,
    pub temp_max: i32,
    pub humidity: u8,
    /// Kilometers per hour, one decimal place.
    pub wind_speed: f64,
}

impl TryFrom<RawWeatherReading> for WeatherDisplay {
    type Error = FetchError;

    fn try_from(reading: RawWeatherReading) -> Result<Self, Self::Error> {
        let condition = reading
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::Payload("response contained no weather conditions".into()))?;

        Ok(Self {
            city: reading.name,
            country: reading.sys.country,
            temperature: truncate_celsius(reading.main.temp),
            description: title_case(&condition.description),
            icon: condition.icon,
            temp_min: truncate_celsius(reading.main.temp_min),
            temp_max: truncate_celsius(reading.main.temp_max),
            humidity: reading.main.humidity,
            wind_speed: mps_to_kmh(reading.wind.speed),
        })
    }
}

/// Drops the fractional part, rounding toward zero.
pub fn truncate_celsius(value: f64) -> i32 {
    value.trunc() as i32
}

/// Converts m/s to km/h and rounds to one decimal place.
pub fn mps_to_kmh(speed: f64) -> f64 {
    (speed * 3.6 * 10.0).round() / 10.0
}

/// Upper-cases the first letter of every word and lower-cases the rest.
///
/// A "word" starts at any letter that follows a non-letter, so
/// `"light rain"` becomes `"Light Rain"` and `"o'clock"` becomes `"O'Clock"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn london_json() -> &'static str {
        r#"{
            "coord": {"lon": -0.1257, "lat": 51.5085},
            "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
            "main": {"temp": 15.7, "feels_like": 15.0, "temp_min": 14.0, "temp_max": 18.9, "pressure": 1012, "humidity": 60},
            "wind": {"speed": 5.0, "deg": 240},
            "sys": {"country": "GB", "sunrise": 1700000000, "sunset": 1700030000},
            "name": "London",
            "cod": 200
        }"#
    }

    #[test]
    fn london_reading_is_shaped_for_display() {
        let reading: RawWeatherReading =
            serde_json::from_str(london_json()).expect("fixture must decode");

        let display = WeatherDisplay::try_from(reading).expect("reading is complete");

        assert_eq!(
            display,
            WeatherDisplay {
                city: "London".into(),
                country: "GB".into(),
                temperature: 15,
                description: "Clear Sky".into(),
                icon: "01d".into(),
                temp_min: 14,
                temp_max: 18,
                humidity: 60,
                wind_speed: 18.0,
            }
        );
    }

    #[test]
    fn empty_weather_list_is_a_payload_error() {
        let json = r#"{
            "weather": [],
            "main": {"temp": 1.0, "temp_min": 0.0, "temp_max": 2.0, "humidity": 90},
            "wind": {"speed": 1.0},
            "sys": {"country": "NO"},
            "name": "Oslo"
        }"#;
        let reading: RawWeatherReading = serde_json::from_str(json).expect("fixture must decode");

        let err = WeatherDisplay::try_from(reading).unwrap_err();
        assert!(matches!(err, FetchError::Payload(_)));
    }

    #[test]
    fn missing_nested_field_fails_to_decode() {
        let json = r#"{
            "weather": [{"description": "mist", "icon": "50n"}],
            "main": {"temp": 1.0, "temp_min": 0.0, "temp_max": 2.0, "humidity": 90},
            "wind": {"speed": 1.0},
            "sys": {},
            "name": "Oslo"
        }"#;

        let err = serde_json::from_str::<RawWeatherReading>(json).unwrap_err();
        assert!(err.to_string().contains("country"));
    }

    #[test]
    fn temperatures_truncate_toward_zero() {
        assert_eq!(truncate_celsius(15.7), 15);
        assert_eq!(truncate_celsius(18.9), 18);
        assert_eq!(truncate_celsius(0.4), 0);
        assert_eq!(truncate_celsius(-0.6), 0);
        assert_eq!(truncate_celsius(-3.7), -3);
    }

    #[test]
    fn wind_speed_converts_and_rounds() {
        assert_eq!(mps_to_kmh(5.0), 18.0);
        assert_eq!(mps_to_kmh(0.0), 0.0);
        assert_eq!(mps_to_kmh(3.09), 11.1);
        assert_eq!(mps_to_kmh(4.12), 14.8);
        assert_eq!(mps_to_kmh(10.3), 37.1);
    }

    #[test]
    fn descriptions_are_title_cased() {
        assert_eq!(title_case("light rain"), "Light Rain");
        assert_eq!(title_case("clear sky"), "Clear Sky");
        assert_eq!(title_case("overcast clouds"), "Overcast Clouds");
        assert_eq!(title_case("THUNDERSTORM with heavy RAIN"), "Thunderstorm With Heavy Rain");
        assert_eq!(title_case("light intensity shower-rain"), "Light Intensity Shower-Rain");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn query_requires_non_empty_city() {
        assert_eq!(WeatherQuery::from_form(None), None);
        assert_eq!(WeatherQuery::from_form(Some("")), None);
        assert_eq!(
            WeatherQuery::from_form(Some("Paris")),
            Some(WeatherQuery { city: "Paris".into() })
        );
    }
}
