// Weather snapshot domain model
use super::reading::Reading;

/// The measurements shown in the weather panel, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherField {
    Temperature,
    Humidity,
    DewPoint,
    Pressure,
    CloudCover,
    WindSpeed,
    SoilTemperature,
}

impl WeatherField {
    pub const ALL: [Self; 7] = [
        Self::Temperature,
        Self::Humidity,
        Self::DewPoint,
        Self::Pressure,
        Self::CloudCover,
        Self::WindSpeed,
        Self::SoilTemperature,
    ];

    /// Key used by the backend payload, reused as the tile id.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Temperature => "temperature_2m",
            Self::Humidity => "relative_humidity_2m",
            Self::DewPoint => "dew_point_2m",
            Self::Pressure => "pressure_msl",
            Self::CloudCover => "cloud_cover",
            Self::WindSpeed => "wind_speed_10m",
            Self::SoilTemperature => "soil_temperature_0cm",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Humidity => "Humidity",
            Self::DewPoint => "Dew Point",
            Self::Pressure => "Pressure",
            Self::CloudCover => "Cloud Cover",
            Self::WindSpeed => "Wind Speed",
            Self::SoilTemperature => "Soil Temperature",
        }
    }

    pub const fn unit(self) -> &'static str {
        match self {
            Self::Temperature | Self::DewPoint | Self::SoilTemperature => "°C",
            Self::Humidity | Self::CloudCover => "%",
            Self::Pressure => "hPa",
            Self::WindSpeed => "km/h",
        }
    }
}

/// Latest weather measurements. Replaced as a whole on every fetch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeatherSnapshot {
    pub temperature: Reading,
    pub humidity: Reading,
    pub dew_point: Reading,
    pub pressure: Reading,
    pub cloud_cover: Reading,
    pub wind_speed: Reading,
    pub soil_temperature: Reading,
}

impl WeatherSnapshot {
    pub const fn get(&self, field: WeatherField) -> Reading {
        match field {
            WeatherField::Temperature => self.temperature,
            WeatherField::Humidity => self.humidity,
            WeatherField::DewPoint => self.dew_point,
            WeatherField::Pressure => self.pressure,
            WeatherField::CloudCover => self.cloud_cover,
            WeatherField::WindSpeed => self.wind_speed,
            WeatherField::SoilTemperature => self.soil_temperature,
        }
    }

    /// Readings paired with their field, in display order.
    pub fn fields(&self) -> impl Iterator<Item = (WeatherField, Reading)> + '_ {
        WeatherField::ALL.into_iter().map(|field| (field, self.get(field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_follow_display_order() {
        let snapshot = WeatherSnapshot {
            temperature: Reading::new(31.5),
            cloud_cover: Reading::new(40.0),
            ..Default::default()
        };

        let fields: Vec<_> = snapshot.fields().collect();
        assert_eq!(fields.len(), 7);
        assert_eq!(fields[0], (WeatherField::Temperature, Reading::new(31.5)));
        assert_eq!(fields[4], (WeatherField::CloudCover, Reading::new(40.0)));
        assert!(!fields[6].1.is_available());
    }
}
