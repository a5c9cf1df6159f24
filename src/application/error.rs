// Acquisition error types
use std::fmt;
use thiserror::Error;

/// Backend endpoints the dashboard reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    LatestWeather,
    DischargeSeries,
    Prediction,
}

impl Endpoint {
    pub const fn path(self) -> &'static str {
        match self {
            Self::LatestWeather => "/api/weather/latest",
            Self::DischargeSeries => "/api/river_discharge_7day",
            Self::Prediction => "/api/predict",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Why a single backend request failed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS, timeout or body read failure
    #[error("{endpoint}: transport failure: {message}")]
    Transport { endpoint: Endpoint, message: String },

    /// Backend answered with a non-2xx status
    #[error("{endpoint}: backend responded with status {status}")]
    Status { endpoint: Endpoint, status: u16 },

    /// Body was not the expected JSON shape
    #[error("{endpoint}: could not decode response: {message}")]
    Decode { endpoint: Endpoint, message: String },
}

impl FetchError {
    pub const fn endpoint(&self) -> Endpoint {
        match self {
            Self::Transport { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Decode { endpoint, .. } => *endpoint,
        }
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport",
            Self::Status { .. } => "status",
            Self::Decode { .. } => "decode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_endpoint() {
        let err = FetchError::Status {
            endpoint: Endpoint::Prediction,
            status: 503,
        };
        assert_eq!(err.to_string(), "/api/predict: backend responded with status 503");
        assert_eq!(err.kind(), "status");
        assert_eq!(err.endpoint(), Endpoint::Prediction);
    }
}
