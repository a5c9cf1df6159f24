use serde::Deserialize;

use crate::application::dashboard_service::DashboardFeatures;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: BackendSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout. Unset leaves the HTTP client's default in place.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_enabled")]
    pub prediction: bool,
    #[serde(default = "default_enabled")]
    pub latest_discharge: bool,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_title() -> String {
    "Flood Monitoring in Phra Nakhon Si Ayutthaya".to_string()
}

const fn default_enabled() -> bool {
    true
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            prediction: default_enabled(),
            latest_discharge: default_enabled(),
        }
    }
}

impl DashboardSettings {
    pub const fn features(&self) -> DashboardFeatures {
        DashboardFeatures {
            prediction: self.prediction,
            latest_discharge: self.latest_discharge,
        }
    }
}

/// Load `config/dashboard.*` (optional) overlaid by `DASHBOARD__SECTION__KEY` variables.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(env_overlay())
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// `DASHBOARD__BACKEND__BASE_URL` maps to `backend.base_url`.
fn env_overlay() -> config::Environment {
    config::Environment::with_prefix("DASHBOARD")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
