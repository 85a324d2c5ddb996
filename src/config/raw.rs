use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("wandery.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub viewport: Option<Viewport>,
    pub validation: Option<Validation>,
    pub sample_data: Option<SampleData>,
    pub new_list: Option<NewList>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Viewport {
    pub fallback_lat: f64,
    pub fallback_lng: f64,
    pub list_span: f64,
    pub place_span: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Config::default().viewport.expect("Viewport configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Validation {
    pub enabled: bool,
}

impl Default for Validation {
    fn default() -> Self {
        Config::default()
            .validation
            .expect("Validation configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SampleData {
    pub enabled: bool,
}

impl Default for SampleData {
    fn default() -> Self {
        Config::default()
            .sample_data
            .expect("Sample data configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NewList {
    pub icon: String,
    pub color: String,
}

impl Default for NewList {
    fn default() -> Self {
        Config::default().new_list.expect("New list configuration")
    }
}
