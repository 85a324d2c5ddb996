use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path};
use wandery_core::{
    entities::{Color, ColorToken, MapPoint, MapSpan},
    util::validate,
    viewport::ViewportPolicy,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "wandery.toml";

const ENV_NAME_VALIDATION: &str = "WANDERY_VALIDATION";

pub struct Config {
    pub viewport: ViewportPolicy,
    pub validation: validate::Validation,
    pub sample_data: SampleData,
    pub new_list: NewList,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::debug!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(enabled) = env::var(ENV_NAME_VALIDATION) {
            cfg.validation = parse_flag(&enabled).into();
        }
        Ok(cfg)
    }
}

fn parse_flag(s: &str) -> bool {
    matches!(s.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}

pub struct SampleData {
    pub enabled: bool,
}

/// Defaults of newly created lists.
pub struct NewList {
    pub icon: String,
    pub color: Color,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            viewport,
            validation,
            sample_data,
            new_list,
        } = from;

        let raw::Viewport {
            fallback_lat,
            fallback_lng,
            list_span,
            place_span,
        } = viewport.unwrap_or_default();
        let fallback_center = MapPoint::try_from_lat_lng_deg(fallback_lat, fallback_lng)
            .ok_or_else(|| anyhow!("Invalid fallback coordinate {fallback_lat},{fallback_lng}"))?;
        if list_span <= 0.0 || place_span <= 0.0 {
            return Err(anyhow!("Viewport spans must be positive"));
        }
        let viewport = ViewportPolicy {
            fallback_center,
            list_span: MapSpan::square(list_span),
            place_span: MapSpan::square(place_span),
        };

        let raw::Validation { enabled } = validation.unwrap_or_default();
        let validation = enabled.into();

        let raw::SampleData { enabled } = sample_data.unwrap_or_default();
        let sample_data = SampleData { enabled };

        let raw::NewList { icon, color } = new_list.unwrap_or_default();
        let color = color
            .parse::<ColorToken>()
            .map_err(|_| anyhow!("Unknown color '{color}'"))?
            .into();
        let new_list = NewList { icon, color };

        Ok(Self {
            viewport,
            validation,
            sample_data,
            new_list,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wandery_core::viewport::{DEFAULT_FALLBACK_CENTER, DEFAULT_LIST_SPAN, DEFAULT_PLACE_SPAN};

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let _: Config = Config::try_load_from_file_or_default(file).unwrap();
    }

    #[test]
    fn default_config_values() {
        let cfg = Config::try_from(raw::Config::default()).unwrap();
        assert_eq!(DEFAULT_FALLBACK_CENTER, cfg.viewport.fallback_center);
        assert_eq!(MapSpan::square(DEFAULT_LIST_SPAN), cfg.viewport.list_span);
        assert_eq!(MapSpan::square(DEFAULT_PLACE_SPAN), cfg.viewport.place_span);
        assert_eq!(validate::Validation::Disabled, cfg.validation);
        assert!(cfg.sample_data.enabled);
        assert_eq!("mappin.ellipse", cfg.new_list.icon);
        assert_eq!(Color::Token(ColorToken::Indigo), cfg.new_list.color);
    }

    #[test]
    fn reject_unknown_color() {
        let raw: raw::Config = toml::from_str(
            r#"
            [new-list]
            icon = "star"
            color = "purple"
            "#,
        )
        .unwrap();
        assert!(Config::try_from(raw).is_err());
    }

    #[test]
    fn validation_from_env() {
        let file: Option<&Path> = None;
        env::set_var(ENV_NAME_VALIDATION, "yes");
        let cfg = Config::try_load_from_file_or_default(file);
        env::remove_var(ENV_NAME_VALIDATION);
        assert_eq!(validate::Validation::Enabled, cfg.unwrap().validation);
    }

    #[test]
    fn parse_flags() {
        assert!(parse_flag("true"));
        assert!(parse_flag("YES"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("off"));
    }
}
