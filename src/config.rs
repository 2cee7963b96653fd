/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub num_elevators: usize,
    pub num_floors: u8,
    pub idle_time_sec: f64,
    pub elevator_speed_sec: f64,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DisplayConfig {
    #[serde(default)]
    pub format: DisplayFormat,
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    #[default]
    Diagram,
    Json,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path)?;
    Config::from_toml_str(&config_str)
}

impl Config {
    pub fn from_toml_str(config_str: &str) -> Result<Config, ConfigError> {
        let config: Config = toml::from_str(config_str)?;
        config.simulation.validate()?;
        Ok(config)
    }
}

impl SimulationConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.num_elevators == 0 {
            return Err(ConfigError::Invalid(
                "num_elevators must be at least 1".to_string(),
            ));
        }
        if self.num_floors < 2 {
            return Err(ConfigError::Invalid(
                "num_floors must be at least 2".to_string(),
            ));
        }
        for (name, value) in [
            ("idle_time_sec", self.idle_time_sec),
            ("elevator_speed_sec", self.elevator_speed_sec),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod config_tests {
    use super::*;

    const VALID: &str = r#"
        [simulation]
        num_elevators = 2
        num_floors = 10
        idle_time_sec = 2.0
        elevator_speed_sec = 0.5

        [display]
        format = "json"
    "#;

    #[test]
    fn test_config_parse_valid() {
        // Act
        let config = Config::from_toml_str(VALID).unwrap();

        // Assert
        assert_eq!(config.simulation.num_elevators, 2);
        assert_eq!(config.simulation.num_floors, 10);
        assert_eq!(config.simulation.idle_time_sec, 2.0);
        assert_eq!(config.simulation.elevator_speed_sec, 0.5);
        assert_eq!(config.display.format, DisplayFormat::Json);
    }

    #[test]
    fn test_config_display_defaults_to_diagram() {
        // Arrange
        let config_str = r#"
            [simulation]
            num_elevators = 1
            num_floors = 4
            idle_time_sec = 1
            elevator_speed_sec = 1
        "#;

        // Act
        let config = Config::from_toml_str(config_str).unwrap();

        // Assert
        assert_eq!(config.display.format, DisplayFormat::Diagram);
        assert_eq!(config.simulation.idle_time_sec, 1.0);
    }

    #[test]
    fn test_config_rejects_unknown_format() {
        let config_str = VALID.replace("\"json\"", "\"gui\"");
        assert!(matches!(
            Config::from_toml_str(&config_str),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_config_rejects_invalid_values() {
        let no_elevators = VALID.replace("num_elevators = 2", "num_elevators = 0");
        assert!(matches!(
            Config::from_toml_str(&no_elevators),
            Err(ConfigError::Invalid(_))
        ));

        let one_floor = VALID.replace("num_floors = 10", "num_floors = 1");
        assert!(matches!(
            Config::from_toml_str(&one_floor),
            Err(ConfigError::Invalid(_))
        ));

        let negative_delay = VALID.replace("idle_time_sec = 2.0", "idle_time_sec = -1.0");
        assert!(matches!(
            Config::from_toml_str(&negative_delay),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_config_missing_file() {
        let result = load_config("does/not/exist.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
