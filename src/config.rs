use std::{net::SocketAddr, time::Duration};

use embedded_graphics::prelude::Size;
use thiserror::Error;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_PORT: u16 = 6533;
pub const DEFAULT_I2C_BUS: &str = "/dev/i2c-1";
pub const DEFAULT_I2C_ADDRESS: u8 = 0x3C;
pub const DEFAULT_WIDTH: u32 = 128;
pub const DEFAULT_HEIGHT: u32 = 32;
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(5);
/// Largest width or height accepted for a panel.
pub const MAX_DIMENSION: u32 = 1024;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverKind {
    Ssd1306,
    Console,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind: SocketAddr,
    pub driver: DriverKind,
    pub i2c_bus: String,
    pub i2c_address: u8,
    pub width: u32,
    pub height: u32,
    pub period: Duration,
    pub version: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)),
            driver: DriverKind::Ssd1306,
            i2c_bus: DEFAULT_I2C_BUS.to_string(),
            i2c_address: DEFAULT_I2C_ADDRESS,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            period: DEFAULT_PERIOD,
            version: VERSION,
        }
    }
}

fn invalid(name: &'static str, value: &str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid {
        name,
        value: value.to_string(),
        reason,
    }
}

fn parse_address(value: &str) -> Option<u8> {
    match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16).ok(),
        None => value.parse().ok(),
    }
}

fn parse_dimension(name: &'static str, value: &str) -> Result<u32, ConfigError> {
    match value.parse::<u32>() {
        Ok(0) => Err(invalid(name, value, "must be greater than zero")),
        Ok(v) if v > MAX_DIMENSION => Err(invalid(name, value, "larger than 1024 pixels")),
        Ok(v) => Ok(v),
        Err(_) => Err(invalid(name, value, "not a number")),
    }
}

fn parse_positive(name: &'static str, value: &str) -> Result<u64, ConfigError> {
    match value.parse::<u64>() {
        Ok(0) => Err(invalid(name, value, "must be greater than zero")),
        Ok(v) => Ok(v),
        Err(_) => Err(invalid(name, value, "not a number")),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any `name -> value` source, unset names keep their
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("OLED_STATUS_BIND") {
            config.bind = value
                .parse()
                .map_err(|_| invalid("OLED_STATUS_BIND", &value, "expected host:port"))?;
        }

        if let Some(value) = lookup("OLED_STATUS_DRIVER") {
            config.driver = match value.to_lowercase().as_str() {
                "ssd1306" => DriverKind::Ssd1306,
                "console" => DriverKind::Console,
                _ => {
                    return Err(invalid(
                        "OLED_STATUS_DRIVER",
                        &value,
                        "expected ssd1306 or console",
                    ))
                }
            };
        }

        if let Some(value) = lookup("OLED_STATUS_I2C_BUS") {
            config.i2c_bus = value;
        }

        if let Some(value) = lookup("OLED_STATUS_I2C_ADDRESS") {
            config.i2c_address = parse_address(&value)
                .ok_or_else(|| invalid("OLED_STATUS_I2C_ADDRESS", &value, "expected a byte"))?;
        }

        if let Some(value) = lookup("OLED_STATUS_WIDTH") {
            config.width = parse_dimension("OLED_STATUS_WIDTH", &value)?;
        }

        if let Some(value) = lookup("OLED_STATUS_HEIGHT") {
            config.height = parse_dimension("OLED_STATUS_HEIGHT", &value)?;
        }

        if let Some(value) = lookup("OLED_STATUS_PERIOD_SECS") {
            let secs = parse_positive("OLED_STATUS_PERIOD_SECS", &value)?;
            config.period = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
