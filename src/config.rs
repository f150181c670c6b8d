//! Runtime configuration: defaults plus environment overrides.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use thiserror::Error;

use crate::data::loader::DataSource;

/// Public launch dataset the dashboard was built around.
pub const DEFAULT_DATA_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBM-DS0321EN-SkillsNetwork/datasets/spacex_launch_dash.csv";

/// Local port the dashboard server binds by default.
pub const DEFAULT_PORT: u16 = 8050;

pub const DEFAULT_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, DEFAULT_PORT));

/// Overrides the data source (URL or file path).
pub const ENV_DATA: &str = "LAUNCH_DASH_DATA";
/// Overrides the server bind address.
pub const ENV_ADDR: &str = "LAUNCH_DASH_ADDR";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var}={value} is not a socket address")]
    InvalidAddr {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Bounds and granularity of the payload range slider, in kilograms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10_000.0,
            step: 1_000.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub source: DataSource,
    pub addr: SocketAddr,
    pub slider: SliderConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source: DataSource::Url(DEFAULT_DATA_URL.to_string()),
            addr: DEFAULT_ADDR,
            slider: SliderConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Defaults, overridden by `LAUNCH_DASH_DATA` / `LAUNCH_DASH_ADDR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(location) = lookup(ENV_DATA).filter(|s| !s.trim().is_empty()) {
            config.source = DataSource::parse(location.trim());
        }
        if let Some(value) = lookup(ENV_ADDR).filter(|s| !s.trim().is_empty()) {
            config.addr = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidAddr {
                    var: ENV_ADDR,
                    value: value.clone(),
                    source,
                })?;
        }

        log::debug!("Configuration: {config:?}");
        Ok(config)
    }
}
