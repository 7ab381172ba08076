use clap::{Parser, ValueEnum};
use portal_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::IpAddr;
use std::time::Duration;

pub const PORT_ENV: &str = "PORTAL_GATEWAY_PORT";
pub const HOST_ENV: &str = "PORTAL_GATEWAY_HOST";
pub const REQUEST_TIMEOUT_ENV: &str = "PORTAL_GATEWAY_REQUEST_TIMEOUT_SECS";
pub const LOG_FORMAT_ENV: &str = "PORTAL_LOG_FORMAT";
pub const LOG_LEVEL_ENV: &str = "PORTAL_LOG_LEVEL";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "json")]
    Json,
    #[value(name = "text")]
    Text,
}

impl Display for LogFormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormatArg::Json => write!(f, "json"),
            LogFormatArg::Text => write!(f, "text"),
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Json => LogFormat::Json,
            LogFormatArg::Text => LogFormat::Text,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "portal-gateway", about = "HTTP gateway of the portal URL shortener")]
pub struct CLI {
    /// TCP port to listen on (1-65535).
    #[arg(
        short,
        long,
        env = PORT_ENV,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub port: u16,

    #[arg(long, env = HOST_ENV, default_value = DEFAULT_HOST)]
    pub host: IpAddr,

    /// Seconds a request may run before it is answered with 408.
    #[arg(
        long,
        env = REQUEST_TIMEOUT_ENV,
        default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub request_timeout_secs: u64,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Json
    )]
    pub log_format: LogFormatArg,

    /// Log filter directive, e.g. `info` or `portal_gateway=debug,info`.
    #[arg(long, env = LOG_LEVEL_ENV, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl CLI {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
