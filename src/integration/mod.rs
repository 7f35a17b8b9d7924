use std::env;
use std::fmt::Display;
use std::fs::File;
use std::net::SocketAddr;
use std::str::FromStr;

use axum_server::tls_openssl::OpenSSLConfig;
use dotenv::dotenv;
use log::{LevelFilter, warn};
use simplelog::{ColorChoice, CombinedLogger, SharedLogger, TermLogger, TerminalMode, WriteLogger};

pub mod smtp;

type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid environment: {0}")]
    InvalidEnv(String),
    #[error("{0} must be set")]
    MissingVar(&'static str),
    #[error("invalid {0} value: {1}")]
    InvalidVar(&'static str, String),
    #[error("invalid TLS material: {0}")]
    InvalidTls(String),

    #[error(transparent)]
    _Io(#[from] std::io::Error),
    #[error(transparent)]
    _Logger(#[from] log::SetLoggerError),
    #[error(transparent)]
    _Smtp(#[from] lettre::transport::smtp::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Env {
    Local,
    Dev,
    Stage,
    Production,
}

impl FromStr for Env {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "local" => Ok(Self::Local),
            "dev" => Ok(Self::Dev),
            "stg" => Ok(Self::Stage),
            "prod" => Ok(Self::Production),
            _ => Err(Error::InvalidEnv(s.to_owned())),
        }
    }
}

impl Env {
    pub fn ssl_config(&self) -> Result<Option<OpenSSLConfig>> {
        match self {
            Self::Local | Self::Dev | Self::Stage => Ok(None),
            Self::Production => {
                let cert = required_var("SSL_CERT_FILE")?;
                let key = required_var("SSL_KEY_FILE")?;
                load_pem(&cert, &key).map(Some)
            }
        }
    }
}

fn load_pem(cert: &str, key: &str) -> Result<OpenSSLConfig> {
    OpenSSLConfig::from_pem_file(cert, key)
        .map_err(|e| Error::InvalidTls(format!("{cert}, {key}: {e}")))
}

#[derive(Clone)]
pub struct Config {
    pub env: Env,
    pub port: u16,
    pub max_in_flight: usize,
    /// Absent only in a local environment without credentials.
    pub smtp: Option<smtp::Config>,
}

impl Config {
    /// Expects `.env` to be loaded already, see [`load_dotenv`].
    pub fn env() -> Result<Self> {
        let env = var_or("ENV", Env::Local)?;
        let port = var_or("PORT", 8080)?;
        let max_in_flight = var_or("MAX_IN_FLIGHT", 4)?;

        let smtp = smtp_or_console(&env, smtp::Config::env())?;

        Ok(Self {
            env,
            port,
            max_in_flight,
            smtp,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// `None` selects the console notifier, which is allowed only locally.
fn smtp_or_console(env: &Env, smtp: Result<smtp::Config>) -> Result<Option<smtp::Config>> {
    match smtp {
        Ok(cfg) => Ok(Some(cfg)),
        Err(Error::MissingVar(var)) if *env == Env::Local => {
            warn!("{var} is not set, emails will be logged instead of sent");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

pub fn load_dotenv() {
    dotenv().ok();
}

/// Logs to the terminal and to `<SERVICE_NAME>.log`. If the log file cannot be
/// created the service keeps logging to the terminal only.
pub fn init_logger() -> Result<()> {
    let rust_log = env::var("RUST_LOG").unwrap_or("info".into());
    let level = LevelFilter::from_str(&rust_log).unwrap_or(LevelFilter::Info);
    let log_file = env::var("SERVICE_NAME")
        .map(|name| format!("{name}.log"))
        .unwrap_or("kringle_service.log".into());

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    let file_error = match File::create(&log_file) {
        Ok(file) => {
            loggers.push(WriteLogger::new(level, simplelog::Config::default(), file));
            None
        }
        Err(e) => Some(e),
    };

    CombinedLogger::init(loggers)?;

    if let Some(e) = file_error {
        warn!("could not create log file {log_file}: {e}");
    }

    Ok(())
}

fn required_var(key: &'static str) -> Result<String> {
    env::var(key).map_err(|_| Error::MissingVar(key))
}

fn var_or<T>(key: &'static str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(value) => parse_var(key, &value),
        Err(_) => Ok(default),
    }
}

fn parse_var<T>(key: &'static str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .parse()
        .map_err(|e| Error::InvalidVar(key, format!("{value} ({e})")))
}
