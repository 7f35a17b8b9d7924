use std::env;
use std::time::Duration;

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;

use crate::notify::smtp::Transport;

use super::{Error, Result, required_var, var_or};

const DEFAULT_FROM: &str = "Kris Kringle <kringle@srg.id.au>";

#[derive(Clone)]
pub struct Config {
    host: String,
    port: u16,
    timeout: Duration,
    user: String,
    password: String,
    from: Mailbox,
}

impl Config {
    pub fn env() -> Result<Self> {
        let host = env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".into());
        let port = var_or("SMTP_PORT", 587)?;
        let timeout = Duration::from_secs(var_or("SMTP_TIMEOUT_SECS", 10)?);
        let user = required_var("EMAIL_USER")?;
        let password = required_var("EMAIL_PASSWORD")?;

        let from = env::var("EMAIL_FROM").unwrap_or_else(|_| DEFAULT_FROM.into());
        let from = from
            .parse::<Mailbox>()
            .map_err(|e| Error::InvalidVar("EMAIL_FROM", format!("{from} ({e})")))?;

        Ok(Self {
            host,
            port,
            timeout,
            user,
            password,
            from,
        })
    }

    pub const fn sender(&self) -> &Mailbox {
        &self.from
    }
}

/// Builds a pooled STARTTLS transport. No connection is opened until the first send.
pub fn init(config: &Config) -> Result<Transport> {
    let transport = Transport::starttls_relay(&config.host)?
        .port(config.port)
        .timeout(Some(config.timeout))
        .credentials(Credentials::new(
            config.user.to_owned(),
            config.password.to_owned(),
        ))
        .build();

    Ok(transport)
}

#[cfg(test)]
mod test {
    use super::*;

    fn config() -> Config {
        Config {
            host: "smtp.example.com".into(),
            port: 587,
            timeout: Duration::from_secs(10),
            user: "kringle".into(),
            password: "secret".into(),
            from: DEFAULT_FROM.parse().unwrap(),
        }
    }

    #[test]
    fn should_parse_default_sender() {
        let from = config().sender().clone();
        assert_eq!(from.email.to_string(), "kringle@srg.id.au");
        assert_eq!(from.name.as_deref(), Some("Kris Kringle"));
    }

    #[tokio::test]
    async fn should_init_transport_lazily() {
        assert!(init(&config()).is_ok());
    }
}
