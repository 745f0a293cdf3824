//! Environment configuration for the ticket office driver.

use museo_core::{DomainError, DomainResult, Price};
use museo_observability::LogFormat;

pub const ENV_TICKET_PRICE: &str = "MUSEO_TICKET_PRICE";
pub const ENV_TICKETS_TO_SELL: &str = "MUSEO_TICKETS_TO_SELL";
pub const ENV_VISITOR_NAME: &str = "MUSEO_VISITOR_NAME";
pub const ENV_VISITOR_ID: &str = "MUSEO_VISITOR_ID";
pub const ENV_OUTPUT: &str = "MUSEO_OUTPUT";
pub const ENV_LOG_FORMAT: &str = "MUSEO_LOG_FORMAT";

/// How the day's reports are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub ticket_price: Price,
    pub tickets_to_sell: u32,
    pub visitor_name: String,
    pub visitor_id: Option<String>,
    pub output: OutputFormat,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, falling back to defaults for
    /// unset keys. Set but malformed values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let ticket_price = match lookup(ENV_TICKET_PRICE) {
            Some(raw) => {
                let amount: f64 = raw.trim().parse().map_err(|e| {
                    DomainError::configuration(format!("{ENV_TICKET_PRICE}={raw:?}: {e}"))
                })?;
                Price::new(amount).map_err(|e| {
                    DomainError::configuration(format!("{ENV_TICKET_PRICE}: {e}"))
                })?
            }
            None => Price::new(15.0)?,
        };

        let tickets_to_sell = match lookup(ENV_TICKETS_TO_SELL) {
            Some(raw) => raw.trim().parse::<u32>().map_err(|e| {
                DomainError::configuration(format!("{ENV_TICKETS_TO_SELL}={raw:?}: {e}"))
            })?,
            None => 3,
        };

        let visitor_name = lookup(ENV_VISITOR_NAME).unwrap_or_else(|| "Ana".to_string());
        let visitor_id = lookup(ENV_VISITOR_ID);

        let output = match lookup(ENV_OUTPUT).as_deref().map(str::trim) {
            None | Some("text") => OutputFormat::Text,
            Some("json") => OutputFormat::Json,
            Some(other) => {
                return Err(DomainError::configuration(format!(
                    "{ENV_OUTPUT}={other:?}: expected \"text\" or \"json\""
                )));
            }
        };

        let log_format = match lookup(ENV_LOG_FORMAT) {
            Some(raw) => LogFormat::parse(&raw).ok_or_else(|| {
                DomainError::configuration(format!(
                    "{ENV_LOG_FORMAT}={raw:?}: expected \"json\" or \"compact\""
                ))
            })?,
            None => LogFormat::default(),
        };

        Ok(Self {
            ticket_price,
            tickets_to_sell,
            visitor_name,
            visitor_id,
            output,
            log_format,
        })
    }
}
