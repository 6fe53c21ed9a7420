use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use crate::gateway::GatewayPublisherVia;

/// Numeric identifier of a catalog entry.
pub type BookId = u64;

// Identifiable defines common traits that can be shared by catalog records
pub trait Identifiable: Sync + Send {
    fn id(&self) -> BookId;
}

// RuntimeMode selects how the catalog binary receives HTTP requests
#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum RuntimeMode {
    Local,
    Lambda,
}

impl FromStr for RuntimeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(RuntimeMode::Local),
            "lambda" => Ok(RuntimeMode::Lambda),
            other => Err(format!("unknown runtime mode {}", other)),
        }
    }
}

impl Display for RuntimeMode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RuntimeMode::Local => write!(f, "local"),
            RuntimeMode::Lambda => write!(f, "lambda"),
        }
    }
}

// Configuration abstracts config options for the rental catalog
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct Configuration {
    pub branch_id: String,
    pub runtime: RuntimeMode,
    pub bind_address: String,
    pub seed_catalog: bool,
    pub publisher: GatewayPublisherVia,
    pub log_level: String,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            runtime: RuntimeMode::Local,
            bind_address: "0.0.0.0:8080".to_string(),
            seed_catalog: false,
            publisher: GatewayPublisherVia::Memory,
            log_level: "info".to_string(),
        }
    }

    // Builds the binary's configuration: sample catalog and log publisher unless
    // overridden by BOOKSTORE_* variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String> {
        let defaults = Configuration {
            seed_catalog: true,
            publisher: GatewayPublisherVia::Logs,
            ..Configuration::new("main")
        };
        Configuration {
            branch_id: lookup("BOOKSTORE_BRANCH").unwrap_or(defaults.branch_id),
            runtime: parse_or("BOOKSTORE_MODE", &lookup, defaults.runtime),
            bind_address: lookup("BOOKSTORE_BIND").unwrap_or(defaults.bind_address),
            seed_catalog: parse_or("BOOKSTORE_SEED", &lookup, defaults.seed_catalog),
            publisher: parse_or("BOOKSTORE_EVENTS", &lookup, defaults.publisher),
            log_level: lookup("BOOKSTORE_LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> T
    where T: FromStr, F: Fn(&str) -> Option<String> {
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(val) => val,
            Err(_) => {
                tracing::warn!(key, value = raw.as_str(), "ignoring unparseable configuration value");
                default
            }
        },
        None => default,
    }
}
