use crate::api::DEFAULT_BASE_URL;
use crate::session::DEFAULT_PAGE_SIZE;
use anyhow::{Context, Result, bail};
use clap::Parser;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_LOG_FILE: &str = "person-manager.log";

#[derive(Debug, Clone, Parser)]
#[command(
    name = "person-manager",
    version,
    about = "Browse, add and remove people stored behind a Persons REST API"
)]
pub struct Cli {
    /// Base address of the Persons API (overrides PERSONS_API_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Rows per page (overrides PERSONS_PAGE_SIZE)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// File receiving the log output (overrides PERSONS_LOG_FILE)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Trust self-signed TLS certificates
    #[arg(long)]
    pub accept_invalid_certs: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: String,
    pub page_size: usize,
    pub log_file: PathBuf,
    pub accept_invalid_certs: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = var("PERSONS_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let page_size = var("PERSONS_PAGE_SIZE")
            .unwrap_or_else(|| DEFAULT_PAGE_SIZE.to_string())
            .parse::<usize>()
            .context("PERSONS_PAGE_SIZE must be a positive integer")?;

        let log_file = var("PERSONS_LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        let accept_invalid_certs = match var("PERSONS_ACCEPT_INVALID_CERTS") {
            Some(raw) => parse_flag(&raw)
                .context("PERSONS_ACCEPT_INVALID_CERTS must be true/false or 1/0")?,
            None => false,
        };

        let config = Self {
            base_url,
            page_size,
            log_file,
            accept_invalid_certs,
        };
        config.validate()?;
        Ok(config)
    }

    /// Applies command-line overrides on top of the environment.
    pub fn with_cli(mut self, cli: Cli) -> Result<Self> {
        if let Some(base_url) = cli.base_url {
            self.base_url = base_url;
        }
        if let Some(page_size) = cli.page_size {
            self.page_size = page_size;
        }
        if let Some(log_file) = cli.log_file {
            self.log_file = log_file;
        }
        self.accept_invalid_certs |= cli.accept_invalid_certs;
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            bail!("page size must be at least 1");
        }
        Ok(())
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognised flag value '{other}'"),
    }
}
