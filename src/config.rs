use crate::error::{GhStatusError, Result};
use crate::Cli;
use secrecy::SecretString;

/// Repositories requested per page; the GitHub maximum.
pub const DEFAULT_PER_PAGE: u8 = 100;

/// Run configuration, built once from the command line and never mutated.
#[derive(Debug)]
pub struct Config {
    pub token: SecretString,
    pub orgs: Vec<String>,
    pub debug: bool,
    pub api_url: Option<String>,
    pub per_page: u8,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let token = resolve_token(cli.token.as_deref())?;
        Ok(Self {
            token,
            orgs: cli.orgs,
            debug: cli.debug,
            api_url: cli.api_url.filter(|url| !url.trim().is_empty()),
            per_page: DEFAULT_PER_PAGE,
        })
    }
}

/// The flag value wins over `GITHUB_TOKEN`; clap has already merged the two.
/// The token is opaque: only emptiness is checked.
pub fn resolve_token(raw: Option<&str>) -> Result<SecretString> {
    match raw {
        Some(token) if !token.is_empty() => Ok(SecretString::from(token.to_string())),
        _ => Err(GhStatusError::MissingToken),
    }
}
