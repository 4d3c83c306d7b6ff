use crate::error::{GhStatusError, Result};
use crate::github::{RepositorySource, AFFILIATION};
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::{Octocrab, Page};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub struct GithubClient {
    octocrab: Octocrab,
}

#[derive(Debug, Deserialize)]
pub struct AuthenticatedUser {
    pub login: String,
}

/// The slice of a repository object the report reads.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoRecord {
    pub name: String,
    pub full_name: Option<String>,
    pub owner: Option<RepoOwner>,
    pub open_issues_count: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepoOwner {
    pub login: String,
}

impl RepoRecord {
    /// `owner/name` when the API sent it, otherwise the bare name.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.name)
    }
}

/// A batch of repositories plus the pagination links that came with it.
#[derive(Debug, Clone, Default)]
pub struct RepositoryPage {
    pub repositories: Vec<RepoRecord>,
    pub next_page: Option<u32>,
    pub last_page: Option<u32>,
}

#[derive(Serialize)]
struct ListReposParams<'a> {
    affiliation: &'a str,
    per_page: u8,
    page: u32,
}

impl GithubClient {
    pub fn new(token: &SecretString, api_url: Option<&str>) -> Result<Self> {
        // A failed request is fatal to the run; octocrab must not replay it.
        let mut builder = Octocrab::builder()
            .personal_token(token.expose_secret().to_string())
            .add_retry_config(RetryConfig::None);
        if let Some(url) = api_url {
            builder = builder
                .base_uri(url)
                .map_err(|e| GhStatusError::Config(format!("Invalid API URL {url}: {e}")))?;
        }
        let octocrab = builder
            .build()
            .map_err(|e| GhStatusError::Config(e.to_string()))?;
        Ok(Self { octocrab })
    }

    pub async fn current_user(&self) -> Result<AuthenticatedUser> {
        let user: AuthenticatedUser = self
            .octocrab
            .get("/user", None::<&()>)
            .await
            .map_err(|e| GhStatusError::GitHub(format!("Failed to fetch current user: {e}")))?;
        Ok(user)
    }

    pub async fn list_user_repos(&self, page: u32, per_page: u8) -> Result<RepositoryPage> {
        let params = ListReposParams {
            affiliation: AFFILIATION,
            per_page,
            page,
        };
        let mut result: Page<RepoRecord> = self.octocrab.get("/user/repos", Some(&params)).await?;

        let next_page = result
            .next
            .as_ref()
            .and_then(|uri| uri.query())
            .and_then(page_param);
        let last_page = result
            .last
            .as_ref()
            .and_then(|uri| uri.query())
            .and_then(page_param);
        let repositories = result.take_items();

        debug!(
            page,
            count = repositories.len(),
            next = ?next_page,
            last = ?last_page,
            "Fetched repository page"
        );

        Ok(RepositoryPage {
            repositories,
            next_page,
            last_page,
        })
    }
}

impl RepositorySource for GithubClient {
    async fn current_user_login(&self) -> Result<String> {
        Ok(self.current_user().await?.login)
    }

    async fn list_repositories(&self, page: u32, per_page: u8) -> Result<RepositoryPage> {
        self.list_user_repos(page, per_page).await
    }
}

/// Extracts the `page` parameter from a `Link` URI query string.
fn page_param(query: &str) -> Option<u32> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "page")
        .and_then(|(_, value)| value.parse().ok())
}
