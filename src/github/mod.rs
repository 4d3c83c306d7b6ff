mod client;

pub use client::{GithubClient, RepoRecord, RepositoryPage};
#[cfg(test)]
pub use client::RepoOwner;

use crate::error::Result;

/// Affiliations used when listing the authenticated user's repositories.
pub const AFFILIATION: &str = "owner,collaborator,organization_member";

/// The two API calls the report needs.
pub trait RepositorySource {
    /// Login of the user the token belongs to.
    async fn current_user_login(&self) -> Result<String>;

    /// One page of repositories visible to the authenticated user.
    async fn list_repositories(&self, page: u32, per_page: u8) -> Result<RepositoryPage>;
}
