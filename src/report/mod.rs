//! The open-issue report: resolve the user, walk their repositories, and log
//! one line per repository owned by the user or a configured organization.

pub mod filter;
#[cfg(test)]
pub(crate) mod mock;
pub mod paginate;
pub mod reporter;

use crate::config::Config;
use crate::error::Result;
use crate::github::RepositorySource;
use filter::OrganizationSet;
use paginate::paginate;
use reporter::handle_repo;
use tracing::debug;

pub async fn run<S: RepositorySource>(source: &S, config: &Config) -> Result<()> {
    let username = source.current_user_login().await?;
    let orgs = OrganizationSet::new(&config.orgs, &username);
    debug!(user = %username, orgs = ?orgs.logins(), "Resolved organizations");

    let pages = paginate(source, config.per_page, |repo| {
        if let Some(report) = handle_repo(repo, &orgs)? {
            report.emit();
        }
        Ok(())
    })
    .await?;

    debug!(pages, "Finished listing repositories");
    Ok(())
}
