use crate::error::{GhStatusError, Result};
use crate::github::RepoRecord;
use crate::report::filter::OrganizationSet;
use tracing::{debug, info};

/// The single log record a matching repository produces.
#[derive(Debug, PartialEq, Eq)]
pub enum Report<'a> {
    NoOpenIssues { owner: &'a str, name: &'a str },
    OpenIssues { owner: &'a str, name: &'a str, count: u32 },
}

impl Report<'_> {
    pub fn emit(&self) {
        match *self {
            Report::NoOpenIssues { owner, name } => {
                debug!(owner = %owner, name = %name, "no open issues");
            }
            Report::OpenIssues { owner, name, count } => {
                info!(owner = %owner, name = %name, "Open Issues Count: {}", count);
            }
        }
    }
}

/// Builds the report for `repo`, or `None` when its owner is not in `orgs`.
pub fn handle_repo<'a>(repo: &'a RepoRecord, orgs: &OrganizationSet) -> Result<Option<Report<'a>>> {
    let owner = repo
        .owner
        .as_ref()
        .map(|owner| owner.login.as_str())
        .ok_or_else(|| incomplete(repo, "owner"))?;

    if !orgs.contains(owner) {
        return Ok(None);
    }

    let count = repo
        .open_issues_count
        .ok_or_else(|| incomplete(repo, "open_issues_count"))?;
    let name = repo.name.as_str();

    Ok(Some(if count == 0 {
        Report::NoOpenIssues { owner, name }
    } else {
        Report::OpenIssues { owner, name, count }
    }))
}

fn incomplete(repo: &RepoRecord, field: &'static str) -> GhStatusError {
    GhStatusError::IncompleteRepository {
        repo: repo.display_name().to_string(),
        field,
    }
}
