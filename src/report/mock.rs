//! In-memory `RepositorySource` for exercising the report pipeline.

use crate::error::{GhStatusError, Result};
use crate::github::{RepoOwner, RepoRecord, RepositoryPage, RepositorySource};
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Default)]
pub struct MockSource {
    login: Option<String>,
    pages: HashMap<u32, RepositoryPage>,
    failing_page: Option<u32>,
    requested: RefCell<Vec<(u32, u8)>>,
    user_calls: RefCell<u32>,
}

impl MockSource {
    pub fn new(login: &str) -> Self {
        Self {
            login: Some(login.to_string()),
            ..Self::default()
        }
    }

    /// A source whose `/user` call fails.
    pub fn unauthenticated() -> Self {
        Self::default()
    }

    pub fn page(
        mut self,
        number: u32,
        repositories: Vec<RepoRecord>,
        next_page: Option<u32>,
        last_page: Option<u32>,
    ) -> Self {
        self.pages.insert(
            number,
            RepositoryPage {
                repositories,
                next_page,
                last_page,
            },
        );
        self
    }

    pub fn failing_on(mut self, number: u32) -> Self {
        self.failing_page = Some(number);
        self
    }

    pub fn requested_pages(&self) -> Vec<u32> {
        self.requested.borrow().iter().map(|(page, _)| *page).collect()
    }

    pub fn requested(&self) -> Vec<(u32, u8)> {
        self.requested.borrow().clone()
    }

    pub fn user_calls(&self) -> u32 {
        *self.user_calls.borrow()
    }
}

impl RepositorySource for MockSource {
    async fn current_user_login(&self) -> Result<String> {
        *self.user_calls.borrow_mut() += 1;
        self.login
            .clone()
            .ok_or_else(|| GhStatusError::GitHub("Bad credentials".into()))
    }

    async fn list_repositories(&self, page: u32, per_page: u8) -> Result<RepositoryPage> {
        self.requested.borrow_mut().push((page, per_page));
        if self.failing_page == Some(page) {
            return Err(GhStatusError::GitHub(format!("page {page} unavailable")));
        }
        Ok(self.pages.get(&page).cloned().unwrap_or_default())
    }
}

pub fn repo(owner: &str, name: &str, open_issues: u32) -> RepoRecord {
    RepoRecord {
        name: name.to_string(),
        full_name: Some(format!("{owner}/{name}")),
        owner: Some(RepoOwner {
            login: owner.to_string(),
        }),
        open_issues_count: Some(open_issues),
    }
}

pub fn ownerless(name: &str) -> RepoRecord {
    RepoRecord {
        name: name.to_string(),
        full_name: None,
        owner: None,
        open_issues_count: Some(1),
    }
}
