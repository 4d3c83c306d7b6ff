use crate::error::Result;
use crate::github::{RepoRecord, RepositorySource};
use tracing::{debug, warn};

/// Where the listing stands after a page has been processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub page: u32,
    pub per_page: u8,
    pub next_page: Option<u32>,
    pub last_page: Option<u32>,
}

impl PageCursor {
    /// The page to fetch next, or `None` once the listing is exhausted.
    ///
    /// A next page that does not move forward also ends the listing, so a
    /// page number is never fetched twice.
    pub fn advance(&self) -> Option<u32> {
        if self.last_page == Some(self.page) {
            return None;
        }
        let next = self.next_page?;
        if next <= self.page {
            warn!(
                page = self.page,
                per_page = self.per_page,
                next,
                "Next page does not advance, stopping pagination"
            );
            return None;
        }
        Some(next)
    }
}

/// Walks every repository page starting at page 1, calling `handle` on each
/// repository in the order the API returned it.
///
/// A `handle` error is logged and skipped; a page fetch error ends the walk.
/// Returns the number of pages fetched.
pub async fn paginate<S, F>(source: &S, per_page: u8, mut handle: F) -> Result<u32>
where
    S: RepositorySource,
    F: FnMut(&RepoRecord) -> Result<()>,
{
    let mut page = 1;
    let mut fetched = 0;

    loop {
        debug!(page, per_page, "Getting repositories...");
        let batch = source.list_repositories(page, per_page).await?;
        fetched += 1;

        for repo in &batch.repositories {
            debug!("Handling repo {}...", repo.display_name());
            if let Err(e) = handle(repo) {
                warn!(repo = %repo.display_name(), "{e}");
            }
        }

        let cursor = PageCursor {
            page,
            per_page,
            next_page: batch.next_page,
            last_page: batch.last_page,
        };
        match cursor.advance() {
            Some(next) => page = next,
            None => return Ok(fetched),
        }
    }
}
