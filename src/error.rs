use thiserror::Error;

#[derive(Error, Debug)]
pub enum GhStatusError {
    #[error("A GitHub token is required.")]
    MissingToken,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("GitHub API error: {0}")]
    GitHub(String),

    #[error("Repository {repo} is missing `{field}` in the API response")]
    IncompleteRepository { repo: String, field: &'static str },
}

impl From<octocrab::Error> for GhStatusError {
    fn from(err: octocrab::Error) -> Self {
        GhStatusError::GitHub(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GhStatusError>;
