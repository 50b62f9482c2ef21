mod session;
mod ui;

pub use anyhow::{Error, Result};
pub use session::{
    BulkAddResult, GithubSession, Outcome, RepositoryList, RepositorySummary, UsernameVerification,
};
pub use ui::{run, Options};
