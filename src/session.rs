//! Authenticated Github session and the operations the controller drives.
//!
//! Every operation normalizes its outcome, expected or not, into a plain
//! result value the controller can render; nothing here returns an error.

use github::{
    client::{
        CollaboratorStatus, ListReposOptions, PaginationOptions, Permission, RepoSort,
        RepoTypeFilter, StatusCode,
    },
    Permissions, Repository, User,
};
use log::debug;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const REPOS_PER_PAGE: usize = 100;

/// Outcome of a single operation, normalized for display
#[derive(Clone, Debug)]
pub struct Outcome {
    pub success: bool,
    pub message: String,
}

impl Outcome {
    fn ok<S: Into<String>>(message: S) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    fn failed<S: Into<String>>(message: S) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Result of loading the authenticated user's repositories. The list is
/// complete on success and empty on any failure; partial pages are never
/// returned.
#[derive(Clone, Debug)]
pub struct RepositoryList {
    pub success: bool,
    pub repositories: Vec<RepositorySummary>,
    pub message: String,
}

#[derive(Clone, Debug)]
pub struct UsernameVerification {
    pub exists: bool,
    pub message: String,
}

/// One entry per requested repository, in request order
#[derive(Clone, Debug)]
pub struct BulkAddResult {
    pub repository: String,
    pub success: bool,
    pub message: String,
}

/// Projection of a raw repository record for display and selection
#[derive(Clone, Debug)]
pub struct RepositorySummary {
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub private: bool,
    pub url: String,
    pub permissions: Permissions,
}

impl RepositorySummary {
    fn from_repository(repo: Repository) -> Self {
        Self {
            name: repo.name,
            full_name: repo.full_name,
            description: repo.description.unwrap_or_default(),
            private: repo.private,
            url: repo.html_url,
            permissions: repo.permissions.unwrap_or_default(),
        }
    }
}

/// A Github session: the token, the client whose headers are derived from
/// it, and the identity of the authenticated user.
///
/// The client is rebuilt wholesale on every `authenticate` call; headers are
/// a pure function of the token and are never mutated in place.
#[derive(Debug)]
pub struct GithubSession {
    base_url: String,
    client: github::Client,
    token: Option<String>,
    user: Option<User>,
}

impl GithubSession {
    /// Session against the public Github API
    pub fn new() -> github::Result<Self> {
        Self::with_base_url(github::client::DEFAULT_BASE_URL)
    }

    /// Session against a custom endpoint, e.g. a GitHub Enterprise install
    pub fn with_base_url<S: Into<String>>(base_url: S) -> github::Result<Self> {
        let base_url = base_url.into();
        let client = Self::build_client(&base_url, None)?;
        Ok(Self {
            base_url,
            client,
            token: None,
            user: None,
        })
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn authenticated_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    fn build_client(base_url: &str, token: Option<&str>) -> github::Result<github::Client> {
        let mut builder = github::Client::builder()
            .base_url(base_url)
            .user_agent(USER_AGENT);
        if let Some(token) = token {
            builder = builder.github_api_token(token);
        }
        builder.build()
    }

    /// Derive headers from the token and check it against the current-user
    /// endpoint. The token and headers are retained even when the check
    /// fails, so a retry with a corrected token reuses the same session; any
    /// previously stored identity is cleared.
    pub async fn authenticate(&mut self, token: &str) -> Outcome {
        self.user = None;

        match Self::build_client(&self.base_url, Some(token)) {
            Ok(client) => {
                self.client = client;
                self.token = Some(token.to_owned());
            }
            // A token that cannot be carried in a header leaves the
            // previous session state untouched
            Err(err) => {
                return Outcome::failed(format!("Network error during authentication: {}", err))
            }
        }

        match self.client.users().authenticated().await {
            Ok(user) => {
                let message = format!("Successfully authenticated as {}", user.login);
                self.user = Some(user);
                Outcome::ok(message)
            }
            Err(err) => match err.status() {
                Some(StatusCode::UNAUTHORIZED) => Outcome::failed("Invalid Personal Access Token"),
                Some(status) => {
                    Outcome::failed(format!("Authentication failed: {}", status.as_u16()))
                }
                None => Outcome::failed(format!("Network error during authentication: {}", err)),
            },
        }
    }

    /// Load all repositories owned by the authenticated user, most recently
    /// updated first. Pages of 100 are fetched until a short or empty page;
    /// a failure on any page discards everything fetched so far.
    pub async fn get_user_repositories(&self) -> RepositoryList {
        if !self.has_token() {
            return RepositoryList {
                success: false,
                repositories: Vec::new(),
                message: "Not authenticated".to_owned(),
            };
        }

        let mut repositories = Vec::new();
        let mut page = 1;

        loop {
            let options = ListReposOptions {
                repo_type: RepoTypeFilter::Owner,
                sort: RepoSort::Updated,
                direction: None,
                pagination_options: PaginationOptions {
                    page: Some(page),
                    per_page: Some(REPOS_PER_PAGE),
                },
            };

            let page_repos = match self.client.repos().list_for_authenticated_user(&options).await
            {
                Ok(page_repos) => page_repos,
                Err(err) => {
                    let message = match err.status() {
                        Some(status) => {
                            format!("Failed to fetch repositories: {}", status.as_u16())
                        }
                        None => format!("Network error while fetching repositories: {}", err),
                    };
                    return RepositoryList {
                        success: false,
                        repositories: Vec::new(),
                        message,
                    };
                }
            };

            debug!("fetched page {} with {} repositories", page, page_repos.len());

            let last_page = page_repos.len() < REPOS_PER_PAGE;
            repositories.extend(page_repos.into_iter().map(RepositorySummary::from_repository));

            if last_page {
                break;
            }
            page += 1;
        }

        RepositoryList {
            success: true,
            message: format!("Found {} repositories", repositories.len()),
            repositories,
        }
    }

    /// Check whether a username exists. Works without authentication; the
    /// request goes out with whatever headers the session currently has.
    pub async fn verify_username(&self, username: &str) -> UsernameVerification {
        let username = username.trim();
        if username.is_empty() {
            return UsernameVerification {
                exists: false,
                message: "Username cannot be empty".to_owned(),
            };
        }

        match self.client.users().get(username).await {
            Ok(user) => UsernameVerification {
                exists: true,
                message: format!(
                    "User '{}' found: {}",
                    username,
                    user.name.as_deref().unwrap_or(username)
                ),
            },
            Err(err) => {
                let message = match err.status() {
                    Some(StatusCode::NOT_FOUND) => format!("User '{}' not found", username),
                    Some(status) => format!("Error verifying username: {}", status.as_u16()),
                    None => format!("Network error while verifying username: {}", err),
                };
                UsernameVerification {
                    exists: false,
                    message,
                }
            }
        }
    }

    /// Grant push access on one repository, identified by its full name
    pub async fn add_collaborator(&self, repo_full_name: &str, username: &str) -> Outcome {
        if !self.has_token() {
            return Outcome::failed("Not authenticated");
        }

        match self
            .client
            .repos()
            .add_collaborator(repo_full_name, username, Permission::Push)
            .await
        {
            Ok(CollaboratorStatus::Invited) => Outcome::ok(format!(
                "Successfully added {} as collaborator to {}",
                username, repo_full_name
            )),
            Ok(CollaboratorStatus::AlreadyCollaborator) => Outcome::ok(format!(
                "{} is already a collaborator on {}",
                username, repo_full_name
            )),
            Err(err) => Outcome::failed(match err.status() {
                Some(StatusCode::FORBIDDEN) => format!(
                    "Permission denied: Cannot add collaborators to {}",
                    repo_full_name
                ),
                Some(StatusCode::NOT_FOUND) => format!(
                    "Repository {} not found or user {} not found",
                    repo_full_name, username
                ),
                Some(StatusCode::UNPROCESSABLE_ENTITY) => format!(
                    "Cannot add {} as collaborator (may be repository owner)",
                    username
                ),
                Some(status) => format!("Failed to add collaborator: {}", status.as_u16()),
                None => format!("Network error while adding collaborator: {}", err),
            }),
        }
    }

    /// Grant push access across many repositories. Requests are issued one
    /// at a time, in the order given; a failure never stops the remaining
    /// repositories from being attempted.
    pub async fn add_collaborators_bulk(
        &self,
        repositories: &[String],
        username: &str,
    ) -> Vec<BulkAddResult> {
        let mut results = Vec::with_capacity(repositories.len());

        for repo in repositories {
            let outcome = self.add_collaborator(repo, username).await;
            results.push(BulkAddResult {
                repository: repo.clone(),
                success: outcome.success,
                message: outcome.message,
            });
        }

        results
    }
}
