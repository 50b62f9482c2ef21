use crate::{
    client::{Client, ListReposOptions, Result},
    Repository,
};
use reqwest::StatusCode;
use serde::Serialize;

/// `RepositoryClient` handles communication with the repository related
/// methods of the GitHub API.
///
/// GitHub API docs: https://developer.github.com/v3/repos/
pub struct RepositoryClient<'a> {
    inner: &'a Client,
}

/// Permission level granted when adding a collaborator
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    Pull,
    Triage,
    Push,
    Maintain,
    Admin,
}

/// Distinguishes the two success responses of the add-collaborator endpoint
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CollaboratorStatus {
    /// 201: an invitation was created
    Invited,
    /// 204: the user already had access
    AlreadyCollaborator,
}

impl<'a> RepositoryClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// List one page of repositories for the authenticated user
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/#list-repositories-for-the-authenticated-user
    pub async fn list_for_authenticated_user(
        &self,
        options: &ListReposOptions,
    ) -> Result<Vec<Repository>> {
        let response = self.inner.get("user/repos").query(options).send().await?;

        self.inner.json(response).await
    }

    /// Add a user as a collaborator. `repo` is the "owner/name" full name.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/collaborators/#add-a-repository-collaborator
    pub async fn add_collaborator(
        &self,
        repo: &str,
        user: &str,
        permission: Permission,
    ) -> Result<CollaboratorStatus> {
        #[derive(Debug, Serialize)]
        struct AddCollaboratorRequest {
            permission: Permission,
        }

        let request = AddCollaboratorRequest { permission };
        let url = format!("repos/{}/collaborators/{}", repo, user);
        let response = self.inner.put(&url).json(&request).send().await?;

        match response.status() {
            StatusCode::CREATED => Ok(CollaboratorStatus::Invited),
            StatusCode::NO_CONTENT => Ok(CollaboratorStatus::AlreadyCollaborator),
            _ => Err(Client::error_for_status(response).await),
        }
    }
}
