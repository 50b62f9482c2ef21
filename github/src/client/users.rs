use crate::{
    client::{Client, Result},
    User,
};

/// `UserClient` handles communication with the user related methods of the
/// GitHub API.
///
/// GitHub API docs: https://developer.github.com/v3/users/
pub struct UserClient<'a> {
    inner: &'a Client,
}

impl<'a> UserClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// Get the authenticated user
    ///
    /// GitHub API docs: https://developer.github.com/v3/users/#get-the-authenticated-user
    pub async fn authenticated(&self) -> Result<User> {
        let response = self.inner.get("user").send().await?;

        self.inner.json(response).await
    }

    /// Get a user by username
    ///
    /// GitHub API docs: https://developer.github.com/v3/users/#get-a-user
    pub async fn get(&self, username: &str) -> Result<User> {
        let url = format!("users/{}", username);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }
}
