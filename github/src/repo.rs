use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Repository record as returned by the list and get endpoints
#[derive(Clone, Debug, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    /// "owner/name", the canonical repository key
    pub full_name: String,
    pub private: bool,
    pub html_url: String,
    pub description: Option<String>,
    pub fork: bool,
    pub updated_at: DateTime<Utc>,
    /// Permissions of the requesting user; only present on endpoints that
    /// are scoped to an authenticated user
    pub permissions: Option<Permissions>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Permissions {
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub push: bool,
    #[serde(default)]
    pub pull: bool,
}

#[cfg(test)]
mod test {
    use super::Repository;

    #[test]
    fn repository() {
        const REPO_JSON: &str = r#"
            {
                "id": 1296269,
                "node_id": "MDEwOlJlcG9zaXRvcnkxMjk2MjY5",
                "name": "Hello-World",
                "full_name": "octocat/Hello-World",
                "private": false,
                "html_url": "https://github.com/octocat/Hello-World",
                "description": "This your first repo!",
                "fork": false,
                "updated_at": "2011-01-26T19:14:43Z",
                "permissions": {
                    "admin": false,
                    "push": false,
                    "pull": true
                }
            }
        "#;

        let repo: Repository = serde_json::from_str(REPO_JSON).unwrap();
        assert_eq!(repo.full_name, "octocat/Hello-World");
        assert!(!repo.private);
        assert!(repo.permissions.unwrap().pull);
    }

    #[test]
    fn repository_with_absent_optional_fields() {
        const REPO_JSON: &str = r#"
            {
                "id": 1296270,
                "name": "Spoon-Knife",
                "full_name": "octocat/Spoon-Knife",
                "private": true,
                "html_url": "https://github.com/octocat/Spoon-Knife",
                "description": null,
                "fork": false,
                "updated_at": "2020-07-09T00:17:42Z"
            }
        "#;

        let repo: Repository = serde_json::from_str(REPO_JSON).unwrap();
        assert!(repo.description.is_none());
        assert!(repo.permissions.is_none());
    }
}
