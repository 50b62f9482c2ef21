use serde::Serialize;

#[derive(Debug, Default, Serialize)]
pub struct PaginationOptions {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

#[derive(Debug, Default, Serialize)]
pub struct ListReposOptions {
    /// Limits the results to repositories with the given affiliation.
    /// Default: all
    #[serde(rename = "type")]
    pub repo_type: RepoTypeFilter,

    /// What to sort results by. Default: full_name
    pub sort: RepoSort,

    /// The direction of the sort. Defaults to asc when sorting by full_name,
    /// desc otherwise
    pub direction: Option<SortDirection>,

    #[serde(flatten)]
    pub pagination_options: PaginationOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepoTypeFilter {
    All,
    Owner,
    Public,
    Private,
    Member,
}

impl Default for RepoTypeFilter {
    fn default() -> Self {
        RepoTypeFilter::All
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepoSort {
    Created,
    Updated,
    Pushed,
    FullName,
}

impl Default for RepoSort {
    fn default() -> Self {
        RepoSort::FullName
    }
}

#[derive(Debug, Serialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}
