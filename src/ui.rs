//! Interactive terminal controller.
//!
//! The prompt loop is the presentation context: each network operation runs
//! as exactly one spawned task while a spinner stays live, and its completion
//! is consumed before any state is touched. Only one operation is ever in
//! flight; the session sits behind an async mutex so access stays serialized
//! regardless.

use crate::{
    session::{BulkAddResult, GithubSession, RepositorySummary},
    Result,
};
use dialoguer::{Confirm, Input, MultiSelect, Password, Select};
use futures::lock::Mutex;
use indicatif::ProgressBar;
use log::debug;
use std::{future::Future, sync::Arc, time::Duration};
use structopt::StructOpt;

const SPINNER_INTERVAL: Duration = Duration::from_millis(80);

#[derive(StructOpt)]
pub struct Options {
    /// Base URL of the Github API, for GitHub Enterprise installs
    #[structopt(long, default_value = "https://api.github.com/")]
    api_url: String,

    /// Personal access token; prompted for interactively when absent
    #[structopt(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

pub async fn run(options: Options) -> Result<()> {
    let session = GithubSession::with_base_url(&options.api_url)?;
    let mut app = App {
        session: Arc::new(Mutex::new(session)),
        repositories: Vec::new(),
    };

    app.authenticate(options.token).await?;
    app.load_repositories().await?;
    app.main_loop().await
}

struct App {
    session: Arc<Mutex<GithubSession>>,
    repositories: Vec<RepositorySummary>,
}

impl App {
    async fn authenticate(&mut self, token_flag: Option<String>) -> Result<()> {
        let mut token = match token_flag {
            Some(token) => token,
            None => prompt_token().await?,
        };

        loop {
            println!("Authenticating with GitHub...");
            let session = Arc::clone(&self.session);
            let attempt = token;
            let outcome = with_spinner("Authenticating...", async move {
                session.lock().await.authenticate(&attempt).await
            })
            .await?;

            if outcome.success {
                println!("{}", outcome.message);
                return Ok(());
            }

            println!("Authentication failed: {}", outcome.message);
            token = prompt_token().await?;
        }
    }

    async fn load_repositories(&mut self) -> Result<()> {
        println!("Loading repositories...");
        let session = Arc::clone(&self.session);
        let listing = with_spinner("Loading repositories...", async move {
            session.lock().await.get_user_repositories().await
        })
        .await?;

        if listing.success {
            println!("{}", listing.message);
            self.repositories = listing.repositories;
        } else {
            println!("Failed to load repositories: {}", listing.message);
        }
        Ok(())
    }

    async fn main_loop(&mut self) -> Result<()> {
        loop {
            let items = vec!["Add a collaborator", "Reload repositories", "Quit"];
            let selection =
                tokio::task::spawn_blocking(move || Select::new().items(&items).default(0).interact())
                    .await??;

            match selection {
                0 => self.add_collaborator_flow().await?,
                1 => self.load_repositories().await?,
                _ => return Ok(()),
            }
        }
    }

    async fn add_collaborator_flow(&mut self) -> Result<()> {
        if self.repositories.is_empty() {
            println!("No repositories loaded");
            return Ok(());
        }

        let labels: Vec<String> = self.repositories.iter().map(repo_label).collect();
        let selected = tokio::task::spawn_blocking(move || {
            MultiSelect::new()
                .with_prompt("Repositories (space toggles, enter confirms)")
                .items(&labels)
                .interact()
        })
        .await??;

        if selected.is_empty() {
            println!("Please select at least one repository");
            return Ok(());
        }

        let repositories: Vec<String> = selected
            .iter()
            .map(|&i| self.repositories[i].full_name.clone())
            .collect();
        debug!("selected {} repositories", repositories.len());

        let username: String = tokio::task::spawn_blocking(|| {
            Input::<String>::new()
                .with_prompt("GitHub Username")
                .interact_text()
        })
        .await??;
        let username = username.trim().to_owned();

        println!("Verifying username: {}", username);
        let session = Arc::clone(&self.session);
        let check = username.clone();
        let verification = with_spinner("Verifying...", async move {
            session.lock().await.verify_username(&check).await
        })
        .await?;

        if !verification.exists {
            println!("✗ {}", verification.message);
            return Ok(());
        }
        println!("✓ {}", verification.message);

        let prompt = format!(
            "Add '{}' as collaborator to {} selected repositories?",
            username,
            repositories.len()
        );
        let confirmed =
            tokio::task::spawn_blocking(move || Confirm::new().with_prompt(prompt).default(false).interact())
                .await??;
        if !confirmed {
            return Ok(());
        }

        println!(
            "Adding {} as collaborator to {} repositories...",
            username,
            repositories.len()
        );
        let session = Arc::clone(&self.session);
        let results = with_spinner("Adding collaborator...", async move {
            session
                .lock()
                .await
                .add_collaborators_bulk(&repositories, &username)
                .await
        })
        .await?;

        report_results(&results);
        Ok(())
    }
}

/// Run one session call as its own task, keeping a spinner alive on the
/// presentation side until the completion is consumed
async fn with_spinner<T, F>(message: &'static str, task: F) -> Result<T>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.enable_steady_tick(SPINNER_INTERVAL);

    let handle = tokio::spawn(task);
    let result = handle.await;
    spinner.finish_and_clear();

    Ok(result?)
}

async fn prompt_token() -> Result<String> {
    let token = tokio::task::spawn_blocking(|| {
        Password::new().with_prompt("Personal Access Token").interact()
    })
    .await??;
    Ok(token)
}

fn repo_label(repo: &RepositorySummary) -> String {
    let visibility = if repo.private { "Private" } else { "Public" };
    let mut label = format!("{} ({})", repo.name, visibility);

    if !repo.description.is_empty() {
        let short: String = repo.description.chars().take(80).collect();
        label.push_str("  ");
        label.push_str(&short);
        if repo.description.chars().count() > 80 {
            label.push_str("...");
        }
    }

    label
}

fn report_results(results: &[BulkAddResult]) {
    let mut successes = 0;
    let mut failures = 0;

    for result in results {
        if result.success {
            successes += 1;
            println!("✓ {}: {}", result.repository, result.message);
        } else {
            failures += 1;
            println!("✗ {}: {}", result.repository, result.message);
        }
    }

    println!("Completed: {} successful, {} failed", successes, failures);
}
