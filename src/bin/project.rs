use anyhow::{Context, Result};
use roadmapper::{GithubClient, ProjectConfig};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    roadmapper::logging::init();

    let config = ProjectConfig::parse();
    config.validate().context("Invalid configuration")?;

    let client = GithubClient::new(&config.github.api_url, config.github.github_token.as_deref())
        .context("Failed to create GitHub client")?;

    let project = roadmapper::locate(&client, &config.project_uri)?;

    let lines = roadmapper::render_project(&project, &client)
        .context("Failed to render project roadmap")?;

    roadmapper::write_markdown(
        &roadmapper::join_lines(&lines),
        config.github.output_file.as_deref(),
    )
}
