use anyhow::{Context, Result};
use roadmapper::{GithubClient, MilestonesConfig};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    roadmapper::logging::init();

    let config = MilestonesConfig::parse();
    config.validate().context("Invalid configuration")?;

    let client = GithubClient::new(&config.github.api_url, config.github.github_token.as_deref())
        .context("Failed to create GitHub client")?;

    let repository = client
        .repository(&config.repository)
        .with_context(|| format!("Failed to fetch repository {}", config.repository))?;

    let lines = roadmapper::render_milestones(
        &repository,
        &client.repository_source(&repository.full_name),
    )
    .context("Failed to render milestone roadmap")?;

    roadmapper::write_markdown(
        &roadmapper::join_lines(&lines),
        config.github.output_file.as_deref(),
    )
}
