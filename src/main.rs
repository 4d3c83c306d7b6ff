mod config;
mod display;
mod error;
mod github;
mod logging;
mod report;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use config::Config;
use error::Result;
use github::GithubClient;

#[derive(Parser)]
#[command(
    name = "ghstatus",
    version,
    about = "Summarise the open issues on your GitHub repositories",
    before_help = display::BANNER
)]
pub struct Cli {
    /// GitHub API token (or env var GITHUB_TOKEN)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Organization to include; repeat for several
    #[arg(long = "orgs", value_name = "ORG")]
    orgs: Vec<String>,

    /// Run in debug mode
    #[arg(short = 'd', long)]
    debug: bool,

    /// GitHub API base URL, for GitHub Enterprise
    #[arg(long, env = "GITHUB_API_URL")]
    api_url: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let config = match Config::from_cli(cli) {
        Ok(config) => config,
        Err(e) => Cli::command()
            .error(ErrorKind::MissingRequiredArgument, e)
            .exit(),
    };
    logging::init_logging(config.debug);

    if let Err(e) = run(&config).await {
        display::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> Result<()> {
    let client = GithubClient::new(&config.token, config.api_url.as_deref())?;
    report::run(&client, config).await
}
