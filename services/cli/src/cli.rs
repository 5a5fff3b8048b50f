use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use resume_relevance::config::AppConfig;
use resume_relevance::error::AppError;
use resume_relevance::session::Settings;
use resume_relevance::telemetry;

use crate::demo::{run_demo, run_evaluate, DemoArgs};
use crate::infra::{parse_sort_key, parse_verdict_filter};
use resume_relevance::results::{SortKey, VerdictFilter};

#[derive(Parser, Debug)]
#[command(
    name = "Resume Relevance",
    about = "Drive the resume relevance session core from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run an end-to-end demo against the mock backend (default command)
    Demo(DemoArgs),
    /// Upload a job description and resumes, evaluate, and render results
    Evaluate(EvaluateArgs),
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Job description file (.pdf/.txt)
    #[arg(long, conflicts_with = "jd_text")]
    pub(crate) jd_file: Option<PathBuf>,
    /// Pasted job description text
    #[arg(long)]
    pub(crate) jd_text: Option<String>,
    /// Resume files (.pdf/.doc/.docx); repeat for a batch
    #[arg(long = "resume", required = true)]
    pub(crate) resumes: Vec<PathBuf>,
    /// Verdict filter for the rendered table (All/High/Medium/Low)
    #[arg(long, default_value = "All", value_parser = parse_verdict_filter)]
    pub(crate) filter: VerdictFilter,
    /// Case-insensitive search over candidate name/email
    #[arg(long, default_value = "")]
    pub(crate) search: String,
    /// Sort column (name/email/score/verdict)
    #[arg(long, default_value = "score", value_parser = parse_sort_key)]
    pub(crate) sort_key: SortKey,
    /// Sort ascending instead of the default descending
    #[arg(long)]
    pub(crate) ascending: bool,
    /// Write the filtered/sorted view to a CSV file
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,
    /// Call the live service instead of the bundled mock
    #[arg(long)]
    pub(crate) live: bool,
    /// Override the configured API base URL
    #[arg(long)]
    pub(crate) base_url: Option<String>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli.command.unwrap_or(Command::Demo(DemoArgs::default()));
    match command {
        Command::Demo(args) => run_demo(config.settings, args).await,
        Command::Evaluate(args) => {
            let settings = apply_overrides(config.settings, &args);
            run_evaluate(settings, args).await
        }
    }
}

fn apply_overrides(mut settings: Settings, args: &EvaluateArgs) -> Settings {
    if args.live {
        settings.use_mock_data = false;
    }
    if let Some(base_url) = &args.base_url {
        settings.api_base_url = base_url.clone();
    }
    settings
}
