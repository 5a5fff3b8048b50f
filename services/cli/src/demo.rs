use std::fs::File;
use std::sync::Arc;

use clap::Args;
use resume_relevance::error::AppError;
use resume_relevance::orchestrate::SessionCoordinator;
use resume_relevance::results::export::write_csv;
use resume_relevance::results::{
    derive_view, ExpandedRows, FilterOptions, SortConfig, SortDirection,
};
use resume_relevance::session::{SessionStore, Settings};
use resume_relevance::transport::{ApiClient, UploadFile};
use tracing::info;

use crate::cli::EvaluateArgs;
use crate::infra::{read_upload_file, render_results_table, render_stats};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Expand every row in the rendered table (skills and feedback)
    #[arg(long)]
    pub(crate) expand: bool,
    /// Write the demo's result view to a CSV file
    #[arg(long)]
    pub(crate) export: Option<std::path::PathBuf>,
}

/// End-to-end walk through the session core against the mock backend:
/// job text submission, a resume batch, evaluation, and the rendered
/// results view.
pub(crate) async fn run_demo(settings: Settings, args: DemoArgs) -> Result<(), AppError> {
    let mut settings = settings;
    settings.use_mock_data = true;

    println!("Resume relevance demo (mock backend)");
    let store = Arc::new(SessionStore::new(settings.clone()));
    let coordinator = SessionCoordinator::new(ApiClient::from_settings(&settings), store);

    let job = coordinator
        .upload_job_text(
            "Looking for a backend engineer comfortable owning services \
             end to end: API design, data modeling, deployment.",
        )
        .await?;
    println!("- Job loaded: {} ({})", job.title, job.job_id);
    println!("  must have: {}", job.must_have_skills.join(", "));
    match serde_json::to_string_pretty(&job) {
        Ok(json) => println!("  payload:\n{json}"),
        Err(err) => println!("  payload unavailable: {err}"),
    }

    let batch = vec![UploadFile::new("demo_batch.pdf", vec![0u8; 64])];
    let uploaded = coordinator.upload_resumes(batch).await?;
    println!("- Uploaded {} resumes", uploaded.len());

    let results = coordinator.evaluate().await?;
    println!("- Evaluation returned {} results\n", results.len());

    let state = coordinator.store().snapshot();
    render_stats(&state);
    println!();

    let filters = FilterOptions::default();
    let sort = SortConfig::default();
    let view = derive_view(&state.evaluation_results, &filters, &sort);

    let mut expanded = ExpandedRows::default();
    if args.expand {
        for row in &view {
            expanded.toggle(&row.resume_id);
        }
    }
    render_results_table(&view, &expanded);

    if let Some(path) = args.export {
        write_csv(&view, File::create(&path)?)?;
        println!("\nExported {} rows to {}", view.len(), path.display());
    }

    Ok(())
}

/// Uploads the given job description and resumes, evaluates, and
/// renders the filtered/sorted view.
pub(crate) async fn run_evaluate(settings: Settings, args: EvaluateArgs) -> Result<(), AppError> {
    let store = Arc::new(SessionStore::new(settings.clone()));
    let coordinator = SessionCoordinator::new(ApiClient::from_settings(&settings), store);

    let job = match (&args.jd_file, &args.jd_text) {
        (Some(path), _) => {
            let file = read_upload_file(path)?;
            coordinator.upload_job_file(file).await?
        }
        (None, Some(text)) => coordinator.upload_job_text(text).await?,
        (None, None) => {
            return Err(AppError::Orchestration(
                resume_relevance::orchestrate::OrchestrationError::NotReady(
                    "provide --jd-file or --jd-text",
                ),
            ))
        }
    };
    info!(job_id = %job.job_id, "job description accepted");

    let mut files = Vec::with_capacity(args.resumes.len());
    for path in &args.resumes {
        files.push(read_upload_file(path)?);
    }
    let uploaded = coordinator.upload_resumes(files).await?;
    println!("Uploaded {} resumes against '{}'", uploaded.len(), job.title);

    coordinator.evaluate().await?;

    let state = coordinator.store().snapshot();
    render_stats(&state);
    println!();

    let filters = FilterOptions {
        verdict: args.filter,
        search: args.search.clone(),
        score_range: None,
    };
    let sort = SortConfig {
        key: args.sort_key,
        direction: if args.ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        },
    };
    let view = derive_view(&state.evaluation_results, &filters, &sort);
    render_results_table(&view, &ExpandedRows::default());

    if let Some(path) = &args.export {
        write_csv(&view, File::create(path)?)?;
        println!("\nExported {} rows to {}", view.len(), path.display());
    }

    Ok(())
}
