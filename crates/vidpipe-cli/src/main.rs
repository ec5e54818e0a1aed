//! vidpipe CLI: ingest videos into projects from the command line.
//!
//! Set VIDPIPE_API_KEY and VIDPIPE_API_URL. Uses X-API-Key auth.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use vidpipe_api_client::ApiClient;
use vidpipe_cli::{content_from_args, init_tracing, TracingNotifier};
use vidpipe_core::models::{CreateProjectRequest, FileContent};
use vidpipe_core::IngestError;
use vidpipe_processing::{IngestionNotifier, IngestionOrchestrator};

#[derive(Parser)]
#[command(name = "vidpipe", about = "Video ingestion CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a file or YouTube URL without contacting the API
    Validate {
        /// Path to a video file
        #[arg(long)]
        file: Option<PathBuf>,
        /// YouTube URL
        #[arg(long)]
        url: Option<String>,
    },
    /// Upload a video file into a project
    Upload {
        /// Project ID
        #[arg(long)]
        project: String,
        /// Path to the video file
        file: PathBuf,
    },
    /// Add a YouTube video to a project
    AddUrl {
        /// Project ID
        #[arg(long)]
        project: String,
        /// YouTube URL
        url: String,
    },
    /// Ingest whichever source is given into a project
    Ingest {
        /// Project ID
        #[arg(long)]
        project: String,
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        url: Option<String>,
    },
    /// Create a project, optionally with a video attached
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        url: Option<String>,
    },
    /// List projects with pagination
    List {
        /// Maximum number of items
        #[arg(long, default_value = "20")]
        limit: u32,
        /// Offset for pagination
        #[arg(long, default_value = "0")]
        offset: u32,
    },
    /// Get a single project by ID
    Get {
        /// Project UUID
        id: String,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

fn client() -> anyhow::Result<ApiClient> {
    ApiClient::from_env()
        .context("Failed to create API client. Set VIDPIPE_API_KEY and VIDPIPE_API_URL")
}

fn orchestrator() -> anyhow::Result<IngestionOrchestrator> {
    Ok(IngestionOrchestrator::new(Arc::new(client()?)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let notifier: &dyn IngestionNotifier = &TracingNotifier;

    match cli.command {
        Commands::Validate { file, url } => {
            let content = content_from_args(file, url)?;
            let result = vidpipe_processing::validate(&content);
            print_json(&result)?;
            result
                .into_result()
                .map_err(IngestError::Validation)?;
        }
        Commands::Upload { project, file } => {
            let file = FileContent::from_path(&file)?;
            let video = orchestrator()?
                .process_file(&project, file, Some(notifier))
                .await?;
            print_json(&video)?;
        }
        Commands::AddUrl { project, url } => {
            let video = orchestrator()?
                .process_youtube_url(&project, &url, Some(notifier))
                .await?;
            print_json(&video)?;
        }
        Commands::Ingest { project, file, url } => {
            let content = content_from_args(file, url)?;
            let result = orchestrator()?
                .process_content(&project, content, Some(notifier))
                .await?;
            print_json(&result)?;
        }
        Commands::Create {
            name,
            description,
            file,
            url,
        } => {
            let mut request =
                CreateProjectRequest::new(name).with_content(content_from_args(file, url)?);
            if let Some(description) = description {
                request = request.with_description(description);
            }
            let project = orchestrator()?
                .create_project_with_content(request, Some(notifier))
                .await?;
            print_json(&project)?;
        }
        Commands::List { limit, offset } => {
            let response = client()?.list_projects(Some(limit), Some(offset)).await?;
            print_json(&response)?;
        }
        Commands::Get { id } => {
            let response = client()?.get_project(&id).await?;
            print_json(&response)?;
        }
    }

    Ok(())
}
