mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, ConfigFile};
use sbom_merge_graph::prelude::*;
use sbom_merge_graph::shared::error::{ExitCode, GraphMergeError};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Logs go to stderr so the report on stdout stays machine-readable
fn init_tracing(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;

    let format = resolve_format(&args, &config)?;
    let viewport = resolve_viewport(&args, &config)?;
    let documents = resolve_documents(&args, &config)?;
    let highlights = if args.highlight.is_empty() {
        config.highlight.clone().unwrap_or_default()
    } else {
        args.highlight.clone()
    };

    let request = WalkRequest::builder()
        .documents(documents)
        .viewport(viewport)
        .steps_back(args.back)
        .highlights(highlights)
        .build()
        .map_err(|e| {
            e.context("No documents to merge. Pass DOCUMENT arguments or list `documents` in the config file.")
        })?;

    // Create adapters (Dependency Injection)
    let document_loader = RoutingDocumentLoader::new()?;
    let progress_reporter = StderrProgressReporter::new();
    let use_case = WalkDocumentsUseCase::new(document_loader, progress_reporter);

    let response = use_case.execute(request).await?;

    eprintln!("{}", FormatterFactory::progress_message(format));
    let output = FormatterFactory::create(format).format(&response.read_model)?;
    PresenterFactory::create(PresenterType::from_output(args.output)).present(&output)?;

    Ok(if response.all_merged() {
        ExitCode::Success
    } else {
        ExitCode::DocumentsNotMerged
    })
}

fn load_config(args: &Args) -> Result<ConfigFile> {
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };
    Ok(config.unwrap_or_default())
}

fn resolve_format(args: &Args, config: &ConfigFile) -> Result<OutputFormat> {
    if let Some(format) = args.format {
        return Ok(format);
    }
    match config.format.as_deref() {
        Some(value) => value
            .parse()
            .map_err(|message| GraphMergeError::Validation { message }.into()),
        None => Ok(OutputFormat::default()),
    }
}

/// CLI flags override config values, which override the defaults
fn resolve_viewport(args: &Args, config: &ConfigFile) -> Result<Viewport> {
    let defaults = Viewport::default();
    let from_config = config.viewport.unwrap_or_default();

    Viewport::new(
        args.width.or(from_config.width).unwrap_or(defaults.width()),
        args.height.or(from_config.height).unwrap_or(defaults.height()),
        args.margin.or(from_config.margin).unwrap_or(defaults.margin()),
    )
}

/// CLI documents replace the config list; `--force` positions refer to them
fn resolve_documents(args: &Args, config: &ConfigFile) -> Result<Vec<DocumentRequest>> {
    if args.documents.is_empty() {
        if !args.force.is_empty() {
            return Err(GraphMergeError::Validation {
                message: "--force positions refer to DOCUMENT arguments, but none were given"
                    .to_string(),
            }
            .into());
        }
        return Ok(config.document_requests());
    }

    if let Some(position) = args
        .force
        .iter()
        .find(|&&pos| pos == 0 || pos > args.documents.len())
    {
        return Err(GraphMergeError::Validation {
            message: format!(
                "--force {} is out of range: positions run from 1 to {}",
                position,
                args.documents.len()
            ),
        }
        .into());
    }

    Ok(args
        .documents
        .iter()
        .enumerate()
        .map(|(i, document)| {
            DocumentRequest::new(
                DocumentSource::parse(document),
                MergeMode::from_force_flag(args.force.contains(&(i + 1))),
            )
        })
        .collect())
}
