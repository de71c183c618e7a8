use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use log::{LevelFilter, info, warn};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};

use ctpgen::catalog::ToolCatalog;
use ctpgen::domain::{ExecutionMode, GeneratedArtifact};
use ctpgen::ipc::serve_stdio;
use ctpgen::service::{Operation, ToolService};
use ctpgen::template::{HelperSet, TemplateRenderer, TemplateSet};

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::Config;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ctpgen")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("ctpgen.log");

    // stdout carries protocol frames, so logs go to a file
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // Without RUST_LOG the max level gates output until config is read
    let env = env_logger::Env::default().default_filter_or("trace");
    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Pipe(target))
        .init();
    if !rust_log_set() {
        log::set_max_level(LevelFilter::Info);
    }

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn rust_log_set() -> bool {
    std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_some()
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    level.trim().parse().ok()
}

/// Apply the configured level unless RUST_LOG is in charge
fn apply_log_level(level: Option<&str>) {
    let Some(level) = level else { return };
    if rust_log_set() {
        return;
    }
    match parse_level(level) {
        Some(filter) => log::set_max_level(filter),
        None => warn!("Unknown log level '{}', keeping info", level),
    }
}

fn build_service(config: &Config) -> Result<ToolService> {
    let templates = TemplateSet::load(config.templates.dir.as_deref()).context("Failed to load templates")?;
    let renderer = TemplateRenderer::new(&templates, HelperSet::standard());
    let catalog = ToolCatalog::load(config.catalog.path.as_deref()).context("Failed to load known-tools catalog")?;

    info!(
        "Loaded {} template(s) and {} known tool(s)",
        templates.len(),
        catalog.len()
    );

    Ok(ToolService::new(renderer, catalog)
        .with_layout(config.generation.layout())
        .with_next_steps(config.generation.next_steps.clone()))
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        eprintln!("{}", "Verbose mode enabled".yellow());
    }

    let service = build_service(config)?;

    match &cli.command {
        None | Some(Commands::Serve) => run_server(&service, config),
        Some(Commands::Create {
            description,
            name,
            category,
            mode,
            out,
        }) => {
            let params = json!({
                "description": description,
                "name": name,
                "category": category,
                "executionMode": mode.map(|m| ExecutionMode::from(m).as_str()),
            });
            let payload = run_operation(&service, Operation::CreateTool, &params)?;
            if let Some(dir) = out {
                let files: Vec<GeneratedArtifact> =
                    serde_json::from_value(payload["files"].clone()).context("Unexpected create-tool payload")?;
                write_artifacts(dir, &files)?;
            }
            Ok(())
        }
        Some(Commands::Search { description, category }) => {
            let params = json!({"description": description, "category": category});
            run_operation(&service, Operation::SearchDuplicates, &params).map(|_| ())
        }
        Some(Commands::Validate { file }) => {
            let params = json!({"definition": read_definition(file)?});
            run_operation(&service, Operation::ValidateTool, &params).map(|_| ())
        }
        Some(Commands::Implement { file, mode }) => {
            let params = json!({
                "definition": read_definition(file)?,
                "executionMode": mode.map(|m| ExecutionMode::from(m).as_str()),
            });
            run_operation(&service, Operation::GenerateImplementation, &params).map(|_| ())
        }
        Some(Commands::Tests { file }) => {
            let params = json!({"definition": read_definition(file)?});
            run_operation(&service, Operation::GenerateTests, &params).map(|_| ())
        }
        Some(Commands::Operations) => run_operation(&service, Operation::ListOperations, &json!({})).map(|_| ()),
    }
}

fn run_server(service: &ToolService, config: &Config) -> Result<()> {
    info!("Serving on stdio");
    eprintln!("{}", "CTP tool server running on stdio".cyan());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build runtime")?;

    let stats = runtime
        .block_on(serve_stdio(service, config.server.max_message_bytes))
        .context("Server failed")?;

    eprintln!(
        "{} {} request(s), {} malformed",
        "Input closed:".green(),
        stats.requests,
        stats.malformed
    );
    Ok(())
}

/// Dispatch once and print the payload; a failed payload is an error
fn run_operation(service: &ToolService, operation: Operation, params: &Value) -> Result<Value> {
    info!("Running {} from the command line", operation);
    let payload = service.dispatch(operation.name(), params);

    println!("{}", serde_json::to_string_pretty(&payload).context("Failed to serialize result")?);

    if payload["success"].as_bool() == Some(true) {
        Ok(payload)
    } else {
        Err(eyre!("{} failed", operation.alias()))
    }
}

fn read_definition(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).context(format!("Failed to read definition {}", path.display()))?;
    serde_json::from_str(&content).context(format!("Failed to parse definition {}", path.display()))
}

fn write_artifacts(dir: &Path, files: &[GeneratedArtifact]) -> Result<()> {
    for file in files {
        let path = dir.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context(format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, &file.content).context(format!("Failed to write {}", path.display()))?;
        eprintln!("{} {}", "Wrote".green(), path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    apply_log_level(config.log_level.as_deref());

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
