//! Command line entry point for the raise allocation engine.

use std::fs::File;
use std::io::{self, BufWriter};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use raise_allocator::allocation::{AllocationParams, DEFAULT_RAISE_INCREMENT, allocate_raises};
use raise_allocator::api::{AppState, create_router};
use raise_allocator::budget::resolve_budget;
use raise_allocator::config::ConfigLoader;
use raise_allocator::io::{read_employees, write_raise_report};

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(
    name = "raise-allocator",
    about = "Distribute a raise budget to close pay gaps against level salary bands",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Allocate raises and write a tab-separated report
    Allocate {
        /// Tab-separated employee file (name, current_salary, level, manager)
        employees: PathBuf,

        /// Salary band file (.tsv or .yaml)
        salary_bands: PathBuf,

        /// Overall raise for the organisation, 0-100
        raise_percent: f64,

        /// Absolute raise budget in dollars, overriding the raise percent (0 = unset)
        #[arg(short = 'b', long)]
        raise_budget: Option<f64>,

        /// Dollars granted per allocation step
        #[arg(short = 'i', long, default_value_t = DEFAULT_RAISE_INCREMENT)]
        raise_increment: f64,

        /// Guaranteed raise for everyone, capped at the raise percent
        #[arg(short = 'm', long, default_value_t = 0.0)]
        minimum_raise_percent: f64,

        /// Report destination (default: stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Log allocation internals
        #[arg(long)]
        debug: bool,
    },

    /// Serve the allocation API over HTTP
    Serve {
        /// Salary band file (.tsv or .yaml)
        #[arg(long)]
        bands: PathBuf,

        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Allocate { debug: true, .. } => tracing::Level::DEBUG,
        _ => tracing::Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let result = match cli.command {
        Commands::Allocate {
            employees,
            salary_bands,
            raise_percent,
            raise_budget,
            raise_increment,
            minimum_raise_percent,
            output,
            debug: _,
        } => run_allocate(
            &employees,
            &salary_bands,
            raise_percent,
            raise_budget,
            raise_increment,
            minimum_raise_percent,
            output.as_deref(),
        ),
        Commands::Serve { bands, addr } => run_serve(&bands, addr),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "raise-allocator failed");
            ExitCode::FAILURE
        }
    }
}

fn run_allocate(
    employees_path: &Path,
    bands_path: &Path,
    raise_percent: f64,
    raise_budget: Option<f64>,
    raise_increment: f64,
    minimum_raise_percent: f64,
    output: Option<&Path>,
) -> CliResult {
    let employees = read_employees(employees_path)?;
    let config = ConfigLoader::load(bands_path)?;

    let budget = resolve_budget(&employees, raise_percent, forced_budget(raise_budget))?;
    let minimum_raise_percent = budget.cap_minimum_raise(minimum_raise_percent);
    info!(
        total_salaries = budget.total_salaries,
        raise_budget = budget.raise_budget,
        raise_percent = budget.raise_percent,
        minimum_raise_percent,
        "Resolved raise budget"
    );

    let params = AllocationParams::new(budget.raise_budget)
        .with_raise_increment(raise_increment)
        .with_minimum_raise_percent(minimum_raise_percent);
    let result = allocate_raises(&employees, config.bands(), &params)?;

    match output {
        Some(path) => {
            let file = File::create(path)?;
            write_raise_report(BufWriter::new(file), &employees, config.bands(), &result.stats)?;
            info!(path = %path.display(), "Wrote raise report");
        }
        None => write_raise_report(io::stdout().lock(), &employees, config.bands(), &result.stats)?,
    }

    info!(
        minimum_raise_total = result.budget.minimum_raise_total,
        distributed_total = result.budget.distributed_total,
        total_granted = result.total_granted(),
        "Allocation finished"
    );
    Ok(())
}

/// A `-b 0` on the command line means no override.
fn forced_budget(raise_budget: Option<f64>) -> Option<f64> {
    raise_budget.filter(|budget| *budget != 0.0)
}

fn run_serve(bands_path: &Path, addr: SocketAddr) -> CliResult {
    let config = ConfigLoader::load(bands_path)?;
    let router = create_router(AppState::new(config));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!(%addr, "Listening");
        axum::serve(listener, router).await
    })?;
    Ok(())
}
