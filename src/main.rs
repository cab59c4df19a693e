//! Command-line entry point for the PAYE engine.
//!
//! `payee calculate` prints the figures for one salary; `payee serve` runs
//! the HTTP API.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use payee_engine::api::{AppState, create_router};
use payee_engine::calculation::calculate_payee;
use payee_engine::config::ConfigLoader;
use payee_engine::display::FormattedTaxResult;
use payee_engine::models::{DeductionToggles, SalaryInput};

#[derive(Parser, Debug)]
#[command(name = "payee")]
#[command(version, about = "Nigerian PAYE income tax calculator")]
struct Cli {
    /// Log level used when RUST_LOG is not set (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    /// Directory holding schedule.yaml and brackets.yaml; the statutory
    /// schedule is used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate PAYE for a gross monthly salary
    Calculate {
        /// Gross monthly salary in naira
        #[arg(allow_negative_numbers = true)]
        monthly_salary: Decimal,

        /// Do not deduct pension
        #[arg(long)]
        no_pension: bool,

        /// Deduct National Housing Fund
        #[arg(long)]
        nhf: bool,

        /// Deduct National Health Insurance Scheme
        #[arg(long)]
        nhis: bool,

        /// Print the full breakdown as JSON
        #[arg(long)]
        json: bool,
    },
    /// Serve the HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = match &cli.config {
        Some(dir) => ConfigLoader::load(dir)
            .with_context(|| format!("loading schedule from {}", dir.display()))?,
        None => ConfigLoader::statutory(),
    };

    match cli.command {
        Command::Calculate {
            monthly_salary,
            no_pension,
            nhf,
            nhis,
            json,
        } => {
            let toggles = DeductionToggles {
                pension: !no_pension,
                nhf,
                nhis,
            };
            let input = SalaryInput::new(monthly_salary, toggles)?;
            let calculation = calculate_payee(&input, config.schedule())?;

            if json {
                println!("{}", serde_json::to_string_pretty(&calculation)?);
            } else {
                let formatted = FormattedTaxResult::from(&calculation.result);
                println!("{:<22} {:>20}", "Description", "Amount");
                println!("{:<22} {:>20}", "PAYE per annum", formatted.annual_tax);
                println!("{:<22} {:>20}", "Monthly Tax Pay", formatted.monthly_tax);
                println!(
                    "{:<22} {:>20}",
                    "Monthly Pension", formatted.monthly_pension_deduction
                );
                println!(
                    "{:<22} {:>20}",
                    "Net Monthly Salary", formatted.net_monthly_salary
                );
                for warning in &calculation.audit_trace.warnings {
                    eprintln!("warning [{}]: {}", warning.code, warning.message);
                }
            }
        }
        Command::Serve { addr } => {
            let router = create_router(AppState::new(config));
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("binding {}", addr))?;
            info!(%addr, "PAYE engine listening");
            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
    }

    Ok(())
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "payee_engine={default_level},payee={default_level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
