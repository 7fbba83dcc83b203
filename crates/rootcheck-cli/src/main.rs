use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rootcheck_core::CheckReport;

mod check_cmd;
mod self_test_cmd;

#[derive(Parser)]
#[command(name = "rootcheck", about = "Smoke-check that an HTTP app answers GET / with 200")]
struct Cli {
    /// Target base URL
    #[arg(long, env = "ROOTCHECK_URL", default_value = "http://localhost:3000")]
    url: String,

    /// Print the report as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe a running server over HTTP
    Check {
        /// Path to request
        #[arg(long, default_value = "/")]
        path: String,

        /// Exact status code the target must answer with
        #[arg(long, default_value_t = 200)]
        expect: u16,

        /// Seconds to wait for the response
        #[arg(long, default_value_t = 5)]
        timeout_secs: u64,
    },

    /// Probe an in-process instance of the bundled app
    SelfTest {
        /// Status the in-process root route should answer with
        #[arg(long, default_value_t = 200)]
        root_status: u16,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let report = match cli.command {
        Commands::Check {
            path,
            expect,
            timeout_secs,
        } => check_cmd::run(&cli.url, &path, expect, timeout_secs).await,
        Commands::SelfTest { root_status } => self_test_cmd::run(root_status).await?,
    };

    print_report(&report, cli.json)?;
    finish(&report)
}

/// Turn the verdict into the process result; a failed check exits non-zero.
fn finish(report: &CheckReport) -> anyhow::Result<()> {
    if !report.passed {
        anyhow::bail!(
            "{}",
            report.error.as_deref().unwrap_or("smoke check failed")
        );
    }
    Ok(())
}

fn print_report(report: &CheckReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
