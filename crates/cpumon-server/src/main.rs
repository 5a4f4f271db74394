//! CPU Monitor
//!
//! Serves host-wide CPU utilization at `GET /cpu`.
//!
//! | Mode | Command | Description |
//! |------|---------|-------------|
//! | **Standalone** | `cpumon --run` | Foreground process, stops on SIGINT/SIGTERM |
//! | **Supervised** | `cpumon` | Windows service (`CpuMonitor`); signal-driven elsewhere |

use clap::Parser;
use cpumon_server::run;

/// Command line interface for the CPU monitor
#[derive(Parser, Debug)]
#[command(name = "cpumon")]
#[command(about = "Host CPU utilization over HTTP")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Run in the foreground instead of as a supervised service
    #[arg(long, help = "Run standalone until interrupted")]
    pub run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref(), cli.run).await
}
