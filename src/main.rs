use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use liveroot::config::Config;
use liveroot::mount::{self, SystemProcessRunner};

#[derive(Parser)]
#[command(name = "liveroot", about = "Layered root filesystem assembly for live images")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Mount all system archives and union them with a writable branch
    Mount {
        /// Path of the live system (contains the live/ archive directory)
        system_path: PathBuf,
        /// Writable mount point that becomes the first branch
        read_write_mount_point: String,
    },
    /// Unmount a device or mount point
    Umount {
        /// Device or mount point to unmount
        target: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "liveroot=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let runner = SystemProcessRunner;

    match cli.command {
        Command::Mount { system_path, read_write_mount_point } => {
            let union_root =
                mount::assemble(&runner, &config, &system_path, &read_write_mount_point).await?;
            println!("{}", union_root.display());
        }
        Command::Umount { target } => {
            mount::unmount(&runner, &target).await?;
        }
    }

    Ok(())
}
