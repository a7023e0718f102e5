use clap::{Parser, ValueEnum};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use wayfare::core::config;
use wayfare::core::tab::Tab;
use wayfare::tui;

/// CLI-facing tab names; kept separate so the core enum stays clap-free.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum StartTab {
    Home,
    Shop,
    Settings,
}

impl From<StartTab> for Tab {
    fn from(tab: StartTab) -> Tab {
        match tab {
            StartTab::Home => Tab::Home,
            StartTab::Shop => Tab::Shop,
            StartTab::Settings => Tab::Settings,
        }
    }
}

#[derive(Parser)]
#[command(name = "wayfare", about = "Terminal demo of stack-based tab navigation")]
struct Args {
    /// Tab to select at startup
    #[arg(short, long, value_enum)]
    tab: Option<StartTab>,

    /// Milliseconds before the shimmer demo flips to loaded
    #[arg(long)]
    loading_delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - stdout belongs to the TUI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("wayfare.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("wayfare: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(
        &file_config,
        args.tab.map(Tab::from),
        args.loading_delay_ms,
    );

    log::info!("Wayfare starting up with config: {:?}", resolved);

    tui::run(resolved)
}
