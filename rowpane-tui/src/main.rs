use std::fs::File;
use std::path::PathBuf;

use directories::ProjectDirs;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use rowpane_core::ViewerConfig;

use rowpane_tui::app::App;
use rowpane_tui::error::AppError;

/// Default config location: `<config dir>/rowpane/viewer.json`.
fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("dev", "rowpane", "rowpane")
        .map(|dirs| dirs.config_dir().join("viewer.json"))
}

struct Args {
    config_path: Option<PathBuf>,
    data_path: PathBuf,
}

fn parse_args() -> Result<Args, AppError> {
    let mut config_path = None;
    let mut data_path = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                config_path = Some(PathBuf::from(args.next().ok_or(AppError::Usage)?));
            }
            "--help" | "-h" => return Err(AppError::Usage),
            _ if data_path.is_none() => data_path = Some(PathBuf::from(arg)),
            _ => return Err(AppError::Usage),
        }
    }

    Ok(Args {
        config_path,
        data_path: data_path.ok_or(AppError::Usage)?,
    })
}

fn load_config(explicit: Option<PathBuf>) -> Result<ViewerConfig, AppError> {
    let path = match explicit {
        Some(path) => path,
        None => default_config_path()
            .filter(|p| p.exists())
            .ok_or_else(|| {
                AppError::Config(rowpane_core::ConfigError::Invalid(
                    "no viewer config found; pass --config <viewer.json>".into(),
                ))
            })?,
    };
    Ok(ViewerConfig::load(path)?)
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let args = parse_args()?;
    let config = load_config(args.config_path)?;

    let log_file = File::create("rowpane-tui.log")?;
    let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    info!("starting viewer for {}", args.data_path.display());

    App::new(config, args.data_path).run().await
}
