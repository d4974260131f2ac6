use std::error::Error;

use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use dotenvy::dotenv;
use industry_dashboard::config::{self, AppConfig};
use industry_dashboard::store::SeedData;
use industry_dashboard::ui::DashboardApp;
use industry_dashboard::Dashboard;

#[derive(Parser)]
#[command(
    name = "industry_dashboard",
    version,
    about = "Announcements feed, group chat and notifications over in-memory data"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// JSON seed file (overrides `seed_path` from the config)
    #[arg(long, value_name = "FILE")]
    seed: Option<String>,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Clone)]
enum Mode {
    /// Print one collection as JSON, in display order
    List {
        #[arg(value_enum)]
        resource: Resource,
    },
    /// Print announcements and messages matching a query as JSON
    Search { query: String },
    /// Write the default config to the --config path
    InitConfig,
}

#[derive(ValueEnum, Clone, Copy)]
enum Resource {
    Announcements,
    Messages,
    Notifications,
}

fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    // Khởi tạo Logger để debug
    env_logger::init();

    let cli = Cli::parse();

    if let Some(Mode::InitConfig) = cli.mode {
        config::save_config(&cli.config, &AppConfig::default())?;
        log::info!("Wrote default config to {}", cli.config);
        return Ok(());
    }

    let app_config = config::load_config(&cli.config);
    let dashboard = build_dashboard(&app_config, cli.seed.as_deref())?;

    match cli.mode {
        Some(Mode::List { resource }) => {
            let json = match resource {
                Resource::Announcements => serde_json::to_string_pretty(dashboard.announcements())?,
                Resource::Messages => serde_json::to_string_pretty(dashboard.messages())?,
                Resource::Notifications => serde_json::to_string_pretty(dashboard.notifications())?,
            };
            println!("{json}");
            Ok(())
        }
        Some(Mode::Search { query }) => {
            println!("{}", serde_json::to_string_pretty(&dashboard.search(&query))?);
            Ok(())
        }
        Some(Mode::InitConfig) => Ok(()),
        None => run_ui(dashboard),
    }
}

fn build_dashboard(
    app_config: &AppConfig,
    seed_override: Option<&str>,
) -> Result<Dashboard, Box<dyn Error>> {
    let seed = match seed_override.or(app_config.seed_path.as_deref()) {
        Some(path) => SeedData::load(path)?,
        None => SeedData::mock(Utc::now()),
    };
    Ok(Dashboard::new(app_config, seed)?)
}

fn run_ui(dashboard: Dashboard) -> Result<(), Box<dyn Error>> {
    let options = eframe::NativeOptions::default();
    log::info!("Starting dashboard UI");

    eframe::run_native(
        "Industry Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, dashboard)))),
    )?;
    Ok(())
}
