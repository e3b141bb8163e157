use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use grooming_log::modules::appointments::use_cases::interaction::intent::Intent;
use grooming_log::shared::infrastructure::clock::{Clock, SystemClock};
use grooming_log::shell::config::AppConfig;
use grooming_log::shell::render::{render_dashboard, render_history};
use grooming_log::shell::state::AppState;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let config = AppConfig::from_env().context("reading configuration")?;
    let mut state = AppState::bootstrap(config);
    let now = SystemClock.now();

    let dashboard = state.controller.dashboard();
    println!("{}", render_dashboard(&dashboard, now));

    if let Some(nearest) = dashboard.nearest {
        state
            .controller
            .handle(Intent::BrowseHistory {
                client: Some(nearest.client_name),
            })
            .context("opening client history")?;
        if let Some(history) = state.controller.selected_history() {
            println!();
            println!("{}", render_history(&history, now));
        }
    }

    Ok(())
}
