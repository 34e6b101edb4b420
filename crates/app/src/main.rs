mod bootstrap;
mod telemetry;

use tracing::info;
use cms_settings_core::notifications;
use cms_settings_util::{load_env_file, AppConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    load_env_file();
    let config = AppConfig::from_env()?;

    telemetry::init_tracing(&config)?;

    let registry = notifications();
    let report = bootstrap::initialize_notifications(&config, registry)?;
    if config.environment.is_development() && !report.is_clean() {
        info!(stage = "app", report = %serde_json::to_string(&report)?, "overlay report");
    }

    println!("{}", bootstrap::render_configuration(registry)?);
    Ok(())
}
