use std::process::ExitCode;

use dialogue_types::config::AppConfig;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("The Dialogue Engine starting...");

    dialogue_app::run(AppConfig::default())
}
