// Event Scheduler Application
// Main entry point

use event_scheduler::config::AppConfig;
use event_scheduler::services::event::EventManager;
use event_scheduler::ui_egui::SchedulerApp;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Event Scheduler");

    let config = AppConfig::load();
    let db_path = config.resolve_database_path();

    let manager = match EventManager::open(&db_path) {
        Ok(manager) => manager,
        Err(e) => {
            log::error!("Failed to open database {}: {:#}", db_path.display(), e);
            eprintln!("Error: could not open database {}: {:#}", db_path.display(), e);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Scheduler App")
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Scheduler App",
        options,
        Box::new(|cc| Ok(Box::new(SchedulerApp::new(cc, manager, config)))),
    )
}
