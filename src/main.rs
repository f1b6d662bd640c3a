use employee_manager::app::App;
use employee_manager::config::Config;
use employee_manager::core::Database;
use employee_manager::logging;
use employee_manager::prompt::Prompter;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    // Initialize the logging system using tracing subscriber
    if let Err(e) = logging::init(&config.logging) {
        eprintln!("{}", e);
    }

    info!("Starting employee-manager...");

    let db = match Database::connect(&config.database) {
        Ok(db) => db,
        Err(e) => {
            error!(error = %e, "startup aborted");
            eprintln!("Failed to connect to database: {}", e);
            return ExitCode::FAILURE;
        }
    };
    println!("Connected to database.");

    let stdin = io::stdin();
    let color = io::stdout().is_terminal();
    let mut app = App::new(db, Prompter::new(stdin.lock(), io::stdout())).with_color(color);
    match app.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "session aborted");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
