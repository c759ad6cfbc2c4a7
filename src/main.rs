// algotty: step-by-step algorithm visualizer for the terminal

use std::io::{self, Write};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use algotty::algorithms::{self, AlgorithmKind, RunConfig};
use algotty::bst::local::LocalBstService;
use algotty::config::{Config, USAGE};
use algotty::errors::ConfigError;
use algotty::logging;
use algotty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(ConfigError::HelpRequested) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    if config.dump {
        return dump(&config);
    }

    if let Err(e) = logging::init(&config.log_path()) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config, Box::new(LocalBstService::new()));
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "tui exited with an error");
        eprintln!("Error: {}", err);
    }

    Ok(())
}

/// Print the selected run's steps as JSON
fn dump(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    if config.log_file.is_some() {
        logging::init(&config.log_path())?;
    }

    if config.algorithm.kind() == AlgorithmKind::Tree {
        eprintln!(
            "Error: '{}' is a tree operation; --dump supports array algorithms",
            config.algorithm.id()
        );
        std::process::exit(2);
    }

    let run = RunConfig::new(config.algorithm, config.array.clone(), config.target);
    let steps = algorithms::run(&run)?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &steps)?;
    writeln!(stdout)?;
    Ok(())
}
