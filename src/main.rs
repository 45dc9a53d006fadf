use anyhow::{Context, Result};
use calcpad::calculator::{CalculatorEngine, copy_to_clipboard};
use calcpad::config::Config;
use calcpad::keys::{Keymap, tokenize};
use calcpad::logging;
use clap::Parser;
use std::io::{self, BufRead};
use std::path::PathBuf;

/// Keypad calculator driven by key scripts.
///
/// Every non-space character of a script is one key press; named keys are
/// written in angle brackets (`<Enter>`, `<Backspace>`, `<Escape>`).
/// Without scripts, one script is read per line from stdin.
#[derive(Parser)]
#[command(name = "calcpad", version)]
struct Cli {
    /// Key scripts, applied in order to one calculator
    scripts: Vec<String>,

    /// Print the display after every key
    #[arg(long)]
    trace: bool,

    /// Print the final engine state as JSON
    #[arg(long)]
    json: bool,

    /// Copy the final display text to the clipboard
    #[arg(long)]
    copy: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

struct Session {
    engine: CalculatorEngine,
    keymap: Keymap,
    trace: bool,
}

impl Session {
    fn run_script(&mut self, script: &str) {
        for key in tokenize(script) {
            let action = match self.keymap.resolve(&key) {
                Ok(action) => action,
                Err(e) => {
                    tracing::warn!("{}", e);
                    continue;
                }
            };
            self.engine.apply(action);
            if self.trace {
                println!("{:>12}  {}", key, self.engine.display_text());
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            logging::init();
            return Err(e).context("Failed to load configuration");
        }
    };
    logging::init_with_config(&config.logging);

    let mut session = Session {
        engine: CalculatorEngine::new(),
        keymap: Keymap::with_overrides(&config.keys),
        trace: cli.trace,
    };

    if cli.scripts.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read from stdin")?;
            session.run_script(&line);
            println!("{}", session.engine.display_text());
        }
    } else {
        for script in &cli.scripts {
            session.run_script(script);
        }
        if !cli.json {
            println!("{}", session.engine.display_text());
        }
    }

    if cli.json {
        let snapshot = serde_json::to_string_pretty(&session.engine.snapshot())?;
        println!("{}", snapshot);
    }

    if cli.copy {
        copy_to_clipboard(session.engine.display_text())
            .context("Failed to copy result to clipboard")?;
    }

    Ok(())
}
