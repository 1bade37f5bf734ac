//! Booking - appointment booking built from three composable patterns.
//!
//! Entry point of the booking demonstration. The library side lives in
//! `src/lib.rs`; this binary only parses arguments, sets up logging and runs the
//! configured [`Scenario`].
//!
//! # Usage
//!
//! ```bash
//! booking
//! booking --scenario morning.yaml
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`). Logs go to stderr.
//! - `BOOKING_TITLE` - Overrides the scenario title

use std::rc::Rc;

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use booking::{config::Config, console::StdoutConsole, scenario::Scenario};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a YAML scenario file.
    ///
    /// When omitted, the built-in demonstration runs. See [`booking::config`]
    /// for the expected format.
    #[arg(short, long)]
    scenario: Option<String>,
}

fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting booking {}...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config = match Config::load(args.scenario.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load scenario: {:#}", e);
            return;
        }
    };

    Scenario::new(config, Rc::new(StdoutConsole)).run();
}
