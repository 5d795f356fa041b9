//! v8-symbolize main module.
//!
//! This program reads an engine log produced by the V8 JavaScript engine
//! and resolves sampled program counters against the JIT code blocks the
//! log describes, annotating each tick with function name, script resource
//! and line number.
//!
//! You can produce such a log by running Node.js with `node --prof`, or
//! Chromium with `--no-sandbox --js-flags=--prof`.

#![forbid(unsafe_code)]
#![deny(warnings)]

mod cli;

use v8_symbolize::error::Result;
use v8_symbolize::{config, dump, global, resolve};

fn main() {
    init_logger();
    if let Err(err) = execute(cli::application()) {
        eprintln!("Error: {:#}", err);
        std::process::exit(config::FAILURE);
    }
}

/// Initializes the logger.
fn init_logger() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();
}

/// Dispatches CLI commands.
fn execute(app: cli::Application) -> Result<()> {
    global::set_verbose(app.verbose);

    match app.cmd {
        cli::Command::Resolve { log, output } => {
            resolve::run(
                &log,
                output.as_ref().map(|p| p.as_ref()), // Option<T> -> Option<&T>
            )?;
        }

        cli::Command::Dump { log, output } => {
            dump::run(
                &log,
                output.as_ref().map(|p| p.as_ref()), // Option<T> -> Option<&T>
            )?;
        }
    }

    Ok(())
}
