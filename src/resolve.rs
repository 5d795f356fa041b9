//! v8-symbolize resolve command implementation.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::error::Result;
use crate::session::Session;
use crate::{filebuf, global};

/// Reads the engine log and prints one resolved frame per tick sample,
/// in log order.
pub fn run(log_path: &Path, output_path: Option<&Path>) -> Result<()> {
    let reader = filebuf::open(log_path)?;
    match output_path {
        None => resolve(reader, io::stdout()),
        Some(output_path) => resolve(reader, filebuf::open_w(output_path)?),
    }
}

/// Applies the log line by line, writing resolved samples as they appear.
fn resolve(mut reader: impl BufRead, mut output: impl Write) -> Result<()> {
    if global::verbose() {
        tracing::info!("Reading engine log, resolving samples...")
    }

    let mut session = Session::new();
    let mut line = String::with_capacity(512);
    let mut bytes_read = usize::MAX;
    let mut lc = 0_usize;

    while bytes_read != 0 {
        bytes_read = filebuf::read_line(&mut reader, &mut line)?;
        lc += 1;
        if let Some(frame) = session.process_line(&line, lc)? {
            writeln!(output, "{}", frame)?;
        }
    }
    output.flush()?;

    if global::verbose() {
        tracing::info!(
            "Resolved {} of {} samples against {} live symbols",
            session.resolved_samples(),
            session.total_samples(),
            session.symbols().len()
        )
    }
    Ok(())
}
