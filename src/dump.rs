//! v8-symbolize dump command implementation.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::error::Result;
use crate::session::Session;
use crate::{filebuf, global};

/// Reads the engine log and prints the symbol table as it stands after the
/// last code event.
pub fn run(log_path: &Path, output_path: Option<&Path>) -> Result<()> {
    let reader = filebuf::open(log_path)?;
    match output_path {
        None => dump(reader, io::stdout()),
        Some(output_path) => dump(reader, filebuf::open_w(output_path)?),
    }
}

/// Applies the whole log, then writes the table listing.
fn dump(mut reader: impl BufRead, output: impl Write) -> Result<()> {
    if global::verbose() {
        tracing::info!("Reading engine log, building symbol table...")
    }

    let mut session = Session::new();
    let mut line = String::with_capacity(512);
    let mut bytes_read = usize::MAX;
    let mut lc = 0_usize;

    while bytes_read != 0 {
        bytes_read = filebuf::read_line(&mut reader, &mut line)?;
        lc += 1;
        session.process_line(&line, lc)?;
    }

    session.symbols().write_table(output)
}
