//! v8-symbolize symbol table module.

use std::io::Write;

use crate::config::Address;
use crate::error::Result;
use crate::span::AddressSpan;
use crate::symbol::Symbol;

/// Holds the address-to-symbol map for the profile data: the live code
/// blocks of the monitored process, ordered by start address.
///
/// Stored spans are kept pairwise disjoint: inserting a span that overlaps
/// existing entries evicts them (collisions overwrite the previous value).
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    /// Creates new empty symbol table.
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Adds a symbol to the table.
    ///
    /// Entries overlapping the new span are replaced. The log data is
    /// expected to keep live spans disjoint, so every replacement of a
    /// span other than the exact same one is reported as suspicious.
    pub fn insert(&mut self, symbol: Symbol) {
        let span = *symbol.span();
        let lo = self.symbols.partition_point(|s| s.span().end() < span.address());
        let hi = lo + self.symbols[lo..].partition_point(|s| s.span().address() <= span.end());
        for evicted in self.symbols.drain(lo..hi) {
            if evicted.span() == &span {
                tracing::debug!("SymbolTable.insert replaces {}", evicted);
            } else {
                tracing::warn!("Overlapping code block replaced: {} by {}", evicted, symbol);
            }
        }
        tracing::debug!("SymbolTable.insert {}", symbol);
        self.symbols.insert(lo, symbol);
    }

    /// Looks up the symbol whose span contains the address (if any).
    pub fn lookup(&self, address: Address) -> Option<&Symbol> {
        let idx = self.symbols.partition_point(|s| s.span().address() <= address);
        self.symbols[..idx]
            .last()
            .filter(|s| s.span().contains(address))
    }

    /// Removes and returns the symbol whose span overlaps the given one.
    /// Removing a span with no match is a no-op.
    pub fn remove(&mut self, span: &AddressSpan) -> Option<Symbol> {
        let idx = self.symbols.partition_point(|s| s.span().end() < span.address());
        if idx < self.symbols.len() && self.symbols[idx].span().overlaps(span) {
            let symbol = self.symbols.remove(idx);
            tracing::debug!("SymbolTable.remove {}", symbol);
            Some(symbol)
        } else {
            tracing::debug!("SymbolTable.remove misses {}", span);
            None
        }
    }

    /// Returns number of live symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Checks if the table has no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns iterator over the symbols in address order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Writes a listing of the table intended for debugging.
    pub fn write_table(&self, mut output: impl Write) -> Result<()> {
        writeln!(output, "# v8-symbolize symbol table")?;
        writeln!(output, "symbols: {}", self.len())?;
        for symbol in &self.symbols {
            writeln!(
                output,
                "{} {} {} {}",
                symbol.span(),
                symbol.span().length(),
                symbol.symbol_type().name(),
                symbol.name(),
            )?;
        }
        output.flush()?;
        Ok(())
    }
}
