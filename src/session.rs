//! v8-symbolize parsing session module.

use std::fmt;

use crate::alias::{AliasDictionary, AliasEntry};
use crate::config::{Address, AddressLength, AliasValue};
use crate::decode::AddressDecoder;
use crate::error::{Error, Result};
use crate::log;
use crate::span::AddressSpan;
use crate::symbol::Symbol;
use crate::table::SymbolTable;

/// Delta stream of code addresses.
const CODE_STREAM: &str = "code";
/// Delta stream of stack addresses.
const STACK_STREAM: &str = "stack";

/// A program counter sample, as resolved against the symbol table at the
/// point of the log where it was taken.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    address: Address,
    symbol: Option<Symbol>,
}

impl Frame {
    /// Returns the sampled program counter.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns the symbol owning the sampled address (if any).
    pub fn symbol(&self) -> Option<&Symbol> {
        self.symbol.as_ref()
    }

    /// Checks if the sample fell inside a known code block.
    pub const fn is_resolved(&self) -> bool {
        self.symbol.is_some()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.symbol {
            Some(symbol) if symbol.resource_url().is_empty() => {
                write!(
                    f,
                    "{:#x} {} {}",
                    self.address,
                    symbol.name(),
                    symbol.symbol_type().name()
                )
            }
            Some(symbol) => write!(
                f,
                "{:#x} {} {}:{} {}",
                self.address,
                symbol.name(),
                symbol.resource_url(),
                symbol.resource_line(),
                symbol.symbol_type().name()
            ),
            None => write!(f, "{:#x} <unresolved>", self.address),
        }
    }
}

/// Holds the decoding state of one engine log: the alias dictionaries, the
/// address decoder and the symbol table built from code events, applied
/// strictly in log order.
#[derive(Debug, Default)]
pub struct Session {
    actions: AliasDictionary,
    symbol_types: AliasDictionary,
    decoder: AddressDecoder,
    symbols: SymbolTable,
    samples_total: usize,
    samples_resolved: usize,
}

impl Session {
    /// Creates new empty session.
    pub fn new() -> Self {
        Session::default()
    }

    /// Applies one log record. Code events mutate the symbol table and
    /// yield nothing; a tick record yields the resolved sample. Records of
    /// unrelated kinds, and records referring to alias codes never seen,
    /// are skipped.
    pub fn process_line(&mut self, line: &str, lc: usize) -> Result<Option<Frame>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let fields = log::split_fields(line);
        if fields.is_empty() {
            return Ok(None);
        }

        let action = match self.action_name(&fields[0]) {
            Some(action) => action,
            None => {
                tracing::warn!("Unknown action code '{}' at line {}", fields[0], lc);
                return Ok(None);
            }
        };

        match action.as_str() {
            log::CODE_CREATION => {
                if fields.len() < 5 {
                    return Err(Error::LogParsing(line.into(), lc));
                }
                let symbol_type = match self.symbol_type_entry(&fields[1]) {
                    Some(entry) => entry,
                    None => {
                        tracing::warn!("Unknown symbol-type code '{}' at line {}", fields[1], lc);
                        return Ok(None);
                    }
                };
                let address = self.decoder.decode_field(CODE_STREAM, &fields[2], lc)?;
                let length = fields[3]
                    .parse::<AddressLength>()
                    .map_err(|_| Error::LogParsing(line.into(), lc))?;
                let symbol = Symbol::new(&fields[4], symbol_type, address, length);
                self.symbols.insert(symbol);
            }

            log::CODE_MOVE => {
                if fields.len() < 3 {
                    return Err(Error::LogParsing(line.into(), lc));
                }
                let from = self.decoder.decode_field(CODE_STREAM, &fields[1], lc)?;
                let to = self.decoder.decode_field(CODE_STREAM, &fields[2], lc)?;
                match self.symbols.remove(&AddressSpan::new(from, 0)) {
                    Some(symbol) => self.symbols.insert(symbol.relocated(to)),
                    None => tracing::debug!("code-move misses {:#x} at line {}", from, lc),
                }
            }

            log::CODE_DELETE => {
                if fields.len() < 2 {
                    return Err(Error::LogParsing(line.into(), lc));
                }
                let address = self.decoder.decode_field(CODE_STREAM, &fields[1], lc)?;
                if self.symbols.remove(&AddressSpan::new(address, 0)).is_none() {
                    tracing::debug!("code-delete misses {:#x} at line {}", address, lc);
                }
            }

            log::TICK => {
                if fields.len() < 2 {
                    return Err(Error::LogParsing(line.into(), lc));
                }
                let pc = self.decoder.decode_field(CODE_STREAM, &fields[1], lc)?;
                if fields.len() > 2 {
                    // Keeps the stack stream current; the value itself is
                    // not needed for symbolication.
                    let _sp = self.decoder.decode_field(STACK_STREAM, &fields[2], lc)?;
                }
                return Ok(Some(self.sample(pc)));
            }

            _ => tracing::debug!("Skip '{}' record at line {}", action, lc),
        }

        Ok(None)
    }

    /// Looks up the symbol currently owning the address (if any).
    pub fn resolve(&self, address: Address) -> Option<&Symbol> {
        self.symbols.lookup(address)
    }

    /// Returns the symbol table in its current state.
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Returns number of tick samples seen so far.
    pub const fn total_samples(&self) -> usize {
        self.samples_total
    }

    /// Returns number of tick samples that fell inside a known code block.
    pub const fn resolved_samples(&self) -> usize {
        self.samples_resolved
    }

    /// Resolves a sampled program counter into a frame and counts it.
    fn sample(&mut self, address: Address) -> Frame {
        let symbol = self.symbols.lookup(address).cloned();
        self.samples_total += 1;
        if symbol.is_some() {
            self.samples_resolved += 1;
        }
        Frame { address, symbol }
    }

    /// Resolves the action field: a literal name registers itself, a bare
    /// integer refers to an already registered name.
    fn action_name(&mut self, field: &str) -> Option<String> {
        match field.parse::<AliasValue>() {
            Ok(value) => self
                .actions
                .lookup_by_value(value)
                .map(|entry| entry.name().to_string()),
            Err(_) => Some(self.actions.resolve(field).name().to_string()),
        }
    }

    /// Resolves the symbol-type field the same way as the action field.
    fn symbol_type_entry(&mut self, field: &str) -> Option<AliasEntry> {
        match field.parse::<AliasValue>() {
            Ok(value) => self.symbol_types.lookup_by_value(value).cloned(),
            Err(_) => Some(self.symbol_types.resolve(field).clone()),
        }
    }
}
