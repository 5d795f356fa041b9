//! v8-symbolize symbol record module.

use std::fmt;

use crate::alias::AliasEntry;
use crate::config::{Address, AddressLength, LineNumber};
use crate::span::AddressSpan;

/// code-creation records in the log create these symbols, used to look up
/// program counter values from the tick data.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    name: String,
    resource_url: String,
    resource_line: LineNumber,
    symbol_type: AliasEntry,
    span: AddressSpan,
}

impl Symbol {
    /// Creates new symbol from the raw name field of a code-creation record.
    ///
    /// The raw field is either a bare name or `name url[:line]`; a missing
    /// or unparsable line suffix defaults to 0 with the whole second token
    /// taken as the resource URL. Malformed names are normalized here and
    /// never surfaced as errors.
    pub fn new(
        raw_name: &str,
        symbol_type: AliasEntry,
        address: Address,
        length: AddressLength,
    ) -> Self {
        let mut tokens = raw_name.split_whitespace();
        let first = tokens.next();
        let (name, resource_url, resource_line) = match (first, tokens.next()) {
            (Some(name), Some(resource)) => {
                let (url, line) = parse_resource(resource);
                (name.to_string(), url, line)
            }
            _ => (raw_name.to_string(), String::new(), 0),
        };
        Symbol {
            name,
            resource_url,
            resource_line,
            symbol_type,
            span: AddressSpan::new(address, length),
        }
    }

    /// Returns the same symbol occupying a span of the same length at a new
    /// start address, as left behind by a code-move record.
    pub fn relocated(&self, address: Address) -> Self {
        let mut moved = self.clone();
        moved.span = AddressSpan::new(address, self.span.length());
        moved
    }

    /// Returns the function or code block name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the URL of the script resource (possibly empty).
    pub fn resource_url(&self) -> &str {
        &self.resource_url
    }

    /// Returns the line number within the script resource, 0 if absent.
    pub const fn resource_line(&self) -> LineNumber {
        self.resource_line
    }

    /// Returns the symbol-type dictionary entry of the symbol.
    pub const fn symbol_type(&self) -> &AliasEntry {
        &self.symbol_type
    }

    /// Returns the address span the symbol currently occupies.
    pub const fn span(&self) -> &AddressSpan {
        &self.span
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} : {}", self.name, self.span)
    }
}

/// Splits a `url[:line]` token at its last colon. A colon at the very start
/// of the token cannot separate a line number and is left alone.
fn parse_resource(resource: &str) -> (String, LineNumber) {
    match resource.rfind(':') {
        Some(offset) if offset > 0 => match resource[offset + 1..].parse::<LineNumber>() {
            Ok(line) => (resource[..offset].to_string(), line),
            Err(_) => (resource.to_string(), 0),
        },
        _ => (resource.to_string(), 0),
    }
}
