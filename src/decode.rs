//! v8-symbolize address decoder module.

use crate::config::{Address, Map};
use crate::error::{Error, Result};

/// Reconstructs absolute addresses from the delta-compressed address fields
/// of the log. The log writer keeps one running address per stream (code
/// addresses and stack addresses are compressed independently); the decoder
/// mirrors that state on the reading side.
///
/// One instance belongs to one parsing session; streams are created on first
/// use with a previous address of 0.
#[derive(Debug, Default)]
pub struct AddressDecoder {
    previous: Map<String, Address>,
}

impl AddressDecoder {
    /// Applies a signed delta to the stream's previous address and returns
    /// the new absolute address, which also becomes the stream's previous.
    ///
    /// There is no bounds checking: a delta taking the stream below zero
    /// wraps around, passing malformed input through instead of failing.
    pub fn decode(&mut self, stream: &str, delta: i64) -> Address {
        let previous = self.previous.entry(stream.to_string()).or_default();
        let address = previous.wrapping_add_signed(delta);
        *previous = address;
        tracing::debug!("AddressDecoder.decode {} {:+} => {:#x}", stream, delta, address);
        address
    }

    /// Decodes an address field of a log record: a `+` or `-` prefixed hex
    /// value is a delta against the stream, anything else is an absolute hex
    /// address (with optional `0x` prefix) which resets the stream.
    pub fn decode_field(&mut self, stream: &str, text: &str, lc: usize) -> Result<Address> {
        if text.starts_with('+') || text.starts_with('-') {
            let delta = i64::from_str_radix(text, 16)
                .map_err(|_| Error::AddressParsing(text.into(), lc))?;
            return Ok(self.decode(stream, delta));
        }
        let absolute = text.trim_start_matches("0x");
        let address = Address::from_str_radix(absolute, 16)
            .map_err(|_| Error::AddressParsing(text.into(), lc))?;
        self.previous.insert(stream.to_string(), address);
        Ok(address)
    }
}
