//! v8-symbolize address span module.

use std::cmp::Ordering;
use std::fmt;

use crate::config::{Address, AddressLength};

/// A single block of generated code occupies the half-open span of
/// address space `[address, address + length)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressSpan {
    address: Address,
    length: AddressLength,
}

impl AddressSpan {
    /// Creates new address span.
    pub const fn new(address: Address, length: AddressLength) -> Self {
        AddressSpan { address, length }
    }

    /// Returns the start address of the span.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns the length of the span in bytes.
    pub const fn length(&self) -> AddressLength {
        self.length
    }

    /// Returns the exclusive end address of the span.
    pub fn end(&self) -> Address {
        self.address.saturating_add(self.length)
    }

    /// Checks if the spans share any address, endpoints included.
    pub fn overlaps(&self, other: &AddressSpan) -> bool {
        self.address <= other.end() && other.address <= self.end()
    }

    /// Compares two spans without searching for exact equality: any overlap
    /// between them, touching endpoints included, is considered a match.
    ///
    /// This is not a total order (overlap is not transitive), so it is
    /// exposed as a plain method rather than an `Ord` implementation.
    pub fn overlap_cmp(&self, other: &AddressSpan) -> Ordering {
        if self.overlaps(other) {
            Ordering::Equal
        } else if self.address < other.address {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    /// Checks if an address falls inside the span. Unlike [`overlaps`],
    /// the exclusive end is not part of the span.
    ///
    /// [`overlaps`]: AddressSpan::overlaps
    pub fn contains(&self, address: Address) -> bool {
        address >= self.address && address < self.end()
    }
}

impl fmt::Display for AddressSpan {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#x}-{:#x}", self.address, self.end())
    }
}
