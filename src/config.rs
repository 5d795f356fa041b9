//! v8-symbolize config module.

/// Exit code of the process on failure.
pub const FAILURE: i32 = 1;

/// Absolute address in the code space of the monitored process.
pub type Address = u64;

/// Length in bytes of a block of generated code.
pub type AddressLength = u64;

/// Line number within a script resource.
pub type LineNumber = u32;

/// Compact integer code assigned to an aliased log string.
pub type AliasValue = u32;

#[cfg(not(test))]
pub(crate) type Map<K, V> = std::collections::HashMap<K, V>;

// Use less performant BTree in tests for deterministic sequences
#[cfg(test)]
pub(crate) type Map<K, V> = std::collections::BTreeMap<K, V>;
