//! v8-symbolize alias dictionary module.

use std::fmt;

use crate::config::{AliasValue, Map};

/// Associates a symbol-type or action name with a numeric constant. This is
/// useful because the compressed log deduplicates repeated category strings
/// into integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    name: String,
    value: AliasValue,
}

impl AliasEntry {
    /// Returns the aliased name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the integer code assigned to the name.
    pub const fn value(&self) -> AliasValue {
        self.value
    }
}

impl fmt::Display for AliasEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.value)
    }
}

/// Registry of aliased strings of one log category. Each category (symbol
/// types, action names) numbers its entries independently, in the order
/// they are first seen in the log.
#[derive(Debug, Default)]
pub struct AliasDictionary {
    entries: Vec<AliasEntry>,
    index_by_name: Map<String, usize>,
}

impl AliasDictionary {
    /// Returns the entry registered for the name, creating one with the
    /// next unused integer code on first sight.
    pub fn resolve(&mut self, name: &str) -> &AliasEntry {
        let index = match self.index_by_name.get(name) {
            Some(index) => *index,
            None => {
                let index = self.entries.len();
                tracing::debug!("AliasDictionary.resolve new entry {}:{}", name, index);
                self.entries.push(AliasEntry {
                    name: name.to_string(),
                    value: index as AliasValue,
                });
                self.index_by_name.insert(name.to_string(), index);
                index
            }
        };
        &self.entries[index]
    }

    /// Returns the entry previously assigned the integer code (if any).
    pub fn lookup_by_value(&self, value: AliasValue) -> Option<&AliasEntry> {
        self.entries.get(value as usize)
    }

    /// Returns number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
