//! v8-symbolize log record splitting module.

use lazy_static::lazy_static;
use regex::Regex;

/// Log record kind marking creation of a block of generated code.
pub const CODE_CREATION: &str = "code-creation";
/// Log record kind marking relocation of a block of generated code.
pub const CODE_MOVE: &str = "code-move";
/// Log record kind marking deletion of a block of generated code.
pub const CODE_DELETE: &str = "code-delete";
/// Log record kind carrying a sampled program counter.
pub const TICK: &str = "tick";

/// Splits a log record into its comma-separated fields. A double-quoted
/// field (the name field may contain commas and spaces) is taken whole,
/// with the quotes stripped. Empty fields are not preserved.
pub fn split_fields(line: &str) -> Vec<String> {
    lazy_static! {
        static ref FIELD: Regex = Regex::new(r#""[^"]*"|[^,]+"#).expect("Invalid regex");
    }

    FIELD
        .find_iter(line.trim())
        .map(|m| {
            m.as_str()
                .trim_start_matches('"')
                .trim_end_matches('"')
                .to_string()
        })
        .collect()
}
