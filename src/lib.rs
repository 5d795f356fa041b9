//! v8-symbolize library.

#![deny(warnings)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod alias;
pub mod config;
pub mod decode;
pub mod dump;
pub mod error;
pub mod global;
pub mod log;
pub mod resolve;
pub mod session;
pub mod span;
pub mod symbol;
pub mod table;

mod filebuf;

#[cfg(test)]
mod tests;
