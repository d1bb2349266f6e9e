pub mod constants;
pub mod error;
mod types;
mod utils;
mod writer;

#[cfg(test)]
mod parser;

pub use types::*;
