pub mod error;
pub mod io;
pub mod refine;
pub mod road;
pub mod schedule;
pub mod sim;

pub use error::{Error, Result};

#[cfg(test)]
mod test;
