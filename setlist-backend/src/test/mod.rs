#[cfg(database_test)]
mod database;
mod memory;
#[cfg(database_test)]
mod mock_impl;

pub use memory::Memory;
#[cfg(database_test)]
pub use mock_impl::{mock, Mock};
