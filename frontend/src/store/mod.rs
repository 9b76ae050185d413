pub mod repository;
pub mod types;

pub use repository::*;
pub use types::*;

#[cfg(test)]
pub mod test_support;
