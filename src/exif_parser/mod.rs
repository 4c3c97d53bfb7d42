pub mod extractor;
pub mod generic;
pub mod gps;

#[cfg(test)]
pub(crate) mod fixtures;

pub use extractor::extract;
