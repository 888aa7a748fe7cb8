pub mod artifacts;
pub mod cli;
pub mod data;
pub mod enrich;
pub mod number;
pub mod providers;
pub mod render;
pub(crate) mod regex_cache;
pub(crate) mod string_util;

pub use enrich::pipeline::{Inspector, InspectorConfig};
pub use enrich::report::Report;
pub use number::RawInput;

#[cfg(test)]
mod tests;
