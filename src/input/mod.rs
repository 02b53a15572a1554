mod report;
mod toml_input;

pub use report::*;
pub use toml_input::*;
