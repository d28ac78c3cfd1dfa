pub mod toml_loader;

pub use toml_loader::{load_rules_file, parse_rules};
