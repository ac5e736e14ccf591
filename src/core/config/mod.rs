pub mod data;
pub mod defaults;
pub mod io;
pub mod printing;
pub mod settings;

#[cfg(test)]
pub mod tests;

pub use data::Config;
pub use io::ConfigError;
