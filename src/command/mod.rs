pub mod update;

pub use update::{UpdateArgs, execute};
