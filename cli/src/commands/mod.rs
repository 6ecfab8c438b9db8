//! CLI command implementations

pub mod call;
pub mod definitions;
pub mod tools;

pub use call::call_command;
pub use definitions::definitions_command;
pub use tools::tools_command;
