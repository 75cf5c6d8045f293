pub mod tool_config;

pub use tool_config::{load_inputs, parse_assignment, InputFileError, ToolConfig, ToolType};
