use crate::calculators::calculator_for;
use crate::input::InputRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputFileError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("expected a JSON object of field values in {0:?}")]
    NotAnObject(PathBuf),
    #[error("field '{0}' must be a string or a number")]
    UnsupportedValue(String),
    #[error("unknown tool '{0}'")]
    UnknownTool(String),
    #[error("expected key=value, got '{0}'")]
    BadAssignment(String),
}

//calculator tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolType {
    Budget,
    RentVsBuy,
    Compound,
    Loan,
    Savings,
    NetWorth,
}

impl ToolType {
    pub const ALL: [ToolType; 6] = [
        ToolType::Budget,
        ToolType::RentVsBuy,
        ToolType::Compound,
        ToolType::Loan,
        ToolType::Savings,
        ToolType::NetWorth,
    ];

    //parse tool type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "budget" => Some(ToolType::Budget),
            "rent-vs-buy" | "rent" | "rvb" => Some(ToolType::RentVsBuy),
            "compound" | "investment" | "growth" => Some(ToolType::Compound),
            "loan" => Some(ToolType::Loan),
            "savings" | "savings-goal" | "goal" => Some(ToolType::Savings),
            "net-worth" | "networth" => Some(ToolType::NetWorth),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolType::Budget => "budget",
            ToolType::RentVsBuy => "rent-vs-buy",
            ToolType::Compound => "compound",
            ToolType::Loan => "loan",
            ToolType::Savings => "savings",
            ToolType::NetWorth => "net-worth",
        }
    }

    //form values the tool starts with
    pub fn defaults(&self) -> InputRecord {
        calculator_for(*self).defaults()
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//saved calculator inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolConfig {
    pub tool: ToolType,
    pub inputs: InputRecord,
}

impl ToolConfig {
    pub fn new(tool: ToolType, inputs: InputRecord) -> Self {
        ToolConfig { tool, inputs }
    }

    //config with the tool's default form values
    pub fn with_defaults(tool: ToolType) -> Self {
        ToolConfig::new(tool, tool.defaults())
    }

    //load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self, InputFileError> {
        config_from_value(&read_json(path)?, path)
    }

    //save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<(), InputFileError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| InputFileError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| InputFileError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}

//loads field values from either a saved ToolConfig or a flat JSON object
//returns the tool when the file names one
pub fn load_inputs(path: &Path) -> Result<(Option<ToolType>, InputRecord), InputFileError> {
    let value = read_json(path)?;

    let is_config = value
        .as_object()
        .map(|object| object.contains_key("tool") && object.contains_key("inputs"))
        .unwrap_or(false);

    if is_config {
        let config = config_from_value(&value, path)?;
        return Ok((Some(config.tool), config.inputs));
    }

    Ok((None, record_from_value(&value, path)?))
}

fn config_from_value(value: &Value, path: &Path) -> Result<ToolConfig, InputFileError> {
    let object = value
        .as_object()
        .ok_or_else(|| InputFileError::NotAnObject(path.to_path_buf()))?;

    let name = object.get("tool").and_then(Value::as_str).unwrap_or_default();
    let tool =
        ToolType::parse(name).ok_or_else(|| InputFileError::UnknownTool(name.to_string()))?;

    let inputs = match object.get("inputs") {
        Some(inputs) => record_from_value(inputs, path)?,
        None => InputRecord::new(),
    };

    Ok(ToolConfig { tool, inputs })
}

fn read_json(path: &Path) -> Result<Value, InputFileError> {
    let contents = std::fs::read_to_string(path).map_err(|source| InputFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| InputFileError::Json {
        path: path.to_path_buf(),
        source,
    })
}

//accepts strings as typed, numbers in their JSON spelling, null as empty
fn record_from_value(value: &Value, path: &Path) -> Result<InputRecord, InputFileError> {
    let object = value
        .as_object()
        .ok_or_else(|| InputFileError::NotAnObject(path.to_path_buf()))?;

    let mut record = InputRecord::new();
    for (key, field) in object {
        let raw = match field {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Null => String::new(),
            _ => return Err(InputFileError::UnsupportedValue(key.clone())),
        };
        record.set(key.as_str(), raw);
    }
    Ok(record)
}

//parses a key=value override
pub fn parse_assignment(assignment: &str) -> Result<(String, String), InputFileError> {
    match assignment.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(InputFileError::BadAssignment(assignment.to_string())),
    }
}
