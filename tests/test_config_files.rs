use pocketcalc::prelude::*;
use std::io::Write;

#[test]
fn defaults_round_trip_through_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("loan.json");

    let config = ToolConfig::with_defaults(ToolType::Loan);
    config.to_json_file(&path).unwrap();

    let loaded = ToolConfig::from_json_file(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.inputs.raw("interestRate"), Some("6"));

    let (tool, record) = load_inputs(&path).unwrap();
    assert_eq!(tool, Some(ToolType::Loan));
    assert_eq!(record, config.inputs);
}

#[test]
fn saved_config_names_tool_in_kebab_case() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rent.json");
    ToolConfig::with_defaults(ToolType::RentVsBuy)
        .to_json_file(&path)
        .unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["tool"], "rent-vs-buy");
    assert_eq!(value["inputs"]["downPayment"], "20");
}

#[test]
fn file_values_feed_a_calculation() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"tool": "loan", "inputs": {{"amount": 25000, "interestRate": "6", "termYears": "5"}}}}"#
    )
    .unwrap();

    let (tool, record) = load_inputs(file.path()).unwrap();
    let tool = tool.unwrap();

    match compute_tool(tool, &record) {
        ToolResult::Loan(result) => {
            assert_eq!(result.payoff_months, 60);
            assert!((result.monthly_payment - 483.32).abs() < 0.01);
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn unknown_tool_in_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"tool": "mortgage", "inputs": {{}}}}"#).unwrap();

    let err = ToolConfig::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, InputFileError::UnknownTool(ref name) if name == "mortgage"));
    assert_eq!(err.to_string(), "unknown tool 'mortgage'");
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = load_inputs(&path).unwrap_err();
    assert!(matches!(err, InputFileError::Read { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn csv_export_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("growth.csv");

    let record = ToolType::Compound.defaults().with("principal", "10000");
    let result = compute_tool(ToolType::Compound, &record);
    write_series_csv(&result, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    //header plus years 0..=10
    assert_eq!(text.lines().count(), 12);
    assert!(text.starts_with("year,balance,contributions,interest\n0,10000.0,"));
}
