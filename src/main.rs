use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pocketcalc::prelude::*;
use prettytable::{Cell, Row, Table};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pocketcalc")]
#[command(about = "Personal finance calculators for budgets, homes, loans and savings", long_about = None)]
struct Cli {
    //log computation details to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    //run a calculator
    Run {
        //tool name (budget, rent-vs-buy, compound, loan, savings, net-worth)
        tool: String,

        //json file with field values, flat or as saved by `defaults`
        #[arg(long)]
        input: Option<PathBuf>,

        //field override, repeatable (eg --set amount=25000)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        sets: Vec<String>,

        //start from the tool's default form values
        #[arg(long)]
        defaults: bool,

        //print the result as json instead of tables
        #[arg(long)]
        json: bool,

        //output path for the result series csv
        #[arg(long)]
        output_csv: Option<PathBuf>,
    },

    //list tools and their fields
    List,

    //write a tool's default inputs as json
    Defaults {
        //tool name
        tool: String,

        //output path (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            tool,
            input,
            sets,
            defaults,
            json,
            output_csv,
        } => run_tool(&tool, input, &sets, defaults, json, output_csv)?,
        Commands::List => list_tools(),
        Commands::Defaults { tool, output } => write_defaults(&tool, output)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "pocketcalc=debug"
    } else {
        "pocketcalc=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_tool(name: &str) -> Result<ToolType> {
    ToolType::parse(name).ok_or_else(|| anyhow::anyhow!("Unknown tool: {}", name))
}

fn run_tool(
    tool_name: &str,
    input_path: Option<PathBuf>,
    sets: &[String],
    use_defaults: bool,
    json: bool,
    output_csv: Option<PathBuf>,
) -> Result<()> {
    let tool = parse_tool(tool_name)?;

    //defaults, then the input file, then --set overrides
    let mut record = if use_defaults {
        tool.defaults()
    } else {
        InputRecord::new()
    };

    if let Some(path) = &input_path {
        let (file_tool, file_record) =
            load_inputs(path).context(format!("Failed to load inputs from {:?}", path))?;

        if let Some(file_tool) = file_tool {
            if file_tool != tool {
                tracing::warn!(file_tool = %file_tool, tool = %tool, "input file was saved for another tool");
            }
        }
        record.merge(&file_record);
    }

    for assignment in sets {
        let (key, value) = parse_assignment(assignment)?;
        record.set(key, value);
    }

    let calculator = calculator_for(tool);
    let known: Vec<&str> = calculator.fields().iter().map(|f| f.key).collect();
    for (key, _) in record.iter() {
        if !known.contains(&key) {
            tracing::warn!(field = key, tool = %tool, "field is not used by this tool");
        }
    }

    tracing::info!(tool = %tool, fields = record.len(), "running calculator");
    let result = calculator.compute(&record);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", calculator.name());
        println!("{}\n", "=".repeat(calculator.name().len()));
        result.pretty_print();
    }

    if let Some(path) = output_csv {
        write_series_csv(&result, &path)
            .context(format!("Failed to write series to {:?}", path))?;
        if !json {
            println!("\nSeries saved to {:?}", path);
        }
    }

    Ok(())
}

fn list_tools() {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Tool"),
        Cell::new("Name"),
        Cell::new("Field"),
        Cell::new("Label"),
        Cell::new("Default"),
    ]));

    for tool in ToolType::ALL {
        let calculator = calculator_for(tool);
        for (i, field) in calculator.fields().iter().enumerate() {
            let (tool_cell, name_cell) = if i == 0 {
                (tool.as_str(), calculator.name())
            } else {
                ("", "")
            };

            table.add_row(Row::new(vec![
                Cell::new(tool_cell),
                Cell::new(name_cell),
                Cell::new(field.key),
                Cell::new(field.label),
                Cell::new(field.default),
            ]));
        }
    }

    table.printstd();
}

fn write_defaults(tool_name: &str, output: Option<PathBuf>) -> Result<()> {
    let tool = parse_tool(tool_name)?;
    let config = ToolConfig::with_defaults(tool);

    match output {
        Some(path) => {
            config
                .to_json_file(&path)
                .context(format!("Failed to save defaults to {:?}", path))?;
            println!("Defaults for {} saved to {:?}", tool, path);
        }
        None => println!("{}", serde_json::to_string_pretty(&config)?),
    }

    Ok(())
}
