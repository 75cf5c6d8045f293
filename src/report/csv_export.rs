use crate::calculators::ToolResult;
use csv::Writer;
use serde::Serialize;
use std::io;
use std::path::Path;

#[derive(Debug, Serialize)]
struct BreakdownRow<'a> {
    kind: &'a str,
    name: &'a str,
    value: f64,
}

//writes the primary series of a result as CSV
//yearly chart data for projections, category breakdowns for budget and net worth
pub fn write_series<W: io::Write>(result: &ToolResult, writer: W) -> csv::Result<()> {
    let mut csv = Writer::from_writer(writer);

    match result {
        ToolResult::Budget(r) => {
            for share in &r.breakdown {
                csv.serialize(share)?;
            }
        }
        ToolResult::RentVsBuy(r) => {
            for point in &r.chart_data {
                csv.serialize(point)?;
            }
        }
        ToolResult::Compound(r) => {
            for point in &r.chart_data {
                csv.serialize(point)?;
            }
        }
        ToolResult::Loan(r) => {
            for point in &r.chart_data {
                csv.serialize(point)?;
            }
        }
        ToolResult::Savings(r) => {
            for point in &r.chart_data {
                csv.serialize(point)?;
            }
        }
        ToolResult::NetWorth(r) => {
            let assets = r.asset_data.iter().map(|a| ("asset", a));
            let liabilities = r.liability_data.iter().map(|l| ("liability", l));
            for (kind, item) in assets.chain(liabilities) {
                csv.serialize(BreakdownRow {
                    kind,
                    name: &item.name,
                    value: item.value,
                })?;
            }
        }
    }

    csv.flush()?;
    Ok(())
}

pub fn write_series_csv(result: &ToolResult, path: &Path) -> csv::Result<()> {
    let file = std::fs::File::create(path)?;
    write_series(result, file)
}
