use crate::calculators::budget::BudgetResult;
use crate::calculators::compound::CompoundResult;
use crate::calculators::loan::LoanResult;
use crate::calculators::net_worth::{LabeledAmount, NetWorthResult};
use crate::calculators::rent_vs_buy::RentVsBuyResult;
use crate::calculators::savings_goal::SavingsGoalResult;
use crate::calculators::ToolResult;
use crate::report::format::{format_money, format_percent};
use prettytable::{Cell, Row, Table};

//terminal rendering of a calculator result
pub trait Report {
    //scalar summary as a two-column metric table
    fn summary_table(&self) -> Table;

    //time series or breakdown tables, in display order
    fn detail_tables(&self) -> Vec<(String, Table)>;

    //prints every table to stdout
    fn pretty_print(&self) {
        self.summary_table().printstd();

        for (title, table) in self.detail_tables() {
            println!("\n{}", title);
            table.printstd();
        }
    }
}

fn metric_table(rows: Vec<(String, String)>) -> Table {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));

    for (label, value) in rows {
        table.add_row(Row::new(vec![Cell::new(&label), Cell::new(&value)]));
    }

    table
}

fn header(columns: &[&str]) -> Row {
    Row::new(columns.iter().map(|c| Cell::new(c)).collect())
}

fn money(value: f64) -> String {
    format_money(value, 0)
}

fn labeled_table(items: &[LabeledAmount]) -> Table {
    let mut table = Table::new();
    table.add_row(header(&["Category", "Amount"]));
    for item in items {
        table.add_row(Row::new(vec![Cell::new(&item.name), Cell::new(&money(item.value))]));
    }
    table
}

impl Report for BudgetResult {
    fn summary_table(&self) -> Table {
        metric_table(vec![
            ("Monthly Income".to_string(), money(self.income)),
            ("Total Expenses".to_string(), money(self.total_expenses)),
            (self.remaining_label().to_string(), money(self.remaining.abs())),
            ("Budget Usage".to_string(), format_percent(self.percent_used, 0)),
            ("Status".to_string(), format!("{:?}", self.status)),
        ])
    }

    fn detail_tables(&self) -> Vec<(String, Table)> {
        if self.breakdown.is_empty() {
            return Vec::new();
        }

        let mut table = Table::new();
        table.add_row(header(&["Category", "Amount", "Share of Income"]));
        for share in &self.breakdown {
            table.add_row(Row::new(vec![
                Cell::new(&share.name),
                Cell::new(&money(share.value)),
                Cell::new(&format_percent(share.percentage, 1)),
            ]));
        }

        vec![("Spending Breakdown".to_string(), table)]
    }
}

impl Report for RentVsBuyResult {
    fn summary_table(&self) -> Table {
        let advantage_label = if self.net_worth_difference >= 0.0 {
            "Net Worth Advantage (from buying)"
        } else {
            "Net Worth Advantage (from renting)"
        };

        let mut rows = vec![
            ("Monthly Mortgage".to_string(), format_money(self.monthly_mortgage, 2)),
            ("Monthly Ownership Cost".to_string(), money(self.monthly_buying_cost)),
            ("Down Payment".to_string(), money(self.down_payment_amount)),
            ("Total Rent".to_string(), money(self.total_rent_cost)),
            ("Total Buying Cost".to_string(), money(self.total_buying_cost)),
            ("Estimated Home Value".to_string(), money(self.home_value)),
            ("Remaining Mortgage".to_string(), money(self.final_mortgage_balance)),
            (advantage_label.to_string(), money(self.net_worth_difference.abs())),
            ("Recommendation".to_string(), self.recommendation.to_string()),
        ];

        if self.break_even_year > 0 {
            rows.push((
                "Break-even Point".to_string(),
                format!("{:.1} years", self.break_even_year as f64),
            ));
        }

        metric_table(rows)
    }

    fn detail_tables(&self) -> Vec<(String, Table)> {
        if self.chart_data.is_empty() {
            return Vec::new();
        }

        let mut table = Table::new();
        table.add_row(header(&["Year", "Rent Cost", "Buying Cost", "Home Equity", "Home Value"]));
        for point in &self.chart_data {
            table.add_row(Row::new(vec![
                Cell::new(&point.year.to_string()),
                Cell::new(&money(point.rent_cost)),
                Cell::new(&money(point.buying_cost)),
                Cell::new(&money(point.home_equity)),
                Cell::new(&money(point.home_value)),
            ]));
        }

        vec![("Cumulative Cost Comparison".to_string(), table)]
    }
}

impl Report for CompoundResult {
    fn summary_table(&self) -> Table {
        metric_table(vec![
            ("Final Balance".to_string(), money(self.final_amount)),
            ("Total Contributions".to_string(), money(self.total_contributions)),
            ("Interest Earned".to_string(), money(self.total_interest)),
        ])
    }

    fn detail_tables(&self) -> Vec<(String, Table)> {
        if self.chart_data.is_empty() {
            return Vec::new();
        }

        let mut table = Table::new();
        table.add_row(header(&["Year", "Balance", "Contributions", "Interest"]));
        for point in &self.chart_data {
            table.add_row(Row::new(vec![
                Cell::new(&point.year.to_string()),
                Cell::new(&money(point.balance)),
                Cell::new(&money(point.contributions)),
                Cell::new(&money(point.interest)),
            ]));
        }

        vec![("Growth Over Time".to_string(), table)]
    }
}

impl Report for LoanResult {
    fn summary_table(&self) -> Table {
        let mut rows = vec![
            ("Monthly Payment".to_string(), format_money(self.monthly_payment, 2)),
            ("Total Payment".to_string(), money(self.total_payment)),
            ("Total Interest".to_string(), money(self.total_interest)),
            (
                "Payoff Time".to_string(),
                format!("{} years ({} months)", self.payoff_years(), self.payoff_months),
            ),
        ];

        if self.months_saved > 0 {
            rows.push(("Months Saved".to_string(), self.months_saved.to_string()));
            rows.push(("Interest Saved".to_string(), money(self.interest_saved)));
        }

        metric_table(rows)
    }

    fn detail_tables(&self) -> Vec<(String, Table)> {
        let mut tables = Vec::new();

        if !self.chart_data.is_empty() {
            let mut table = Table::new();
            table.add_row(header(&["Year", "Balance", "Interest Paid"]));
            for point in &self.chart_data {
                table.add_row(Row::new(vec![
                    Cell::new(&point.year.to_string()),
                    Cell::new(&money(point.balance)),
                    Cell::new(&money(point.interest_paid)),
                ]));
            }
            tables.push(("Balance Over Time".to_string(), table));
        }

        if !self.amortization_data.is_empty() {
            let mut table = Table::new();
            table.add_row(header(&["Month", "Principal", "Interest", "Balance"]));
            for row in &self.amortization_data {
                table.add_row(Row::new(vec![
                    Cell::new(&row.month.to_string()),
                    Cell::new(&money(row.principal)),
                    Cell::new(&money(row.interest)),
                    Cell::new(&money(row.balance)),
                ]));
            }
            tables.push(("First Year Amortization".to_string(), table));
        }

        tables
    }
}

impl Report for SavingsGoalResult {
    fn summary_table(&self) -> Table {
        let (time_to_goal, advice) = if self.months_to_goal > 0 {
            (
                format!("{} years ({} months)", self.years_to_goal(), self.months_to_goal),
                format!(
                    "At your current savings rate, you'll have {}.",
                    money(self.projected_amount)
                ),
            )
        } else if self.will_reach_goal {
            (
                "already reached".to_string(),
                format!(
                    "At your current savings rate, you'll have {}.",
                    money(self.projected_amount)
                ),
            )
        } else {
            (
                "N/A".to_string(),
                format!(
                    "Consider increasing your monthly contribution to {} to reach your goal.",
                    money(self.required_monthly)
                ),
            )
        };

        metric_table(vec![
            ("Progress to Goal".to_string(), format_percent(self.progress_percent, 1)),
            ("Projected Amount".to_string(), money(self.projected_amount)),
            ("Required Monthly".to_string(), money(self.required_monthly)),
            ("Time to Goal".to_string(), time_to_goal),
            (self.headline().to_string(), advice),
        ])
    }

    fn detail_tables(&self) -> Vec<(String, Table)> {
        if self.chart_data.is_empty() {
            return Vec::new();
        }

        let mut table = Table::new();
        table.add_row(header(&["Year", "Balance", "Target"]));
        for point in &self.chart_data {
            table.add_row(Row::new(vec![
                Cell::new(&point.year.to_string()),
                Cell::new(&money(point.balance)),
                Cell::new(&money(point.target)),
            ]));
        }

        vec![("Savings Trajectory".to_string(), table)]
    }
}

impl Report for NetWorthResult {
    fn summary_table(&self) -> Table {
        metric_table(vec![
            ("Total Assets".to_string(), money(self.total_assets)),
            ("Total Liabilities".to_string(), money(self.total_liabilities)),
            ("Net Worth".to_string(), money(self.net_worth)),
            ("Debt to Assets".to_string(), format!("{:.2}", self.debt_to_asset_ratio)),
        ])
    }

    fn detail_tables(&self) -> Vec<(String, Table)> {
        let mut tables = Vec::new();
        if !self.asset_data.is_empty() {
            tables.push(("Asset Breakdown".to_string(), labeled_table(&self.asset_data)));
        }
        if !self.liability_data.is_empty() {
            tables.push((
                "Liability Breakdown".to_string(),
                labeled_table(&self.liability_data),
            ));
        }
        tables
    }
}

impl Report for ToolResult {
    fn summary_table(&self) -> Table {
        match self {
            ToolResult::Budget(r) => r.summary_table(),
            ToolResult::RentVsBuy(r) => r.summary_table(),
            ToolResult::Compound(r) => r.summary_table(),
            ToolResult::Loan(r) => r.summary_table(),
            ToolResult::Savings(r) => r.summary_table(),
            ToolResult::NetWorth(r) => r.summary_table(),
        }
    }

    fn detail_tables(&self) -> Vec<(String, Table)> {
        match self {
            ToolResult::Budget(r) => r.detail_tables(),
            ToolResult::RentVsBuy(r) => r.detail_tables(),
            ToolResult::Compound(r) => r.detail_tables(),
            ToolResult::Loan(r) => r.detail_tables(),
            ToolResult::Savings(r) => r.detail_tables(),
            ToolResult::NetWorth(r) => r.detail_tables(),
        }
    }
}
