//personal finance calculators: budget, rent vs buy, investment growth, loans, savings goals and net worth

pub mod calculators;
pub mod config;
pub mod input;
pub mod report;

//prelude module for convenient imports
pub mod prelude {
    pub use crate::calculators::{
        calculator_for, compute_tool, defaults_record, BudgetInput, BudgetResult, Calculator,
        CompoundInput, CompoundResult, FieldSpec, LoanInput, LoanResult, NetWorthInput,
        NetWorthResult, RentVsBuyInput, RentVsBuyResult, SavingsGoalInput, SavingsGoalResult,
        ToolResult,
    };
    pub use crate::config::{load_inputs, parse_assignment, InputFileError, ToolConfig, ToolType};
    pub use crate::input::{parse_number, InputRecord};
    pub use crate::report::{write_series, write_series_csv, Report};
}
