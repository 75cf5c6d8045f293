pub mod amortization;
pub mod budget;
pub mod compound;
pub mod loan;
pub mod net_worth;
pub mod rent_vs_buy;
pub mod savings_goal;

use crate::config::ToolType;
use crate::input::InputRecord;
use serde::{Deserialize, Serialize};

pub use budget::{BudgetInput, BudgetResult};
pub use compound::{CompoundInput, CompoundResult};
pub use loan::{LoanInput, LoanResult};
pub use net_worth::{NetWorthInput, NetWorthResult};
pub use rent_vs_buy::{RentVsBuyInput, RentVsBuyResult};
pub use savings_goal::{SavingsGoalInput, SavingsGoalResult};

//longest period, in years, any calculator projects over
pub const MAX_YEARS: f64 = 1000.0;

//a form field a calculator reads, with its initial value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub default: &'static str,
}

impl FieldSpec {
    pub const fn new(key: &'static str, label: &'static str, default: &'static str) -> Self {
        FieldSpec {
            key,
            label,
            default,
        }
    }
}

//input record holding every field at its default value
pub fn defaults_record(fields: &[FieldSpec]) -> InputRecord {
    fields.iter().map(|f| (f.key, f.default)).collect()
}

//result of any calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tool", rename_all = "kebab-case")]
pub enum ToolResult {
    Budget(BudgetResult),
    RentVsBuy(RentVsBuyResult),
    Compound(CompoundResult),
    Loan(LoanResult),
    Savings(SavingsGoalResult),
    NetWorth(NetWorthResult),
}

impl ToolResult {
    pub fn tool(&self) -> ToolType {
        match self {
            ToolResult::Budget(_) => ToolType::Budget,
            ToolResult::RentVsBuy(_) => ToolType::RentVsBuy,
            ToolResult::Compound(_) => ToolType::Compound,
            ToolResult::Loan(_) => ToolType::Loan,
            ToolResult::Savings(_) => ToolType::Savings,
            ToolResult::NetWorth(_) => ToolType::NetWorth,
        }
    }
}

//calculator interface shared by every tool
//implementations hold no state, so one instance can serve any number of calls
pub trait Calculator: Send + Sync {
    //display name
    fn name(&self) -> &str;

    //form fields read from the input record
    fn fields(&self) -> &'static [FieldSpec];

    //computes a result from raw form values
    fn compute(&self, record: &InputRecord) -> ToolResult;

    //record with every field at its default
    fn defaults(&self) -> InputRecord {
        defaults_record(self.fields())
    }
}

macro_rules! calculator {
    ($ty:ident, $name:literal, $module:ident, $input:ident, $variant:ident) => {
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $ty;

        impl Calculator for $ty {
            fn name(&self) -> &str {
                $name
            }

            fn fields(&self) -> &'static [FieldSpec] {
                $module::FIELDS
            }

            fn compute(&self, record: &InputRecord) -> ToolResult {
                ToolResult::$variant($module::compute(&$input::from_record(record)))
            }
        }
    };
}

calculator!(BudgetCalculator, "Budget Planner", budget, BudgetInput, Budget);
calculator!(RentVsBuyCalculator, "Rent vs Buy", rent_vs_buy, RentVsBuyInput, RentVsBuy);
calculator!(CompoundCalculator, "Investment Growth", compound, CompoundInput, Compound);
calculator!(LoanCalculator, "Loan Calculator", loan, LoanInput, Loan);
calculator!(SavingsGoalCalculator, "Savings Goal", savings_goal, SavingsGoalInput, Savings);
calculator!(NetWorthCalculator, "Net Worth", net_worth, NetWorthInput, NetWorth);

//returns the calculator for a tool
pub fn calculator_for(tool: ToolType) -> Box<dyn Calculator> {
    match tool {
        ToolType::Budget => Box::new(BudgetCalculator),
        ToolType::RentVsBuy => Box::new(RentVsBuyCalculator),
        ToolType::Compound => Box::new(CompoundCalculator),
        ToolType::Loan => Box::new(LoanCalculator),
        ToolType::Savings => Box::new(SavingsGoalCalculator),
        ToolType::NetWorth => Box::new(NetWorthCalculator),
    }
}

//computes any tool from raw form values
pub fn compute_tool(tool: ToolType, record: &InputRecord) -> ToolResult {
    calculator_for(tool).compute(record)
}
