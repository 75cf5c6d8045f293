use crate::calculators::FieldSpec;
use crate::input::{round_to, InputRecord};
use serde::{Deserialize, Serialize};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("income", "Monthly Income", ""),
    FieldSpec::new("housing", "Housing", ""),
    FieldSpec::new("transportation", "Transportation", ""),
    FieldSpec::new("food", "Food", ""),
    FieldSpec::new("utilities", "Utilities", ""),
    FieldSpec::new("insurance", "Insurance", ""),
    FieldSpec::new("healthcare", "Healthcare", ""),
    FieldSpec::new("entertainment", "Entertainment", ""),
    FieldSpec::new("savings", "Savings", ""),
    FieldSpec::new("debt", "Debt", ""),
    FieldSpec::new("other", "Other", ""),
];

//expense categories in display order
pub const CATEGORIES: [&str; 10] = [
    "housing",
    "transportation",
    "food",
    "utilities",
    "insurance",
    "healthcare",
    "entertainment",
    "savings",
    "debt",
    "other",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetInput {
    pub income: f64,
    //amounts in CATEGORIES order
    pub expenses: [f64; 10],
}

impl BudgetInput {
    pub fn from_record(record: &InputRecord) -> Self {
        let mut expenses = [0.0; 10];
        for (slot, key) in expenses.iter_mut().zip(CATEGORIES.iter()) {
            *slot = record.number(key);
        }

        BudgetInput {
            income: record.number("income"),
            expenses,
        }
    }
}

//how much of the income the expenses take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    OnTrack,
    Tight,
    OverBudget,
}

impl BudgetStatus {
    pub fn from_percent_used(percent_used: f64) -> Self {
        if percent_used <= 80.0 {
            BudgetStatus::OnTrack
        } else if percent_used <= 100.0 {
            BudgetStatus::Tight
        } else {
            BudgetStatus::OverBudget
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub name: String,
    pub value: f64,
    //share of income, one decimal place
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetResult {
    pub income: f64,
    pub total_expenses: f64,
    pub remaining: f64,
    pub percent_used: f64,
    pub status: BudgetStatus,
    pub breakdown: Vec<CategoryShare>,
}

impl BudgetResult {
    pub fn remaining_label(&self) -> &'static str {
        if self.remaining >= 0.0 {
            "Available to Save"
        } else {
            "Over Budget"
        }
    }
}

pub fn compute(input: &BudgetInput) -> BudgetResult {
    let income = input.income;
    let total_expenses: f64 = input.expenses.iter().sum();
    let remaining = income - total_expenses;

    let percent_used = if income > 0.0 {
        total_expenses / income * 100.0
    } else {
        0.0
    };

    let breakdown = CATEGORIES
        .iter()
        .zip(input.expenses.iter())
        .filter(|(_, value)| **value > 0.0)
        .map(|(key, &value)| CategoryShare {
            name: capitalize(key),
            value,
            percentage: if income > 0.0 {
                round_to(value / income * 100.0, 1)
            } else {
                0.0
            },
        })
        .collect();

    tracing::debug!(income, total_expenses, percent_used, "budget computed");

    BudgetResult {
        income,
        total_expenses,
        remaining,
        percent_used,
        status: BudgetStatus::from_percent_used(percent_used),
        breakdown,
    }
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
