use crate::calculators::{FieldSpec, MAX_YEARS};
use crate::input::{round_half_up, InputRecord};
use serde::{Deserialize, Serialize};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("principal", "Initial Investment", ""),
    FieldSpec::new("monthlyContribution", "Monthly Contribution", ""),
    FieldSpec::new("annualRate", "Annual Return (%)", "7"),
    FieldSpec::new("years", "Time Period (years)", "10"),
    FieldSpec::new("compoundingFrequency", "Compounding Periods per Year", "12"),
];

pub const DEFAULT_COMPOUNDING_FREQUENCY: f64 = 12.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundInput {
    pub principal: f64,
    pub monthly_contribution: f64,
    //fraction, not percent
    pub annual_rate: f64,
    pub years: f64,
    pub compounding_frequency: f64,
}

impl CompoundInput {
    pub fn from_record(record: &InputRecord) -> Self {
        CompoundInput {
            principal: record.number("principal"),
            monthly_contribution: record.number("monthlyContribution"),
            annual_rate: record.number("annualRate") / 100.0,
            years: record.number("years"),
            compounding_frequency: record
                .number_or("compoundingFrequency", DEFAULT_COMPOUNDING_FREQUENCY),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthPoint {
    pub year: u32,
    pub balance: f64,
    pub contributions: f64,
    pub interest: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundResult {
    pub final_amount: f64,
    pub total_contributions: f64,
    pub total_interest: f64,
    pub chart_data: Vec<GrowthPoint>,
}

impl CompoundResult {
    pub fn zero() -> Self {
        CompoundResult {
            final_amount: 0.0,
            total_contributions: 0.0,
            total_interest: 0.0,
            chart_data: Vec::new(),
        }
    }
}

//the rate per period is credited once a month, matching how the tool has always worked
pub fn compute(input: &CompoundInput) -> CompoundResult {
    if input.principal == 0.0 && input.monthly_contribution == 0.0 {
        return CompoundResult::zero();
    }

    let frequency = if input.compounding_frequency == 0.0 {
        DEFAULT_COMPOUNDING_FREQUENCY
    } else {
        input.compounding_frequency
    };
    let growth = 1.0 + input.annual_rate / frequency;
    let years = if input.years > 0.0 {
        input.years.min(MAX_YEARS).floor() as u32
    } else {
        0
    };

    let mut chart_data = Vec::new();
    let mut balance = input.principal;
    let mut total_contributions = input.principal;

    for year in 0..=years {
        if year > 0 {
            for _ in 0..12 {
                balance = balance * growth + input.monthly_contribution;
                total_contributions += input.monthly_contribution;
            }
        }

        chart_data.push(GrowthPoint {
            year,
            balance: round_half_up(balance),
            contributions: round_half_up(total_contributions),
            interest: round_half_up(balance - total_contributions),
        });
    }

    let total_interest = balance - total_contributions;
    tracing::debug!(final_amount = balance, total_contributions, "growth projected");

    CompoundResult {
        final_amount: balance,
        total_contributions,
        total_interest,
        chart_data,
    }
}
