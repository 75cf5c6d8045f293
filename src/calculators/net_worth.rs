use crate::calculators::FieldSpec;
use crate::input::InputRecord;
use serde::{Deserialize, Serialize};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("cash", "Cash & Savings", ""),
    FieldSpec::new("investments", "Investments", ""),
    FieldSpec::new("retirement", "Retirement Accounts", ""),
    FieldSpec::new("realEstate", "Real Estate", ""),
    FieldSpec::new("vehicles", "Vehicles", ""),
    FieldSpec::new("otherAssets", "Other Assets", ""),
    FieldSpec::new("mortgage", "Mortgage", ""),
    FieldSpec::new("studentLoans", "Student Loans", ""),
    FieldSpec::new("carLoans", "Car Loans", ""),
    FieldSpec::new("creditCards", "Credit Cards", ""),
    FieldSpec::new("otherDebts", "Other Debts", ""),
];

//(field, chart label)
pub const ASSET_CATEGORIES: [(&str, &str); 6] = [
    ("cash", "Cash"),
    ("investments", "Investments"),
    ("retirement", "Retirement"),
    ("realEstate", "Real Estate"),
    ("vehicles", "Vehicles"),
    ("otherAssets", "Other"),
];

pub const LIABILITY_CATEGORIES: [(&str, &str); 5] = [
    ("mortgage", "Mortgage"),
    ("studentLoans", "Student Loans"),
    ("carLoans", "Car Loans"),
    ("creditCards", "Credit Cards"),
    ("otherDebts", "Other"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthInput {
    //ASSET_CATEGORIES order
    pub assets: [f64; 6],
    //LIABILITY_CATEGORIES order
    pub liabilities: [f64; 5],
}

impl NetWorthInput {
    pub fn from_record(record: &InputRecord) -> Self {
        let mut assets = [0.0; 6];
        for (slot, (key, _)) in assets.iter_mut().zip(ASSET_CATEGORIES.iter()) {
            *slot = record.number(key);
        }

        let mut liabilities = [0.0; 5];
        for (slot, (key, _)) in liabilities.iter_mut().zip(LIABILITY_CATEGORIES.iter()) {
            *slot = record.number(key);
        }

        NetWorthInput {
            assets,
            liabilities,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabeledAmount {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthResult {
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,
    pub debt_to_asset_ratio: f64,
    pub asset_data: Vec<LabeledAmount>,
    pub liability_data: Vec<LabeledAmount>,
}

fn non_zero(labels: &[(&str, &str)], values: &[f64]) -> Vec<LabeledAmount> {
    labels
        .iter()
        .zip(values.iter())
        .filter(|(_, value)| **value > 0.0)
        .map(|((_, label), &value)| LabeledAmount {
            name: label.to_string(),
            value,
        })
        .collect()
}

pub fn compute(input: &NetWorthInput) -> NetWorthResult {
    let total_assets: f64 = input.assets.iter().sum();
    let total_liabilities: f64 = input.liabilities.iter().sum();
    let net_worth = total_assets - total_liabilities;

    let debt_to_asset_ratio = if total_assets > 0.0 {
        total_liabilities / total_assets
    } else {
        0.0
    };

    tracing::debug!(total_assets, total_liabilities, net_worth, "net worth computed");

    NetWorthResult {
        total_assets,
        total_liabilities,
        net_worth,
        debt_to_asset_ratio,
        asset_data: non_zero(&ASSET_CATEGORIES, &input.assets),
        liability_data: non_zero(&LIABILITY_CATEGORIES, &input.liabilities),
    }
}
