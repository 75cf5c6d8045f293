use crate::calculators::amortization::{amortize_month, monthly_payment, monthly_rate_from_percent};
use crate::calculators::{FieldSpec, MAX_YEARS};
use crate::input::{round_half_up, InputRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("homePrice", "Home Price", ""),
    FieldSpec::new("downPayment", "Down Payment (%)", "20"),
    FieldSpec::new("interestRate", "Interest Rate (%)", "6.5"),
    FieldSpec::new("loanTerm", "Loan Term (years)", "30"),
    FieldSpec::new("monthlyRent", "Monthly Rent", ""),
    FieldSpec::new("propertyTax", "Property Tax (%/yr)", "1.2"),
    FieldSpec::new("hoaFees", "HOA Fees (monthly)", "0"),
    FieldSpec::new("homeInsurance", "Home Insurance (annual)", "800"),
    FieldSpec::new("maintenance", "Maintenance (%/yr)", "1"),
    FieldSpec::new("appreciation", "Home Appreciation (%/yr)", "3"),
    FieldSpec::new("rentIncrease", "Rent Increase (%/yr)", "2"),
    FieldSpec::new("timeHorizon", "Time Horizon (years)", "7"),
];

//rates are percentages, as entered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentVsBuyInput {
    pub home_price: f64,
    pub down_payment_percent: f64,
    pub interest_rate: f64,
    pub loan_term_years: f64,
    pub monthly_rent: f64,
    pub property_tax_rate: f64,
    pub hoa_fees: f64,
    pub home_insurance: f64,
    pub maintenance_rate: f64,
    pub appreciation_rate: f64,
    pub rent_increase_rate: f64,
    pub time_horizon_years: f64,
}

impl RentVsBuyInput {
    pub fn from_record(record: &InputRecord) -> Self {
        RentVsBuyInput {
            home_price: record.number("homePrice"),
            down_payment_percent: record.number("downPayment"),
            interest_rate: record.number("interestRate"),
            loan_term_years: record.number("loanTerm"),
            monthly_rent: record.number("monthlyRent"),
            property_tax_rate: record.number("propertyTax"),
            hoa_fees: record.number("hoaFees"),
            home_insurance: record.number("homeInsurance"),
            maintenance_rate: record.number("maintenance"),
            appreciation_rate: record.number("appreciation"),
            rent_increase_rate: record.number("rentIncrease"),
            time_horizon_years: record.number("timeHorizon"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Buying is better")]
    Buy,
    #[serde(rename = "Renting is better")]
    Rent,
    #[serde(rename = "Enter values to see calculation")]
    NeedsInput,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Recommendation::Buy => "Buying is better",
            Recommendation::Rent => "Renting is better",
            Recommendation::NeedsInput => "Enter values to see calculation",
        };
        f.write_str(text)
    }
}

//cumulative position at the end of a year, whole currency units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearComparison {
    pub year: u32,
    pub rent_cost: f64,
    pub buying_cost: f64,
    pub home_equity: f64,
    pub home_value: f64,
    pub mortgage_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentVsBuyResult {
    pub monthly_mortgage: f64,
    pub monthly_buying_cost: f64,
    pub down_payment_amount: f64,
    pub loan_amount: f64,
    pub total_buying_cost: f64,
    pub total_rent_cost: f64,
    pub home_value: f64,
    pub final_mortgage_balance: f64,
    pub net_worth_difference: f64,
    pub recommendation: Recommendation,
    pub break_even_year: u32,
    pub chart_data: Vec<YearComparison>,
}

impl RentVsBuyResult {
    //zeroed result shown until the required fields are filled in
    pub fn placeholder() -> Self {
        RentVsBuyResult {
            monthly_mortgage: 0.0,
            monthly_buying_cost: 0.0,
            down_payment_amount: 0.0,
            loan_amount: 0.0,
            total_buying_cost: 0.0,
            total_rent_cost: 0.0,
            home_value: 0.0,
            final_mortgage_balance: 0.0,
            net_worth_difference: 0.0,
            recommendation: Recommendation::NeedsInput,
            break_even_year: 0,
            chart_data: Vec::new(),
        }
    }
}

pub fn compute(input: &RentVsBuyInput) -> RentVsBuyResult {
    let home_price = input.home_price;
    let horizon = input.time_horizon_years.min(MAX_YEARS);

    if home_price == 0.0 || input.monthly_rent == 0.0 || horizon <= 0.0 {
        return RentVsBuyResult::placeholder();
    }

    let down_payment = home_price * (input.down_payment_percent / 100.0);
    let loan_amount = home_price - down_payment;
    let monthly_rate = monthly_rate_from_percent(input.interest_rate);
    let total_payments = input.loan_term_years.min(MAX_YEARS) * 12.0;

    let monthly_mortgage = monthly_payment(loan_amount, monthly_rate, total_payments);

    let monthly_property_tax = home_price * (input.property_tax_rate / 100.0) / 12.0;
    let monthly_insurance = input.home_insurance / 12.0;
    let monthly_maintenance = home_price * (input.maintenance_rate / 100.0) / 12.0;

    let monthly_buying_cost = monthly_mortgage
        + monthly_property_tax
        + monthly_insurance
        + input.hoa_fees
        + monthly_maintenance;

    let rent_growth = 1.0 + input.rent_increase_rate / 100.0;
    let appreciation = 1.0 + input.appreciation_rate / 100.0;

    //one pass feeds both the chart and the horizon-end figures
    let years = horizon.floor() as u32;
    let mut chart_data = Vec::new();
    let mut cumulative_rent = 0.0;
    let mut cumulative_buying = down_payment;
    let mut current_rent = input.monthly_rent;
    let mut current_home_value = home_price;
    let mut mortgage_balance = loan_amount;

    for year in 0..=years {
        if year > 0 {
            cumulative_rent += current_rent * 12.0;
            cumulative_buying += monthly_buying_cost * 12.0;
            current_rent *= rent_growth;
            current_home_value *= appreciation;

            for _ in 0..12 {
                if mortgage_balance > 0.0 {
                    mortgage_balance =
                        amortize_month(mortgage_balance, monthly_rate, monthly_mortgage).balance;
                }
            }
        }

        let home_equity = (current_home_value - mortgage_balance).max(0.0);

        chart_data.push(YearComparison {
            year,
            rent_cost: round_half_up(cumulative_rent),
            buying_cost: round_half_up(cumulative_buying),
            home_equity: round_half_up(home_equity),
            home_value: round_half_up(current_home_value),
            mortgage_balance: round_half_up(mortgage_balance),
        });
    }

    //a fractional horizon keeps paying down the loan for its leftover months
    let horizon_months = (horizon * 12.0).min(total_payments).ceil();
    let mut month = f64::from(years) * 12.0;
    while month < horizon_months && mortgage_balance > 0.0 {
        mortgage_balance = amortize_month(mortgage_balance, monthly_rate, monthly_mortgage).balance;
        month += 1.0;
    }

    let total_rent_cost = cumulative_rent;
    let total_buying_cost = down_payment + monthly_buying_cost * horizon * 12.0;
    let home_value = home_price * appreciation.powf(horizon);
    let final_mortgage_balance = mortgage_balance;

    let net_worth_difference = (home_value - final_mortgage_balance) - total_rent_cost;

    let break_even_year = chart_data
        .iter()
        .skip(1)
        .find(|point| point.buying_cost <= point.rent_cost)
        .map(|point| point.year)
        .unwrap_or(0);

    let recommendation = if net_worth_difference > 0.0 {
        Recommendation::Buy
    } else {
        Recommendation::Rent
    };

    tracing::debug!(
        monthly_mortgage,
        monthly_buying_cost,
        net_worth_difference,
        break_even_year,
        "rent vs buy computed"
    );

    RentVsBuyResult {
        monthly_mortgage,
        monthly_buying_cost,
        down_payment_amount: down_payment,
        loan_amount,
        total_buying_cost,
        total_rent_cost,
        home_value,
        final_mortgage_balance,
        net_worth_difference,
        recommendation,
        break_even_year,
        chart_data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::defaults_record;

    fn input(home_price: &str, rent: &str) -> RentVsBuyInput {
        let record = defaults_record(FIELDS)
            .with("homePrice", home_price)
            .with("monthlyRent", rent);
        RentVsBuyInput::from_record(&record)
    }

    #[test]
    fn placeholder_when_required_fields_missing() {
        let result = compute(&input("", "2500"));
        assert_eq!(result, RentVsBuyResult::placeholder());
        assert_eq!(
            result.recommendation.to_string(),
            "Enter values to see calculation"
        );

        let result = compute(&input("500000", "0"));
        assert!(result.chart_data.is_empty());
    }

    #[test]
    fn placeholder_without_a_horizon() {
        for horizon in ["0", "-3"] {
            let record = defaults_record(FIELDS)
                .with("homePrice", "500000")
                .with("monthlyRent", "2500")
                .with("timeHorizon", horizon);
            let result = compute(&RentVsBuyInput::from_record(&record));
            assert_eq!(result, RentVsBuyResult::placeholder());
        }
    }

    #[test]
    fn fractional_horizon_amortizes_leftover_months() {
        let record = defaults_record(FIELDS)
            .with("homePrice", "500000")
            .with("monthlyRent", "2500")
            .with("timeHorizon", "7.5");
        let result = compute(&RentVsBuyInput::from_record(&record));

        let rate = monthly_rate_from_percent(6.5);
        let mut balance = 400_000.0;
        for _ in 0..90 {
            balance = amortize_month(balance, rate, result.monthly_mortgage).balance;
        }

        assert_eq!(result.chart_data.len(), 8);
        assert!((result.final_mortgage_balance - balance).abs() < 1e-6);
        assert!(result.final_mortgage_balance < result.chart_data[7].mortgage_balance - 1000.0);
        let expected = result.home_value - balance - result.total_rent_cost;
        assert!((result.net_worth_difference - expected).abs() < 1e-6);
    }

    #[test]
    fn huge_horizon_is_capped() {
        let record = defaults_record(FIELDS)
            .with("homePrice", "500000")
            .with("monthlyRent", "2500")
            .with("timeHorizon", "1e12")
            .with("loanTerm", "1e12");
        let result = compute(&RentVsBuyInput::from_record(&record));

        assert_eq!(result.chart_data.len(), MAX_YEARS as usize + 1);
        assert!(result.monthly_mortgage.is_finite());
        assert!(result.home_value.is_finite());
        assert!(result.net_worth_difference.is_finite());
    }

    #[test]
    fn default_scenario_figures() {
        let result = compute(&input("500000", "2500"));

        assert_eq!(result.down_payment_amount, 100_000.0);
        assert_eq!(result.loan_amount, 400_000.0);
        assert!((result.monthly_mortgage - 2528.27).abs() < 0.01);

        //2528.27 + 500 tax + 66.67 insurance + 416.67 maintenance
        assert!((result.monthly_buying_cost - 3511.60).abs() < 0.01);

        assert_eq!(result.chart_data.len(), 8);
        assert_eq!(result.chart_data[0].rent_cost, 0.0);
        assert_eq!(result.chart_data[0].buying_cost, 100_000.0);
        assert_eq!(result.chart_data[0].home_equity, 100_000.0);
        assert_eq!(result.chart_data[1].rent_cost, 30_000.0);
        assert_eq!(result.chart_data[2].rent_cost, 60_600.0);
    }

    #[test]
    fn series_is_monotonic_in_time_and_cost() {
        let result = compute(&input("500000", "2500"));

        for pair in result.chart_data.windows(2) {
            assert_eq!(pair[1].year, pair[0].year + 1);
            assert!(pair[1].rent_cost > pair[0].rent_cost);
            assert!(pair[1].buying_cost > pair[0].buying_cost);
            assert!(pair[1].mortgage_balance < pair[0].mortgage_balance);
        }
    }

    #[test]
    fn no_equity_favours_renting() {
        let record = defaults_record(FIELDS)
            .with("homePrice", "500000")
            .with("monthlyRent", "2500")
            .with("downPayment", "0")
            .with("appreciation", "0");
        let result = compute(&RentVsBuyInput::from_record(&record));

        assert_eq!(result.recommendation, Recommendation::Rent);
        assert!(result.net_worth_difference < 0.0);
        assert_eq!(result.break_even_year, 0);
    }

    #[test]
    fn expensive_rent_breaks_even() {
        let result = compute(&input("300000", "4000"));
        assert_eq!(result.recommendation, Recommendation::Buy);
        assert!(result.break_even_year > 0);

        let point = &result.chart_data[result.break_even_year as usize];
        assert!(point.buying_cost <= point.rent_cost);
        let before = &result.chart_data[result.break_even_year as usize - 1];
        assert!(result.break_even_year == 1 || before.buying_cost > before.rent_cost);
    }

    #[test]
    fn mortgage_balance_clamps_after_payoff() {
        let record = defaults_record(FIELDS)
            .with("homePrice", "200000")
            .with("monthlyRent", "1500")
            .with("loanTerm", "5")
            .with("timeHorizon", "10");
        let result = compute(&RentVsBuyInput::from_record(&record));

        assert_eq!(result.chart_data.len(), 11);
        assert_eq!(result.final_mortgage_balance, 0.0);
        let last = result.chart_data.last().unwrap();
        assert_eq!(last.mortgage_balance, 0.0);
        assert_eq!(last.home_equity, last.home_value);
    }
}
