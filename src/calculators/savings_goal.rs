use crate::calculators::{FieldSpec, MAX_YEARS};
use crate::input::{round_half_up, InputRecord};
use serde::{Deserialize, Serialize};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("targetAmount", "Target Amount", ""),
    FieldSpec::new("currentSavings", "Current Savings", "0"),
    FieldSpec::new("monthlyContribution", "Monthly Contribution", ""),
    FieldSpec::new("annualReturn", "Expected Return (%)", "5"),
    FieldSpec::new("deadline", "Time to Goal (years)", "5"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoalInput {
    pub target_amount: f64,
    pub current_savings: f64,
    pub monthly_contribution: f64,
    //fraction, not percent
    pub annual_return: f64,
    pub deadline_years: f64,
}

impl SavingsGoalInput {
    pub fn from_record(record: &InputRecord) -> Self {
        SavingsGoalInput {
            target_amount: record.number("targetAmount"),
            current_savings: record.number("currentSavings"),
            monthly_contribution: record.number("monthlyContribution"),
            annual_return: record.number("annualReturn") / 100.0,
            deadline_years: record.number("deadline"),
        }
    }

    pub fn monthly_rate(&self) -> f64 {
        self.annual_return / 12.0
    }

    pub fn deadline_months(&self) -> f64 {
        self.deadline_years.min(MAX_YEARS) * 12.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsPoint {
    pub year: u32,
    pub balance: f64,
    pub target: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoalResult {
    pub will_reach_goal: bool,
    pub projected_amount: f64,
    pub months_to_goal: u32,
    pub required_monthly: f64,
    pub progress_percent: f64,
    pub chart_data: Vec<SavingsPoint>,
}

impl SavingsGoalResult {
    pub fn zero() -> Self {
        SavingsGoalResult {
            will_reach_goal: false,
            projected_amount: 0.0,
            months_to_goal: 0,
            required_monthly: 0.0,
            progress_percent: 0.0,
            chart_data: Vec::new(),
        }
    }

    pub fn years_to_goal(&self) -> u32 {
        self.months_to_goal.div_ceil(12)
    }

    pub fn headline(&self) -> &'static str {
        if self.will_reach_goal {
            "You'll reach your goal!"
        } else {
            "You won't reach your goal at this rate"
        }
    }
}

//contribution needed each month to land exactly on the target at the deadline
//solves the future-value annuity for the payment, clamped at zero
pub fn required_monthly_contribution(input: &SavingsGoalInput) -> f64 {
    let rate = input.monthly_rate();
    let months = input.deadline_months();
    let shortfall = input.target_amount - input.current_savings;

    let required = if months <= 0.0 {
        shortfall
    } else if rate > 0.0 {
        let growth = (1.0 + rate).powf(months);
        (input.target_amount - input.current_savings * growth) / ((growth - 1.0) / rate)
    } else {
        shortfall / months
    };

    required.max(0.0)
}

pub fn compute(input: &SavingsGoalInput) -> SavingsGoalResult {
    let target = input.target_amount;
    if target == 0.0 {
        return SavingsGoalResult::zero();
    }

    let rate = input.monthly_rate();
    let total_months = input.deadline_months();

    let mut chart_data = Vec::new();
    let mut balance = input.current_savings;
    let mut months_to_goal = None;
    let mut month = 0u32;

    while (month as f64) <= total_months {
        if month > 0 {
            balance = balance * (1.0 + rate) + input.monthly_contribution;
        }

        if months_to_goal.is_none() && balance >= target {
            months_to_goal = Some(month);
        }

        if month % 12 == 0 {
            chart_data.push(SavingsPoint {
                year: month / 12,
                balance: round_half_up(balance),
                target,
            });
        }

        month += 1;
    }

    let will_reach_goal = balance >= target;
    let required_monthly = required_monthly_contribution(input);
    let progress_percent = input.current_savings / target * 100.0;

    tracing::debug!(
        projected_amount = balance,
        required_monthly,
        will_reach_goal,
        "savings goal projected"
    );

    SavingsGoalResult {
        will_reach_goal,
        projected_amount: balance,
        months_to_goal: months_to_goal.unwrap_or(0),
        required_monthly,
        progress_percent,
        chart_data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(target: f64, current: f64, monthly: f64, rate: f64, years: f64) -> SavingsGoalInput {
        SavingsGoalInput {
            target_amount: target,
            current_savings: current,
            monthly_contribution: monthly,
            annual_return: rate,
            deadline_years: years,
        }
    }

    #[test]
    fn no_target_is_zero() {
        assert_eq!(compute(&input(0.0, 500.0, 100.0, 0.05, 5.0)), SavingsGoalResult::zero());
    }

    #[test]
    fn linear_saving_hits_target_month() {
        let result = compute(&input(1_200.0, 0.0, 100.0, 0.0, 2.0));

        assert!(result.will_reach_goal);
        assert_eq!(result.months_to_goal, 12);
        assert_eq!(result.years_to_goal(), 1);
        assert_eq!(result.projected_amount, 2_400.0);
        assert_eq!(result.required_monthly, 50.0);
        assert_eq!(result.headline(), "You'll reach your goal!");

        let years: Vec<u32> = result.chart_data.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![0, 1, 2]);
        assert!(result.chart_data.iter().all(|p| p.target == 1_200.0));
    }

    #[test]
    fn already_at_target() {
        let result = compute(&input(1_000.0, 1_500.0, 0.0, 0.05, 3.0));
        assert!(result.will_reach_goal);
        assert_eq!(result.months_to_goal, 0);
        assert_eq!(result.required_monthly, 0.0);
        assert_eq!(result.progress_percent, 150.0);
    }

    #[test]
    fn falls_short() {
        let result = compute(&input(100_000.0, 5_000.0, 200.0, 0.05, 5.0));
        assert!(!result.will_reach_goal);
        assert_eq!(result.months_to_goal, 0);
        assert!(result.required_monthly > 200.0);
        assert_eq!(result.progress_percent, 5.0);
    }

    #[test]
    fn required_monthly_reaches_target() {
        let mut goal = input(50_000.0, 2_000.0, 0.0, 0.05, 5.0);
        goal.monthly_contribution = required_monthly_contribution(&goal);

        let result = compute(&goal);
        assert!((result.projected_amount - 50_000.0).abs() < 1e-6);
    }

    #[test]
    fn zero_deadline_needs_full_shortfall() {
        let goal = input(10_000.0, 4_000.0, 0.0, 0.05, 0.0);
        assert_eq!(required_monthly_contribution(&goal), 6_000.0);
        let result = compute(&goal);
        assert_eq!(result.chart_data.len(), 1);
        assert!(!result.will_reach_goal);
    }

    #[test]
    fn huge_deadline_is_capped() {
        let record = InputRecord::from_pairs([
            ("targetAmount", "1000000"),
            ("monthlyContribution", "100"),
            ("annualReturn", "5"),
            ("deadline", "1e12"),
        ]);
        let result = compute(&SavingsGoalInput::from_record(&record));

        assert_eq!(result.chart_data.len(), MAX_YEARS as usize + 1);
        assert!(result.will_reach_goal);
        assert!(result.projected_amount.is_finite());
        assert!(result.required_monthly.is_finite());
    }
}
