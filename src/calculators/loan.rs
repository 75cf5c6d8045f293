use crate::calculators::amortization::monthly_payment;
use crate::calculators::{FieldSpec, MAX_YEARS};
use crate::input::{round_half_up, InputRecord};
use serde::{Deserialize, Serialize};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("amount", "Loan Amount", ""),
    FieldSpec::new("extraPayment", "Extra Monthly Payment", "0"),
    FieldSpec::new("interestRate", "Interest Rate (%)", "6"),
    FieldSpec::new("termYears", "Loan Term (years)", "5"),
];

//months shown in the amortization table
pub const AMORTIZATION_TABLE_MONTHS: u32 = 12;

//a payment within half a cent of the payoff amount settles the loan
const PAYOFF_TOLERANCE: f64 = 0.005;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanInput {
    pub amount: f64,
    //fraction, not percent
    pub annual_rate: f64,
    pub term_years: f64,
    pub extra_payment: f64,
}

impl LoanInput {
    pub fn from_record(record: &InputRecord) -> Self {
        LoanInput {
            amount: record.number("amount"),
            annual_rate: record.number("interestRate") / 100.0,
            term_years: record.number("termYears"),
            extra_payment: record.number("extraPayment"),
        }
    }

    //nominal number of scheduled payments
    pub fn total_payments(&self) -> f64 {
        self.term_years.min(MAX_YEARS) * 12.0
    }

    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / 12.0
    }

    fn is_degenerate(&self) -> bool {
        self.amount == 0.0 || self.term_years == 0.0
    }
}

//one month of the full, unrounded schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPayment {
    pub month: u32,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoanSchedule {
    pub monthly_payment: f64,
    pub payments: Vec<ScheduledPayment>,
}

impl LoanSchedule {
    pub fn total_interest(&self) -> f64 {
        self.payments.iter().map(|p| p.interest).sum()
    }

    pub fn total_paid(&self) -> f64 {
        self.payments.iter().map(|p| p.payment).sum()
    }

    pub fn payoff_months(&self) -> u32 {
        self.payments.len() as u32
    }
}

//builds the month-by-month schedule until the balance reaches zero
//capped at twice the nominal term in case the payment never converges
pub fn schedule(input: &LoanInput) -> LoanSchedule {
    if input.is_degenerate() {
        return LoanSchedule {
            monthly_payment: 0.0,
            payments: Vec::new(),
        };
    }

    let monthly_rate = input.monthly_rate();
    let total_payments = input.total_payments();
    let scheduled = monthly_payment(input.amount, monthly_rate, total_payments);
    let month_cap = total_payments * 2.0;

    let mut payments = Vec::new();
    let mut balance = input.amount;
    let mut month = 0u32;

    while balance > 0.0 && (month as f64) < month_cap {
        let interest = balance * monthly_rate;
        let payoff = balance + interest;
        let offered = scheduled + input.extra_payment;
        month += 1;

        //the last payment only covers what is left, never more than offered
        let (payment, principal) = if offered >= payoff - PAYOFF_TOLERANCE {
            let principal = balance;
            balance = 0.0;
            (payoff.min(offered), principal)
        } else {
            let principal = offered - interest;
            balance = (balance - principal).max(0.0);
            (offered, principal)
        };

        payments.push(ScheduledPayment {
            month,
            payment,
            principal,
            interest,
            balance,
        });
    }

    LoanSchedule {
        monthly_payment: scheduled,
        payments,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanYearPoint {
    pub year: u32,
    pub balance: f64,
    pub interest_paid: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationRow {
    pub month: u32,
    pub principal: f64,
    pub interest: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanResult {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub payoff_months: u32,
    pub months_saved: u32,
    pub interest_saved: f64,
    pub chart_data: Vec<LoanYearPoint>,
    pub amortization_data: Vec<AmortizationRow>,
}

impl LoanResult {
    pub fn zero() -> Self {
        LoanResult {
            monthly_payment: 0.0,
            total_payment: 0.0,
            total_interest: 0.0,
            payoff_months: 0,
            months_saved: 0,
            interest_saved: 0.0,
            chart_data: Vec::new(),
            amortization_data: Vec::new(),
        }
    }

    //payoff time rounded up to whole years
    pub fn payoff_years(&self) -> u32 {
        self.payoff_months.div_ceil(12)
    }
}

pub fn compute(input: &LoanInput) -> LoanResult {
    if input.is_degenerate() {
        return LoanResult::zero();
    }

    let plan = schedule(input);

    let mut chart_data = Vec::new();
    let mut amortization_data = Vec::new();
    let mut interest_paid = 0.0;

    for entry in &plan.payments {
        interest_paid += entry.interest;

        if entry.month % 12 == 0 || entry.balance == 0.0 {
            chart_data.push(LoanYearPoint {
                year: entry.month.div_ceil(12),
                balance: round_half_up(entry.balance),
                interest_paid: round_half_up(interest_paid),
            });
        }

        if entry.month <= AMORTIZATION_TABLE_MONTHS {
            amortization_data.push(AmortizationRow {
                month: entry.month,
                principal: round_half_up(entry.principal),
                interest: round_half_up(entry.interest),
                balance: round_half_up(entry.balance),
            });
        }
    }

    let payoff_months = plan.payoff_months();
    let nominal_months = input.total_payments().ceil() as u32;

    let interest_saved = if input.extra_payment != 0.0 {
        let baseline = schedule(&LoanInput {
            extra_payment: 0.0,
            ..input.clone()
        });
        baseline.total_interest() - interest_paid
    } else {
        0.0
    };

    tracing::debug!(
        monthly_payment = plan.monthly_payment,
        payoff_months,
        total_interest = interest_paid,
        "loan amortized"
    );

    LoanResult {
        monthly_payment: plan.monthly_payment,
        total_payment: plan.total_paid(),
        total_interest: interest_paid,
        payoff_months,
        months_saved: nominal_months.saturating_sub(payoff_months),
        interest_saved,
        chart_data,
        amortization_data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(amount: f64, rate: f64, years: f64, extra: f64) -> LoanInput {
        LoanInput {
            amount,
            annual_rate: rate,
            term_years: years,
            extra_payment: extra,
        }
    }

    #[test]
    fn degenerate_inputs_are_zero() {
        assert_eq!(compute(&input(0.0, 0.06, 5.0, 0.0)), LoanResult::zero());
        assert_eq!(compute(&input(10_000.0, 0.06, 0.0, 0.0)), LoanResult::zero());
    }

    #[test]
    fn five_year_loan_pays_off_on_schedule() {
        let result = compute(&input(25_000.0, 0.06, 5.0, 0.0));

        assert!((result.monthly_payment - 483.32).abs() < 0.01);
        assert_eq!(result.payoff_months, 60);
        assert_eq!(result.payoff_years(), 5);
        assert_eq!(result.months_saved, 0);
        assert_eq!(result.interest_saved, 0.0);

        assert_eq!(result.chart_data.len(), 5);
        assert_eq!(result.chart_data.last().unwrap().balance, 0.0);
        assert_eq!(result.amortization_data.len(), 12);
        assert_eq!(result.amortization_data[0].interest, 125.0);

        //principal plus interest is everything paid
        assert!((result.total_payment - (25_000.0 + result.total_interest)).abs() < 1e-6);
    }

    #[test]
    fn extra_payment_shortens_loan() {
        let base = compute(&input(25_000.0, 0.06, 5.0, 0.0));
        let faster = compute(&input(25_000.0, 0.06, 5.0, 200.0));

        assert!(faster.payoff_months < base.payoff_months);
        assert!(faster.total_interest < base.total_interest);
        assert_eq!(faster.months_saved, 60 - faster.payoff_months);
        assert!((faster.interest_saved - (base.total_interest - faster.total_interest)).abs() < 1e-6);
    }

    #[test]
    fn payoff_snapshot_mid_year() {
        let result = compute(&input(25_000.0, 0.06, 5.0, 500.0));
        let last = result.chart_data.last().unwrap();

        assert_eq!(last.balance, 0.0);
        assert_eq!(last.year, result.payoff_months.div_ceil(12));
        assert!(result.payoff_months % 12 != 0);
    }

    #[test]
    fn zero_rate_is_straight_line() {
        let result = compute(&input(12_000.0, 0.0, 1.0, 0.0));
        assert_eq!(result.monthly_payment, 1_000.0);
        assert_eq!(result.total_interest, 0.0);
        assert_eq!(result.payoff_months, 12);
    }

    #[test]
    fn final_payment_never_overpays() {
        let plan = schedule(&input(10_000.0, 0.05, 3.0, 750.0));
        let last = plan.payments.last().unwrap();

        assert_eq!(last.balance, 0.0);
        assert!(last.payment <= plan.monthly_payment + 750.0);
        for entry in &plan.payments {
            assert!(entry.balance >= 0.0);
        }
    }

    #[test]
    fn settling_within_half_a_cent_pays_only_the_offer() {
        //second month owes about 10.0031 while 9.9999 is offered
        let loan = input(20.003, 0.0, 1.0, 8.333);
        let plan = schedule(&loan);
        let offered = plan.monthly_payment + 8.333;

        assert_eq!(plan.payoff_months(), 2);
        let last = plan.payments.last().unwrap();
        assert_eq!(last.balance, 0.0);
        assert_eq!(last.payment, offered);
        assert!(last.principal > offered);

        let principal: f64 = plan.payments.iter().map(|p| p.principal).sum();
        assert!((principal - 20.003).abs() < 1e-9);
        assert!(plan.payments.iter().all(|p| p.payment <= offered));
    }

    #[test]
    fn huge_term_is_capped() {
        let result = compute(&input(12_000.0, 0.0, 1e12, 0.0));
        assert_eq!(result.monthly_payment, 1.0);
        assert_eq!(result.payoff_months, (MAX_YEARS * 12.0) as u32);

        let record = InputRecord::from_pairs([("amount", "25000"), ("interestRate", "6"), ("termYears", "1e12")]);
        let result = compute(&LoanInput::from_record(&record));
        assert!(result.monthly_payment.is_finite());
        assert!(result.total_interest.is_finite());
        assert!(result.payoff_months <= (MAX_YEARS * 24.0) as u32);
    }
}
