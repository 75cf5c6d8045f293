//fixed-rate annuity math shared by the loan and rent-vs-buy calculators

//converts an annual percentage (6.5) into a monthly rate (0.0054166..)
pub fn monthly_rate_from_percent(annual_percent: f64) -> f64 {
    annual_percent / 100.0 / 12.0
}

//standard amortized payment: M = P * r * (1+r)^n / ((1+r)^n - 1)
//straight-line division when the periodic rate is zero
pub fn monthly_payment(principal: f64, monthly_rate: f64, total_payments: f64) -> f64 {
    if total_payments <= 0.0 {
        return 0.0;
    }

    if monthly_rate > 0.0 {
        let growth = (1.0 + monthly_rate).powf(total_payments);
        principal * (monthly_rate * growth) / (growth - 1.0)
    } else {
        principal / total_payments
    }
}

//one month of scheduled amortization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmortizationStep {
    pub interest: f64,
    pub principal: f64,
    pub balance: f64,
}

//applies one scheduled payment to a balance, clamping the new balance at zero
pub fn amortize_month(balance: f64, monthly_rate: f64, payment: f64) -> AmortizationStep {
    let interest = balance * monthly_rate;
    let principal = payment - interest;

    AmortizationStep {
        interest,
        principal,
        balance: (balance - principal).max(0.0),
    }
}
