//! Fixed-rate mortgage repayments and amortization schedule.

/// Longest loan term accepted, in years.
pub const MAX_TERM_YEARS: u32 = 50;

/// Errors in loan inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MortgageError {
    #[error("Deposit cannot be greater than the Home Value")]
    DepositExceedsValue,
    #[error("Loan term must be at least one year")]
    ZeroTerm,
    #[error("Loan term cannot be longer than 50 years")]
    TermTooLong,
    #[error("Interest rate cannot be negative")]
    NegativeRate,
    #[error("Calculation overflowed; check the input values")]
    Overflow,
}

/// Fixed monthly payment for `principal` at `annual_rate_pct` over `years`.
pub fn monthly_payment(principal: f64, annual_rate_pct: f64, years: u32) -> Result<f64, MortgageError> {
    if years == 0 {
        return Err(MortgageError::ZeroTerm);
    }
    if years > MAX_TERM_YEARS {
        return Err(MortgageError::TermTooLong);
    }
    if annual_rate_pct < 0.0 {
        return Err(MortgageError::NegativeRate);
    }
    let n = f64::from(payment_count(years)?);
    if annual_rate_pct == 0.0 {
        return Ok(principal / n);
    }
    let r = annual_rate_pct / 100.0 / 12.0;
    let growth = (1.0 + r).powf(n);
    let payment = principal * (r * growth) / (growth - 1.0);
    if payment.is_finite() {
        Ok(payment)
    } else {
        Err(MortgageError::Overflow)
    }
}

fn payment_count(years: u32) -> Result<u32, MortgageError> {
    years.checked_mul(12).ok_or(MortgageError::Overflow)
}

/// Loan summary derived from home value and deposit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub loan_amount: f64,
    pub monthly_payment: f64,
    pub total_payments: f64,
    pub total_interest: f64,
    pub number_of_payments: u32,
}

/// Summarize the loan. `Ok(None)` when there is nothing to borrow.
pub fn summary(
    home_value: f64,
    deposit: f64,
    annual_rate_pct: f64,
    years: u32,
) -> Result<Option<Summary>, MortgageError> {
    let loan_amount = home_value - deposit;
    if loan_amount < 0.0 {
        return Err(MortgageError::DepositExceedsValue);
    }
    let payment = monthly_payment(loan_amount, annual_rate_pct, years)?;
    if loan_amount == 0.0 {
        return Ok(None);
    }
    let number_of_payments = payment_count(years)?;
    let total_payments = payment * f64::from(number_of_payments);
    Ok(Some(Summary {
        loan_amount,
        monthly_payment: payment,
        total_payments,
        total_interest: total_payments - loan_amount,
        number_of_payments,
    }))
}

/// One month of the amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleRow {
    pub month: u32,
    pub year: u32,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    pub remaining_balance: f64,
}

/// Month-by-month schedule. The last principal payment is capped at the remaining
/// balance and the balance never drops below zero.
pub fn schedule(loan: &Summary, annual_rate_pct: f64) -> Vec<ScheduleRow> {
    let r = annual_rate_pct / 100.0 / 12.0;
    let mut balance = loan.loan_amount;
    let mut rows = Vec::with_capacity(loan.number_of_payments as usize);

    for month in 1..=loan.number_of_payments {
        let interest = balance * r;
        let mut principal = loan.monthly_payment - interest;
        let mut payment = loan.monthly_payment;
        if principal > balance {
            principal = balance;
            payment = interest + principal;
        }
        balance = (balance - principal).max(0.0);
        rows.push(ScheduleRow {
            month,
            year: month.div_ceil(12),
            payment,
            principal,
            interest,
            remaining_balance: balance,
        });
    }
    rows
}

/// End-of-year remaining balance for each loan year.
pub fn yearly_balances(rows: &[ScheduleRow]) -> Vec<(u32, f64)> {
    let mut out: Vec<(u32, f64)> = Vec::new();
    for row in rows {
        match out.last_mut() {
            Some((year, balance)) if *year == row.year => {
                *balance = balance.min(row.remaining_balance);
            }
            _ => out.push((row.year, row.remaining_balance)),
        }
    }
    out
}

/// Format an amount with thousands separators and two decimals (e.g. `1,234,567.89`).
pub fn format_amount(value: f64) -> String {
    let s = format!("{:.2}", value.abs());
    let (int_part, frac) = s.split_once('.').unwrap_or((s.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if value < 0.0 && s != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn monthly_payment_known_value() {
        // 200k at 6% over 30 years
        let p = monthly_payment(200_000.0, 6.0, 30).unwrap();
        assert!(close(p, 1199.10), "got {}", p);
    }

    #[test]
    fn monthly_payment_zero_rate_divides_evenly() {
        assert_eq!(monthly_payment(120_000.0, 0.0, 10).unwrap(), 1000.0);
    }

    #[test]
    fn monthly_payment_rejects_bad_input() {
        assert_eq!(monthly_payment(1.0, 5.0, 0), Err(MortgageError::ZeroTerm));
        assert_eq!(monthly_payment(1.0, -1.0, 5), Err(MortgageError::NegativeRate));
    }

    #[test]
    fn term_longer_than_limit_is_rejected() {
        assert!(monthly_payment(100_000.0, 5.0, MAX_TERM_YEARS).is_ok());
        assert_eq!(
            monthly_payment(100_000.0, 5.0, MAX_TERM_YEARS + 1),
            Err(MortgageError::TermTooLong)
        );
        assert_eq!(
            summary(100_000.0, 0.0, 5.0, 400_000_000),
            Err(MortgageError::TermTooLong)
        );
        assert_eq!(summary(100_000.0, 0.0, 0.0, u32::MAX), Err(MortgageError::TermTooLong));
    }

    #[test]
    fn summary_rejects_deposit_above_value() {
        assert_eq!(
            summary(100.0, 200.0, 5.0, 30),
            Err(MortgageError::DepositExceedsValue)
        );
        assert_eq!(summary(100.0, 100.0, 5.0, 30), Ok(None));
    }

    #[test]
    fn summary_totals() {
        let s = summary(10_000_000.0, 1_000_000.0, 5.5, 30).unwrap().unwrap();
        assert_eq!(s.loan_amount, 9_000_000.0);
        assert_eq!(s.number_of_payments, 360);
        assert!(close(s.total_payments, s.monthly_payment * 360.0));
        assert!(close(s.total_interest, s.total_payments - 9_000_000.0));
    }

    #[test]
    fn schedule_pays_off_loan() {
        let s = summary(300_000.0, 50_000.0, 4.25, 15).unwrap().unwrap();
        let rows = schedule(&s, 4.25);
        assert_eq!(rows.len(), 180);
        assert_eq!(rows[0].year, 1);
        assert_eq!(rows[11].year, 1);
        assert_eq!(rows[12].year, 2);
        assert!(rows.last().unwrap().remaining_balance < 0.01);
        assert!(rows.iter().all(|r| r.remaining_balance >= 0.0));
        let paid: f64 = rows.iter().map(|r| r.principal).sum();
        assert!(close(paid, 250_000.0), "principal paid {}", paid);
    }

    #[test]
    fn yearly_balances_take_end_of_year() {
        let s = summary(12_000.0, 0.0, 0.0, 2).unwrap().unwrap();
        let rows = schedule(&s, 0.0);
        let years = yearly_balances(&rows);
        assert_eq!(years.len(), 2);
        assert_eq!(years[0], (1, 6_000.0));
        assert!(years[1].1.abs() < 1e-9);
    }

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(1_234_567.891), "1,234,567.89");
        assert_eq!(format_amount(999.0), "999.00");
        assert_eq!(format_amount(-1000.5), "-1,000.50");
        assert_eq!(format_amount(0.0), "0.00");
    }
}
