//! Standalone loan calculator

use clap::Args;

use super::parse_amount;
use crate::config::Settings;
use crate::display::report::format_quote;
use crate::error::{EduEasyError, EduEasyResult};
use crate::services::PaymentQuote;

#[derive(Args)]
pub struct CalcArgs {
    /// Amount to borrow
    pub amount: String,
    /// Term in months (defaults to the configured term)
    #[arg(short, long)]
    pub months: Option<u32>,
    /// Annual interest rate in percent (defaults to the configured rate)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: Option<f64>,
}

pub fn handle_calc_command(settings: &Settings, args: CalcArgs) -> EduEasyResult<()> {
    let amount = parse_amount(&args.amount, "amount")?;
    let months = args
        .months
        .unwrap_or_else(|| (settings.loan_term_years * 12.0).round() as u32);
    if months == 0 {
        return Err(EduEasyError::Validation(
            "Term must be at least one month".into(),
        ));
    }

    let rate = args.rate.unwrap_or(settings.interest_rate);
    if !rate.is_finite() {
        return Err(EduEasyError::Validation(format!("Invalid rate: {}", rate)));
    }

    let quote = PaymentQuote::for_months(amount.to_major(), rate, months);
    print!("{}", format_quote(&quote, settings.currency));
    Ok(())
}
