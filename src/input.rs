use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::majors::{self, Major};

/// Rejection reasons for user-entered values. The display text doubles as the
/// corrective message shown on re-prompt.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a number between 1-12")]
    InvalidChoice,
    #[error("Please enter a budget amount")]
    EmptyInput,
    #[error("Please enter a valid number (e.g. 25000)")]
    NotANumber,
    #[error("Please enter a positive number")]
    NonPositive,
    #[error("Budget too low. Enter at least $1,000")]
    TooLow,
}

pub fn validate_major_choice(choice: &str) -> Result<&'static Major, ValidationError> {
    majors::find(choice.trim()).ok_or(ValidationError::InvalidChoice)
}

/// Accepts "25000", "25,000", "$25,000" etc. Budget must be a whole dollar
/// amount of at least $1,000. No upper bound.
pub fn validate_budget_input(raw: &str) -> Result<u64, ValidationError> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '$')
        .collect();

    if cleaned.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let amount: i64 = cleaned.parse().map_err(|_| ValidationError::NotANumber)?;

    if amount <= 0 {
        return Err(ValidationError::NonPositive);
    }
    if amount < 1000 {
        return Err(ValidationError::TooLow);
    }
    Ok(amount as u64)
}

/// Retry combinator: prompt on stdout, validate one line of stdin, repeat
/// until the validator accepts. EOF surfaces as an io::Error so the driver
/// can exit cleanly instead of spinning.
pub fn prompt_until<T>(
    prompt: &str,
    validate: impl Fn(&str) -> Result<T, ValidationError>,
) -> io::Result<T> {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("{}", prompt);
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed",
            ));
        }

        match validate(line.trim()) {
            Ok(value) => return Ok(value),
            Err(e) => println!("  {}", e),
        }
    }
}
