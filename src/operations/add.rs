use crate::error::{LedgerError, Result};
use crate::models::transaction::Transaction;
use crate::store::LedgerStore;

/// Raw fields of a submitted transaction, amount already parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionInput {
    pub amount: f64,
    pub category: String,
    pub description: String,
}

/// Parses the amount field of a submission.
///
/// Only complete, finite numbers are accepted: `"12abc"`, `"NaN"` and `"inf"`
/// are all rejected.
pub fn parse_amount(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(LedgerError::InvalidAmount(trimmed.to_string())),
    }
}

/// Builds an input from the three form fields. Category and description are
/// kept exactly as typed.
pub fn create_transaction_input(
    amount_text: &str,
    category: &str,
    description: &str,
) -> Result<TransactionInput> {
    Ok(TransactionInput {
        amount: parse_amount(amount_text)?,
        category: category.to_string(),
        description: description.to_string(),
    })
}

/// Parses a single line in the form `amount, category, description`.
/// The description is optional and may itself contain commas.
pub fn parse_transaction_input(line: &str) -> Result<TransactionInput> {
    let mut parts = line.splitn(3, ',').map(str::trim);
    let amount = parts.next().unwrap_or("");
    let category = parts.next().ok_or_else(|| {
        LedgerError::InvalidInput(
            "expected at least 'amount, category' separated by a comma".to_string(),
        )
    })?;
    let description = parts.next().unwrap_or("");

    create_transaction_input(amount, category, description)
}

pub fn add_transaction_to_store(
    store: &mut LedgerStore,
    input: TransactionInput,
) -> Result<Transaction> {
    store.add(input.amount, input.category, input.description)
}
