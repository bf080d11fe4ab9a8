use crate::error::{LedgerError, Result};
use crate::models::transaction::{Category, Transaction};
use chrono::Local;
use uuid::Uuid;

/// Authoritative, insertion-ordered list of transactions.
///
/// The store is owned by whichever front end drives it and is handed to view
/// code by reference; there is no shared or global instance.
#[derive(Debug, Default)]
pub struct LedgerStore {
    transactions: Vec<Transaction>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new transaction and returns a copy of it.
    ///
    /// Non-finite amounts are rejected with [`LedgerError::InvalidAmount`] and
    /// the store is left untouched.
    pub fn add(
        &mut self,
        amount: f64,
        category: impl Into<Category>,
        description: impl Into<String>,
    ) -> Result<Transaction> {
        if !amount.is_finite() {
            tracing::warn!(amount = %amount, "rejected non-finite amount");
            return Err(LedgerError::InvalidAmount(amount.to_string()));
        }

        let transaction = Transaction::new(
            self.next_id(),
            Local::now(),
            amount,
            category.into(),
            description.into(),
        );
        tracing::info!(
            id = transaction.id(),
            amount,
            category = %transaction.category(),
            "transaction added"
        );
        self.transactions.push(transaction.clone());
        Ok(transaction)
    }

    /// Removes the transaction with `id`. Returns `false` when nothing matched.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.transactions.iter().position(|t| t.id() == id) {
            Some(pos) => {
                self.transactions.remove(pos);
                tracing::info!(id, "transaction removed");
                true
            }
            None => {
                tracing::debug!(id, "remove ignored, no such transaction");
                false
            }
        }
    }

    pub fn list(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id() == id)
    }

    /// Case-insensitive category match, insertion order kept.
    pub fn by_category(&self, label: &str) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.category().as_str().eq_ignore_ascii_case(label))
            .cloned()
            .collect()
    }

    /// Income minus expense, unrounded.
    pub fn total_balance(&self) -> f64 {
        self.transactions
            .iter()
            .fold(0.0, |total, t| total + t.signed_amount())
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn next_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
