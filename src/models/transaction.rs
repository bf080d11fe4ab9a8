use chrono::{DateTime, Local};
use std::fmt;

/// Display format for transaction timestamps.
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Free-text label attached to a transaction. Only `income` and `expense`
/// take part in the balance; anything else is carried along untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Income,
    Expense,
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Income => "income",
            Category::Expense => "expense",
            Category::Other(label) => label,
        }
    }

    pub fn balance_sign(&self) -> f64 {
        match self {
            Category::Income => 1.0,
            Category::Expense => -1.0,
            Category::Other(_) => 0.0,
        }
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        match label {
            "income" => Category::Income,
            "expense" => Category::Expense,
            other => Category::Other(other.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        match label.as_str() {
            "income" => Category::Income,
            "expense" => Category::Expense,
            _ => Category::Other(label),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    id: String,
    timestamp: DateTime<Local>,
    amount: f64,
    category: Category,
    description: String,
}

impl Transaction {
    pub(crate) fn new(
        id: String,
        timestamp: DateTime<Local>,
        amount: f64,
        category: Category,
        description: String,
    ) -> Self {
        Self {
            id,
            timestamp,
            amount,
            category,
            description,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn display_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Contribution of this record to the running balance.
    pub fn signed_amount(&self) -> f64 {
        self.amount * self.category.balance_sign()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_test_transaction(amount: f64, category: &str) -> Transaction {
        let timestamp = Local
            .with_ymd_and_hms(2025, 11, 9, 14, 30, 5)
            .single()
            .expect("Invalid timestamp");
        Transaction::new(
            "tx-1".to_string(),
            timestamp,
            amount,
            Category::from(category),
            "Test Description".to_string(),
        )
    }

    #[test]
    fn test_category_reserved_labels() {
        assert_eq!(Category::from("income"), Category::Income);
        assert_eq!(Category::from("expense"), Category::Expense);
        assert_eq!(
            Category::from("Income"),
            Category::Other("Income".to_string())
        );
        assert_eq!(Category::from(""), Category::Other(String::new()));
    }

    #[test]
    fn test_category_keeps_original_label() {
        assert_eq!(Category::from("transfer").as_str(), "transfer");
        assert_eq!(Category::from("expense".to_string()).to_string(), "expense");
    }

    #[test]
    fn test_signed_amount_by_category() {
        assert_eq!(create_test_transaction(100.0, "income").signed_amount(), 100.0);
        assert_eq!(create_test_transaction(40.0, "expense").signed_amount(), -40.0);
        assert_eq!(create_test_transaction(10.0, "transfer").signed_amount(), 0.0);
    }

    #[test]
    fn test_display_timestamp() {
        let tx = create_test_transaction(1.0, "income");
        assert_eq!(tx.display_timestamp(), "09.11.2025 14:30:05");
    }
}
