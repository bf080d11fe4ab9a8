use crate::models::transaction::{Category, Transaction};
use crate::store::LedgerStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Income,
    Expense,
    Plain,
}

impl From<&Category> for RowStyle {
    fn from(category: &Category) -> Self {
        match category {
            Category::Income => RowStyle::Income,
            Category::Expense => RowStyle::Expense,
            Category::Other(_) => RowStyle::Plain,
        }
    }
}

/// One rendered table row. Everything is preformatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: String,
    pub timestamp: String,
    pub amount: String,
    pub category: String,
    pub description: String,
    pub style: RowStyle,
}

impl From<&Transaction> for RowView {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: tx.id().to_string(),
            timestamp: tx.display_timestamp(),
            amount: format!("{:.2}", tx.amount()),
            category: tx.category().to_string(),
            description: tx.description().to_string(),
            style: RowStyle::from(tx.category()),
        }
    }
}

/// Read-only projection of the store used by every front end.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSnapshot {
    pub rows: Vec<RowView>,
    pub total: f64,
}

impl LedgerSnapshot {
    pub fn capture(store: &LedgerStore) -> Self {
        Self {
            rows: store.list().iter().map(RowView::from).collect(),
            total: store.total_balance(),
        }
    }

    pub fn total_line(&self, label: &str) -> String {
        format_total(label, self.total)
    }

    pub fn id_at(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(|row| row.id.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn format_total(label: &str, total: f64) -> String {
    format!("{}{:.2}", label, total)
}
