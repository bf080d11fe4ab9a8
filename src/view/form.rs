use crate::error::Result;
use crate::operations::add::{TransactionInput, create_transaction_input};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Amount,
    Category,
    Description,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Amount, Field::Category, Field::Description];

    fn next(self) -> Self {
        match self {
            Field::Amount => Field::Category,
            Field::Category => Field::Description,
            Field::Description => Field::Amount,
        }
    }

    fn previous(self) -> Self {
        match self {
            Field::Amount => Field::Description,
            Field::Category => Field::Amount,
            Field::Description => Field::Category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Amount => "Amount",
            Field::Category => "Category",
            Field::Description => "Description",
        }
    }
}

/// Text state of the "new transaction" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionForm {
    amount: String,
    category: String,
    description: String,
    focus: Field,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self {
            amount: String::new(),
            category: "income".to_string(),
            description: String::new(),
            focus: Field::Amount,
        }
    }
}

impl TransactionForm {
    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Amount => &self.amount,
            Field::Category => &self.category,
            Field::Description => &self.description,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Amount => &mut self.amount,
            Field::Category => &mut self.category,
            Field::Description => &mut self.description,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn push_char(&mut self, ch: char) {
        let focus = self.focus;
        self.value_mut(focus).push(ch);
    }

    pub fn pop_char(&mut self) {
        let focus = self.focus;
        self.value_mut(focus).pop();
    }

    /// Parses the current field values. The form itself is left as is.
    pub fn to_input(&self) -> Result<TransactionInput> {
        create_transaction_input(&self.amount, &self.category, &self.description)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;

    fn type_text(form: &mut TransactionForm, text: &str) {
        for ch in text.chars() {
            form.push_char(ch);
        }
    }

    #[test]
    fn test_focus_cycles_through_fields() {
        let mut form = TransactionForm::default();
        assert_eq!(form.focus(), Field::Amount);
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus(), Field::Description);
        form.focus_next();
        assert_eq!(form.focus(), Field::Amount);
        form.focus_previous();
        assert_eq!(form.focus(), Field::Description);
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut form = TransactionForm::default();
        type_text(&mut form, "12.55");
        form.pop_char();
        form.focus_next();
        form.pop_char();
        assert_eq!(form.value(Field::Amount), "12.5");
        assert_eq!(form.value(Field::Category), "incom");
    }

    #[test]
    fn test_to_input_and_reset() {
        let mut form = TransactionForm::default();
        type_text(&mut form, "100");
        form.focus_previous();
        type_text(&mut form, "salary");

        let input = form.to_input().expect("parse failed");
        assert_eq!(input.amount, 100.0);
        assert_eq!(input.category, "income");
        assert_eq!(input.description, "salary");

        form.reset();
        assert_eq!(form, TransactionForm::default());
    }

    #[test]
    fn test_to_input_rejects_bad_amount() {
        let mut form = TransactionForm::default();
        type_text(&mut form, "abc");
        assert!(matches!(form.to_input(), Err(LedgerError::InvalidAmount(_))));
        assert_eq!(form.value(Field::Amount), "abc");
    }
}
