use super::form::TransactionForm;
use super::snapshot::LedgerSnapshot;
use super::table::{self, Status};
use crate::error::{LedgerError, Result};
use crate::operations::add::add_transaction_to_store;
use crate::operations::remove::remove_transaction_from_store;
use crate::store::LedgerStore;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::widgets::TableState;
use std::io;
use std::time::Duration;

/// User intents decoded from key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Input(char),
    Backspace,
    NextField,
    PreviousField,
    Submit,
    SelectPrevious,
    SelectNext,
    DeleteSelected,
    Quit,
}

pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Many terminals emit both a Press and a Release event. Only act on Press/Repeat.
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('d') => Some(Action::DeleteSelected),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Tab => Some(Action::NextField),
        KeyCode::BackTab => Some(Action::PreviousField),
        KeyCode::Up => Some(Action::SelectPrevious),
        KeyCode::Down => Some(Action::SelectNext),
        KeyCode::Delete => Some(Action::DeleteSelected),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char(ch) => Some(Action::Input(ch)),
        _ => None,
    }
}

/// Presentation state of the ledger widget. The store itself is owned by the
/// caller and passed into every operation that needs it.
pub struct LedgerView {
    form: TransactionForm,
    snapshot: LedgerSnapshot,
    table_state: TableState,
    status: Status,
    total_label: String,
}

impl LedgerView {
    pub fn new(store: &LedgerStore, total_label: impl Into<String>) -> Self {
        let mut view = Self {
            form: TransactionForm::default(),
            snapshot: LedgerSnapshot::capture(store),
            table_state: TableState::default(),
            status: Status::Hint,
            total_label: total_label.into(),
        };
        view.clamp_selection();
        view
    }

    pub fn snapshot(&self) -> &LedgerSnapshot {
        &self.snapshot
    }

    pub fn form(&self) -> &TransactionForm {
        &self.form
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.snapshot.id_at(self.table_state.selected()?)
    }

    /// Applies one action. Returns `true` when the widget should close.
    pub fn apply(&mut self, store: &mut LedgerStore, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::Input(ch) => self.form.push_char(ch),
            Action::Backspace => self.form.pop_char(),
            Action::NextField => self.form.focus_next(),
            Action::PreviousField => self.form.focus_previous(),
            Action::SelectPrevious => self.move_selection(-1),
            Action::SelectNext => self.move_selection(1),
            Action::Submit => self.submit(store),
            Action::DeleteSelected => self.delete_selected(store),
        }
        false
    }

    fn submit(&mut self, store: &mut LedgerStore) {
        let result = self
            .form
            .to_input()
            .and_then(|input| add_transaction_to_store(store, input));
        match result {
            Ok(tx) => {
                self.form.reset();
                self.refresh(store);
                self.table_state
                    .select(Some(self.snapshot.rows.len().saturating_sub(1)));
                self.status = Status::Info(format!("Added transaction {}", tx.id()));
            }
            Err(LedgerError::InvalidAmount(text)) => {
                tracing::debug!(amount = %text, "form submission rejected");
                self.status = Status::Error(format!(
                    "Invalid amount '{}'. Please enter a number.",
                    text
                ));
            }
            Err(err) => {
                self.status = Status::Error(err.to_string());
            }
        }
    }

    fn delete_selected(&mut self, store: &mut LedgerStore) {
        let Some(id) = self.selected_id().map(str::to_string) else {
            self.status = Status::Error("No transaction selected".to_string());
            return;
        };
        if remove_transaction_from_store(store, &id) {
            self.status = Status::Info(format!("Removed transaction {}", id));
        } else {
            self.status = Status::Error(format!("Transaction {} not found", id));
        }
        self.refresh(store);
    }

    /// Recaptures the whole snapshot; the table is always redrawn in full.
    fn refresh(&mut self, store: &LedgerStore) {
        self.snapshot = LedgerSnapshot::capture(store);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        if self.snapshot.is_empty() {
            self.table_state.select(None);
        } else {
            let last = self.snapshot.rows.len() - 1;
            let selected = self.table_state.selected().unwrap_or(0).min(last);
            self.table_state.select(Some(selected));
        }
    }

    fn move_selection(&mut self, delta: i32) {
        if self.snapshot.is_empty() {
            self.table_state.select(None);
            return;
        }

        let current = self.table_state.selected().unwrap_or(0) as i32;
        let max_index = self.snapshot.rows.len().saturating_sub(1) as i32;
        let next = (current + delta).clamp(0, max_index) as usize;
        self.table_state.select(Some(next));
    }

    pub fn draw(&mut self, frame: &mut ratatui::Frame) {
        let [form_area, table_area, total_area, footer_area] = table::screen_layout(frame.area());
        table::render_form(frame, form_area, &self.form);
        table::render_table(frame, table_area, &self.snapshot, &mut self.table_state);
        table::render_total(frame, total_area, &self.snapshot, &self.total_label);
        table::render_footer(frame, footer_area, &self.status);
    }
}

pub fn run_widget(store: &mut LedgerStore, total_label: &str) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    tracing::info!("ledger widget started");

    let result = (|| -> Result<()> {
        let backend = ratatui::backend::CrosstermBackend::new(io::stdout());
        let mut terminal = ratatui::Terminal::new(backend)?;
        let mut view = LedgerView::new(store, total_label);

        loop {
            terminal.draw(|frame| view.draw(frame))?;

            if event::poll(Duration::from_millis(200))? {
                if let Event::Key(key) = event::read()? {
                    if let Some(action) = map_key(key) {
                        if view.apply(store, action) {
                            break;
                        }
                    }
                }
            }
        }

        Ok(())
    })();

    let raw_mode = disable_raw_mode();
    let mut stdout = io::stdout();
    let screen = execute!(stdout, LeaveAlternateScreen);
    tracing::info!(transactions = store.len(), "ledger widget closed");

    result?;
    raw_mode?;
    screen?;
    Ok(())
}
