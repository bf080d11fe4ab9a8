use ledger_widget::config::{self, Mode};
use ledger_widget::error::Result;
use ledger_widget::store::LedgerStore;
use ledger_widget::{shell, telemetry, view};
use std::io;

fn main() -> Result<()> {
    let (mode, settings) = config::load()?;
    telemetry::init(&settings, mode)?;
    tracing::debug!(?mode, ?settings, "configuration loaded");

    let mut store = LedgerStore::new();
    match mode {
        Mode::Tui => view::app::run_widget(&mut store, &settings.total_label),
        Mode::Shell => shell::run_shell(
            &mut store,
            &settings.total_label,
            io::stdin().lock(),
            io::stdout().lock(),
        ),
    }
}
