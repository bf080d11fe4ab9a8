use crate::error::{LedgerError, Result};
use crate::operations::add::{add_transaction_to_store, parse_transaction_input};
use crate::operations::remove::remove_transaction_from_store;
use crate::operations::search_by_category::search_transactions_by_category;
use crate::store::LedgerStore;
use crate::view::snapshot::{LedgerSnapshot, RowView, format_total};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommands {
    Add,
    Remove,
    Print,
    Search,
    Total,
    Exit,
}

pub fn check_for_command(input: &str) -> Option<UserCommands> {
    match input.to_lowercase().as_str() {
        "add" => Some(UserCommands::Add),
        "remove" => Some(UserCommands::Remove),
        "print" => Some(UserCommands::Print),
        "search" => Some(UserCommands::Search),
        "total" => Some(UserCommands::Total),
        "exit" => Some(UserCommands::Exit),
        _ => None,
    }
}

fn format_row(row: &RowView) -> String {
    format!(
        "{}  {}  {:>12}  {:<10}  {}",
        row.id, row.timestamp, row.amount, row.category, row.description
    )
}

/// Command loop over any line source. Returns when `exit` is entered or the
/// input is exhausted.
pub fn run_shell<R: BufRead, W: Write>(
    store: &mut LedgerStore,
    total_label: &str,
    mut input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "Welcome to the ledger!")?;
    writeln!(out, "{}", format_total(total_label, store.total_balance()))?;

    loop {
        writeln!(
            out,
            "Please enter a command (add, remove, print, search, total, exit):"
        )?;
        let Some(line) = read_line(&mut input)? else {
            break;
        };
        let Some(word) = line.split_whitespace().next() else {
            continue;
        };

        let Some(command) = check_for_command(word) else {
            writeln!(out, "Unknown command '{}'.", word)?;
            continue;
        };

        match command {
            UserCommands::Add => {
                writeln!(out, "Enter transaction details in the format:")?;
                writeln!(out, "amount, category(income/expense/...), description")?;
                let Some(details) = read_line(&mut input)? else {
                    break;
                };
                let result = parse_transaction_input(&details)
                    .and_then(|input| add_transaction_to_store(store, input));
                match result {
                    Ok(tx) => writeln!(out, "Transaction {} added successfully!", tx.id())?,
                    Err(LedgerError::InvalidAmount(text)) => {
                        writeln!(out, "Invalid amount '{}'. Please provide a number.", text)?
                    }
                    Err(e) => writeln!(out, "Error adding transaction: {}", e)?,
                }
                writeln!(out, "{}", format_total(total_label, store.total_balance()))?;
            }
            UserCommands::Remove => {
                writeln!(out, "Provide the transaction ID to remove:")?;
                let Some(id) = read_line(&mut input)? else {
                    break;
                };
                if remove_transaction_from_store(store, &id) {
                    writeln!(out, "Transaction removed successfully.")?;
                } else {
                    writeln!(out, "No transaction with ID '{}'.", id)?;
                }
                writeln!(out, "{}", format_total(total_label, store.total_balance()))?;
            }
            UserCommands::Print => {
                let snapshot = LedgerSnapshot::capture(store);
                if snapshot.is_empty() {
                    writeln!(out, "No transactions.")?;
                }
                for row in &snapshot.rows {
                    writeln!(out, "{}", format_row(row))?;
                }
                writeln!(out, "{}", snapshot.total_line(total_label))?;
            }
            UserCommands::Search => {
                writeln!(out, "Provide the category to search for:")?;
                let Some(category) = read_line(&mut input)? else {
                    break;
                };
                let found = search_transactions_by_category(store, &category);
                if found.is_empty() {
                    writeln!(out, "No transactions found for category: {}", category)?;
                } else {
                    writeln!(out, "Transactions found for category '{}':", category)?;
                    for tx in &found {
                        writeln!(out, "{}", format_row(&RowView::from(tx)))?;
                    }
                }
            }
            UserCommands::Total => {
                writeln!(out, "{}", format_total(total_label, store.total_balance()))?;
            }
            UserCommands::Exit => {
                writeln!(out, "Exiting the application.")?;
                break;
            }
        }
    }

    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
