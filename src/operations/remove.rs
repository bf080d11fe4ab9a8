use crate::store::LedgerStore;

/// Removes the transaction with the given id, ignoring surrounding whitespace.
/// An unknown id is not an error; `false` is returned and nothing changes.
pub fn remove_transaction_from_store(store: &mut LedgerStore, id: &str) -> bool {
    let id = id.trim();
    if id.is_empty() {
        return false;
    }
    store.remove(id)
}
