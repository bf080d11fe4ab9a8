use crate::models::transaction::Transaction;
use crate::store::LedgerStore;

pub fn search_transactions_by_category(store: &LedgerStore, category: &str) -> Vec<Transaction> {
    store.by_category(category.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper function to build a store with one transaction per category
    fn create_test_store(categories: &[&str]) -> LedgerStore {
        let mut store = LedgerStore::new();
        for (i, category) in categories.iter().enumerate() {
            store
                .add(10.0, *category, format!("tx {}", i + 1))
                .expect("add failed");
        }
        store
    }

    #[test]
    fn test_search_transactions_by_category_found() {
        let store = create_test_store(&["Food", "Travel", "Food"]);

        let result = search_transactions_by_category(&store, "Food");
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].description(), "tx 1");
        assert_eq!(result[1].description(), "tx 3");
    }

    #[test]
    fn test_search_transactions_by_category_not_found() {
        let store = create_test_store(&["Food", "Travel"]);

        let result = search_transactions_by_category(&store, "Shopping");
        assert!(result.is_empty());
    }

    #[test]
    fn test_search_transactions_by_category_case_insensitive() {
        let store = create_test_store(&["Food", "food"]);

        let result = search_transactions_by_category(&store, " FOOD ");
        assert_eq!(result.len(), 2);
    }
}
