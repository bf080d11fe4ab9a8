pub mod add;
pub mod remove;
pub mod search_by_category;
