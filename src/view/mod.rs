pub mod app;
pub mod form;
pub mod snapshot;
pub mod table;
