pub mod csv_import;
pub mod handlers;
pub mod store;
