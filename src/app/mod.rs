pub mod offline;
pub mod server;
