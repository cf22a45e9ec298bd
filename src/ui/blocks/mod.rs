pub mod header;
pub mod warning;
pub mod error;
