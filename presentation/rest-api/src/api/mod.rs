pub mod barcode;
pub mod health;
pub mod receipt;
pub mod tags;
