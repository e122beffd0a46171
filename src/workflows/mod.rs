pub mod catalog;
pub mod loans;
