pub mod assignments;
pub mod core;
pub mod form;
