pub mod application;
pub mod case_mapping;
pub mod catalog;
