pub mod helpers;
pub mod records;
pub mod streams;
pub mod worked_examples;
