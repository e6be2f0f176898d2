// Reference tables consumed by the domain layer
pub mod registers;
pub mod vitals;
