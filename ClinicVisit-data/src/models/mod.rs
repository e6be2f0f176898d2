pub mod bands;
pub mod reference;
pub mod registers;
