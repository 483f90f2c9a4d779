pub mod assign;
pub mod check;
