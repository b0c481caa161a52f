pub mod expr_parser;
pub use expr_parser::*;

pub mod ast;

pub mod parse_error;
pub use parse_error::*;

pub mod word_comparer;
pub use word_comparer::*;

pub mod expr_comparers;
pub use expr_comparers::*;
