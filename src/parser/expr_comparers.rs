use crate::parser::WordComparer;

#[derive(Debug)]
pub struct ExprComparers {
    pub and: WordComparer,
    pub or: WordComparer,
}

impl Default for ExprComparers {
    fn default() -> Self {
        Self::new()
    }
}

impl ExprComparers {
    pub fn new() -> Self {
        Self {
            and: WordComparer::new("AND").with_delimiter_postfix(),
            or: WordComparer::new("OR").with_delimiter_postfix(),
        }
    }
}
