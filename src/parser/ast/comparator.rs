use serde::{Serialize, Serializer};

use crate::parser::ExprParser;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparatorOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

use std::fmt;

impl fmt::Display for ComparatorOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparatorOp::Eq => write!(f, "="),
            ComparatorOp::NotEq => write!(f, "<>"),
            ComparatorOp::Lt => write!(f, "<"),
            ComparatorOp::LtEq => write!(f, "<="),
            ComparatorOp::Gt => write!(f, ">"),
            ComparatorOp::GtEq => write!(f, ">="),
        }
    }
}

impl fmt::Debug for ComparatorOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComparatorOp({})", self)
    }
}

impl Serialize for ComparatorOp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl ComparatorOp {
    pub fn check(parser: &mut ExprParser) -> Option<ComparatorOp> {
        match parser.current() {
            '=' => {
                parser.next();
                Some(ComparatorOp::Eq)
            }
            '!' if parser.peek(1) == '=' => {
                parser.jump(2);
                Some(ComparatorOp::NotEq)
            }
            '<' => match parser.peek(1) {
                '>' => {
                    parser.jump(2);
                    Some(ComparatorOp::NotEq)
                }
                '=' => {
                    parser.jump(2);
                    Some(ComparatorOp::LtEq)
                }
                _ => {
                    parser.next();
                    Some(ComparatorOp::Lt)
                }
            },
            '>' => {
                if parser.peek(1) == '=' {
                    parser.jump(2);
                    Some(ComparatorOp::GtEq)
                } else {
                    parser.next();
                    Some(ComparatorOp::Gt)
                }
            }
            _ => None,
        }
    }
}
