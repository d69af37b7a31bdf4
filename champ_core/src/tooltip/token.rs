//! Token stream produced by the template tokenizer

use crate::types::HighlightKind;
use serde::{Deserialize, Serialize};

/// One token of a tokenized tooltip template
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Plain text between markers
    Literal(String),
    /// Start of a styled run
    HighlightStart(HighlightKind),
    /// End of the current styled run
    HighlightEnd,
    /// A `{{ key [op operand] }}` expression awaiting resolution
    Placeholder(Placeholder),
    /// Boundary between two logical lines
    LineBreak,
}

/// A parsed placeholder expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placeholder {
    /// The key between the braces
    pub key: String,
    /// Optional trailing arithmetic, e.g. the `*100` of `{{ ratio*100 }}`
    pub op: Option<PlaceholderOp>,
    /// The matched source text, echoed verbatim when resolution fails
    pub raw: String,
}

impl Placeholder {
    /// Placeholder with no arithmetic, as most templates use
    pub fn bare(key: impl Into<String>) -> Self {
        let key = key.into();
        let raw = format!("{{{{ {key} }}}}");
        Placeholder { key, op: None, raw }
    }
}

/// Arithmetic applied to a resolved value before formatting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderOp {
    pub operator: Operator,
    pub operand: f64,
}

impl PlaceholderOp {
    pub fn apply(&self, value: f64) -> f64 {
        match self.operator {
            Operator::Mul => value * self.operand,
            Operator::Add => value + self.operand,
            Operator::Sub => value - self.operand,
            Operator::Div => value / self.operand,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Mul,
    Add,
    Sub,
    Div,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '*' => Some(Operator::Mul),
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_placeholder_raw_text() {
        let ph = Placeholder::bare("e1");
        assert_eq!(ph.raw, "{{ e1 }}");
        assert!(ph.op.is_none());
    }

    #[test]
    fn test_op_application() {
        let op = PlaceholderOp {
            operator: Operator::Mul,
            operand: 100.0,
        };
        assert!((op.apply(0.25) - 25.0).abs() < f64::EPSILON);

        let op = PlaceholderOp {
            operator: Operator::Div,
            operand: 2.0,
        };
        assert!((op.apply(9.0) - 4.5).abs() < f64::EPSILON);
    }
}
