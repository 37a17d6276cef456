use std::fmt;

/// Columnar aggregate operators.
///
/// Applied to an array-valued expression with `expr | OPERATOR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateOp {
    /// Sum of the numeric elements (`SUM`)
    Sum,
    /// Element count, regardless of element kind (`COUNT`)
    Count,
    /// Largest numeric element (`MAX`)
    Max,
    /// Smallest numeric element (`MIN`)
    Min,
    /// Mean of the numeric elements (`AVG`)
    Avg,
}

impl AggregateOp {
    /// The operator's name as written in a script.
    pub fn name(&self) -> &'static str {
        match self {
            AggregateOp::Sum => "SUM",
            AggregateOp::Count => "COUNT",
            AggregateOp::Max => "MAX",
            AggregateOp::Min => "MIN",
            AggregateOp::Avg => "AVG",
        }
    }

    /// Resolve a written operator name; `None` for anything unknown.
    pub fn from_name(name: &str) -> Option<AggregateOp> {
        match name {
            "SUM" => Some(AggregateOp::Sum),
            "COUNT" => Some(AggregateOp::Count),
            "MAX" => Some(AggregateOp::Max),
            "MIN" => Some(AggregateOp::Min),
            "AVG" => Some(AggregateOp::Avg),
            _ => None,
        }
    }

    /// How many arguments the operator takes. Every aggregate reduces a
    /// single array operand.
    pub fn expected_args(&self) -> usize {
        1
    }
}

impl fmt::Display for AggregateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
