//! Operator result-type rules.

use crate::ast::NodeKind;
use crate::model::DataType;

/// Numeric promotion: INTEGER < INT64 < DECIMAL.
fn promote_numeric(left: &DataType, right: &DataType) -> DataType {
    use DataType::*;
    match (left, right) {
        (Decimal, _) | (_, Decimal) => Decimal,
        (Int64, _) | (_, Int64) => Int64,
        _ => Integer,
    }
}

fn is_comparison(op: NodeKind) -> bool {
    matches!(
        op,
        NodeKind::EqualSign
            | NodeKind::GreaterThanSym
            | NodeKind::LessThanSym
            | NodeKind::GreaterEqualSym
            | NodeKind::LessEqualSym
            | NodeKind::GreaterLessSym
            | NodeKind::Eq
            | NodeKind::Ne
            | NodeKind::Gt
            | NodeKind::Lt
            | NodeKind::Ge
            | NodeKind::Le
    )
}

fn is_pattern(op: NodeKind) -> bool {
    matches!(
        op,
        NodeKind::Matches | NodeKind::Begins | NodeKind::Contains
    )
}

/// Result type of a binary operator applied to two operand types.
///
/// Character kinds absorb `+` (concatenation); date kinds shifted by a
/// numeric stay date kinds and subtract from each other to an elapsed
/// amount; division always yields DECIMAL; comparison, boolean and pattern
/// operators yield LOGICAL.
pub(crate) fn binary_type(op: NodeKind, left: &DataType, right: &DataType) -> DataType {
    use DataType::*;

    if is_comparison(op) || is_pattern(op) || matches!(op, NodeKind::And | NodeKind::Or) {
        return Logical;
    }

    match op {
        NodeKind::Plus => {
            if left.is_character_like() || right.is_character_like() {
                // LONGCHAR absorbs CHARACTER.
                if *left == Longchar || *right == Longchar {
                    return Longchar;
                }
                return Character;
            }
            match (left.is_date_like(), right.is_date_like()) {
                (true, false) if right.is_numeric() => left.clone(),
                (false, true) if left.is_numeric() => right.clone(),
                (false, false) if left.is_numeric() && right.is_numeric() => {
                    promote_numeric(left, right)
                }
                _ => NotComputed,
            }
        }
        NodeKind::Minus => match (left.is_date_like(), right.is_date_like()) {
            // DATE - DATE counts days; the timestamp kinds subtract to
            // elapsed milliseconds.
            (true, true) => {
                if *left == Date && *right == Date {
                    Integer
                } else {
                    Decimal
                }
            }
            (true, false) if right.is_numeric() => left.clone(),
            (false, false) if left.is_numeric() && right.is_numeric() => {
                promote_numeric(left, right)
            }
            _ => NotComputed,
        },
        NodeKind::Star | NodeKind::Caret => {
            if left.is_numeric() && right.is_numeric() {
                promote_numeric(left, right)
            } else {
                NotComputed
            }
        }
        NodeKind::Slash => Decimal,
        NodeKind::Modulo => Integer,
        _ => NotComputed,
    }
}

/// Result type of a unary operator: NOT yields LOGICAL, sign operators pass
/// the operand type through.
pub(crate) fn unary_type(op: NodeKind, operand: &DataType) -> DataType {
    match op {
        NodeKind::Not => DataType::Logical,
        NodeKind::Plus | NodeKind::Minus => operand.clone(),
        _ => DataType::NotComputed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use DataType::*;

    #[rstest]
    #[case(NodeKind::Plus, Integer, Integer, Integer)]
    #[case(NodeKind::Plus, Integer, Decimal, Decimal)]
    #[case(NodeKind::Plus, Integer, Int64, Int64)]
    #[case(NodeKind::Plus, Character, Character, Character)]
    #[case(NodeKind::Plus, Character, Longchar, Longchar)]
    #[case(NodeKind::Plus, Character, Integer, Character)]
    #[case(NodeKind::Plus, Date, Integer, Date)]
    #[case(NodeKind::Plus, Integer, DatetimeTz, DatetimeTz)]
    #[case(NodeKind::Minus, Date, Date, Integer)]
    #[case(NodeKind::Minus, Datetime, Datetime, Decimal)]
    #[case(NodeKind::Minus, Date, Integer, Date)]
    #[case(NodeKind::Star, Integer, Integer, Integer)]
    #[case(NodeKind::Slash, Integer, Integer, Decimal)]
    #[case(NodeKind::Slash, Decimal, Decimal, Decimal)]
    #[case(NodeKind::Modulo, Integer, Integer, Integer)]
    fn binary_rules(
        #[case] op: NodeKind,
        #[case] left: DataType,
        #[case] right: DataType,
        #[case] expected: DataType,
    ) {
        assert_eq!(binary_type(op, &left, &right), expected);
    }

    #[rstest]
    #[case(NodeKind::EqualSign)]
    #[case(NodeKind::Eq)]
    #[case(NodeKind::GreaterLessSym)]
    #[case(NodeKind::Le)]
    #[case(NodeKind::And)]
    #[case(NodeKind::Or)]
    #[case(NodeKind::Matches)]
    #[case(NodeKind::Begins)]
    #[case(NodeKind::Contains)]
    fn logical_operators(#[case] op: NodeKind) {
        assert_eq!(binary_type(op, &Integer, &Integer), Logical);
        assert_eq!(binary_type(op, &Character, &Character), Logical);
    }

    #[test]
    fn unary_rules() {
        assert_eq!(unary_type(NodeKind::Not, &Logical), Logical);
        assert_eq!(unary_type(NodeKind::Not, &Integer), Logical);
        assert_eq!(unary_type(NodeKind::Minus, &Decimal), Decimal);
        assert_eq!(unary_type(NodeKind::Plus, &Int64), Int64);
    }

    #[test]
    fn date_plus_date_is_not_computed() {
        assert_eq!(binary_type(NodeKind::Plus, &Date, &Date), NotComputed);
    }
}
