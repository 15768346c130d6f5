//! Operator tables: display symbols and dynamic-dispatch method names.
//!
//! The runtime implements operator overloading by looking up special method
//! names on the operand types (`a + b` tries `a.__add__(b)`, then the
//! reflected `b.__radd__(a)`; `a += b` tries `a.__iadd__(b)` first). These
//! tables are the single source of truth for that mapping, and for the
//! human-readable symbols the renderer prints.
//!
//! All lookups are pure. The derived in-place and reflected names are built
//! once into process-wide tables on first use and then shared for the
//! lifetime of the process; the backing strings are intentionally leaked
//! (bounded by the closed operator set) so callers can hold them as
//! `&'static str` lookup keys.

use std::sync::LazyLock;

use ahash::AHashMap;

/// The closed set of syntactic operator kinds.
///
/// Covers binary arithmetic/bitwise operators, boolean connectives,
/// comparison operators (including the identity and membership forms), and
/// unary operators. Not every table is defined for every kind: the boolean
/// connectives have no display symbol (they render inline), and the identity
/// comparisons have no overloadable dispatch name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Op {
    Add,
    Sub,
    Mult,
    // `/` under classic division semantics
    Div,
    // `/` under true-division semantics (`from __future__ import division`)
    TrueDiv,
    FloorDiv,
    DivMod,
    Mod,
    Pow,
    LShift,
    RShift,
    BitAnd,
    BitOr,
    BitXor,
    // boolean connectives
    And,
    Or,
    // comparisons
    Eq,
    NotEq,
    Lt,
    LtE,
    Gt,
    GtE,
    Is,
    IsNot,
    In,
    NotIn,
    // unary
    Invert,
    Not,
    UAdd,
    USub,
}

/// Returns the display symbol for an operator kind.
///
/// Classic and true division share the `/` symbol; `DivMod` has no operator
/// syntax and displays as `divmod()`.
///
/// # Panics
///
/// Panics for `And`/`Or`: the boolean connectives are rendered inline by the
/// print visitor and have no standalone symbol. Asking for one is a contract
/// violation.
#[must_use]
pub fn op_symbol(op: Op) -> &'static str {
    match op {
        Op::Add => "+",
        Op::BitAnd => "&",
        Op::BitOr => "|",
        Op::BitXor => "^",
        Op::Div | Op::TrueDiv => "/",
        Op::DivMod => "divmod()",
        Op::Eq => "==",
        Op::FloorDiv => "//",
        Op::LShift => "<<",
        Op::Lt => "<",
        Op::LtE => "<=",
        Op::Gt => ">",
        Op::GtE => ">=",
        Op::In => "in",
        Op::Invert => "~",
        Op::Is => "is",
        Op::IsNot => "is not",
        Op::Mod => "%",
        Op::Mult => "*",
        Op::Not => "not",
        Op::NotEq => "!=",
        Op::NotIn => "not in",
        Op::Pow => "**",
        Op::RShift => ">>",
        Op::Sub => "-",
        Op::UAdd => "+",
        Op::USub => "-",
        Op::And | Op::Or => panic!("no display symbol for operator kind {op:?}"),
    }
}

/// Returns the display symbol for the augmented-assignment form (`+=`, `//=`).
#[must_use]
pub fn inplace_op_symbol(op: Op) -> String {
    format!("{}=", op_symbol(op))
}

/// Returns the special method name the runtime dispatches to for an operator.
///
/// These are the classic protocol names: note `__div__` and `__truediv__`
/// are distinct kinds sharing one symbol, membership dispatches to
/// `__contains__`, and `not` dispatches through truth testing (`__nonzero__`).
///
/// # Panics
///
/// Panics for `Is`/`IsNot`: identity comparison is resolved by the runtime
/// directly and has no overloadable dispatch name. Also panics for the
/// remaining kinds with no dispatch name (`And`, `Or`, `NotIn`).
#[must_use]
pub fn op_name(op: Op) -> &'static str {
    match op {
        Op::Add => "__add__",
        Op::BitAnd => "__and__",
        Op::BitOr => "__or__",
        Op::BitXor => "__xor__",
        Op::Div => "__div__",
        Op::TrueDiv => "__truediv__",
        Op::DivMod => "__divmod__",
        Op::Eq => "__eq__",
        Op::FloorDiv => "__floordiv__",
        Op::LShift => "__lshift__",
        Op::Lt => "__lt__",
        Op::LtE => "__le__",
        Op::Gt => "__gt__",
        Op::GtE => "__ge__",
        Op::In => "__contains__",
        Op::Invert => "__invert__",
        Op::Mod => "__mod__",
        Op::Mult => "__mul__",
        Op::Not => "__nonzero__",
        Op::NotEq => "__ne__",
        Op::Pow => "__pow__",
        Op::RShift => "__rshift__",
        Op::Sub => "__sub__",
        Op::UAdd => "__pos__",
        Op::USub => "__neg__",
        Op::Is | Op::IsNot => panic!("identity comparison {op:?} has no overloadable dispatch name"),
        Op::And | Op::Or | Op::NotIn => panic!("no dispatch name for operator kind {op:?}"),
    }
}

/// Every operator kind that has a dispatch name, in declaration order.
///
/// Used to pre-build the derived-name tables; kinds outside this list panic
/// in `op_name` and therefore have no derived variants either.
const DISPATCHABLE: [Op; 25] = [
    Op::Add,
    Op::Sub,
    Op::Mult,
    Op::Div,
    Op::TrueDiv,
    Op::FloorDiv,
    Op::DivMod,
    Op::Mod,
    Op::Pow,
    Op::LShift,
    Op::RShift,
    Op::BitAnd,
    Op::BitOr,
    Op::BitXor,
    Op::Eq,
    Op::NotEq,
    Op::Lt,
    Op::LtE,
    Op::Gt,
    Op::GtE,
    Op::In,
    Op::Invert,
    Op::Not,
    Op::UAdd,
    Op::USub,
];

/// Derives a dispatch-name variant by inserting `marker` immediately after
/// the leading `__` delimiter (`__add__` + `i` -> `__iadd__`).
///
/// The returned string is leaked to `'static`; this is bounded because the
/// derivation tables are built exactly once over the closed operator set.
fn derive_name(name: &'static str, marker: char) -> &'static str {
    Box::leak(format!("__{marker}{}", &name[2..]).into_boxed_str())
}

/// In-place dispatch names (`__iadd__`, `__imul__`, ...), built once.
static INPLACE_NAMES: LazyLock<AHashMap<Op, &'static str>> = LazyLock::new(|| {
    DISPATCHABLE
        .iter()
        .map(|&op| (op, derive_name(op_name(op), 'i')))
        .collect()
});

/// Reflected dispatch names (`__radd__`, `__rmul__`, ...), built once.
///
/// Comparison kinds never reach this table; they swap to their symmetric
/// counterpart's plain dispatch name instead (see [`reverse_op_name`]).
static REFLECTED_NAMES: LazyLock<AHashMap<Op, &'static str>> = LazyLock::new(|| {
    DISPATCHABLE
        .iter()
        .map(|&op| (op, derive_name(op_name(op), 'r')))
        .collect()
});

/// Returns the in-place (augmented-assignment) dispatch name for an operator.
///
/// The in-place name differs from the plain dispatch name only by the `i`
/// marker after the leading delimiter. The result is stable across calls:
/// the same `'static` string is returned every time.
///
/// # Panics
///
/// Panics for kinds without a dispatch name (same domain as [`op_name`]).
#[must_use]
pub fn inplace_op_name(op: Op) -> &'static str {
    INPLACE_NAMES
        .get(&op)
        .copied()
        .unwrap_or_else(|| panic!("no in-place dispatch name for operator kind {op:?}"))
}

/// Returns the operator a comparison swaps to when its operands are reversed.
///
/// `a < b` holds exactly when `b > a`, so the runtime retries a failed `<`
/// dispatch as the right operand's `>` - a *different* operator, not a
/// reflected method name. Equality and inequality are their own mirror.
/// Returns `None` for every non-comparison kind (and for the identity and
/// membership comparisons, which have no symmetric counterpart).
#[must_use]
pub fn reverse_cmp_op(op: Op) -> Option<Op> {
    match op {
        Op::Lt => Some(Op::Gt),
        Op::LtE => Some(Op::GtE),
        Op::Gt => Some(Op::Lt),
        Op::GtE => Some(Op::LtE),
        Op::Eq => Some(Op::Eq),
        Op::NotEq => Some(Op::NotEq),
        _ => None,
    }
}

/// Returns the dispatch name the runtime tries with swapped operands.
///
/// This is what the runtime falls back to when the left operand cannot
/// satisfy the operator: for comparisons with a symmetric counterpart it is
/// the counterpart's plain dispatch name (`reverse(Lt)` is `__gt__`, not
/// `__rlt__`); for everything else it is the explicitly-reflected name
/// (`reverse(Add)` is `__radd__`).
///
/// # Panics
///
/// Panics for kinds without a dispatch name (same domain as [`op_name`]).
#[must_use]
pub fn reverse_op_name(op: Op) -> &'static str {
    if let Some(swapped) = reverse_cmp_op(op) {
        return op_name(swapped);
    }
    REFLECTED_NAMES
        .get(&op)
        .copied()
        .unwrap_or_else(|| panic!("no reflected dispatch name for operator kind {op:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the display symbols, including the kinds that share one symbol
    /// and the multi-word comparison forms.
    #[test]
    fn symbols() {
        assert_eq!(op_symbol(Op::Add), "+");
        assert_eq!(op_symbol(Op::Div), "/");
        assert_eq!(op_symbol(Op::TrueDiv), "/");
        assert_eq!(op_symbol(Op::FloorDiv), "//");
        assert_eq!(op_symbol(Op::DivMod), "divmod()");
        assert_eq!(op_symbol(Op::IsNot), "is not");
        assert_eq!(op_symbol(Op::NotIn), "not in");
        assert_eq!(inplace_op_symbol(Op::Add), "+=");
        assert_eq!(inplace_op_symbol(Op::FloorDiv), "//=");
    }

    /// Tests the classic dispatch names, including the asymmetric cases:
    /// membership and truth testing don't follow the symbol.
    #[test]
    fn dispatch_names() {
        assert_eq!(op_name(Op::Add), "__add__");
        assert_eq!(op_name(Op::Div), "__div__");
        assert_eq!(op_name(Op::TrueDiv), "__truediv__");
        assert_eq!(op_name(Op::In), "__contains__");
        assert_eq!(op_name(Op::Not), "__nonzero__");
        assert_eq!(op_name(Op::USub), "__neg__");
    }

    /// Tests that every dispatchable kind's in-place name differs from the
    /// plain name only by the `i` marker, and is stable across calls.
    #[test]
    fn inplace_derivation() {
        for op in DISPATCHABLE {
            let plain = op_name(op);
            let inplace = inplace_op_name(op);
            assert_eq!(inplace, format!("__i{}", &plain[2..]));
            // repeated calls return the identical cached string
            assert!(std::ptr::eq(inplace, inplace_op_name(op)));
        }
        assert_eq!(inplace_op_name(Op::Add), "__iadd__");
        assert_eq!(inplace_op_name(Op::FloorDiv), "__ifloordiv__");
    }

    /// Tests that comparisons reverse to their symmetric counterpart's plain
    /// name while everything else gets the `r`-marked reflected name.
    #[test]
    fn reflected_derivation() {
        assert_eq!(reverse_op_name(Op::Lt), op_name(Op::Gt));
        assert_eq!(reverse_op_name(Op::LtE), op_name(Op::GtE));
        assert_eq!(reverse_op_name(Op::Gt), op_name(Op::Lt));
        assert_eq!(reverse_op_name(Op::Eq), op_name(Op::Eq));
        assert_eq!(reverse_op_name(Op::NotEq), op_name(Op::NotEq));

        assert_eq!(reverse_op_name(Op::Add), "__radd__");
        assert_ne!(reverse_op_name(Op::Add), op_name(Op::Add));
        assert_eq!(reverse_op_name(Op::Pow), "__rpow__");
    }

    /// Tests that the swap table covers exactly the symmetric comparisons.
    #[test]
    fn reverse_cmp_domain() {
        assert_eq!(reverse_cmp_op(Op::Lt), Some(Op::Gt));
        assert_eq!(reverse_cmp_op(Op::Add), None);
        assert_eq!(reverse_cmp_op(Op::In), None);
        assert_eq!(reverse_cmp_op(Op::Is), None);
    }

    /// Tests that identity comparison has no dispatch name.
    #[test]
    #[should_panic(expected = "no overloadable dispatch name")]
    fn op_name_is_panics() {
        let _ = op_name(Op::Is);
    }

    /// Tests that `is not` has no dispatch name either.
    #[test]
    #[should_panic(expected = "no overloadable dispatch name")]
    fn op_name_is_not_panics() {
        let _ = op_name(Op::IsNot);
    }

    /// Tests that the boolean connectives have no display symbol.
    #[test]
    #[should_panic(expected = "no display symbol")]
    fn op_symbol_and_panics() {
        let _ = op_symbol(Op::And);
    }

    /// Tests that `not in` falls outside the dispatch-name domain.
    #[test]
    #[should_panic(expected = "no dispatch name")]
    fn op_name_not_in_panics() {
        let _ = op_name(Op::NotIn);
    }
}
