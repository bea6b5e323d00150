//! Equality checks.

use crate::{Expr, Value};

/// Same object, or the same atom.
///
/// Numbers, strings, symbols and bools compare by value; pairs, arrays,
/// procedures, promises and streams only equal themselves.
pub fn eqv(lhs: &Value, rhs: &Value) -> bool {
    eqv_exprs(lhs, rhs)
}

/// Structural equality. Pairs and arrays are compared element by element,
/// everything else as by [`eqv`].
///
/// May not terminate when both sides are circular.
pub fn is_equal(lhs: &Value, rhs: &Value) -> bool {
    equal_exprs(lhs, rhs)
}

fn eqv_exprs(lhs: &Expr, rhs: &Expr) -> bool {
    match (lhs, rhs) {
        (Expr::Integer(l), Expr::Integer(r)) => l == r,
        (Expr::Float(l), Expr::Float(r)) => l == r || (l.is_nan() && r.is_nan()),
        (Expr::String(l), Expr::String(r)) => l == r,
        (Expr::Symbol(l), Expr::Symbol(r)) => l == r,
        (Expr::Bool(l), Expr::Bool(r)) => l == r,
        (Expr::Nil, Expr::Nil)
        | (Expr::Unspecified, Expr::Unspecified)
        | (Expr::EmptyStream, Expr::EmptyStream) => true,
        _ => std::ptr::eq(lhs, rhs),
    }
}

pub(crate) fn equal_exprs(lhs: &Expr, rhs: &Expr) -> bool {
    let (mut lhs, mut rhs) = match (lhs, rhs) {
        (Expr::Pair(lcar, lcdr), Expr::Pair(rcar, rcdr)) => {
            if !equal_exprs(&lcar.borrow(), &rcar.borrow()) {
                return false;
            }
            (lcdr.borrow().clone(), rcdr.borrow().clone())
        }
        (Expr::Array(l), Expr::Array(r)) => {
            return l.len() == r.len() && l.iter().zip(r).all(|(l, r)| equal_exprs(l, r));
        }
        _ => return eqv_exprs(lhs, rhs),
    };

    // walk the spines in a loop so long lists don't blow the stack
    loop {
        match (lhs.split_cons(), rhs.split_cons()) {
            (Some((lcar, lcdr)), Some((rcar, rcdr))) => {
                if !equal_exprs(&lcar, &rcar) {
                    return false;
                }
                lhs = lcdr;
                rhs = rcdr;
            }
            _ => return equal_exprs(&lhs, &rhs),
        }
    }
}

#[test]
fn equality() {
    let a = crate::read("(1 (2 \"three\") [4.0 x] . 5)").unwrap();
    let b = crate::read("(1 (2 \"three\") [4.0 x] . 5)").unwrap();
    assert!(is_equal(&a, &b));
    assert!(!eqv(&a, &b));
    assert!(eqv(&a, &a));
    assert!(eqv(&Expr::integer(3), &Expr::integer(3)));
    assert!(eqv(&Expr::string("s"), &Expr::string("s")));
    assert!(!eqv(&Expr::integer(1), &Expr::float(1.0)));
    assert!(eqv(&Expr::float(f64::NAN), &Expr::float(f64::NAN)));
    assert!(!is_equal(&crate::read("(1 2)").unwrap(), &crate::read("(1 2 3)").unwrap()));
    let empty_arrays = (Expr::array(Vec::new()), Expr::array(Vec::new()));
    assert!(is_equal(&empty_arrays.0, &empty_arrays.1));
    assert!(!eqv(&empty_arrays.0, &empty_arrays.1));
}
