//! Lists as sets.

use super::{list_copy, member_by, proper_items};
use crate::{EvalResult, Expr, ListError, Value};

/// Everything in `a`, plus the elements of `b` that aren't in `a`.
///
/// `eq` is called as `eq(elem_of_b, elem_of_a)`. The elements taken from
/// `b` are pushed onto the front of a copy of `a`, so they come out reversed.
pub fn lset_union<F>(mut eq: F, a: &Value, b: &Value) -> EvalResult
where
    F: FnMut(&Value, &Value) -> Result<bool, ListError>,
{
    let mut out = list_copy(a)?;
    for item in proper_items(b, 2)? {
        if member_by(&item, a, &mut eq)?.is_none() {
            out = Expr::pair(item, out);
        }
    }
    Ok(out)
}

#[test]
fn union() {
    use crate::{eqv, read, to_string};

    let a = read("(1 2 3)").unwrap();
    let b = read("(2 3 4 5)").unwrap();
    let u = lset_union(|x, y| Ok(eqv(x, y)), &a, &b).unwrap();
    assert_eq!(to_string(&u), "(5 4 1 2 3)");
    // a is copied, not reused
    assert_eq!(to_string(&a), "(1 2 3)");

    let dupes = read("(4 4)").unwrap();
    let u = lset_union(|x, y| Ok(eqv(x, y)), &a, &dupes).unwrap();
    assert_eq!(to_string(&u), "(4 4 1 2 3)");
}
