//! Removing elements by equality.

use super::{eqv, list, proper_items};
use crate::{EvalResult, ListError, Value};

/// Every element of `lst` except those [`eqv`] to `x`, in new pairs.
pub fn delete_elem(x: &Value, lst: &Value) -> EvalResult {
    delete_elem_by(x, lst, |x, elem| Ok(eqv(x, elem)))
}

/// [`delete_elem`] with a custom equality, called as `eq(x, elem)`.
pub fn delete_elem_by<F>(x: &Value, lst: &Value, mut eq: F) -> EvalResult
where
    F: FnMut(&Value, &Value) -> Result<bool, ListError>,
{
    let mut kept = Vec::new();
    for item in proper_items(lst, 1)? {
        if !eq(x, &item)? {
            kept.push(item);
        }
    }
    Ok(list(&kept))
}

#[test]
fn deleting() {
    use crate::{is_equal, read, to_string, Expr};

    let lst = read("(1 (2) 3 1)").unwrap();
    let gone = delete_elem(&Expr::integer(1), &lst).unwrap();
    assert_eq!(to_string(&gone), "((2) 3)");

    // eqv doesn't see through pairs
    let pair = read("(2)").unwrap();
    assert_eq!(to_string(&delete_elem(&pair, &lst).unwrap()), "(1 (2) 3 1)");
    let gone = delete_elem_by(&pair, &lst, |x, elem| Ok(is_equal(x, elem))).unwrap();
    assert_eq!(to_string(&gone), "(1 3 1)");

    assert!(delete_elem(&pair, &read("(1 . 2)").unwrap()).is_err());
}
