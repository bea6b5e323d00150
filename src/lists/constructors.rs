//! Constructing lists.

use itertools::Itertools;

use super::{bad_arg_type, classify, iter, last_pair, set_cdr, Shape};
use crate::{EvalResult, Expr, ListError, Value};

pub fn cons(car: Value, cdr: Value) -> Value {
    Expr::pair(car, cdr)
}

/// Same as `cons` with the arguments the other way around.
pub fn xcons(cdr: Value, car: Value) -> Value {
    Expr::pair(car, cdr)
}

/// Proper list of the given values. No values makes `()`.
pub fn list(items: &[Value]) -> Value {
    list_with_tail(items, Expr::nil())
}

/// Like `list`, but ending in `last` instead of `()`.
pub(crate) fn list_with_tail(mut items: &[Value], mut last: Value) -> Value {
    while let [init @ .., tail] = items {
        last = Expr::pair(tail.clone(), last);
        items = init;
    }
    last
}

/// Like `list`, but the last argument is the tail of the list
/// instead of its last element.
///
/// `cons_list(&[a, b, c])` is `(a b . c)`.
pub fn cons_list(args: &[Value]) -> EvalResult {
    match args {
        [init @ .., last] if !init.is_empty() => Ok(list_with_tail(init, last.clone())),
        _ => Err(ListError::MinArgc {
            min: 2,
            got: args.len(),
        }),
    }
}

/// `n` copies of `fill`, or of the unspecified value if there's no fill.
pub fn make_list(n: usize, fill: Option<Value>) -> Value {
    let fill = fill.unwrap_or_else(Expr::unspecified);
    let mut out = Expr::nil();
    for _ in 0..n {
        out = Expr::pair(fill.clone(), out);
    }
    out
}

/// List whose `i`th element is `init(i)`.
///
/// `init` is called from the last index down to 0.
pub fn list_tabulate<F>(n: usize, mut init: F) -> EvalResult
where
    F: FnMut(usize) -> EvalResult,
{
    let mut out = Expr::nil();
    for idx in (0..n).rev() {
        out = Expr::pair(init(idx)?, out);
    }
    Ok(out)
}

/// Copy the spine of a list. The elements are shared, and a dotted tail
/// is kept as-is.
pub fn list_copy(list: &Value) -> EvalResult {
    if let Shape::Circular { .. } = classify(list) {
        return Err(bad_arg_type(list, 0, "finite list"));
    }
    let mut walk = iter(list);
    let items = walk.by_ref().collect_vec();
    Ok(list_with_tail(&items, walk.tail().clone()))
}

/// List of the values whose last pair points back to its first.
pub fn circular_list(items: &[Value]) -> EvalResult {
    if items.is_empty() {
        return Err(ListError::MinArgc { min: 1, got: 0 });
    }
    let head = list(items);
    set_cdr(&last_pair(&head)?, head.clone())?;
    Ok(head)
}

/// `count` numbers, starting at `start` (0) and going up by `step` (1).
///
/// Integers stay integers; if either `start` or `step` is a float, so is
/// everything.
pub fn iota(count: usize, start: Option<&Value>, step: Option<&Value>) -> EvalResult {
    let zero = Expr::integer(0);
    let one = Expr::integer(1);
    let start = start.unwrap_or(&zero);
    let step = step.unwrap_or(&one);

    match (&**start, &**step) {
        (Expr::Integer(start), Expr::Integer(step)) => {
            let (start, step) = (*start, *step);
            list_tabulate(count, |idx| {
                Ok(Expr::integer(start.wrapping_add(step.wrapping_mul(idx as i64))))
            })
        }
        _ => {
            let start = as_float(start, 1)?;
            let step = as_float(step, 2)?;
            list_tabulate(count, |idx| Ok(Expr::float(start + step * idx as f64)))
        }
    }
}

fn as_float(num: &Value, idx: usize) -> Result<f64, ListError> {
    match &**num {
        Expr::Integer(i) => Ok(*i as f64),
        Expr::Float(f) => Ok(*f),
        _ => Err(bad_arg_type(num, idx, "number")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{is_equal, read, to_string};

    #[test]
    fn building() {
        let nums = [Expr::integer(1), Expr::integer(2), Expr::integer(3)];
        assert_eq!(to_string(&list(&nums)), "(1 2 3)");
        assert_eq!(to_string(&list(&[])), "()");
        assert_eq!(to_string(&cons_list(&nums).unwrap()), "(1 2 . 3)");
        assert_eq!(to_string(&xcons(Expr::integer(2), Expr::integer(1))), "(1 . 2)");
        assert_eq!(cons_list(&nums[..1]).unwrap_err().id(), "application/min-argc");
        assert_eq!(cons_list(&[]).unwrap_err().id(), "application/min-argc");
    }

    #[test]
    fn filling() {
        assert_eq!(to_string(&make_list(3, Some(Expr::symbol("x")))), "(x x x)");
        assert_eq!(
            to_string(&make_list(2, None)),
            "(<unspecified> <unspecified>)"
        );
        let mut order = Vec::new();
        let squares = list_tabulate(4, |i| {
            order.push(i);
            Ok(Expr::integer((i * i) as i64))
        })
        .unwrap();
        assert_eq!(to_string(&squares), "(0 1 4 9)");
        assert_eq!(order, vec![3, 2, 1, 0]);
    }

    #[test]
    fn copying() {
        let dotted = read("((a) b . c)").unwrap();
        let copy = list_copy(&dotted).unwrap();
        assert!(is_equal(&dotted, &copy));
        assert!(!gc::Gc::ptr_eq(&dotted, &copy));
        // the elements themselves are shared
        let (orig_first, _) = dotted.split_cons().unwrap();
        let (copy_first, _) = copy.split_cons().unwrap();
        assert!(gc::Gc::ptr_eq(&orig_first, &copy_first));

        let ring = circular_list(&[Expr::integer(1)]).unwrap();
        assert!(list_copy(&ring).is_err());
        assert_eq!(circular_list(&[]).unwrap_err().id(), "application/min-argc");
    }

    #[test]
    fn counting_up() {
        assert_eq!(to_string(&iota(5, None, None).unwrap()), "(0 1 2 3 4)");
        let (start, step) = (Expr::integer(1), Expr::integer(-2));
        assert_eq!(
            to_string(&iota(3, Some(&start), Some(&step)).unwrap()),
            "(1 -1 -3)"
        );
        let half = Expr::float(0.5);
        assert_eq!(to_string(&iota(3, None, Some(&half)).unwrap()), "(0.0 0.5 1.0)");
        assert_eq!(to_string(&iota(0, None, None).unwrap()), "()");
        assert!(iota(1, Some(&Expr::string("a")), None).is_err());
    }
}
