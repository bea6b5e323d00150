//! Looking for things in lists.

use std::convert::Infallible;

use super::{car, eqv, is_equal, pairs, truthy, Cursors};
use crate::{EvalResult, Expr, ListError, Value};

/// The first pair whose car satisfies `hit`.
fn find_pair<E, F>(lst: &Value, mut hit: F) -> Result<Option<Value>, E>
where
    F: FnMut(&Value) -> Result<bool, E>,
{
    for pair in pairs(lst) {
        if let Some((car, _)) = pair.split_cons() {
            if hit(&car)? {
                return Ok(Some(pair));
            }
        }
    }
    Ok(None)
}

fn infallibly<T>(res: Result<T, Infallible>) -> T {
    match res {
        Ok(it) => it,
        Err(never) => match never {},
    }
}

/// The tail of `lst` starting with the first element `is_equal` to `x`.
pub fn member(x: &Value, lst: &Value) -> Option<Value> {
    infallibly(find_pair(lst, |item| Ok(is_equal(x, item))))
}

/// [`member`] with a custom equality, called as `eq(x, elem)`.
pub fn member_by<F>(x: &Value, lst: &Value, mut eq: F) -> Result<Option<Value>, ListError>
where
    F: FnMut(&Value, &Value) -> Result<bool, ListError>,
{
    find_pair(lst, |item| eq(x, item))
}

/// [`member`] using [`eqv`]: pairs and arrays are only found by identity.
pub fn memv(x: &Value, lst: &Value) -> Option<Value> {
    infallibly(find_pair(lst, |item| Ok(eqv(x, item))))
}

/// The first element satisfying `pred`.
pub fn find<P>(pred: P, lst: &Value) -> Result<Option<Value>, ListError>
where
    P: FnMut(&Value) -> Result<bool, ListError>,
{
    match find_pair(lst, pred)? {
        Some(pair) => Ok(Some(car(&pair)?)),
        None => Ok(None),
    }
}

/// The first tail whose car satisfies `pred`.
pub fn find_tail<P>(pred: P, lst: &Value) -> Result<Option<Value>, ListError>
where
    P: FnMut(&Value) -> Result<bool, ListError>,
{
    find_pair(lst, pred)
}

/// The first truthy result of `pred` across the lists, or `false`.
pub fn any<P>(mut pred: P, lists: &[Value]) -> EvalResult
where
    P: FnMut(&[Value]) -> EvalResult,
{
    for row in Cursors::new(lists)? {
        let res = pred(&row)?;
        if truthy(&res) {
            return Ok(res);
        }
    }
    Ok(Expr::bool(false))
}

/// `false` as soon as `pred` is falsy; otherwise its last result.
///
/// Empty input gives `true`.
pub fn every<P>(mut pred: P, lists: &[Value]) -> EvalResult
where
    P: FnMut(&[Value]) -> EvalResult,
{
    let mut last = Expr::bool(true);
    for row in Cursors::new(lists)? {
        last = pred(&row)?;
        if !truthy(&last) {
            return Ok(Expr::bool(false));
        }
    }
    Ok(last)
}

/// Index of the first position where `pred` is truthy.
pub fn list_index<P>(mut pred: P, lists: &[Value]) -> Result<Option<usize>, ListError>
where
    P: FnMut(&[Value]) -> EvalResult,
{
    for (idx, row) in Cursors::new(lists)?.enumerate() {
        if truthy(&pred(&row)?) {
            return Ok(Some(idx));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{read, to_string};

    fn l(s: &str) -> Value {
        read(s).unwrap()
    }

    fn shown(v: Option<Value>) -> String {
        v.map(|v| to_string(&v)).unwrap_or_else(|| "#f".to_owned())
    }

    #[test]
    fn membership() {
        let lst = l("(a (b) c)");
        assert_eq!(shown(member(&l("(b)"), &lst)), "((b) c)");
        assert_eq!(shown(memv(&l("(b)"), &lst)), "#f");
        assert_eq!(shown(memv(&Expr::symbol("c"), &lst)), "(c)");
        assert_eq!(shown(member(&Expr::symbol("z"), &lst)), "#f");

        let nums = l("(1 2 3 4)");
        let bigger = member_by(&Expr::integer(2), &nums, |x, elem| match (&**x, &**elem) {
            (Expr::Integer(x), Expr::Integer(elem)) => Ok(elem > x),
            _ => Ok(false),
        })
        .unwrap();
        assert_eq!(shown(bigger), "(3 4)");
    }

    #[test]
    fn finding() {
        let nums = l("(1 2 3 4)");
        let even = |v: &Value| -> Result<bool, ListError> {
            Ok(matches!(**v, Expr::Integer(i) if i % 2 == 0))
        };
        assert_eq!(shown(find(even, &nums).unwrap()), "2");
        assert_eq!(shown(find_tail(even, &nums).unwrap()), "(2 3 4)");
        assert_eq!(shown(find(even, &l("(1 3)")).unwrap()), "#f");
        let failing = find(|_| Err(ListError::raise("test/nope", "")), &nums);
        assert_eq!(failing.unwrap_err().id(), "test/nope");
    }

    #[test]
    fn quantifiers() {
        let lists = [l("(1 2 3)"), l("(1 5 3)")];
        let differ = |row: &[Value]| -> EvalResult {
            Ok(if is_equal(&row[0], &row[1]) {
                Expr::bool(false)
            } else {
                row[1].clone()
            })
        };
        assert_eq!(to_string(&any(differ, &lists).unwrap()), "5");
        assert_eq!(list_index(differ, &lists).unwrap(), Some(1));

        let last_of = every(|row| Ok(row[0].clone()), &[l("(1 2 3)")]).unwrap();
        assert_eq!(to_string(&last_of), "3");
        let empty = every(|row| Ok(row[0].clone()), &[Expr::nil()]).unwrap();
        assert_eq!(*empty, Expr::Bool(true));
        let fails = every(|row| Ok(Expr::bool(row[0].is_number())), &[l("(1 x 3)")]).unwrap();
        assert_eq!(*fails, Expr::Bool(false));
        assert_eq!(*any(differ, &[l("(1)"), l("(1)")]).unwrap(), Expr::Bool(false));
    }
}
