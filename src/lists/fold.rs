//! Mapping and folding over one or more lists.
//!
//! The n-ary procedures here take one entry per list and stop as soon as
//! the shortest list runs out.

use super::{list, list_with_tail, proper_items, truthy, Cursors};
use crate::{EvalResult, Expr, Value};

/// Call `f` on the nth elements of the lists and collect the results.
///
/// Calls are made left to right.
pub fn map<F>(f: F, lists: &[Value]) -> EvalResult
where
    F: FnMut(&[Value]) -> EvalResult,
{
    map_in_order(f, lists)
}

/// Like [`map`], and promises to call `f` on the first elements first.
pub fn map_in_order<F>(mut f: F, lists: &[Value]) -> EvalResult
where
    F: FnMut(&[Value]) -> EvalResult,
{
    let mut out = Vec::new();
    for row in Cursors::new(lists)? {
        out.push(f(&row)?);
    }
    Ok(list(&out))
}

/// Call `f` on the nth elements of the lists for the side effects.
pub fn for_each<F>(mut f: F, lists: &[Value]) -> Result<(), crate::ListError>
where
    F: FnMut(&[Value]) -> EvalResult,
{
    for row in Cursors::new(lists)? {
        f(&row)?;
    }
    Ok(())
}

/// Like [`map`], keeping only the truthy results.
pub fn filter_map<F>(mut f: F, lists: &[Value]) -> EvalResult
where
    F: FnMut(&[Value]) -> EvalResult,
{
    let mut out = Vec::new();
    for row in Cursors::new(lists)? {
        let res = f(&row)?;
        if truthy(&res) {
            out.push(res);
        }
    }
    Ok(list(&out))
}

/// Left fold. `kons` gets the nth elements of the lists and then the accumulator.
pub fn fold<F>(mut kons: F, knil: Value, lists: &[Value]) -> EvalResult
where
    F: FnMut(&[Value]) -> EvalResult,
{
    let mut acc = knil;
    for mut row in Cursors::new(lists)? {
        row.push(acc);
        acc = kons(&row)?;
    }
    Ok(acc)
}

/// Right fold, with the same argument order as [`fold`].
pub fn fold_right<F>(mut kons: F, knil: Value, lists: &[Value]) -> EvalResult
where
    F: FnMut(&[Value]) -> EvalResult,
{
    let rows: Vec<_> = Cursors::new(lists)?.collect();
    let mut acc = knil;
    for mut row in rows.into_iter().rev() {
        row.push(acc);
        acc = kons(&row)?;
    }
    Ok(acc)
}

/// Like [`fold`], but `kons` gets the pairs instead of their cars.
///
/// Each pair's cdr is read before `kons` sees it, so `kons` may change it.
pub fn pair_fold<F>(mut kons: F, knil: Value, lists: &[Value]) -> EvalResult
where
    F: FnMut(&[Value]) -> EvalResult,
{
    let mut cursors = Cursors::new(lists)?;
    let mut acc = knil;
    while let Some(mut row) = cursors.next_pairs() {
        row.push(acc);
        acc = kons(&row)?;
    }
    Ok(acc)
}

/// Fold using the first element as the starting accumulator.
///
/// `f` is called as `f(elem, acc)`. The empty list reduces to `ridentity`.
pub fn reduce<F>(mut f: F, ridentity: Value, lst: &Value) -> EvalResult
where
    F: FnMut(&[Value]) -> EvalResult,
{
    let items = proper_items(lst, 2)?;
    let mut items = items.into_iter();
    let mut acc = match items.next() {
        Some(first) => first,
        None => return Ok(ridentity),
    };
    for item in items {
        acc = f(&[item, acc])?;
    }
    Ok(acc)
}

/// Right-associative [`reduce`]: `(a b c)` reduces to `f(a, f(b, c))`.
pub fn reduce_right<F>(mut f: F, ridentity: Value, lst: &Value) -> EvalResult
where
    F: FnMut(&[Value]) -> EvalResult,
{
    let mut items = proper_items(lst, 2)?;
    let mut acc = match items.pop() {
        Some(last) => last,
        None => return Ok(ridentity),
    };
    for item in items.into_iter().rev() {
        acc = f(&[item, acc])?;
    }
    Ok(acc)
}

/// Build a list from a seed.
///
/// Until `stop` is true of the seed, `mapper` makes an element from it and
/// `successor` makes the next seed.
pub fn unfold<P, M, S>(stop: P, mapper: M, successor: S, seed: Value) -> EvalResult
where
    P: FnMut(&Value) -> EvalResult,
    M: FnMut(&Value) -> EvalResult,
    S: FnMut(&Value) -> EvalResult,
{
    unfold_with_tail(stop, mapper, successor, seed, |_| Ok(Expr::nil()))
}

/// [`unfold`] where the final seed is turned into the tail of the list.
pub fn unfold_with_tail<P, M, S, T>(
    mut stop: P,
    mut mapper: M,
    mut successor: S,
    seed: Value,
    mut tail_gen: T,
) -> EvalResult
where
    P: FnMut(&Value) -> EvalResult,
    M: FnMut(&Value) -> EvalResult,
    S: FnMut(&Value) -> EvalResult,
    T: FnMut(&Value) -> EvalResult,
{
    let mut items = Vec::new();
    let mut seed = seed;
    while !truthy(&stop(&seed)?) {
        items.push(mapper(&seed)?);
        seed = successor(&seed)?;
    }
    let tail = tail_gen(&seed)?;
    Ok(list_with_tail(&items, tail))
}

/// Build a list from a seed, back to front.
///
/// The first element made ends up last.
pub fn unfold_right<P, M, S>(stop: P, mapper: M, successor: S, seed: Value) -> EvalResult
where
    P: FnMut(&Value) -> EvalResult,
    M: FnMut(&Value) -> EvalResult,
    S: FnMut(&Value) -> EvalResult,
{
    unfold_right_onto(stop, mapper, successor, seed, Expr::nil())
}

/// [`unfold_right`] onto the front of an existing list.
pub fn unfold_right_onto<P, M, S>(
    mut stop: P,
    mut mapper: M,
    mut successor: S,
    seed: Value,
    tail: Value,
) -> EvalResult
where
    P: FnMut(&Value) -> EvalResult,
    M: FnMut(&Value) -> EvalResult,
    S: FnMut(&Value) -> EvalResult,
{
    let mut out = tail;
    let mut seed = seed;
    while !truthy(&stop(&seed)?) {
        out = Expr::pair(mapper(&seed)?, out);
        seed = successor(&seed)?;
    }
    Ok(out)
}
