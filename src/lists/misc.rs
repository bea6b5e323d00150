//! Lengths, appending, reversing and zipping.

use itertools::Itertools;

use super::{
    bad_arg_type, check_proper, classify, last_pair, list, list_with_tail, map, pairs,
    proper_items, set_cdr, truthy, Cursors, Shape,
};
use crate::{EvalResult, Expr, ListError, Value};

/// Number of pairs before the first non-pair. Circular lists are an error.
pub fn length(list: &Value) -> Result<usize, ListError> {
    length_plus(list).ok_or_else(|| bad_arg_type(list, 0, "finite list"))
}

/// Like [`length`], but `None` for circular lists.
pub fn length_plus(list: &Value) -> Option<usize> {
    match classify(list) {
        Shape::Proper(len) | Shape::Dotted(len) => Some(len),
        Shape::Atom => Some(0),
        Shape::Circular { .. } => None,
    }
}

/// How many pairs make up the cycle of a circular list, or the plain
/// length of anything else.
pub fn length_circular(list: &Value) -> usize {
    match classify(list) {
        Shape::Proper(len) | Shape::Dotted(len) => len,
        Shape::Atom => 0,
        Shape::Circular { period, .. } => period,
    }
}

/// Join lists together.
///
/// Every list but the last is copied. The result shares the last list,
/// which doesn't even have to be a list.
pub fn append(lists: &[Value]) -> EvalResult {
    let (last, init) = match lists.split_last() {
        Some(it) => it,
        None => return Ok(Expr::nil()),
    };
    let mut out = last.clone();
    for (idx, lst) in init.iter().enumerate().rev() {
        out = list_with_tail(&proper_items(lst, idx)?, out);
    }
    Ok(out)
}

/// [`append`], reusing the pairs of every list but the last.
pub fn append_d(lists: &[Value]) -> EvalResult {
    let (last, init) = match lists.split_last() {
        Some(it) => it,
        None => return Ok(Expr::nil()),
    };
    // every list is checked before any of them is touched
    let lens = init
        .iter()
        .enumerate()
        .map(|(idx, lst)| check_proper(lst, idx))
        .collect::<Result<Vec<_>, _>>()?;

    let mut out = last.clone();
    for (lst, len) in init.iter().zip(lens).rev() {
        if len == 0 {
            continue;
        }
        set_cdr(&last_pair(lst)?, out)?;
        out = lst.clone();
    }
    tracing::trace!(lists = lists.len(), "append_d relinked pairs");
    Ok(out)
}

/// [`append`] a list of lists.
pub fn concatenate(lists: &Value) -> EvalResult {
    append(&proper_items(lists, 0)?)
}

pub fn concatenate_d(lists: &Value) -> EvalResult {
    append_d(&proper_items(lists, 0)?)
}

pub fn reverse(lst: &Value) -> EvalResult {
    append_reverse(lst, Expr::nil())
}

/// [`reverse`], reusing the list's own pairs.
pub fn reverse_d(lst: &Value) -> EvalResult {
    append_reverse_d(lst, Expr::nil())
}

/// Reverse `rev_head` onto the front of `tail`.
pub fn append_reverse(rev_head: &Value, tail: Value) -> EvalResult {
    let mut out = tail;
    for item in proper_items(rev_head, 0)? {
        out = Expr::pair(item, out);
    }
    Ok(out)
}

/// [`append_reverse`], turning the pairs of `rev_head` around in place.
pub fn append_reverse_d(rev_head: &Value, tail: Value) -> EvalResult {
    check_proper(rev_head, 0)?;
    let mut out = tail;
    for pair in pairs(rev_head) {
        set_cdr(&pair, out)?;
        out = pair;
    }
    Ok(out)
}

/// List of lists of the nth elements of each list, stopping at the shortest.
pub fn zip(lists: &[Value]) -> EvalResult {
    map(|row| Ok(list(row)), lists)
}

/// Split a list of lists into its first `n` columns.
fn unzip_columns(lists: &Value, n: usize) -> Result<Vec<Vec<Value>>, ListError> {
    let rows = proper_items(lists, 0)?;
    let mut columns = vec![Vec::with_capacity(rows.len()); n];
    for row in &rows {
        let mut cursor = row.clone();
        for column in columns.iter_mut() {
            let (car, cdr) = cursor.split_cons().ok_or_else(|| {
                bad_arg_type(row, 0, &format!("list of at least {} elements", n))
            })?;
            column.push(car);
            cursor = cdr;
        }
    }
    Ok(columns)
}

/// The first element of every list in a list of lists.
pub fn unzip1(lists: &Value) -> EvalResult {
    let columns = unzip_columns(lists, 1)?;
    Ok(columns
        .first()
        .map(|column| list(column))
        .unwrap_or_else(Expr::nil))
}

macro_rules! unzips {
    ($($name:ident $n:literal)*) => {
        $(
            #[doc = concat!("The first ", $n, " elements of every list in a list of lists, as ", $n, " lists.")]
            pub fn $name(lists: &Value) -> EvalResult {
                let columns = unzip_columns(lists, $n)?;
                Ok(list(&columns.iter().map(|column| list(column)).collect_vec()))
            }
        )*
    };
}

unzips! {
    unzip2 2
    unzip3 3
    unzip4 4
    unzip5 5
}

/// How many times `pred` is truthy across the lists.
pub fn count<F>(mut pred: F, lists: &[Value]) -> Result<usize, ListError>
where
    F: FnMut(&[Value]) -> EvalResult,
{
    let mut count = 0;
    for row in Cursors::new(lists)? {
        if truthy(&pred(&row)?) {
            count += 1;
        }
    }
    Ok(count)
}
