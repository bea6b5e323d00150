//! The cons-pair list library.
//!
//! Procedures that take callbacks take plain Rust closures. Anything
//! fallible returns [`ListError`] and stops at the first failure.

mod alist;
mod constructors;
mod convert;
mod delete;
mod eq;
mod filter;
mod fold;
mod lset;
mod misc;
mod predicates;
mod search;
mod selectors;

pub use alist::*;
pub use constructors::*;
pub use convert::*;
pub use delete::*;
pub use eq::*;
pub use filter::*;
pub use fold::*;
pub use lset::*;
pub use misc::*;
pub use predicates::*;
pub use search::*;
pub use selectors::*;

pub(crate) use constructors::list_with_tail;
pub(crate) use eq::equal_exprs;

use crate::{display::ExprFmt, Expr, ListError, Value};

// "Contract" functions

pub fn check_min_argc(args: &[Value], min: usize) -> Result<(), ListError> {
    if min > args.len() {
        Err(ListError::MinArgc {
            min,
            got: args.len(),
        })
    } else {
        Ok(())
    }
}

pub fn bad_arg_type(arg: &Value, idx: usize, want: &str) -> ListError {
    let written = ExprFmt::write(arg).to_string();
    let written = if written.chars().count() > 60 {
        let mut short: String = written.chars().take(57).collect();
        short.push_str("...");
        short
    } else {
        written
    };
    ListError::BadArgType {
        idx,
        want: want.to_owned(),
        got: format!("{} {}", arg.type_name(), written),
    }
}

/// Error unless `list` ends in `()` after finitely many pairs.
pub(crate) fn check_proper(list: &Value, idx: usize) -> Result<usize, ListError> {
    match classify(list) {
        Shape::Proper(len) => Ok(len),
        _ => Err(bad_arg_type(list, idx, "proper list")),
    }
}

/// The cars of a proper list, or an error for anything else.
pub(crate) fn proper_items(list: &Value, idx: usize) -> Result<Vec<Value>, ListError> {
    let len = check_proper(list, idx)?;
    let mut items = Vec::with_capacity(len);
    items.extend(iter(list));
    Ok(items)
}

/// Walk the cars of a chain of pairs.
///
/// The walk stops at the first non-pair, which [`ListIter::tail`] hands back.
pub struct ListIter {
    cursor: Value,
}

impl ListIter {
    /// Whatever is left of the chain. After the walk this is the terminator.
    pub fn tail(&self) -> &Value {
        &self.cursor
    }
}

impl Iterator for ListIter {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let (car, cdr) = self.cursor.split_cons()?;
        self.cursor = cdr;
        Some(car)
    }
}

pub fn iter(list: &Value) -> ListIter {
    ListIter {
        cursor: list.clone(),
    }
}

/// Walk the pairs of a chain.
///
/// Each pair's cdr is read before the pair is handed out, so rewriting it
/// doesn't derail the walk.
pub struct PairIter {
    cursor: Value,
}

impl Iterator for PairIter {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let cdr = self.cursor.next_cdr()?;
        Some(std::mem::replace(&mut self.cursor, cdr))
    }
}

pub fn pairs(list: &Value) -> PairIter {
    PairIter {
        cursor: list.clone(),
    }
}

/// Steps through several lists at once and stops as soon as any one of them
/// runs out.
pub(crate) struct Cursors {
    lists: Vec<Value>,
}

impl Cursors {
    pub(crate) fn new(lists: &[Value]) -> Result<Cursors, ListError> {
        check_min_argc(lists, 1)?;
        Ok(Cursors {
            lists: lists.to_vec(),
        })
    }

    /// The current pair of every list, or `None` once one of them ends.
    pub(crate) fn next_pairs(&mut self) -> Option<Vec<Value>> {
        let mut out = Vec::with_capacity(self.lists.len());
        for cursor in self.lists.iter_mut() {
            let cdr = cursor.next_cdr()?;
            out.push(std::mem::replace(cursor, cdr));
        }
        Some(out)
    }
}

impl Iterator for Cursors {
    type Item = Vec<Value>;

    fn next(&mut self) -> Option<Vec<Value>> {
        let mut cars = Vec::with_capacity(self.lists.len());
        for cursor in self.lists.iter_mut() {
            let (car, cdr) = cursor.split_cons()?;
            cars.push(car);
            *cursor = cdr;
        }
        Some(cars)
    }
}

/// Truthiness of a callback's return value.
pub(crate) fn truthy(value: &Value) -> bool {
    Expr::is_truthy(value)
}
