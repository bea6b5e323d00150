//! Taking lists apart.

use super::{bad_arg_type, classify, Shape};
use crate::{EvalResult, Expr, ListError, Value};

pub fn car(pair: &Value) -> EvalResult {
    match &**pair {
        Expr::Pair(car, _) => Ok(car.borrow().clone()),
        _ => Err(bad_arg_type(pair, 0, "pair")),
    }
}

pub fn cdr(pair: &Value) -> EvalResult {
    match &**pair {
        Expr::Pair(_, cdr) => Ok(cdr.borrow().clone()),
        _ => Err(bad_arg_type(pair, 0, "pair")),
    }
}

/// Both halves of a pair at once.
pub fn car_cdr(pair: &Value) -> Result<(Value, Value), ListError> {
    pair.split_cons().ok_or_else(|| bad_arg_type(pair, 0, "pair"))
}

pub fn set_car(pair: &Value, value: Value) -> Result<(), ListError> {
    match &**pair {
        Expr::Pair(car, _) => {
            *car.borrow_mut() = value;
            Ok(())
        }
        _ => Err(bad_arg_type(pair, 0, "pair")),
    }
}

pub fn set_cdr(pair: &Value, value: Value) -> Result<(), ListError> {
    match &**pair {
        Expr::Pair(_, cdr) => {
            *cdr.borrow_mut() = value;
            Ok(())
        }
        _ => Err(bad_arg_type(pair, 0, "pair")),
    }
}

/// Apply `car`s and `cdr`s from the right of `path`, which is made of `a`s and `d`s.
fn walk_path(list: &Value, path: &str) -> EvalResult {
    let mut cursor = list.clone();
    for step in path.chars().rev() {
        cursor = match step {
            'a' => car(&cursor)?,
            _ => cdr(&cursor)?,
        };
    }
    Ok(cursor)
}

macro_rules! cxr {
    ($(($($step:ident)+))*) => {
        paste::paste! {
            $(
                pub fn [<c $($step)+ r>](list: &Value) -> EvalResult {
                    walk_path(list, concat!($(stringify!($step)),+))
                }
            )*
        }
    };
}

cxr! {
    (a a) (a d) (d a) (d d)
    (a a a) (a a d) (a d a) (a d d)
    (d a a) (d a d) (d d a) (d d d)
}

pub fn first(list: &Value) -> EvalResult {
    car(list)
}

macro_rules! ordinals {
    ($($name:ident $idx:literal)*) => {
        $(
            paste::paste! {
                #[doc = "Element " $idx " of a list, counting from zero."]
                pub fn $name(list: &Value) -> EvalResult {
                    list_ref(list, $idx)
                }
            }
        )*
    };
}

ordinals! {
    second 1
    third 2
    fourth 3
    fifth 4
    sixth 5
    seventh 6
    eighth 7
    ninth 8
    tenth 9
}

/// Step `n` pairs into a list.
fn nth_tail(list: &Value, n: usize) -> EvalResult {
    let mut cursor = list.clone();
    for len in 0..n {
        cursor = cursor
            .next_cdr()
            .ok_or(ListError::IndexOutOfRange { index: n, len })?;
    }
    Ok(cursor)
}

/// The element at 0-based `index`.
pub fn list_ref(list: &Value, index: usize) -> EvalResult {
    let tail = nth_tail(list, index)?;
    match tail.split_cons() {
        Some((car, _)) => Ok(car),
        None => Err(ListError::IndexOutOfRange { index, len: index }),
    }
}

/// The first `n` elements, always in new pairs.
pub fn take(list: &Value, n: usize) -> EvalResult {
    let mut items = Vec::with_capacity(n);
    let mut cursor = list.clone();
    while items.len() < n {
        let (car, cdr) = cursor
            .split_cons()
            .ok_or_else(|| ListError::IndexOutOfRange {
                index: n,
                len: items.len(),
            })?;
        items.push(car);
        cursor = cdr;
    }
    Ok(super::list(&items))
}

/// Everything after the first `n` elements. Shares structure with `list`.
pub fn drop(list: &Value, n: usize) -> EvalResult {
    nth_tail(list, n)
}

/// The last `n` elements. Shares structure with `list`.
pub fn take_right(list: &Value, n: usize) -> EvalResult {
    let mut lead = drop(list, n)?;
    let mut lag = list.clone();
    while let Some(next) = lead.next_cdr() {
        lead = next;
        lag = cdr(&lag)?;
    }
    Ok(lag)
}

/// Everything but the last `n` elements, in new pairs.
pub fn drop_right(list: &Value, n: usize) -> EvalResult {
    let mut lead = drop(list, n)?;
    let mut lag = list.clone();
    let mut items = Vec::new();
    while let Some(next) = lead.next_cdr() {
        lead = next;
        let (car, cdr) = car_cdr(&lag)?;
        items.push(car);
        lag = cdr;
    }
    Ok(super::list(&items))
}

/// `(take list n) . (drop list n)` in one pair.
pub fn split_at(list: &Value, n: usize) -> EvalResult {
    Ok(Expr::pair(take(list, n)?, drop(list, n)?))
}

pub fn last(list: &Value) -> EvalResult {
    car(&last_pair(list)?)
}

/// The last pair of a non-empty, finite list.
pub fn last_pair(list: &Value) -> EvalResult {
    match classify(list) {
        Shape::Proper(len) | Shape::Dotted(len) if len > 0 => {}
        _ => return Err(bad_arg_type(list, 0, "non-empty finite list")),
    }
    let mut cursor = list.clone();
    while let Some(next) = cursor.next_cdr().filter(|next| next.is_pair()) {
        cursor = next;
    }
    Ok(cursor)
}
