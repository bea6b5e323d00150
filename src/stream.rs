//! Lazy streams. Each cell holds its head and a promise of the rest.

use gc::Gc;

use crate::{
    delay, force,
    lazy::pending,
    lists::{bad_arg_type, list},
    EvalResult, Expr, ListError, Value,
};

pub fn empty_stream() -> Value {
    Gc::new(Expr::EmptyStream)
}

/// Is this the empty stream?
pub fn is_empty(stream: &Value) -> bool {
    stream.is_empty_stream()
}

/// A stream cell whose rest comes from calling the procedure `tail` on
/// first demand.
pub fn stream_cons(head: Value, tail: &Value) -> EvalResult {
    Ok(Gc::new(Expr::Stream {
        head,
        tail: delay(tail)?,
    }))
}

pub fn stream_car(stream: &Value) -> EvalResult {
    match &**stream {
        Expr::Stream { head, .. } => Ok(head.clone()),
        _ => Err(bad_arg_type(stream, 0, "non-empty stream")),
    }
}

/// The rest of the stream, computing it if this is the first time asked.
pub fn stream_cdr(stream: &Value) -> EvalResult {
    match &**stream {
        Expr::Stream { tail, .. } => force(tail),
        _ => Err(bad_arg_type(stream, 0, "non-empty stream")),
    }
}

/// Whether `value` is a stream once forced, so promised streams count.
pub fn is_stream(value: &Value) -> Result<bool, ListError> {
    Ok(force(value)?.is_stream_cell())
}

/// A finite stream of the values.
///
/// Each tail only gets built when it is first asked for.
pub fn make_stream(values: &[Value]) -> Value {
    match values.split_first() {
        None => empty_stream(),
        Some((head, rest)) => {
            let tail = Expr::closure(None, rest.to_vec(), |rest, _| Ok(make_stream(rest)));
            Gc::new(Expr::Stream {
                head: head.clone(),
                tail: pending(tail),
            })
        }
    }
}

/// The first `n` elements of a stream as a list.
///
/// Forces no more tails than it needs to.
pub fn stream_take(stream: &Value, n: usize) -> EvalResult {
    let mut items = Vec::with_capacity(n);
    let mut cursor = stream.clone();
    while items.len() < n {
        match &*cursor {
            Expr::EmptyStream => break,
            Expr::Stream { head, .. } => items.push(head.clone()),
            _ => return Err(bad_arg_type(&cursor, 0, "stream")),
        }
        if items.len() < n {
            cursor = stream_cdr(&cursor)?;
        }
    }
    Ok(list(&items))
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::{delay, to_string};

    fn naturals_from(n: i64, built: Rc<Cell<usize>>) -> EvalResult {
        let rest = Expr::procedure(None, move |_| {
            built.set(built.get() + 1);
            naturals_from(n + 1, built.clone())
        });
        stream_cons(Expr::integer(n), &rest)
    }

    #[test]
    fn infinite() {
        let built = Rc::new(Cell::new(0));
        let nats = naturals_from(0, built.clone()).unwrap();
        assert_eq!(to_string(&stream_take(&nats, 5).unwrap()), "(0 1 2 3 4)");
        assert_eq!(built.get(), 4);
        // already forced tails are not rebuilt
        stream_take(&nats, 3).unwrap();
        assert_eq!(built.get(), 4);
    }

    #[test]
    fn finite() {
        let s = make_stream(&[Expr::integer(1), Expr::integer(2)]);
        assert_eq!(to_string(&stream_car(&s).unwrap()), "1");
        let rest = stream_cdr(&s).unwrap();
        assert_eq!(to_string(&stream_car(&rest).unwrap()), "2");
        let end = stream_cdr(&rest).unwrap();
        assert!(is_empty(&end));
        assert!(stream_car(&end).is_err());
        assert!(stream_cdr(&end).is_err());
        assert_eq!(to_string(&stream_take(&s, 10).unwrap()), "(1 2)");
        assert!(gc::Gc::ptr_eq(&stream_cdr(&s).unwrap(), &rest));
    }

    #[test]
    fn cons_wants_a_procedure() {
        let err = stream_cons(Expr::integer(1), &Expr::nil()).unwrap_err();
        assert_eq!(err.id(), "application/arg-type");
    }

    #[test]
    fn dropped_streams_are_collected() {
        {
            let s = make_stream(&[Expr::integer(1), Expr::integer(2), Expr::integer(3)]);
            stream_cdr(&s).unwrap();
        }
        gc::force_collect();

        let s = make_stream(&[Expr::string("kept"), Expr::integer(2)]);
        gc::force_collect();
        let rest = stream_cdr(&s).unwrap();
        gc::force_collect();
        assert_eq!(to_string(&stream_take(&s, 5).unwrap()), "(kept 2)");
        assert_eq!(to_string(&stream_car(&rest).unwrap()), "2");
    }

    #[test]
    fn stream_predicates() {
        assert!(is_stream(&empty_stream()).unwrap());
        assert!(is_stream(&make_stream(&[Expr::nil()])).unwrap());
        assert!(!is_stream(&Expr::nil()).unwrap());

        let thunk = Expr::procedure(None, |_| Ok(make_stream(&[Expr::integer(1)])));
        let promised = delay(&thunk).unwrap();
        assert!(is_stream(&promised).unwrap());
        assert!(!is_empty(&promised));
    }
}
