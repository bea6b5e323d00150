//! Scheme-flavoured cons lists (SRFI-1) and lazy streams (SRFI-41)
//! on top of garbage-collected, mutable pairs.

mod display;
mod funcs;
mod lazy;
pub mod lists;
mod parse;
mod stream;
mod type_predicates;

pub use display::{ExprFmt, StrFmt};
pub use funcs::apply;
pub use lazy::{delay, delay_with, force, is_promise, PromiseState};
pub use lists::*;
pub use parse::{read, read_many, read_one, ExprParseError, ExprParseErrorInfo, InvalidEscape};
pub use stream::{
    empty_stream, is_empty, is_stream, make_stream, stream_car, stream_cdr, stream_cons,
    stream_take,
};

use std::{fmt, rc::Rc};

#[macro_use]
extern crate derivative;

use gc::{Finalize, Gc, GcCell, Trace};
use thiserror::Error;

#[derive(Derivative, Trace, Finalize)]
#[derivative(Debug)]
pub enum Expr {
    Integer(i64),
    Float(f64),
    String(String),
    Bool(bool),
    /// Bare identifier, compared by name.
    Symbol(String),
    /// Two mutable slots, the car and the cdr.
    ///
    /// Nothing stops the cdr from pointing back into its own chain.
    Pair(
        #[derivative(Debug(format_with = "Expr::slot_formatter"))] GcCell<Value>,
        #[derivative(Debug(format_with = "Expr::slot_formatter"))] GcCell<Value>,
    ),
    /// The empty list
    Nil,
    /// Stand-in for a value nobody supplied, like `make_list` without a fill.
    Unspecified,
    /// A native sequence.
    Array(Vec<Value>),

    /// Native closure and possibly its name.
    ///
    /// The closure itself is invisible to the collector, so any values it
    /// works on live in `env` and are handed to it on every call.
    Procedure {
        #[derivative(Debug(format_with = "Expr::func_formatter"))]
        #[unsafe_ignore_trace]
        func: NativeFn,
        env: Vec<Value>,
        name: Option<String>,
    },

    Promise(GcCell<PromiseState>),
    /// Stream cell. The head is held eagerly, the tail is a promise.
    Stream {
        head: Value,
        tail: Value,
    },
    EmptyStream,
}

impl Expr {
    fn slot_formatter(slot: &GcCell<Value>, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let slot = slot.borrow();
        write!(f, "{}", ExprFmt::write(&slot))
    }

    fn func_formatter(_: &NativeFn, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "fn(...)")
    }

    pub fn integer(i: i64) -> Value {
        Gc::new(Self::Integer(i))
    }

    pub fn float(f: f64) -> Value {
        Gc::new(Self::Float(f))
    }

    pub fn string<S: Into<String>>(s: S) -> Value {
        Gc::new(Self::String(s.into()))
    }

    pub fn bool(b: bool) -> Value {
        Gc::new(Self::Bool(b))
    }

    pub fn symbol<S: Into<String>>(s: S) -> Value {
        Gc::new(Self::Symbol(s.into()))
    }

    pub fn pair(car: Value, cdr: Value) -> Value {
        Gc::new(Self::Pair(GcCell::new(car), GcCell::new(cdr)))
    }

    pub fn nil() -> Value {
        Gc::new(Self::Nil)
    }

    pub fn unspecified() -> Value {
        Gc::new(Self::Unspecified)
    }

    pub fn array(items: Vec<Value>) -> Value {
        Gc::new(Self::Array(items))
    }

    /// Only `()` and `false` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Expr::Nil => false,
            Expr::Bool(b) => *b,
            // everything else is truthy
            _ => true,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Expr::Integer(_) | Expr::Float(_) => "number",
            Expr::String(_) => "string",
            Expr::Bool(_) => "bool",
            Expr::Symbol(_) => "symbol",
            Expr::Pair(..) => "pair",
            Expr::Nil => "nil",
            Expr::Unspecified => "unspecified",
            Expr::Array(_) => "array",
            Expr::Procedure { .. } => "procedure",
            Expr::Promise(_) => "promise",
            Expr::Stream { .. } | Expr::EmptyStream => "stream",
        }
    }

    /// Split a pair into head and tail, or `None` if this isn't a pair.
    pub fn split_cons(&self) -> Option<(Value, Value)> {
        match self {
            Expr::Pair(car, cdr) => Some((car.borrow().clone(), cdr.borrow().clone())),
            _ => None,
        }
    }

    /// The tail of a pair.
    pub fn next_cdr(&self) -> Option<Value> {
        match self {
            Expr::Pair(_, cdr) => Some(cdr.borrow().clone()),
            _ => None,
        }
    }
}

/// Structural equality; see [`is_equal`].
///
/// Because NaN was a mistake, all NaN are considered equal to each other.
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        lists::equal_exprs(self, other)
    }
}

/// Everything that can go wrong when working with lists and promises.
#[derive(Debug, Clone, Error)]
pub enum ListError {
    #[error("in argument #{idx}, expected {want} but got {got}")]
    BadArgType {
        idx: usize,
        want: String,
        got: String,
    },
    #[error("expected {min} args or more but got {got}")]
    MinArgc { min: usize, got: usize },
    #[error("index {index} is out of range for a list of {len} pairs")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("promise was forced while its own thunk was running")]
    ReentrantForce,
    /// Raised by caller-supplied procedures.
    #[error("{id}: {info}")]
    Raised { id: String, info: String },
}

impl ListError {
    /// Make an error the way a callback would raise one.
    pub fn raise<S1, S2>(id: S1, info: S2) -> ListError
    where
        S1: AsRef<str>,
        S2: AsRef<str>,
    {
        ListError::Raised {
            id: id.as_ref().to_owned(),
            info: info.as_ref().to_owned(),
        }
    }

    /// Stable, slash-separated name of the error kind.
    pub fn id(&self) -> &str {
        match self {
            ListError::BadArgType { .. } => "application/arg-type",
            ListError::MinArgc { .. } => "application/min-argc",
            ListError::IndexOutOfRange { .. } => "list/index-out-of-range",
            ListError::ReentrantForce => "promise/reentrant-force",
            ListError::Raised { id, .. } => id,
        }
    }
}

/// Normal values
pub type Value = Gc<Expr>;

/// Result of any calculation that may fail
pub type EvalResult = Result<Value, ListError>;

/// Called as `func(env, args)`.
pub type NativeFn = Rc<dyn Fn(&[Value], &[Value]) -> EvalResult>;

#[test]
fn error_ids() {
    assert_eq!(ListError::ReentrantForce.id(), "promise/reentrant-force");
    let raised = ListError::raise("user/oops", "it broke");
    assert_eq!(raised.id(), "user/oops");
    assert_eq!(raised.to_string(), "user/oops: it broke");
}

#[test]
fn truthiness() {
    assert!(!Expr::nil().is_truthy());
    assert!(!Expr::bool(false).is_truthy());
    assert!(Expr::integer(0).is_truthy());
    assert!(Expr::string("").is_truthy());
}
