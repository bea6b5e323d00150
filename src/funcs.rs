//! Wrapping and calling first-class procedures.

use std::rc::Rc;

use gc::Gc;

use crate::{lists::bad_arg_type, EvalResult, Expr, Value};

impl Expr {
    /// Wrap a closure as a procedure value.
    ///
    /// The closure must not capture any [`Value`]s: the collector can't see
    /// inside it. Use [`Expr::closure`] to carry values along.
    pub fn procedure<F>(name: Option<&str>, func: F) -> Value
    where
        F: Fn(&[Value]) -> EvalResult + 'static,
    {
        Expr::closure(name, Vec::new(), move |_, args| func(args))
    }

    /// A procedure over some captured values.
    ///
    /// `func` is called as `func(env, args)` with `env` as given here.
    pub fn closure<F>(name: Option<&str>, env: Vec<Value>, func: F) -> Value
    where
        F: Fn(&[Value], &[Value]) -> EvalResult + 'static,
    {
        Gc::new(Expr::Procedure {
            func: Rc::new(func),
            env,
            name: name.map(str::to_owned),
        })
    }
}

/// Call a procedure value with some arguments.
pub fn apply(func: &Value, args: &[Value]) -> EvalResult {
    match &**func {
        Expr::Procedure { func, env, .. } => func(env, args),
        _ => Err(bad_arg_type(func, 0, "procedure")),
    }
}
