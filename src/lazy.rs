//! Memoizing promises.

use gc::{Finalize, Gc, GcCell, Trace};

use crate::{apply, lists::bad_arg_type, EvalResult, Expr, ListError, Value};

/// Where a promise is on its one-way trip from thunk to value.
#[derive(Debug, Trace, Finalize)]
pub enum PromiseState {
    /// Not forced yet; holds the thunk.
    Pending(Value),
    /// The thunk is running right now.
    Forcing,
    /// The thunk has been dropped and only its value remains.
    Ready(Value),
}

/// Wrap a procedure of no arguments in a promise.
pub fn delay(thunk: &Value) -> EvalResult {
    if !thunk.is_procedure() {
        return Err(bad_arg_type(thunk, 0, "procedure of no arguments"));
    }
    Ok(pending(thunk.clone()))
}

/// Wrap a Rust closure in a promise.
///
/// The closure gets `env` when it runs. Values it needs go there rather
/// than into its captures, as with [`Expr::closure`].
pub fn delay_with<F>(env: Vec<Value>, thunk: F) -> Value
where
    F: Fn(&[Value]) -> EvalResult + 'static,
{
    pending(Expr::closure(None, env, move |env, _| thunk(env)))
}

/// Promise of a known procedure.
pub(crate) fn pending(thunk: Value) -> Value {
    Gc::new(Expr::Promise(GcCell::new(PromiseState::Pending(thunk))))
}

pub fn is_promise(value: &Value) -> bool {
    value.is_promise()
}

/// Get the value of a promise, running its thunk the first time.
///
/// Anything that isn't a promise forces to itself. If the thunk fails the
/// promise stays pending and the next force tries again. Forcing a promise
/// from inside its own thunk is an error.
pub fn force(value: &Value) -> EvalResult {
    let cell = match &**value {
        Expr::Promise(cell) => cell,
        _ => return Ok(value.clone()),
    };

    let thunk = {
        let mut state = cell.borrow_mut();
        let thunk = match &*state {
            PromiseState::Pending(thunk) => thunk.clone(),
            PromiseState::Ready(val) => return Ok(val.clone()),
            PromiseState::Forcing => {
                tracing::debug!("promise forced from inside its own thunk");
                return Err(ListError::ReentrantForce);
            }
        };
        *state = PromiseState::Forcing;
        thunk
    };

    // No borrow of the cell may be held while the thunk runs.
    tracing::trace!("running promise thunk");
    match apply(&thunk, &[]) {
        Ok(val) => {
            *cell.borrow_mut() = PromiseState::Ready(val.clone());
            Ok(val)
        }
        Err(ono) => {
            *cell.borrow_mut() = PromiseState::Pending(thunk);
            Err(ono)
        }
    }
}
