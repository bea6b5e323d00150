//! Filtering and partitioning, fresh or in place.

use super::{car, check_proper, list, pairs, proper_items, set_cdr};
use crate::{EvalResult, Expr, ListError, Value};

/// The elements `pred` keeps, in new pairs.
pub fn filter<P>(mut pred: P, lst: &Value) -> EvalResult
where
    P: FnMut(&Value) -> Result<bool, ListError>,
{
    let mut kept = Vec::new();
    for item in proper_items(lst, 1)? {
        if pred(&item)? {
            kept.push(item);
        }
    }
    Ok(list(&kept))
}

/// The elements `pred` rejects, in new pairs.
pub fn remove<P>(mut pred: P, lst: &Value) -> EvalResult
where
    P: FnMut(&Value) -> Result<bool, ListError>,
{
    filter(|item| pred(item).map(|keep| !keep), lst)
}

/// `(in . out)`: the elements `pred` keeps and the ones it doesn't.
pub fn partition<P>(mut pred: P, lst: &Value) -> EvalResult
where
    P: FnMut(&Value) -> Result<bool, ListError>,
{
    let mut ins = Vec::new();
    let mut outs = Vec::new();
    for item in proper_items(lst, 1)? {
        if pred(&item)? {
            ins.push(item);
        } else {
            outs.push(item);
        }
    }
    Ok(Expr::pair(list(&ins), list(&outs)))
}

/// A list being put together out of existing pairs.
struct Splice {
    head: Value,
    last: Option<Value>,
}

impl Splice {
    fn new() -> Splice {
        Splice {
            head: Expr::nil(),
            last: None,
        }
    }

    fn push(&mut self, pair: Value) -> Result<(), ListError> {
        match &self.last {
            Some(last) => set_cdr(last, pair.clone())?,
            None => self.head = pair.clone(),
        }
        self.last = Some(pair);
        Ok(())
    }

    fn finish(self) -> Result<Value, ListError> {
        if let Some(last) = &self.last {
            set_cdr(last, Expr::nil())?;
        }
        Ok(self.head)
    }
}

/// [`filter`], relinking the kept pairs of `lst` instead of allocating.
pub fn filter_d<P>(mut pred: P, lst: &Value) -> EvalResult
where
    P: FnMut(&Value) -> Result<bool, ListError>,
{
    check_proper(lst, 1)?;
    let mut kept = Splice::new();
    for pair in pairs(lst) {
        if pred(&car(&pair)?)? {
            kept.push(pair)?;
        }
    }
    tracing::trace!("filter_d relinked pairs");
    kept.finish()
}

pub fn remove_d<P>(mut pred: P, lst: &Value) -> EvalResult
where
    P: FnMut(&Value) -> Result<bool, ListError>,
{
    filter_d(|item| pred(item).map(|keep| !keep), lst)
}

/// [`partition`], sorting the pairs of `lst` into the two lists.
pub fn partition_d<P>(mut pred: P, lst: &Value) -> EvalResult
where
    P: FnMut(&Value) -> Result<bool, ListError>,
{
    check_proper(lst, 1)?;
    let mut ins = Splice::new();
    let mut outs = Splice::new();
    for pair in pairs(lst) {
        if pred(&car(&pair)?)? {
            ins.push(pair)?;
        } else {
            outs.push(pair)?;
        }
    }
    tracing::trace!("partition_d relinked pairs");
    Ok(Expr::pair(ins.finish()?, outs.finish()?))
}
