use super::*;

macro_rules! predicates {
    (@impl $($tail:tt)+) => {
        impl Expr {
            predicates! {$($tail)*}
        }
    };
    (($name:ident $pat:pat)) => {
        #[allow(unused_parens)]
        pub fn $name(&self) -> bool {
            matches!(self, $pat)
        }

    };
    ($head:tt $($tail:tt)+) => {
        predicates! { $head }
        predicates! { $($tail)* }
    };
}

predicates! {
    @impl
    (is_pair Expr::Pair(..))
    (is_nil Expr::Nil)
    (is_number (Expr::Integer(_) | Expr::Float(_)))
    (is_exact Expr::Integer(..))
    (is_inexact Expr::Float(..))
    (is_string Expr::String(_))
    (is_symbol Expr::Symbol(_))
    (is_bool Expr::Bool(_))
    (is_array Expr::Array(_))
    (is_unspecified Expr::Unspecified)
    (is_procedure Expr::Procedure { .. })
    (is_promise Expr::Promise(_))
    (is_stream_cell (Expr::Stream { .. } | Expr::EmptyStream))
    (is_empty_stream Expr::EmptyStream)
}
