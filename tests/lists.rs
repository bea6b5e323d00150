use kons::*;

fn l(s: &str) -> Value {
    read(s).unwrap()
}

fn add(args: &[Value]) -> EvalResult {
    match (&*args[0], &*args[1]) {
        (Expr::Integer(a), Expr::Integer(b)) => Ok(Expr::integer(a + b)),
        _ => Err(bad_arg_type(&args[0], 0, "integer")),
    }
}

#[test]
fn zip_then_unzip() -> anyhow::Result<()> {
    let zipped = zip(&[l("(1 2)"), l("(3 4)")])?;
    assert_eq!(to_string(&zipped), "((1 3) (2 4))");
    assert!(is_equal(&zipped, &l("((1 3) (2 4))")));

    let back = unzip2(&zip(&[l("(1 2 3)"), l("(4 5 6)")])?)?;
    assert_eq!(to_string(&back), "((1 2 3) (4 5 6))");
    Ok(())
}

#[test]
fn map_stops_at_the_shortest() -> anyhow::Result<()> {
    let sums = map(add, &[l("(1 2 3 4)"), l("(3 4 5)")])?;
    assert_eq!(to_string(&sums), "(4 6 8)");
    assert_eq!(length(&sums)?, 3);

    let err = map(add, &[]).unwrap_err();
    assert_eq!(err.id(), "application/min-argc");
    Ok(())
}

#[test]
fn fold_reverses_with_cons() -> anyhow::Result<()> {
    let out = fold(
        |args| Ok(cons(args[0].clone(), args[1].clone())),
        Expr::nil(),
        &[l("(1 2 3)")],
    )?;
    assert_eq!(to_string(&out), "(3 2 1)");

    let out = fold_right(
        |args| Ok(cons(args[0].clone(), args[1].clone())),
        Expr::nil(),
        &[l("(1 2 3)")],
    )?;
    assert_eq!(to_string(&out), "(1 2 3)");
    Ok(())
}

#[test]
fn dotted_rendering() {
    let dotted = cons(Expr::integer(1), cons(Expr::integer(2), Expr::integer(3)));
    assert_eq!(to_string(&dotted), "(1 2 . 3)");
    assert!(is_dotted_list(&dotted));
    assert!(!is_proper_list(&dotted));
}

#[test]
fn take_and_drop_share_the_right_things() -> anyhow::Result<()> {
    let lst = l("(a b c d e)");
    let front = take(&lst, 2)?;
    let back = drop(&lst, 2)?;
    assert_eq!(to_string(&front), "(a b)");
    assert_eq!(to_string(&back), "(c d e)");
    assert!(gc::Gc::ptr_eq(&back, &cddr(&lst)?));

    // take copies, so mutating it leaves the source alone
    set_car(&front, Expr::symbol("z"))?;
    assert_eq!(to_string(&lst), "(a b c d e)");

    assert_eq!(to_string(&take_right(&lst, 2)?), "(d e)");
    assert_eq!(to_string(&drop_right(&lst, 2)?), "(a b c)");
    assert_eq!(to_string(&split_at(&lst, 1)?), "((a) b c d e)");
    assert_eq!(take(&lst, 6).unwrap_err().id(), "list/index-out-of-range");
    Ok(())
}

#[test]
fn set_union() -> anyhow::Result<()> {
    let u = lset_union(|x, y| Ok(eqv(x, y)), &l("(1 2 3)"), &l("(2 3 4 5)"))?;
    assert_eq!(to_string(&u), "(5 4 1 2 3)");
    Ok(())
}

#[test]
fn circular_lists() -> anyhow::Result<()> {
    let ring = circular_list(&[Expr::integer(1), Expr::integer(2), Expr::integer(3)])?;
    assert!(is_circular_list(&ring));
    assert!(!is_proper_list(&ring));
    assert!(!is_dotted_list(&ring));
    assert_eq!(length_plus(&ring), None);
    assert!(length(&ring).is_err());
    assert_eq!(length_circular(&ring), 3);

    // walking past the end wraps around
    assert_eq!(to_string(&list_ref(&ring, 4)?), "2");
    assert_eq!(to_string(&take(&ring, 5)?), "(1 2 3 1 2)");

    // mapping a circular list alongside a finite one terminates
    let sums = map(add, &[ring, l("(10 20 30 40)")])?;
    assert_eq!(to_string(&sums), "(11 22 33 41)");
    Ok(())
}

#[test]
fn searching() -> anyhow::Result<()> {
    let lst = l("(1 2 3 4)");
    let even = |v: &Value| -> Result<bool, ListError> {
        Ok(matches!(&**v, Expr::Integer(i) if i % 2 == 0))
    };
    assert_eq!(find(even, &lst)?.map(|v| to_string(&v)), Some("2".to_owned()));
    assert_eq!(
        find_tail(even, &lst)?.map(|v| to_string(&v)),
        Some("(2 3 4)".to_owned())
    );
    assert_eq!(to_string(&filter(even, &lst)?), "(2 4)");
    assert_eq!(to_string(&remove(even, &lst)?), "(1 3)");
    assert_eq!(to_string(&partition(even, &lst)?), "((2 4) 1 3)");

    let tail = member(&l("(2)"), &l("(1 (2) 3)")).map(|v| to_string(&v));
    assert_eq!(tail, Some("((2) 3)".to_owned()));
    assert!(memv(&l("(2)"), &l("(1 (2) 3)")).is_none());
    Ok(())
}

#[test]
fn destructive_variants_reuse_pairs() -> anyhow::Result<()> {
    let a = l("(1 2)");
    let b = l("(3)");
    let joined = append_d(&[a.clone(), b.clone()])?;
    assert!(gc::Gc::ptr_eq(&joined, &a));
    assert_eq!(to_string(&joined), "(1 2 3)");
    assert!(gc::Gc::ptr_eq(&cddr(&joined)?, &b));

    let fresh = append(&[l("(1 2)"), b.clone()])?;
    assert!(gc::Gc::ptr_eq(&cddr(&fresh)?, &b));

    let rev = reverse_d(&l("(1 2 3)"))?;
    assert_eq!(to_string(&rev), "(3 2 1)");
    Ok(())
}

#[test]
fn association_lists() -> anyhow::Result<()> {
    let alist = alist_cons(Expr::symbol("b"), Expr::integer(2), l("((a . 1))"));
    assert_eq!(to_string(&alist), "((b . 2) (a . 1))");
    let hit = assq_like(&alist, "a")?;
    assert_eq!(hit.as_deref(), Some("(a . 1)"));
    assert_eq!(assq_like(&alist, "c")?, None);
    Ok(())
}

fn assq_like(alist: &Value, key: &str) -> Result<Option<String>, ListError> {
    Ok(assv(&Expr::symbol(key), alist)?.map(|entry| to_string(&entry)))
}

#[test]
fn unfolding() -> anyhow::Result<()> {
    let past_ten = |seed: &Value| -> EvalResult {
        Ok(Expr::bool(matches!(&**seed, Expr::Integer(i) if *i > 10)))
    };
    let square = |seed: &Value| -> EvalResult {
        match &**seed {
            Expr::Integer(i) => Ok(Expr::integer(i * i)),
            _ => Err(bad_arg_type(seed, 0, "integer")),
        }
    };
    let succ = |seed: &Value| add(&[seed.clone(), Expr::integer(1)]);

    let squares = unfold(past_ten, square, succ, Expr::integer(1))?;
    assert_eq!(to_string(&squares), "(1 4 9 16 25 36 49 64 81 100)");

    let backwards = unfold_right(past_ten, square, succ, Expr::integer(8))?;
    assert_eq!(to_string(&backwards), "(100 81 64)");
    Ok(())
}

#[test]
fn errors_carry_ids() {
    let err = car(&Expr::integer(1)).unwrap_err();
    assert_eq!(err.id(), "application/arg-type");
    assert!(err.to_string().ends_with("but got number 1"));

    let err = list_ref(&l("(1 2)"), 5).unwrap_err();
    assert_eq!(err.id(), "list/index-out-of-range");

    let err = ListError::raise("user/oops", "something went wrong");
    assert_eq!(err.id(), "user/oops");
}
