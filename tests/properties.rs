use kons::*;
use proptest::prelude::*;

fn ints(items: &[i64]) -> Value {
    list(&items.iter().map(|&i| Expr::integer(i)).collect::<Vec<_>>())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn copies_are_equal_but_fresh(items in prop::collection::vec(-1000i64..1000, 0..20)) {
        let lst = ints(&items);
        let copy = list_copy(&lst).unwrap();
        prop_assert!(is_equal(&lst, &copy));
        if !items.is_empty() {
            prop_assert!(!gc::Gc::ptr_eq(&lst, &copy));
            prop_assert!(!eqv(&lst, &copy));
        }
    }

    #[test]
    fn take_then_drop_is_the_whole(
        items in prop::collection::vec(prop::num::i64::ANY, 0..20),
        cut in 0usize..20,
    ) {
        let cut = cut.min(items.len());
        let lst = ints(&items);
        let front = take(&lst, cut).unwrap();
        let back = drop(&lst, cut).unwrap();
        prop_assert!(is_equal(&append(&[front, back]).unwrap(), &lst));

        let split = split_at(&lst, cut).unwrap();
        prop_assert_eq!(length(&car(&split).unwrap()).unwrap(), cut);
        prop_assert_eq!(length(&cdr(&split).unwrap()).unwrap(), items.len() - cut);
    }

    #[test]
    fn reversing_twice_is_a_no_op(items in prop::collection::vec(prop::num::i64::ANY, 0..20)) {
        let lst = ints(&items);
        let twice = reverse(&reverse(&lst).unwrap()).unwrap();
        prop_assert!(is_equal(&twice, &lst));
        prop_assert_eq!(to_string(&twice), to_string(&lst));
    }

    #[test]
    fn every_list_has_one_shape(
        items in prop::collection::vec(-5i64..5, 1..10),
        tail in prop_oneof![Just(0u8), Just(1u8), Just(2u8)],
    ) {
        let lst = match tail {
            0 => ints(&items),
            1 => {
                let mut args: Vec<_> = items.iter().map(|&i| Expr::integer(i)).collect();
                args.push(Expr::symbol("end"));
                cons_list(&args).unwrap()
            }
            _ => circular_list(&items.iter().map(|&i| Expr::integer(i)).collect::<Vec<_>>()).unwrap(),
        };
        let shapes = [is_proper_list(&lst), is_dotted_list(&lst), is_circular_list(&lst)];
        prop_assert_eq!(shapes.iter().filter(|&&yes| yes).count(), 1);
        prop_assert_eq!(shapes[tail as usize], true);
        prop_assert_eq!(length_plus(&lst).is_none(), tail == 2);
    }

    #[test]
    fn written_lists_read_back(items in prop::collection::vec(prop::num::i64::ANY, 0..12)) {
        let lst = ints(&items);
        let reread = read(&to_string(&lst)).unwrap();
        prop_assert!(is_equal(&reread, &lst));
    }
}
