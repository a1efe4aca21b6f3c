use bigdecimal::BigDecimal;
use itertools::Itertools;
use num_bigint::BigInt;
use rand::SeedableRng;
use rand::rngs::StdRng;

use yui_alg::*;
use yui_alg::algo::laws::*;
use yui_alg::algo::generator::spans_group;

fn init_logger() {
    // another test may have set it already.
    let _ = yui_alg::util::log::init_simple_logger(log::LevelFilter::Debug);
}

#[test]
fn operation_counts() {
    // fixed by the capability: 1 for magmas, 2 for semirings.
    assert_eq!(IntAddGroup::default().operation_count(), 1);
    assert_eq!(IntModAddGroup::new(BigInt::from(3)).unwrap().operation_count(), 1);
    assert_eq!(RealMulGroup::new(3, RoundingMode::HalfUp).unwrap().operation_count(), 1);
    assert_eq!(IntRing::default().operation_count(), 2);
}

#[test]
fn capabilities() {
    let mut rng = StdRng::seed_from_u64(7);

    let z = IntAddGroup::default();
    assert!(matches!(z.uniform_random_element_with(&mut rng), Err(Error::Unsupported(_))));

    let r = RealMulGroup::new(3, RoundingMode::HalfUp).unwrap();
    assert!(matches!(r.uniform_random_element_with(&mut rng), Err(Error::Unsupported(_))));

    let zr = IntRing::default();
    assert!(matches!(zr.uniform_random_element_with(&mut rng), Err(Error::Unsupported(_))));

    let g = IntModAddGroup::new(BigInt::from(10)).unwrap();
    assert!(g.uniform_random_element_with(&mut rng).is_ok());
}

#[test]
fn finite_group_size() {
    fn size<'a, G>(g: &'a G) -> (BigInt, BigInt, BigInt)
    where G: FiniteGroup<'a> {
        (g.order(), g.element_count(), BigInt::from(g.elements().count()))
    }

    for n in [1, 5, 12] {
        let g = IntModAddGroup::new(BigInt::from(n)).unwrap();
        let (order, count, listed) = size(&g);

        assert_eq!(count, BigInt::from(n));
        assert_eq!(order, count);
        assert_eq!(listed, count);
    }
}

#[test]
fn int_mod_all() {
    init_logger();

    for n in 1 ..= 16 {
        let g = IntModAddGroup::new(BigInt::from(n)).unwrap();
        let elems = g.elements().collect_vec();

        assert_eq!(elems.len(), n as usize);
        assert_eq!(g.element_count(), BigInt::from(n));
        assert!(elems.iter().enumerate().all(|(i, e)| e.value() == &BigInt::from(i)));

        assert!(satisfies_commutative_group_laws(&g, &elems), "Z/{n}");
        assert!(spans_group(&g), "Z/{n}");
    }
}

#[test]
fn int_mod_membership() {
    let g = IntModAddGroup::new(BigInt::from(9)).unwrap();

    for v in -20 .. 20 {
        let res = g.get_element(BigInt::from(v));
        if (0 .. 9).contains(&v) {
            assert_eq!(res.unwrap().value(), &BigInt::from(v));
        } else {
            assert!(matches!(res, Err(Error::InvalidElement(msg)) if msg.contains(&v.to_string())));
        }
    }
}

#[test]
fn int_mod_large() {
    let n: BigInt = "340282366920938463463374607431768211507".parse().unwrap(); // prime > 2^128
    let g = IntModAddGroup::new(n.clone()).unwrap();
    let op = g.operation();

    let a = g.get_element(&n - 1).unwrap();
    let b = g.get_element(BigInt::from(5)).unwrap();

    assert_eq!(op.perform(&a, &b).value(), &BigInt::from(4));
    assert_eq!(op.inverse(&b).value(), &(&n - 5));
    assert_eq!(op.perform(&b, &op.inverse(&b)), op.identity());

    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0 .. 50 {
        let x = g.uniform_random_element_with(&mut rng).unwrap();
        assert!(g.has_element(Some(x.value())));
    }
}

#[test]
fn int_add_unbounded() {
    let g = IntAddGroup::default();
    let op = g.operation();
    let big: BigInt = "-98765432109876543210987654321".parse().unwrap();

    let a = g.get_element(big.clone()).unwrap();
    let b = op.perform(&a, &a);
    assert_eq!(b.value(), &(&big * 2));
    assert_eq!(op.perform(&b, &op.inverse(&b)), op.identity());

    let sample = [-3, 0, 1, 7].map(|i| g.get_element_safe(BigInt::from(i)));
    assert!(satisfies_commutative_group_laws(&g, &sample));
}

#[test]
fn real_mul_nonzero() {
    let g = RealMulGroup::new(4, RoundingMode::HalfUp).unwrap();
    let op = g.operation();

    assert!(!g.has_element(Some(&BigDecimal::from(0))));
    assert!(matches!(g.get_element(BigDecimal::from(0)), Err(Error::InvalidElement(_))));

    let two = g.get_element(BigDecimal::from(2)).unwrap();
    let half = op.inverse(&two);
    assert_eq!(half.value().to_string(), "0.5000");
}

#[test]
fn int_ring_laws() {
    init_logger();

    let r = IntRing::default();
    let sample = (-3 ..= 3).map(|i| r.get_element_safe(BigInt::from(i))).collect_vec();

    assert!(satisfies_ring_laws(&r, &sample));
    assert_eq!(r.operation2().distributivity(), Distributivity::over(1));
}

#[test]
fn round_trip() {
    let z = IntAddGroup::default();
    let g = IntModAddGroup::new(BigInt::from(13)).unwrap();
    let r = RealMulGroup::new(6, RoundingMode::Down).unwrap();
    let zr = IntRing::default();

    for v in [-5, 0, 12] {
        let a = z.get_element_safe(BigInt::from(v));
        assert_eq!(z.get_element(a.value().clone()).unwrap(), a);

        let a = zr.get_element_safe(BigInt::from(v));
        assert_eq!(zr.get_element(a.value().clone()).unwrap(), a);
    }

    for a in g.elements() {
        assert_eq!(g.get_element(a.value().clone()).unwrap(), a);
    }

    for s in ["-2.5", "0.001", "7"] {
        let a = r.get_element_safe(s.parse().unwrap());
        assert_eq!(r.get_element(a.value().clone()).unwrap(), a);
    }
}

#[test]
fn check_send_sync() {
    fn check<T>() where T: Send + Sync {}
    check::<IntAddGroup>();
    check::<IntModAddGroup>();
    check::<RealMulGroup>();
    check::<IntRing>();
    check::<Elem<'static, IntModAddGroup>>();
    check::<RealMultiplication<'static>>();
}

#[test]
fn shared_across_threads() {
    let g = IntModAddGroup::new(BigInt::from(97)).unwrap();

    std::thread::scope(|s| {
        let handles = (0 .. 4).map(|t| {
            let g = &g;
            s.spawn(move || {
                let op = g.operation();
                let a = g.get_element(BigInt::from(t * 10)).unwrap();
                op.perform(&a, &op.inverse(&a)).into_value()
            })
        }).collect_vec();

        for h in handles {
            assert_eq!(h.join().unwrap(), BigInt::from(0));
        }
    });
}
