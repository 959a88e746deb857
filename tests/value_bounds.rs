use imon_data::{StatHearts, Weight, MAX_HEARTS, MAX_WEIGHT, MIN_WEIGHT};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum HeartOp {
    Inc,
    Dec,
    DecBy(u64),
}

#[derive(Debug, Clone)]
enum WeightOp {
    Add(u16),
    Sub(u16),
}

fn arb_heart_op() -> impl Strategy<Value = HeartOp> {
    prop_oneof![
        Just(HeartOp::Inc),
        Just(HeartOp::Dec),
        any::<u64>().prop_map(HeartOp::DecBy),
    ]
}

fn arb_weight_op() -> impl Strategy<Value = WeightOp> {
    prop_oneof![
        any::<u16>().prop_map(WeightOp::Add),
        any::<u16>().prop_map(WeightOp::Sub),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn test_hearts_stay_in_range(start in any::<i64>(), ops in prop::collection::vec(arb_heart_op(), 0..64)) {
        let mut hearts = StatHearts::new(start);
        prop_assert!(hearts.value() <= MAX_HEARTS);
        for op in ops {
            match op {
                HeartOp::Inc => hearts.increment(),
                HeartOp::Dec => hearts.decrement(),
                HeartOp::DecBy(n) => hearts.decrement_by(n),
            }
            prop_assert!(hearts.value() <= MAX_HEARTS);
        }
    }

    #[test]
    fn test_weight_stays_in_range(start in any::<i64>(), ops in prop::collection::vec(arb_weight_op(), 0..64)) {
        let mut weight = Weight::new(start);
        for op in ops {
            match op {
                WeightOp::Add(g) => weight.add(g),
                WeightOp::Sub(g) => weight.subtract(g),
            }
            prop_assert!((MIN_WEIGHT..=MAX_WEIGHT).contains(&weight.grams()));
        }
    }

    #[test]
    fn test_decrement_by_matches_repeated_decrement(start in 0i64..=4, times in 0u64..10) {
        let mut fast = StatHearts::new(start);
        fast.decrement_by(times);
        let mut slow = StatHearts::new(start);
        for _ in 0..times {
            slow.decrement();
        }
        prop_assert_eq!(fast, slow);
    }
}

#[test]
fn test_overweight_only_at_the_cap() {
    assert!(!Weight::new(98).is_overweight());
    assert!(Weight::new(99).is_overweight());
    assert!(Weight::new(500).is_overweight());
}
