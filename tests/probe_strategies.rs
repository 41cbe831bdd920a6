use std::collections::HashSet;

use htable::{Hashtable, ProbeStrategy};
use paste::paste;

const NUM_KEYS: usize = 2_000;

fn is_prime(n: usize) -> bool {
    n >= 2 && (2..).take_while(|i| i * i <= n).all(|i| n % i != 0)
}

fn key(i: usize) -> String {
    format!("{}:{}", i, NUM_KEYS - i)
}

macro_rules! generate_probe_strategy_tests {
    ($name:ident, $strategy:expr) => {
        paste! {
            #[test]
            fn [<test_ $name _missing_keys>]() -> anyhow::Result<()> {
                let mut table: Hashtable<String, usize> =
                    Hashtable::with_probe_strategy(13, $strategy)?;
                assert_eq!(table.get("foo"), None);

                for i in 0..100 {
                    table.insert(key(i), i)?;
                }
                for i in 100..200 {
                    assert_eq!(table.get(key(i).as_str()), None);
                    assert!(!table.contains_key(key(i).as_str()));
                }
                Ok(())
            }

            #[test]
            fn [<test_ $name _reads_back_after_resizes>]() -> anyhow::Result<()> {
                let mut table = Hashtable::with_probe_strategy(10, $strategy)?;
                let mut capacities = vec![table.capacity()];

                for i in 0..NUM_KEYS {
                    table.insert(key(i), i)?;
                    assert!(table.load_factor() <= 0.6);
                    assert!(is_prime(table.capacity()), "capacity {}", table.capacity());
                    if capacities.last() != Some(&table.capacity()) {
                        capacities.push(table.capacity());
                    }
                    // Everything inserted so far is still reachable.
                    if i % 97 == 0 {
                        for j in 0..=i {
                            assert_eq!(table.get(key(j).as_str()), Some(&j));
                        }
                    }
                }

                assert!(capacities.len() > 1);
                assert!(capacities.windows(2).all(|w| w[1] >= w[0] * 2));
                for i in 0..NUM_KEYS {
                    assert_eq!(table.get(key(i).as_str()), Some(&i));
                }
                assert_eq!(table.len(), NUM_KEYS);
                Ok(())
            }

            #[test]
            fn [<test_ $name _overwrite>]() -> anyhow::Result<()> {
                let mut table = Hashtable::with_probe_strategy(10, $strategy)?;
                for i in 0..500 {
                    table.insert(key(i), "v1".to_string())?;
                }
                for i in (0..500).step_by(3) {
                    table.insert(key(i), "v2".to_string())?;
                }

                for i in 0..500 {
                    let expected = if i % 3 == 0 { "v2" } else { "v1" };
                    assert_eq!(table.get(key(i).as_str()).map(String::as_str), Some(expected));
                }
                assert_eq!(table.len(), 500);
                assert_eq!(table.iter().count(), 500);
                Ok(())
            }

            #[test]
            fn [<test_ $name _capacity>]() -> anyhow::Result<()> {
                let mut table = Hashtable::with_probe_strategy(20, $strategy)?;
                assert_eq!(table.capacity(), 23);
                assert_eq!(table.policy().probe_strategy(), $strategy);

                for i in 0..20 {
                    table.insert(i.to_string(), i)?;
                }
                assert_ne!(table.capacity(), 23);
                assert!(table.load_factor() <= 0.6);
                Ok(())
            }

            #[test]
            fn [<test_ $name _keys>]() -> anyhow::Result<()> {
                let mut table = Hashtable::with_probe_strategy(7, $strategy)?;
                let mut expected = HashSet::new();
                for i in 0..300 {
                    // Keys repeat in runs of three.
                    let k = key(i - i % 3);
                    table.insert(k.clone(), i)?;
                    expected.insert(k);
                }

                let keys = table.keys();
                assert_eq!(keys.len(), expected.len());
                assert_eq!(keys.into_iter().collect::<HashSet<_>>(), expected);
                Ok(())
            }
        }
    };
}

generate_probe_strategy_tests!(linear, ProbeStrategy::Linear);
generate_probe_strategy_tests!(quadratic, ProbeStrategy::Quadratic);
generate_probe_strategy_tests!(double_hash, ProbeStrategy::DoubleHash);
