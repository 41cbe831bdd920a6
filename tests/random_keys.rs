use std::collections::HashSet;

use htable::{Hashtable, ProbeStrategy};
use once_cell::sync::Lazy;

const NUM_KEYS: usize = 20_000;
const CHARACTERS: &[u8] = b" abcdefghijklmnopqrstuvwxyz";

// Random strings of 1 to 10 characters, made distinct by appending more random
// characters to duplicates.
static KEYS: Lazy<Vec<String>> = Lazy::new(|| {
    let mut bytes = RandomBytes::default();
    let mut seen = HashSet::new();
    let mut keys = Vec::with_capacity(NUM_KEYS);

    while keys.len() < NUM_KEYS {
        let len = bytes.next() as usize % 10 + 1;
        let mut key = (0..len).map(|_| bytes.next_char()).collect::<String>();
        while seen.contains(&key) {
            key.push(bytes.next_char());
        }
        seen.insert(key.clone());
        keys.push(key);
    }
    keys
});

#[derive(Default)]
struct RandomBytes {
    buf: Vec<u8>,
}

impl RandomBytes {
    fn next(&mut self) -> u8 {
        if self.buf.is_empty() {
            self.buf = vec![0; 4096];
            getrandom::getrandom(&mut self.buf).expect("Failed to get random bytes");
        }
        self.buf.pop().unwrap_or_default()
    }

    fn next_char(&mut self) -> char {
        CHARACTERS[self.next() as usize % CHARACTERS.len()] as char
    }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn random_keys_with_every_strategy() -> anyhow::Result<()> {
    init_logger();

    for strategy in ProbeStrategy::ALL {
        let mut table: Hashtable<String, usize> = Hashtable::builder(100)
            .probe_strategy(strategy)
            .record_collisions(true)
            .build()?;

        for key in KEYS.iter() {
            assert!(!table.contains_key(key.as_str()));
            table.insert(key.clone(), key.len())?;
        }

        for key in KEYS.iter() {
            assert_eq!(table.get(key.as_str()), Some(&key.len()));
        }
        assert_eq!(table.get("stringOver10Char"), None);
        assert_eq!(table.len(), NUM_KEYS);
        assert!(table.load_factor() <= 0.6);

        let stats = table.collision_stats().expect("collision stats are enabled");
        assert_eq!(stats.insert_count(), NUM_KEYS as u64);
        assert!(stats.resize_count() > 0);
        println!("{:?}: {:?}", strategy, stats);
    }
    Ok(())
}

#[test]
fn random_keys_enumeration() -> anyhow::Result<()> {
    init_logger();

    let mut table = Hashtable::with_probe_strategy(100, ProbeStrategy::DoubleHash)?;
    for key in KEYS.iter().take(5_000) {
        table.insert(key.clone(), ())?;
    }

    let keys = table.keys().into_iter().collect::<HashSet<_>>();
    let expected = KEYS.iter().take(5_000).cloned().collect::<HashSet<_>>();
    assert_eq!(keys, expected);
    Ok(())
}
