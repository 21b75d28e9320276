//! Shows how the size hint, bucket count and overflow chains relate.

use tophash_map::{BUCKET_SIZE, StringMap};

fn main() {
    println!("=== tophash-map sizing demo ===\n");

    for hint in [0u16, 1, 8, 100, 1_000, u16::MAX] {
        let map = StringMap::with_capacity(hint);
        println!(
            "hint {:>5} -> 2^{} = {:>5} buckets ({} slots each)",
            hint,
            map.bucket_count_log2(),
            map.bucket_count(),
            BUCKET_SIZE
        );
    }

    println!("\nFilling a map sized for 100 entries...");
    let mut map = StringMap::with_capacity(100);
    for round in 1..=4 {
        for i in 0..250 {
            map.insert(format!("key_{}_{}", round, i), i.to_string());
        }
        println!(
            "{:>5} entries in {} buckets: {} overflow buckets",
            map.len(),
            map.bucket_count(),
            map.overflow_bucket_count()
        );
    }

    match map.get("key_1_42") {
        Some(value) => println!("\nkey_1_42 -> {}", value),
        None => println!("\nkey_1_42 missing"),
    }
}
