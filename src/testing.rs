use proptest::{collection::btree_set, prelude::*, sample::SizeRange};

/// Generates strings accepted as tree keys: non-empty, and not made only of
/// whitespace.
pub fn valid_key() -> impl Strategy<Value = String> {
    "\\PC{1,16}".prop_filter("blank keys are rejected", |key| !key.trim().is_empty())
}

/// Generates a collection of distinct keys, in random order.
pub fn valid_keys(size: impl Into<SizeRange>) -> impl Strategy<Value = Vec<String>> {
    btree_set(valid_key(), size)
        .prop_map(|keys| keys.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

/// Generates strings rejected as tree keys: empty, or only whitespace.
pub fn blank_key() -> impl Strategy<Value = String> {
    "[ \t\r\n\u{2003}]{0,8}"
}

#[cfg(test)]
mod tests {
    use test_strategy::proptest;

    use super::*;
    use crate::prelude::*;

    #[proptest(fork = false)]
    fn test_key_is_always_valid(#[strategy(valid_key())] key: String) {
        prop_assert!(key.comparison_key().is_ok());
    }

    #[proptest(fork = false)]
    fn test_blank_key_is_always_invalid(#[strategy(blank_key())] key: String) {
        prop_assert!(key.comparison_key().is_err());
    }

    #[proptest(fork = false)]
    fn test_keys_are_distinct(#[strategy(valid_keys(0..32))] keys: Vec<String>) {
        let mut sorted = keys.clone();
        sorted.sort();
        sorted.dedup();

        prop_assert_eq!(sorted.len(), keys.len());
    }
}
