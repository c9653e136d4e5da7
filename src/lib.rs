mod error;
mod values;

pub mod collections;
pub mod prelude;
pub mod testing;

#[doc(hidden)]
/// This is a hidden module to make the macros defined on this crate available for the users.
pub mod __dependencies {
    pub use paste;
    pub use proptest;
    pub use test_strategy;
}

/// Implements [`prelude::ToKey`] for types whose [`std::fmt::Display`] output
/// is their canonical textual form.
#[macro_export]
macro_rules! impl_to_key_via_display {
    ($($type:ty),+ $(,)?) => {
        $(
            impl $crate::prelude::ToKey for $type {
                fn to_key(&self) -> Option<std::borrow::Cow<'_, str>> {
                    Some(std::borrow::Cow::Owned(self.to_string()))
                }
            }
        )+
    };
}

/// Generates property tests for a [`prelude::Tree`] keyed by `$key` and
/// holding `$value`.
#[macro_export]
macro_rules! test_tree_properties {
    ($key:ty, $value:ty) => {
        $crate::__dependencies::paste::paste! {
            mod [<test_tree_ $key:snake _ $value:snake>] {
                use std::collections::BTreeMap;

                use $crate::__dependencies::{
                    proptest::prelude::*,
                    test_strategy,
                };
                use $crate::prelude::{Error, ToKey};

                type Tree = $crate::prelude::Tree<$key, $value>;

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_count_matches_distinct_keys(entries: Vec<($key, $value)>) {
                    let mut tree = Tree::new();
                    let mut model = BTreeMap::new();

                    for (key, value) in entries {
                        let text = key.comparison_key().map(|text| text.into_owned());

                        if let Ok(text) = text {
                            model.insert(text, value.clone());
                            tree.add_or_update(key, value)?;
                        }
                    }

                    prop_assert_eq!(tree.count(), model.len());

                    for (text, value) in &model {
                        prop_assert_eq!(tree.get(text.as_str())?, Some(value));
                    }
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_duplicate_add_keeps_first_value(
                    mut tree: Tree,
                    key: $key,
                    first: $value,
                    second: $value,
                ) {
                    prop_assume!(key.comparison_key().is_ok());
                    prop_assume!(tree.get(&key)?.is_none());

                    tree.add(key.clone(), first.clone())?;
                    let count = tree.count();

                    prop_assert!(matches!(
                        tree.add(key.clone(), second),
                        Err(Error::DuplicateKey(_))
                    ));
                    prop_assert_eq!(tree.get(&key)?, Some(&first));
                    prop_assert_eq!(tree.count(), count);
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_upsert_keeps_latest_value(
                    mut tree: Tree,
                    key: $key,
                    first: $value,
                    second: $value,
                ) {
                    prop_assume!(key.comparison_key().is_ok());

                    tree.add_or_update(key.clone(), first)?;
                    let count = tree.count();

                    tree.add_or_update(key.clone(), second.clone())?;

                    prop_assert_eq!(tree.get(&key)?, Some(&second));
                    prop_assert_eq!(tree.count(), count);
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_get_is_idempotent(tree: Tree, key: $key) {
                    prop_assert_eq!(tree.get(&key), tree.get(&key));
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_try_get_agrees_with_get(tree: Tree, key: $key) {
                    match tree.get(&key) {
                        Ok(found) => {
                            prop_assert_eq!(tree.try_get(&key), found);
                        }
                        Err(error) => {
                            prop_assert_eq!(error, Error::InvalidArgument("key"));
                            prop_assert_eq!(tree.try_get(&key), None);
                        }
                    }
                }
            }
        }
    };
}

#[macro_export]
macro_rules! prop_assert_changes {
    ($action: expr, $value: expr) => {
        let old_value = $value.clone();

        prop_assert_eq!($value, old_value);

        $action;

        prop_assert_ne!($value, old_value);
    };
}

#[macro_export]
macro_rules! prop_assert_does_not_change {
    ($action: expr, $value: expr) => {
        let old_value = $value.clone();

        $action;

        prop_assert_eq!($value, old_value);
    };
}
