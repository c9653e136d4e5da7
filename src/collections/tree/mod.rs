mod leaf;

use std::{borrow::Cow, cmp::Ordering};

use proptest::{collection::vec, prelude::*};

use crate::prelude::*;

use leaf::{Leaf, LeafId, Side};

/// An ordered key-value container backed by an unbalanced binary search tree.
///
/// Entries are ordered by the ordinal (byte-wise) comparison of their keys'
/// textual form, as returned by [`ToKey::comparison_key`]. Two keys with the
/// same text are the same entry, whatever their type.
///
/// The tree is never rebalanced, so its shape depends entirely on insertion
/// order: inserting keys in sorted order degrades it into a linked list, and
/// every operation becomes linear in the number of entries. All traversals are
/// iterative, so such degenerate shapes cost time but never stack space.
///
/// Leaves live in an arena owned by the tree, and refer to their parent and
/// children by index. Nothing is ever removed from the arena.
///
/// Equality is structural: two trees holding the same entries compare equal
/// only if the entries were inserted in the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<K, V> {
    leaves: Vec<Leaf<K, V>>,
    root: Option<LeafId>,
}

/// What to do when an inserted key already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OnConflict {
    Fail,
    Update,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self {
            leaves: Vec::new(),
            root: None,
        }
    }
}

impl<K: ToKey, V> Tree<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry to the tree.
    ///
    /// Fails with [`Error::InvalidArgument`] if the key is unset or blank, and
    /// with [`Error::DuplicateKey`] if an entry with the same key exists. The
    /// tree is left untouched on failure.
    pub fn add(&mut self, key: K, value: V) -> Result<()> {
        self.insert(key, value, OnConflict::Fail)
    }

    /// Adds an entry to the tree, replacing the value of an existing entry
    /// with the same key.
    pub fn add_or_update(&mut self, key: K, value: V) -> Result<()> {
        self.insert(key, value, OnConflict::Update)
    }

    /// Looks up the value stored under `key`.
    ///
    /// Returns `Ok(None)` if no entry matches. Fails with
    /// [`Error::InvalidArgument`] if the key is unset or blank, regardless of
    /// the tree contents.
    pub fn get<Q: ToKey + ?Sized>(&self, key: &Q) -> Result<Option<&V>> {
        Ok(self.get_key_value(key)?.map(|(_, value)| value))
    }

    /// Looks up the entry stored under `key`, returning the key it was
    /// inserted with alongside its value.
    pub fn get_key_value<Q: ToKey + ?Sized>(&self, key: &Q) -> Result<Option<(&K, &V)>> {
        let comparison_key = validate(key)?;

        let found = self.find(&comparison_key).map(|id| {
            let leaf = self.leaf(id);
            (leaf.key(), leaf.value())
        });

        #[cfg(feature = "tracing")]
        tracing::trace!(key = %comparison_key, found = found.is_some(), "get");

        Ok(found)
    }

    /// Like [`Tree::get`], but never fails: an invalid key is reported the
    /// same way as a missing one.
    pub fn try_get<Q: ToKey + ?Sized>(&self, key: &Q) -> Option<&V> {
        self.get(key).ok().flatten()
    }

    /// Returns the number of entries in the tree.
    pub fn count(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };

        let mut stack = vec![root];
        let mut count = 0;

        // Pre-order: the right child is pushed first so the left subtree is
        // visited before it.
        while let Some(id) = stack.pop() {
            count += 1;

            let leaf = self.leaf(id);
            stack.extend(leaf.right());
            stack.extend(leaf.left());
        }

        debug_assert_eq!(count, self.leaves.len());
        count
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of leaves on the longest path from the root.
    ///
    /// Without rebalancing this ranges from `log2(n)` to `n`.
    pub fn depth(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };

        let mut stack = vec![(root, 1)];
        let mut depth = 0;

        while let Some((id, level)) = stack.pop() {
            let leaf = self.leaf(id);

            if leaf.is_leaf() {
                depth = depth.max(level);
            }

            stack.extend(leaf.right().map(|right| (right, level + 1)));
            stack.extend(leaf.left().map(|left| (left, level + 1)));
        }

        depth
    }

    fn insert(&mut self, key: K, value: V, on_conflict: OnConflict) -> Result<()> {
        let comparison_key = validate(&key)?.into_owned();

        let Some(mut current) = self.root else {
            self.root = Some(self.push(Leaf::new(key, value, comparison_key)));
            return Ok(());
        };

        loop {
            let side = match comparison_key.as_str().cmp(self.leaf(current).comparison_key()) {
                Ordering::Equal => {
                    return match on_conflict {
                        OnConflict::Fail => {
                            #[cfg(feature = "tracing")]
                            tracing::debug!(key = %comparison_key, "add: duplicate key");

                            Err(Error::DuplicateKey(comparison_key))
                        }
                        OnConflict::Update => {
                            self.leaves[current.0].set_value(value);
                            Ok(())
                        }
                    };
                }
                Ordering::Greater => Side::Right,
                Ordering::Less => Side::Left,
            };

            match self.leaf(current).child(side) {
                Some(next) => current = next,
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(key = %comparison_key, ?side, "insert: attaching leaf");

                    self.attach(current, side, Leaf::new(key, value, comparison_key));
                    return Ok(());
                }
            }
        }
    }

    fn find(&self, comparison_key: &str) -> Option<LeafId> {
        let mut current = self.root;

        while let Some(id) = current {
            let leaf = self.leaf(id);

            current = match comparison_key.cmp(leaf.comparison_key()) {
                Ordering::Equal => return Some(id),
                Ordering::Greater => leaf.right(),
                Ordering::Less => leaf.left(),
            };
        }

        None
    }
}

impl<K, V> Tree<K, V> {
    fn leaf(&self, id: LeafId) -> &Leaf<K, V> {
        &self.leaves[id.0]
    }

    fn push(&mut self, leaf: Leaf<K, V>) -> LeafId {
        let id = LeafId(self.leaves.len());
        self.leaves.push(leaf);
        id
    }

    fn attach(&mut self, parent: LeafId, side: Side, mut leaf: Leaf<K, V>) -> LeafId {
        leaf.set_parent(parent);

        let id = self.push(leaf);
        self.leaves[parent.0].set_child(side, id);

        debug_assert_eq!(self.leaf(id).parent(), Some(parent));
        id
    }
}

fn validate<Q: ToKey + ?Sized>(key: &Q) -> Result<Cow<'_, str>> {
    key.comparison_key().inspect_err(|_error| {
        #[cfg(feature = "tracing")]
        tracing::debug!(error = %_error, "rejected key");
    })
}

impl<K, V> Arbitrary for Tree<K, V>
where
    K: Arbitrary + ToKey + 'static,
    V: Arbitrary + 'static,
{
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        vec(any::<(K, V)>(), 0..32)
            .prop_map(|entries| {
                let mut tree = Self::new();

                for (key, value) in entries {
                    // Blank keys are rejected, the rest are upserted.
                    tree.add_or_update(key, value).ok();
                }

                tree
            })
            .boxed()
    }
}
