/// A handle to a [`Leaf`] stored inside a [`super::Tree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LeafId(pub(super) usize);

/// Which child slot of a [`Leaf`] a descent follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Storage for a single key/value pair, and its position in the tree.
///
/// The comparison key is derived from the key once, when the leaf is built,
/// and never changes afterwards; callers are expected to have validated it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf<K, V> {
    key: K,
    value: V,
    comparison_key: String,

    parent: Option<LeafId>,
    left: Option<LeafId>,
    right: Option<LeafId>,
}

impl<K, V> Leaf<K, V> {
    pub(super) fn new(key: K, value: V, comparison_key: String) -> Self {
        debug_assert!(!comparison_key.trim().is_empty());

        Self {
            key,
            value,
            comparison_key,
            parent: None,
            left: None,
            right: None,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub(super) fn set_value(&mut self, value: V) {
        self.value = value;
    }

    /// The canonical text of the key, used for ordering.
    pub fn comparison_key(&self) -> &str {
        &self.comparison_key
    }

    pub fn child(&self, side: Side) -> Option<LeafId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(super) fn set_child(&mut self, side: Side, id: LeafId) {
        match side {
            Side::Left => self.left = Some(id),
            Side::Right => self.right = Some(id),
        }
    }

    pub(super) fn set_parent(&mut self, id: LeafId) {
        self.parent = Some(id);
    }

    pub fn parent(&self) -> Option<LeafId> {
        self.parent
    }

    pub fn left(&self) -> Option<LeafId> {
        self.left
    }

    pub fn right(&self) -> Option<LeafId> {
        self.right
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_leaf_has_no_links() {
        let leaf = Leaf::new("book", "livro", "book".to_string());

        assert_eq!(leaf.key(), &"book");
        assert_eq!(leaf.value(), &"livro");
        assert_eq!(leaf.comparison_key(), "book");
        assert_eq!(leaf.parent(), None);
        assert!(leaf.is_leaf());
    }

    #[test]
    fn test_links_are_set_per_side() {
        let mut leaf = Leaf::new("book", "livro", "book".to_string());
        leaf.set_child(Side::Right, LeafId(1));
        leaf.set_parent(LeafId(7));

        assert_eq!(leaf.child(Side::Right), Some(LeafId(1)));
        assert_eq!(leaf.right(), Some(LeafId(1)));
        assert_eq!(leaf.left(), None);
        assert_eq!(leaf.parent(), Some(LeafId(7)));
        assert!(!leaf.is_leaf());
    }

    #[test]
    fn test_set_value_keeps_key() {
        let mut leaf = Leaf::new("table", "mesa", "table".to_string());
        leaf.set_value("tabela");

        assert_eq!(leaf.value(), &"tabela");
        assert_eq!(leaf.comparison_key(), "table");
    }
}
