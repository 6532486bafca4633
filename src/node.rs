use crate::keys::Key;
use crate::mapping::direct::DirectMapping;
use crate::mapping::indexed::IndexedMapping;
use crate::mapping::sorted::SortedMapping;
use crate::mapping::ChildMapping;
use crate::prefix::{Prefix, MAX_PREFIX_LEN};

/// Representation of a node, as observed through [`NodeRef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Leaf,
    Node4,
    Node16,
    Node48,
    Node256,
}

/// A stored record: the normalized key and its value.
pub(crate) struct Leaf<V> {
    pub(crate) key: Key,
    pub(crate) value: V,
}

/// An internal routing node: a compressed prefix plus a child mapping in one
/// of the four capacity tiers.
pub(crate) struct InnerNode<V> {
    pub(crate) prefix: Prefix,
    pub(crate) mapping: Mapping<V>,
}

pub(crate) enum Mapping<V> {
    Node4(SortedMapping<Node<V>, 4>),
    Node16(SortedMapping<Node<V>, 16>),
    Node48(IndexedMapping<Node<V>>),
    Node256(DirectMapping<Node<V>>),
}

/// A child pointer: either a stored record or another routing node.
pub(crate) enum Node<V> {
    Leaf(Box<Leaf<V>>),
    Inner(Box<InnerNode<V>>),
}

impl<V> Node<V> {
    #[inline]
    pub fn new_leaf(key: Key, value: V) -> Self {
        Node::Leaf(Box::new(Leaf { key, value }))
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Leaf(_) => NodeKind::Leaf,
            Node::Inner(inner) => inner.kind(),
        }
    }

    /// The smallest stored record reachable from this node.
    pub fn minimum(&self) -> &Leaf<V> {
        let mut node = self;
        loop {
            match node {
                Node::Leaf(leaf) => return leaf,
                Node::Inner(inner) => node = inner.first_child(),
            }
        }
    }
}

impl<V> InnerNode<V> {
    #[inline]
    pub fn new4(prefix: Prefix) -> Self {
        Self {
            prefix,
            mapping: Mapping::Node4(SortedMapping::new()),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match &self.mapping {
            Mapping::Node4(_) => NodeKind::Node4,
            Mapping::Node16(_) => NodeKind::Node16,
            Mapping::Node48(_) => NodeKind::Node48,
            Mapping::Node256(_) => NodeKind::Node256,
        }
    }

    pub fn num_children(&self) -> usize {
        match &self.mapping {
            Mapping::Node4(m) => m.num_children(),
            Mapping::Node16(m) => m.num_children(),
            Mapping::Node48(m) => m.num_children(),
            Mapping::Node256(m) => m.num_children(),
        }
    }

    pub fn capacity(&self) -> usize {
        match &self.mapping {
            Mapping::Node4(m) => m.width(),
            Mapping::Node16(m) => m.width(),
            Mapping::Node48(m) => m.width(),
            Mapping::Node256(m) => m.width(),
        }
    }

    pub fn seek_child(&self, key: u8) -> Option<&Node<V>> {
        match &self.mapping {
            Mapping::Node4(m) => m.seek_child(key),
            Mapping::Node16(m) => m.seek_child(key),
            Mapping::Node48(m) => m.seek_child(key),
            Mapping::Node256(m) => m.seek_child(key),
        }
    }

    pub fn seek_child_mut(&mut self, key: u8) -> Option<&mut Node<V>> {
        match &mut self.mapping {
            Mapping::Node4(m) => m.seek_child_mut(key),
            Mapping::Node16(m) => m.seek_child_mut(key),
            Mapping::Node48(m) => m.seek_child_mut(key),
            Mapping::Node256(m) => m.seek_child_mut(key),
        }
    }

    pub fn add_child(&mut self, key: u8, child: Node<V>) {
        if self.is_full() {
            self.grow();
        }
        match &mut self.mapping {
            Mapping::Node4(m) => m.add_child(key, child),
            Mapping::Node16(m) => m.add_child(key, child),
            Mapping::Node48(m) => m.add_child(key, child),
            Mapping::Node256(m) => m.add_child(key, child),
        }
    }

    /// Remove the child routed by `key`, shrinking to the next smaller tier
    /// once fan-out falls below the tier's minimum. A node4 does not shrink
    /// here; at one child the tree collapses it into its survivor instead.
    pub fn delete_child(&mut self, key: u8) -> Option<Node<V>> {
        match &mut self.mapping {
            Mapping::Node4(m) => m.delete_child(key),
            Mapping::Node16(m) => {
                let node = m.delete_child(key);
                if node.is_some() && self.num_children() < 5 {
                    self.shrink();
                }
                node
            }
            Mapping::Node48(m) => {
                let node = m.delete_child(key);
                if node.is_some() && self.num_children() < 17 {
                    self.shrink();
                }
                node
            }
            Mapping::Node256(m) => {
                let node = m.delete_child(key);
                if node.is_some() && self.num_children() < 49 {
                    self.shrink();
                }
                node
            }
        }
    }

    /// Remove and return the single remaining child and its routing byte.
    pub fn take_only_child(&mut self) -> (u8, Node<V>) {
        match &mut self.mapping {
            Mapping::Node4(m) => m.take_only_child(),
            // Shrinking keeps any one-child node at the smallest tier.
            _ => unreachable!("one-child node must be a node4"),
        }
    }

    /// Children in ascending key-byte order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = (u8, &Node<V>)> + '_> {
        match &self.mapping {
            Mapping::Node4(m) => Box::new(m.iter()),
            Mapping::Node16(m) => Box::new(m.iter()),
            Mapping::Node48(m) => Box::new(m.iter()),
            Mapping::Node256(m) => Box::new(m.iter()),
        }
    }

    /// The child with the smallest routing byte.
    pub fn first_child(&self) -> &Node<V> {
        self.iter()
            .next()
            .map(|(_, child)| child)
            .expect("internal node with no children")
    }

    /// The smallest stored record under this node. Recovers the bytes of a
    /// compressed prefix past the inline cap.
    pub fn minimum(&self) -> &Leaf<V> {
        self.first_child().minimum()
    }

    /// Number of logical prefix bytes matching `key` at `depth`: inline bytes
    /// first, then the minimum leaf for the span past the inline cap. A
    /// result shorter than `prefix.len()` is a mismatch.
    pub fn matched_prefix_len(&self, key: &Key, depth: usize) -> usize {
        let inline = self.prefix.inline();
        let mut idx = 0;
        while idx < inline.len() {
            if key.at(depth + idx) != inline[idx] {
                return idx;
            }
            idx += 1;
        }
        if self.prefix.len() > MAX_PREFIX_LEN {
            let min_key = &self.minimum().key;
            while idx < self.prefix.len() {
                if key.at(depth + idx) != min_key.at(depth + idx) {
                    return idx;
                }
                idx += 1;
            }
        }
        idx
    }

    /// Whether the first `min(prefix.len(), bytes.len())` logical prefix
    /// bytes equal `bytes`. `depth` is this node's depth in the tree, needed
    /// to address the minimum leaf past the inline cap.
    pub fn prefix_starts_with(&self, bytes: &[u8], depth: usize) -> bool {
        let span = self.prefix.len().min(bytes.len());
        let inline = self.prefix.inline();
        let inline_span = span.min(inline.len());
        if inline[..inline_span] != bytes[..inline_span] {
            return false;
        }
        if span > inline.len() {
            let min_key = &self.minimum().key;
            for idx in inline.len()..span {
                if min_key.at(depth + idx) != bytes[idx] {
                    return false;
                }
            }
        }
        true
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.num_children() >= self.capacity()
    }

    fn grow(&mut self) {
        match &mut self.mapping {
            Mapping::Node4(m) => {
                self.mapping = Mapping::Node16(SortedMapping::from_resized(m));
            }
            Mapping::Node16(m) => {
                self.mapping = Mapping::Node48(IndexedMapping::from_sorted(m));
            }
            Mapping::Node48(m) => {
                self.mapping = Mapping::Node256(DirectMapping::from_indexed(m));
            }
            Mapping::Node256(_) => unreachable!("node256 cannot grow"),
        }
    }

    fn shrink(&mut self) {
        match &mut self.mapping {
            Mapping::Node4(_) => unreachable!("node4 collapses instead of shrinking"),
            Mapping::Node16(m) => {
                self.mapping = Mapping::Node4(SortedMapping::from_resized(m));
            }
            Mapping::Node48(m) => {
                self.mapping = Mapping::Node16(SortedMapping::from_indexed(m));
            }
            Mapping::Node256(m) => {
                self.mapping = Mapping::Node48(IndexedMapping::from_direct(m));
            }
        }
    }
}

/// Borrowed view of a node handed to traversal callbacks and yielded by the
/// tree iterator. Internal nodes report no key and no value; visitors that
/// only care about stored records filter with [`NodeRef::is_leaf`].
pub struct NodeRef<'a, V> {
    node: &'a Node<V>,
}

impl<'a, V> NodeRef<'a, V> {
    pub(crate) fn new(node: &'a Node<V>) -> Self {
        Self { node }
    }

    pub fn kind(&self) -> NodeKind {
        self.node.kind()
    }

    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }

    /// The stored key in its external form, `None` for internal nodes.
    pub fn key(&self) -> Option<&'a [u8]> {
        match self.node {
            Node::Leaf(leaf) => Some(leaf.key.external()),
            Node::Inner(_) => None,
        }
    }

    /// The stored value, `None` for internal nodes.
    pub fn value(&self) -> Option<&'a V> {
        match self.node {
            Node::Leaf(leaf) => Some(&leaf.value),
            Node::Inner(_) => None,
        }
    }

    pub fn num_children(&self) -> usize {
        match self.node {
            Node::Leaf(_) => 0,
            Node::Inner(inner) => inner.num_children(),
        }
    }
}
