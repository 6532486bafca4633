use crate::node::{Node, NodeRef};

type ChildIter<'a, V> = Box<dyn Iterator<Item = (u8, &'a Node<V>)> + 'a>;

/// Lazy pre-order traversal over every node in the tree, in the same order
/// as `each`: a node is yielded before its descendants, and children are
/// walked in ascending key-byte order, so the leaf subsequence arrives in
/// lexicographic key order.
///
/// The iterator keeps an explicit stack of child cursors, one frame per
/// internal node on the current path.
pub struct Iter<'a, V> {
    root: Option<&'a Node<V>>,
    stack: Vec<ChildIter<'a, V>>,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(root: Option<&'a Node<V>>) -> Self {
        Self {
            root,
            stack: Vec::new(),
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = NodeRef<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            if let Node::Inner(inner) = root {
                self.stack.push(inner.iter());
            }
            return Some(NodeRef::new(root));
        }

        loop {
            let cursor = self.stack.last_mut()?;

            // Exhausted frame: unwind to the parent and continue there.
            let Some((_, child)) = cursor.next() else {
                self.stack.pop();
                continue;
            };

            if let Node::Inner(inner) = child {
                self.stack.push(inner.iter());
            }
            return Some(NodeRef::new(child));
        }
    }
}
