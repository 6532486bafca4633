use crate::node::{Mapping, Node};

/// Node population of a tree: how many nodes of each representation are in
/// use, how many records they hold, and how deep the tree runs. Useful for
/// verifying that a workload ends up in the representations it should.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TreeStats {
    pub num_leaves: usize,
    pub num_node4: usize,
    pub num_node16: usize,
    pub num_node48: usize,
    pub num_node256: usize,
    pub max_height: usize,
}

impl TreeStats {
    pub fn num_inner_nodes(&self) -> usize {
        self.num_node4 + self.num_node16 + self.num_node48 + self.num_node256
    }
}

pub(crate) fn collect<V>(node: &Node<V>, stats: &mut TreeStats, height: usize) {
    if height > stats.max_height {
        stats.max_height = height;
    }
    match node {
        Node::Leaf(_) => stats.num_leaves += 1,
        Node::Inner(inner) => {
            match &inner.mapping {
                Mapping::Node4(_) => stats.num_node4 += 1,
                Mapping::Node16(_) => stats.num_node16 += 1,
                Mapping::Node48(_) => stats.num_node48 += 1,
                Mapping::Node256(_) => stats.num_node256 += 1,
            }
            for (_, child) in inner.iter() {
                collect(child, stats, height + 1);
            }
        }
    }
}
