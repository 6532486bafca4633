use crate::mapping::indexed::IndexedMapping;
use crate::mapping::ChildMapping;
use crate::utils::slot_array::SlotArray;

/// Maps a key byte straight to the child slot with the same position. The
/// densest tier: no index, no shifting, O(1) everything.
pub(crate) struct DirectMapping<N> {
    pub(crate) children: SlotArray<N, 256, 4>,
    num_children: usize,
}

impl<N> Default for DirectMapping<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> DirectMapping<N> {
    pub fn new() -> Self {
        Self {
            children: SlotArray::new(),
            num_children: 0,
        }
    }

    /// Grow an indexed mapping into a direct one.
    pub fn from_indexed(old: &mut IndexedMapping<N>) -> Self {
        let mut new = Self::new();
        old.move_into(&mut new);
        new
    }

    /// Drain every child into `target` in ascending key-byte order.
    pub fn move_into<const WIDTH: usize, M: ChildMapping<N, WIDTH>>(&mut self, target: &mut M) {
        for byte in 0..256usize {
            if let Some(child) = self.children.erase(byte) {
                self.num_children -= 1;
                target.add_child(byte as u8, child);
            }
        }
        debug_assert_eq!(self.num_children, 0);
    }

    /// Children in ascending key-byte order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (u8, &N)> {
        self.children.iter().map(|(byte, child)| (byte as u8, child))
    }
}

impl<N> ChildMapping<N, 256> for DirectMapping<N> {
    #[inline]
    fn add_child(&mut self, key: u8, node: N) {
        self.children.set(key as usize, node);
        self.num_children += 1;
    }

    #[inline]
    fn seek_child(&self, key: u8) -> Option<&N> {
        self.children.get(key as usize)
    }

    #[inline]
    fn seek_child_mut(&mut self, key: u8) -> Option<&mut N> {
        self.children.get_mut(key as usize)
    }

    #[inline]
    fn delete_child(&mut self, key: u8) -> Option<N> {
        let old = self.children.erase(key as usize);
        if old.is_some() {
            self.num_children -= 1;
        }
        old
    }

    #[inline(always)]
    fn num_children(&self) -> usize {
        self.num_children
    }
}
