use crate::mapping::direct::DirectMapping;
use crate::mapping::sorted::SortedMapping;
use crate::mapping::ChildMapping;
use crate::utils::slot_array::SlotArray;

/// Maps a key byte to a child through a 256-entry index of 1-based slot
/// numbers (0 means absent) into a 48-slot child array. Lookup is a double
/// indirection; ascending iteration walks the index, which is ordered by key
/// byte no matter how fragmented the slots become.
pub(crate) struct IndexedMapping<N> {
    pub(crate) index: [u8; 256],
    pub(crate) children: SlotArray<N, 48, 1>,
    pub(crate) num_children: u8,
}

impl<N> Default for IndexedMapping<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> IndexedMapping<N> {
    pub fn new() -> Self {
        Self {
            index: [0; 256],
            children: SlotArray::new(),
            num_children: 0,
        }
    }

    /// Grow a sorted mapping into an indexed one.
    pub fn from_sorted<const WIDTH: usize>(old: &mut SortedMapping<N, WIDTH>) -> Self {
        let mut new = Self::new();
        for i in 0..old.num_children as usize {
            let child =
                std::mem::replace(&mut old.children[i], std::mem::MaybeUninit::uninit());
            new.add_child(old.keys[i], unsafe { child.assume_init() });
        }
        old.num_children = 0;
        new
    }

    /// Shrink a direct mapping into an indexed one.
    pub fn from_direct(old: &mut DirectMapping<N>) -> Self {
        let mut new = Self::new();
        old.move_into(&mut new);
        new
    }

    /// Drain every child into `target` in ascending key-byte order.
    pub fn move_into<const WIDTH: usize, M: ChildMapping<N, WIDTH>>(&mut self, target: &mut M) {
        for byte in 0..256usize {
            let slot = self.index[byte];
            if slot == 0 {
                continue;
            }
            self.index[byte] = 0;
            let child = self
                .children
                .erase(slot as usize - 1)
                .expect("index entry points at an empty slot");
            target.add_child(byte as u8, child);
        }
        self.num_children = 0;
    }

    /// Children in ascending key-byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &N)> {
        (0..256usize).filter_map(move |byte| {
            let slot = self.index[byte];
            if slot == 0 {
                return None;
            }
            let child = self
                .children
                .get(slot as usize - 1)
                .expect("index entry points at an empty slot");
            Some((byte as u8, child))
        })
    }
}

impl<N> ChildMapping<N, 48> for IndexedMapping<N> {
    fn add_child(&mut self, key: u8, node: N) {
        debug_assert_eq!(self.index[key as usize], 0);
        let slot = self.children.first_empty().expect("node48 is full");
        self.index[key as usize] = slot as u8 + 1;
        self.children.set(slot, node);
        self.num_children += 1;
    }

    fn seek_child(&self, key: u8) -> Option<&N> {
        match self.index[key as usize] {
            0 => None,
            slot => self.children.get(slot as usize - 1),
        }
    }

    fn seek_child_mut(&mut self, key: u8) -> Option<&mut N> {
        match self.index[key as usize] {
            0 => None,
            slot => self.children.get_mut(slot as usize - 1),
        }
    }

    fn delete_child(&mut self, key: u8) -> Option<N> {
        let slot = self.index[key as usize];
        if slot == 0 {
            return None;
        }
        self.index[key as usize] = 0;
        let old = self.children.erase(slot as usize - 1);
        if old.is_some() {
            self.num_children -= 1;
        }
        old
    }

    #[inline(always)]
    fn num_children(&self) -> usize {
        self.num_children as usize
    }
}
