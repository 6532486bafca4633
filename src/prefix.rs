use crate::keys::Key;

/// Number of compressed-prefix bytes an internal node stores inline. Longer
/// prefixes keep only their logical length; the bytes past the cap are read
/// back from the subtree's minimum leaf when a comparison needs them.
pub(crate) const MAX_PREFIX_LEN: usize = 10;

/// Compressed prefix of an internal node.
///
/// `len` is the logical length and may exceed [`MAX_PREFIX_LEN`]; only the
/// first `min(len, MAX_PREFIX_LEN)` bytes of `data` are meaningful.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Prefix {
    data: [u8; MAX_PREFIX_LEN],
    len: usize,
}

impl Prefix {
    #[allow(dead_code)]
    pub fn empty() -> Self {
        Self {
            data: [0; MAX_PREFIX_LEN],
            len: 0,
        }
    }

    /// Build a prefix of logical length `len` from the available bytes of
    /// `src`. `src` may be shorter than `len` when the caller only holds the
    /// inline portion of a longer prefix.
    pub fn new(src: &[u8], len: usize) -> Self {
        let mut data = [0; MAX_PREFIX_LEN];
        let stored = src.len().min(len).min(MAX_PREFIX_LEN);
        data[..stored].copy_from_slice(&src[..stored]);
        Self { data, len }
    }

    /// Prefix covering `key[depth..depth + len]`.
    pub fn from_key(key: &Key, depth: usize, len: usize) -> Self {
        let stored = len.min(MAX_PREFIX_LEN);
        let mut data = [0; MAX_PREFIX_LEN];
        for (i, byte) in data.iter_mut().enumerate().take(stored) {
            *byte = key.at(depth + i);
        }
        Self { data, len }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The trusted inline bytes: the first `min(len, MAX_PREFIX_LEN)`.
    #[inline]
    pub fn inline(&self) -> &[u8] {
        &self.data[..self.len.min(MAX_PREFIX_LEN)]
    }

    /// First `len` bytes of this prefix, keeping whatever fits inline.
    pub fn truncated(&self, len: usize) -> Self {
        debug_assert!(len <= self.len);
        Self::new(self.inline(), len)
    }

    /// Prefix of a node absorbing its only child: `self`, then the byte that
    /// routed to the child, then the child's own prefix. Bytes past the
    /// inline cap become virtual.
    pub fn join(&self, byte: u8, child: &Prefix) -> Self {
        let mut data = [0; MAX_PREFIX_LEN];
        let mut stored = self.inline().len();
        data[..stored].copy_from_slice(self.inline());
        if stored < MAX_PREFIX_LEN {
            data[stored] = byte;
            stored += 1;
        }
        for &b in child.inline() {
            if stored == MAX_PREFIX_LEN {
                break;
            }
            data[stored] = b;
            stored += 1;
        }
        Self {
            data,
            len: self.len + 1 + child.len,
        }
    }
}
