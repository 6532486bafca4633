pub(crate) mod direct;
pub(crate) mod indexed;
pub(crate) mod sorted;

/// Common operation set over a node's child slots, one implementation per
/// capacity tier.
pub(crate) trait ChildMapping<N, const WIDTH: usize> {
    fn add_child(&mut self, key: u8, node: N);
    fn seek_child(&self, key: u8) -> Option<&N>;
    fn seek_child_mut(&mut self, key: u8) -> Option<&mut N>;
    fn delete_child(&mut self, key: u8) -> Option<N>;
    fn num_children(&self) -> usize;

    fn width(&self) -> usize {
        WIDTH
    }
}
