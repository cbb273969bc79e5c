/// The label of one arm of a dispatch.
///
/// The wildcard is a case of its own, so no tag or literal can collide with
/// it.
#[derive(Debug, Clone, PartialEq)]
pub enum Case<K> {
    /// Handles values identified by `K`.
    Key(K),

    /// Handles everything not handled by a `Key`.
    Wildcard,
}

impl<K> From<K> for Case<K> {
    fn from(key: K) -> Self { Self::Key(key) }
}
