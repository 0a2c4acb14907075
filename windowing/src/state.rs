/// A lightweight, serializable snapshot of the tracked scroll state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. Hosts use it to
/// put a list back where it was after it is unmounted and mounted again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollSnapshot {
    pub offset: u64,
    pub viewport_height: u32,
}
