/// A lightweight, serializable snapshot of the synchronizer's selection.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyncSnapshot {
    /// The stored cursor. Clamped against the item count when restored.
    pub active_index: usize,
}
