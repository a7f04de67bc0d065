//! Detail-view selection state.

use nftlytics_core::NftSaleInfo;
use parking_lot::RwLock;

/// The currently inspected row, if any.
///
/// A value copy, not an index: replacing the snapshot can never leave the
/// selection pointing at the wrong row, only at a stale one.
pub type Selection = Option<NftSaleInfo>;

/// Tracks which single analytics row is under detail inspection.
///
/// Membership in the current snapshot is not validated at selection time;
/// callers select from rendered rows, which are snapshot members by
/// construction. Staleness is handled by policy instead: the store clears
/// the selection whenever it leaves `Ready`.
#[derive(Debug, Default)]
pub struct SelectionController {
    current: RwLock<Selection>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection to the given row. Returns true if it changed.
    pub fn select(&self, item: NftSaleInfo) -> bool {
        let mut current = self.current.write();
        if current.as_ref() == Some(&item) {
            return false;
        }
        *current = Some(item);
        true
    }

    /// Reset to no selection. Returns true if something was selected.
    pub fn clear(&self) -> bool {
        self.current.write().take().is_some()
    }

    /// The current selection.
    pub fn current(&self) -> Selection {
        self.current.read().clone()
    }
}
