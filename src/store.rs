//! In-memory inventory: written by the load collector, read by request handlers.

use serde::Serialize;
use std::io::Write;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::InventoryItem;

/// Stored item plus the source sequence number it was parsed from.
#[derive(Debug)]
struct Slot {
    seq: u64,
    item: InventoryItem,
}

/// Serializes the slots as a plain array of items without copying them out of the lock.
struct ItemsView<'a>(&'a [Slot]);

impl Serialize for ItemsView<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(|slot| &slot.item))
    }
}

/// Shared inventory guarded by a reader/writer lock.
///
/// Each insert takes the write lock once and releases it, so a reader sees every item
/// either fully present or absent. Share it as `Arc<InventoryStore>`.
#[derive(Debug, Default)]
pub struct InventoryStore {
    slots: RwLock<Vec<Slot>>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // push/insert never leave a half-written slot, so a poisoned lock is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Slot>> {
        self.slots.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Slot>> {
        self.slots.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append in arrival order.
    pub fn append(&self, seq: u64, item: InventoryItem) {
        self.write().push(Slot { seq, item });
    }

    /// Insert at the position that keeps slots sorted by `seq`.
    ///
    /// `Vec::insert` shifts every later slot, so an out-of-order arrival costs O(n) under the
    /// write lock. Arrivals lag source order by at most the channel caps plus the worker count,
    /// so the shift is short at default sizes; a pre-sized indexed-slot array or one sort after
    /// the drain would avoid it but would hide items from readers until the load ends.
    pub fn insert_ordered(&self, seq: u64, item: InventoryItem) {
        let mut slots = self.write();
        let at = slots.partition_point(|slot| slot.seq <= seq);
        slots.insert(at, Slot { seq, item });
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Clone of the current items, in store order.
    pub fn snapshot(&self) -> Vec<InventoryItem> {
        self.read().iter().map(|slot| slot.item.clone()).collect()
    }

    /// Encode the items as a JSON array into `writer`, holding the read lock for the whole encode.
    pub fn write_json<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        let slots = self.read();
        serde_json::to_writer(writer, &ItemsView(&slots))
    }

    /// Encode the items as a JSON array.
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_json(&mut buf)?;
        Ok(buf)
    }
}
