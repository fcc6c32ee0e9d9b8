use crossbeam_channel::Receiver;

use crate::ParsedRecord;
use crate::store::InventoryStore;

/// Drain `item_rx` into `store` until the channel closes. Each item takes the write lock once.
/// Returns the number of items committed.
pub fn drain_into_store(
    item_rx: &Receiver<ParsedRecord>,
    store: &InventoryStore,
    preserve_order: bool,
) -> usize {
    let mut committed = 0_usize;
    while let Ok(ParsedRecord { seq, item }) = item_rx.recv() {
        if preserve_order {
            store.insert_ordered(seq, item);
        } else {
            store.append(seq, item);
        }
        committed += 1;
    }
    committed
}
