use std::sync::Arc;
use std::thread;
use stockroom::{InventoryItem, InventoryStore};

fn item(id: i64) -> InventoryItem {
    InventoryItem {
        id,
        sku: format!("SKU{id}"),
        product_name: format!("Product {id}"),
        category: "Tools".to_string(),
        stock: id * 10,
        price: id as f64 + 0.25,
        last_updated: "2024-01-01".to_string(),
    }
}

// --- insertion order ---

#[test]
fn test_append_keeps_arrival_order() {
    let store = InventoryStore::new();
    store.append(2, item(2));
    store.append(0, item(0));
    store.append(1, item(1));
    let ids: Vec<i64> = store.snapshot().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![2, 0, 1]);
}

#[test]
fn test_insert_ordered_sorts_by_sequence() {
    let store = InventoryStore::new();
    for seq in [5_u64, 1, 3, 0, 4, 2] {
        store.insert_ordered(seq, item(seq as i64));
    }
    let ids: Vec<i64> = store.snapshot().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_duplicate_ids_coexist() {
    let store = InventoryStore::new();
    store.append(0, item(7));
    store.append(1, item(7));
    assert_eq!(store.len(), 2);
}

// --- JSON encoding ---

#[test]
fn test_to_json_empty_store_is_empty_array() {
    let store = InventoryStore::new();
    assert_eq!(store.to_json().unwrap(), b"[]");
}

#[test]
fn test_to_json_uses_snake_case_keys() {
    let store = InventoryStore::new();
    store.append(0, item(1));
    let value: serde_json::Value = serde_json::from_slice(&store.to_json().unwrap()).unwrap();
    let obj = value[0].as_object().unwrap();
    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "category",
            "id",
            "last_updated",
            "price",
            "product_name",
            "sku",
            "stock"
        ]
    );
    assert_eq!(value[0]["price"], 1.25);
    assert_eq!(value[0]["product_name"], "Product 1");
}

#[test]
fn test_to_json_round_trips_items() {
    let store = InventoryStore::new();
    for id in 0..5 {
        store.append(id as u64, item(id));
    }
    let decoded: Vec<InventoryItem> = serde_json::from_slice(&store.to_json().unwrap()).unwrap();
    assert_eq!(decoded, store.snapshot());
}

#[test]
fn test_to_json_rejects_non_finite_price() {
    let store = InventoryStore::new();
    store.append(0, item(1));
    let mut bad = item(2);
    bad.price = f64::NAN;
    store.append(1, bad);
    assert!(store.to_json().is_err());

    let store = InventoryStore::new();
    let mut inf = item(3);
    inf.price = f64::INFINITY;
    store.append(0, inf);
    assert!(store.to_json().is_err());
}

// --- concurrent access ---

#[test]
fn test_readers_never_see_partial_items() {
    let store = Arc::new(InventoryStore::new());
    let writer_store = Arc::clone(&store);
    let writer = thread::spawn(move || {
        for id in 0..5_000 {
            writer_store.append(id as u64, item(id));
        }
    });

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..100 {
                    let bytes = store.to_json().unwrap();
                    let items: Vec<InventoryItem> = serde_json::from_slice(&bytes).unwrap();
                    for it in &items {
                        assert_eq!(*it, item(it.id));
                    }
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }
    assert_eq!(store.len(), 5_000);
}
