use stockroom::{InventoryItem, ParseError, parse_record};

fn widget_row() -> Vec<&'static str> {
    vec!["1", "SKU1", "Widget", "Tools", "10", "9.99", "2024-01-01"]
}

// --- valid rows ---

#[test]
fn test_parse_single_widget_row() {
    let item = parse_record(&widget_row()).unwrap();
    assert_eq!(
        item,
        InventoryItem {
            id: 1,
            sku: "SKU1".to_string(),
            product_name: "Widget".to_string(),
            category: "Tools".to_string(),
            stock: 10,
            price: 9.99,
            last_updated: "2024-01-01".to_string(),
        }
    );
}

#[test]
fn test_parse_ignores_extra_fields() {
    let mut row = widget_row();
    row.extend(["extra", "more"]);
    let item = parse_record(&row).unwrap();
    assert_eq!(item.last_updated, "2024-01-01");
}

#[test]
fn test_parse_accepts_negative_and_zero_values() {
    let row = ["-3", "SKU", "Name", "Cat", "-7", "-0.5", "x"];
    let item = parse_record(&row).unwrap();
    assert_eq!(item.id, -3);
    assert_eq!(item.stock, -7);
    assert_eq!(item.price, -0.5);

    let row = ["0", "SKU", "Name", "Cat", "0", "0", ""];
    let item = parse_record(&row).unwrap();
    assert_eq!(item.price, 0.0);
    assert_eq!(item.last_updated, "");
}

#[test]
fn test_parse_keeps_strings_verbatim() {
    let row = ["5", " SKU 5 ", "  Spaced  ", "", "1", "2.5", "not a date"];
    let item = parse_record(&row).unwrap();
    assert_eq!(item.sku, " SKU 5 ");
    assert_eq!(item.product_name, "  Spaced  ");
    assert_eq!(item.category, "");
    assert_eq!(item.last_updated, "not a date");
}

#[test]
fn test_parse_accepts_owned_strings() {
    let row: Vec<String> = widget_row().into_iter().map(String::from).collect();
    assert_eq!(parse_record(&row).unwrap().id, 1);
}

// --- rejected rows ---

#[test]
fn test_parse_insufficient_fields() {
    let row = ["1", "SKU1", "Widget", "Tools", "10", "9.99"];
    assert_eq!(
        parse_record(&row),
        Err(ParseError::InsufficientFields { found: 6 })
    );
    let empty: [&str; 0] = [];
    assert_eq!(
        parse_record(&empty),
        Err(ParseError::InsufficientFields { found: 0 })
    );
}

#[test]
fn test_parse_invalid_id() {
    let row = ["x", "SKU2", "Bad", "Tools", "5", "1.0", "2024-01-01"];
    match parse_record(&row) {
        Err(ParseError::InvalidInteger { field, value, .. }) => {
            assert_eq!(field, "id");
            assert_eq!(value, "x");
        }
        other => panic!("expected invalid id, got {:?}", other),
    }
}

#[test]
fn test_parse_invalid_stock() {
    let row = ["2", "SKU2", "Bad", "Tools", "5.5", "1.0", "2024-01-01"];
    match parse_record(&row) {
        Err(ParseError::InvalidInteger { field, .. }) => assert_eq!(field, "stock"),
        other => panic!("expected invalid stock, got {:?}", other),
    }
}

#[test]
fn test_parse_invalid_price() {
    let row = ["2", "SKU2", "Bad", "Tools", "5", "cheap", "2024-01-01"];
    match parse_record(&row) {
        Err(ParseError::InvalidFloat { field, value, .. }) => {
            assert_eq!(field, "price");
            assert_eq!(value, "cheap");
        }
        other => panic!("expected invalid price, got {:?}", other),
    }
}

#[test]
fn test_parse_does_not_trim_numbers() {
    let row = ["1", "SKU", "Name", "Cat", " 5", "1.0", "x"];
    assert!(matches!(
        parse_record(&row),
        Err(ParseError::InvalidInteger { field: "stock", .. })
    ));
}

#[test]
fn test_parse_id_checked_before_stock_and_price() {
    let row = ["bad", "SKU", "Name", "Cat", "bad", "bad", "x"];
    assert!(matches!(
        parse_record(&row),
        Err(ParseError::InvalidInteger { field: "id", .. })
    ));
}

// --- determinism ---

#[test]
fn test_parse_is_deterministic() {
    let good = widget_row();
    let bad = ["1", "SKU", "Name", "Cat", "10", "NaN-ish", "x"];
    for _ in 0..10 {
        assert_eq!(parse_record(&good), parse_record(&good));
        assert_eq!(parse_record(&bad), parse_record(&bad));
    }
}

#[test]
fn test_parse_error_messages_name_the_field() {
    let row = ["1", "SKU", "Name", "Cat", "ten", "1.0", "x"];
    let msg = parse_record(&row).unwrap_err().to_string();
    assert!(msg.contains("stock"), "{}", msg);
    assert!(msg.contains("ten"), "{}", msg);
}
