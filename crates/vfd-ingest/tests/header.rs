use vfd_ingest::{
    CsvTable, INVENTORY_FIELDS, IngestError, LIST_FIELDS, SECONDARY_FIELDS, field, resolve_headers,
};

fn table(headers: &[&str]) -> CsvTable {
    CsvTable {
        name: "test.csv".to_string(),
        headers: headers.iter().map(|h| (*h).to_string()).collect(),
        rows: Vec::new(),
    }
}

#[test]
fn resolves_every_identifier_synonym() {
    for header in ["Model Name", "model name", "Name", "Material name", "MODEL NAME"] {
        let t = table(&[header, "Qty owned", "Total cost"]);
        let map = resolve_headers(&t, INVENTORY_FIELDS)
            .unwrap_or_else(|e| panic!("{header}: {e}"));
        assert_eq!(map.column(field::MODEL), Some(0), "header {header:?}");
    }
}

#[test]
fn resolves_every_quantity_synonym() {
    for header in ["Qty owned", "QTY", "Quantity on hand", "quantity"] {
        let t = table(&["Model Name", header, "Total cost"]);
        let map = resolve_headers(&t, INVENTORY_FIELDS).unwrap();
        assert_eq!(map.column(field::QTY), Some(1), "header {header:?}");
    }
}

#[test]
fn resolves_cost_and_price_synonyms() {
    let t = table(&["Model Name", "Qty", "Total Cost (BDT)"]);
    let map = resolve_headers(&t, INVENTORY_FIELDS).unwrap();
    assert_eq!(map.column(field::TOTAL_COST), Some(2));

    for header in ["1.27", "July Price", "price 1.27"] {
        let t = table(&["Model Name", header]);
        let map = resolve_headers(&t, SECONDARY_FIELDS).unwrap();
        assert_eq!(map.column(field::SECONDARY_PRICE), Some(1), "header {header:?}");
    }

    for header in ["List Price", "ListPrice", "list price (final)"] {
        let t = table(&["Serial", "Model Name", header]);
        let map = resolve_headers(&t, LIST_FIELDS).unwrap();
        assert_eq!(map.column(field::LIST_PRICE), Some(2), "header {header:?}");
    }
}

#[test]
fn headers_resolve_in_left_to_right_order() {
    // Two headers match the identifier field; the leftmost wins.
    let t = table(&["Material name", "Model Name", "Qty", "Total cost"]);
    let map = resolve_headers(&t, INVENTORY_FIELDS).unwrap();
    assert_eq!(map.column(field::MODEL), Some(0));
}

#[test]
fn bound_header_is_not_reused_for_later_fields() {
    // `Name` could satisfy the identifier rule only; once bound, the
    // quantity field must find its own header further right.
    let t = table(&["Name", "Quantity", "Total cost"]);
    let map = resolve_headers(&t, INVENTORY_FIELDS).unwrap();
    assert_eq!(map.column(field::MODEL), Some(0));
    assert_eq!(map.column(field::QTY), Some(1));
}

#[test]
fn missing_required_field_aborts_with_observed_headers() {
    let t = table(&["Model Name", "Qty owned"]);
    let err = resolve_headers(&t, INVENTORY_FIELDS).unwrap_err();
    match err {
        IngestError::MissingColumn {
            field: missing,
            observed,
            ..
        } => {
            assert_eq!(missing, field::TOTAL_COST);
            assert_eq!(observed, vec!["Model Name", "Qty owned"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}
