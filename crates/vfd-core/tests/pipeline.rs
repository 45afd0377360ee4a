use vfd_core::run_report;
use vfd_model::{InventoryItem, ModelKey, PricePair, SourceTables};

fn item(key: &str, qty: i64, total_cost: f64) -> InventoryItem {
    InventoryItem {
        key: ModelKey::normalize(key),
        qty,
        total_cost,
    }
}

fn pair(key: &str, value: f64) -> PricePair {
    (ModelKey::normalize(key), value)
}

#[test]
fn end_to_end_worked_example() {
    let tables = SourceTables {
        items: vec![item("fr-d720s-0.4k", 3, 300.0)],
        secondary: vec![pair("FR-E820-0.4K", 1100.0)],
        list: vec![pair("FR-D720S-0.4K", 120.0)],
    };
    let report = run_report(tables);
    assert_eq!(report.len(), 1);
    let row = &report.rows[0];
    assert_eq!(row.seq, 1);
    assert!((row.record.cogs - 100.0).abs() < 1e-9);
    assert!((row.record.cogs_marked - 175.0).abs() < 1e-9);
    assert_eq!(row.record.list_price, Some(120.0));
    // Secondary price reached through the E820 fallback root.
    assert_eq!(row.record.secondary_price, Some(1100.0));
    assert!((row.record.discount_20.unwrap() - 96.0).abs() < 1e-9);
    assert!((row.record.gross_margin_pct.unwrap() - 20.0).abs() < 1e-9);
    assert_eq!(report.total_qty, 3);
}

#[test]
fn unresolvable_item_stays_in_the_report_with_absent_prices() {
    let tables = SourceTables {
        items: vec![item("SPARE-PART", 1, 42.0)],
        secondary: vec![pair("FR-E820-0.4K", 1100.0)],
        list: vec![pair("FR-D720S-0.4K", 120.0)],
    };
    let report = run_report(tables);
    assert_eq!(report.len(), 1);
    let row = &report.rows[0];
    assert_eq!(row.seq, 1);
    assert_eq!(row.record.secondary_price, None);
    assert_eq!(row.record.list_price, None);
    assert_eq!(row.record.gross_margin_pct, None);
    assert!((row.record.cogs - 42.0).abs() < 1e-9);
}

#[test]
fn duplicate_normalized_keys_are_not_deduplicated() {
    let tables = SourceTables {
        items: vec![
            item("FR-D720S-0.4K", 3, 300.0),
            item("fr-d720s-0.4k-1", 3, 330.0),
        ],
        secondary: Vec::new(),
        list: vec![pair("FR-D720S-0.4K", 120.0)],
    };
    let report = run_report(tables);
    // Both rows share a key and both resolve the same list price, but each
    // remains a distinct row.
    assert_eq!(report.len(), 2);
    assert_eq!(report.rows[0].record.list_price, Some(120.0));
    assert_eq!(report.rows[1].record.list_price, Some(120.0));
    assert_ne!(report.rows[0].record.cogs, report.rows[1].record.cogs);
    assert_eq!(report.total_qty, 6);
}

#[test]
fn ordering_is_capacity_then_family_then_input_order() {
    let tables = SourceTables {
        items: vec![
            item("FR-A840-11K", 1, 10.0),
            item("FR-E820-0.75K", 1, 10.0),
            item("NO-CAPACITY", 1, 10.0),
            item("FR-D720S-0.75K", 1, 10.0),
            item("FR-A840-HEL-0.75K", 1, 10.0),
        ],
        secondary: Vec::new(),
        list: Vec::new(),
    };
    let report = run_report(tables);
    let order: Vec<&str> = report
        .rows
        .iter()
        .map(|row| row.record.item.key.as_str())
        .collect();
    assert_eq!(
        order,
        vec![
            // Capacity 0.0 sorts first (documented policy).
            "NO-CAPACITY",
            // 0.75K bucket in family order D < E < H.
            "FR-D720S-0.75K",
            "FR-E820-0.75K",
            "FR-A840-HEL-0.75K",
            "FR-A840-11K",
        ]
    );
    let seqs: Vec<u32> = report.rows.iter().map(|row| row.seq).collect();
    assert_eq!(seqs, vec![1, 2, 3, 4, 5]);
}

#[test]
fn ordering_is_stable_under_input_permutation() {
    let base = vec![
        item("FR-D720S-0.4K", 1, 10.0),
        item("FR-E820-0.4K", 1, 10.0),
        item("FR-A840-11K", 1, 10.0),
        item("FR-F840-3.7K", 1, 10.0),
    ];
    let mut permuted = base.clone();
    permuted.rotate_left(2);

    let order = |items: Vec<InventoryItem>| {
        run_report(SourceTables {
            items,
            secondary: Vec::new(),
            list: Vec::new(),
        })
        .rows
        .iter()
        .map(|row| row.record.item.key.as_str().to_string())
        .collect::<Vec<_>>()
    };
    assert_eq!(order(base), order(permuted));
}

#[test]
fn duplicate_price_table_keys_resolve_to_the_last_value() {
    let tables = SourceTables {
        items: vec![item("FR-E820-2.2K", 1, 100.0)],
        secondary: vec![pair("FR-E820-2.2K", 2400.0), pair("FR-E820-2.2K", 2500.0)],
        list: Vec::new(),
    };
    let report = run_report(tables);
    assert_eq!(report.rows[0].record.secondary_price, Some(2500.0));
}
