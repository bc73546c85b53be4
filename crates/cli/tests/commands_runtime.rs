use std::fs;

use shopfront_cli::commands::{catalog, categories, find_order};
use shopfront_core::Dataset;

const ORDERS: &str = include_str!("../../../data/orders.json");
const PRODUCTS: &str = include_str!("../../../data/products.json");
const CATEGORIES: &str = include_str!("../../../data/categories.json");

fn load_bundled_dataset() -> Dataset {
    // Round-trip through a directory so the same path the binary takes at
    // startup is exercised, not just the in-memory parser.
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("orders.json"), ORDERS).expect("write orders");
    fs::write(dir.path().join("products.json"), PRODUCTS).expect("write products");
    fs::write(dir.path().join("categories.json"), CATEGORIES).expect("write categories");
    Dataset::load(dir.path()).expect("bundled dataset loads")
}

#[test]
fn find_order_renders_every_matching_card_in_dataset_order() {
    let dataset = load_bundled_dataset();
    let result = find_order::run(&dataset, "0901234567");

    assert_eq!(result.exit_code, 0);
    let first = result.output.find("Mã đơn: DH001").expect("first order card");
    let second = result.output.find("Mã đơn: DH003").expect("second order card");
    assert!(first < second, "cards keep dataset order");
    assert!(!result.output.contains("DH002"));
}

#[test]
fn find_order_failure_exits_nonzero_with_the_inline_message() {
    let dataset = load_bundled_dataset();
    let result = find_order::run(&dataset, "0999999999");

    assert_eq!(result.exit_code, 1);
    assert_eq!(result.output, "Không tìm thấy đơn hàng nào");
}

#[test]
fn catalog_groups_the_whole_storefront_under_all() {
    let dataset = load_bundled_dataset();
    let result = catalog::run(&dataset, "all", "");

    assert_eq!(result.exit_code, 0);
    assert!(result.output.contains("== Đồ uống =="));
    assert!(result.output.contains("== Tráng miệng =="));
    assert!(result.output.contains("== Khác =="), "fallback bucket rendered last");
    assert!(result.output.contains("Túi tote Shopfront"));
}

#[test]
fn catalog_search_only_narrows_a_selected_category() {
    let dataset = load_bundled_dataset();

    let grouped = catalog::run(&dataset, "all", "phở");
    assert!(grouped.output.contains("Cà phê sữa đá"), "grouped view ignores search");

    let flat = catalog::run(&dataset, "food", "phở");
    assert!(flat.output.contains("Phở bò tái"));
    assert!(!flat.output.contains("Bánh mì"));
}

#[test]
fn categories_lists_the_tab_bar() {
    let dataset = load_bundled_dataset();
    let result = categories::run(&dataset);

    let lines: Vec<&str> = result.output.lines().collect();
    assert_eq!(
        lines,
        ["Tất cả (all)", "Đồ uống (drinks)", "Đồ ăn (food)", "Tráng miệng (dessert)"]
    );
}
