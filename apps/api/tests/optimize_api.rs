use sheetfit_api::optimizer::{optimize, OptimizeError, Product};

#[test]
fn test_two_products_single_sheet() {
    let best = optimize(
        vec![Product::new("A", 10.0, 5), Product::new("B", 20.0, 3)],
        &[100.0],
    )
    .unwrap();
    assert_eq!(best.sheet_size, 100.0);
    assert_eq!(best.layout.count("A"), Some(3));
    assert_eq!(best.layout.count("B"), Some(2));
    assert_eq!(best.layout.total_items(), 5);
    assert_eq!((best.sheets_needed, best.overprint), (2, 2));
    assert!(best.total_area_per_sheet <= best.sheet_size);
}

#[test]
fn test_layout_keeps_input_order() {
    let best = optimize(
        vec![Product::new("B", 20.0, 3), Product::new("A", 10.0, 5)],
        &[216.0],
    )
    .unwrap();
    let names: Vec<&str> = best.layout.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["B", "A"]);
}

#[test]
fn test_oversized_product_is_infeasible() {
    let result = optimize(vec![Product::new("X", 1000.0, 1)], &[100.0]);
    assert_eq!(result, Err(OptimizeError::Infeasible));
}

#[test]
fn test_invalid_input_never_searches() {
    assert!(matches!(
        optimize(vec![], &[100.0]),
        Err(OptimizeError::InvalidInput(_))
    ));
    assert!(matches!(
        optimize(vec![Product::new("A", 0.0, 1)], &[100.0]),
        Err(OptimizeError::InvalidInput(_))
    ));
}
