use approx::assert_relative_eq;
use rust_decimal::Decimal;
use stock_chart::ChartError;
use stock_chart::core::{BarDatum, ChartDataModel, ColorClass, top_by_quantity};

fn sample_dataset() -> Vec<BarDatum> {
    vec![
        BarDatum::new("A", 5),
        BarDatum::new("B", 15),
        BarDatum::new("C", 25),
    ]
}

#[test]
fn load_classifies_bars_and_sets_axis_headroom() {
    let geometry = ChartDataModel::default()
        .load(&sample_dataset())
        .expect("load");

    let classes: Vec<_> = geometry.bars().iter().map(|bar| bar.color_class()).collect();
    assert_eq!(
        classes,
        vec![ColorClass::Critical, ColorClass::Warning, ColorClass::Normal]
    );
    assert_relative_eq!(geometry.axis().upper, 28.75, epsilon = 1e-9);
    assert_eq!(geometry.axis().lower, 0.0);
}

#[test]
fn load_starts_every_bar_at_zero_height() {
    let geometry = ChartDataModel::default()
        .load(&sample_dataset())
        .expect("load");

    for bar in geometry.bars() {
        assert_eq!(bar.current_height(), 0.0);
        assert_eq!(bar.target_height(), bar.quantity() as f64);
    }
    assert!(!geometry.is_at_target());
}

#[test]
fn load_preserves_input_order_and_slot_layout() {
    let data = vec![
        BarDatum::new("widgets", 40),
        BarDatum::new("bolts", 3),
        BarDatum::new("nuts", 12),
    ];
    let geometry = ChartDataModel::default().load(&data).expect("load");

    let labels: Vec<_> = geometry.bars().iter().map(|bar| bar.label()).collect();
    assert_eq!(labels, vec!["widgets", "bolts", "nuts"]);
    for (index, bar) in geometry.bars().iter().enumerate() {
        assert_relative_eq!(bar.x_center(), index as f64, epsilon = 1e-12);
        assert_relative_eq!(bar.width(), 0.8, epsilon = 1e-12);
    }
    assert_eq!(geometry.x_domain(), (-0.5, 2.5));
}

#[test]
fn all_zero_quantities_fall_back_to_floor_axis() {
    let data = vec![BarDatum::new("empty-bin", 0), BarDatum::new("also-empty", 0)];
    let geometry = ChartDataModel::default().load(&data).expect("load");
    assert_eq!(geometry.axis().upper, 10.0);
    assert!(geometry.is_at_target());
}

#[test]
fn empty_dataset_is_reported_as_empty() {
    let err = ChartDataModel::default()
        .load(&[])
        .expect_err("empty dataset must not load");
    assert!(matches!(err, ChartError::EmptyDataset));
}

#[test]
fn quantities_beyond_exact_float_range_still_load() {
    let data = vec![BarDatum::new("ok", 1), BarDatum::new("huge", u64::MAX)];
    let geometry = ChartDataModel::default().load(&data).expect("huge quantity loads");

    let huge = geometry.bar(1).expect("second bar");
    assert_eq!(huge.quantity(), u64::MAX);
    assert_eq!(huge.color_class(), ColorClass::Normal);
    assert_eq!(huge.target_height(), u64::MAX as f64);
    assert!(geometry.axis().upper.is_finite());
    assert!(geometry.axis().upper > huge.target_height());
}

#[test]
fn datum_constructors_fail_fast_on_malformed_quantities() {
    assert!(matches!(
        BarDatum::try_from_signed("neg", -4),
        Err(ChartError::InvalidQuantity { .. })
    ));
    assert!(matches!(
        BarDatum::from_f64("nan", f64::NAN),
        Err(ChartError::InvalidQuantity { .. })
    ));
    assert!(matches!(
        BarDatum::from_f64("inf", f64::INFINITY),
        Err(ChartError::InvalidQuantity { .. })
    ));
    assert!(matches!(
        BarDatum::from_decimal("half", Decimal::new(25, 1)),
        Err(ChartError::InvalidQuantity { .. })
    ));

    let datum = BarDatum::from_decimal("bolts", Decimal::new(1200, 2)).expect("whole decimal");
    assert_eq!(datum, BarDatum::new("bolts", 12));
    assert_eq!(
        BarDatum::try_from_signed("nuts", 7).expect("positive"),
        BarDatum::from(("nuts", 7))
    );
}

#[test]
fn decimal_rows_report_the_failing_row_position() {
    let rows = vec![
        ("bolts", Decimal::new(12, 0)),
        ("nuts", Decimal::new(300, 2)),
        ("washers", Decimal::new(-4, 0)),
    ];
    let err = BarDatum::from_decimal_rows(rows).expect_err("negative row");
    match err {
        ChartError::InvalidDatum { index, label, .. } => {
            assert_eq!(index, 2);
            assert_eq!(label, "washers");
        }
        other => panic!("unexpected error: {other}"),
    }

    let data = BarDatum::from_decimal_rows(vec![("bolts", Decimal::new(12, 0))]).expect("rows");
    assert_eq!(data, vec![BarDatum::new("bolts", 12)]);
}

#[test]
fn top_by_quantity_ranks_descending_and_keeps_ties_stable() {
    let rows = vec![
        BarDatum::new("a", 3),
        BarDatum::new("b", 30),
        BarDatum::new("c", 12),
        BarDatum::new("d", 30),
        BarDatum::new("e", 1),
    ];
    let top = top_by_quantity(rows, 3);
    let labels: Vec<_> = top.iter().map(|datum| datum.label.as_str()).collect();
    assert_eq!(labels, vec!["b", "d", "c"]);
}
