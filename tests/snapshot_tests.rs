use stock_chart::animation::ManualTickTimer;
use stock_chart::api::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartTheme};
use stock_chart::core::{BarDatum, PlotPoint, Viewport};
use stock_chart::interaction::TooltipState;
use stock_chart::render::NullRenderer;
use stock_chart::{ChartError, ChartView, ChartViewConfig};

fn animated_view() -> ChartView<NullRenderer, ManualTickTimer> {
    let config = ChartViewConfig::new(Viewport::new(800, 600)).with_theme(ChartTheme::Dark);
    let mut view = ChartView::new(NullRenderer::default(), ManualTickTimer::default(), config)
        .expect("view init");
    view.load_dataset(&[BarDatum::new("bolts", 8), BarDatum::new("nuts", 32)])
        .expect("load");
    for _ in 0..40 {
        view.on_tick().expect("tick");
    }
    view
}

#[test]
fn snapshot_captures_animation_and_tooltip_state() {
    let mut view = animated_view();
    let (x, y) = view
        .plot_transform()
        .expect("transform")
        .to_pixel(PlotPoint::new(1.0, 1.0))
        .expect("to pixel");
    view.on_pointer_move(x, y).expect("hover");

    let snapshot = view.snapshot();
    assert_eq!(snapshot.theme, ChartTheme::Dark);
    assert_eq!(snapshot.clock.elapsed_frames(), 40);
    assert!(snapshot.animating);
    assert_eq!(snapshot.bars.len(), 2);
    assert_eq!(
        snapshot.tooltip,
        TooltipState::Visible {
            bar_index: 1,
            quantity: 32
        }
    );
    let axis = snapshot.axis.expect("axis bounds");
    assert!((axis.upper - 36.8).abs() <= 1e-9);
    let keys: Vec<_> = snapshot.metadata.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["title", "y_axis_label"]);
}

#[test]
fn snapshot_contract_v1_round_trips() {
    let snapshot = animated_view().snapshot();
    let json = snapshot.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));

    let parsed = ChartSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, snapshot);

    let bare = serde_json::to_string(&snapshot).expect("serialize bare");
    let parsed_bare = ChartSnapshot::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(parsed_bare, snapshot);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let snapshot = animated_view().snapshot();
    let payload = serde_json::json!({
        "schema_version": CHART_SNAPSHOT_JSON_SCHEMA_V1 + 1,
        "snapshot": snapshot,
    });
    let err = ChartSnapshot::from_json_compat_str(&payload.to_string())
        .expect_err("future schema must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn empty_chart_snapshot_has_no_axis() {
    let config = ChartViewConfig::new(Viewport::new(800, 600));
    let mut view = ChartView::new(NullRenderer::default(), ManualTickTimer::default(), config)
        .expect("view init");
    view.load_dataset(&[]).expect("empty load");

    let snapshot = view.snapshot();
    assert!(snapshot.axis.is_none());
    assert!(snapshot.bars.is_empty());
    assert!(!snapshot.animating);
}
