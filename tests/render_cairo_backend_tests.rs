#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use stock_chart::animation::{ManualTickTimer, TickControl};
use stock_chart::core::{BarDatum, Viewport};
use stock_chart::render::{CairoContextRenderer, CairoRenderer, NullRenderer};
use stock_chart::{ChartError, ChartView, ChartViewConfig};

fn dataset() -> Vec<BarDatum> {
    vec![
        BarDatum::new("A", 5),
        BarDatum::new("B", 15),
        BarDatum::new("C", 25),
    ]
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_paints_finished_chart() {
    let renderer = CairoRenderer::new(800, 600).expect("renderer");
    let config = ChartViewConfig::new(Viewport::new(800, 600));
    let mut view =
        ChartView::new(renderer, ManualTickTimer::default(), config).expect("view init");
    view.load_dataset(&dataset()).expect("load");
    while view.on_tick().expect("tick") == TickControl::Continue {}

    let stats = view.renderer().last_stats();
    // Background plus one rect per bar.
    assert_eq!(stats.rects_drawn, 4);
    assert!(stats.lines_drawn >= 3);
    assert!(stats.texts_drawn >= 5);

    let mut png = Vec::new();
    view.into_renderer().write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn cairo_renderer_paints_headless_frame_on_external_context() {
    let config = ChartViewConfig::new(Viewport::new(400, 300));
    let mut view = ChartView::new(NullRenderer::default(), ManualTickTimer::default(), config)
        .expect("view init");
    view.load_dataset(&[]).expect("empty load");
    let frame = view
        .into_renderer()
        .last_frame
        .expect("placeholder frame");

    let surface = ImageSurface::create(Format::ARgb32, 400, 300).expect("surface");
    let context = Context::new(&surface).expect("context");
    let mut painter = CairoRenderer::new(400, 300).expect("painter");
    painter
        .render_on_cairo_context(&context, &frame)
        .expect("render on context");

    let stats = painter.last_stats();
    assert_eq!(stats.rects_drawn, 1);
    assert_eq!(stats.lines_drawn, 0);
    assert_eq!(stats.texts_drawn, 1);
}
