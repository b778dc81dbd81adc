mod frame;
mod null_renderer;
mod primitives;

pub use frame::{CanvasLayerKind, LayerPrimitives, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, LineStrokeStyle, RectPrimitive, TextHAlign, TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any drawing surface.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from chart state, animation and hover logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
