use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};

/// Paint layers, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Grid,
    Series,
    Axis,
    Tooltip,
}

impl CanvasLayerKind {
    pub const CANONICAL_ORDER: [Self; 4] = [Self::Grid, Self::Series, Self::Axis, Self::Tooltip];
}

/// Primitives of one layer; painted rects first, then lines, then texts.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn new(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            rects: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty() && self.lines.is_empty() && self.texts.is_empty()
    }
}

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: CanvasLayerKind::CANONICAL_ORDER
                .into_iter()
                .map(LayerPrimitives::new)
                .collect(),
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> &mut LayerPrimitives {
        let position = match self.layers.iter().position(|layer| layer.kind == kind) {
            Some(position) => position,
            None => {
                self.layers.push(LayerPrimitives::new(kind));
                self.layers.len() - 1
            }
        };
        &mut self.layers[position]
    }

    pub fn push_rect(&mut self, kind: CanvasLayerKind, rect: RectPrimitive) {
        self.layer_mut(kind).rects.push(rect);
    }

    pub fn push_line(&mut self, kind: CanvasLayerKind, line: LinePrimitive) {
        self.layer_mut(kind).lines.push(line);
    }

    pub fn push_text(&mut self, kind: CanvasLayerKind, text: TextPrimitive) {
        self.layer_mut(kind).texts.push(text);
    }

    #[must_use]
    pub fn with_rect(mut self, kind: CanvasLayerKind, rect: RectPrimitive) -> Self {
        self.push_rect(kind, rect);
        self
    }

    #[must_use]
    pub fn with_line(mut self, kind: CanvasLayerKind, line: LinePrimitive) -> Self {
        self.push_line(kind, line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, kind: CanvasLayerKind, text: TextPrimitive) -> Self {
        self.push_text(kind, text);
        self
    }

    #[must_use]
    pub fn rect_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.rects.len()).sum()
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.lines.len()).sum()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.texts.len()).sum()
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.layers.iter().flat_map(|layer| layer.texts.iter())
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for layer in &self.layers {
            for rect in &layer.rects {
                rect.validate()?;
            }
            for line in &layer.lines {
                line.validate()?;
            }
            for text in &layer.texts {
                text.validate()?;
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }
}
