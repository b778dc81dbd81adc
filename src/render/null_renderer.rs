use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer used by tests and embedding without a drawing surface.
///
/// It validates every frame, counts draw passes and keeps the last frame so
/// callers can inspect what would have been painted.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_rect_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_rect_count = frame.rect_count();
        self.last_line_count = frame.line_count();
        self.last_text_count = frame.text_count();
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
