use crate::animation::TickTimer;
use crate::core::axis_ticks::{
    AXIS_QUANTITY_MAX_TICKS, AXIS_QUANTITY_MIN_TICKS, AXIS_QUANTITY_TARGET_SPACING_PX,
};
use crate::core::{ChartGeometry, PlotTransform, axis_tick_target_count, quantity_axis_ticks};
use crate::error::ChartResult;
use crate::interaction::TooltipView;
use crate::render::{
    CanvasLayerKind, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

use super::ChartView;
use super::chart_view::ChartContent;

pub const PLACEHOLDER_TEXT: &str = "No data to display";

const TICK_LABEL_GAP_PX: f64 = 6.0;
const CATEGORY_LABEL_GAP_PX: f64 = 6.0;
const TOOLTIP_OFFSET_PX: f64 = 20.0;
const TOOLTIP_PADDING_PX: f64 = 5.0;
const TOOLTIP_CORNER_RADIUS_PX: f64 = 4.0;

/// Deterministic, backend-independent text width estimate.
pub(super) fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' | ':' => 0.34,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}

impl<R: Renderer, T: TickTimer> ChartView<R, T> {
    pub(super) fn build_frame(&self) -> ChartResult<RenderFrame> {
        let viewport = self.config.viewport;
        let mut frame = RenderFrame::new(viewport);
        frame.push_rect(
            CanvasLayerKind::Grid,
            RectPrimitive::new(
                0.0,
                0.0,
                f64::from(viewport.width),
                f64::from(viewport.height),
                self.style.background,
            ),
        );

        match &self.content {
            ChartContent::Empty => {
                let font_size = self.style.axis_title_font_size_px;
                frame.push_text(
                    CanvasLayerKind::Axis,
                    TextPrimitive::new(
                        PLACEHOLDER_TEXT,
                        f64::from(viewport.width) * 0.5,
                        (f64::from(viewport.height) - font_size) * 0.5,
                        font_size,
                        self.style.label_color,
                        TextHAlign::Center,
                    ),
                );
            }
            ChartContent::Bars {
                geometry,
                transform,
            } => {
                self.push_axes(&mut frame, geometry, *transform)?;
                self.push_bars(&mut frame, geometry, *transform)?;
                if let Some(view) = self.tooltip.view(geometry) {
                    self.push_tooltip(&mut frame, &view, *transform)?;
                }
            }
        }

        Ok(frame)
    }

    fn push_axes(
        &self,
        frame: &mut RenderFrame,
        geometry: &ChartGeometry,
        transform: PlotTransform,
    ) -> ChartResult<()> {
        let style = self.style;
        let area = transform.area();

        if !self.config.title.is_empty() {
            frame.push_text(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    self.config.title.clone(),
                    area.left + area.width * 0.5,
                    8.0,
                    style.title_font_size_px,
                    style.title_color,
                    TextHAlign::Center,
                )
                .bold(),
            );
        }
        if !self.config.y_axis_label.is_empty() {
            frame.push_text(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    self.config.y_axis_label.clone(),
                    8.0,
                    (area.top - style.axis_title_font_size_px - 6.0).max(0.0),
                    style.axis_title_font_size_px,
                    style.label_color,
                    TextHAlign::Left,
                ),
            );
        }

        let target_count = axis_tick_target_count(
            area.height,
            AXIS_QUANTITY_TARGET_SPACING_PX,
            AXIS_QUANTITY_MIN_TICKS,
            AXIS_QUANTITY_MAX_TICKS,
        );
        for value in quantity_axis_ticks(geometry.axis().upper, target_count)? {
            let y = transform.y_to_pixel(value)?;
            if value > 0.0 {
                frame.push_line(
                    CanvasLayerKind::Grid,
                    LinePrimitive::new(area.left, y, area.right(), y, 1.0, style.grid_line_color)
                        .with_stroke_style(LineStrokeStyle::Dashed),
                );
            }
            frame.push_text(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    format!("{value:.0}"),
                    area.left - TICK_LABEL_GAP_PX,
                    y - style.tick_font_size_px * 0.5,
                    style.tick_font_size_px,
                    style.label_color,
                    TextHAlign::Right,
                ),
            );
        }

        // Left and bottom spines only.
        frame.push_line(
            CanvasLayerKind::Axis,
            LinePrimitive::new(
                area.left,
                area.top,
                area.left,
                area.bottom(),
                1.0,
                style.axis_line_color,
            ),
        );
        frame.push_line(
            CanvasLayerKind::Axis,
            LinePrimitive::new(
                area.left,
                area.bottom(),
                area.right(),
                area.bottom(),
                1.0,
                style.axis_line_color,
            ),
        );

        for bar in geometry.bars() {
            if bar.label().is_empty() {
                continue;
            }
            frame.push_text(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    bar.label(),
                    transform.x_to_pixel(bar.x_center())?,
                    area.bottom() + CATEGORY_LABEL_GAP_PX,
                    style.tick_font_size_px,
                    style.label_color,
                    TextHAlign::Center,
                ),
            );
        }
        Ok(())
    }

    fn push_bars(
        &self,
        frame: &mut RenderFrame,
        geometry: &ChartGeometry,
        transform: PlotTransform,
    ) -> ChartResult<()> {
        let baseline_y = transform.y_to_pixel(0.0)?;
        for bar in geometry.bars() {
            let height_px = transform.height_to_pixels(bar.current_height());
            frame.push_rect(
                CanvasLayerKind::Series,
                RectPrimitive::new(
                    transform.x_to_pixel(bar.x_left())?,
                    baseline_y - height_px,
                    transform.width_to_pixels(bar.width()),
                    height_px,
                    self.style.bar_fill(bar.color_class()),
                ),
            );
        }
        Ok(())
    }

    fn push_tooltip(
        &self,
        frame: &mut RenderFrame,
        view: &TooltipView,
        transform: PlotTransform,
    ) -> ChartResult<()> {
        let style = self.style;
        let viewport = self.config.viewport;
        let (anchor_x, anchor_y) = transform.to_pixel(view.anchor)?;

        let font_size = style.tooltip_font_size_px;
        let box_width = estimate_label_text_width_px(&view.text, font_size) + TOOLTIP_PADDING_PX * 2.0;
        let box_height = font_size + TOOLTIP_PADDING_PX * 2.0;
        let box_left = (anchor_x - TOOLTIP_OFFSET_PX)
            .min(f64::from(viewport.width) - box_width)
            .max(0.0);
        let box_top = (anchor_y - TOOLTIP_OFFSET_PX - box_height)
            .min(f64::from(viewport.height) - box_height)
            .max(0.0);

        frame.push_line(
            CanvasLayerKind::Tooltip,
            LinePrimitive::new(
                box_left + box_width * 0.5,
                box_top + box_height,
                anchor_x,
                anchor_y,
                1.0,
                style.tooltip_border,
            ),
        );
        frame.push_rect(
            CanvasLayerKind::Tooltip,
            RectPrimitive::new(box_left, box_top, box_width, box_height, style.tooltip_fill)
                .with_border(1.0, style.tooltip_border)
                .with_corner_radius(TOOLTIP_CORNER_RADIUS_PX),
        );
        frame.push_text(
            CanvasLayerKind::Tooltip,
            TextPrimitive::new(
                view.text.clone(),
                box_left + TOOLTIP_PADDING_PX,
                box_top + TOOLTIP_PADDING_PX,
                font_size,
                style.tooltip_text_color,
                TextHAlign::Left,
            ),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::estimate_label_text_width_px;

    #[test]
    fn width_estimate_never_drops_below_font_size() {
        assert_eq!(estimate_label_text_width_px("", 10.0), 10.0);
        assert!(estimate_label_text_width_px("Qty: 125", 10.0) > 40.0);
    }
}
