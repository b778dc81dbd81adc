use tracing::{debug, trace, warn};

use crate::animation::{AnimationClock, EasingAnimator, TickControl, TickTimer};
use crate::core::{BarDatum, ChartDataModel, ChartGeometry, PlotArea, PlotTransform};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HitTester, TooltipController, TooltipState, TooltipView};
use crate::render::Renderer;

use super::{ChartStyle, ChartTheme, ChartViewConfig};

/// Result of replacing the chart dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Bars were loaded at zero height and the growth animation is scheduled.
    Animating { bar_count: usize },
    /// The dataset was empty; the "no data" placeholder is shown instead.
    Placeholder,
}

pub(super) enum ChartContent {
    Empty,
    Bars {
        geometry: ChartGeometry,
        transform: PlotTransform,
    },
}

/// Animated stock-level bar chart.
///
/// `ChartView` is the single owner and mutator of geometry and animation
/// clock. Hosts feed it three kinds of events: `load_dataset`, timer ticks
/// (`on_tick`) and pointer moves (`on_pointer_move`/`on_pointer_leave`).
pub struct ChartView<R: Renderer, T: TickTimer> {
    pub(super) renderer: R,
    timer: T,
    pub(super) config: ChartViewConfig,
    data_model: ChartDataModel,
    pub(super) plot_area: PlotArea,
    pub(super) style: ChartStyle,
    pub(super) content: ChartContent,
    pub(super) clock: AnimationClock,
    pub(super) tooltip: TooltipController,
    animating: bool,
}

impl<R: Renderer, T: TickTimer> ChartView<R, T> {
    pub fn new(renderer: R, timer: T, config: ChartViewConfig) -> ChartResult<Self> {
        config.validate()?;
        let data_model = config.data_model()?;
        let plot_area = config.plot_area()?;
        let style = ChartStyle::for_theme(config.theme);

        Ok(Self {
            renderer,
            timer,
            config,
            data_model,
            plot_area,
            style,
            content: ChartContent::Empty,
            clock: AnimationClock::new(),
            tooltip: TooltipController::default(),
            animating: false,
        })
    }

    /// Replaces the dataset and restarts the growth animation from zero.
    ///
    /// Any in-flight animation schedule is cancelled first. An empty dataset
    /// renders the placeholder and returns `LoadOutcome::Placeholder`; data the
    /// model rejects leaves the chart untouched.
    ///
    /// If the timer refuses the new schedule, the new bars are drawn at their
    /// target heights and the timer error is returned.
    pub fn load_dataset(&mut self, data: &[BarDatum]) -> ChartResult<LoadOutcome> {
        let loaded = match self.data_model.load(data) {
            Ok(geometry) => {
                let axis = geometry.axis();
                let transform = PlotTransform::new(
                    self.plot_area,
                    geometry.x_domain(),
                    (axis.lower, axis.upper),
                )?;
                Some((geometry, transform))
            }
            Err(ChartError::EmptyDataset) => None,
            Err(err) => {
                warn!(error = %err, "rejected chart dataset");
                return Err(err);
            }
        };

        self.cancel_animation();
        self.clock.reset();
        self.tooltip.hide();

        let Some((geometry, transform)) = loaded else {
            debug!("empty dataset, rendering placeholder");
            self.content = ChartContent::Empty;
            self.redraw()?;
            return Ok(LoadOutcome::Placeholder);
        };

        let bar_count = geometry.len();
        self.content = ChartContent::Bars {
            geometry,
            transform,
        };
        if let Err(err) = self.timer.start(self.config.tick_interval()) {
            warn!(error = %err, "animation schedule unavailable, drawing final frame");
            self.settle_at_target();
            self.redraw()?;
            return Err(err);
        }
        self.animating = true;
        debug!(
            bar_count,
            interval_ms = self.config.tick_interval_ms,
            "started bar growth animation"
        );
        self.redraw()?;
        Ok(LoadOutcome::Animating { bar_count })
    }

    /// Advances the animation by one frame and redraws.
    ///
    /// Returns `TickControl::Break` on the final frame (the schedule is
    /// cancelled at that point) and for ticks arriving after the animation
    /// ended or was superseded.
    pub fn on_tick(&mut self) -> ChartResult<TickControl> {
        if !self.animating {
            trace!("ignoring tick without active animation");
            return Ok(TickControl::Break);
        }
        let ChartContent::Bars { geometry, .. } = &mut self.content else {
            self.cancel_animation();
            return Ok(TickControl::Break);
        };

        self.clock.advance();
        EasingAnimator::tick(self.clock, geometry);

        let control = if self.clock.is_complete() {
            debug!(
                elapsed_frames = self.clock.elapsed_frames(),
                "bar growth animation complete"
            );
            self.cancel_animation();
            TickControl::Break
        } else {
            TickControl::Continue
        };

        self.redraw()?;
        Ok(control)
    }

    /// Hit-tests a pointer position given in surface pixels.
    ///
    /// Redraws only when the tooltip state changes; returns whether it did.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> ChartResult<bool> {
        let changed = match &self.content {
            ChartContent::Bars {
                geometry,
                transform,
            } => {
                let hit = transform
                    .to_plot(x, y)
                    .and_then(|point| HitTester::locate(point, geometry));
                self.tooltip.update(hit, geometry)
            }
            ChartContent::Empty => self.tooltip.hide(),
        };

        if changed {
            self.redraw()?;
        }
        Ok(changed)
    }

    /// Pointer left the drawing surface; hides the tooltip if shown.
    pub fn on_pointer_leave(&mut self) -> ChartResult<bool> {
        let changed = self.tooltip.hide();
        if changed {
            self.redraw()?;
        }
        Ok(changed)
    }

    /// Switches the palette and redraws with it.
    pub fn set_theme(&mut self, theme: ChartTheme) -> ChartResult<()> {
        let style = ChartStyle::for_theme(theme);
        style.validate()?;
        self.config.theme = theme;
        self.style = style;
        self.redraw()
    }

    /// Redraws the current state, e.g. after the host surface was exposed.
    pub fn render(&mut self) -> ChartResult<()> {
        self.redraw()
    }

    #[must_use]
    pub fn config(&self) -> &ChartViewConfig {
        &self.config
    }

    #[must_use]
    pub fn style(&self) -> ChartStyle {
        self.style
    }

    #[must_use]
    pub fn geometry(&self) -> Option<&ChartGeometry> {
        match &self.content {
            ChartContent::Bars { geometry, .. } => Some(geometry),
            ChartContent::Empty => None,
        }
    }

    #[must_use]
    pub fn plot_transform(&self) -> Option<PlotTransform> {
        match &self.content {
            ChartContent::Bars { transform, .. } => Some(*transform),
            ChartContent::Empty => None,
        }
    }

    #[must_use]
    pub fn clock(&self) -> AnimationClock {
        self.clock
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    #[must_use]
    pub fn tooltip_state(&self) -> TooltipState {
        self.tooltip.state()
    }

    #[must_use]
    pub fn tooltip_view(&self) -> Option<TooltipView> {
        self.geometry()
            .and_then(|geometry| self.tooltip.view(geometry))
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn timer(&self) -> &T {
        &self.timer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn cancel_animation(&mut self) {
        if self.animating || self.timer.is_active() {
            trace!(
                elapsed_frames = self.clock.elapsed_frames(),
                "cancelling animation schedule"
            );
        }
        self.timer.cancel();
        self.animating = false;
    }

    /// Jumps straight to the final frame without scheduling ticks.
    fn settle_at_target(&mut self) {
        self.clock = AnimationClock::at_frame(self.clock.total_frames());
        if let ChartContent::Bars { geometry, .. } = &mut self.content {
            EasingAnimator::tick(self.clock, geometry);
        }
        self.animating = false;
    }

    fn redraw(&mut self) -> ChartResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render(&frame)
    }
}
