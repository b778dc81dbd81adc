//! GTK4 embedding: a `DrawingArea` painted through Cairo, a `glib` timeout
//! as the animation timer and a motion controller as the pointer source.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use gtk4 as gtk;
use gtk::glib;
use gtk::prelude::*;
use tracing::warn;

use crate::animation::{TickControl, TickTimer};
use crate::api::{ChartTheme, ChartView, ChartViewConfig, LoadOutcome};
use crate::core::BarDatum;
use crate::error::{ChartError, ChartResult};
use crate::render::{CairoContextRenderer, CairoRenderer, RenderFrame, Renderer};

type TickCallback = Box<dyn FnMut() -> TickControl>;

/// Recurring timer backed by `glib::timeout_add_local`.
///
/// Cancelling from inside the firing callback only detaches the source; the
/// callback then returns `Break` so glib removes it exactly once.
pub struct GlibTickTimer {
    source: Rc<RefCell<Option<glib::SourceId>>>,
    firing: Rc<Cell<bool>>,
    callback: Rc<RefCell<Option<TickCallback>>>,
}

impl GlibTickTimer {
    fn new() -> Self {
        Self {
            source: Rc::new(RefCell::new(None)),
            firing: Rc::new(Cell::new(false)),
            callback: Rc::new(RefCell::new(None)),
        }
    }

    fn callback_slot(&self) -> Rc<RefCell<Option<TickCallback>>> {
        Rc::clone(&self.callback)
    }
}

impl TickTimer for GlibTickTimer {
    fn start(&mut self, interval: Duration) -> ChartResult<()> {
        if self.source.borrow().is_some() {
            return Err(ChartError::InvalidData(
                "tick schedule is already active".to_owned(),
            ));
        }

        let source = Rc::clone(&self.source);
        let firing = Rc::clone(&self.firing);
        let callback = Rc::clone(&self.callback);
        let id = glib::timeout_add_local(interval, move || {
            firing.set(true);
            let control = match callback.borrow_mut().as_mut() {
                Some(tick) => tick(),
                None => TickControl::Break,
            };
            firing.set(false);

            let detached = source.borrow().is_none();
            if detached || control == TickControl::Break {
                source.borrow_mut().take();
                glib::ControlFlow::Break
            } else {
                glib::ControlFlow::Continue
            }
        });
        *self.source.borrow_mut() = Some(id);
        Ok(())
    }

    fn cancel(&mut self) {
        let Some(id) = self.source.borrow_mut().take() else {
            return;
        };
        if !self.firing.get() {
            id.remove();
        }
    }

    fn is_active(&self) -> bool {
        self.source.borrow().is_some()
    }
}

/// Renderer that hands frames to the drawing area and queues a repaint.
pub struct DrawingAreaRenderer {
    area: gtk::DrawingArea,
    latest_frame: Rc<RefCell<Option<RenderFrame>>>,
}

impl Renderer for DrawingAreaRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        *self.latest_frame.borrow_mut() = Some(frame.clone());
        self.area.queue_draw();
        Ok(())
    }
}

type GtkChartView = ChartView<DrawingAreaRenderer, GlibTickTimer>;

/// Stock-level chart widget for GTK4 applications.
pub struct GtkStockChart {
    area: gtk::DrawingArea,
    view: Rc<RefCell<GtkChartView>>,
}

impl GtkStockChart {
    pub fn new(config: ChartViewConfig) -> ChartResult<Self> {
        let width = i32::try_from(config.viewport.width)
            .map_err(|_| ChartError::InvalidConfig("viewport width too large".to_owned()))?;
        let height = i32::try_from(config.viewport.height)
            .map_err(|_| ChartError::InvalidConfig("viewport height too large".to_owned()))?;

        let area = gtk::DrawingArea::new();
        area.set_content_width(width);
        area.set_content_height(height);

        let latest_frame = Rc::new(RefCell::new(None));
        let renderer = DrawingAreaRenderer {
            area: area.clone(),
            latest_frame: Rc::clone(&latest_frame),
        };
        let timer = GlibTickTimer::new();
        let callback_slot = timer.callback_slot();
        let view = Rc::new(RefCell::new(ChartView::new(renderer, timer, config)?));

        let weak_view = Rc::downgrade(&view);
        let tick: TickCallback = Box::new(move || {
            let Some(view) = weak_view.upgrade() else {
                return TickControl::Break;
            };
            let Ok(mut view) = view.try_borrow_mut() else {
                return TickControl::Continue;
            };
            match view.on_tick() {
                Ok(control) => control,
                Err(err) => {
                    warn!(error = %err, "chart tick failed");
                    TickControl::Continue
                }
            }
        });
        *callback_slot.borrow_mut() = Some(tick);

        let painter = RefCell::new(CairoRenderer::new(width, height)?);
        area.set_draw_func(move |_area, context, _width, _height| {
            let frame = latest_frame.borrow();
            let Some(frame) = frame.as_ref() else {
                return;
            };
            if let Err(err) = painter.borrow_mut().render_on_cairo_context(context, frame) {
                warn!(error = %err, "chart paint failed");
            }
        });

        let motion = gtk::EventControllerMotion::new();
        {
            let view = Rc::clone(&view);
            motion.connect_motion(move |_controller, x, y| {
                if let Ok(mut view) = view.try_borrow_mut() {
                    if let Err(err) = view.on_pointer_move(x, y) {
                        warn!(error = %err, "chart pointer move failed");
                    }
                }
            });
        }
        {
            let view = Rc::clone(&view);
            motion.connect_leave(move |_controller| {
                if let Ok(mut view) = view.try_borrow_mut() {
                    if let Err(err) = view.on_pointer_leave() {
                        warn!(error = %err, "chart pointer leave failed");
                    }
                }
            });
        }
        area.add_controller(motion);

        Ok(Self { area, view })
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    /// Replaces the chart data and restarts the growth animation.
    pub fn load_dataset(&self, data: &[BarDatum]) -> ChartResult<LoadOutcome> {
        self.view.borrow_mut().load_dataset(data)
    }

    pub fn set_theme(&self, theme: ChartTheme) -> ChartResult<()> {
        self.view.borrow_mut().set_theme(theme)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Weak;

    use super::*;

    const INTERVAL: Duration = Duration::from_millis(1);
    const MAX_ITERATIONS: usize = 10_000;

    /// Dispatches default-context sources until `done` holds.
    fn pump_until(done: impl Fn() -> bool) {
        let context = glib::MainContext::default();
        for _ in 0..MAX_ITERATIONS {
            if done() {
                return;
            }
            context.iteration(true);
        }
        panic!("main context never reached the expected state");
    }

    /// Gives a removed source several chances to misfire.
    fn drain_pending() {
        let context = glib::MainContext::default();
        for _ in 0..5 {
            std::thread::sleep(INTERVAL * 3);
            while context.iteration(false) {}
        }
    }

    fn install(timer: &GlibTickTimer, tick: impl FnMut() -> TickControl + 'static) {
        let tick: TickCallback = Box::new(tick);
        *timer.callback_slot().borrow_mut() = Some(tick);
    }

    fn cancel_on_third_tick(
        timer: Weak<RefCell<GlibTickTimer>>,
        fired: Rc<Cell<u32>>,
        control_after_cancel: TickControl,
    ) -> impl FnMut() -> TickControl {
        move || {
            fired.set(fired.get() + 1);
            if fired.get() < 3 {
                return TickControl::Continue;
            }
            if let Some(timer) = timer.upgrade() {
                timer.borrow_mut().cancel();
            }
            control_after_cancel
        }
    }

    // One test owns the default main context for the whole sequence.
    #[test]
    fn glib_timer_schedule_lifecycle() {
        let context = glib::MainContext::default();
        let _owner = context.acquire().expect("default main context");

        // Cancel from inside the firing callback, which then returns Break:
        // the source must be removed exactly once.
        let timer = Rc::new(RefCell::new(GlibTickTimer::new()));
        let fired = Rc::new(Cell::new(0));
        install(
            &timer.borrow(),
            cancel_on_third_tick(Rc::downgrade(&timer), Rc::clone(&fired), TickControl::Break),
        );
        timer.borrow_mut().start(INTERVAL).expect("start");
        assert!(timer.borrow().is_active());
        assert!(timer.borrow_mut().start(INTERVAL).is_err());

        pump_until(|| fired.get() == 3);
        assert!(!timer.borrow().is_active());
        drain_pending();
        assert_eq!(fired.get(), 3);

        // Cancelled inside the callback but the callback still says Continue:
        // the detached source stops anyway.
        fired.set(0);
        install(
            &timer.borrow(),
            cancel_on_third_tick(
                Rc::downgrade(&timer),
                Rc::clone(&fired),
                TickControl::Continue,
            ),
        );
        timer.borrow_mut().start(INTERVAL).expect("restart");
        pump_until(|| fired.get() == 3);
        assert!(!timer.borrow().is_active());
        drain_pending();
        assert_eq!(fired.get(), 3);

        // Cancel from outside between ticks removes the source directly.
        let ticks = Rc::new(Cell::new(0_u32));
        {
            let ticks = Rc::clone(&ticks);
            install(&timer.borrow(), move || {
                ticks.set(ticks.get() + 1);
                TickControl::Continue
            });
        }
        timer.borrow_mut().start(INTERVAL).expect("third start");
        pump_until(|| ticks.get() >= 2);
        timer.borrow_mut().cancel();
        assert!(!timer.borrow().is_active());
        let stopped_at = ticks.get();
        drain_pending();
        assert_eq!(ticks.get(), stopped_at);

        // Cancelling an idle timer is a no-op.
        timer.borrow_mut().cancel();
        assert!(!timer.borrow().is_active());
    }
}
