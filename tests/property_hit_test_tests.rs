use proptest::prelude::*;
use stock_chart::animation::{AnimationClock, EasingAnimator};
use stock_chart::core::{BarDatum, ChartDataModel, PlotPoint};
use stock_chart::interaction::HitTester;

proptest! {
    #[test]
    fn located_bar_always_contains_pointer(
        quantities in proptest::collection::vec(0u64..500, 1..16),
        frame in 0u32..=100,
        x in -1.0f64..17.0,
        y in -5.0f64..600.0,
    ) {
        let data: Vec<_> = quantities
            .iter()
            .map(|quantity| BarDatum::new("sku", *quantity))
            .collect();
        let mut geometry = ChartDataModel::default().load(&data).expect("load");
        EasingAnimator::tick(AnimationClock::at_frame(frame), &mut geometry);

        let pointer = PlotPoint::new(x, y);
        match HitTester::locate(pointer, &geometry) {
            Some(index) => {
                let bar = geometry.bar(index).expect("hit index in range");
                prop_assert!(HitTester::contains(bar, pointer));
                prop_assert!(geometry.bars()[..index]
                    .iter()
                    .all(|earlier| !HitTester::contains(earlier, pointer)));
            }
            None => {
                prop_assert!(geometry.bars().iter().all(|bar| !HitTester::contains(bar, pointer)));
            }
        }
    }
}
