use proptest::prelude::*;
use stock_chart::animation::{AnimationClock, EasingAnimator, TOTAL_FRAMES};
use stock_chart::core::{BarDatum, ChartDataModel};

proptest! {
    #[test]
    fn heights_are_bounded_and_monotonic_over_frames(
        quantities in proptest::collection::vec(0u64..100_000, 1..24)
    ) {
        let data: Vec<_> = quantities
            .iter()
            .map(|quantity| BarDatum::new("item", *quantity))
            .collect();
        let mut geometry = ChartDataModel::default().load(&data).expect("load");

        let mut previous: Vec<f64> = vec![0.0; quantities.len()];
        for frame in 0..=TOTAL_FRAMES {
            EasingAnimator::tick(AnimationClock::at_frame(frame), &mut geometry);
            for (bar, last) in geometry.bars().iter().zip(previous.iter_mut()) {
                prop_assert!(bar.current_height() >= 0.0);
                prop_assert!(bar.current_height() <= bar.target_height());
                prop_assert!(bar.current_height() >= *last);
                *last = bar.current_height();
            }
        }
        prop_assert!(geometry.is_at_target());
    }
}
