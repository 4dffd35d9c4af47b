use holograph::api::{GraphConfig, LineGraph, LineGraphModel};
use holograph::core::pie_geometry::sweep_angles;
use holograph::core::stacked_geometry::build_stacked_layers;
use holograph::core::{
    AxisRange, CoordinateMapper, Line, LinePoint, Padding, StackedLine, StackedLinePoint, Viewport,
};
use holograph::render::NullRenderer;
use proptest::prelude::*;

proptest! {
    #[test]
    fn in_range_values_map_inside_padding(
        min in -1_000.0f64..1_000.0,
        span in 0.001f64..1_000.0,
        factor in 0.0f64..=1.0,
        left in 0.0f64..40.0,
        right in 0.0f64..40.0,
        top in 0.0f64..40.0,
        bottom in 0.0f64..40.0,
    ) {
        let range = AxisRange::new(min, min + span).expect("valid range");
        let mapper = CoordinateMapper::new(
            Viewport::new(200, 160),
            Padding::new(left, top, right, bottom),
            range,
            range,
        );
        let value = (min + factor * span).min(range.max());

        let x = mapper.x(value);
        let y = mapper.y(value);
        prop_assert!(x >= left - 1e-9 && x <= 200.0 - right + 1e-9);
        prop_assert!(y >= top - 1e-9 && y <= 160.0 - bottom + 1e-9);
    }

    #[test]
    fn mapping_is_monotonic_with_y_flip(
        min in -1_000.0f64..1_000.0,
        span in 0.001f64..1_000.0,
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
    ) {
        let range = AxisRange::new(min, min + span).expect("valid range");
        let mapper = CoordinateMapper::new(Viewport::new(300, 300), Padding::ZERO, range, range);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low = min + low * span;
        let high = min + high * span;

        prop_assert!(mapper.x(low) <= mapper.x(high));
        prop_assert!(mapper.y(low) >= mapper.y(high));
    }

    #[test]
    fn pie_sweeps_sum_to_full_turn(values in prop::collection::vec(0.001f64..1_000.0, 1..24)) {
        let total: f64 = sweep_angles(&values).iter().sum();
        prop_assert!((total - 360.0).abs() <= 1e-6);
    }

    #[test]
    fn stacked_boundaries_never_cross(
        columns in prop::collection::vec(prop::collection::vec(0.0f64..100.0, 1..5), 1..12),
    ) {
        let line = StackedLine::new().with_points(
            columns
                .iter()
                .map(|values| StackedLinePoint::new(values.iter().copied()).expect("finite")),
        );
        let cumulative = line.cumulative_layers();
        let max_total = line.totals().into_iter().fold(0.0, f64::max).max(1.0);
        let mapper = CoordinateMapper::new(
            Viewport::new(400, 300),
            Padding::ZERO,
            AxisRange::new(0.0, columns.len() as f64).expect("valid range"),
            AxisRange::new(0.0, max_total).expect("valid range"),
        );

        let layers = build_stacked_layers(&cumulative, &mapper);
        for pair in layers.windows(2) {
            for (lower, upper) in pair[0].boundary.iter().zip(&pair[1].boundary) {
                // Pixel y grows downward, so the outer layer sits at or above.
                prop_assert!(upper.y <= lower.y + 1e-9);
            }
        }
    }

    #[test]
    fn any_negative_layer_value_is_rejected(
        mut values in prop::collection::vec(0.0f64..100.0, 1..5),
        slot in 0usize..5,
        negative in -1_000.0f64..-1e-9,
    ) {
        let slot = slot % values.len();
        values[slot] = negative;
        prop_assert!(StackedLinePoint::new(values).is_err());
    }

    #[test]
    fn rebuilding_line_scene_is_deterministic(
        ys in prop::collection::vec(-500.0f64..500.0, 0..32),
    ) {
        let config = GraphConfig::new(Viewport::new(320, 200)).with_axis_values(true);
        let mut graph = LineGraph::new(NullRenderer::default(), config, LineGraphModel::new())
            .expect("graph init");
        let points = ys
            .iter()
            .enumerate()
            .map(|(i, y)| LinePoint::new(i as f64, *y).expect("finite"));
        graph.add_line(Line::new().with_points(points)).expect("add line");

        let first = graph.build_scene().expect("scene");
        let second = graph.build_scene().expect("scene");
        prop_assert_eq!(first.hit_index, second.hit_index);
        prop_assert_eq!(first.frame, second.frame);
    }
}
