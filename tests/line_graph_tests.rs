use std::cell::RefCell;
use std::rc::Rc;

use holograph::GraphError;
use holograph::api::{DrawOutcome, GraphConfig, LineGraph, LineGraphModel, RedrawState};
use holograph::core::{Line, LinePoint, Viewport};
use holograph::interaction::{HitShape, HitTarget, PointerEvent, TouchState};
use holograph::render::{BlendMode, NullRenderer};

fn point(x: f64, y: f64) -> LinePoint {
    LinePoint::new(x, y).expect("finite point")
}

fn scenario_graph() -> LineGraph<NullRenderer> {
    let config = GraphConfig::new(Viewport::new(100, 100));
    let mut graph =
        LineGraph::new(NullRenderer::default(), config, LineGraphModel::new()).expect("graph init");
    graph
        .add_line(Line::new().with_points([point(0.0, 0.0), point(1.0, 5.0), point(2.0, 2.0)]))
        .expect("add line");
    graph
}

fn record_clicks(graph: &mut LineGraph<NullRenderer>) -> Rc<RefCell<Vec<HitTarget>>> {
    let clicks = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&clicks);
    graph.set_click_listener(move |target| sink.borrow_mut().push(target));
    clicks
}

#[test]
fn press_and_release_on_point_fires_one_click() {
    let mut graph = scenario_graph();
    let clicks = record_clicks(&mut graph);
    graph.draw().expect("draw");

    let down = graph.handle_pointer(PointerEvent::Down { x: 50.0, y: 0.0 });
    assert!(down.repaint_requested);
    assert_eq!(
        graph.touch_state(),
        TouchState::Pressed(HitTarget::Point { series: 0, index: 1 })
    );

    let up = graph.handle_pointer(PointerEvent::Up { x: 50.0, y: 0.0 });
    assert_eq!(up.clicked, Some(HitTarget::Point { series: 0, index: 1 }));
    assert_eq!(*clicks.borrow(), vec![HitTarget::Point { series: 0, index: 1 }]);
    assert_eq!(graph.touch_state(), TouchState::Idle);
}

#[test]
fn release_outside_every_region_fires_nothing() {
    let mut graph = scenario_graph();
    let clicks = record_clicks(&mut graph);
    graph.draw().expect("draw");

    graph.handle_pointer(PointerEvent::Down { x: 50.0, y: 0.0 });
    let up = graph.handle_pointer(PointerEvent::Up { x: 50.0, y: 50.0 });

    assert_eq!(up.clicked, None);
    assert!(up.repaint_requested);
    assert!(clicks.borrow().is_empty());
    assert_eq!(graph.touch_state(), TouchState::Idle);
}

#[test]
fn pointer_move_and_cancel_never_click() {
    let mut graph = scenario_graph();
    let clicks = record_clicks(&mut graph);
    graph.draw().expect("draw");

    graph.handle_pointer(PointerEvent::Down { x: 50.0, y: 0.0 });
    let moved = graph.handle_pointer(PointerEvent::Move { x: 0.0, y: 100.0 });
    assert!(!moved.repaint_requested);
    assert!(matches!(graph.touch_state(), TouchState::Pressed(_)));

    let cancel = graph.handle_pointer(PointerEvent::Cancel);
    assert!(cancel.repaint_requested);
    assert_eq!(graph.touch_state(), TouchState::Idle);
    assert!(clicks.borrow().is_empty());
}

#[test]
fn pressed_point_is_drawn_highlighted() {
    let mut graph = scenario_graph();
    graph.draw().expect("draw");
    let idle_circles = graph.renderer().last_counts.circles;
    assert_eq!(idle_circles, 6);

    graph.handle_pointer(PointerEvent::Down { x: 50.0, y: 0.0 });
    assert_eq!(graph.draw().expect("draw"), DrawOutcome::Rebuilt);

    let frame = graph.last_frame().expect("frame");
    let highlight = frame
        .circles()
        .find(|circle| circle.radius == graph.config().hit_radius_px())
        .expect("selection circle");
    let selected = graph.model().lines()[0].points()[1].selected_color;
    assert_eq!(highlight.color, selected);
    assert_eq!(frame.counts().circles, idle_circles + 1);
}

#[test]
fn emptied_line_draws_nothing_and_is_not_hittable() {
    let mut graph = scenario_graph();
    graph.draw().expect("draw");
    assert_eq!(graph.hit_index().len(), 3);

    let removed = graph.remove_points_between(0, 0.0, 2.0).expect("line exists");
    assert_eq!(removed, 3);
    assert!(graph.hit_index().is_empty());

    assert_eq!(graph.draw().expect("draw"), DrawOutcome::Rebuilt);
    let counts = graph.last_frame().expect("frame").counts();
    // Only the baseline survives.
    assert_eq!(counts.lines, 1);
    assert_eq!(counts.circles, 0);
    assert_eq!(counts.paths, 0);
    assert!(graph.hit_index().is_empty());
}

#[test]
fn single_point_line_has_marker_but_no_stroke() {
    let config = GraphConfig::new(Viewport::new(100, 100));
    let mut graph =
        LineGraph::new(NullRenderer::default(), config, LineGraphModel::new()).expect("graph init");
    graph.add_line(Line::new().with_points([point(4.0, 4.0)])).expect("add line");
    graph.draw().expect("draw");

    let counts = graph.renderer().last_counts;
    assert_eq!(counts.lines, 1);
    assert_eq!(counts.circles, 2);
    let region = &graph.hit_index().regions()[0];
    assert_eq!(region.target, HitTarget::Point { series: 0, index: 0 });
}

#[test]
fn hidden_points_register_no_hit_regions() {
    let mut graph = scenario_graph();
    graph
        .update_line(0, |line| line.show_points = false)
        .expect("line exists");
    graph.draw().expect("draw");
    assert!(graph.hit_index().is_empty());
    assert_eq!(graph.renderer().last_counts.circles, 0);
    assert_eq!(graph.renderer().last_counts.lines, 3);
}

#[test]
fn hatch_fill_strokes_first_then_clears_outside_the_curve() {
    let mut graph = scenario_graph();
    graph.set_line_to_fill(Some(0)).expect("line exists");
    graph.draw().expect("draw");

    let frame = graph.last_frame().expect("frame");
    let counts = frame.counts();
    // 19 hatch strokes, baseline and two segments.
    assert_eq!(counts.lines, 22);
    // Two segment quads plus two side columns.
    assert_eq!(counts.paths, 4);
    assert!(frame.paths().all(|path| path.blend == BlendMode::Clear));
    assert!(matches!(
        frame.commands.first(),
        Some(holograph::render::DrawCommand::Line(_))
    ));
}

#[test]
fn overlapping_regions_resolve_to_earliest_series() {
    let config = GraphConfig::new(Viewport::new(100, 100));
    let mut graph =
        LineGraph::new(NullRenderer::default(), config, LineGraphModel::new()).expect("graph init");
    for _ in 0..2 {
        graph
            .add_line(Line::new().with_points([point(0.0, 0.0), point(1.0, 1.0)]))
            .expect("add line");
    }
    graph.draw().expect("draw");

    let outcome = graph.handle_pointer(PointerEvent::Down { x: 100.0, y: 0.0 });
    assert!(outcome.repaint_requested);
    assert_eq!(
        graph.touch_state(),
        TouchState::Pressed(HitTarget::Point { series: 0, index: 1 })
    );
}

#[test]
fn invalid_indices_report_not_found() {
    let mut graph = scenario_graph();
    assert!(matches!(
        graph.add_point_to_line(3, point(0.0, 0.0)),
        Err(GraphError::NotFound(_))
    ));
    assert!(matches!(
        graph.remove_point_from_line(0, 9.0, 9.0),
        Err(GraphError::NotFound(_))
    ));
    assert!(matches!(
        graph.remove_points_after(7, 0.0),
        Err(GraphError::NotFound(_))
    ));
    assert!(matches!(
        graph.set_line_to_fill(Some(1)),
        Err(GraphError::NotFound(_))
    ));
    assert_eq!(graph.remove_points_after(0, 10.0).expect("line exists"), 0);
}

#[test]
fn remove_before_and_after_are_inclusive() {
    let mut graph = scenario_graph();
    assert_eq!(graph.remove_points_before(0, 1.0).expect("line exists"), 2);
    let xs: Vec<f64> = graph.model().lines()[0].points().iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![2.0]);
    assert_eq!(graph.remove_points_after(0, 2.0).expect("line exists"), 1);
    assert!(graph.model().lines()[0].is_empty());
}

#[test]
fn failed_update_leaves_line_untouched() {
    let mut graph = scenario_graph();
    graph.draw().expect("draw");
    let err = graph
        .update_line(0, |line| line.stroke_width_dp = -1.0)
        .expect_err("negative stroke must fail");
    assert!(matches!(err, GraphError::InvalidData(_)));
    assert_eq!(graph.model().lines()[0].stroke_width_dp, 6.0);
    assert_eq!(graph.draw().expect("draw"), DrawOutcome::Reused);
}

#[test]
fn remove_all_lines_clears_fill_target() {
    let mut graph = scenario_graph();
    graph.set_line_to_fill(Some(0)).expect("line exists");
    graph.remove_all_lines();
    assert!(graph.model().lines().is_empty());
    assert_eq!(graph.model().line_to_fill(), None);
    graph.draw().expect("draw on empty graph");
}

#[test]
fn axis_values_add_labels_and_padding() {
    let mut graph = scenario_graph();
    graph.set_show_axis_values(true);
    graph.draw().expect("draw");

    let frame = graph.last_frame().expect("frame");
    let labels: Vec<&str> = frame.texts().map(|text| text.text.as_str()).collect();
    assert!(labels.contains(&"0"));
    assert!(labels.contains(&"2"));
    assert!(labels.contains(&"5"));

    // The origin moves inside the left/bottom label gutters.
    let origin = graph.hit_index().regions()[0].bounds;
    let center_x = (origin.left + origin.right) / 2.0;
    assert!(center_x > 0.0);
}

#[test]
fn snapshot_json_names_kind_and_scene() {
    let graph = scenario_graph();
    let json = graph.snapshot_json_pretty().expect("snapshot");
    assert!(json.contains("\"kind\": \"line\""));
    assert!(json.contains("\"hit_index\""));
    assert!(json.contains("\"touch_state\": \"Idle\""));
}

#[test]
fn hand_built_non_finite_points_are_rejected_before_mutation() {
    let mut graph = scenario_graph();
    graph.draw().expect("draw");

    let mut bad = point(3.0, 1.0);
    bad.x = f64::NAN;
    let err = graph.add_point_to_line(0, bad).expect_err("nan point");
    assert!(matches!(err, GraphError::InvalidData(_)));

    let err = graph
        .add_points_to_line(0, [point(3.0, 1.0), bad])
        .expect_err("batch with nan point");
    assert!(matches!(err, GraphError::InvalidData(_)));

    assert_eq!(graph.model().lines()[0].len(), 3);
    assert_eq!(graph.redraw_state(), RedrawState::Clean);
    assert_eq!(graph.draw().expect("draw"), DrawOutcome::Reused);

    graph.add_point_to_line(0, point(3.0, 1.0)).expect("finite point");
    assert_eq!(graph.draw().expect("draw"), DrawOutcome::Rebuilt);
}

#[test]
fn axis_titles_take_their_own_rows_and_y_title_is_rotated() {
    let mut graph = scenario_graph();
    graph
        .update_config(|config| {
            config.axis_title_font_size_px = 10.0;
            config.x_axis_title = Some("Day".to_owned());
            config.y_axis_title = Some("Value".to_owned());
        })
        .expect("titles");
    graph.draw().expect("draw");

    let frame = graph.last_frame().expect("frame");
    let x_title = frame.texts().find(|text| text.text == "Day").expect("x title");
    assert_eq!((x_title.x, x_title.y), (50.0, 90.0));
    assert_eq!(x_title.rotation_deg, 0.0);
    let y_title = frame.texts().find(|text| text.text == "Value").expect("y title");
    assert_eq!((y_title.x, y_title.y), (0.0, 50.0));
    assert_eq!(y_title.rotation_deg, -90.0);

    // Point (0, 0) sits on the corner left after the title column and row.
    let HitShape::Circle { center, .. } = graph.hit_index().regions()[0].shape else {
        panic!("line points register circles");
    };
    assert_eq!((center.x, center.y), (10.0, 90.0));

    graph.set_x_axis_title(None).expect("clear title");
    graph.draw().expect("draw");
    let frame = graph.last_frame().expect("frame");
    assert!(frame.texts().all(|text| text.text != "Day"));
}

#[test]
fn axis_values_toggle_per_axis() {
    let mut graph = scenario_graph();
    graph.set_show_x_axis_values(true);
    graph.draw().expect("draw");

    let font = graph.config().axis_font_size_px;
    let frame = graph.last_frame().expect("frame");
    let rows: Vec<f64> = frame.texts().map(|text| text.y).collect();
    assert!(!rows.is_empty());
    // Only the x row is populated.
    assert!(rows.iter().all(|y| *y == 100.0 - font * 1.5));

    let HitShape::Circle { center, .. } = graph.hit_index().regions()[0].shape else {
        panic!("line points register circles");
    };
    assert_eq!(center.x, 0.0);
    assert_eq!(center.y, 100.0 - font * 2.0);

    graph.set_show_x_axis_values(false);
    graph.set_show_y_axis_values(true);
    graph.draw().expect("draw");
    let frame = graph.last_frame().expect("frame");
    assert!(frame.texts().all(|text| text.x == font));
    let HitShape::Circle { center, .. } = graph.hit_index().regions()[0].shape else {
        panic!("line points register circles");
    };
    assert_eq!(center.x, font * 2.0);
    assert_eq!(center.y, 100.0);
}
