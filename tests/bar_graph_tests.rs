use approx::assert_abs_diff_eq;
use holograph::GraphError;
use holograph::api::{BarGraph, BarGraphModel, BarStyle, GraphConfig};
use holograph::core::{Bar, Viewport};
use holograph::interaction::{HitTarget, PointerEvent};
use holograph::render::NullRenderer;

fn bars(values: &[(&str, f64)]) -> Vec<Bar> {
    values
        .iter()
        .map(|(name, value)| Bar::new(*name, *value).expect("finite bar"))
        .collect()
}

fn graph(values: &[(&str, f64)], show_text: bool) -> BarGraph<NullRenderer> {
    let config = GraphConfig::new(Viewport::new(100, 100));
    let mut graph =
        BarGraph::new(NullRenderer::default(), config, BarGraphModel::new()).expect("graph init");
    graph
        .set_bar_style(BarStyle {
            show_bar_text: show_text,
            label_font_size_px: 10.0,
            ..BarStyle::default()
        })
        .expect("valid style");
    graph.set_bars(bars(values)).expect("set bars");
    graph
}

#[test]
fn bars_share_slots_and_grow_from_zero() {
    let mut graph = graph(&[("a", 2.0), ("b", 4.0), ("c", 8.0)], false);
    graph.draw().expect("draw");

    let frame = graph.last_frame().expect("frame");
    let rects: Vec<_> = frame.rects().collect();
    assert_eq!(rects.len(), 3);

    let slot = 100.0 / 3.0;
    assert_abs_diff_eq!(rects[1].width, slot * 0.8, epsilon = 1e-9);
    assert_abs_diff_eq!(rects[1].x, slot + slot * 0.1, epsilon = 1e-9);
    assert_abs_diff_eq!(rects[1].y, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(rects[1].height, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(rects[2].y, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(rects[2].height, 100.0, epsilon = 1e-9);
}

#[test]
fn click_on_bar_reports_its_index() {
    let mut graph = graph(&[("a", 2.0), ("b", 4.0), ("c", 8.0)], false);
    graph.draw().expect("draw");

    graph.handle_pointer(PointerEvent::Down { x: 50.0, y: 90.0 });
    let up = graph.handle_pointer(PointerEvent::Up { x: 50.0, y: 90.0 });
    assert_eq!(up.clicked, Some(HitTarget::Bar { index: 1 }));

    // Above the short bar is empty space.
    graph.handle_pointer(PointerEvent::Down { x: 15.0, y: 20.0 });
    let up = graph.handle_pointer(PointerEvent::Up { x: 15.0, y: 20.0 });
    assert_eq!(up.clicked, None);
}

#[test]
fn bar_text_adds_value_and_name_labels() {
    let mut graph = graph(&[("a", 2.0), ("b", 4.0)], true);
    graph.draw().expect("draw");

    let frame = graph.last_frame().expect("frame");
    let labels: Vec<&str> = frame.texts().map(|text| text.text.as_str()).collect();
    assert_eq!(labels, vec!["2", "a", "4", "b"]);
    // Label rows shrink the plot.
    let tallest = frame.rects().map(|rect| rect.y).fold(f64::INFINITY, f64::min);
    assert_abs_diff_eq!(tallest, 20.0, epsilon = 1e-9);
}

#[test]
fn custom_value_string_replaces_formatted_value() {
    let mut graph = graph(&[("a", 2.0)], true);
    graph
        .update_bar(0, |bar| bar.value_string = Some("$2".to_owned()))
        .expect("bar exists");
    graph.draw().expect("draw");
    let frame = graph.last_frame().expect("frame");
    assert_eq!(frame.texts().next().map(|text| text.text.as_str()), Some("$2"));
}

#[test]
fn negative_values_hang_below_zero() {
    let mut graph = graph(&[("loss", -2.0), ("gain", 4.0)], false);
    graph.draw().expect("draw");
    let frame = graph.last_frame().expect("frame");
    let rects: Vec<_> = frame.rects().collect();
    let zero_y = 100.0 - (2.0 / 6.0) * 100.0;
    assert_abs_diff_eq!(rects[0].y, zero_y, epsilon = 1e-9);
    assert_abs_diff_eq!(rects[1].y + rects[1].height, zero_y, epsilon = 1e-9);
}

#[test]
fn removing_bars_validates_index() {
    let mut graph = graph(&[("a", 2.0), ("b", 4.0)], false);
    let removed = graph.remove_bar(0).expect("bar exists");
    assert_eq!(removed.name, "a");
    assert!(matches!(graph.remove_bar(5), Err(GraphError::NotFound(_))));
    graph.remove_bars();
    graph.draw().expect("draw with no bars");
    assert!(graph.hit_index().is_empty());
}

#[test]
fn spacing_ratio_must_leave_room_for_bars() {
    let mut graph = graph(&[("a", 2.0)], false);
    let err = graph
        .set_bar_style(BarStyle {
            spacing_ratio: 1.0,
            ..BarStyle::default()
        })
        .expect_err("ratio 1 leaves no bar");
    assert!(matches!(err, GraphError::InvalidData(_)));
}
