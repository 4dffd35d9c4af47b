use holograph::GraphError;
use holograph::api::{GraphConfig, LineGraph, LineGraphModel};
use holograph::core::{Color, Line, LinePoint, PixelPoint, Viewport};
use holograph::interaction::PointerEvent;
use holograph::render::{
    CirclePrimitive, DrawCommand, LinePrimitive, NullRenderer, PathPrimitive, RenderFrame,
    Renderer,
};

fn pressed_graph() -> LineGraph<NullRenderer> {
    let config = GraphConfig::new(Viewport::new(100, 100));
    let mut graph =
        LineGraph::new(NullRenderer::default(), config, LineGraphModel::new()).expect("graph init");
    graph
        .add_line(Line::new().with_points([
            LinePoint::new(0.0, 0.0).expect("finite"),
            LinePoint::new(1.0, 1.0).expect("finite"),
        ]))
        .expect("add line");
    graph.draw().expect("draw");
    graph.handle_pointer(PointerEvent::Down { x: 100.0, y: 0.0 });
    graph.draw().expect("draw");
    graph
}

#[test]
fn frame_orders_series_before_markers_before_selection() {
    let graph = pressed_graph();
    let frame = graph.last_frame().expect("frame");

    let kinds: Vec<&str> = frame
        .commands
        .iter()
        .map(|command| match command {
            DrawCommand::Line(_) => "line",
            DrawCommand::Circle(_) => "circle",
            DrawCommand::Path(_) => "path",
            DrawCommand::Rect(_) => "rect",
            DrawCommand::Text(_) => "text",
        })
        .collect();
    // Baseline, segment, two markers of two discs, selection halo.
    assert_eq!(
        kinds,
        vec!["line", "line", "circle", "circle", "circle", "circle", "circle"]
    );

    let halo = frame.circles().last().expect("halo");
    assert_eq!(halo.radius, graph.config().hit_radius_px());
}

#[test]
fn null_renderer_records_counts_of_rendered_frame() {
    let graph = pressed_graph();
    let renderer = graph.into_renderer();
    assert_eq!(renderer.render_count, 2);
    assert_eq!(renderer.last_counts.lines, 2);
    assert_eq!(renderer.last_counts.circles, 5);
    assert_eq!(renderer.last_command_count, 7);
}

#[test]
fn null_renderer_rejects_invalid_primitives() {
    let mut renderer = NullRenderer::default();

    let frame = RenderFrame::new(Viewport::new(10, 10)).with_circle(CirclePrimitive::new(
        PixelPoint::new(f64::NAN, 1.0),
        2.0,
        Color::BLACK,
    ));
    assert!(matches!(renderer.render(&frame), Err(GraphError::InvalidData(_))));

    let frame = RenderFrame::new(Viewport::new(10, 10)).with_path(PathPrimitive::filled(
        vec![PixelPoint::new(0.0, 0.0), PixelPoint::new(1.0, 1.0)],
        Color::BLACK,
    ));
    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.render_count, 0);
}

#[test]
fn draw_commands_serialize_with_kind_tag() {
    let command = DrawCommand::from(LinePrimitive::new(0.0, 0.0, 1.0, 1.0, 2.0, Color::WHITE));
    let json = serde_json::to_string(&command).expect("serialize");
    assert!(json.starts_with("{\"kind\":\"line\""));
}
