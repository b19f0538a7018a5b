use polyzone_editor::editor::Editor;
use polyzone_editor::svg_renderer::{render_document, render_grid_layer, render_shape_layer};

const TRIANGLE: &str = "0,0 10,0 5,10";

#[test]
fn test_document_structure() {
    let mut editor = Editor::new(800.0, 600.0);
    editor.drop_payload(TRIANGLE, 100.0, 100.0).unwrap();

    let svg = render_document(&editor);
    assert!(svg.starts_with("<svg "));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains(r#"width="800""#));
    assert!(svg.contains(r#"height="600""#));
}

#[test]
fn test_shape_layer_carries_viewport_transform() {
    let mut editor = Editor::new(800.0, 600.0);
    editor.viewport_mut().set_zoom(2.0);
    editor.viewport_mut().set_offset(-10.0, -5.0);
    editor.insert_polygon(polyzone_core::parse_points(TRIANGLE).unwrap()).unwrap();

    let layer = render_shape_layer(&editor);
    assert!(layer.contains(r#"transform="translate(-20, -10) scale(2)""#));
    assert!(layer.contains(r#"<polygon points="0,0 10,0 5,10""#));
    assert!(layer.contains(r#"fill="crimson""#));
}

#[test]
fn test_shape_layer_preserves_draw_order() {
    let mut editor = Editor::new(800.0, 600.0);
    editor.drop_payload(TRIANGLE, 100.0, 100.0).unwrap();
    editor.drop_payload(TRIANGLE, 300.0, 200.0).unwrap();

    let layer = render_shape_layer(&editor);
    let first = layer.find("95,95").unwrap();
    let second = layer.find("295,195").unwrap();
    assert!(first < second);
}

#[test]
fn test_grid_layer_line_and_label_counts() {
    let editor = Editor::new(800.0, 600.0);
    let grid = editor.grid_layer();
    let svg = render_grid_layer(&grid, 800.0, 600.0);

    let line_count = svg.matches("<line ").count();
    // Grid lines plus the two axis border lines.
    assert_eq!(
        line_count,
        grid.vertical_lines.len() + grid.horizontal_lines.len() + 2
    );
    assert_eq!(svg.matches("<text ").count(), grid.labels.len());
    assert_eq!(svg.matches("<rect ").count(), 2);
}

#[test]
fn test_grid_lines_stay_in_screen_space() {
    let mut editor = Editor::new(800.0, 600.0);
    editor.viewport_mut().set_zoom(2.0);

    let svg = render_document(&editor);
    // The grid group carries no transform; only the shape group does.
    let grid_start = svg.find("<g>").unwrap();
    let shape_start = svg.find("<g transform=").unwrap();
    assert!(grid_start < shape_start);
}
