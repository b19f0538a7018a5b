//! SVG output for the two renderable layers.
//!
//! The grid layer is drawn untransformed in screen space; the shape layer
//! is emitted in world coordinates under the viewport's group transform,
//! so panning and zooming only rewrite one attribute. This mirrors the
//! split the interactive surface uses: grid redrawn per viewport change,
//! shapes re-transformed.

use std::fmt::Write as _;

use crate::editor::Editor;
use crate::grid::GridLayer;

const SHAPE_FILL: &str = "crimson";
const SHAPE_STROKE: &str = "#000";
const GRID_STROKE: &str = "#ccc";
const BAND_FILL: &str = "#808080";
const AXIS_STROKE: &str = "#000";
const LABEL_FONT: &str = "Arial, sans-serif";

/// Renders the grid layer as SVG group content.
pub fn render_grid_layer(layer: &GridLayer, width: f64, height: f64) -> String {
    let mut svg = String::new();

    for line in &layer.vertical_lines {
        let _ = writeln!(
            svg,
            r#"<line x1="{x}" y1="0" x2="{x}" y2="{height}" stroke="{GRID_STROKE}" stroke-width="1"/>"#,
            x = line.screen,
        );
    }
    for line in &layer.horizontal_lines {
        let _ = writeln!(
            svg,
            r#"<line x1="0" y1="{y}" x2="{width}" y2="{y}" stroke="{GRID_STROKE}" stroke-width="1"/>"#,
            y = line.screen,
        );
    }

    for band in &layer.bands {
        let _ = writeln!(
            svg,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{BAND_FILL}"/>"#,
            band.x, band.y, band.width, band.height,
        );
    }

    for axis in &layer.axes {
        let _ = writeln!(
            svg,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{AXIS_STROKE}" stroke-width="2"/>"#,
            axis.x1, axis.y1, axis.x2, axis.y2,
        );
    }

    for label in &layer.labels {
        let _ = writeln!(
            svg,
            r##"<text x="{}" y="{}" fill="#000" font-size="12" font-family="{LABEL_FONT}">{}</text>"##,
            label.x, label.y, label.text,
        );
    }

    svg
}

/// Renders the shape layer as an SVG group carrying the viewport
/// transform.
pub fn render_shape_layer(editor: &Editor) -> String {
    let mut svg = String::new();
    let _ = writeln!(svg, r#"<g transform="{}">"#, editor.viewport().transform());

    for shape in editor.shapes() {
        let _ = writeln!(
            svg,
            r#"<polygon points="{}" fill="{SHAPE_FILL}" stroke="{SHAPE_STROKE}" stroke-width="1"/>"#,
            shape.to_point_string(),
        );
    }

    let _ = writeln!(svg, "</g>");
    svg
}

/// Renders a complete standalone SVG document: grid beneath shapes.
pub fn render_document(editor: &Editor) -> String {
    let width = editor.viewport().canvas_width();
    let height = editor.viewport().canvas_height();
    let grid = editor.grid_layer();

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#,
    );
    let _ = writeln!(svg, "<g>");
    svg.push_str(&render_grid_layer(&grid, width, height));
    let _ = writeln!(svg, "</g>");
    svg.push_str(&render_shape_layer(editor));
    let _ = writeln!(svg, "</svg>");
    svg
}
