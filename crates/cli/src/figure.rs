//! SVG rendering of one mosaic.
//!
//! Each piece becomes a closed polygon through its four points in order, filled
//! with the piece color and outlined in the stroke color. Mosaic coordinates are
//! y-up; the SVG is y-down, so y is flipped against the bounding box.

use shattered::{Hsba, Piece};
use std::fmt;

#[derive(Clone, Copy, Debug)]
pub struct FigureStyle {
    pub stroke: Hsba,
    pub stroke_width: f64,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            stroke: Hsba::opaque(0.0, 0.0, 1.0),
            stroke_width: 1.0,
        }
    }
}

fn hex(color: &Hsba) -> String {
    let [r, g, b, _] = color.to_rgba_u8();
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Stream the SVG document for `pieces` into `out`.
pub fn write_svg<W: fmt::Write>(
    out: &mut W,
    pieces: &[Piece],
    style: &FigureStyle,
) -> fmt::Result {
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for q in pieces.iter().flat_map(|p| p.points.iter()) {
        min_x = min_x.min(q.x);
        min_y = min_y.min(q.y);
        max_x = max_x.max(q.x);
        max_y = max_y.max(q.y);
    }
    if pieces.is_empty() {
        (min_x, min_y, max_x, max_y) = (0.0, 0.0, 0.0, 0.0);
    }
    let w = max_x - min_x;
    let h = max_y - min_y;

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#
    )?;
    let stroke = hex(&style.stroke);
    for p in pieces {
        let pts: Vec<String> = p
            .points
            .iter()
            .map(|q| format!("{},{}", q.x - min_x, max_y - q.y))
            .collect();
        write!(
            out,
            r#"  <polygon points="{}" fill="{}" stroke="{}" stroke-width="{}""#,
            pts.join(" "),
            hex(&p.color),
            stroke,
            style.stroke_width
        )?;
        if p.color.alpha < 1.0 {
            write!(out, r#" fill-opacity="{}""#, p.color.alpha)?;
        }
        out.write_str("/>\n")?;
    }
    out.write_str("</svg>\n")
}

pub fn render_svg(pieces: &[Piece], style: &FigureStyle) -> Result<String, fmt::Error> {
    let mut svg = String::new();
    write_svg(&mut svg, pieces, style)?;
    Ok(svg)
}
