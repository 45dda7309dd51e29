//! Writes a `DrawList` out as an SVG image. Elements are written in the
//! order of the list, and SVG paints later elements over earlier ones, so
//! solid walls end up on top.

use automap::{DrawList, Rgb};
use std::io::{self, Write};

/// Radius of a thing marker, in pixels
const MARKER_RADIUS: i32 = 2;

fn hex(c: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// Only what can appear in a lump name needs escaping
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn write_svg<W: Write>(
    out: &mut W,
    list: &DrawList,
    background: Rgb,
    title: &str,
) -> io::Result<()> {
    let size = list.ctx.canvas_size();
    let (w, h) = (size.x, size.y);
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    )?;
    writeln!(out, "<title>{}</title>", escape(title))?;
    writeln!(
        out,
        r#"<rect width="{w}" height="{h}" fill="{}"/>"#,
        hex(background)
    )?;

    writeln!(out, r#"<g stroke-width="1" stroke-linecap="round">"#)?;
    for line in &list.lines {
        writeln!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"/>"#,
            line.p1.x,
            line.p1.y,
            line.p2.x,
            line.p2.y,
            hex(line.color)
        )?;
    }
    writeln!(out, "</g>")?;

    if !list.markers.is_empty() {
        writeln!(out, "<g>")?;
        for m in &list.markers {
            writeln!(
                out,
                r#"<circle cx="{}" cy="{}" r="{MARKER_RADIUS}" fill="{}"><title>type {} angle {}</title></circle>"#,
                m.p.x,
                m.p.y,
                hex(m.color),
                m.type_code,
                m.angle
            )?;
        }
        writeln!(out, "</g>")?;
    }

    writeln!(out, "</svg>")
}
