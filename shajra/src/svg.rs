// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export of a whole tree.
//!
//! The document is drawn in layout space, independent of the current pan and
//! zoom, so the exported image always shows every member:
//! - a faint background grid,
//! - one connector curve per parent-child pair,
//! - one disc per member, filled with its own color or the theme fallback,
//! - the wrapped English name centered inside each disc,
//! - a thicker outline in the selection color around the selected member.

use core::fmt::Write as _;

use kurbo::Rect;
use peniko::Color;
use shajra_layout::wrap_label;

use crate::session::Frame;

/// Blank margin around the tree, in layout units.
pub const EXPORT_PADDING: f64 = 40.0;

const GRID_SPACING: f64 = 40.0;
const LABEL_LINE_HEIGHT: f64 = 15.0;
const LABEL_FONT_SIZE: f64 = 13.0;

/// Renders `frame` as a standalone SVG document.
#[must_use]
pub fn render_svg(frame: &Frame<'_>) -> String {
    let theme = frame.theme.theme();
    let area = frame.layout.bounds().inflate(EXPORT_PADDING, EXPORT_PADDING);
    let mut out = String::new();

    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"{} {} {} {}\">",
        fmt_num(area.width()),
        fmt_num(area.height()),
        fmt_num(area.x0),
        fmt_num(area.y0),
        fmt_num(area.width()),
        fmt_num(area.height()),
    );
    write_background(&mut out, area, theme.background, theme.grid);

    let _ = write!(
        out,
        "<g fill=\"none\" stroke=\"{}\" stroke-width=\"2\" opacity=\"0.6\">",
        color_to_svg(theme.connector)
    );
    for conn in &frame.connectors {
        let _ = write!(out, "<path d=\"{}\"/>", conn.to_svg_path());
    }
    out.push_str("</g>");

    for (member, node) in frame.layout.with_members(frame.tree) {
        let selected = frame.selected == Some(member.id.as_str());
        let fill = member
            .color
            .as_deref()
            .map_or_else(|| color_to_svg(theme.node_fallback), escape_xml);
        let (stroke, stroke_width) = if selected {
            (theme.selected_stroke, 4)
        } else {
            (theme.node_stroke, 2)
        };
        let _ = write!(
            out,
            "<g id=\"{}\"><circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{fill}\" stroke=\"{}\" stroke-width=\"{stroke_width}\" opacity=\"0.85\"/>",
            escape_xml(&member.id),
            fmt_num(node.point.x),
            fmt_num(node.point.y),
            fmt_num(node.radius),
            color_to_svg(stroke),
        );

        let lines = wrap_label(&member.name.english);
        let total = lines.len() as f64 * LABEL_LINE_HEIGHT;
        let top = node.point.y - total / 2.0 + 5.0;
        for (i, line) in lines.iter().enumerate() {
            let _ = write!(
                out,
                "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"middle\" font-family=\"sans-serif\" font-size=\"{}\" font-weight=\"700\" fill=\"{}\">{}</text>",
                fmt_num(node.point.x),
                fmt_num(top + i as f64 * LABEL_LINE_HEIGHT),
                fmt_num(LABEL_FONT_SIZE),
                color_to_svg(theme.label),
                escape_xml(line),
            );
        }
        out.push_str("</g>");
    }

    out.push_str("</svg>");
    out
}

fn write_background(out: &mut String, area: Rect, background: Color, grid: Color) {
    let _ = write!(
        out,
        "<defs><pattern id=\"grid\" width=\"{s}\" height=\"{s}\" patternUnits=\"userSpaceOnUse\"><path d=\"M {s} 0 L 0 0 0 {s}\" fill=\"none\" stroke=\"{}\" stroke-width=\"0.5\" opacity=\"0.1\"/></pattern></defs>",
        color_to_svg(grid),
        s = fmt_num(GRID_SPACING),
    );
    let rect_attrs = format!(
        "x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
        fmt_num(area.x0),
        fmt_num(area.y0),
        fmt_num(area.width()),
        fmt_num(area.height()),
    );
    let _ = write!(
        out,
        "<rect {rect_attrs} fill=\"{}\"/><rect {rect_attrs} fill=\"url(#grid)\"/>",
        color_to_svg(background)
    );
}

fn color_to_svg(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn fmt_num(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "integral and well inside i64 range"
        )]
        let i = v as i64;
        return format!("{i}");
    }
    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_compact() {
        assert_eq!(fmt_num(220.0), "220");
        assert_eq!(fmt_num(-110.0), "-110");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(1.0 / 3.0), "0.333");
        assert_eq!(fmt_num(2.0004), "2");
    }

    #[test]
    fn xml_is_escaped() {
        assert_eq!(escape_xml("Abu <Zayd> & \"sons\""), "Abu &lt;Zayd&gt; &amp; &quot;sons&quot;");
    }

    #[test]
    fn colors_are_hex() {
        assert_eq!(color_to_svg(Color::from_rgb8(0x1e, 0x3c, 0x30)), "#1e3c30");
    }
}
