//! SVG drawing for the built-in templates

use super::theme::Theme;
use crate::layout::{CanvasGeometry, FrameGeometry, PointerArrow, Row, RowKind};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Escape text for use in element content and attribute values
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// One frame as a standalone `<svg>` element
pub fn draw_frame(frame: &FrameGeometry, theme: &Theme) -> String {
    let mut out = format!(
        "<svg xmlns=\"{}\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
        SVG_NS, frame.width, frame.height, frame.width, frame.height
    );
    out.push_str(&format!(
        "  <g transform=\"translate({}, {})\" font-family=\"{}\" font-size=\"{}\">\n",
        frame.canvas_margin + frame.margins.left,
        frame.canvas_margin + frame.margins.top,
        theme.font_family,
        theme.font_size
    ));

    for row in &frame.rows {
        out.push_str(&draw_row(frame, row, theme));
    }

    if let Some(arrow) = &frame.arrow {
        out.push_str(&draw_arrow(frame, arrow, theme));
    }

    out.push_str("  </g>\n</svg>\n");
    out
}

fn draw_row(frame: &FrameGeometry, row: &Row, theme: &Theme) -> String {
    let text_x = frame.label_offset_x;
    let text_y = row.y + frame.label_offset_y;

    let mut out = match &row.kind {
        RowKind::Header { title } => {
            // title sits on the bottom edge of the header band
            return match title {
                Some(title) => format!(
                    "    <text x=\"{}\" y=\"{}\" fill=\"{}\" font-weight=\"bold\">{}</text>\n",
                    text_x,
                    row.y + row.height - frame.label_offset_x,
                    theme.title,
                    escape_xml(title)
                ),
                None => String::new(),
            };
        }
        RowKind::Slot { label, .. } => {
            let fill = if label.is_empty() {
                theme.empty_fill
            } else {
                theme.slot_fill
            };
            let mut cell = rect(frame, row, fill, theme.border, false);
            if !label.is_empty() {
                cell.push_str(&format!(
                    "    <text x=\"{}\" y=\"{}\" fill=\"{}\">{}</text>\n",
                    text_x,
                    text_y,
                    theme.fg,
                    escape_xml(label)
                ));
            }
            cell
        }
        RowKind::Ellipsis { .. } => {
            let mut cell = rect(frame, row, theme.empty_fill, theme.border, true);
            cell.push_str(&format!(
                "    <text x=\"{}\" y=\"{}\" fill=\"{}\" text-anchor=\"middle\">{}</text>\n",
                frame.column_width / 2.0,
                text_y,
                theme.comment,
                escape_xml(row.label().unwrap_or_default())
            ));
            cell
        }
    };

    if let Some(offset) = &row.offset_label {
        let color = if offset == "EBP" {
            theme.base_pointer
        } else {
            theme.comment
        };
        out.push_str(&format!(
            "    <text x=\"{}\" y=\"{}\" fill=\"{}\">{}</text>\n",
            frame.column_width + frame.label_offset_x,
            text_y,
            color,
            escape_xml(offset)
        ));
    }
    out
}

fn rect(frame: &FrameGeometry, row: &Row, fill: &str, stroke: &str, dashed: bool) -> String {
    format!(
        "    <rect x=\"0\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"{}\"{}/>\n",
        row.y,
        frame.column_width,
        row.height,
        fill,
        stroke,
        if dashed {
            " stroke-dasharray=\"4 2\""
        } else {
            ""
        }
    )
}

fn draw_arrow(frame: &FrameGeometry, arrow: &PointerArrow, theme: &Theme) -> String {
    let head = 5.0;
    format!(
        concat!(
            "    <g transform=\"translate({}, {})\" fill=\"{}\" stroke=\"{}\">\n",
            "      <text x=\"0\" y=\"{}\" stroke=\"none\">ESP</text>\n",
            "      <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"/>\n",
            "      <polygon points=\"{},{} {},{} {},{}\" stroke=\"none\"/>\n",
            "    </g>\n"
        ),
        arrow.x,
        arrow.y,
        theme.pointer,
        theme.pointer,
        frame.label_offset_y,
        arrow.arrow_x1,
        arrow.arrow_y,
        arrow.arrow_x2 - head,
        arrow.arrow_y,
        arrow.arrow_x2,
        arrow.arrow_y,
        arrow.arrow_x2 - head,
        arrow.arrow_y - head / 2.0 - 1.5,
        arrow.arrow_x2 - head,
        arrow.arrow_y + head / 2.0 + 1.5,
    )
}

/// The complete document: every frame translated to its grid cell
pub fn draw_canvas(canvas: &CanvasGeometry, theme: &Theme) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(&format!(
        "<svg xmlns=\"{}\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
        SVG_NS, canvas.width, canvas.height, canvas.width, canvas.height
    ));
    out.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
        theme.bg
    ));
    for frame in &canvas.frames {
        out.push_str(&format!(
            "<g transform=\"translate({}, {})\">\n{}</g>\n",
            frame.x, frame.y, frame.markup
        ));
    }
    out.push_str("</svg>\n");
    out
}
