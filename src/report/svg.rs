//! Minimal SVG drawing surface backed by `quick-xml`

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::errors::{BenchError, BenchResult};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const FONT_FAMILY: &str = "DejaVu Sans, Arial, sans-serif";

/// Horizontal anchoring of a text label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Font settings of a text label
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub anchor: Anchor,
    pub size: f64,
    /// Rotation in degrees around the label's anchor point
    pub rotate: Option<f64>,
    pub bold: bool,
}

impl TextStyle {
    pub fn new(anchor: Anchor, size: f64) -> Self {
        TextStyle { anchor, size, rotate: None, bold: false }
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotate = Some(degrees);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// An SVG document being drawn, in pixel units with the origin top-left
pub struct SvgCanvas {
    writer: Writer<Vec<u8>>,
    width: f64,
    height: f64,
}

impl SvgCanvas {
    /// Start a document with a white background
    pub fn new(width: f64, height: f64) -> BenchResult<Self> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let (w, h) = (num(width), num(height));
        let view_box = format!("0 0 {} {}", w, h);
        let root = BytesStart::new("svg").with_attributes([
            ("xmlns", SVG_NS),
            ("width", w.as_str()),
            ("height", h.as_str()),
            ("viewBox", view_box.as_str()),
            ("font-family", FONT_FAMILY),
        ]);
        writer.write_event(Event::Start(root))?;

        let mut canvas = SvgCanvas { writer, width, height };
        canvas.rect(0.0, 0.0, width, height, "#ffffff")?;
        Ok(canvas)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Filled rectangle; negative heights are drawn upward from `y`
    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: &str) -> BenchResult<()> {
        let (y, height) = if height < 0.0 { (y + height, -height) } else { (y, height) };
        let (x, y, width, height) = (num(x), num(y), num(width), num(height));
        let rect = BytesStart::new("rect").with_attributes([
            ("x", x.as_str()),
            ("y", y.as_str()),
            ("width", width.as_str()),
            ("height", height.as_str()),
            ("fill", fill),
        ]);
        self.writer.write_event(Event::Empty(rect))?;
        Ok(())
    }

    /// Straight line, optionally dashed (`dash` is an SVG dash array)
    pub fn line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        stroke: &str,
        stroke_width: f64,
        dash: Option<&str>,
    ) -> BenchResult<()> {
        let (x1, y1, x2, y2) = (num(from.0), num(from.1), num(to.0), num(to.1));
        let stroke_width = num(stroke_width);
        let mut line = BytesStart::new("line").with_attributes([
            ("x1", x1.as_str()),
            ("y1", y1.as_str()),
            ("x2", x2.as_str()),
            ("y2", y2.as_str()),
            ("stroke", stroke),
            ("stroke-width", stroke_width.as_str()),
        ]);
        if let Some(dash) = dash {
            line.push_attribute(("stroke-dasharray", dash));
        }
        self.writer.write_event(Event::Empty(line))?;
        Ok(())
    }

    pub fn circle(&mut self, cx: f64, cy: f64, radius: f64, fill: &str) -> BenchResult<()> {
        let (cx, cy, r) = (num(cx), num(cy), num(radius));
        let circle = BytesStart::new("circle").with_attributes([
            ("cx", cx.as_str()),
            ("cy", cy.as_str()),
            ("r", r.as_str()),
            ("fill", fill),
        ]);
        self.writer.write_event(Event::Empty(circle))?;
        Ok(())
    }

    /// Text label; the content is XML-escaped
    pub fn text(&mut self, x: f64, y: f64, content: &str, style: TextStyle) -> BenchResult<()> {
        let (xs, ys, size) = (num(x), num(y), num(style.size));
        let mut text = BytesStart::new("text").with_attributes([
            ("x", xs.as_str()),
            ("y", ys.as_str()),
            ("font-size", size.as_str()),
            ("text-anchor", style.anchor.as_str()),
        ]);
        if style.bold {
            text.push_attribute(("font-weight", "bold"));
        }
        if let Some(degrees) = style.rotate {
            let transform = format!("rotate({} {} {})", num(degrees), xs, ys);
            text.push_attribute(("transform", transform.as_str()));
        }

        self.writer.write_event(Event::Start(text))?;
        self.writer.write_event(Event::Text(BytesText::new(content)))?;
        self.writer.write_event(Event::End(BytesEnd::new("text")))?;
        Ok(())
    }

    /// Close the document and return it as a string
    pub fn finish(mut self) -> BenchResult<String> {
        self.writer.write_event(Event::End(BytesEnd::new("svg")))?;
        String::from_utf8(self.writer.into_inner())
            .map_err(|e| BenchError::RenderError(format!("SVG is not UTF-8: {}", e)))
    }
}

/// Coordinate with at most two decimals and no trailing zeros
fn num(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
