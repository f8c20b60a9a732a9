//! Serialization: plots to SVG, documents to standalone HTML files.

use std::fs;
use std::io;
use std::path::Path;

use kurbo::Size;

use crate::error::Error;
use crate::plot::{Document, Plot};
use crate::render::render_plot;

impl Plot {
    /// Render to SVG and write it to `writer`.
    pub fn to_svg(&self, writer: impl io::Write) -> Result<(), Error> {
        let mut rc =
            piet_svg::RenderContext::new(Size::new(self.width as f64, self.height as f64));
        render_plot(self, &mut rc)?;
        rc.write(writer)?;
        Ok(())
    }

    pub fn svg_string(&self) -> Result<String, Error> {
        let mut buf = Vec::new();
        self.to_svg(&mut buf)?;
        String::from_utf8(buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
    }
}

impl Document {
    /// Write the document to `path` as a standalone HTML page.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        fs::write(path, file_html(self)?)?;
        Ok(())
    }
}

/// A standalone HTML page with every plot's SVG inlined, in order.
/// Self-contained: no scripts, no external resources.
pub fn file_html(doc: &Document) -> Result<String, Error> {
    let mut html = String::with_capacity(64 * 1024);
    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\"/>\n");
    html.push_str(&format!("<title>{}</title>\n", escape(&doc.title)));
    html.push_str("<style>\n");
    html.push_str("body{font-family:Arial,Helvetica,sans-serif;margin:20px;background:#fff;}\n");
    html.push_str(".plot{margin:8px 0;}\n");
    html.push_str("</style>\n</head>\n<body>\n");
    for plot in doc.plots() {
        html.push_str("<div class=\"plot\">\n");
        html.push_str(&plot.svg_string()?);
        html.push_str("\n</div>\n");
    }
    html.push_str("</body>\n</html>\n");
    Ok(html)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
