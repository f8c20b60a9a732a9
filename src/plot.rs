//! Plot and document assembly: glyph renderers paired with their data
//! sources inside a data-space coordinate frame.

use std::rc::Rc;

use crate::color::{self, Color};
use crate::data::ColumnDataSource;
use crate::glyph::{Glyph, TextStyle};

/// A closed data-space interval along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range1d {
    pub start: f64,
    pub end: f64,
}

impl Range1d {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

/// A glyph bound to the data source its field specs resolve against.
#[derive(Debug, Clone)]
pub struct GlyphRenderer {
    pub source: Rc<ColumnDataSource>,
    pub glyph: Glyph,
}

/// A renderable scene: a coordinate frame plus an ordered list of glyph
/// renderers. Renderers paint in insertion order, later ones on top.
#[derive(Debug, Clone)]
pub struct Plot {
    pub title: Option<String>,
    pub title_style: TextStyle,
    pub x_range: Range1d,
    pub y_range: Range1d,
    pub width: usize,
    pub height: usize,
    pub background: Color,
    renderers: Vec<GlyphRenderer>,
}

impl Plot {
    pub fn new(x_range: Range1d, y_range: Range1d, width: usize, height: usize) -> Self {
        Self {
            title: None,
            title_style: TextStyle::default().with_bold(true),
            x_range,
            y_range,
            width,
            height,
            background: color::WHITE,
            renderers: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append a renderer; `source` is shared, so several glyphs can read
    /// the same table.
    pub fn add_glyph(&mut self, source: Rc<ColumnDataSource>, glyph: impl Into<Glyph>) {
        self.renderers.push(GlyphRenderer {
            source,
            glyph: glyph.into(),
        });
    }

    pub fn renderers(&self) -> &[GlyphRenderer] {
        &self.renderers
    }
}

/// An ordered collection of plots plus the page title used when the
/// document is embedded in HTML.
#[derive(Debug, Default, Clone)]
pub struct Document {
    pub title: String,
    plots: Vec<Plot>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            plots: Vec::new(),
        }
    }

    pub fn add(&mut self, plot: Plot) {
        self.plots.push(plot);
    }

    pub fn plots(&self) -> &[Plot] {
        &self.plots
    }
}
