//! Declarative donut-chart scenes rendered to standalone HTML.
//!
//! Tabular data goes into [`ColumnDataSource`]s, glyphs ([`Wedge`],
//! [`AnnularWedge`], [`Text`], [`Image`]) describe marks whose properties
//! are literals or column references, a [`Plot`] pairs glyphs with their
//! sources, and a [`Document`] serializes everything to a self-contained
//! HTML page.
//!
//! The high-level entry point is [`DonutChart`], which assembles the
//! classic two-ring market-share donut from aggregated category shares.

pub mod color;
pub mod data;
pub mod donut;
mod embed;
mod error;
pub mod geometry;
pub mod glyph;
pub mod plot;
pub mod render;
pub mod sampledata;

pub use color::{Color, ColorPalette, CyclePalette};
pub use data::{Column, ColumnDataSource, Raster, Spec};
pub use donut::{CategoryShare, DonutChart, DonutStyle, SubShare, DARK_STYLE, DEFAULT_STYLE};
pub use embed::file_html;
pub use error::Error;
pub use glyph::{
    AnnularWedge, Glyph, Image, Stroke, Text, TextAlign, TextBaseline, TextStyle, Wedge,
};
pub use plot::{Document, GlyphRenderer, Plot, Range1d};
pub use render::render_plot;
