//! In-memory named-column tables that glyphs resolve their properties
//! against.

use std::collections::BTreeMap;
use std::fmt;

use crate::color::Color;
use crate::error::Error;

/// Decoded RGBA pixels, row-major, four bytes per pixel.
#[derive(Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Raster {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, Error> {
        let expected = width * height * 4;
        if data.len() != expected {
            return Err(Error::RasterSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for Raster {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// One named column of a data source.
#[derive(Debug, Clone)]
pub enum Column {
    Number(Vec<f64>),
    Text(Vec<String>),
    Color(Vec<Color>),
    /// `None` rows draw nothing.
    Image(Vec<Option<Raster>>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Number(v) => v.len(),
            Column::Text(v) => v.len(),
            Column::Color(v) => v.len(),
            Column::Image(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Column::Number(_) => "number",
            Column::Text(_) => "text",
            Column::Color(_) => "color",
            Column::Image(_) => "image",
        }
    }
}

/// A glyph property: either one literal used for every row, or the name of
/// a column looked up per row.
#[derive(Debug, Clone)]
pub enum Spec<T> {
    Value(T),
    Field(String),
}

impl<T> Spec<T> {
    pub fn field(name: impl Into<String>) -> Self {
        Spec::Field(name.into())
    }
}

impl<T> From<T> for Spec<T> {
    fn from(value: T) -> Self {
        Spec::Value(value)
    }
}

/// A named-column table. All columns have the same length; the row count
/// of the table is the length of its columns.
#[derive(Debug, Default, Clone)]
pub struct ColumnDataSource {
    columns: BTreeMap<String, Column>,
}

impl ColumnDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.columns.values().next().map_or(0, Column::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    pub fn insert_number(
        &mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<(), Error> {
        self.insert(name.into(), Column::Number(values))
    }

    pub fn insert_text(
        &mut self,
        name: impl Into<String>,
        values: Vec<String>,
    ) -> Result<(), Error> {
        self.insert(name.into(), Column::Text(values))
    }

    pub fn insert_color(
        &mut self,
        name: impl Into<String>,
        values: Vec<Color>,
    ) -> Result<(), Error> {
        self.insert(name.into(), Column::Color(values))
    }

    pub fn insert_image(
        &mut self,
        name: impl Into<String>,
        values: Vec<Option<Raster>>,
    ) -> Result<(), Error> {
        self.insert(name.into(), Column::Image(values))
    }

    fn insert(&mut self, name: String, column: Column) -> Result<(), Error> {
        if !self.columns.is_empty() && column.len() != self.len() {
            return Err(Error::ColumnLength {
                name,
                expected: self.len(),
                actual: column.len(),
            });
        }
        self.columns.insert(name, column);
        Ok(())
    }

    pub(crate) fn numbers(&self, spec: &Spec<f64>) -> Result<Vec<f64>, Error> {
        match spec {
            Spec::Value(v) => Ok(vec![*v; self.len()]),
            Spec::Field(name) => match self.column(name) {
                Some(Column::Number(v)) => Ok(v.clone()),
                Some(other) => Err(type_error(name, "number", other)),
                None => Err(Error::MissingColumn(name.clone())),
            },
        }
    }

    pub(crate) fn colors(&self, spec: &Spec<Color>) -> Result<Vec<Color>, Error> {
        match spec {
            Spec::Value(v) => Ok(vec![*v; self.len()]),
            Spec::Field(name) => match self.column(name) {
                Some(Column::Color(v)) => Ok(v.clone()),
                Some(other) => Err(type_error(name, "color", other)),
                None => Err(Error::MissingColumn(name.clone())),
            },
        }
    }

    pub(crate) fn texts(&self, spec: &Spec<String>) -> Result<Vec<String>, Error> {
        match spec {
            Spec::Value(v) => Ok(vec![v.clone(); self.len()]),
            Spec::Field(name) => match self.column(name) {
                Some(Column::Text(v)) => Ok(v.clone()),
                Some(other) => Err(type_error(name, "text", other)),
                None => Err(Error::MissingColumn(name.clone())),
            },
        }
    }

    pub(crate) fn images(&self, name: &str) -> Result<&[Option<Raster>], Error> {
        match self.column(name) {
            Some(Column::Image(v)) => Ok(v),
            Some(other) => Err(type_error(name, "image", other)),
            None => Err(Error::MissingColumn(name.to_owned())),
        }
    }
}

fn type_error(name: &str, expected: &'static str, actual: &Column) -> Error {
    Error::ColumnType {
        name: name.to_owned(),
        expected,
        actual: actual.kind(),
    }
}
