use thiserror::Error;

/// Errors surfaced while assembling or rendering a scene.
#[derive(Debug, Error)]
pub enum Error {
    /// A glyph referenced a column the data source does not have.
    #[error("no column named {0:?} in data source")]
    MissingColumn(String),
    /// A glyph referenced a column of the wrong kind.
    #[error("column {name:?} is a {actual} column, expected {expected}")]
    ColumnType {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },
    /// A column was inserted whose length disagrees with the source.
    #[error("column {name:?} has {actual} rows, data source has {expected}")]
    ColumnLength {
        name: String,
        expected: usize,
        actual: usize,
    },
    /// Raster pixel data does not match its declared dimensions.
    #[error("raster data is {actual} bytes, dimensions require {expected}")]
    RasterSize { expected: usize, actual: usize },
    /// The render backend refused a draw call. The backend error is kept
    /// as text so this type stays `Send + Sync`.
    #[error("render: {0}")]
    Render(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("sample data: {0}")]
    Csv(#[from] csv::Error),
    #[error("sample data: {0}")]
    SampleData(String),
    #[error("icon decode: {0}")]
    ImageDecode(#[from] image::ImageError),
}

impl From<piet::Error> for Error {
    fn from(e: piet::Error) -> Self {
        Error::Render(e.to_string())
    }
}
