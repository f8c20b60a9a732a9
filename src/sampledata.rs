//! Bundled sample data: the November 2013 browser market-share table and
//! icon markers for the major browsers.

use once_cell::sync::Lazy;

use crate::data::Raster;
use crate::donut::{CategoryShare, SubShare};
use crate::error::Error;

const BROWSERS_CSV: &str = include_str!("../assets/browsers_nov_2013.csv");

const CHROME_ICON: &[u8] = include_bytes!("../assets/icons/chrome_32x32.png");
const FIREFOX_ICON: &[u8] = include_bytes!("../assets/icons/firefox_32x32.png");
const SAFARI_ICON: &[u8] = include_bytes!("../assets/icons/safari_32x32.png");
const OPERA_ICON: &[u8] = include_bytes!("../assets/icons/opera_32x32.png");
const IE_ICON: &[u8] = include_bytes!("../assets/icons/ie_32x32.png");

/// One row of the bundled table: a browser version and its market share.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionShare {
    pub browser: String,
    pub version: String,
    pub share: f64,
}

/// The bundled table, in CSV order.
pub fn browsers_nov_2013() -> &'static [VersionShare] {
    static TABLE: Lazy<Vec<VersionShare>> =
        Lazy::new(|| parse(BROWSERS_CSV).expect("bundled browser table parses"));
    &TABLE
}

/// Group rows by browser, keep browsers whose total share reaches
/// `min_share` (sorted by name), and fold the rest into a trailing
/// `"Other"` category with no breakdown.
pub fn aggregate(rows: &[VersionShare], min_share: f64) -> Vec<CategoryShare> {
    let mut totals: Vec<CategoryShare> = Vec::new();
    for row in rows {
        let sub = SubShare {
            label: row.version.clone(),
            value: row.share,
        };
        match totals.iter_mut().find(|c| c.label == row.browser) {
            Some(category) => {
                category.value += row.share;
                category.breakdown.push(sub);
            }
            None => totals.push(CategoryShare {
                label: row.browser.clone(),
                value: row.share,
                breakdown: vec![sub],
            }),
        }
    }

    let (mut kept, small): (Vec<_>, Vec<_>) =
        totals.into_iter().partition(|c| c.value >= min_share);
    kept.sort_by(|a, b| a.label.cmp(&b.label));
    let leftover: f64 = small.iter().map(|c| c.value).sum();
    if leftover > 0. {
        kept.push(CategoryShare {
            label: "Other".into(),
            value: leftover,
            breakdown: Vec::new(),
        });
    }
    kept
}

/// Decoded 32x32 icon for the five major browsers; `None` otherwise.
pub fn icon(browser: &str) -> Result<Option<Raster>, Error> {
    let bytes = match browser {
        "Chrome" => CHROME_ICON,
        "Firefox" => FIREFOX_ICON,
        "Safari" => SAFARI_ICON,
        "Opera" => OPERA_ICON,
        "IE" => IE_ICON,
        _ => return Ok(None),
    };
    let decoded = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = decoded.dimensions();
    let raster = Raster::new(width as usize, height as usize, decoded.into_raw())?;
    Ok(Some(raster))
}

fn parse(csv_text: &str) -> Result<Vec<VersionShare>, Error> {
    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = rows.len() + 2; // header is line 1
        let version = record
            .get(0)
            .ok_or_else(|| Error::SampleData(format!("line {line}: missing version")))?;
        let share = record
            .get(1)
            .ok_or_else(|| Error::SampleData(format!("line {line}: missing share")))?;
        let share: f64 = share
            .trim()
            .parse()
            .map_err(|_| Error::SampleData(format!("line {line}: bad share {share:?}")))?;
        // "Chrome 31" -> ("Chrome", "31"); no trailing number -> "0"
        let (browser, number) = match version.rsplit_once(' ') {
            Some((browser, number)) => (browser.to_owned(), number.to_owned()),
            None => (version.to_owned(), "0".to_owned()),
        };
        rows.push(VersionShare {
            browser,
            version: number,
            share,
        });
    }
    Ok(rows)
}
