//! CSV reader for the destination file.

use std::io::Read;

use camino::Utf8Path;
use csv::{ReaderBuilder, StringRecord, Trim};
use discover_core::{Catalog, RawPlace};
use discover_fs::open_utf8_file;
use log::{debug, info, warn};

use crate::{DataLoadError, columns};

/// Load and prepare the catalog stored at `path`.
///
/// # Errors
/// Returns [`DataLoadError`] when the file cannot be opened, the header row
/// lacks a required column, or a record cannot be decoded.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use discover_data::load_catalog;
///
/// let catalog = load_catalog(Utf8Path::new("data/places_clean.csv"))
///     .expect("load catalog");
/// println!("{} destinations", catalog.len());
/// ```
pub fn load_catalog(path: &Utf8Path) -> Result<Catalog, DataLoadError> {
    let file = open_utf8_file(path).map_err(|source| DataLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = read_catalog(file)?;
    if catalog.is_empty() {
        warn!("catalog source {path} contains no records");
    }
    info!("loaded {} places from {path}", catalog.len());
    Ok(catalog)
}

/// Read and prepare a catalog from any CSV byte stream.
///
/// # Errors
/// See [`read_records`].
///
/// # Examples
/// ```
/// use discover_data::read_catalog;
///
/// let csv = "State,City,Name,Google review rating,Number of google review in lakhs,Best Time to visit\n\
///            Delhi,Delhi,Red Fort,4.5,1.6,Winter\n";
/// let catalog = read_catalog(csv.as_bytes()).expect("valid csv");
/// assert_eq!(catalog.find_by_name("red").map(|p| p.city()), Some("Delhi"));
/// ```
pub fn read_catalog<R: Read>(reader: R) -> Result<Catalog, DataLoadError> {
    read_records(reader).map(Catalog::from_records)
}

/// Read raw records without preparing them.
///
/// Numeric cells are trimmed; empty, unparsable, or non-finite values become
/// missing. Empty text cells become missing. Rows shorter than the header
/// are accepted and their absent cells treated as empty.
///
/// # Errors
/// Returns [`DataLoadError::Header`] or [`DataLoadError::MissingColumn`] for
/// an unusable header row and [`DataLoadError::Record`] for an undecodable
/// record.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<RawPlace>, DataLoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|source| DataLoadError::Header { source })?
        .clone();
    let layout = ColumnLayout::from_headers(&headers)?;

    let mut tally = CoercionTally::default();
    let mut records = Vec::new();
    for row in csv_reader.records() {
        let record = row.map_err(|source| DataLoadError::Record {
            line: source.position().map_or(0, csv::Position::line),
            source,
        })?;
        records.push(layout.raw_place(&record, &mut tally));
    }
    tally.report();
    Ok(records)
}

/// Positions of the known columns within the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnLayout {
    state: usize,
    city: usize,
    name: usize,
    rating: usize,
    review_volume: usize,
    best_time: usize,
    image_url: Option<usize>,
}

impl ColumnLayout {
    fn from_headers(headers: &StringRecord) -> Result<Self, DataLoadError> {
        let find = |column: &str| headers.iter().position(|header| header == column);
        let require = |column: &'static str| {
            find(column).ok_or(DataLoadError::MissingColumn { column })
        };
        Ok(Self {
            state: require(columns::STATE)?,
            city: require(columns::CITY)?,
            name: require(columns::NAME)?,
            rating: require(columns::RATING)?,
            review_volume: require(columns::REVIEW_VOLUME)?,
            best_time: require(columns::BEST_TIME)?,
            image_url: find(columns::IMAGE_URL),
        })
    }

    fn raw_place(&self, record: &StringRecord, tally: &mut CoercionTally) -> RawPlace {
        let line = record.position().map_or(0, csv::Position::line);
        RawPlace {
            name: text_cell(record, Some(self.name)),
            city: text_cell(record, Some(self.city)),
            state: text_cell(record, Some(self.state)),
            best_time: text_cell(record, Some(self.best_time)),
            rating: tally.number(record.get(self.rating), columns::RATING, line),
            review_volume: tally.number(
                record.get(self.review_volume),
                columns::REVIEW_VOLUME,
                line,
            ),
            image_url: text_cell(record, self.image_url),
        }
    }
}

fn text_cell(record: &StringRecord, column: Option<usize>) -> Option<String> {
    column
        .and_then(|index| record.get(index))
        .filter(|cell| !cell.is_empty())
        .map(str::to_owned)
}

/// Counts numeric cells that held text and were coerced to missing.
#[derive(Debug, Default)]
struct CoercionTally {
    rating: usize,
    review_volume: usize,
}

impl CoercionTally {
    fn number(&mut self, cell: Option<&str>, column: &'static str, line: u64) -> Option<f64> {
        let trimmed = cell.map_or("", str::trim);
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(value),
            _ => {
                debug!(
                    "line {line}: {column} value {trimmed:?} is not a number; treating as missing"
                );
                if column == columns::RATING {
                    self.rating += 1;
                } else {
                    self.review_volume += 1;
                }
                None
            }
        }
    }

    fn report(&self) {
        if self.rating > 0 {
            warn!(
                "coerced {} non-numeric {:?} cells to missing",
                self.rating,
                columns::RATING
            );
        }
        if self.review_volume > 0 {
            warn!(
                "coerced {} non-numeric {:?} cells to missing",
                self.review_volume,
                columns::REVIEW_VOLUME
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const HEADER: &str = "State,City,Name,Google review rating,Number of google review in lakhs,Best Time to visit,image_url";

    fn parse(body: &str) -> Result<Vec<RawPlace>, DataLoadError> {
        read_records(format!("{HEADER}\n{body}").as_bytes())
    }

    #[rstest]
    fn reads_all_fields() {
        let records =
            parse("Uttar Pradesh,Agra,Taj Mahal,4.6,2.1,October to March,https://img/taj.jpg\n")
                .expect("valid csv");
        let expected = RawPlace::new("Taj Mahal", "Agra", "Uttar Pradesh")
            .with_rating(4.6)
            .with_review_volume(2.1)
            .with_best_time("October to March")
            .with_image_url("https://img/taj.jpg");
        assert_eq!(records, vec![expected]);
    }

    #[rstest]
    #[case("4.5", Some(4.5))]
    #[case(" 4.5 ", Some(4.5))]
    #[case("", None)]
    #[case("n/a", None)]
    #[case("NaN", None)]
    #[case("inf", None)]
    fn coerces_rating_cells(#[case] cell: &str, #[case] expected: Option<f64>) {
        let records =
            parse(&format!("Delhi,Delhi,Red Fort,{cell},1.0,Winter,\n")).expect("valid csv");
        let rating = records.first().and_then(|raw| raw.rating);
        assert_eq!(rating, expected);
    }

    #[rstest]
    fn empty_text_cells_are_missing() {
        let records = parse("Delhi,,Red Fort,4.5,1.0,,\n").expect("valid csv");
        let raw = records.first().expect("one record");
        assert_eq!(raw.city, None);
        assert_eq!(raw.best_time, None);
        assert_eq!(raw.image_url, None);
    }

    #[rstest]
    fn short_rows_are_padded_with_missing_cells() {
        let records = parse("Delhi,Delhi,Red Fort\n").expect("flexible rows");
        let raw = records.first().expect("one record");
        assert_eq!(raw.name.as_deref(), Some("Red Fort"));
        assert_eq!(raw.rating, None);
        assert_eq!(raw.best_time, None);
    }

    #[rstest]
    fn image_column_is_optional() {
        let csv = "Name,City,State,Best Time to visit,Google review rating,Number of google review in lakhs\n\
                   Charminar,Hyderabad,Telangana,Winter,4.4,0.5\n";
        let records = read_records(csv.as_bytes()).expect("columns in any order");
        let raw = records.first().expect("one record");
        assert_eq!(raw.state.as_deref(), Some("Telangana"));
        assert_eq!(raw.image_url, None);
    }

    #[rstest]
    #[case("City,Name,Google review rating,Number of google review in lakhs,Best Time to visit", columns::STATE)]
    #[case("State,City,Name,Number of google review in lakhs,Best Time to visit", columns::RATING)]
    #[case("", columns::STATE)]
    fn missing_required_column_is_rejected(#[case] header: &str, #[case] expected: &str) {
        let err = read_records(format!("{header}\n").as_bytes()).expect_err("missing column");
        match err {
            DataLoadError::MissingColumn { column } => assert_eq!(column, expected),
            other => panic!("expected MissingColumn, found {other:?}"),
        }
    }

    #[rstest]
    fn headers_are_trimmed() {
        let csv = " State , City , Name , Google review rating , Number of google review in lakhs , Best Time to visit \n\
                   Goa,Panaji,Goa Beach,4.2,40,Winter\n";
        let records = read_records(csv.as_bytes()).expect("trimmed headers");
        assert_eq!(records.len(), 1);
    }
}
