//! Fixture lists from CSV (football-data.co.uk style exports).
//!
//! Only the `HomeTeam` and `AwayTeam` columns are read; every other column is
//! ignored. Rows missing either team are skipped.

use crate::domain::standings::Fixture;
use std::io::Read;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureCsvError {
    #[error("unable to parse CSV: {0}")]
    Csv(#[from] csv::Error),
}

pub fn read_fixtures<R: Read>(reader: R) -> Result<Vec<Fixture>, FixtureCsvError> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let home_col = headers.iter().position(|h| h == "HomeTeam");
    let away_col = headers.iter().position(|h| h == "AwayTeam");

    let mut fixtures = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let home = home_col.and_then(|i| record.get(i)).filter(|s| !s.is_empty());
        let away = away_col.and_then(|i| record.get(i)).filter(|s| !s.is_empty());
        if let (Some(home), Some(away)) = (home, away) {
            fixtures.push(Fixture::new(home, away));
        }
    }
    Ok(fixtures)
}
