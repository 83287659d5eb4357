use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unparseable date '{0}' in price file")]
    InvalidDate(String),

    #[error("Unparseable price '{0}' in price file")]
    InvalidPrice(String),

    #[error("Unparseable change percentage '{0}' in price file")]
    InvalidChange(String),

    #[error("Duplicate date {0} in price series")]
    DuplicateDate(NaiveDate),

    #[error("Price series has no known price inside the analysis window")]
    EmptySeries,

    #[error("Series construction failed: {0}")]
    Series(#[from] core_types::CoreError),
}
