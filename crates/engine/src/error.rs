use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Dataset error: {0}")]
    Dataset(#[from] dataset::DatasetError),

    #[error("Allocation generation error: {0}")]
    Allocator(#[from] allocator::AllocatorError),

    #[error("Analytics calculation error: {0}")]
    Analytics(#[from] analytics::AnalyticsError),

    #[error("Series table error: {0}")]
    Core(#[from] core_types::CoreError),

    #[error("Progress bar template error: {0}")]
    ProgressBarTemplate(String),
}

impl From<indicatif::style::TemplateError> for EngineError {
    fn from(error: indicatif::style::TemplateError) -> Self {
        EngineError::ProgressBarTemplate(error.to_string())
    }
}
