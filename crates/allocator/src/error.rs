use thiserror::Error;

#[derive(Error, Debug)]
pub enum AllocatorError {
    #[error("Allocation generation failed: {0}")]
    Generation(String),
}
