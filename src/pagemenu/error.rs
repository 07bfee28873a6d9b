use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaginationError {
    #[error("{}", out_of_range_message(*page, *total_pages))]
    PageOutOfRange { page: usize, total_pages: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl PaginationError {
    /// True for the single rendering error, as opposed to configuration failures.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, PaginationError::PageOutOfRange { .. })
    }
}

fn out_of_range_message(page: usize, total_pages: usize) -> String {
    if page < 1 {
        format!("Page index must be >= 1 (requested {})", page)
    } else {
        format!(
            "Page index must be <= the total number of pages ({}), requested {}",
            total_pages, page
        )
    }
}

pub type Result<T> = std::result::Result<T, PaginationError>;
