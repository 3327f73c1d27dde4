use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProductError {
    #[error("product for index {index} overflows")]
    Overflow { index: usize },
}

pub type Result<T> = std::result::Result<T, ProductError>;
