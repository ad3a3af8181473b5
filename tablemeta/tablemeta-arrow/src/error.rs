use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrowConvertError {
    #[error("fixed[{length}] exceeds the maximum Arrow fixed-size binary width")]
    FixedTooWide { length: u32 },
    #[error("decimal({precision}, {scale}) cannot be represented as an Arrow decimal")]
    UnsupportedDecimal { precision: u32, scale: u32 },
}
