use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    IndexOutOfBounds(usize, usize),
    LengthMismatch(usize, usize),
    MatrixDimensionMismatch((usize, usize), (usize, usize)),
    IncompatibleShapes(usize, usize),
    ImageDimensionMismatch(String, String),
    ScaleFactorOutOfRange(f64),
    InvalidResizeTarget(u32, u32),
    UnsupportedChannelCount(u8),
    MissingSecondInputFile(&'static str),
    TokenStreamEnded(usize, usize),
    ParsingOfTokenFailed(String),
    FailedToDecodeImage(String, image::ImageError),
    FailedToEncodeImage(String, image::ImageError),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfBounds(index, length) => {
                write!(f, "Index {} is out of bounds for length {}", index, length)
            }
            Self::LengthMismatch(lhs, rhs) => {
                write!(
                    f,
                    "Arrays of length {} and {} cannot be combined elementwise",
                    lhs, rhs
                )
            }
            Self::MatrixDimensionMismatch((lhs_rows, lhs_cols), (rhs_rows, rhs_cols)) => {
                write!(
                    f,
                    "Matrix dimensions {}x{} and {}x{} do not match",
                    lhs_rows, lhs_cols, rhs_rows, rhs_cols
                )
            }
            Self::IncompatibleShapes(lhs, rhs) => {
                write!(
                    f,
                    "Shared dimension mismatch: left operand provides {}, right operand has {}",
                    lhs, rhs
                )
            }
            Self::ImageDimensionMismatch(lhs, rhs) => {
                write!(f, "Image shapes {} and {} do not match", lhs, rhs)
            }
            Self::ScaleFactorOutOfRange(factor) => {
                write!(
                    f,
                    "Scale factor {} is outside the allowed range of 0.0 to 1.0",
                    factor
                )
            }
            Self::InvalidResizeTarget(width, height) => {
                write!(
                    f,
                    "Resize target {}x{} must have non-zero width and height",
                    width, height
                )
            }
            Self::UnsupportedChannelCount(channels) => {
                write!(f, "Images with {} channels are not supported", channels)
            }
            Self::MissingSecondInputFile(operation) => {
                write!(
                    f,
                    "The '{}' operation requires a second input file",
                    operation
                )
            }
            Self::TokenStreamEnded(parsed, expected) => {
                write!(
                    f,
                    "Token stream ended after {} of {} expected values",
                    parsed, expected
                )
            }
            Self::ParsingOfTokenFailed(token) => {
                write!(f, "Parsing of token '{}' as a value failed", token)
            }
            Self::FailedToDecodeImage(path, error) => {
                write!(f, "Unable to decode image file '{}': {}", path, error)
            }
            Self::FailedToEncodeImage(path, error) => {
                write!(f, "Unable to encode image file '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for Error {}
