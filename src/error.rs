use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Dataset had no bars. Hosts render the "no data" placeholder instead.
    #[error("dataset is empty")]
    EmptyDataset,

    #[error("invalid datum at index {index} (`{label}`): {reason}")]
    InvalidDatum {
        index: usize,
        label: String,
        reason: String,
    },

    /// A single quantity value could not become a datum; no row context.
    #[error("invalid quantity for `{label}`: {reason}")]
    InvalidQuantity { label: String, reason: String },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl ChartError {
    /// Attaches the dataset row position to a single-value quantity error.
    #[must_use]
    pub fn at_row(self, index: usize) -> Self {
        match self {
            Self::InvalidQuantity { label, reason } => Self::InvalidDatum {
                index,
                label,
                reason,
            },
            other => other,
        }
    }
}
