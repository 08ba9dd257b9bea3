use thiserror::Error;

#[derive(Error, Debug)]
pub enum FacetzError {
    #[error("Item {item} has no value for dimension '{dimension}'")]
    MalformedItem { item: usize, dimension: &'static str },

    #[error("Unknown value '{value}' for dimension '{dimension}'")]
    UnknownValue {
        dimension: &'static str,
        value: String,
    },

    #[error("Unknown dimension: {0}")]
    UnknownDimension(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, FacetzError>;
