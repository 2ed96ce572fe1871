#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown calendar unit `{name}`")]
    UnknownUnit { name: String },
    #[error("invalid {unit} step amount {amount}")]
    InvalidStepAmount { unit: &'static str, amount: f64 },
    #[error("axis tick config field `{key}` must be {expected}")]
    InvalidConfig { key: String, expected: &'static str },
    #[error("axis tick config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
