use serde::{
    de::Error,
    Deserialize
};
use thiserror::Error as ThisError;

use crate::roc::aurocerror::PartialAurocError;

#[derive(Debug, ThisError)]
pub enum ManagerError {
    #[error("{0}")]
    PartialAurocError(#[from] PartialAurocError),
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    #[error("{0}")]
    JsonParseError(#[from] serde_json::Error),
    #[error("key '{0}' not found")]
    NameNotFoundError(String),
    #[error("key '{0}' defined more than once")]
    DuplicateNameError(String)
}

impl ManagerError {
    pub fn from_json_or_json_parse_error <T> (json_value: serde_json::Value) -> Result<T, Self>
        where T : for<'a> Deserialize<'a> {
        serde_json::from_value(json_value).map_err(ManagerError::JsonParseError)
    }

    pub fn json_missing_field(field: &'static str) -> ManagerError {
        ManagerError::JsonParseError(serde_json::Error::missing_field(field))
    }

    pub fn map_elem_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFoundError(name.to_owned())
    }
}
