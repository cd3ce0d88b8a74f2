use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot create archive at \"{path}\": {source}")]
    ContainerCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{kind} \"{id}\" is missing the loaded {relation} relation")]
    IncompleteEntity {
        kind: &'static str,
        id: String,
        relation: &'static str,
    },

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Ingredient cycle: {0}")]
    IngredientCycle(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
