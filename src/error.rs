use thiserror::Error;

use crate::construct::Iri;
use crate::ontology::OntologyId;

#[derive(Error, Debug)]
pub enum OntostoreError {
    #[error("Invalid IRI: '{iri}'")]
    InvalidIri { iri: String },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Unresolved import {import} declared by {importer}")]
    UnresolvedImport { importer: OntologyId, import: Iri },
    #[error("Ontology already registered: {0}")]
    DuplicateOntology(OntologyId),
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, OntostoreError>;

// Helper conversions
impl From<config::ConfigError> for OntostoreError {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}
