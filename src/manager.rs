use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use crate::axiom::Axiom;
use crate::configuration::LoaderConfiguration;
use crate::construct::{AnonymousIndividual, Iri};
use crate::error::{OntostoreError, Result};
use crate::keeper::OtherHasher;
use crate::ontology::{Imports, Ontology, OntologyId};
use crate::resolver::{ImportResolver, ImportsClosure, OntologyLookup};

/// What a document loader hands over after parsing: the ontology's id, its
/// import declarations and its axioms.
#[derive(Debug, Clone, Default)]
pub struct OntologyDocument {
    pub id: OntologyId,
    /// Where the document was read from, if that differs from the ontology IRI.
    pub document_iri: Option<Iri>,
    pub imports: Vec<Iri>,
    pub axioms: Vec<Axiom>,
}

impl OntologyDocument {
    pub fn new(id: OntologyId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

// Ontologies are identified by their full id; the IRI maps are secondary.
#[derive(Debug, Default)]
struct Registry {
    // in registration order
    ontologies: Vec<Arc<Ontology>>,
    by_iri: HashMap<Iri, Vec<Arc<Ontology>>, OtherHasher>,
    by_version: HashMap<Iri, Arc<Ontology>, OtherHasher>,
    by_document: HashMap<Iri, Arc<Ontology>, OtherHasher>,
}

impl Registry {
    fn is_taken(&self, id: &OntologyId, document_iri: Option<&Iri>) -> bool {
        let same_id = !id.is_anonymous() && self.ontologies.iter().any(|kept| kept.id() == id);
        same_id || document_iri.is_some_and(|iri| self.by_document.contains_key(iri))
    }

    // A version IRI or document IRI names one ontology exactly. An ontology IRI
    // shared by several versions resolves to the unversioned one if present,
    // otherwise to the first registered.
    fn resolve(&self, iri: &Iri) -> Option<Arc<Ontology>> {
        if let Some(ontology) = self.by_version.get(iri).or_else(|| self.by_document.get(iri)) {
            return Some(Arc::clone(ontology));
        }
        let candidates = self.by_iri.get(iri)?;
        candidates
            .iter()
            .find(|candidate| candidate.id().version_iri().is_none())
            .or_else(|| candidates.first())
            .cloned()
    }
}

// ------------- OntologyManager -------------
// Owns the loaded ontologies and lends them out for queries and imports resolution.
#[derive(Debug, Default)]
pub struct OntologyManager {
    registry: RwLock<Registry>,
    configuration: RwLock<LoaderConfiguration>,
    node_ids: AtomicU64,
}

impl OntologyManager {
    pub fn new(configuration: LoaderConfiguration) -> Self {
        Self {
            registry: RwLock::default(),
            configuration: RwLock::new(configuration),
            node_ids: AtomicU64::new(0),
        }
    }
    pub fn configuration(&self) -> LoaderConfiguration {
        self.configuration
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
    pub fn set_configuration(&self, configuration: LoaderConfiguration) {
        *self
            .configuration
            .write()
            .unwrap_or_else(PoisonError::into_inner) = configuration;
    }

    pub fn create_ontology(&self, id: OntologyId) -> Result<Arc<Ontology>> {
        self.register(Ontology::new(id), None)
    }

    /// Registers an ontology under its id and, when given, its document IRI.
    /// Fails if an ontology with an equal id or the same document IRI is
    /// already registered. Anonymous ontologies never clash by id.
    pub fn register(&self, ontology: Ontology, document_iri: Option<Iri>) -> Result<Arc<Ontology>> {
        let ontology = Arc::new(ontology);
        let mut registry = self.registry.write().unwrap_or_else(PoisonError::into_inner);
        if registry.is_taken(ontology.id(), document_iri.as_ref()) {
            return Err(OntostoreError::DuplicateOntology(ontology.id().clone()));
        }
        if let Some(iri) = ontology.id().iri() {
            registry
                .by_iri
                .entry(iri.clone())
                .or_default()
                .push(Arc::clone(&ontology));
        }
        if let Some(version_iri) = ontology.id().version_iri() {
            registry
                .by_version
                .entry(version_iri.clone())
                .or_insert_with(|| Arc::clone(&ontology));
        }
        if let Some(document_iri) = document_iri {
            registry.by_document.insert(document_iri, Arc::clone(&ontology));
        }
        registry.ontologies.push(Arc::clone(&ontology));
        info!(ontology = %ontology.id(), "ontology created");
        Ok(ontology)
    }

    /// Creates an ontology from a loader's document. Pure annotation axioms are
    /// dropped when the configuration says not to load them.
    pub fn load_document(&self, document: OntologyDocument) -> Result<Arc<Ontology>> {
        let configuration = self.configuration();
        let ontology = self.register(Ontology::new(document.id), document.document_iri)?;
        for import in document.imports {
            ontology.add_import(import);
        }
        let offered = document.axioms.len();
        let added = ontology.insert_all(
            document
                .axioms
                .into_iter()
                .filter(|axiom| configuration.is_load_annotation_axioms() || !axiom.is_annotation_axiom()),
        );
        info!(ontology = %ontology.id(), offered, added, "document loaded");
        Ok(ontology)
    }

    /// The ontology named by `iri`, taken as a version IRI, document IRI or
    /// ontology IRI in that order.
    pub fn ontology(&self, iri: &Iri) -> Option<Arc<Ontology>> {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .resolve(iri)
    }
    /// The ontology with exactly this id, anonymous ones excluded.
    pub fn ontology_by_id(&self, id: &OntologyId) -> Option<Arc<Ontology>> {
        if id.is_anonymous() {
            return None;
        }
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .ontologies
            .iter()
            .find(|kept| kept.id() == id)
            .cloned()
    }
    pub fn contains_ontology(&self, iri: &Iri) -> bool {
        self.ontology(iri).is_some()
    }
    pub fn ontologies(&self) -> Vec<Arc<Ontology>> {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .ontologies
            .clone()
    }
    /// Discards the ontology along with its axioms once the last handle is dropped.
    pub fn remove_ontology(&self, ontology: &Ontology) -> bool {
        let mut registry = self.registry.write().unwrap_or_else(PoisonError::into_inner);
        let before = registry.ontologies.len();
        registry
            .ontologies
            .retain(|kept| kept.handle() != ontology.handle());
        let handle = ontology.handle();
        registry.by_iri.retain(|_, versions| {
            versions.retain(|kept| kept.handle() != handle);
            !versions.is_empty()
        });
        registry.by_version.retain(|_, kept| kept.handle() != handle);
        registry.by_document.retain(|_, kept| kept.handle() != handle);
        let removed = registry.ontologies.len() != before;
        if removed {
            info!(ontology = %ontology.id(), "ontology removed");
        }
        removed
    }

    /// Mints an anonymous individual with a node id unique to this manager.
    pub fn create_anonymous_individual(&self) -> AnonymousIndividual {
        AnonymousIndividual::generated(self.node_ids.fetch_add(1, Ordering::Relaxed) + 1)
    }

    pub fn imports_closure(&self, ontology: &Arc<Ontology>) -> Result<ImportsClosure> {
        let configuration = self.configuration();
        ImportResolver::new(self, &configuration).resolve(ontology)
    }

    /// What a query should cover: the ontology alone, or its imports closure.
    pub fn scope(&self, ontology: &Arc<Ontology>, imports: Imports) -> Result<ImportsClosure> {
        match imports {
            Imports::Excluded => Ok(ImportsClosure::single(ontology)),
            Imports::Included => self.imports_closure(ontology),
        }
    }
}

impl OntologyLookup for OntologyManager {
    fn lookup(&self, iri: &Iri) -> Option<Arc<Ontology>> {
        self.ontology(iri)
    }
}
