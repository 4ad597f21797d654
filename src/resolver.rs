//! Imports closure resolution.
//!
//! Starting at a root ontology, the resolver walks import declarations
//! breadth first. Each declared IRI is first checked against the ignored
//! imports of the [`LoaderConfiguration`], then resolved through an
//! [`OntologyLookup`]. Ontologies already reached are not expanded again, which
//! is all that is needed to get through cycles in the import graph.
//!
//! The resulting [`ImportsClosure`] lists every reachable ontology once, root
//! first, and answers the same queries as a single ontology by merging the
//! per-ontology results. Each ontology is read under its own lock, so a
//! closure query is exactly consistent within one ontology but only
//! eventually consistent across them.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::axiom::{Axiom, AxiomType};
use crate::configuration::{LoaderConfiguration, MissingImportHandlingStrategy};
use crate::construct::{AnnotationSubject, AnonymousIndividual, Entity, Iri, ObjectPropertyExpression};
use crate::error::{OntostoreError, Result};
use crate::keeper::{AxiomSet, OtherHasher};
use crate::ontology::{AxiomCollection, Ontology, OntologyId};

/// Resolves an import IRI to an ontology that is already loaded.
pub trait OntologyLookup {
    fn lookup(&self, iri: &Iri) -> Option<Arc<Ontology>>;
}

impl<F> OntologyLookup for F
where
    F: Fn(&Iri) -> Option<Arc<Ontology>>,
{
    fn lookup(&self, iri: &Iri) -> Option<Arc<Ontology>> {
        self(iri)
    }
}

/// An import that could not be resolved and was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SkippedImport {
    pub importer: OntologyId,
    pub import: Iri,
}

pub struct ImportResolver<'a, L: OntologyLookup + ?Sized> {
    lookup: &'a L,
    configuration: &'a LoaderConfiguration,
}

impl<'a, L: OntologyLookup + ?Sized> ImportResolver<'a, L> {
    pub fn new(lookup: &'a L, configuration: &'a LoaderConfiguration) -> Self {
        Self {
            lookup,
            configuration,
        }
    }

    pub fn resolve(&self, root: &Arc<Ontology>) -> Result<ImportsClosure> {
        let mut closure = ImportsClosure::empty();
        let mut visited: HashSet<u64, OtherHasher> = HashSet::default();
        let mut pending = VecDeque::new();
        visited.insert(root.handle());
        pending.push_back(Arc::clone(root));

        while let Some(ontology) = pending.pop_front() {
            for import in ontology.imports() {
                if self.configuration.is_ignored_import(&import) {
                    debug!(importer = %ontology.id(), %import, "ignoring import");
                    if !closure.ignored.contains(&import) {
                        closure.ignored.push(import);
                    }
                    continue;
                }
                let Some(imported) = self.lookup.lookup(&import) else {
                    match self.configuration.missing_import_handling_strategy() {
                        MissingImportHandlingStrategy::Fail => {
                            return Err(OntostoreError::UnresolvedImport {
                                importer: ontology.id().clone(),
                                import,
                            });
                        }
                        MissingImportHandlingStrategy::Skip => {
                            warn!(importer = %ontology.id(), %import, "skipping unresolved import");
                            closure.skipped.push(SkippedImport {
                                importer: ontology.id().clone(),
                                import,
                            });
                            continue;
                        }
                    }
                };
                if visited.insert(imported.handle()) {
                    debug!(importer = %ontology.id(), imported = %imported.id(), "import resolved");
                    pending.push_back(imported);
                }
            }
            closure.ontologies.push(ontology);
        }
        debug!(
            root = %root.id(),
            ontologies = closure.ontologies.len(),
            skipped = closure.skipped.len(),
            "imports closure resolved"
        );
        Ok(closure)
    }
}

// ------------- ImportsClosure -------------
/// A snapshot of the ontologies reachable from a root, root first, each once.
#[derive(Debug, Clone)]
pub struct ImportsClosure {
    ontologies: Vec<Arc<Ontology>>,
    skipped: Vec<SkippedImport>,
    ignored: Vec<Iri>,
}

impl ImportsClosure {
    fn empty() -> Self {
        Self {
            ontologies: Vec::new(),
            skipped: Vec::new(),
            ignored: Vec::new(),
        }
    }
    /// A closure holding only `ontology`, for queries that exclude imports.
    pub fn single(ontology: &Arc<Ontology>) -> Self {
        Self {
            ontologies: vec![Arc::clone(ontology)],
            skipped: Vec::new(),
            ignored: Vec::new(),
        }
    }
    pub fn root(&self) -> Option<&Arc<Ontology>> {
        self.ontologies.first()
    }
    pub fn ontologies(&self) -> &[Arc<Ontology>] {
        &self.ontologies
    }
    pub fn ids(&self) -> Vec<OntologyId> {
        self.ontologies.iter().map(|o| o.id().clone()).collect()
    }
    pub fn contains(&self, ontology: &Ontology) -> bool {
        self.ontologies.iter().any(|o| o.handle() == ontology.handle())
    }
    pub fn len(&self) -> usize {
        self.ontologies.len()
    }
    pub fn is_empty(&self) -> bool {
        self.ontologies.is_empty()
    }
    pub fn skipped_imports(&self) -> &[SkippedImport] {
        &self.skipped
    }
    pub fn ignored_imports(&self) -> &[Iri] {
        &self.ignored
    }

    // the union deduplicates exactly equal axioms held by several ontologies
    fn merged(&self, query: impl Fn(&Ontology) -> AxiomSet) -> AxiomSet {
        let mut merged = AxiomSet::default();
        for ontology in &self.ontologies {
            merged.extend(query(ontology.as_ref()));
        }
        merged
    }
}

impl AxiomCollection for ImportsClosure {
    fn axioms(&self) -> AxiomSet {
        self.merged(|o| o.axioms())
    }
    fn axiom_count(&self) -> usize {
        match self.ontologies.as_slice() {
            [only] => only.axiom_count(),
            _ => self.axioms().len(),
        }
    }
    fn logical_axioms(&self) -> AxiomSet {
        self.merged(|o| o.logical_axioms())
    }
    fn logical_axiom_count(&self) -> usize {
        match self.ontologies.as_slice() {
            [only] => only.logical_axiom_count(),
            _ => self.logical_axioms().len(),
        }
    }
    fn axioms_by_type(&self, kind: AxiomType) -> AxiomSet {
        self.merged(|o| o.axioms_by_type(kind))
    }
    fn axiom_count_by_type(&self, kind: AxiomType) -> usize {
        match self.ontologies.as_slice() {
            [only] => only.axiom_count_by_type(kind),
            _ => self.axioms_by_type(kind).len(),
        }
    }
    fn contains_axiom(&self, axiom: &Axiom) -> bool {
        self.ontologies.iter().any(|o| o.contains_axiom(axiom))
    }
    fn contains_axiom_ignoring_annotations(&self, axiom: &Axiom) -> bool {
        self.ontologies
            .iter()
            .any(|o| o.contains_axiom_ignoring_annotations(axiom))
    }
    fn axioms_ignoring_annotations(&self, axiom: &Axiom) -> AxiomSet {
        self.merged(|o| o.axioms_ignoring_annotations(axiom))
    }
    fn referencing_axioms(&self, entity: &Entity) -> AxiomSet {
        self.merged(|o| o.referencing_axioms(entity))
    }
    fn referencing_anonymous(&self, individual: &AnonymousIndividual) -> AxiomSet {
        self.merged(|o| o.referencing_anonymous(individual))
    }
    fn describing_axioms(&self, entity: &Entity) -> AxiomSet {
        self.merged(|o| o.describing_axioms(entity))
    }
    fn describing_property_expression(&self, property: &ObjectPropertyExpression) -> AxiomSet {
        self.merged(|o| o.describing_property_expression(property))
    }
    fn describing_anonymous(&self, individual: &AnonymousIndividual) -> AxiomSet {
        self.merged(|o| o.describing_anonymous(individual))
    }
    fn annotation_assertion_axioms(&self, subject: &AnnotationSubject) -> AxiomSet {
        self.merged(|o| o.annotation_assertion_axioms(subject))
    }
}
