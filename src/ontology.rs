//! Ontologies: an identifier, a set of axioms and a set of direct imports.
//!
//! The axioms live in an [`AxiomKeeper`] behind a reader-writer lock. Every
//! insert or remove takes the write lock once and updates the axiom set and all
//! lookups before releasing it, so readers never observe a half-applied change.
//! Queries copy their results out while holding the read lock.
//!
//! Imports are references by IRI, not ownership; they are resolved lazily by
//! [`crate::resolver::ImportResolver`].

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::axiom::{Axiom, AxiomType};
use crate::construct::{AnnotationSubject, AnonymousIndividual, Entity, Iri, ObjectPropertyExpression};
use crate::keeper::{AxiomKeeper, AxiomSet};

// ------------- OntologyId -------------
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OntologyId {
    iri: Option<Iri>,
    version_iri: Option<Iri>,
}
impl OntologyId {
    pub fn anonymous() -> Self {
        Self::default()
    }
    pub fn new(iri: Iri) -> Self {
        Self {
            iri: Some(iri),
            version_iri: None,
        }
    }
    pub fn with_version(iri: Iri, version_iri: Iri) -> Self {
        Self {
            iri: Some(iri),
            version_iri: Some(version_iri),
        }
    }
    pub fn iri(&self) -> Option<&Iri> {
        self.iri.as_ref()
    }
    pub fn version_iri(&self) -> Option<&Iri> {
        self.version_iri.as_ref()
    }
    pub fn is_anonymous(&self) -> bool {
        self.iri.is_none()
    }
}
impl fmt::Display for OntologyId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.iri, &self.version_iri) {
            (Some(iri), Some(version)) => write!(f, "{iri} {version}"),
            (Some(iri), None) => write!(f, "{iri}"),
            _ => f.write_str("<anonymous ontology>"),
        }
    }
}

/// Whether a query covers only the ontology itself or its whole imports closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Imports {
    Excluded,
    Included,
}
impl From<bool> for Imports {
    fn from(include_imports_closure: bool) -> Self {
        if include_imports_closure {
            Self::Included
        } else {
            Self::Excluded
        }
    }
}

/// The read side of an axiom store. Every returned set is a copy.
pub trait AxiomCollection {
    fn axioms(&self) -> AxiomSet;
    fn axiom_count(&self) -> usize;
    fn logical_axioms(&self) -> AxiomSet;
    fn logical_axiom_count(&self) -> usize;
    fn axioms_by_type(&self, kind: AxiomType) -> AxiomSet;
    fn axiom_count_by_type(&self, kind: AxiomType) -> usize;
    fn contains_axiom(&self, axiom: &Axiom) -> bool;
    fn contains_axiom_ignoring_annotations(&self, axiom: &Axiom) -> bool;
    /// Every stored axiom that equals `axiom` once annotations are ignored.
    fn axioms_ignoring_annotations(&self, axiom: &Axiom) -> AxiomSet;
    fn referencing_axioms(&self, entity: &Entity) -> AxiomSet;
    fn referencing_anonymous(&self, individual: &AnonymousIndividual) -> AxiomSet;
    /// The axioms that form the description of `entity`, see [`Axiom::describes`].
    fn describing_axioms(&self, entity: &Entity) -> AxiomSet;
    /// Like [`AxiomCollection::describing_axioms`], but for `inverse(P)` as well as `P`.
    fn describing_property_expression(&self, property: &ObjectPropertyExpression) -> AxiomSet;
    fn describing_anonymous(&self, individual: &AnonymousIndividual) -> AxiomSet;
    fn annotation_assertion_axioms(&self, subject: &AnnotationSubject) -> AxiomSet;
}

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

// ------------- Ontology -------------
#[derive(Debug)]
pub struct Ontology {
    // distinguishes ontologies that share an id, anonymous ones in particular
    handle: u64,
    id: OntologyId,
    keeper: RwLock<AxiomKeeper>,
    imports: RwLock<Vec<Iri>>,
}

impl Ontology {
    pub fn new(id: OntologyId) -> Self {
        Self {
            handle: NEXT_HANDLE.fetch_add(1, Ordering::Relaxed),
            id,
            keeper: RwLock::new(AxiomKeeper::new()),
            imports: RwLock::new(Vec::new()),
        }
    }
    pub fn id(&self) -> &OntologyId {
        &self.id
    }
    pub(crate) fn handle(&self) -> u64 {
        self.handle
    }

    // A panic cannot leave the keeper half-updated, since keep and discard do
    // not fail once an axiom exists, so a poisoned lock is safe to reuse.
    fn keeper(&self) -> RwLockReadGuard<'_, AxiomKeeper> {
        self.keeper.read().unwrap_or_else(PoisonError::into_inner)
    }
    fn keeper_mut(&self) -> RwLockWriteGuard<'_, AxiomKeeper> {
        self.keeper.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds the axiom. Returns false when an exactly equal axiom was already present.
    pub fn insert(&self, axiom: Axiom) -> bool {
        let (_, previously_kept) = self.keeper_mut().keep(axiom);
        !previously_kept
    }
    /// Adds each axiom individually, returning how many were new.
    pub fn insert_all(&self, axioms: impl IntoIterator<Item = Axiom>) -> usize {
        axioms
            .into_iter()
            .map(|axiom| self.insert(axiom))
            .filter(|added| *added)
            .count()
    }
    /// Removes the exactly equal axiom. Returns false when it was absent.
    pub fn remove(&self, axiom: &Axiom) -> bool {
        self.keeper_mut().discard(axiom).is_some()
    }

    pub fn imports(&self) -> Vec<Iri> {
        self.imports
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
    pub fn add_import(&self, iri: Iri) -> bool {
        let mut imports = self.imports.write().unwrap_or_else(PoisonError::into_inner);
        if imports.contains(&iri) {
            return false;
        }
        debug!(ontology = %self.id, import = %iri, "import declared");
        imports.push(iri);
        true
    }
    pub fn remove_import(&self, iri: &Iri) -> bool {
        let mut imports = self.imports.write().unwrap_or_else(PoisonError::into_inner);
        let before = imports.len();
        imports.retain(|declared| declared != iri);
        imports.len() != before
    }
}

impl AxiomCollection for Ontology {
    fn axioms(&self) -> AxiomSet {
        self.keeper().axioms()
    }
    fn axiom_count(&self) -> usize {
        self.keeper().len()
    }
    fn logical_axioms(&self) -> AxiomSet {
        self.keeper().logical()
    }
    fn logical_axiom_count(&self) -> usize {
        self.keeper().logical_len()
    }
    fn axioms_by_type(&self, kind: AxiomType) -> AxiomSet {
        self.keeper().of_type(kind)
    }
    fn axiom_count_by_type(&self, kind: AxiomType) -> usize {
        self.keeper().len_of_type(kind)
    }
    fn contains_axiom(&self, axiom: &Axiom) -> bool {
        self.keeper().contains(axiom)
    }
    fn contains_axiom_ignoring_annotations(&self, axiom: &Axiom) -> bool {
        self.keeper().contains_canonical(axiom.body())
    }
    fn axioms_ignoring_annotations(&self, axiom: &Axiom) -> AxiomSet {
        self.keeper().sharing_canonical(axiom.body())
    }
    fn referencing_axioms(&self, entity: &Entity) -> AxiomSet {
        self.keeper().referencing(entity)
    }
    fn referencing_anonymous(&self, individual: &AnonymousIndividual) -> AxiomSet {
        self.keeper().referencing_anonymous(individual)
    }
    fn describing_axioms(&self, entity: &Entity) -> AxiomSet {
        self.keeper().describing(entity)
    }
    fn describing_property_expression(&self, property: &ObjectPropertyExpression) -> AxiomSet {
        self.keeper().describing_property_expression(property)
    }
    fn describing_anonymous(&self, individual: &AnonymousIndividual) -> AxiomSet {
        self.keeper().describing_anonymous(individual)
    }
    fn annotation_assertion_axioms(&self, subject: &AnnotationSubject) -> AxiomSet {
        self.keeper().annotation_assertions(subject)
    }
}
