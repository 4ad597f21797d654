// used to keep the one-to-one mapping between axioms and their assigned things
use bimap::BiMap;

// every lookup resolves to a set of things, which roaring bitmaps hold compactly
use roaring::RoaringTreemap;

// lookups use HashMap with a fast hasher
use core::hash::BuildHasherDefault;
use seahash::SeaHasher;
use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::sync::Arc;

use tracing::trace;

// our own stuff that we need
use crate::axiom::{Axiom, AxiomBody, AxiomType};
use crate::construct::{AnnotationSubject, AnonymousIndividual, Entity, Individual, ObjectPropertyExpression};

// ------------- Thing -------------
// Every kept axiom is identified by a thing, so that the lookups can hold
// compact sets of numbers instead of references.
pub type Thing = u64;

pub type OtherHasher = BuildHasherDefault<SeaHasher>;

/// The result of a query: a fresh set, unaffected by later changes to the keeper.
pub type AxiomSet = HashSet<Arc<Axiom>, OtherHasher>;

pub const GENESIS: Thing = 0;

#[derive(Debug)]
pub struct ThingGenerator {
    lower_bound: Thing,
    released: Vec<Thing>,
}

impl ThingGenerator {
    pub fn new() -> Self {
        Self {
            lower_bound: GENESIS,
            released: Vec::new(),
        }
    }
    pub fn release(&mut self, t: Thing) {
        self.released.push(t);
    }
    pub fn generate(&mut self) -> Thing {
        self.released.pop().unwrap_or_else(|| {
            self.lower_bound += 1;
            self.lower_bound
        })
    }
}

impl Default for ThingGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// ------------- Lookups -------------
#[derive(Debug)]
pub struct Lookup<K> {
    index: HashMap<K, RoaringTreemap, OtherHasher>,
}
impl<K: Eq + Hash> Lookup<K> {
    pub fn new() -> Self {
        Self {
            index: HashMap::default(),
        }
    }
    pub fn insert(&mut self, key: K, thing: Thing) {
        self.index
            .entry(key)
            .or_insert_with(RoaringTreemap::new)
            .insert(thing);
    }
    // empty sets are dropped, so a present key always has things behind it
    pub fn remove<Q>(&mut self, key: &Q, thing: Thing)
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        if let Some(things) = self.index.get_mut(key) {
            things.remove(thing);
            if things.is_empty() {
                self.index.remove(key);
            }
        }
    }
    pub fn lookup<Q>(&self, key: &Q) -> Option<&RoaringTreemap>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.get(key)
    }
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.contains_key(key)
    }
    pub fn count<Q>(&self, key: &Q) -> u64
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.get(key).map_or(0, RoaringTreemap::len)
    }
}
impl<K: Eq + Hash> Default for Lookup<K> {
    fn default() -> Self {
        Self::new()
    }
}

// ------------- AxiomKeeper -------------
/// Owns the axioms of one ontology along with every lookup over them.
///
/// The keeper itself is not synchronized; [`crate::ontology::Ontology`] puts it
/// behind a lock so that a keep or discard updates all lookups at once.
#[derive(Debug)]
pub struct AxiomKeeper {
    thing_generator: ThingGenerator,
    kept: BiMap<Arc<Axiom>, Thing>,
    logical: RoaringTreemap,
    type_lookup: Lookup<AxiomType>,
    entity_lookup: Lookup<Entity>,
    anonymous_lookup: Lookup<AnonymousIndividual>,
    canonical_lookup: Lookup<AxiomBody>,
    annotation_subject_lookup: Lookup<AnnotationSubject>,
}

impl AxiomKeeper {
    pub fn new() -> Self {
        Self {
            thing_generator: ThingGenerator::new(),
            kept: BiMap::new(),
            logical: RoaringTreemap::new(),
            type_lookup: Lookup::new(),
            entity_lookup: Lookup::new(),
            anonymous_lookup: Lookup::new(),
            canonical_lookup: Lookup::new(),
            annotation_subject_lookup: Lookup::new(),
        }
    }

    /// Keeps the axiom unless an exactly equal one is already kept. The kept
    /// axiom is returned together with whether it was previously kept.
    pub fn keep(&mut self, axiom: Axiom) -> (Arc<Axiom>, bool) {
        if let Some(kept) = self
            .kept
            .get_by_left(&axiom)
            .and_then(|thing| self.kept.get_by_right(thing))
        {
            return (Arc::clone(kept), true);
        }
        let thing = self.thing_generator.generate();
        let keepsake = Arc::new(axiom);
        self.index(&keepsake, thing);
        self.kept.insert(Arc::clone(&keepsake), thing);
        trace!(thing, kind = %keepsake.kind(), "kept axiom");
        (keepsake, false)
    }

    /// Discards an exactly equal axiom, returning it if it was kept.
    pub fn discard(&mut self, axiom: &Axiom) -> Option<Arc<Axiom>> {
        let (kept, thing) = self.kept.remove_by_left(axiom)?;
        self.unindex(&kept, thing);
        self.thing_generator.release(thing);
        trace!(thing, kind = %kept.kind(), "discarded axiom");
        Some(kept)
    }

    fn index(&mut self, axiom: &Axiom, thing: Thing) {
        self.type_lookup.insert(axiom.kind(), thing);
        if axiom.is_logical() {
            self.logical.insert(thing);
        }
        let (entities, anonymous_individuals) = axiom.signature().into_parts();
        for entity in entities {
            self.entity_lookup.insert(entity, thing);
        }
        for individual in anonymous_individuals {
            self.anonymous_lookup.insert(individual, thing);
        }
        self.canonical_lookup.insert(axiom.body().clone(), thing);
        if let Some(subject) = axiom.annotation_subject() {
            self.annotation_subject_lookup.insert(subject.clone(), thing);
        }
    }

    fn unindex(&mut self, axiom: &Axiom, thing: Thing) {
        self.type_lookup.remove(&axiom.kind(), thing);
        self.logical.remove(thing);
        let signature = axiom.signature();
        for entity in signature.entities() {
            self.entity_lookup.remove(entity, thing);
        }
        for individual in signature.anonymous_individuals() {
            self.anonymous_lookup.remove(individual, thing);
        }
        self.canonical_lookup.remove(axiom.body(), thing);
        if let Some(subject) = axiom.annotation_subject() {
            self.annotation_subject_lookup.remove(subject, thing);
        }
    }

    fn materialize(&self, things: Option<&RoaringTreemap>) -> AxiomSet {
        things
            .into_iter()
            .flatten()
            .filter_map(|thing| self.kept.get_by_right(&thing))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.kept.len()
    }
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }
    pub fn logical_len(&self) -> usize {
        self.logical.len() as usize
    }
    pub fn len_of_type(&self, kind: AxiomType) -> usize {
        self.type_lookup.count(&kind) as usize
    }
    pub fn contains(&self, axiom: &Axiom) -> bool {
        self.kept.contains_left(axiom)
    }
    pub fn contains_canonical(&self, body: &AxiomBody) -> bool {
        self.canonical_lookup.contains(body)
    }

    pub fn axioms(&self) -> AxiomSet {
        self.kept.left_values().cloned().collect()
    }
    pub fn logical(&self) -> AxiomSet {
        self.materialize(Some(&self.logical))
    }
    pub fn of_type(&self, kind: AxiomType) -> AxiomSet {
        self.materialize(self.type_lookup.lookup(&kind))
    }
    pub fn sharing_canonical(&self, body: &AxiomBody) -> AxiomSet {
        self.materialize(self.canonical_lookup.lookup(body))
    }
    pub fn referencing(&self, entity: &Entity) -> AxiomSet {
        self.materialize(self.entity_lookup.lookup(entity))
    }
    pub fn referencing_anonymous(&self, individual: &AnonymousIndividual) -> AxiomSet {
        self.materialize(self.anonymous_lookup.lookup(individual))
    }
    pub fn describing(&self, entity: &Entity) -> AxiomSet {
        let mut described = self.referencing(entity);
        described.retain(|axiom| axiom.describes(entity));
        described
    }
    pub fn describing_property_expression(&self, property: &ObjectPropertyExpression) -> AxiomSet {
        let mut described = self.referencing(&property.named_property().entity());
        described.retain(|axiom| axiom.describes_property_expression(property));
        trace!(inverse = property.is_inverse(), found = described.len(), "describing expression");
        described
    }
    pub fn describing_anonymous(&self, individual: &AnonymousIndividual) -> AxiomSet {
        let subject = Individual::Anonymous(individual.clone());
        let mut described = self.referencing_anonymous(individual);
        described.retain(|axiom| axiom.describes_individual(&subject));
        described
    }
    pub fn annotation_assertions(&self, subject: &AnnotationSubject) -> AxiomSet {
        self.materialize(self.annotation_subject_lookup.lookup(subject))
    }
}

impl Default for AxiomKeeper {
    fn default() -> Self {
        Self::new()
    }
}
