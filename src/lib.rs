//! Ontostore – an in-memory store for OWL 2 ontologies.
//!
//! Ontostore centers on the *axiom* concept: a statement about named
//! entities, anonymous individuals and literals, optionally carrying
//! annotations. In short:
//! * An [`construct::Entity`] is a typed IRI (class, property, individual or datatype).
//! * An [`axiom::AxiomBody`] is the annotation-free, canonical content of an axiom.
//! * An [`axiom::Axiom`] couples a body with a set of [`construct::Annotation`]s.
//! * An [`ontology::Ontology`] holds a set of axioms plus the IRIs it imports.
//!
//! Axioms are owned and deduplicated by a "keeper" (see the `keeper` module)
//! enabling canonical sharing through `Arc` while maintaining lookups by axiom
//! type, by referenced entity, by referenced anonymous individual, by
//! annotation subject and by canonical body.
//!
//! ## Modules
//! * [`construct`] – IRIs, entities, literals, annotations, class expressions and data ranges.
//! * [`axiom`] – The axiom catalogue, validation and the "describes" relation.
//! * [`signature`] – Extraction of the entities and anonymous individuals an axiom mentions.
//! * [`keeper`] – The indexed axiom storage behind every ontology.
//! * [`ontology`] – Ontologies and the [`ontology::AxiomCollection`] query surface.
//! * [`resolver`] – Cycle-safe imports closure computation.
//! * [`configuration`] – The immutable [`configuration::LoaderConfiguration`].
//! * [`manager`] – A registry of ontologies that import resolution looks into.
//!
//! ## Quick Start
//! ```
//! use ontostore::axiom::{Axiom, AxiomBody};
//! use ontostore::construct::{Class, Entity};
//! use ontostore::manager::OntologyManager;
//! use ontostore::ontology::{AxiomCollection, Imports, OntologyId};
//! use ontostore::construct::Iri;
//!
//! let manager = OntologyManager::default();
//! let base = manager.create_ontology(OntologyId::new(Iri::new("http://example.org/base").unwrap())).unwrap();
//! let top = manager.create_ontology(OntologyId::new(Iri::new("http://example.org/top").unwrap())).unwrap();
//! top.add_import(Iri::new("http://example.org/base").unwrap());
//!
//! let a = Class::named("http://example.org/A").unwrap();
//! let b = Class::named("http://example.org/B").unwrap();
//! base.insert(Axiom::new(AxiomBody::sub_class_of(a.clone(), b)).unwrap());
//!
//! let closure = manager.scope(&top, Imports::Included).unwrap();
//! assert_eq!(closure.len(), 2);
//! assert_eq!(closure.referencing_axioms(&Entity::from(a)).len(), 1);
//! ```

pub mod axiom;
pub mod configuration;
pub mod construct;
pub mod error;
pub mod keeper;
pub mod manager;
pub mod ontology;
pub mod resolver;
pub mod signature;

pub use error::{OntostoreError, Result};
