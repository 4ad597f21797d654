use std::sync::Arc;
use std::thread;

use ontostore::axiom::{Axiom, AxiomBody, AxiomType};
use ontostore::construct::{
    Annotation, AnnotationProperty, AnnotationSubject, AnonymousIndividual, Class, ClassExpression,
    Entity, Iri, Literal, NamedIndividual, ObjectProperty,
};
use ontostore::ontology::{AxiomCollection, Ontology, OntologyId};

const NS: &str = "http://example.org/store#";

fn class(local: &str) -> Class {
    Class::named(&format!("{NS}{local}")).unwrap()
}

fn sub_class_of(sub: &str, sup: &str) -> Axiom {
    Axiom::new(AxiomBody::sub_class_of(class(sub), class(sup))).unwrap()
}

fn setup() -> Ontology {
    Ontology::new(OntologyId::new(Iri::new("http://example.org/store").unwrap()))
}

#[test]
fn insert_is_idempotent() {
    let ontology = setup();
    assert!(ontology.insert(sub_class_of("A", "B")));
    assert!(!ontology.insert(sub_class_of("A", "B")));
    assert_eq!(ontology.axiom_count(), 1);
    assert_eq!(ontology.axiom_count_by_type(AxiomType::SubClassOf), 1);
    assert_eq!(ontology.referencing_axioms(&class("A").entity()).len(), 1);
}

#[test]
fn removal_clears_every_index() {
    let ontology = setup();
    let axiom = sub_class_of("A", "B");
    ontology.insert(axiom.clone());
    assert!(ontology.remove(&axiom));
    assert!(!ontology.remove(&axiom));

    assert_eq!(ontology.axiom_count(), 0);
    assert_eq!(ontology.logical_axiom_count(), 0);
    assert!(ontology.axioms_by_type(AxiomType::SubClassOf).is_empty());
    assert!(ontology.referencing_axioms(&class("A").entity()).is_empty());
    assert!(ontology.referencing_axioms(&class("B").entity()).is_empty());
    assert!(!ontology.contains_axiom_ignoring_annotations(&axiom));
}

#[test]
fn every_signature_entity_finds_the_axiom() {
    let ontology = setup();
    let part_of = ObjectProperty::named(&format!("{NS}partOf")).unwrap();
    let axiom = Axiom::annotated(
        AxiomBody::sub_class_of(
            class("Wheel"),
            ClassExpression::some_values_from(part_of, class("Car")),
        ),
        [Annotation::label("wheels")],
    )
    .unwrap();
    ontology.insert(axiom.clone());

    for entity in axiom.referenced_entities() {
        let found = ontology.referencing_axioms(&entity);
        assert!(found.contains(&axiom), "{entity} should reference the axiom");
    }
    assert!(ontology.referencing_axioms(&class("Bicycle").entity()).is_empty());
}

#[test]
fn annotation_variants_share_a_canonical_form() {
    let ontology = setup();
    let plain = sub_class_of("A", "B");
    let commented = plain.with_annotations([Annotation::comment("first")]);
    let relabelled = plain.with_annotations([Annotation::comment("second")]);
    ontology.insert(plain.clone());
    ontology.insert(commented.clone());

    assert_eq!(ontology.axiom_count(), 2);
    assert!(ontology.contains_axiom(&commented));
    assert!(!ontology.contains_axiom(&relabelled));
    assert!(ontology.contains_axiom_ignoring_annotations(&relabelled));

    let variants = ontology.axioms_ignoring_annotations(&relabelled);
    assert_eq!(variants.len(), 2);
    assert!(variants.contains(&plain) && variants.contains(&commented));

    ontology.remove(&plain);
    assert_eq!(ontology.axioms_ignoring_annotations(&relabelled).len(), 1);
}

#[test]
fn logical_and_type_counts() {
    let ontology = setup();
    ontology.insert(Axiom::new(AxiomBody::declaration(class("A"))).unwrap());
    ontology.insert(sub_class_of("A", "B"));
    ontology.insert(
        Axiom::new(AxiomBody::annotation_assertion(
            AnnotationProperty::rdfs_label(),
            class("A").iri().clone(),
            Literal::string("A"),
        ))
        .unwrap(),
    );

    assert_eq!(ontology.axiom_count(), 3);
    assert_eq!(ontology.logical_axiom_count(), 1);
    assert_eq!(ontology.logical_axioms().len(), 1);
    assert_eq!(ontology.axiom_count_by_type(AxiomType::Declaration), 1);
    assert_eq!(ontology.axiom_count_by_type(AxiomType::EquivalentClasses), 0);
    let total: usize = AxiomType::ALL
        .iter()
        .map(|kind| ontology.axiom_count_by_type(*kind))
        .sum();
    assert_eq!(total, ontology.axiom_count());
}

#[test]
fn annotation_assertions_by_subject() {
    let ontology = setup();
    let subject = AnnotationSubject::from(class("A").iri().clone());
    let label = Axiom::new(AxiomBody::annotation_assertion(
        AnnotationProperty::rdfs_label(),
        subject.clone(),
        Literal::lang("Ay", "en"),
    ))
    .unwrap();
    ontology.insert(label.clone());
    ontology.insert(sub_class_of("A", "B"));

    let found = ontology.annotation_assertion_axioms(&subject);
    assert_eq!(found.len(), 1);
    assert!(found.contains(&label));
    // an IRI subject is not an entity reference
    assert!(!ontology.referencing_axioms(&class("A").entity()).contains(&label));
}

#[test]
fn anonymous_individuals_are_indexed() {
    let ontology = setup();
    let blank = AnonymousIndividual::new("x").unwrap();
    let assertion = Axiom::new(AxiomBody::class_assertion(class("A"), blank.clone())).unwrap();
    ontology.insert(assertion.clone());

    assert_eq!(ontology.referencing_anonymous(&blank).len(), 1);
    assert_eq!(ontology.describing_anonymous(&blank).len(), 1);
    assert!(ontology
        .referencing_anonymous(&AnonymousIndividual::new("y").unwrap())
        .is_empty());
}

#[test]
fn results_are_copies() {
    let ontology = setup();
    ontology.insert(sub_class_of("A", "B"));
    let mut snapshot = ontology.axioms();
    snapshot.clear();
    assert_eq!(ontology.axiom_count(), 1);

    let before = ontology.referencing_axioms(&class("A").entity());
    ontology.insert(sub_class_of("A", "C"));
    assert_eq!(before.len(), 1);
    assert_eq!(ontology.referencing_axioms(&class("A").entity()).len(), 2);
}

#[test]
fn concurrent_readers_and_writers() {
    let ontology = Arc::new(setup());
    let individual = |n: usize| NamedIndividual::named(&format!("{NS}i{n}")).unwrap();
    let thing = Entity::from(class("Thing"));

    thread::scope(|scope| {
        for writer in 0..4 {
            let ontology = Arc::clone(&ontology);
            scope.spawn(move || {
                for n in 0..50 {
                    let axiom = Axiom::new(AxiomBody::class_assertion(
                        class("Thing"),
                        individual(writer * 50 + n),
                    ))
                    .unwrap();
                    ontology.insert(axiom);
                }
            });
        }
        for _ in 0..4 {
            let ontology = Arc::clone(&ontology);
            let thing = thing.clone();
            scope.spawn(move || {
                for _ in 0..50 {
                    // a reader sees either all or none of an insert
                    let referencing = ontology.referencing_axioms(&thing);
                    assert!(referencing.iter().all(|axiom| ontology.contains_axiom(axiom)));
                }
            });
        }
    });

    assert_eq!(ontology.axiom_count(), 200);
    assert_eq!(ontology.referencing_axioms(&thing).len(), 200);
    assert_eq!(ontology.axiom_count_by_type(AxiomType::ClassAssertion), 200);
}
