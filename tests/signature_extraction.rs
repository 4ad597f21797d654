use std::collections::BTreeSet;

use ontostore::axiom::{Axiom, AxiomBody};
use ontostore::construct::{
    Annotation, AnnotationProperty, AnnotationSubject, AnonymousIndividual, Class, ClassExpression,
    DataProperty, Datatype, Entity, Iri, Literal, NamedIndividual, ObjectProperty,
};

const NS: &str = "http://example.org/sig#";

fn class(local: &str) -> Class {
    Class::named(&format!("{NS}{local}")).unwrap()
}

#[test]
fn nested_class_expressions_and_annotations() {
    let has_part = ObjectProperty::named(&format!("{NS}hasPart")).unwrap();
    let axiom = Axiom::annotated(
        AxiomBody::sub_class_of(
            class("Car"),
            ClassExpression::some_values_from(has_part.clone(), class("Wheel")),
        ),
        [Annotation::comment("cars have wheels")],
    )
    .unwrap();

    let expected: BTreeSet<Entity> = [
        class("Car").entity(),
        class("Wheel").entity(),
        has_part.entity(),
        AnnotationProperty::rdfs_comment().entity(),
        Datatype::xsd_string().entity(),
    ]
    .into_iter()
    .collect();
    assert_eq!(axiom.referenced_entities(), expected);
    assert!(axiom.referenced_anonymous_individuals().is_empty());
}

#[test]
fn anonymous_individuals_are_collected_separately() {
    let blank = AnonymousIndividual::new("b0").unwrap();
    assert_eq!(blank.node_id(), "_:b0");
    let axiom = Axiom::new(AxiomBody::class_assertion(class("Car"), blank.clone())).unwrap();

    let signature = axiom.signature();
    assert_eq!(signature.entities().len(), 1);
    assert!(signature.contains(&class("Car").entity()));
    assert_eq!(
        signature.anonymous_individuals().iter().collect::<Vec<_>>(),
        vec![&blank]
    );
}

#[test]
fn literals_contribute_their_datatype() {
    let age = DataProperty::named(&format!("{NS}age")).unwrap();
    let bob = NamedIndividual::named(&format!("{NS}bob")).unwrap();
    let axiom = Axiom::new(AxiomBody::DataPropertyAssertion {
        property: age.clone(),
        subject: bob.clone().into(),
        value: Literal::typed("42", Datatype::xsd_integer()),
    })
    .unwrap();

    let entities = axiom.referenced_entities();
    assert!(entities.contains(&age.entity()));
    assert!(entities.contains(&bob.entity()));
    assert!(entities.contains(&Datatype::xsd_integer().entity()));
    assert_eq!(entities.len(), 3);
}

#[test]
fn annotation_subject_iris_are_not_entities() {
    let subject = Iri::new(format!("{NS}Car")).unwrap();
    let axiom = Axiom::new(AxiomBody::annotation_assertion(
        AnnotationProperty::rdfs_label(),
        subject.clone(),
        Literal::lang("car", "en"),
    ))
    .unwrap();

    let entities = axiom.referenced_entities();
    assert!(!entities.contains(&class("Car").entity()));
    assert!(entities.contains(&AnnotationProperty::rdfs_label().entity()));
    assert!(entities.contains(&Datatype::lang_string().entity()));
    assert_eq!(axiom.annotation_subject(), Some(&AnnotationSubject::Iri(subject)));
}

#[test]
fn punned_iris_are_distinct_entities() {
    let as_class = class("Eagle").entity();
    let as_individual = NamedIndividual::named(&format!("{NS}Eagle")).unwrap().entity();
    assert_eq!(as_class.iri(), as_individual.iri());
    assert_ne!(as_class, as_individual);

    let axiom = Axiom::new(AxiomBody::class_assertion(
        class("Eagle"),
        NamedIndividual::named(&format!("{NS}Eagle")).unwrap(),
    ))
    .unwrap();
    assert_eq!(axiom.referenced_entities().len(), 2);
}
