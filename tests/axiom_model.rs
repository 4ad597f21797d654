use ontostore::OntostoreError;
use ontostore::axiom::{Axiom, AxiomBody, AxiomType, ObjectCharacteristic};
use ontostore::construct::{
    Annotation, AnnotationProperty, AnonymousIndividual, Class, ClassExpression, DataProperty, DataRange, Datatype,
    Iri, Literal, NamedIndividual, ObjectProperty, ObjectPropertyExpression,
};

fn class(local: &str) -> Class {
    Class::named(&format!("http://example.org/test#{local}")).unwrap()
}

fn named(local: &str) -> ClassExpression {
    class(local).into()
}

fn property(local: &str) -> ObjectProperty {
    ObjectProperty::named(&format!("http://example.org/test#{local}")).unwrap()
}

#[test]
fn iris_are_validated() {
    assert!(Iri::new("http://example.org/A").is_ok());
    assert!(Iri::new("urn:isbn:0451450523").is_ok());
    for bad in ["", "no scheme", "http://example.org/with space", "http://example.org/<A>"] {
        let err = Iri::new(bad).unwrap_err();
        assert!(matches!(err, OntostoreError::InvalidIri { .. }), "{bad} should be rejected");
    }
    let iri = Iri::new("http://example.org/ns#A").unwrap();
    assert_eq!(iri.namespace(), "http://example.org/ns#");
    assert_eq!(iri.to_string(), "<http://example.org/ns#A>");
}

#[test]
fn nary_operand_order_does_not_matter() {
    let ab = Axiom::new(AxiomBody::equivalent_classes([named("A"), named("B")])).unwrap();
    let ba = Axiom::new(AxiomBody::equivalent_classes([named("B"), named("A")])).unwrap();
    assert_eq!(ab, ba);

    let p = ObjectPropertyExpression::from(property("p"));
    let q = ObjectPropertyExpression::from(property("q"));
    let pq = Axiom::new(AxiomBody::InverseObjectProperties(p.clone(), q.clone())).unwrap();
    let qp = Axiom::new(AxiomBody::InverseObjectProperties(q, p)).unwrap();
    assert_eq!(pq, qp);
}

#[test]
fn annotations_are_part_of_identity() {
    let body = AxiomBody::sub_class_of(class("A"), class("B"));
    let plain = Axiom::new(body.clone()).unwrap();
    let annotated = Axiom::annotated(body, [Annotation::comment("A is a B")]).unwrap();

    assert_ne!(plain, annotated);
    assert!(plain.equals_ignoring_annotations(&annotated));
    assert_eq!(annotated.without_annotations(), plain);
    assert!(annotated.is_annotated());
    assert_eq!(plain.with_annotations([Annotation::comment("A is a B")]), annotated);
}

#[test]
fn malformed_axioms_are_rejected() {
    let single = AxiomBody::equivalent_classes([named("A"), named("A")]);
    assert!(matches!(
        Axiom::new(single),
        Err(OntostoreError::InvalidArgument(_))
    ));

    let short_chain = AxiomBody::SubPropertyChainOf {
        chain: vec![property("p").into()],
        sup: property("q").into(),
    };
    assert!(Axiom::new(short_chain).is_err());

    let empty_union = AxiomBody::sub_class_of(ClassExpression::union_of([named("A")]), named("B"));
    assert!(Axiom::new(empty_union).is_err());

    let facetless = AxiomBody::DataPropertyRange {
        property: DataProperty::named("http://example.org/test#age").unwrap(),
        range: DataRange::Restriction {
            datatype: Datatype::xsd_integer(),
            facets: Default::default(),
        },
    };
    assert!(Axiom::new(facetless).is_err());

    assert!(AnonymousIndividual::new("").is_err());
    assert!(AnonymousIndividual::new("_:has space").is_err());
}

#[test]
fn axiom_kinds_and_logical_flag() {
    assert_eq!(AxiomType::ALL.len(), 38);

    let declaration = Axiom::new(AxiomBody::declaration(class("A"))).unwrap();
    assert_eq!(declaration.kind(), AxiomType::Declaration);
    assert!(!declaration.is_logical());

    let label = Axiom::new(AxiomBody::annotation_assertion(
        AnnotationProperty::rdfs_label(),
        class("A").iri().clone(),
        Literal::lang("Ay", "EN"),
    ))
    .unwrap();
    assert!(label.is_annotation_axiom());
    assert!(!label.is_logical());

    let transitive = Axiom::new(AxiomBody::ObjectPropertyCharacteristic {
        characteristic: ObjectCharacteristic::Transitive,
        property: property("partOf").into(),
    })
    .unwrap();
    assert_eq!(transitive.kind(), AxiomType::TransitiveObjectProperty);
    assert!(transitive.is_logical());

    let assertion = Axiom::new(AxiomBody::class_assertion(
        class("A"),
        NamedIndividual::named("http://example.org/test#a").unwrap(),
    ))
    .unwrap();
    assert!(assertion.is_logical());
}

#[test]
fn language_tags_are_case_insensitive() {
    assert_eq!(Literal::lang("colour", "en-GB"), Literal::lang("colour", "EN-gb"));
    assert_eq!(Literal::lang("colour", "en-GB").language(), Some("en-gb"));
    assert_ne!(Literal::string("1"), Literal::typed("1", Datatype::xsd_integer()));
}
