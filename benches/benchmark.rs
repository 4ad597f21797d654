use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use ontostore::axiom::{Axiom, AxiomBody, AxiomType};
use ontostore::construct::{Class, ClassExpression, Entity, NamedIndividual, ObjectProperty};
use ontostore::ontology::{AxiomCollection, Ontology, OntologyId};

const NS: &str = "http://example.org/bench#";

fn class(n: usize) -> Class {
    Class::named(&format!("{NS}C{n}")).unwrap()
}

// a class hierarchy ten wide with a membership assertion per class
fn populate(ontology: &Ontology, size: usize) {
    let part_of = ObjectProperty::named(&format!("{NS}partOf")).unwrap();
    for n in 0..size {
        ontology.insert(
            Axiom::new(AxiomBody::sub_class_of(
                class(n),
                ClassExpression::some_values_from(part_of.clone(), class(n / 10)),
            ))
            .unwrap(),
        );
        ontology.insert(
            Axiom::new(AxiomBody::class_assertion(
                class(n),
                NamedIndividual::named(&format!("{NS}i{n}")).unwrap(),
            ))
            .unwrap(),
        );
    }
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("insert 1000", |b| {
        b.iter(|| {
            let ontology = Ontology::new(OntologyId::anonymous());
            populate(&ontology, black_box(500));
            ontology
        })
    });

    let ontology = Ontology::new(OntologyId::anonymous());
    populate(&ontology, 10_000);
    let hub = Entity::from(class(5));
    let leaf = Entity::from(class(9_999));
    c.bench_function("referencing hub", |b| {
        b.iter(|| ontology.referencing_axioms(black_box(&hub)))
    });
    c.bench_function("referencing leaf", |b| {
        b.iter(|| ontology.referencing_axioms(black_box(&leaf)))
    });
    c.bench_function("describing hub", |b| {
        b.iter(|| ontology.describing_axioms(black_box(&hub)))
    });
    c.bench_function("count by type", |b| {
        b.iter(|| ontology.axiom_count_by_type(black_box(AxiomType::ClassAssertion)))
    });
    let wanted = Axiom::new(AxiomBody::sub_class_of(
        class(1),
        ClassExpression::some_values_from(
            ObjectProperty::named(&format!("{NS}partOf")).unwrap(),
            class(0),
        ),
    ))
    .unwrap();
    c.bench_function("contains ignoring annotations", |b| {
        b.iter(|| ontology.contains_axiom_ignoring_annotations(black_box(&wanted)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
