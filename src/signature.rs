//! Signature extraction: the named entities and anonymous individuals an axiom mentions.
//!
//! The traversal walks every operand of the axiom and recurses into nested
//! class expressions, property expressions and data ranges. Literals contribute
//! their datatype, and the annotation properties of the axiom's own annotations
//! are part of its signature. IRIs used as annotation subjects or values are
//! not entities and are left out.

use std::collections::BTreeSet;

use crate::axiom::{Axiom, Operand};
use crate::construct::{
    Annotation, AnnotationSubject, AnnotationValue, AnonymousIndividual, ClassExpression, DataRange,
    Entity, Individual, Literal, ObjectPropertyExpression,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    entities: BTreeSet<Entity>,
    anonymous_individuals: BTreeSet<AnonymousIndividual>,
}

impl Signature {
    pub fn of(axiom: &Axiom) -> Self {
        let mut collector = Self::default();
        for operand in axiom.operands() {
            collector.operand(operand);
        }
        for annotation in axiom.annotations() {
            collector.annotation(annotation);
        }
        collector
    }
    pub fn entities(&self) -> &BTreeSet<Entity> {
        &self.entities
    }
    pub fn anonymous_individuals(&self) -> &BTreeSet<AnonymousIndividual> {
        &self.anonymous_individuals
    }
    pub fn contains(&self, entity: &Entity) -> bool {
        self.entities.contains(entity)
    }
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.anonymous_individuals.is_empty()
    }
    pub fn into_parts(self) -> (BTreeSet<Entity>, BTreeSet<AnonymousIndividual>) {
        (self.entities, self.anonymous_individuals)
    }

    fn operand(&mut self, operand: Operand<'_>) {
        match operand {
            Operand::Entity(entity) => {
                self.entities.insert(entity.clone());
            }
            Operand::Class(class) => {
                self.entities.insert(class.entity());
            }
            Operand::ClassExpression(expression) => self.class_expression(expression),
            Operand::ObjectProperty(property) => self.object_property(property),
            Operand::DataProperty(property) => {
                self.entities.insert(property.entity());
            }
            Operand::AnnotationProperty(property) => {
                self.entities.insert(property.entity());
            }
            Operand::Datatype(datatype) => {
                self.entities.insert(datatype.entity());
            }
            Operand::DataRange(range) => self.data_range(range),
            Operand::Individual(individual) => self.individual(individual),
            Operand::Literal(literal) => self.literal(literal),
            Operand::AnnotationSubject(subject) => {
                if let AnnotationSubject::Anonymous(individual) = subject {
                    self.anonymous_individuals.insert(individual.clone());
                }
            }
            Operand::AnnotationValue(value) => self.annotation_value(value),
            Operand::Iri(_) => (),
        }
    }

    fn class_expression(&mut self, expression: &ClassExpression) {
        match expression {
            ClassExpression::Class(class) => {
                self.entities.insert(class.entity());
            }
            ClassExpression::ObjectIntersectionOf(operands)
            | ClassExpression::ObjectUnionOf(operands) => {
                for operand in operands {
                    self.class_expression(operand);
                }
            }
            ClassExpression::ObjectComplementOf(operand) => self.class_expression(operand),
            ClassExpression::ObjectOneOf(individuals) => {
                for individual in individuals {
                    self.individual(individual);
                }
            }
            ClassExpression::ObjectSomeValuesFrom { property, filler }
            | ClassExpression::ObjectAllValuesFrom { property, filler }
            | ClassExpression::ObjectCardinality {
                property, filler, ..
            } => {
                self.object_property(property);
                self.class_expression(filler);
            }
            ClassExpression::ObjectHasValue { property, value } => {
                self.object_property(property);
                self.individual(value);
            }
            ClassExpression::ObjectHasSelf(property) => self.object_property(property),
            ClassExpression::DataSomeValuesFrom { property, range }
            | ClassExpression::DataAllValuesFrom { property, range }
            | ClassExpression::DataCardinality {
                property, range, ..
            } => {
                self.entities.insert(property.entity());
                self.data_range(range);
            }
            ClassExpression::DataHasValue { property, value } => {
                self.entities.insert(property.entity());
                self.literal(value);
            }
        }
    }

    fn object_property(&mut self, property: &ObjectPropertyExpression) {
        self.entities.insert(property.named_property().entity());
    }

    fn data_range(&mut self, range: &DataRange) {
        match range {
            DataRange::Datatype(datatype) => {
                self.entities.insert(datatype.entity());
            }
            DataRange::IntersectionOf(ranges) | DataRange::UnionOf(ranges) => {
                for range in ranges {
                    self.data_range(range);
                }
            }
            DataRange::ComplementOf(range) => self.data_range(range),
            DataRange::OneOf(literals) => {
                for literal in literals {
                    self.literal(literal);
                }
            }
            DataRange::Restriction { datatype, facets } => {
                self.entities.insert(datatype.entity());
                for facet in facets {
                    self.literal(&facet.value);
                }
            }
        }
    }

    fn individual(&mut self, individual: &Individual) {
        match individual {
            Individual::Named(named) => {
                self.entities.insert(named.entity());
            }
            Individual::Anonymous(anonymous) => {
                self.anonymous_individuals.insert(anonymous.clone());
            }
        }
    }

    fn literal(&mut self, literal: &Literal) {
        self.entities.insert(literal.datatype().entity());
    }

    fn annotation(&mut self, annotation: &Annotation) {
        self.entities.insert(annotation.property().entity());
        self.annotation_value(annotation.value());
    }

    fn annotation_value(&mut self, value: &AnnotationValue) {
        match value {
            AnnotationValue::Literal(literal) => self.literal(literal),
            AnnotationValue::Anonymous(individual) => {
                self.anonymous_individuals.insert(individual.clone());
            }
            AnnotationValue::Iri(_) => (),
        }
    }
}
