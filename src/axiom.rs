//! Axioms: immutable logical statements about entities.
//!
//! An [`Axiom`] is an [`AxiomBody`] (the kind of statement and its operands)
//! together with a set of [`Annotation`]s. Equality and hashing of an `Axiom`
//! cover both parts; the body on its own is the canonical, annotation-free
//! form and is what annotation-insensitive lookups are keyed on.
//!
//! N-ary operands whose order carries no meaning (equivalent classes,
//! same individuals, ...) are held in ordered sets, so two axioms listing the
//! same operands in a different order are the same axiom.

use std::collections::BTreeSet;

use crate::construct::{
    require, AnnotationProperty, AnnotationSubject, AnnotationValue, Annotation, AnonymousIndividual,
    Class, ClassExpression, DataProperty, DataRange, Datatype, Entity, EntityType, Individual, Iri,
    Literal, NamedIndividual, ObjectProperty, ObjectPropertyExpression,
};
use crate::error::Result;
use crate::signature::Signature;

macro_rules! axiom_types {
    ($($variant:ident),* $(,)?) => {
        /// The kind tag of an axiom.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum AxiomType {
            $($variant),*
        }
        impl AxiomType {
            pub const ALL: &'static [AxiomType] = &[$(AxiomType::$variant),*];
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

axiom_types!(
    Declaration,
    SubClassOf,
    EquivalentClasses,
    DisjointClasses,
    DisjointUnion,
    HasKey,
    SubObjectPropertyOf,
    SubPropertyChainOf,
    EquivalentObjectProperties,
    DisjointObjectProperties,
    InverseObjectProperties,
    ObjectPropertyDomain,
    ObjectPropertyRange,
    FunctionalObjectProperty,
    InverseFunctionalObjectProperty,
    ReflexiveObjectProperty,
    IrreflexiveObjectProperty,
    SymmetricObjectProperty,
    AsymmetricObjectProperty,
    TransitiveObjectProperty,
    SubDataPropertyOf,
    EquivalentDataProperties,
    DisjointDataProperties,
    DataPropertyDomain,
    DataPropertyRange,
    FunctionalDataProperty,
    DatatypeDefinition,
    ClassAssertion,
    SameIndividual,
    DifferentIndividuals,
    ObjectPropertyAssertion,
    NegativeObjectPropertyAssertion,
    DataPropertyAssertion,
    NegativeDataPropertyAssertion,
    AnnotationAssertion,
    SubAnnotationPropertyOf,
    AnnotationPropertyDomain,
    AnnotationPropertyRange,
);

impl AxiomType {
    /// Every kind except declarations and pure annotation axioms affects meaning.
    pub fn is_logical(&self) -> bool {
        !matches!(self, Self::Declaration) && !self.is_annotation_axiom()
    }
    pub fn is_annotation_axiom(&self) -> bool {
        matches!(
            self,
            Self::AnnotationAssertion
                | Self::SubAnnotationPropertyOf
                | Self::AnnotationPropertyDomain
                | Self::AnnotationPropertyRange
        )
    }
}

impl std::fmt::Display for AxiomType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ObjectCharacteristic {
    Functional,
    InverseFunctional,
    Reflexive,
    Irreflexive,
    Symmetric,
    Asymmetric,
    Transitive,
}

type PropertySet = BTreeSet<ObjectPropertyExpression>;

/// The annotation-free content of an axiom: its kind and operands.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AxiomBody {
    Declaration(Entity),
    SubClassOf {
        sub: ClassExpression,
        sup: ClassExpression,
    },
    EquivalentClasses(BTreeSet<ClassExpression>),
    DisjointClasses(BTreeSet<ClassExpression>),
    DisjointUnion {
        class: Class,
        operands: BTreeSet<ClassExpression>,
    },
    HasKey {
        class: ClassExpression,
        object_properties: PropertySet,
        data_properties: BTreeSet<DataProperty>,
    },
    SubObjectPropertyOf {
        sub: ObjectPropertyExpression,
        sup: ObjectPropertyExpression,
    },
    SubPropertyChainOf {
        chain: Vec<ObjectPropertyExpression>,
        sup: ObjectPropertyExpression,
    },
    EquivalentObjectProperties(PropertySet),
    DisjointObjectProperties(PropertySet),
    InverseObjectProperties(ObjectPropertyExpression, ObjectPropertyExpression),
    ObjectPropertyDomain {
        property: ObjectPropertyExpression,
        domain: ClassExpression,
    },
    ObjectPropertyRange {
        property: ObjectPropertyExpression,
        range: ClassExpression,
    },
    ObjectPropertyCharacteristic {
        characteristic: ObjectCharacteristic,
        property: ObjectPropertyExpression,
    },
    SubDataPropertyOf {
        sub: DataProperty,
        sup: DataProperty,
    },
    EquivalentDataProperties(BTreeSet<DataProperty>),
    DisjointDataProperties(BTreeSet<DataProperty>),
    DataPropertyDomain {
        property: DataProperty,
        domain: ClassExpression,
    },
    DataPropertyRange {
        property: DataProperty,
        range: DataRange,
    },
    FunctionalDataProperty(DataProperty),
    DatatypeDefinition {
        datatype: Datatype,
        range: DataRange,
    },
    ClassAssertion {
        class: ClassExpression,
        individual: Individual,
    },
    SameIndividual(BTreeSet<Individual>),
    DifferentIndividuals(BTreeSet<Individual>),
    ObjectPropertyAssertion {
        property: ObjectPropertyExpression,
        subject: Individual,
        object: Individual,
    },
    NegativeObjectPropertyAssertion {
        property: ObjectPropertyExpression,
        subject: Individual,
        object: Individual,
    },
    DataPropertyAssertion {
        property: DataProperty,
        subject: Individual,
        value: Literal,
    },
    NegativeDataPropertyAssertion {
        property: DataProperty,
        subject: Individual,
        value: Literal,
    },
    AnnotationAssertion {
        property: AnnotationProperty,
        subject: AnnotationSubject,
        value: AnnotationValue,
    },
    SubAnnotationPropertyOf {
        sub: AnnotationProperty,
        sup: AnnotationProperty,
    },
    AnnotationPropertyDomain {
        property: AnnotationProperty,
        domain: Iri,
    },
    AnnotationPropertyRange {
        property: AnnotationProperty,
        range: Iri,
    },
}

/// A borrowed view of one operand of an axiom, in operand order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand<'a> {
    Entity(&'a Entity),
    Class(&'a Class),
    ClassExpression(&'a ClassExpression),
    ObjectProperty(&'a ObjectPropertyExpression),
    DataProperty(&'a DataProperty),
    AnnotationProperty(&'a AnnotationProperty),
    Datatype(&'a Datatype),
    DataRange(&'a DataRange),
    Individual(&'a Individual),
    Literal(&'a Literal),
    AnnotationSubject(&'a AnnotationSubject),
    AnnotationValue(&'a AnnotationValue),
    Iri(&'a Iri),
}

impl AxiomBody {
    pub fn kind(&self) -> AxiomType {
        match self {
            Self::Declaration(_) => AxiomType::Declaration,
            Self::SubClassOf { .. } => AxiomType::SubClassOf,
            Self::EquivalentClasses(_) => AxiomType::EquivalentClasses,
            Self::DisjointClasses(_) => AxiomType::DisjointClasses,
            Self::DisjointUnion { .. } => AxiomType::DisjointUnion,
            Self::HasKey { .. } => AxiomType::HasKey,
            Self::SubObjectPropertyOf { .. } => AxiomType::SubObjectPropertyOf,
            Self::SubPropertyChainOf { .. } => AxiomType::SubPropertyChainOf,
            Self::EquivalentObjectProperties(_) => AxiomType::EquivalentObjectProperties,
            Self::DisjointObjectProperties(_) => AxiomType::DisjointObjectProperties,
            Self::InverseObjectProperties(..) => AxiomType::InverseObjectProperties,
            Self::ObjectPropertyDomain { .. } => AxiomType::ObjectPropertyDomain,
            Self::ObjectPropertyRange { .. } => AxiomType::ObjectPropertyRange,
            Self::ObjectPropertyCharacteristic { characteristic, .. } => match characteristic {
                ObjectCharacteristic::Functional => AxiomType::FunctionalObjectProperty,
                ObjectCharacteristic::InverseFunctional => AxiomType::InverseFunctionalObjectProperty,
                ObjectCharacteristic::Reflexive => AxiomType::ReflexiveObjectProperty,
                ObjectCharacteristic::Irreflexive => AxiomType::IrreflexiveObjectProperty,
                ObjectCharacteristic::Symmetric => AxiomType::SymmetricObjectProperty,
                ObjectCharacteristic::Asymmetric => AxiomType::AsymmetricObjectProperty,
                ObjectCharacteristic::Transitive => AxiomType::TransitiveObjectProperty,
            },
            Self::SubDataPropertyOf { .. } => AxiomType::SubDataPropertyOf,
            Self::EquivalentDataProperties(_) => AxiomType::EquivalentDataProperties,
            Self::DisjointDataProperties(_) => AxiomType::DisjointDataProperties,
            Self::DataPropertyDomain { .. } => AxiomType::DataPropertyDomain,
            Self::DataPropertyRange { .. } => AxiomType::DataPropertyRange,
            Self::FunctionalDataProperty(_) => AxiomType::FunctionalDataProperty,
            Self::DatatypeDefinition { .. } => AxiomType::DatatypeDefinition,
            Self::ClassAssertion { .. } => AxiomType::ClassAssertion,
            Self::SameIndividual(_) => AxiomType::SameIndividual,
            Self::DifferentIndividuals(_) => AxiomType::DifferentIndividuals,
            Self::ObjectPropertyAssertion { .. } => AxiomType::ObjectPropertyAssertion,
            Self::NegativeObjectPropertyAssertion { .. } => {
                AxiomType::NegativeObjectPropertyAssertion
            }
            Self::DataPropertyAssertion { .. } => AxiomType::DataPropertyAssertion,
            Self::NegativeDataPropertyAssertion { .. } => AxiomType::NegativeDataPropertyAssertion,
            Self::AnnotationAssertion { .. } => AxiomType::AnnotationAssertion,
            Self::SubAnnotationPropertyOf { .. } => AxiomType::SubAnnotationPropertyOf,
            Self::AnnotationPropertyDomain { .. } => AxiomType::AnnotationPropertyDomain,
            Self::AnnotationPropertyRange { .. } => AxiomType::AnnotationPropertyRange,
        }
    }

    pub fn operands(&self) -> Vec<Operand<'_>> {
        use Operand as O;
        match self {
            Self::Declaration(entity) => vec![O::Entity(entity)],
            Self::SubClassOf { sub, sup } => vec![O::ClassExpression(sub), O::ClassExpression(sup)],
            Self::EquivalentClasses(operands) | Self::DisjointClasses(operands) => {
                operands.iter().map(O::ClassExpression).collect()
            }
            Self::DisjointUnion { class, operands } => std::iter::once(O::Class(class))
                .chain(operands.iter().map(O::ClassExpression))
                .collect(),
            Self::HasKey {
                class,
                object_properties,
                data_properties,
            } => std::iter::once(O::ClassExpression(class))
                .chain(object_properties.iter().map(O::ObjectProperty))
                .chain(data_properties.iter().map(O::DataProperty))
                .collect(),
            Self::SubObjectPropertyOf { sub, sup } => {
                vec![O::ObjectProperty(sub), O::ObjectProperty(sup)]
            }
            Self::SubPropertyChainOf { chain, sup } => chain
                .iter()
                .map(O::ObjectProperty)
                .chain(std::iter::once(O::ObjectProperty(sup)))
                .collect(),
            Self::EquivalentObjectProperties(properties)
            | Self::DisjointObjectProperties(properties) => {
                properties.iter().map(O::ObjectProperty).collect()
            }
            Self::InverseObjectProperties(first, second) => {
                vec![O::ObjectProperty(first), O::ObjectProperty(second)]
            }
            Self::ObjectPropertyDomain { property, domain: class }
            | Self::ObjectPropertyRange { property, range: class } => {
                vec![O::ObjectProperty(property), O::ClassExpression(class)]
            }
            Self::ObjectPropertyCharacteristic { property, .. } => vec![O::ObjectProperty(property)],
            Self::SubDataPropertyOf { sub, sup } => vec![O::DataProperty(sub), O::DataProperty(sup)],
            Self::EquivalentDataProperties(properties) | Self::DisjointDataProperties(properties) => {
                properties.iter().map(O::DataProperty).collect()
            }
            Self::DataPropertyDomain { property, domain } => {
                vec![O::DataProperty(property), O::ClassExpression(domain)]
            }
            Self::DataPropertyRange { property, range } => {
                vec![O::DataProperty(property), O::DataRange(range)]
            }
            Self::FunctionalDataProperty(property) => vec![O::DataProperty(property)],
            Self::DatatypeDefinition { datatype, range } => {
                vec![O::Datatype(datatype), O::DataRange(range)]
            }
            Self::ClassAssertion { class, individual } => {
                vec![O::ClassExpression(class), O::Individual(individual)]
            }
            Self::SameIndividual(individuals) | Self::DifferentIndividuals(individuals) => {
                individuals.iter().map(O::Individual).collect()
            }
            Self::ObjectPropertyAssertion {
                property,
                subject,
                object,
            }
            | Self::NegativeObjectPropertyAssertion {
                property,
                subject,
                object,
            } => vec![
                O::ObjectProperty(property),
                O::Individual(subject),
                O::Individual(object),
            ],
            Self::DataPropertyAssertion {
                property,
                subject,
                value,
            }
            | Self::NegativeDataPropertyAssertion {
                property,
                subject,
                value,
            } => vec![
                O::DataProperty(property),
                O::Individual(subject),
                O::Literal(value),
            ],
            Self::AnnotationAssertion {
                property,
                subject,
                value,
            } => vec![
                O::AnnotationProperty(property),
                O::AnnotationSubject(subject),
                O::AnnotationValue(value),
            ],
            Self::SubAnnotationPropertyOf { sub, sup } => {
                vec![O::AnnotationProperty(sub), O::AnnotationProperty(sup)]
            }
            Self::AnnotationPropertyDomain { property, domain: iri }
            | Self::AnnotationPropertyRange { property, range: iri } => {
                vec![O::AnnotationProperty(property), O::Iri(iri)]
            }
        }
    }

    // InverseObjectProperties is symmetric, so its pair is kept in a fixed order.
    fn normalized(self) -> Self {
        match self {
            Self::InverseObjectProperties(first, second) if second < first => {
                Self::InverseObjectProperties(second, first)
            }
            other => other,
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            Self::SubClassOf { sub, sup } => {
                sub.validate()?;
                sup.validate()
            }
            Self::EquivalentClasses(operands) | Self::DisjointClasses(operands) => {
                require(operands.len() >= 2, "class axioms need two distinct operands")?;
                operands.iter().try_for_each(ClassExpression::validate)
            }
            Self::DisjointUnion { operands, .. } => {
                require(operands.len() >= 2, "DisjointUnion needs two distinct operands")?;
                operands.iter().try_for_each(ClassExpression::validate)
            }
            Self::HasKey {
                class,
                object_properties,
                data_properties,
            } => {
                require(
                    !object_properties.is_empty() || !data_properties.is_empty(),
                    "HasKey needs at least one property",
                )?;
                class.validate()
            }
            Self::SubPropertyChainOf { chain, .. } => {
                require(chain.len() >= 2, "a property chain needs two links")
            }
            Self::EquivalentObjectProperties(properties)
            | Self::DisjointObjectProperties(properties) => require(
                properties.len() >= 2,
                "object property axioms need two distinct operands",
            ),
            Self::EquivalentDataProperties(properties) | Self::DisjointDataProperties(properties) => {
                require(
                    properties.len() >= 2,
                    "data property axioms need two distinct operands",
                )
            }
            Self::SameIndividual(individuals) | Self::DifferentIndividuals(individuals) => require(
                individuals.len() >= 2,
                "individual axioms need two distinct operands",
            ),
            Self::ObjectPropertyDomain { domain: class, .. }
            | Self::ObjectPropertyRange { range: class, .. }
            | Self::DataPropertyDomain { domain: class, .. }
            | Self::ClassAssertion { class, .. } => class.validate(),
            Self::DataPropertyRange { range, .. } | Self::DatatypeDefinition { range, .. } => {
                range.validate()
            }
            _ => Ok(()),
        }
    }
}

// ------------- Axiom -------------
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Axiom {
    body: AxiomBody,
    annotations: BTreeSet<Annotation>,
}

impl Axiom {
    /// Builds an unannotated axiom, rejecting structurally malformed bodies.
    pub fn new(body: AxiomBody) -> Result<Self> {
        Self::annotated(body, [])
    }
    pub fn annotated(
        body: AxiomBody,
        annotations: impl IntoIterator<Item = Annotation>,
    ) -> Result<Self> {
        let body = body.normalized();
        body.validate()?;
        Ok(Self {
            body,
            annotations: annotations.into_iter().collect(),
        })
    }
    pub fn kind(&self) -> AxiomType {
        self.body.kind()
    }
    /// The canonical form used as the key of annotation-insensitive lookups.
    pub fn body(&self) -> &AxiomBody {
        &self.body
    }
    pub fn operands(&self) -> Vec<Operand<'_>> {
        self.body.operands()
    }
    pub fn annotations(&self) -> &BTreeSet<Annotation> {
        &self.annotations
    }
    pub fn is_annotated(&self) -> bool {
        !self.annotations.is_empty()
    }
    pub fn without_annotations(&self) -> Axiom {
        Self {
            body: self.body.clone(),
            annotations: BTreeSet::new(),
        }
    }
    /// The same statement carrying a different annotation set.
    pub fn with_annotations(&self, annotations: impl IntoIterator<Item = Annotation>) -> Axiom {
        Self {
            body: self.body.clone(),
            annotations: annotations.into_iter().collect(),
        }
    }
    pub fn equals_ignoring_annotations(&self, other: &Axiom) -> bool {
        self.body == other.body
    }
    pub fn is_logical(&self) -> bool {
        self.kind().is_logical()
    }
    pub fn is_annotation_axiom(&self) -> bool {
        self.kind().is_annotation_axiom()
    }
    pub fn signature(&self) -> Signature {
        Signature::of(self)
    }
    pub fn referenced_entities(&self) -> BTreeSet<Entity> {
        self.signature().into_parts().0
    }
    pub fn referenced_anonymous_individuals(&self) -> BTreeSet<AnonymousIndividual> {
        self.signature().into_parts().1
    }

    /// Whether this axiom is part of the description of `entity`. Only the
    /// shapes listed per entity category count; a mere mention does not.
    pub fn describes(&self, entity: &Entity) -> bool {
        let iri = entity.iri().clone();
        match entity.entity_type() {
            EntityType::Class => self.describes_class(&Class::new(iri)),
            EntityType::ObjectProperty => {
                self.describes_property_expression(&ObjectPropertyExpression::from(ObjectProperty::new(iri)))
            }
            EntityType::DataProperty => self.describes_data_property(&DataProperty::new(iri)),
            EntityType::NamedIndividual => {
                self.describes_individual(&Individual::Named(NamedIndividual::new(iri)))
            }
            EntityType::AnnotationProperty => {
                self.describes_annotation_property(&AnnotationProperty::new(iri))
            }
            EntityType::Datatype => self.describes_datatype(&Datatype::new(iri)),
        }
    }

    fn describes_class(&self, class: &Class) -> bool {
        match &self.body {
            AxiomBody::SubClassOf { sub, .. } => sub.as_class() == Some(class),
            AxiomBody::EquivalentClasses(operands) | AxiomBody::DisjointClasses(operands) => {
                operands.iter().any(|operand| operand.as_class() == Some(class))
            }
            AxiomBody::DisjointUnion { class: named, .. } => named == class,
            _ => false,
        }
    }

    /// Whether this axiom describes the expression as written. For a named
    /// property this is what [`Axiom::describes`] answers; `inverse(P)` is
    /// described where it stands in subject position itself. Equivalence also
    /// matches on the expression's inverse.
    pub fn describes_property_expression(&self, property: &ObjectPropertyExpression) -> bool {
        match &self.body {
            AxiomBody::SubObjectPropertyOf { sub, .. } => sub == property,
            AxiomBody::EquivalentObjectProperties(properties) => {
                properties.contains(property) || properties.contains(&property.inverse())
            }
            AxiomBody::DisjointObjectProperties(properties) => properties.contains(property),
            AxiomBody::InverseObjectProperties(first, second) => first == property || second == property,
            AxiomBody::ObjectPropertyDomain { property: p, .. }
            | AxiomBody::ObjectPropertyRange { property: p, .. }
            | AxiomBody::ObjectPropertyCharacteristic { property: p, .. } => p == property,
            _ => false,
        }
    }

    fn describes_data_property(&self, property: &DataProperty) -> bool {
        match &self.body {
            AxiomBody::SubDataPropertyOf { sub, .. } => sub == property,
            AxiomBody::EquivalentDataProperties(properties)
            | AxiomBody::DisjointDataProperties(properties) => properties.contains(property),
            AxiomBody::DataPropertyDomain { property: p, .. }
            | AxiomBody::DataPropertyRange { property: p, .. }
            | AxiomBody::FunctionalDataProperty(p) => p == property,
            _ => false,
        }
    }

    /// Named and anonymous individuals share one allow-list.
    pub fn describes_individual(&self, individual: &Individual) -> bool {
        match &self.body {
            AxiomBody::ClassAssertion { individual: i, .. } => i == individual,
            AxiomBody::SameIndividual(individuals) | AxiomBody::DifferentIndividuals(individuals) => {
                individuals.contains(individual)
            }
            AxiomBody::ObjectPropertyAssertion { subject, .. }
            | AxiomBody::NegativeObjectPropertyAssertion { subject, .. }
            | AxiomBody::DataPropertyAssertion { subject, .. }
            | AxiomBody::NegativeDataPropertyAssertion { subject, .. } => subject == individual,
            _ => false,
        }
    }

    fn describes_annotation_property(&self, property: &AnnotationProperty) -> bool {
        match &self.body {
            AxiomBody::SubAnnotationPropertyOf { sub, .. } => sub == property,
            AxiomBody::AnnotationPropertyDomain { property: p, .. }
            | AxiomBody::AnnotationPropertyRange { property: p, .. } => p == property,
            _ => false,
        }
    }

    fn describes_datatype(&self, datatype: &Datatype) -> bool {
        matches!(&self.body, AxiomBody::DatatypeDefinition { datatype: d, .. } if d == datatype)
    }

    /// The subject of an annotation assertion, if this is one.
    pub fn annotation_subject(&self) -> Option<&AnnotationSubject> {
        match &self.body {
            AxiomBody::AnnotationAssertion { subject, .. } => Some(subject),
            _ => None,
        }
    }
}

// Shorthands for the most common shapes; anything else goes through `Axiom::new`.
impl AxiomBody {
    pub fn sub_class_of(sub: impl Into<ClassExpression>, sup: impl Into<ClassExpression>) -> Self {
        Self::SubClassOf {
            sub: sub.into(),
            sup: sup.into(),
        }
    }
    pub fn equivalent_classes(operands: impl IntoIterator<Item = ClassExpression>) -> Self {
        Self::EquivalentClasses(operands.into_iter().collect())
    }
    pub fn disjoint_classes(operands: impl IntoIterator<Item = ClassExpression>) -> Self {
        Self::DisjointClasses(operands.into_iter().collect())
    }
    pub fn declaration(entity: impl Into<Entity>) -> Self {
        Self::Declaration(entity.into())
    }
    pub fn class_assertion(class: impl Into<ClassExpression>, individual: impl Into<Individual>) -> Self {
        Self::ClassAssertion {
            class: class.into(),
            individual: individual.into(),
        }
    }
    pub fn object_property_assertion(
        property: impl Into<ObjectPropertyExpression>,
        subject: impl Into<Individual>,
        object: impl Into<Individual>,
    ) -> Self {
        Self::ObjectPropertyAssertion {
            property: property.into(),
            subject: subject.into(),
            object: object.into(),
        }
    }
    pub fn annotation_assertion(
        property: AnnotationProperty,
        subject: impl Into<AnnotationSubject>,
        value: impl Into<AnnotationValue>,
    ) -> Self {
        Self::AnnotationAssertion {
            property,
            subject: subject.into(),
            value: value.into(),
        }
    }
}
