use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

// used to validate identifiers once, instead of on every use
use lazy_static::lazy_static;
use regex::Regex;

// IRIs appear in the loader configuration, which can be read from files
use serde::{Deserialize, Serialize};

use crate::error::{OntostoreError, Result};

lazy_static! {
    // a scheme followed by anything that is not whitespace or excluded by RFC 3987
    static ref IRI_PATTERN: Regex = Regex::new(r#"^[A-Za-z][A-Za-z0-9+.\-]*:[^\s<>"{}|\\^`]*$"#)
        .expect("IRI pattern compiles");
}

pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

// ------------- IRI -------------
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iri(Arc<str>);

impl Iri {
    pub fn new(iri: impl AsRef<str>) -> Result<Self> {
        let iri = iri.as_ref();
        if IRI_PATTERN.is_match(iri) {
            Ok(Self(Arc::from(iri)))
        } else {
            Err(OntostoreError::InvalidIri {
                iri: iri.to_owned(),
            })
        }
    }
    // Only for the vocabulary constants in this module, which are known to be valid.
    fn vocabulary(namespace: &str, local: &str) -> Self {
        Self(Arc::from(format!("{namespace}{local}")))
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
    /// The part of the IRI up to and including the last `#` or `/`.
    pub fn namespace(&self) -> &str {
        match self.0.rfind(['#', '/']) {
            Some(i) => &self.0[..=i],
            None => &self.0,
        }
    }
}
impl TryFrom<String> for Iri {
    type Error = OntostoreError;
    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}
impl From<Iri> for String {
    fn from(iri: Iri) -> Self {
        iri.0.to_string()
    }
}
impl FromStr for Iri {
    type Err = OntostoreError;
    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

// ------------- Entity -------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityType {
    Class,
    ObjectProperty,
    DataProperty,
    AnnotationProperty,
    NamedIndividual,
    Datatype,
}
impl EntityType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::ObjectProperty => "ObjectProperty",
            Self::DataProperty => "DataProperty",
            Self::AnnotationProperty => "AnnotationProperty",
            Self::NamedIndividual => "NamedIndividual",
            Self::Datatype => "Datatype",
        }
    }
}

/// A named element of an ontology. Two entities are the same when they have the
/// same type and IRI, so a punned IRI yields distinct entities.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entity {
    entity_type: EntityType,
    iri: Iri,
}
impl Entity {
    pub fn new(entity_type: EntityType, iri: Iri) -> Self {
        Self { entity_type, iri }
    }
    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }
    pub fn iri(&self) -> &Iri {
        &self.iri
    }
}
impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", self.entity_type.name(), self.iri)
    }
}

// Typed entities, so that axiom operands can only hold the right kind of name.
macro_rules! typed_entity {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(Iri);

        impl $name {
            pub fn new(iri: Iri) -> Self {
                Self(iri)
            }
            pub fn named(iri: &str) -> Result<Self> {
                Iri::new(iri).map(Self)
            }
            pub fn iri(&self) -> &Iri {
                &self.0
            }
            pub fn entity(&self) -> Entity {
                Entity::new(EntityType::$name, self.0.clone())
            }
        }
        impl From<$name> for Entity {
            fn from(typed: $name) -> Entity {
                Entity::new(EntityType::$name, typed.0)
            }
        }
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_entity!(Class);
typed_entity!(ObjectProperty);
typed_entity!(DataProperty);
typed_entity!(AnnotationProperty);
typed_entity!(NamedIndividual);
typed_entity!(Datatype);

impl Class {
    pub fn thing() -> Self {
        Self(Iri::vocabulary(OWL, "Thing"))
    }
    pub fn nothing() -> Self {
        Self(Iri::vocabulary(OWL, "Nothing"))
    }
}
impl Datatype {
    pub fn xsd_string() -> Self {
        Self(Iri::vocabulary(XSD, "string"))
    }
    pub fn xsd_integer() -> Self {
        Self(Iri::vocabulary(XSD, "integer"))
    }
    pub fn lang_string() -> Self {
        Self(Iri::vocabulary(RDF, "langString"))
    }
    pub fn rdfs_literal() -> Self {
        Self(Iri::vocabulary(RDFS, "Literal"))
    }
}
impl AnnotationProperty {
    pub fn rdfs_label() -> Self {
        Self(Iri::vocabulary(RDFS, "label"))
    }
    pub fn rdfs_comment() -> Self {
        Self(Iri::vocabulary(RDFS, "comment"))
    }
}

// ------------- Individuals -------------
/// An unnamed individual. Its node id is only meaningful inside the ontology
/// (or manager) that minted it, and identity is by node id alone.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnonymousIndividual(Arc<str>);
impl AnonymousIndividual {
    /// Accepts `_:label` or a bare label. Labels may not contain whitespace or
    /// a colon, which keeps them apart from the ids a manager mints.
    pub fn new(node_id: &str) -> Result<Self> {
        let local = node_id.strip_prefix("_:").unwrap_or(node_id);
        if local.is_empty() || local.chars().any(|c| c.is_whitespace() || c == ':') {
            return Err(OntostoreError::InvalidArgument(format!(
                "'{node_id}' is not a valid node id"
            )));
        }
        Ok(Self(Arc::from(format!("_:{local}"))))
    }
    pub(crate) fn generated(sequence: u64) -> Self {
        Self(Arc::from(format!("_:genid:{sequence}")))
    }
    pub fn node_id(&self) -> &str {
        &self.0
    }
}
impl fmt::Display for AnonymousIndividual {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Individual {
    Named(NamedIndividual),
    Anonymous(AnonymousIndividual),
}
impl From<NamedIndividual> for Individual {
    fn from(individual: NamedIndividual) -> Self {
        Self::Named(individual)
    }
}
impl From<AnonymousIndividual> for Individual {
    fn from(individual: AnonymousIndividual) -> Self {
        Self::Anonymous(individual)
    }
}

// ------------- Literals -------------
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    lexical: String,
    datatype: Datatype,
    language: Option<String>,
}
impl Literal {
    pub fn string(lexical: impl Into<String>) -> Self {
        Self::typed(lexical, Datatype::xsd_string())
    }
    pub fn typed(lexical: impl Into<String>, datatype: Datatype) -> Self {
        Self {
            lexical: lexical.into(),
            datatype,
            language: None,
        }
    }
    // language tags compare case-insensitively, so they are kept lower case
    pub fn lang(lexical: impl Into<String>, language: &str) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Datatype::lang_string(),
            language: Some(language.to_lowercase()),
        }
    }
    pub fn lexical(&self) -> &str {
        &self.lexical
    }
    pub fn datatype(&self) -> &Datatype {
        &self.datatype
    }
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

// ------------- Annotations -------------
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AnnotationSubject {
    Iri(Iri),
    Anonymous(AnonymousIndividual),
}
impl From<Iri> for AnnotationSubject {
    fn from(iri: Iri) -> Self {
        Self::Iri(iri)
    }
}
impl From<AnonymousIndividual> for AnnotationSubject {
    fn from(individual: AnonymousIndividual) -> Self {
        Self::Anonymous(individual)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AnnotationValue {
    Iri(Iri),
    Literal(Literal),
    Anonymous(AnonymousIndividual),
}
impl From<Iri> for AnnotationValue {
    fn from(iri: Iri) -> Self {
        Self::Iri(iri)
    }
}
impl From<Literal> for AnnotationValue {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}
impl From<AnonymousIndividual> for AnnotationValue {
    fn from(individual: AnonymousIndividual) -> Self {
        Self::Anonymous(individual)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Annotation {
    property: AnnotationProperty,
    value: AnnotationValue,
}
impl Annotation {
    pub fn new(property: AnnotationProperty, value: impl Into<AnnotationValue>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
    pub fn comment(text: &str) -> Self {
        Self::new(AnnotationProperty::rdfs_comment(), Literal::string(text))
    }
    pub fn label(text: &str) -> Self {
        Self::new(AnnotationProperty::rdfs_label(), Literal::string(text))
    }
    pub fn property(&self) -> &AnnotationProperty {
        &self.property
    }
    pub fn value(&self) -> &AnnotationValue {
        &self.value
    }
}

// ------------- Property expressions -------------
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ObjectPropertyExpression {
    Property(ObjectProperty),
    Inverse(ObjectProperty),
}
impl ObjectPropertyExpression {
    pub fn named_property(&self) -> &ObjectProperty {
        match self {
            Self::Property(p) | Self::Inverse(p) => p,
        }
    }
    pub fn is_inverse(&self) -> bool {
        matches!(self, Self::Inverse(_))
    }
    pub fn inverse(&self) -> Self {
        match self {
            Self::Property(p) => Self::Inverse(p.clone()),
            Self::Inverse(p) => Self::Property(p.clone()),
        }
    }
}
impl From<ObjectProperty> for ObjectPropertyExpression {
    fn from(property: ObjectProperty) -> Self {
        Self::Property(property)
    }
}

// ------------- Data ranges -------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Facet {
    Length,
    MinLength,
    MaxLength,
    Pattern,
    MinInclusive,
    MaxInclusive,
    MinExclusive,
    MaxExclusive,
    TotalDigits,
    FractionDigits,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FacetRestriction {
    pub facet: Facet,
    pub value: Literal,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DataRange {
    Datatype(Datatype),
    IntersectionOf(BTreeSet<DataRange>),
    UnionOf(BTreeSet<DataRange>),
    ComplementOf(Box<DataRange>),
    OneOf(BTreeSet<Literal>),
    Restriction {
        datatype: Datatype,
        facets: BTreeSet<FacetRestriction>,
    },
}
impl DataRange {
    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            Self::Datatype(_) => Ok(()),
            Self::IntersectionOf(ranges) | Self::UnionOf(ranges) => {
                require(ranges.len() >= 2, "data range intersections and unions need two operands")?;
                ranges.iter().try_for_each(DataRange::validate)
            }
            Self::ComplementOf(range) => range.validate(),
            Self::OneOf(literals) => require(!literals.is_empty(), "DataOneOf needs a literal"),
            Self::Restriction { facets, .. } => {
                require(!facets.is_empty(), "DatatypeRestriction needs a facet")
            }
        }
    }
}
impl From<Datatype> for DataRange {
    fn from(datatype: Datatype) -> Self {
        Self::Datatype(datatype)
    }
}

// ------------- Class expressions -------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cardinality {
    Min(u32),
    Max(u32),
    Exact(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClassExpression {
    Class(Class),
    ObjectIntersectionOf(BTreeSet<ClassExpression>),
    ObjectUnionOf(BTreeSet<ClassExpression>),
    ObjectComplementOf(Box<ClassExpression>),
    ObjectOneOf(BTreeSet<Individual>),
    ObjectSomeValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },
    ObjectAllValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },
    ObjectHasValue {
        property: ObjectPropertyExpression,
        value: Individual,
    },
    ObjectHasSelf(ObjectPropertyExpression),
    ObjectCardinality {
        cardinality: Cardinality,
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },
    DataSomeValuesFrom {
        property: DataProperty,
        range: DataRange,
    },
    DataAllValuesFrom {
        property: DataProperty,
        range: DataRange,
    },
    DataHasValue {
        property: DataProperty,
        value: Literal,
    },
    DataCardinality {
        cardinality: Cardinality,
        property: DataProperty,
        range: DataRange,
    },
}
impl ClassExpression {
    pub fn intersection_of(operands: impl IntoIterator<Item = ClassExpression>) -> Self {
        Self::ObjectIntersectionOf(operands.into_iter().collect())
    }
    pub fn union_of(operands: impl IntoIterator<Item = ClassExpression>) -> Self {
        Self::ObjectUnionOf(operands.into_iter().collect())
    }
    pub fn complement_of(operand: ClassExpression) -> Self {
        Self::ObjectComplementOf(Box::new(operand))
    }
    pub fn some_values_from(
        property: impl Into<ObjectPropertyExpression>,
        filler: impl Into<ClassExpression>,
    ) -> Self {
        Self::ObjectSomeValuesFrom {
            property: property.into(),
            filler: Box::new(filler.into()),
        }
    }
    pub fn all_values_from(
        property: impl Into<ObjectPropertyExpression>,
        filler: impl Into<ClassExpression>,
    ) -> Self {
        Self::ObjectAllValuesFrom {
            property: property.into(),
            filler: Box::new(filler.into()),
        }
    }
    /// The named class, when this expression is just a name.
    pub fn as_class(&self) -> Option<&Class> {
        match self {
            Self::Class(class) => Some(class),
            _ => None,
        }
    }
    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            Self::Class(_) | Self::ObjectHasValue { .. } | Self::ObjectHasSelf(_) => Ok(()),
            Self::ObjectIntersectionOf(operands) | Self::ObjectUnionOf(operands) => {
                require(operands.len() >= 2, "class intersections and unions need two operands")?;
                operands.iter().try_for_each(ClassExpression::validate)
            }
            Self::ObjectComplementOf(operand) => operand.validate(),
            Self::ObjectOneOf(individuals) => {
                require(!individuals.is_empty(), "ObjectOneOf needs an individual")
            }
            Self::ObjectSomeValuesFrom { filler, .. }
            | Self::ObjectAllValuesFrom { filler, .. }
            | Self::ObjectCardinality { filler, .. } => filler.validate(),
            Self::DataSomeValuesFrom { range, .. }
            | Self::DataAllValuesFrom { range, .. }
            | Self::DataCardinality { range, .. } => range.validate(),
            Self::DataHasValue { .. } => Ok(()),
        }
    }
}
impl From<Class> for ClassExpression {
    fn from(class: Class) -> Self {
        Self::Class(class)
    }
}

pub(crate) fn require(condition: bool, message: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(OntostoreError::InvalidArgument(message.to_string()))
    }
}
