//! Loader configuration.
//!
//! [`LoaderConfiguration`] is an immutable value: every setter returns a new
//! configuration and leaves the receiver untouched. Setting a value to what it
//! already is hands back the very same instance, which
//! [`LoaderConfiguration::same_instance`] can observe.
//!
//! The import resolver reads the missing-import strategy and the ignored
//! imports; all other settings are passed through to document loaders.
//!
//! A configuration can also be read with the `config` crate from an optional
//! file, overridden by `ONTOSTORE_*` environment variables:
//! ```toml
//! strict = true
//! connection_timeout = 5000
//! missing_import_handling_strategy = "SKIP"
//! ignored_imports = ["http://example.org/big-upper-ontology"]
//! ```

use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use config::{Config, Environment, File};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::construct::{Iri, OWL, RDF, RDFS, XSD};
use crate::error::Result;

const XML: &str = "http://www.w3.org/XML/1998/namespace";

lazy_static! {
    // imports of the W3C vocabularies never name a loadable ontology
    static ref DEFAULT_IGNORED_IMPORTS: HashSet<String> = [OWL, RDF, RDFS, XSD, XML]
        .iter()
        .flat_map(|namespace| [namespace.to_string(), namespace.trim_end_matches('#').to_string()])
        .collect();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MissingOntologyHeaderStrategy {
    /// Statements of a headerless document are included in the importing ontology.
    #[default]
    #[serde(alias = "include_graph")]
    IncludeGraph,
    /// A headerless document becomes an ontology of its own that is imported.
    #[serde(alias = "import_graph")]
    ImportGraph,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MissingImportHandlingStrategy {
    /// An unresolvable import fails the whole closure computation.
    #[default]
    #[serde(alias = "fail")]
    Fail,
    /// An unresolvable import is reported and skipped.
    #[serde(alias = "skip")]
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct Settings {
    load_annotations: bool,
    strict: bool,
    report_stack_traces: bool,
    follow_redirects: bool,
    accept_http_compression: bool,
    // milliseconds
    connection_timeout: u32,
    missing_ontology_header_strategy: MissingOntologyHeaderStrategy,
    missing_import_handling_strategy: MissingImportHandlingStrategy,
    ignored_imports: BTreeSet<Iri>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            load_annotations: true,
            strict: false,
            report_stack_traces: false,
            follow_redirects: true,
            accept_http_compression: true,
            connection_timeout: 20000,
            missing_ontology_header_strategy: MissingOntologyHeaderStrategy::IncludeGraph,
            missing_import_handling_strategy: MissingImportHandlingStrategy::Fail,
            ignored_imports: BTreeSet::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoaderConfiguration {
    settings: Arc<Settings>,
}

impl PartialEq for LoaderConfiguration {
    fn eq(&self, other: &Self) -> bool {
        self.settings == other.settings
    }
}
impl Eq for LoaderConfiguration {}

impl LoaderConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the settings present in `config`; absent keys keep their defaults.
    pub fn from_config(config: Config) -> Result<Self> {
        let settings: Settings = config.try_deserialize()?;
        Ok(Self {
            settings: Arc::new(settings),
        })
    }

    /// Layers `ONTOSTORE_*` environment variables over an optional settings file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            debug!(path = %path.display(), "reading loader configuration");
            builder = builder.add_source(File::from(path));
        }
        let config = builder
            .add_source(
                Environment::with_prefix("ONTOSTORE")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("ignored_imports"),
            )
            .build()?;
        Self::from_config(config)
    }

    /// True when both handles share one settings instance.
    pub fn same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.settings, &other.settings)
    }

    fn update(&self, unchanged: bool, change: impl FnOnce(&mut Settings)) -> Self {
        if unchanged {
            return self.clone();
        }
        let mut settings = Settings::clone(&self.settings);
        change(&mut settings);
        Self {
            settings: Arc::new(settings),
        }
    }

    pub fn is_load_annotation_axioms(&self) -> bool {
        self.settings.load_annotations
    }
    pub fn set_load_annotation_axioms(&self, load: bool) -> Self {
        self.update(self.settings.load_annotations == load, |s| {
            s.load_annotations = load
        })
    }
    pub fn is_strict(&self) -> bool {
        self.settings.strict
    }
    pub fn set_strict(&self, strict: bool) -> Self {
        self.update(self.settings.strict == strict, |s| s.strict = strict)
    }
    pub fn is_report_stack_traces(&self) -> bool {
        self.settings.report_stack_traces
    }
    pub fn set_report_stack_traces(&self, report: bool) -> Self {
        self.update(self.settings.report_stack_traces == report, |s| {
            s.report_stack_traces = report
        })
    }
    /// Whether redirects are followed, including across protocols.
    pub fn is_follow_redirects(&self) -> bool {
        self.settings.follow_redirects
    }
    pub fn set_follow_redirects(&self, follow: bool) -> Self {
        self.update(self.settings.follow_redirects == follow, |s| {
            s.follow_redirects = follow
        })
    }
    pub fn is_accepting_http_compression(&self) -> bool {
        self.settings.accept_http_compression
    }
    pub fn set_accepting_http_compression(&self, accept: bool) -> Self {
        self.update(self.settings.accept_http_compression == accept, |s| {
            s.accept_http_compression = accept
        })
    }
    /// Connection timeout in milliseconds.
    pub fn connection_timeout(&self) -> u32 {
        self.settings.connection_timeout
    }
    pub fn connection_timeout_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.settings.connection_timeout))
    }
    pub fn set_connection_timeout(&self, millis: u32) -> Self {
        self.update(self.settings.connection_timeout == millis, |s| {
            s.connection_timeout = millis
        })
    }
    pub fn missing_ontology_header_strategy(&self) -> MissingOntologyHeaderStrategy {
        self.settings.missing_ontology_header_strategy
    }
    pub fn set_missing_ontology_header_strategy(
        &self,
        strategy: MissingOntologyHeaderStrategy,
    ) -> Self {
        self.update(
            self.settings.missing_ontology_header_strategy == strategy,
            |s| s.missing_ontology_header_strategy = strategy,
        )
    }
    pub fn missing_import_handling_strategy(&self) -> MissingImportHandlingStrategy {
        self.settings.missing_import_handling_strategy
    }
    pub fn set_missing_import_handling_strategy(
        &self,
        strategy: MissingImportHandlingStrategy,
    ) -> Self {
        self.update(
            self.settings.missing_import_handling_strategy == strategy,
            |s| s.missing_import_handling_strategy = strategy,
        )
    }

    pub fn ignored_imports(&self) -> &BTreeSet<Iri> {
        &self.settings.ignored_imports
    }
    /// Explicitly ignored imports plus the W3C vocabularies.
    pub fn is_ignored_import(&self, iri: &Iri) -> bool {
        DEFAULT_IGNORED_IMPORTS.contains(iri.as_str()) || self.settings.ignored_imports.contains(iri)
    }
    pub fn add_ignored_import(&self, iri: Iri) -> Self {
        self.update(self.settings.ignored_imports.contains(&iri), |s| {
            s.ignored_imports.insert(iri);
        })
    }
    pub fn remove_ignored_import(&self, iri: &Iri) -> Self {
        self.update(!self.settings.ignored_imports.contains(iri), |s| {
            s.ignored_imports.remove(iri);
        })
    }
    pub fn clear_ignored_imports(&self) -> Self {
        self.update(self.settings.ignored_imports.is_empty(), |s| {
            s.ignored_imports.clear()
        })
    }
}
