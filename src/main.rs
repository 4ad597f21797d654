use std::env;
use std::path::PathBuf;

use serde_json::json;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ontostore::axiom::{Axiom, AxiomBody};
use ontostore::configuration::LoaderConfiguration;
use ontostore::construct::{Annotation, Class, ClassExpression, Entity, Iri, NamedIndividual};
use ontostore::manager::{OntologyDocument, OntologyManager};
use ontostore::ontology::{AxiomCollection, Imports, OntologyId};

// Loads a small pizza ontology split over three documents that import each
// other in a cycle, then prints what its imports closure holds as JSON.
fn run(config_path: Option<PathBuf>) -> ontostore::Result<()> {
    let configuration = LoaderConfiguration::load(config_path.as_deref())?;
    info!(
        strict = configuration.is_strict(),
        missing_imports = ?configuration.missing_import_handling_strategy(),
        "loader configured"
    );
    let manager = OntologyManager::new(configuration);

    let pizza = Iri::new("http://example.org/pizza")?;
    let toppings = Iri::new("http://example.org/toppings")?;
    let bases = Iri::new("http://example.org/bases")?;

    let class = |local: &str| Class::named(&format!("http://example.org/pizza#{local}"));
    let (food, pizza_class, topping, base) = (
        class("Food")?,
        class("Pizza")?,
        class("Topping")?,
        class("Base")?,
    );
    let margherita = NamedIndividual::named("http://example.org/pizza#margherita")?;

    let mut root = OntologyDocument::new(OntologyId::new(pizza.clone()));
    root.imports = vec![toppings.clone(), Iri::new("http://www.w3.org/2002/07/owl")?];
    root.axioms = vec![
        Axiom::new(AxiomBody::declaration(pizza_class.clone()))?,
        Axiom::annotated(
            AxiomBody::sub_class_of(pizza_class.clone(), food.clone()),
            [Annotation::comment("every pizza is food")],
        )?,
        Axiom::new(AxiomBody::class_assertion(pizza_class.clone(), margherita))?,
    ];

    let mut topping_document = OntologyDocument::new(OntologyId::new(toppings.clone()));
    topping_document.imports = vec![bases.clone()];
    topping_document.axioms = vec![Axiom::new(AxiomBody::sub_class_of(topping.clone(), food.clone()))?];

    let mut base_document = OntologyDocument::new(OntologyId::new(bases));
    base_document.imports = vec![toppings];
    base_document.axioms = vec![
        Axiom::new(AxiomBody::sub_class_of(base.clone(), food.clone()))?,
        Axiom::new(AxiomBody::disjoint_classes([
            ClassExpression::from(base),
            ClassExpression::from(topping),
        ]))?,
    ];

    let root = manager.load_document(root)?;
    manager.load_document(topping_document)?;
    manager.load_document(base_document)?;

    let closure = manager.scope(&root, Imports::Included)?;
    let food = Entity::from(food);
    let report = json!({
        "root": root.id().to_string(),
        "closure": closure.ids().iter().map(ToString::to_string).collect::<Vec<_>>(),
        "ignored_imports": closure.ignored_imports().iter().map(Iri::as_str).collect::<Vec<_>>(),
        "skipped_imports": closure.skipped_imports().iter().map(|s| s.import.as_str()).collect::<Vec<_>>(),
        "axioms": closure.axiom_count(),
        "logical_axioms": closure.logical_axiom_count(),
        "referencing_food": closure.referencing_axioms(&food).len(),
        "describing_food": closure.describing_axioms(&food).len(),
    });
    println!("{}", serde_json::to_string_pretty(&report).unwrap_or_else(|_| report.to_string()));
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = env::args().nth(1).map(PathBuf::from);
    if let Err(e) = run(config_path) {
        error!("{e}");
        std::process::exit(1);
    }
}
