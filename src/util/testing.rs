//! Shared test scaffolding: logging bootstrap and a sample tree.

use std::collections::HashMap;
use std::env;
use std::sync::Once;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::arena::{NodeId, Tree};

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "trace");
        }
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // Create a filter for noisy modules
    let noisy_modules = ["generational_arena"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::ENTER | FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Labelled four-level tree used throughout the tests:
///
/// ```text
/// A1
/// ├── B1
/// │   └── C1
/// └── B2
///     ├── C2
///     ├── C3
///     │   ├── D1
///     │   └── D2
///     └── C4
///         ├── D3
///         ├── D4
///         └── D5
/// ```
#[derive(Debug, Clone)]
pub struct SampleTree {
    pub tree: Tree<&'static str>,
    pub root: NodeId,
    ids: HashMap<&'static str, NodeId>,
}

impl SampleTree {
    pub fn new() -> Self {
        const EDGES: [(&str, &str); 11] = [
            ("A1", "B1"),
            ("B1", "C1"),
            ("A1", "B2"),
            ("B2", "C2"),
            ("B2", "C3"),
            ("C3", "D1"),
            ("C3", "D2"),
            ("B2", "C4"),
            ("C4", "D3"),
            ("C4", "D4"),
            ("C4", "D5"),
        ];

        let mut tree = Tree::with_capacity(EDGES.len() + 1);
        let root = tree.insert("A1");
        let mut ids = HashMap::from([("A1", root)]);
        for (parent, child) in EDGES {
            let child_id = tree.insert(child);
            ids.insert(child, child_id);
            if let Some(&parent_id) = ids.get(parent) {
                tree.add_child(parent_id, child_id);
            }
        }
        Self { tree, root, ids }
    }

    /// Handle of the node labelled `label`.
    ///
    /// # Panics
    /// On a label that is not part of the sample.
    pub fn id(&self, label: &str) -> NodeId {
        match self.ids.get(label) {
            Some(&id) => id,
            None => panic!("no node labelled {label} in the sample tree"),
        }
    }

    /// Labels of `ids`, in order.
    pub fn labels(&self, ids: impl IntoIterator<Item = NodeId>) -> Vec<&'static str> {
        ids.into_iter()
            .filter_map(|id| self.tree.data(id).copied())
            .collect()
    }
}

impl Default for SampleTree {
    fn default() -> Self {
        Self::new()
    }
}
