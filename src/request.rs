//! Layout requests for the CLI and WASM surfaces.
//!
//! A request is either a JSON document
//!
//! ```json
//! {"tasks": ["A", "B"], "edges": [["A", "B"]], "direction": "LR"}
//! ```
//!
//! or a plain edge list with one task (`A`) or edge chain (`A -> B -> C`)
//! per line and `#` comments. Edge-list tasks are collected in first-seen
//! order.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::config::{IsolatedPlacement, LayoutConfig};
use crate::error::{LayoutError, RequestError};
use crate::layout::{Layout, LayoutEngine, Size};

static ARROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*->\s*").expect("arrow pattern is valid"));
static TASK_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s#]+$").expect("task name pattern is valid"));

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutRequest {
    pub tasks: Vec<String>,
    pub edges: Vec<(String, String)>,
    pub direction: Option<String>,
    pub layer_spacing: Option<f64>,
    pub node_spacing: Option<f64>,
    pub algorithm: Option<String>,
    pub ordering: Option<String>,
    pub max_sweeps: Option<usize>,
    pub isolated: Option<IsolatedPlacement>,
    pub sink_sources: Option<bool>,
    pub node_sizes: BTreeMap<String, Size>,
}

impl LayoutRequest {
    /// JSON when the input starts with `{`, an edge list otherwise.
    pub fn parse(src: &str) -> Result<Self, RequestError> {
        if src.trim_start().starts_with('{') {
            Self::from_json(src)
        } else {
            Self::from_edge_list(src)
        }
    }

    pub fn from_json(src: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn from_edge_list(src: &str) -> Result<Self, RequestError> {
        let mut request = Self::default();
        let mut seen: HashSet<String> = HashSet::new();

        for (line_no, raw) in src.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }

            let names: Vec<&str> = ARROW.split(line).collect();
            if names.iter().any(|n| !TASK_NAME.is_match(n)) {
                return Err(RequestError::Syntax {
                    line: line_no + 1,
                    text: raw.trim().to_string(),
                });
            }
            for name in &names {
                if seen.insert(name.to_string()) {
                    request.tasks.push(name.to_string());
                }
            }
            for pair in names.windows(2) {
                request.edges.push((pair[0].to_string(), pair[1].to_string()));
            }
        }
        Ok(request)
    }

    /// Build the configuration this request asks for on top of `base`.
    pub fn config(&self, base: LayoutConfig) -> Result<LayoutConfig, LayoutError> {
        let mut config = base;
        if let Some(direction) = &self.direction {
            config.direction = direction.parse()?;
        }
        if let Some(algorithm) = &self.algorithm {
            config.algorithm = algorithm.parse()?;
        }
        if let Some(ordering) = &self.ordering {
            config.ordering = ordering.parse()?;
        }
        if let Some(spacing) = self.layer_spacing {
            config.layer_spacing = spacing;
        }
        if let Some(spacing) = self.node_spacing {
            config.node_spacing = spacing;
        }
        if let Some(max_sweeps) = self.max_sweeps {
            config.max_sweeps = max_sweeps;
        }
        if let Some(isolated) = self.isolated {
            config.isolated = isolated;
        }
        if let Some(sink) = self.sink_sources {
            config.sink_sources = sink;
        }
        config
            .node_sizes
            .extend(self.node_sizes.iter().map(|(id, size)| (id.clone(), *size)));
        Ok(config)
    }

    pub fn run(&self) -> Result<Layout, RequestError> {
        self.run_with(LayoutConfig::default())
    }

    pub fn run_with(&self, base: LayoutConfig) -> Result<Layout, RequestError> {
        let engine = LayoutEngine::new(self.config(base)?);
        Ok(engine.layout(self.tasks.as_slice(), self.edges.as_slice())?)
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_request.rs"]
mod tests;
