// Topology model - nodes, undirected links, and the JSON topology document
use crate::{Error, Result};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Anything that names a graph node.
///
/// Lets the path search accept plain identifiers (`&str`, `String`) as well
/// as labelled [`Node`]s.
pub trait NodeRef {
    fn node_id(&self) -> &str;
}

impl NodeRef for str {
    fn node_id(&self) -> &str {
        self
    }
}

impl NodeRef for String {
    fn node_id(&self) -> &str {
        self.as_str()
    }
}

impl<T: NodeRef + ?Sized> NodeRef for &T {
    fn node_id(&self) -> &str {
        (**self).node_id()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Node {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Label for display, falling back to the identifier
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

impl NodeRef for Node {
    fn node_id(&self) -> &str {
        &self.id
    }
}

/// An undirected link between two nodes.
///
/// A link carries up to two weights: a physical length in kilometres and an
/// administrative routing cost. Either may be absent, in which case the
/// corresponding accessor falls back to a hop weight of `1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub a: String,
    pub b: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<u64>,
}

impl Link {
    #[inline]
    #[must_use]
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            length_km: None,
            cost: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_length(mut self, length_km: f64) -> Self {
        self.length_km = Some(length_km);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_cost(mut self, cost: u64) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Physical length, or `1.0` when absent or not a finite number
    #[inline]
    pub fn distance_weight(&self) -> f64 {
        match self.length_km {
            Some(km) if km.is_finite() => km,
            _ => 1.0,
        }
    }

    #[inline]
    pub fn cost_weight(&self) -> u64 {
        self.cost.unwrap_or(1)
    }

    /// Unordered endpoint pair, smaller identifier first.
    pub fn pair_key(&self) -> (&str, &str) {
        if self.a <= self.b {
            (&self.a, &self.b)
        } else {
            (&self.b, &self.a)
        }
    }

    /// True when this link joins `x` and `y` in either direction
    pub fn connects(&self, x: &str, y: &str) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

/// A static topology document: declared nodes plus the links between them.
///
/// ```rust
/// use topopath_core::Topology;
///
/// let topo = Topology::from_json_str(r#"{
///     "nodes": [{"id": "PAR", "label": "Paris"}, {"id": "LYS"}],
///     "links": [{"a": "PAR", "b": "LYS", "length_km": 465.0}]
/// }"#).unwrap();
/// topo.validate().unwrap();
/// assert_eq!(topo.node_label("PAR"), Some("Paris"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Topology {
    pub fn new(nodes: Vec<Node>, links: Vec<Link>) -> Self {
        Self { nodes, links }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    pub fn node_label(&self, id: &str) -> Option<&str> {
        self.nodes
            .iter()
            .find(|n| n.id == id)
            .map(Node::display_name)
    }

    /// Check the preconditions the path search relies on.
    ///
    /// Lengths must be finite and non-negative, and both endpoints of every
    /// link must be declared nodes.
    pub fn validate(&self) -> Result<()> {
        let declared: AHashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();

        for link in &self.links {
            if let Some(km) = link.length_km {
                if !km.is_finite() || km < 0.0 {
                    return Err(Error::InvalidWeight {
                        a: link.a.clone(),
                        b: link.b.clone(),
                        value: km,
                    });
                }
            }
            for end in [&link.a, &link.b] {
                if !declared.contains(end.as_str()) {
                    return Err(Error::UnknownEndpoint {
                        a: link.a.clone(),
                        b: link.b.clone(),
                        missing: end.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
