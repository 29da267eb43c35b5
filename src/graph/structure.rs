//! 图的静态结构元素：顶点、规范化边键、带权边与权值策略。
use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

pub type Weight = f64;

/// Opaque vertex label.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vertex(String);

impl Vertex {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Vertex {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Vertex {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Vertex {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Debug for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vertex").field(&self.0).finish()
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unordered vertex pair, stored with the smaller label first.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeKey {
    low: Vertex,
    high: Vertex,
}

impl EdgeKey {
    pub fn new(a: impl Into<Vertex>, b: impl Into<Vertex>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn low(&self) -> &Vertex {
        &self.low
    }

    pub fn high(&self) -> &Vertex {
        &self.high
    }

    pub fn contains(&self, vertex: &str) -> bool {
        self.low.as_str() == vertex || self.high.as_str() == vertex
    }

    /// The endpoint opposite to `vertex`, if `vertex` is an endpoint.
    pub fn other(&self, vertex: &str) -> Option<&Vertex> {
        if self.low.as_str() == vertex {
            Some(&self.high)
        } else if self.high.as_str() == vertex {
            Some(&self.low)
        } else {
            None
        }
    }
}

impl fmt::Debug for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// Weighted undirected edge as handed out to callers and renderers.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(flatten)]
    key: EdgeKey,
    weight: Weight,
}

impl Edge {
    pub fn new(a: impl Into<Vertex>, b: impl Into<Vertex>, weight: Weight) -> Self {
        Self {
            key: EdgeKey::new(a, b),
            weight,
        }
    }

    pub(crate) fn from_key(key: EdgeKey, weight: Weight) -> Self {
        Self { key, weight }
    }

    pub fn key(&self) -> &EdgeKey {
        &self.key
    }

    pub fn endpoints(&self) -> (&Vertex, &Vertex) {
        (&self.key.low, &self.key.high)
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn touches(&self, vertex: &str) -> bool {
        self.key.contains(vertex)
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.key, self.weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.key.low, self.key.high, self.weight)
    }
}

/// Which finite weights a [`Graph`](crate::graph::Graph) accepts.
///
/// Non-finite weights are always rejected. Prim, Borůvka and Kruskal stay
/// correct with negative weights, so they are admitted unless the graph was
/// built with [`WeightPolicy::NonNegative`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeightPolicy {
    #[default]
    AllowNegative,
    NonNegative,
}

impl WeightPolicy {
    pub fn admits(self, weight: Weight) -> bool {
        if !weight.is_finite() {
            return false;
        }
        match self {
            WeightPolicy::AllowNegative => true,
            WeightPolicy::NonNegative => weight >= 0.0,
        }
    }
}
