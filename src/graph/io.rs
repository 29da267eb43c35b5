//! I/O 支持：`(起点, 终点, 权值)` 三元组的导入导出，以及 JSON、RON 序列化接口。
use std::fmt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::graph::core::{Graph, GraphError};
use crate::graph::structure::Weight;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("ron error: {0}")]
    Ron(#[from] ron::Error),
    #[error("ron error: {0}")]
    RonSpanned(#[from] ron::error::SpannedError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why an edge list could not be turned into a graph. Loading is atomic:
/// on any of these the caller receives no graph at all.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("record {index}: weight `{raw}` is not a number")]
    UnparsableWeight { index: usize, raw: String },
    #[error("record {index}: negative weight {weight}")]
    NegativeWeight { index: usize, weight: Weight },
    #[error("record {index}: {source}")]
    Record { index: usize, source: GraphError },
}

/// Weight cell of an edge record, either already numeric or still text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordWeight {
    Number(Weight),
    Text(String),
}

impl RecordWeight {
    pub fn parse(&self) -> Option<Weight> {
        match self {
            RecordWeight::Number(weight) => Some(*weight),
            RecordWeight::Text(raw) => raw.trim().parse().ok(),
        }
    }
}

impl fmt::Display for RecordWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordWeight::Number(weight) => write!(f, "{weight}"),
            RecordWeight::Text(raw) => f.write_str(raw),
        }
    }
}

/// One `(source, target, weight)` triple. The Portuguese column names
/// `Origem`, `Destino` and `Peso` are accepted as aliases.
///
/// Records are read from JSON or RON carriers only; CSV tables must be
/// converted first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    #[serde(alias = "Origem")]
    pub source: String,
    #[serde(alias = "Destino")]
    pub target: String,
    #[serde(alias = "Peso")]
    pub weight: RecordWeight,
}

impl EdgeRecord {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: Weight) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight: RecordWeight::Number(weight),
        }
    }
}

impl Graph {
    /// Builds a graph from an edge list.
    ///
    /// Unlike [`Graph::add_edge`], endpoints are created on first mention.
    /// Every weight must be a finite, non-negative number; the first bad
    /// record aborts the whole load.
    pub fn from_records(records: &[EdgeRecord]) -> Result<Self, LoadError> {
        let mut graph = Graph::empty();
        for (index, record) in records.iter().enumerate() {
            let weight = record
                .weight
                .parse()
                .ok_or_else(|| LoadError::UnparsableWeight {
                    index,
                    raw: record.weight.to_string(),
                })?;
            if weight < 0.0 {
                return Err(LoadError::NegativeWeight { index, weight });
            }
            graph.add_vertex(record.source.as_str());
            graph.add_vertex(record.target.as_str());
            graph
                .add_edge(&record.source, &record.target, weight)
                .map_err(|source| LoadError::Record { index, source })?;
        }
        log::debug!(
            "loaded {} records into {} vertices and {} edges",
            records.len(),
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Edge list in edge iteration order. Isolated vertices are not part of
    /// the triple format and are lost.
    pub fn to_records(&self) -> Vec<EdgeRecord> {
        self.edges()
            .map(|edge| {
                let (a, b) = edge.endpoints();
                EdgeRecord::new(a.as_str(), b.as_str(), edge.weight())
            })
            .collect()
    }
}

/// Carrier format for records and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Json,
    Ron,
}

impl Format {
    /// Format named by the file extension, `None` for anything other than
    /// `.json` or `.ron`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        ext.parse().ok()
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Format::Json),
            "ron" => Ok(Format::Ron),
            other => Err(format!("unsupported format `{other}`")),
        }
    }
}

pub fn read_records<P: AsRef<Path>>(path: P, format: Format) -> Result<Vec<EdgeRecord>, IoError> {
    match format {
        Format::Json => read_json(path),
        Format::Ron => read_ron(path),
    }
}

pub fn write_records<P: AsRef<Path>>(
    path: P,
    format: Format,
    records: &[EdgeRecord],
) -> Result<(), IoError> {
    match format {
        Format::Json => write_json(path, &records),
        Format::Ron => write_ron(path, &records),
    }
}

pub fn to_json_string<T>(value: &T) -> Result<String, IoError>
where
    T: Serialize,
{
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn from_json_str<T>(s: &str) -> Result<T, IoError>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_str(s)?)
}

pub fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<(), IoError> {
    let mut file = File::create(path)?;
    let content = to_json_string(value)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn read_json<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> Result<T, IoError> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    from_json_str(&content)
}

pub fn to_ron_string<T>(value: &T) -> Result<String, IoError>
where
    T: Serialize,
{
    let pretty = PrettyConfig::new().new_line(String::from("\n"));
    Ok(ron::ser::to_string_pretty(value, pretty)?)
}

pub fn from_ron_str<T>(s: &str) -> Result<T, IoError>
where
    T: DeserializeOwned,
{
    Ok(ron::from_str(s)?)
}

pub fn write_ron<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<(), IoError> {
    let mut file = File::create(path)?;
    let content = to_ron_string(value)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn read_ron<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> Result<T, IoError> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    from_ron_str(&content)
}
