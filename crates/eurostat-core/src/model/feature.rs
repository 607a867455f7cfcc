// crates/eurostat-core/src/model/feature.rs
use serde::Serialize;
use shapefile::Shape;
use std::collections::BTreeMap;

/// One attribute value from the feature's dBase record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Attribute {
    Text(String),
    Number(f64),
    Bool(bool),
    Null,
}

impl Attribute {
    /// Integer view, accepting whole numbers stored as numbers or text.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) if n.fract() == 0.0 => Some(*n as i64),
            Self::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// A boundary with its geometry and attribute table row.
pub struct Feature {
    pub geometry: Shape,
    pub properties: BTreeMap<String, Attribute>,
}

impl Feature {
    pub fn property(&self, name: &str) -> Option<&Attribute> {
        self.properties.get(name)
    }

    /// Administrative level stored under `attribute`, if it is a whole number.
    pub fn level(&self, attribute: &str) -> Option<i64> {
        self.property(attribute)?.as_i64()
    }
}

#[derive(Default)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
    /// Coordinate reference system as WKT, from the bundle's `.prj` member.
    pub crs: Option<String>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            features,
            crs: None,
        }
    }

    pub fn with_crs(mut self, wkt: impl Into<String>) -> Self {
        self.crs = Some(wkt.into());
        self
    }

    pub fn crs(&self) -> Option<&str> {
        self.crs.as_deref()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    /// Keep only the features whose `attribute` equals `level`.
    pub fn filter_level(self, attribute: &str, level: i64) -> Self {
        Self {
            features: self
                .features
                .into_iter()
                .filter(|f| f.level(attribute) == Some(level))
                .collect(),
            crs: self.crs,
        }
    }
}

impl IntoIterator for FeatureCollection {
    type Item = Feature;
    type IntoIter = std::vec::IntoIter<Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.into_iter()
    }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}
