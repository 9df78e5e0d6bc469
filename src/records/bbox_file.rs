//! The bounding-box file: raster identifier to one or more chip boxes

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::coordinate::BoundingBox;
use crate::errors::{BenchError, BenchResult};

/// Either a single box or an ordered list of boxes
///
/// Both shapes appear in bounding-box files; a single box is treated as a
/// list of one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoxSelection {
    Single(BoundingBox),
    Many(Vec<BoundingBox>),
}

impl BoxSelection {
    /// The boxes in order
    pub fn boxes(&self) -> &[BoundingBox] {
        match self {
            BoxSelection::Single(bbox) => std::slice::from_ref(bbox),
            BoxSelection::Many(boxes) => boxes,
        }
    }
}

impl From<Vec<BoundingBox>> for BoxSelection {
    fn from(boxes: Vec<BoundingBox>) -> Self {
        BoxSelection::Many(boxes)
    }
}

/// Mapping from raster identifier to its chip boxes, ordered by identifier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundingBoxFile {
    entries: BTreeMap<String, BoxSelection>,
}

impl BoundingBoxFile {
    pub fn new() -> Self {
        BoundingBoxFile::default()
    }

    /// Add or replace the boxes of an identifier
    pub fn insert(&mut self, identifier: &str, selection: impl Into<BoxSelection>) {
        self.entries.insert(identifier.to_string(), selection.into());
    }

    pub fn get(&self, identifier: &str) -> Option<&[BoundingBox]> {
        self.entries.get(identifier).map(BoxSelection::boxes)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (identifier, boxes) pairs in identifier order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[BoundingBox])> {
        self.entries.iter().map(|(id, sel)| (id.as_str(), sel.boxes()))
    }

    /// Check every box and reject identifiers without any
    pub fn validate(&self) -> BenchResult<()> {
        for (identifier, boxes) in self.iter() {
            if boxes.is_empty() {
                return Err(BenchError::NoBoundingBoxes(identifier.to_string()));
            }
            for bbox in boxes {
                bbox.validate().map_err(|e| {
                    BenchError::InvalidBoundingBox(format!("{}: {}", identifier, e))
                })?;
            }
        }
        Ok(())
    }

    pub fn from_json_str(content: &str) -> BenchResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Pretty-printed JSON (two-space indent)
    pub fn to_json_string(&self) -> BenchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> BenchResult<Self> {
        info!("Reading bounding boxes from {}", path.display());
        let content = fs::read_to_string(path)?;
        BoundingBoxFile::from_json_str(&content)
    }

    pub fn save(&self, path: &Path) -> BenchResult<()> {
        fs::write(path, self.to_json_string()?)?;
        info!("Bounding boxes saved to {}", path.display());
        Ok(())
    }
}
