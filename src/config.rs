use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use pcuboid_mesh::CuboidParams;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct CuboidConfig {
    #[serde(default)]
    pub shape: ShapeSection,
    #[serde(default)]
    pub export: ExportSection,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ShapeSection {
    #[serde(default = "default_half_extents")]
    pub half_extents: [f64; 3],
    #[serde(default = "default_subdivisions")]
    pub subdivisions: [u32; 3],
    #[serde(default = "default_tones")]
    pub tones: [f64; 3],
}
fn default_half_extents() -> [f64; 3] {
    [2.0, 1.0, 1.0]
}
fn default_subdivisions() -> [u32; 3] {
    [3, 3, 3]
}
fn default_tones() -> [f64; 3] {
    [5.0, 3.0, 3.0]
}
impl Default for ShapeSection {
    fn default() -> Self {
        Self {
            half_extents: default_half_extents(),
            subdivisions: default_subdivisions(),
            tones: default_tones(),
        }
    }
}

// Ranges offered by the interactive add-mesh panel.
pub const HOST_SUBDIVISIONS: (u32, u32) = (1, 10);
pub const HOST_HALF_EXTENT: (f64, f64) = (0.01, 10.0);
pub const HOST_TONE: (f64, f64) = (0.1, 9.0);

impl ShapeSection {
    /// Pulls every value into the interactive panel's ranges.
    pub fn clamp_to_host_ranges(&mut self) {
        for v in &mut self.subdivisions {
            *v = (*v).clamp(HOST_SUBDIVISIONS.0, HOST_SUBDIVISIONS.1);
        }
        for v in &mut self.half_extents {
            *v = v.clamp(HOST_HALF_EXTENT.0, HOST_HALF_EXTENT.1);
        }
        for v in &mut self.tones {
            *v = v.clamp(HOST_TONE.0, HOST_TONE.1);
        }
    }

    pub fn params(&self) -> CuboidParams {
        CuboidParams::new(self.half_extents, self.subdivisions, self.tones)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ExportSection {
    #[serde(default = "default_export_path")]
    pub path: PathBuf,
    #[serde(default = "default_object_name")]
    pub object_name: String,
}
fn default_export_path() -> PathBuf {
    PathBuf::from("cuboid.obj")
}
fn default_object_name() -> String {
    "cuboid".to_string()
}
impl Default for ExportSection {
    fn default() -> Self {
        Self {
            path: default_export_path(),
            object_name: default_object_name(),
        }
    }
}

impl CuboidConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(s)?)
    }
}

pub fn load_config_from_path(path: &Path) -> Result<CuboidConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    CuboidConfig::from_toml_str(&s)
}
