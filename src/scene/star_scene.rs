//! Star scene serialization
//!
//! A [`StarScene`] lists stars with their topology and colour. Scenes are
//! stored as RON files so layouts can be edited without recompiling.

use serde::{Serialize, Deserialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use starlab_geometry::{GeometryError, StarShape, Topology};
use starlab_render::StarBatch;

/// One star in a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneStar {
    /// Star parameters
    pub shape: StarShape,
    /// Topology the star is drawn with
    pub topology: Topology,
    /// Fill colour [r, g, b, a]
    pub color: [f32; 4],
}

impl SceneStar {
    /// Build the draw batch, drawing with `topology` instead of the star's own when given
    pub fn to_batch(&self, topology: Option<Topology>) -> StarBatch {
        StarBatch::from_star(&self.shape, topology.unwrap_or(self.topology), self.color)
    }
}

/// A serializable list of stars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarScene {
    /// Scene name (for display/debugging)
    pub name: String,
    /// Stars in draw order
    pub stars: Vec<SceneStar>,
}

const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
const CYAN: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
const MAGENTA: [f32; 4] = [1.0, 0.0, 1.0, 1.0];

impl StarScene {
    /// Create a new empty scene
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stars: Vec::new(),
        }
    }

    /// Add a star, validating its parameters
    pub fn with_star(
        mut self,
        shape: StarShape,
        topology: Topology,
        color: [f32; 4],
    ) -> Result<Self, GeometryError> {
        shape.validate()?;
        self.stars.push(SceneStar { shape, topology, color });
        Ok(self)
    }

    /// The built-in layout: one star per topology, plus two extras
    pub fn builtin() -> Self {
        let star = |center: [f32; 2], points, outer, inner| StarShape {
            center,
            points,
            outer_radius: outer,
            inner_radius: inner,
            rotation: 0.0,
        };
        let entry = |shape, topology, color| SceneStar { shape, topology, color };

        Self {
            name: "Stars".to_string(),
            stars: vec![
                entry(star([-0.6, 0.6], 4, 0.25, 0.1), Topology::TriangleFan, YELLOW),
                entry(star([0.6, 0.6], 6, 0.25, 0.1), Topology::TriangleList, YELLOW),
                entry(star([0.0, -0.3], 5, 0.3, 0.12), Topology::TriangleStrip, YELLOW),
                entry(star([-0.8, -0.6], 5, 0.2, 0.08), Topology::TriangleFan, CYAN),
                entry(star([0.8, -0.6], 4, 0.2, 0.08), Topology::TriangleList, MAGENTA),
            ],
        }
    }

    /// Load a scene from a RON file and validate every star
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneError> {
        let contents = fs::read_to_string(path)?;
        let scene: StarScene = ron::from_str(&contents)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Save a scene to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SceneError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Check every star's parameters
    pub fn validate(&self) -> Result<(), SceneError> {
        for star in &self.stars {
            star.shape.validate()?;
        }
        Ok(())
    }

    /// Draw batches for every star
    pub fn batches(&self, topology: Option<Topology>) -> Vec<StarBatch> {
        self.stars.iter().map(|s| s.to_batch(topology)).collect()
    }
}

/// Error loading or saving a scene
#[derive(Debug)]
pub enum SceneError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// RON parse error
    Parse(ron::error::SpannedError),
    /// RON serialization error
    Serialize(ron::Error),
    /// A star has invalid parameters
    Geometry(GeometryError),
}

impl From<io::Error> for SceneError {
    fn from(e: io::Error) -> Self {
        SceneError::Io(e)
    }
}

impl From<ron::error::SpannedError> for SceneError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneError::Parse(e)
    }
}

impl From<ron::Error> for SceneError {
    fn from(e: ron::Error) -> Self {
        SceneError::Serialize(e)
    }
}

impl From<GeometryError> for SceneError {
    fn from(e: GeometryError) -> Self {
        SceneError::Geometry(e)
    }
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Io(e) => write!(f, "IO error: {}", e),
            SceneError::Parse(e) => write!(f, "Parse error: {}", e),
            SceneError::Serialize(e) => write!(f, "Serialize error: {}", e),
            SceneError::Geometry(e) => write!(f, "Invalid star: {}", e),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::Io(e) => Some(e),
            SceneError::Parse(e) => Some(e),
            SceneError::Serialize(e) => Some(e),
            SceneError::Geometry(e) => Some(e),
        }
    }
}
