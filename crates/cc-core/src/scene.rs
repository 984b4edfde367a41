use crate::config::SceneConfig;
use crate::error::{Error, Result};
use crate::math::Vector3;

/// Half extent shared by every cube.
pub const CUBE_HALF_EXTENT: f32 = 1.0;

/// A pickable unit cube.
///
/// The bounding box is computed once from the construction position and is
/// not kept in sync with later moves; call [`Cube::refresh_aabb`] to rebuild it.
#[derive(Clone, Debug, PartialEq)]
pub struct Cube {
    position: Vector3,
    aabb_min: Vector3,
    aabb_max: Vector3,
    pub is_active: bool,
}

impl Cube {
    pub fn new(position: Vector3) -> Self {
        let half = Vector3::splat(CUBE_HALF_EXTENT);
        Self {
            position,
            aabb_min: position - half,
            aabb_max: position + half,
            is_active: false,
        }
    }

    /// World position.
    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn aabb_min(&self) -> Vector3 {
        self.aabb_min
    }

    pub fn aabb_max(&self) -> Vector3 {
        self.aabb_max
    }

    /// Moves the cube. The bounding box stays where it was.
    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }

    pub fn refresh_aabb(&mut self) {
        let half = Vector3::splat(CUBE_HALF_EXTENT);
        self.aabb_min = self.position - half;
        self.aabb_max = self.position + half;
    }
}

/// Ordered, append-only list of cubes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    cubes: Vec<Cube>,
}

impl Scene {
    pub fn new() -> Self {
        Self { cubes: Vec::new() }
    }

    pub fn from_config(config: &SceneConfig) -> Result<Self> {
        let mut scene = Self::new();
        for position in &config.cubes {
            scene.push(Cube::new(*position));
        }
        if let Some(index) = config.initially_active {
            scene.activate(index)?;
        }
        Ok(scene)
    }

    /// Appends a cube and returns its index.
    pub fn push(&mut self, cube: Cube) -> usize {
        self.cubes.push(cube);
        self.cubes.len() - 1
    }

    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cube> {
        self.cubes.iter()
    }

    pub fn deselect_all(&mut self) {
        self.select_only(None);
    }

    /// Makes `index` the only active cube, or clears every flag for `None`.
    /// An index past the end leaves nothing active.
    pub fn select_only(&mut self, index: Option<usize>) {
        for (i, cube) in self.cubes.iter_mut().enumerate() {
            cube.is_active = Some(i) == index;
        }
    }

    /// Marks `index` active, leaving every other cube's flag alone.
    pub fn activate(&mut self, index: usize) -> Result<()> {
        let len = self.cubes.len();
        let cube = self
            .cubes
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        cube.is_active = true;
        Ok(())
    }

    /// Index of the first active cube.
    pub fn active(&self) -> Option<usize> {
        self.cubes.iter().position(|cube| cube.is_active)
    }

    pub fn active_count(&self) -> usize {
        self.cubes.iter().filter(|cube| cube.is_active).count()
    }
}
