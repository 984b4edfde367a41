use crate::error::{Error, Result};
use crate::math::Vector3;
use crate::picking::HitTest;

/// Top-level configuration for a cube clicking session.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub picking: PickingConfig,
    pub scene: SceneConfig,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    /// Camera position before the Y rotation is applied, in world space.
    pub base_position: Vector3,
    pub target: Vector3,
    pub up: Vector3,
    pub rotation_y_degrees: f32,
    /// Degrees added or removed per rotate key release.
    pub rotation_step_degrees: f32,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub ortho: OrthoConfig,
    pub z_zero_to_one: bool,
    pub start_orthographic: bool,
}

/// Fixed orthographic box. It deliberately ignores the window aspect ratio.
#[derive(Clone, Debug, PartialEq)]
pub struct OrthoConfig {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PickingConfig {
    pub hit_test: HitTest,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    /// Cube positions in list order.
    pub cubes: Vec<Vector3>,
    pub initially_active: Option<usize>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Cube Clicking".into(),
            width: 1920,
            height: 1080,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            base_position: Vector3::new(4.0, 3.0, 3.0),
            target: Vector3::ZERO,
            up: Vector3::Y,
            rotation_y_degrees: 20.0,
            rotation_step_degrees: 10.0,
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 100.0,
            ortho: OrthoConfig::default(),
            z_zero_to_one: false,
            start_orthographic: false,
        }
    }
}

impl Default for OrthoConfig {
    fn default() -> Self {
        Self {
            left: -4.0,
            right: 4.0,
            bottom: -4.0,
            top: 4.0,
            near: 0.5,
            far: 10000.0,
        }
    }
}

impl Default for PickingConfig {
    fn default() -> Self {
        Self {
            hit_test: HitTest::Line,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        // Reverse order on purpose: the cube behind must not win over the one in front.
        Self {
            cubes: vec![
                Vector3::new(-3.0, 0.0, -3.0),
                Vector3::new(-3.0, 0.0, 0.0),
                Vector3::new(0.0, 0.0, 0.0),
            ],
            initially_active: Some(2),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            picking: PickingConfig::default(),
            scene: SceneConfig::default(),
        }
    }
}

impl Config {
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    pub fn with_hit_test(mut self, hit_test: HitTest) -> Self {
        self.picking.hit_test = hit_test;
        self
    }

    pub fn with_cubes(mut self, cubes: Vec<Vector3>, initially_active: Option<usize>) -> Self {
        self.scene = SceneConfig {
            cubes,
            initially_active,
        };
        self
    }

    /// Checks the values the projection and picking math cannot recover from.
    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }

        let camera = &self.camera;
        if !(camera.fov_y_degrees > 0.0 && camera.fov_y_degrees < 180.0) {
            return Err(Error::InvalidConfig(format!(
                "vertical field of view must be in (0, 180) degrees, got {}",
                camera.fov_y_degrees
            )));
        }
        // A far plane at +inf is covered by `far > near`; a near plane at +inf
        // selects the reversed infinite projection and needs a finite far plane.
        let forward_range = camera.near > 0.0 && camera.far > camera.near;
        let reversed_infinite =
            camera.near == f32::INFINITY && camera.far > 0.0 && camera.far.is_finite();
        if !(forward_range || reversed_infinite) {
            return Err(Error::InvalidConfig(format!(
                "perspective depth range must satisfy 0 < near < far \
                 or near = inf > far > 0, got {}..{}",
                camera.near, camera.far
            )));
        }
        if !camera.base_position.is_finite() || camera.base_position == camera.target {
            return Err(Error::InvalidConfig(
                "camera base position must be finite and differ from the target".into(),
            ));
        }

        let ortho = &camera.ortho;
        if !(ortho.right != ortho.left && ortho.top != ortho.bottom && ortho.far != ortho.near) {
            return Err(Error::InvalidConfig("orthographic box has zero extent".into()));
        }

        if let Some(index) = self.scene.initially_active {
            if index >= self.scene.cubes.len() {
                return Err(Error::IndexOutOfRange {
                    index,
                    len: self.scene.cubes.len(),
                });
            }
        }

        Ok(())
    }
}
