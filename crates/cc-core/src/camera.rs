use std::fmt;

use log::{debug, info};

use crate::config::CameraConfig;
use crate::math::{Matrix4, Vector3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectionMode {
    Perspective,
    Orthographic,
}

impl ProjectionMode {
    pub fn toggled(self) -> Self {
        match self {
            ProjectionMode::Perspective => ProjectionMode::Orthographic,
            ProjectionMode::Orthographic => ProjectionMode::Perspective,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectionMode::Perspective => "Perspective",
            ProjectionMode::Orthographic => "Orthographic",
        }
    }
}

impl fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Window size in pixels, used for NDC conversion and the aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}

/// Orbiting camera: a fixed base position spun about +Y, always looking at
/// the configured target.
#[derive(Clone, Debug)]
pub struct CameraState {
    config: CameraConfig,
    viewport: Viewport,
    rotation_y: f32,
    mode: ProjectionMode,
    position: Vector3,
    projection: Matrix4,
    view: Matrix4,
}

impl CameraState {
    pub fn new(config: &CameraConfig, viewport: Viewport) -> Self {
        let mode = if config.start_orthographic {
            ProjectionMode::Orthographic
        } else {
            ProjectionMode::Perspective
        };

        let mut camera = Self {
            config: config.clone(),
            viewport,
            rotation_y: config.rotation_y_degrees,
            mode,
            position: config.base_position,
            projection: Matrix4::IDENTITY,
            view: Matrix4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera.update_view_matrix();
        camera
    }

    pub fn projection(&self) -> &Matrix4 {
        &self.projection
    }

    pub fn view(&self) -> &Matrix4 {
        &self.view
    }

    /// Camera position in world space.
    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn mode(&self) -> ProjectionMode {
        self.mode
    }

    /// Current Y rotation in degrees.
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn rotate(&mut self, delta_degrees: f32) {
        self.rotation_y += delta_degrees;
        self.update_view_matrix();
    }

    /// One rotate-left step (positive angle).
    pub fn rotate_left(&mut self) {
        self.rotate(self.config.rotation_step_degrees);
    }

    pub fn rotate_right(&mut self) {
        self.rotate(-self.config.rotation_step_degrees);
    }

    pub fn set_mode(&mut self, mode: ProjectionMode) {
        self.mode = mode;
        self.update_projection_matrix();
    }

    pub fn toggle_projection(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.update_projection_matrix();
    }

    fn update_projection_matrix(&mut self) {
        let config = &self.config;
        self.projection = match self.mode {
            ProjectionMode::Orthographic => {
                let ortho = &config.ortho;
                Matrix4::new().ortho(
                    ortho.left,
                    ortho.right,
                    ortho.bottom,
                    ortho.top,
                    ortho.near,
                    ortho.far,
                    config.z_zero_to_one,
                )
            }
            ProjectionMode::Perspective => Matrix4::new().perspective_generic(
                radians(config.fov_y_degrees),
                self.viewport.aspect_ratio(),
                config.near,
                config.far,
                config.z_zero_to_one,
            ),
        };
        debug!("Projection set to {} for {:?}", self.mode, self.viewport);
    }

    fn update_view_matrix(&mut self) {
        self.position = self
            .config
            .base_position
            .rotate_y(radians(self.rotation_y));

        info!(
            "Camera position: {}, {}, {}",
            self.position.x, self.position.y, self.position.z
        );

        self.view =
            Matrix4::new().look_at_generic(self.position, self.config.target, self.config.up);
    }
}

/// Degree to radian conversion carried out in double precision.
fn radians(degrees: f32) -> f32 {
    (degrees as f64).to_radians() as f32
}
