use log::{debug, info};

use crate::camera::{CameraState, Viewport};
use crate::config::Config;
use crate::error::Result;
use crate::picking::{self, PickResult};
use crate::scene::Scene;

/// Camera actions bound to keys by the window driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraKey {
    RotateLeft,
    RotateRight,
    ToggleProjection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Pressed,
    Released,
}

/// Everything the input and render drivers touch, owned in one place and
/// mutated only from the event loop thread.
pub struct Session {
    config: Config,
    pub camera: CameraState,
    pub scene: Scene,
}

impl Session {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let viewport = Viewport::new(config.window.width, config.window.height);
        let camera = CameraState::new(&config.camera, viewport);
        let scene = Scene::from_config(&config.scene)?;
        info!(
            "Session ready: {} cubes, {} projection",
            scene.len(),
            camera.mode()
        );

        Ok(Self {
            config,
            camera,
            scene,
        })
    }

    /// Handles a click at screen coordinates. A secondary-button click may
    /// spawn a cube when nothing is hit.
    pub fn on_mouse_click(
        &mut self,
        screen_x: f32,
        screen_y: f32,
        is_secondary: bool,
    ) -> PickResult {
        debug!("Mouse click at {}, {} (secondary: {})", screen_x, screen_y, is_secondary);
        picking::pick(
            screen_x,
            screen_y,
            &self.camera,
            &mut self.scene,
            is_secondary,
            self.config.picking.hit_test,
        )
    }

    /// Camera keys act on release. Returns whether the camera changed.
    pub fn on_key(&mut self, key: CameraKey, action: KeyAction) -> bool {
        if action != KeyAction::Released {
            return false;
        }

        match key {
            CameraKey::RotateLeft => self.camera.rotate_left(),
            CameraKey::RotateRight => self.camera.rotate_right(),
            CameraKey::ToggleProjection => self.camera.toggle_projection(),
        }
        true
    }

    /// Zero-sized windows (minimised) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.resize(Viewport::new(width, height));
        }
    }
}
