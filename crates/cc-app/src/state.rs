use std::time::Instant;

use egui_wgpu::wgpu;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::Window;

use cc_core::config::Config;
use cc_core::picking::PickResult;
use cc_core::session::{CameraKey, KeyAction, Session};
use cc_render::CubeRenderer;

use crate::gfx::GfxState;

const COLOR_SEED: u64 = 0x5eed_c0be;

pub(crate) struct AppState<'wnd> {
    pub(crate) gfx: GfxState<'wnd>,
    pub(crate) session: Session,
    renderer: CubeRenderer,

    pub(crate) status: String,

    // Last cursor position in physical pixels
    cursor: Option<(f32, f32)>,
    started: Instant,
}

impl<'wnd> AppState<'wnd> {
    pub(crate) async fn new(window: &'wnd Window, config: Config) -> anyhow::Result<Self> {
        let gfx = GfxState::new(window).await?;

        let mut session = Session::new(config)?;
        session.resize(gfx.size.width, gfx.size.height);

        let renderer = CubeRenderer::new(
            gfx.device.clone(),
            gfx.queue.clone(),
            gfx.config.format,
            COLOR_SEED,
        );

        Ok(Self {
            gfx,
            session,
            renderer,
            status: "Ready".into(),
            cursor: None,
            started: Instant::now(),
        })
    }

    // --- Window resizing ----------------------------------------------------

    pub(crate) fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.gfx.resize(new_size);
            self.session.resize(new_size.width, new_size.height);
        }
    }

    // --- Mouse + keyboard input --------------------------------------------

    pub(crate) fn input(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some((position.x as f32, position.y as f32));
                true
            }

            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                true
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => match button {
                MouseButton::Left => self.click(false),
                MouseButton::Right => self.click(true),
                _ => false,
            },

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                let Some(key) = key_binding(*code) else {
                    return false;
                };
                let action = match state {
                    ElementState::Pressed => KeyAction::Pressed,
                    ElementState::Released => KeyAction::Released,
                };
                self.camera_key(key, action);
                true
            }

            _ => false,
        }
    }

    fn click(&mut self, is_secondary: bool) -> bool {
        let Some((x, y)) = self.cursor else {
            return false;
        };

        let result = self.session.on_mouse_click(x, y, is_secondary);
        self.status = match result {
            PickResult::Selected(index) => format!("Selected cube {}", index),
            PickResult::Spawned(index) => {
                let position = self.session.scene.cubes()[index].position();
                format!(
                    "Spawned cube {} at ({:.2}, {:.2}, {:.2})",
                    index, position.x, position.y, position.z
                )
            }
            PickResult::Missed => "Nothing hit".into(),
        };
        log::info!("{}", self.status);
        true
    }

    pub(crate) fn camera_key(&mut self, key: CameraKey, action: KeyAction) {
        if self.session.on_key(key, action) {
            let camera = &self.session.camera;
            self.status = format!(
                "{} projection, rotation {:.0} deg",
                camera.mode(),
                camera.rotation_y()
            );
        }
    }

    pub(crate) fn elapsed(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    // --- 3D rendering -------------------------------------------------------

    pub(crate) fn render_scene(
        &mut self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
    ) {
        let time = self.elapsed();
        self.renderer.render(
            encoder,
            view,
            &self.gfx.depth_view,
            &self.session.camera,
            &self.session.scene,
            time,
            (self.gfx.config.width, self.gfx.config.height),
        );
    }
}

/// Escape quits when released, like the camera keys.
pub(crate) fn is_quit_key(code: KeyCode, state: ElementState) -> bool {
    code == KeyCode::Escape && state == ElementState::Released
}

pub(crate) fn key_binding(code: KeyCode) -> Option<CameraKey> {
    match code {
        KeyCode::KeyA => Some(CameraKey::RotateLeft),
        KeyCode::KeyD => Some(CameraKey::RotateRight),
        KeyCode::KeyW => Some(CameraKey::ToggleProjection),
        _ => None,
    }
}
