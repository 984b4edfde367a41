mod app;
mod gfx;
mod state;
mod ui;

use egui_wgpu::wgpu;
use winit::event::{Event, KeyEvent, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::Window;

use cc_core::config::Config;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::default();
    config.validate()?;

    let event_loop = EventLoop::new()?;
    let window = event_loop.create_window(
        Window::default_attributes()
            .with_title(config.window.title.as_str())
            .with_inner_size(winit::dpi::PhysicalSize::new(
                config.window.width,
                config.window.height,
            ))
    )?;

    let mut app = pollster::block_on(app::App::new(&window, config))?;

    event_loop.run(move |event, control_flow| {
        match event {
            Event::WindowEvent { ref event, .. } => {
                if !app.input(event) {
                    match event {
                        WindowEvent::CloseRequested => control_flow.exit(),
                        WindowEvent::KeyboardInput {
                            event: KeyEvent {
                                state,
                                physical_key: PhysicalKey::Code(code),
                                ..
                            },
                            ..
                        } if state::is_quit_key(*code, *state) => control_flow.exit(),
                        WindowEvent::Resized(physical_size) => {
                            app.resize(*physical_size);
                        }
                        WindowEvent::RedrawRequested => {
                            match app.render() {
                                Ok(_) => {}
                                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                                    app.resize(app.size())
                                }
                                Err(wgpu::SurfaceError::OutOfMemory) => {
                                    log::error!("Surface out of memory, exiting");
                                    control_flow.exit()
                                }
                                Err(e) => log::warn!("Surface error: {:?}", e),
                            }
                        }
                        _ => {}
                    }
                }
            }
            Event::AboutToWait => {
                app.window.request_redraw();
            }
            _ => {}
        }
    })?;

    Ok(())
}
