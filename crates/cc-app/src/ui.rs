use egui::{Color32, Context, RichText};

use cc_core::session::{CameraKey, KeyAction};

use crate::state::AppState;

pub(crate) fn draw_ui(ctx: &Context, state: &mut AppState) {
    // Top panel
    egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Cube Clicking");
            ui.separator();
            ui.label(RichText::new(&state.status).color(Color32::LIGHT_BLUE));
        });
    });

    // Side panel
    egui::SidePanel::right("side_panel").default_width(260.0).show(ctx, |ui| {
        ui.heading("Camera");
        ui.separator();

        let camera = &state.session.camera;
        let position = camera.position();
        ui.label(format!("Projection: {}", camera.mode()));
        ui.label(format!("Rotation: {:.0} deg", camera.rotation_y()));
        ui.label(format!(
            "Position: [{:.2}, {:.2}, {:.2}]",
            position.x, position.y, position.z
        ));

        ui.horizontal(|ui| {
            if ui.button("⟲ Left (A)").clicked() {
                state.camera_key(CameraKey::RotateLeft, KeyAction::Released);
            }
            if ui.button("Right (D) ⟳").clicked() {
                state.camera_key(CameraKey::RotateRight, KeyAction::Released);
            }
        });
        if ui.button("Toggle projection (W)").clicked() {
            state.camera_key(CameraKey::ToggleProjection, KeyAction::Released);
        }

        ui.separator();

        ui.heading(format!("Cubes ({})", state.session.scene.len()));
        egui::ScrollArea::vertical().show(ui, |ui| {
            for (index, cube) in state.session.scene.iter().enumerate() {
                let position = cube.position();
                let text = RichText::new(format!(
                    "#{} [{:.2}, {:.2}, {:.2}]",
                    index, position.x, position.y, position.z
                ))
                .monospace();
                if cube.is_active {
                    ui.label(text.color(Color32::YELLOW).strong());
                } else {
                    ui.label(text);
                }
            }
        });

        if ui.button("Clear selection").clicked() {
            state.session.scene.deselect_all();
            state.status = "Selection cleared".into();
        }

        ui.separator();

        ui.heading("Controls");
        ui.label("• Left click: select");
        ui.label("• Right click: select or spawn");
        ui.label("• A / D: rotate camera");
        ui.label("• W: toggle projection");
        ui.label("• Escape: quit");
    });
}
