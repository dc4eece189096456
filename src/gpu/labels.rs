//! Axis names and tick values drawn over the scene with egui.
//!
//! The 3D passes draw the geometry; this overlay projects each anchor with
//! the camera's `view_proj` and paints its text at the resulting screen
//! position in a second pass that loads the finished frame.

use std::sync::Arc;

use glam::{Mat4, Vec3};
use winit::window::Window;

use super::axes::AxisAnchor;

const TICK_FONT_SIZE: f32 = 13.0;
const NAME_FONT_SIZE: f32 = 15.0;
const TEXT_COLOR: egui::Color32 = egui::Color32::from_rgb(60, 60, 70);

/// Screen position, in points, of world point `p` for a viewport of `size`.
///
/// Returns `None` for points behind the camera.
pub fn project(view_proj: Mat4, p: Vec3, size: egui::Vec2) -> Option<egui::Pos2> {
    let clip = view_proj * p.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(egui::pos2(
        (ndc.x + 1.0) * 0.5 * size.x,
        (1.0 - ndc.y) * 0.5 * size.y,
    ))
}

/// egui context, winit state and wgpu renderer for the label overlay.
pub struct LabelOverlay {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
    anchors: Vec<AxisAnchor>,
}

impl LabelOverlay {
    pub fn new(
        device: &wgpu::Device,
        output_format: wgpu::TextureFormat,
        window: &Arc<Window>,
        anchors: Vec<AxisAnchor>,
    ) -> Self {
        let ctx = egui::Context::default();
        ctx.set_visuals(egui::Visuals::light());

        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window.as_ref(),
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let renderer = egui_wgpu::Renderer::new(
            device,
            output_format,
            None,  // depth format
            1,     // msaa samples
            false, // dithering
        );

        Self {
            ctx,
            state,
            renderer,
            anchors,
        }
    }

    /// Keep egui's view of the window (size, scale factor) current.
    pub fn on_window_event(&mut self, window: &Window, event: &winit::event::WindowEvent) {
        let _ = self.state.on_window_event(window, event);
    }

    /// Paint every anchor's text on top of `view`.
    #[allow(clippy::too_many_arguments)]
    pub fn paint(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        window: &Window,
        view_proj: Mat4,
        size_in_pixels: [u32; 2],
    ) {
        let raw_input = self.state.take_egui_input(window);
        let anchors = &self.anchors;

        let full_output = self.ctx.run(raw_input, |ctx| {
            let size = ctx.screen_rect().size();
            let painter = ctx.layer_painter(egui::LayerId::background());
            for anchor in anchors {
                let Some(pos) = project(view_proj, anchor.position, size) else {
                    continue;
                };
                let font_size = if anchor.is_name {
                    NAME_FONT_SIZE
                } else {
                    TICK_FONT_SIZE
                };
                painter.text(
                    pos,
                    egui::Align2::CENTER_CENTER,
                    &anchor.text,
                    egui::FontId::proportional(font_size),
                    TEXT_COLOR,
                );
            }
        });

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let paint_jobs = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels,
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, image_delta);
        }
        self.renderer
            .update_buffers(device, queue, encoder, &paint_jobs, &screen_descriptor);

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Label Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.renderer.render(
                &mut render_pass.forget_lifetime(),
                &paint_jobs,
                &screen_descriptor,
            );
        }

        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::AxisBounds;
    use crate::gpu::axes::label_anchors;
    use crate::gpu::Camera;

    const SIZE: egui::Vec2 = egui::vec2(800.0, 800.0);

    #[test]
    fn test_target_projects_to_centre() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 0.5));
        let pos = project(camera.view_proj(1.0), camera.target, SIZE).unwrap();
        assert!((pos.x - 400.0).abs() < 1e-3);
        assert!((pos.y - 400.0).abs() < 1e-3);
    }

    #[test]
    fn test_point_behind_camera_is_skipped() {
        let camera = Camera::new(Vec3::ZERO);
        let behind = camera.position() * 2.0;
        assert!(project(camera.view_proj(1.0), behind, SIZE).is_none());
    }

    #[test]
    fn test_up_is_up_on_screen() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 0.5));
        let view_proj = camera.view_proj(1.0);
        let low = project(view_proj, Vec3::ZERO, SIZE).unwrap();
        let high = project(view_proj, Vec3::Z, SIZE).unwrap();
        assert!(high.y < low.y);
    }

    #[test]
    fn test_every_label_is_on_screen() {
        let bounds = AxisBounds::default();
        let camera = Camera::new(bounds.center());
        let view_proj = camera.view_proj(1.0);
        // Centred text needs some room on either side.
        let screen = egui::Rect::from_min_size(egui::Pos2::ZERO, SIZE).shrink(20.0);

        for anchor in label_anchors(&bounds) {
            let pos = project(view_proj, anchor.position, SIZE).unwrap();
            assert!(screen.contains(pos), "{} at {:?}", anchor.text, pos);
        }
    }
}
