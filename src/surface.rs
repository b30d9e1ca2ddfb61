use std::fmt;

use log::warn;
use macroquad::prelude::{
    draw_texture_ex, render_target, screen_height, screen_width, set_camera, set_default_camera,
    vec2, Camera2D, DrawTextureParams, Rect, RenderTarget, WHITE,
};
use zscreen::Surface;

/// The window itself or an offscreen render target.
pub enum MqSurface {
    Window,
    Offscreen {
        target: RenderTarget,
        size: (u32, u32),
    },
}

impl MqSurface {
    /// Runs `draw` with the camera pointed at this surface.
    pub fn draw_with<F: FnOnce()>(&self, draw: F) {
        match self {
            MqSurface::Window => {
                set_default_camera();
                draw();
            }
            MqSurface::Offscreen { target, size } => {
                let display_rect = Rect::new(0.0, 0.0, size.0 as f32, size.1 as f32);
                let camera = Camera2D {
                    render_target: Some(*target),
                    ..Camera2D::from_display_rect(display_rect)
                };
                set_camera(&camera);
                draw();
                set_default_camera();
            }
        }
    }
}

impl fmt::Debug for MqSurface {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MqSurface::Window => write!(f, "MqSurface::Window"),
            MqSurface::Offscreen { size, .. } => f
                .debug_struct("MqSurface::Offscreen")
                .field("size", size)
                .finish(),
        }
    }
}

impl Surface for MqSurface {
    fn size(&self) -> (u32, u32) {
        match self {
            MqSurface::Window => (screen_width() as u32, screen_height() as u32),
            MqSurface::Offscreen { size, .. } => *size,
        }
    }

    fn offscreen(&self, size: (u32, u32)) -> Self {
        let target = render_target(size.0.max(1), size.1.max(1));
        MqSurface::Offscreen { target, size }
    }

    fn blit(&mut self, source: &Self, (x, y): (f32, f32)) {
        let (texture, (w, h)) = match source {
            MqSurface::Offscreen { target, size } => (target.texture, *size),
            MqSurface::Window => {
                warn!("MqSurface::blit: can't use the window as a source");
                return;
            }
        };
        let params = DrawTextureParams {
            dest_size: Some(vec2(w as f32, h as f32)),
            ..Default::default()
        };
        self.draw_with(|| draw_texture_ex(texture, x, y, WHITE, params));
    }
}
