use crate::graphics::draw_triangle;
use crate::input::{DragTracker, InputMode};
use crate::state::AppState;
use crate::vertex::{Vertex, COLORS, VERTICES};
use druid::kurbo::Point;
use druid::piet::{ImageFormat, InterpolationMode, Text, TextLayoutBuilder};
use druid::text::FontFamily;
use druid::widget::prelude::*;
use druid::{commands, Color, Cursor, KbKey, MouseButton, RenderContext};
use std::time::Instant;
use tracing::debug;

/// Change applied to a scale accumulator by one arrow-key press
const SCALE_STEP: f64 = 0.05;

/// 2D shape widget
pub struct ShapeWidget {
    frames_since_last_update: usize,
    last_fps_calculation: Instant,
    fps: f64,
    /// Mouse drag interpreter
    drag: DragTracker,
    /// Widget size
    size: Size,
}

impl ShapeWidget {
    pub fn new() -> Self {
        ShapeWidget {
            frames_since_last_update: 0,
            last_fps_calculation: Instant::now(),
            fps: 0.0,
            drag: DragTracker::new(),
            size: Size::ZERO,
        }
    }

    /// Draws one line of debug text
    fn draw_debug_line(&self, ctx: &mut PaintCtx, text: String, y: f64) {
        let text_layout = ctx
            .text()
            .new_text_layout(text)
            .font(FontFamily::MONOSPACE, 12.0)
            .text_color(Color::BLACK)
            .build()
            .unwrap();
        ctx.draw_text(&text_layout, (10.0, y));
    }

    /// Paints the matrix contents and input state over the shape
    fn paint_debug_overlay(&self, ctx: &mut PaintCtx, data: &AppState) {
        let transform = &data.transform;

        self.draw_debug_line(
            ctx,
            format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            10.0,
        );
        self.draw_debug_line(
            ctx,
            format!(
                "scale: ({:.3}, {:.3})  rotation: {:.3}  translation: ({:.3}, {:.3})",
                transform.scale_x(),
                transform.scale_y(),
                transform.rotation(),
                transform.translate_x(),
                transform.translate_y()
            ),
            30.0,
        );
        for (index, row) in transform.matrix().rows().iter().enumerate() {
            self.draw_debug_line(
                ctx,
                format!(
                    "| {:8.4} {:8.4} {:8.4} {:8.4} |",
                    row[0], row[1], row[2], row[3]
                ),
                50.0 + 20.0 * index as f64,
            );
        }
        self.draw_debug_line(ctx, format!("mode: {:?}", self.drag.mode()), 135.0);
        self.draw_debug_line(ctx, format!("FPS: {:.2}", self.fps), 155.0);
    }
}

/// The pointer shape shown for each input mode
fn drag_cursor(mode: InputMode) -> Cursor {
    match mode {
        InputMode::Idle => Cursor::Arrow,
        InputMode::Rotating => Cursor::Crosshair,
        InputMode::Translating => Cursor::OpenHand,
    }
}

impl Widget<AppState> for ShapeWidget {
    /// Handle events for the shape widget
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut AppState, _env: &Env) {
        match event {
            Event::WindowConnected => {
                // Request focus to receive keyboard events
                ctx.request_focus();
            }
            Event::KeyDown(key_event) => match &key_event.key {
                KbKey::ArrowLeft => {
                    data.transform.scale_x_by(-SCALE_STEP);
                    ctx.request_paint();
                }
                KbKey::ArrowRight => {
                    data.transform.scale_x_by(SCALE_STEP);
                    ctx.request_paint();
                }
                KbKey::ArrowUp => {
                    data.transform.scale_y_by(SCALE_STEP);
                    ctx.request_paint();
                }
                KbKey::ArrowDown => {
                    data.transform.scale_y_by(-SCALE_STEP);
                    ctx.request_paint();
                }
                KbKey::Escape => {
                    ctx.submit_command(commands::QUIT_APP);
                }
                KbKey::Character(s) => match s.as_str() {
                    "r" | "R" => {
                        debug!("transform reset");
                        data.transform.reset();
                        ctx.request_paint();
                    }
                    "d" | "D" => {
                        data.debug = !data.debug;
                        ctx.request_paint();
                    }
                    "q" | "Q" => {
                        ctx.submit_command(commands::QUIT_APP);
                    }
                    _ => {}
                },
                _ => {}
            },
            Event::MouseDown(mouse_event) => {
                let mode = self.drag.button_event(
                    mouse_event.button == MouseButton::Left,
                    true,
                    mouse_event.mods.ctrl(),
                );
                debug!(?mode, "mouse button pressed");
                ctx.set_cursor(&drag_cursor(mode));
                ctx.set_active(mode != InputMode::Idle);
                if data.debug {
                    ctx.request_paint();
                }
            }
            Event::MouseUp(mouse_event) => {
                let mode = self.drag.button_event(
                    mouse_event.button == MouseButton::Left,
                    false,
                    mouse_event.mods.ctrl(),
                );
                ctx.set_cursor(&drag_cursor(mode));
                ctx.set_active(false);
                if data.debug {
                    ctx.request_paint();
                }
            }
            Event::MouseMove(mouse_event) => {
                let changed = self.drag.motion(
                    mouse_event.pos.x,
                    mouse_event.pos.y,
                    self.size.width,
                    &mut data.transform,
                );
                if changed {
                    ctx.request_paint();
                }
            }
            _ => {}
        }
    }

    fn lifecycle(
        &mut self,
        _ctx: &mut LifeCycleCtx,
        event: &LifeCycle,
        _data: &AppState,
        _env: &Env,
    ) {
        if let LifeCycle::Size(size) = event {
            self.size = *size;
        }
    }

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &AppState, _data: &AppState, _env: &Env) {
    }

    /// Determines the layout constraints for the shape widget
    fn layout(
        &mut self,
        _layout_ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        _data: &AppState,
        _env: &Env,
    ) -> Size {
        let size = bc.max();
        self.size = size;
        size
    }

    /// Paint the shape widget
    fn paint(&mut self, ctx: &mut PaintCtx, data: &AppState, _env: &Env) {
        // Update FPS calculation
        self.frames_since_last_update += 1;
        let now = Instant::now();
        let duration = now.duration_since(self.last_fps_calculation);
        if duration.as_secs_f64() >= 1.0 {
            self.fps = self.frames_since_last_update as f64 / duration.as_secs_f64();
            self.frames_since_last_update = 0;
            self.last_fps_calculation = now;
        }

        let size = ctx.size();
        let width = size.width as usize;
        let height = size.height as usize;
        if width == 0 || height == 0 {
            return;
        }

        let center = Point::new(size.width / 2.0, size.height / 2.0);
        let scale = size.height.min(size.width) / 2.0;

        // Pixel buffer starts as the white, opaque background
        let mut pixel_data = vec![255u8; width * height * 4];

        // Transform the model and map it into window coordinates;
        // the model space has y up, the window has y down
        let matrix = data.transform.matrix();
        let projected: Vec<Vertex> = VERTICES
            .iter()
            .zip(COLORS.iter())
            .map(|(&position, &color)| {
                let [x, y] = matrix.transform_point(position);
                Vertex {
                    screen_position: [center.x + x * scale, center.y - y * scale],
                    color,
                }
            })
            .collect();

        // Draw a triangle for each successive vertex triple
        for triangle in projected.chunks_exact(3) {
            draw_triangle(
                &triangle[0],
                &triangle[1],
                &triangle[2],
                &mut pixel_data,
                width,
                height,
            );
        }

        // Create and draw the image
        let image = ctx
            .make_image(width, height, &pixel_data, ImageFormat::RgbaSeparate)
            .unwrap();
        ctx.draw_image(&image, size.to_rect(), InterpolationMode::NearestNeighbor);

        // Add debug info if debug mode is enabled
        if data.debug {
            self.paint_debug_overlay(ctx, data);
        }
    }
}
