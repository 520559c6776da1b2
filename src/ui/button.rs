use macroquad::prelude::*;

/// Panel button; `active` buttons are drawn highlighted (e.g. Play while running)
#[derive(Clone)]
pub struct Button {
    rect: Rect,
    label: String,
    active: bool,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            label: label.into(),
            active: false,
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = match (self.active, self.is_hovered(mouse_pos)) {
            (true, _) => Color::from_rgba(46, 160, 90, 255),
            (false, true) => Color::from_rgba(100, 149, 237, 255),
            (false, false) => Color::from_rgba(70, 130, 180, 255),
        };
        let Rect { x, y, w, h } = self.rect;

        draw_rectangle(x, y, w, h, color);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let text_size = measure_text(&self.label, None, 20, 1.0);
        draw_text(&self.label, x + (w - text_size.width) / 2.0, y + (h + text_size.height) / 2.0, 20.0, WHITE);
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
