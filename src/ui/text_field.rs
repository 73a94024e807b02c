use macroquad::prelude::*;

/// Single-line input box for the grid size.
/// Accepts ASCII digits and a leading minus sign; validation happens on submit.
#[derive(Clone)]
pub struct TextField {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
    text: String,
    max_len: usize,
    is_focused: bool,
}

impl TextField {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, initial: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height: 30.0,
            label: label.into(),
            text: initial.into(),
            max_len: 9,
            is_focused: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Append a typed character if it is allowed
    pub fn push_char(&mut self, ch: char) {
        if self.text.len() >= self.max_len {
            return;
        }
        let accepted = ch.is_ascii_digit() || (ch == '-' && self.text.is_empty());
        if accepted {
            self.text.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Handle focus clicks and typing.
    /// Returns true when Enter was pressed while focused.
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if is_mouse_button_pressed(MouseButton::Left) {
            self.is_focused = self.is_hovered(mouse_pos);
        }
        if !self.is_focused {
            return false;
        }

        while let Some(ch) = get_char_pressed() {
            self.push_char(ch);
        }
        if is_key_pressed(KeyCode::Backspace) {
            self.backspace();
        }
        is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter)
    }

    pub fn draw(&self) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let border = if self.is_focused { WHITE } else { GRAY };
        draw_rectangle(self.x, self.y, self.width, self.height, Color::from_rgba(45, 45, 45, 255));
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, border);

        let caret = if self.is_focused && (get_time() * 2.0) as i64 % 2 == 0 { "|" } else { "" };
        draw_text(&format!("{}{}", self.text, caret), self.x + 5.0, self.y + 21.0, 16.0, WHITE);
    }
}
