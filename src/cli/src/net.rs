//! Draws a cube as an unfolded net:
//!
//! ```text
//!        U
//!     L  F  R  B
//!        D
//! ```

use std::fmt::Write;

use cubelab_core::{Color, Cube, Face};
use owo_colors::OwoColorize;

pub struct NetStyle {
    pub color: bool,
    pub sticker: String,
}

impl NetStyle {
    fn cell_width(&self) -> usize {
        if self.color {
            self.sticker.chars().count()
        } else {
            2
        }
    }

    fn cell(&self, out: &mut String, color: Option<Color>) {
        match (color, self.color) {
            (Some(color), true) => {
                let (r, g, b) = color.rgb();
                let _ = write!(out, "{}", self.sticker.on_truecolor(r, g, b));
            }
            (Some(color), false) => {
                let _ = write!(out, "{} ", color.code());
            }
            (None, _) => out.push_str(&"?".repeat(self.cell_width())),
        }
    }

    fn face_row(&self, out: &mut String, cube: &Cube, face: Face, row: usize) {
        for &color in &cube.face_grid(face)[row] {
            self.cell(out, color);
        }
        out.push(' ');
    }
}

pub fn render_net(cube: &Cube, style: &NetStyle) -> String {
    let indent = " ".repeat(style.cell_width() * 3 + 1);
    let mut out = String::new();

    let lone_face = |out: &mut String, face: Face| {
        for row in 0..3 {
            out.push_str(&indent);
            style.face_row(out, cube, face, row);
            finish_line(out);
        }
    };

    lone_face(&mut out, Face::U);
    for row in 0..3 {
        for face in [Face::L, Face::F, Face::R, Face::B] {
            style.face_row(&mut out, cube, face, row);
        }
        finish_line(&mut out);
    }
    lone_face(&mut out, Face::D);

    out
}

fn finish_line(out: &mut String) {
    let trimmed = out.trim_end_matches(' ').len();
    out.truncate(trimmed);
    out.push('\n');
}
