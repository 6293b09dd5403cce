use eframe::egui;
use snake_common::snake::{BoardSnapshot, Cell, FieldSize};

use crate::colors;

const OUTLINE_WIDTH: f32 = 1.0;

/// Square cells fitted into a canvas, board centred.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    origin: egui::Pos2,
    cell_size: f32,
    field_size: FieldSize,
}

impl BoardLayout {
    /// `None` when the canvas cannot hold a cell of at least one pixel.
    pub fn fit(canvas: egui::Rect, field_size: FieldSize) -> Option<Self> {
        if field_size.width == 0 || field_size.height == 0 {
            return None;
        }

        let cell_size = (canvas.width() / field_size.width as f32)
            .min(canvas.height() / field_size.height as f32)
            .floor();
        if cell_size < 1.0 {
            return None;
        }

        let board_width = cell_size * field_size.width as f32;
        let board_height = cell_size * field_size.height as f32;
        let origin = egui::pos2(
            canvas.min.x + ((canvas.width() - board_width) / 2.0).floor(),
            canvas.min.y + ((canvas.height() - board_height) / 2.0).floor(),
        );

        Some(Self {
            origin,
            cell_size,
            field_size,
        })
    }

    #[cfg(test)]
    fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn board_rect(&self) -> egui::Rect {
        egui::Rect::from_min_size(
            self.origin,
            egui::vec2(
                self.cell_size * self.field_size.width as f32,
                self.cell_size * self.field_size.height as f32,
            ),
        )
    }

    pub fn cell_rect(&self, cell: Cell) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(
                self.origin.x + cell.x as f32 * self.cell_size,
                self.origin.y + cell.y as f32 * self.cell_size,
            ),
            egui::vec2(self.cell_size, self.cell_size),
        )
    }
}

pub fn paint_board(painter: &egui::Painter, layout: &BoardLayout, snapshot: &BoardSnapshot) {
    let outline = egui::Stroke::new(OUTLINE_WIDTH, colors::OUTLINE);
    let board = layout.board_rect();

    painter.rect_filled(board, 0.0, colors::BOARD_BACKGROUND);
    painter.rect_stroke(board, 0.0, outline, egui::StrokeKind::Inside);

    if let Some(food) = snapshot.food {
        paint_cell(painter, layout, food, colors::FOOD);
    }

    for (i, cell) in snapshot.snake.iter().enumerate() {
        let fill = if i == 0 { colors::SNAKE_HEAD } else { colors::SNAKE_BODY };
        paint_cell(painter, layout, *cell, fill);
    }
}

fn paint_cell(painter: &egui::Painter, layout: &BoardLayout, cell: Cell, fill: egui::Color32) {
    painter.rect(
        layout.cell_rect(cell),
        0.0,
        fill,
        egui::Stroke::new(OUTLINE_WIDTH, colors::OUTLINE),
        egui::StrokeKind::Inside,
    );
}
