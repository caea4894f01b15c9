//! Board rendering and pointer handling

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Response, Sense, Stroke, Vec2};

use super::theme::{
    hover_invalid, BLACK_STONE, BLACK_STONE_HIGHLIGHT, BOARD_BG, BOARD_MARGIN, GRID_LINE,
    GRID_LINE_WIDTH, LAST_MOVE_MARKER, LAST_MOVE_MARKER_RADIUS, STAR_POINT, STAR_POINTS,
    STAR_POINT_RADIUS, STONE_RADIUS_RATIO, WHITE_STONE, WHITE_STONE_SHADOW, WIN_HIGHLIGHT,
};
use crate::board::TOTAL_CELLS;
use crate::{Board, Pos, Stone, BOARD_SIZE};

/// Board canvas: paints the position and maps pointer input back to cells.
pub struct BoardView {
    /// Distance between adjacent grid lines, recomputed every frame
    cell_size: f32,
    /// Screen rectangle the board was painted into
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardView {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cell_size: 0.0,
            board_rect: Rect::NOTHING,
        }
    }

    /// Render the board and return the cell clicked this frame, if any.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        to_move: Stone,
        last_move: Option<Pos>,
        suggested_move: Option<Pos>,
        winning_line: Option<[Pos; 5]>,
        game_over: bool,
    ) -> Option<Pos> {
        let available = ui.available_size();
        let side = available.x.min(available.y) - 20.0;
        self.cell_size = (side - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, board);

        if let Some(pos) = last_move {
            painter.circle_filled(self.cell_center(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }
        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }
        if let Some(pos) = suggested_move {
            self.draw_suggestion(&painter, pos, to_move);
        }

        if game_over {
            return None;
        }
        self.hover_and_click(&response, &painter, board, to_move)
    }

    /// Grid lines plus the nine star points
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (BOARD_SIZE as f32 - 1.0) * self.cell_size;
        let origin = self.grid_origin();

        for i in 0..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;
            painter.line_segment(
                [origin + Vec2::new(offset, 0.0), origin + Vec2::new(offset, span)],
                stroke,
            );
            painter.line_segment(
                [origin + Vec2::new(0.0, offset), origin + Vec2::new(span, offset)],
                stroke,
            );
        }

        for (row, col) in STAR_POINTS {
            painter.circle_filled(
                self.cell_center(Pos::new(row, col)),
                STAR_POINT_RADIUS,
                STAR_POINT,
            );
        }
    }

    /// Column letters (A-O) above and below, row numbers (15-1) on both sides
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);
        let origin = self.grid_origin();

        for i in 0..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            let letter = char::from(b'A' + i as u8);
            for y in [self.board_rect.min.y + 8.0, self.board_rect.max.y - 12.0] {
                painter.text(
                    Pos2::new(origin.x + offset, y),
                    egui::Align2::CENTER_CENTER,
                    letter,
                    font.clone(),
                    GRID_LINE,
                );
            }

            let number = BOARD_SIZE - i;
            for x in [self.board_rect.min.x + 12.0, self.board_rect.max.x - 12.0] {
                painter.text(
                    Pos2::new(x, origin.y + offset),
                    egui::Align2::CENTER_CENTER,
                    number.to_string(),
                    font.clone(),
                    GRID_LINE,
                );
            }
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for idx in 0..TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            let stone = board.get(pos);
            if stone != Stone::Empty {
                self.draw_stone(painter, pos, stone);
            }
        }
    }

    /// One stone with a drop shadow and a simple lighting touch
    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let (fill, shadow_alpha) = match stone {
            Stone::Black => (BLACK_STONE, 60),
            Stone::White => (WHITE_STONE, 40),
            Stone::Empty => return,
        };

        painter.circle_filled(
            center + Vec2::splat(2.0),
            radius,
            Color32::from_black_alpha(shadow_alpha),
        );
        painter.circle_filled(center, radius, fill);

        match stone {
            Stone::Black => {
                painter.circle_filled(
                    center - Vec2::splat(radius * 0.3),
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Stone::White => {
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
            }
            Stone::Empty => {}
        }
    }

    /// Trace the winning five and ring each of its stones
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 5]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);
        let ring = self.cell_size * STONE_RADIUS_RATIO + 3.0;

        for pair in line.windows(2) {
            painter.line_segment([self.cell_center(pair[0]), self.cell_center(pair[1])], stroke);
        }
        for &pos in line {
            painter.circle_stroke(self.cell_center(pos), ring, stroke);
        }
    }

    /// Ghost stone with a question mark on the suggested cell
    fn draw_suggestion(&self, painter: &Painter, pos: Pos, to_move: Stone) {
        let center = self.cell_center(pos);
        let (ghost, ink) = match to_move {
            Stone::Black => (Color32::from_rgba_unmultiplied(20, 20, 20, 100), WHITE_STONE),
            Stone::White => (Color32::from_rgba_unmultiplied(240, 240, 240, 100), BLACK_STONE),
            Stone::Empty => return,
        };

        painter.circle_filled(center, self.cell_size * STONE_RADIUS_RATIO, ghost);
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(14.0),
            ink,
        );
    }

    /// Ghost stone under the pointer; reports a click on an empty cell.
    fn hover_and_click(
        &self,
        response: &Response,
        painter: &Painter,
        board: &Board,
        to_move: Stone,
    ) -> Option<Pos> {
        let pos = self.cell_at(response.hover_pos()?)?;
        let center = self.cell_center(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        if board.get(pos) != Stone::Empty {
            painter.circle_filled(center, radius, hover_invalid());
            return None;
        }

        let ghost = match to_move {
            Stone::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
            Stone::White => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
            Stone::Empty => return None,
        };
        painter.circle_filled(center, radius, ghost);

        response.clicked().then_some(pos)
    }

    /// Map a pointer position to the nearest grid intersection.
    fn cell_at(&self, screen: Pos2) -> Option<Pos> {
        let rel = screen - self.grid_origin();
        let col = ((rel.x + self.cell_size * 0.5) / self.cell_size).floor() as i32;
        let row = ((rel.y + self.cell_size * 0.5) / self.cell_size).floor() as i32;

        Pos::is_valid(row, col).then(|| Pos::new(row as u8, col as u8))
    }

    /// Screen position of a cell's grid intersection
    fn cell_center(&self, pos: Pos) -> Pos2 {
        self.grid_origin()
            + Vec2::new(
                f32::from(pos.col) * self.cell_size,
                f32::from(pos.row) * self.cell_size,
            )
    }

    fn grid_origin(&self) -> Pos2 {
        self.board_rect.min + Vec2::splat(BOARD_MARGIN)
    }
}
