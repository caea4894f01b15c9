//! Main application window for the gobang GUI

use eframe::egui;
use egui::{
    CentralPanel, Color32, Context, CornerRadius, Frame, RichText, SidePanel, Stroke,
    TopBottomPanel, Vec2,
};

use super::board_view::BoardView;
use super::game_state::{GameMode, GameState};
use super::theme::*;
use crate::{Pos, SessionStatus, Stone, BOARD_SIZE};

/// Main gobang application
pub struct GobangApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for GobangApp {
    fn default() -> Self {
        Self {
            state: GameState::new(GameMode::default()),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }
}

impl GobangApp {
    /// Create a new app with the default mode
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Uniform card container for the side panel
    fn card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, add_contents);
    }

    /// Frame-styled label that reacts to clicks
    fn card_button(ui: &mut egui::Ui, label: &str) -> bool {
        let mut clicked = false;
        Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
            .show(ui, |ui| {
                let text = RichText::new(label).size(12.0).color(TEXT_PRIMARY);
                clicked = ui
                    .add(egui::Label::new(text).sense(egui::Sense::click()))
                    .clicked();
            });
        clicked
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                let mut new_mode = None;

                ui.menu_button("Game", |ui| {
                    let entries = [
                        ("New Game (Play as Black)", GameMode::PvE { human_color: Stone::Black }),
                        ("New Game (Play as White)", GameMode::PvE { human_color: Stone::White }),
                        ("New Game (Two Players)", GameMode::PvP),
                    ];
                    for (label, mode) in entries {
                        if ui.button(label).clicked() {
                            new_mode = Some(mode);
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(self.mode_label());
                });

                if let Some(mode) = new_mode {
                    self.state = GameState::new(mode);
                }
            });
        });
    }

    fn mode_label(&self) -> String {
        match self.state.mode {
            GameMode::PvE { human_color } => format!("You play {}", human_color),
            GameMode::PvP => "Hotseat".to_string(),
        }
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }
                if self.state.session.is_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }
                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    self.render_message_card(ui, msg);
                }
            });
    }

    fn render_title(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.vertical(|ui| {
                ui.label(RichText::new("GOBANG").size(22.0).strong().color(TEXT_PRIMARY));
                ui.label(RichText::new("five in a row").size(11.0).color(TEXT_MUTED));
            });
        });
    }

    /// Whose move it is, and what the app is waiting for
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card(ui, |ui| {
            let to_move = self.state.session.to_move();

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::splat(48.0), egui::Sense::hover());
                let disc = if to_move == Stone::Black { BLACK_STONE } else { WHITE_STONE };
                ui.painter().circle_filled(rect.center(), 22.0, disc);
                // ring so a white disc stays visible on the dark card
                ui.painter().circle_stroke(rect.center(), 22.0, Stroke::new(1.0, TEXT_MUTED));

                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    let name = to_move.to_string().to_uppercase();
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));

                    let (text, color) = self.turn_status();
                    ui.label(RichText::new(text).size(12.0).color(color));
                });
            });
        });
    }

    fn turn_status(&self) -> (&'static str, Color32) {
        if self.state.is_ai_thinking() {
            ("Computer is thinking...", STATUS_THINKING)
        } else if self.state.session.is_over() {
            ("Game over", WIN_HIGHLIGHT)
        } else if self.state.is_human_turn() {
            ("Your turn", STATUS_READY)
        } else {
            ("Computer to move", STATUS_THINKING)
        }
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card(ui, |ui| {
            ui.label(RichText::new("⚡ ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if Self::card_button(ui, "🔄 New Game") {
                    self.state.reset();
                }
                ui.add_space(4.0);
                // Hint is offered in hotseat games only
                if self.state.mode == GameMode::PvP && Self::card_button(ui, "💡 Hint") {
                    self.state.request_suggestion();
                }
            });

            ui.add_space(8.0);
            let move_count = format!("Move #{}", self.state.session.move_count());
            ui.label(RichText::new(move_count).size(11.0).color(TEXT_SECONDARY));
        });
    }

    /// Statistics from the engine's last reply
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(DEBUG_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("🔧 ENGINE DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(result) = &self.state.last_ai_result {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            let score = format!("Score: {}", result.score);
                            ui.label(RichText::new(score).size(11.0).strong().color(STATUS_READY));
                            let tied = format!("{} tied for best", result.tied);
                            ui.label(RichText::new(tied).size(10.0).color(TEXT_SECONDARY));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            ui.vertical(|ui| {
                                let took = format!("{}ms", result.time_ms);
                                ui.label(RichText::new(took).size(10.0).color(TEXT_SECONDARY));
                                let cells = format!("{} cells", result.evaluated);
                                ui.label(RichText::new(cells).size(10.0).color(TEXT_MUTED));
                            });
                        });
                    });

                    if let Some(pos) = result.best_move {
                        ui.add_space(4.0);
                        let target = format!("→ {}", coord_label(pos));
                        ui.label(RichText::new(target).size(12.0).strong().color(WIN_HIGHLIGHT));
                    }
                } else {
                    ui.label(RichText::new("No move evaluated yet").size(10.0).color(TEXT_MUTED));
                }
            });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let status = self.state.session.status();

        Frame::new()
            .fill(WIN_CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("🎉 GAME OVER").size(12.0).color(WIN_CARD_ACCENT));
                    ui.add_space(8.0);

                    match status {
                        SessionStatus::Won { winner, .. } => {
                            let headline = format!("{} WINS!", winner.to_string().to_uppercase());
                            ui.label(RichText::new(headline).size(20.0).strong().color(TEXT_PRIMARY));
                            ui.add_space(4.0);
                            ui.label(RichText::new(self.verdict(winner)).size(11.0).color(TEXT_SECONDARY));
                        }
                        SessionStatus::Drawn => {
                            ui.label(RichText::new("DRAW").size(20.0).strong().color(TEXT_PRIMARY));
                            ui.add_space(4.0);
                            let line = "Board is full, nobody made five";
                            ui.label(RichText::new(line).size(11.0).color(TEXT_SECONDARY));
                        }
                        SessionStatus::InProgress => {}
                    }

                    ui.add_space(12.0);
                    if Self::card_button(ui, "🔄 New Game") {
                        self.state.reset();
                    }
                });
            });
    }

    fn verdict(&self, winner: Stone) -> &'static str {
        match self.state.mode {
            GameMode::PvE { human_color } if winner == human_color => "You win!",
            GameMode::PvE { .. } => "Computer wins!",
            GameMode::PvP => "Five in a row",
        }
    }

    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the board and feed clicks into the session
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = BOARD_PANEL_BG;

            let clicked = self.board_view.show(
                ui,
                self.state.session.board(),
                self.state.session.to_move(),
                self.state.session.last_move(),
                self.state.suggested_move,
                self.state.session.winning_line(),
                self.state.session.is_over(),
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place_stone(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // N - new game, same mode
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
            // D - toggle the debug card
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            // H - hint (hotseat only)
            if i.key_pressed(egui::Key::H) && self.state.mode == GameMode::PvP {
                self.state.request_suggestion();
            }
        });
    }
}

/// Board coordinate in the letter-number form printed on the canvas edges
fn coord_label(pos: Pos) -> String {
    format!("{}{}", char::from(b'A' + pos.col), BOARD_SIZE as u8 - pos.row)
}

impl eframe::App for GobangApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Collect a finished engine reply, then kick off the next one if due
        self.state.check_ai_result();
        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && !self.state.session.is_over() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep repainting while the reply is pending
        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
