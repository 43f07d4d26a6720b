use ratatui::{
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{GameState, Phase, Position, TILE_SIZE};
use crate::metrics::SessionStats;

use super::skin::Skin;

pub struct Renderer {
    skin: Skin,
}

impl Renderer {
    pub fn new(skin: Skin) -> Self {
        Self { skin }
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, stats: &SessionStats) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Playfield
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, stats), chunks[0]);

        // Center the playfield horizontally
        let field_area = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if state.phase == Phase::GameOver {
            frame.render_widget(self.render_game_over(state), field_area);
        } else {
            frame.render_widget(self.render_field(state), field_area);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_field(&self, state: &GameState) -> Paragraph<'_> {
        let cols = state.surface_width / TILE_SIZE;
        let rows = state.surface_height / TILE_SIZE;

        let mut lines = Vec::new();
        for row in 0..rows {
            let mut spans = Vec::new();

            for col in 0..cols {
                let pos = Position::tile(col, row);

                // Head before body: the head is also segments[0].
                let cell = if pos == state.snake.head() {
                    self.skin.snake_head.cell()
                } else if state.snake.segments.contains(&pos) {
                    self.skin.snake_body.cell()
                } else if pos == state.apple.position {
                    self.skin.apple.cell()
                } else if state.obstacles.collides(pos.x, pos.y) {
                    self.skin.obstacle.cell()
                } else {
                    self.skin.background.cell()
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        let title = if state.phase == Phase::Paused {
            " Paused "
        } else {
            " Snake "
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, stats: &SessionStats) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                stats.best_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, state: &GameState) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Your score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Esc",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to exit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("\u{2191}\u{2193}\u{2190}\u{2192}", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(" to pause | "),
            Span::styled("Enter", Style::default().fg(Color::Green)),
            Span::raw(" to resume | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}
