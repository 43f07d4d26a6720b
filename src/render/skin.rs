use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// How one playfield cell is drawn. Two variants: a styled glyph, or a solid
/// colored block standing in for it. Resolved once at skin construction,
/// never per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Appearance {
    Glyph {
        symbol: &'static str,
        style: Style,
    },
    Solid {
        color: Color,
    },
}

impl Appearance {
    /// The two-column span for one cell.
    pub fn cell(&self) -> Span<'static> {
        match *self {
            Appearance::Glyph { symbol, style } => Span::styled(symbol, style),
            Appearance::Solid { color } => Span::styled("  ", Style::default().bg(color)),
        }
    }
}

/// Per-entity cell appearances for the playfield.
#[derive(Debug, Clone, PartialEq)]
pub struct Skin {
    pub background: Appearance,
    pub apple: Appearance,
    pub snake_head: Appearance,
    pub snake_body: Appearance,
    pub obstacle: Appearance,
}

impl Skin {
    /// Unicode glyph art.
    pub fn glyphs() -> Self {
        Self {
            background: Appearance::Glyph {
                symbol: ". ",
                style: Style::default().fg(Color::DarkGray),
            },
            apple: Appearance::Glyph {
                symbol: "\u{25cf} ",
                style: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            },
            snake_head: Appearance::Glyph {
                symbol: "\u{25a0} ",
                style: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            },
            snake_body: Appearance::Glyph {
                symbol: "\u{25a1} ",
                style: Style::default().fg(Color::Yellow),
            },
            obstacle: Appearance::Glyph {
                symbol: "\u{2592}\u{2592}",
                style: Style::default().fg(Color::Gray),
            },
        }
    }

    /// Plain colored blocks, safe for terminals without unicode fonts.
    pub fn blocks() -> Self {
        Self {
            background: Appearance::Solid {
                color: Color::Rgb(110, 110, 5),
            },
            apple: Appearance::Solid {
                color: Color::Rgb(255, 0, 0),
            },
            snake_head: Appearance::Solid {
                color: Color::Rgb(255, 255, 0),
            },
            snake_body: Appearance::Solid {
                color: Color::Rgb(255, 255, 0),
            },
            obstacle: Appearance::Solid {
                color: Color::Rgb(100, 100, 100),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_cell_keeps_symbol() {
        let skin = Skin::glyphs();
        match skin.apple {
            Appearance::Glyph { symbol, .. } => assert_eq!(symbol.chars().count(), 2),
            Appearance::Solid { .. } => panic!("glyph skin produced a solid cell"),
        }
    }

    #[test]
    fn test_solid_cell_is_two_blank_columns() {
        let skin = Skin::blocks();
        let span = skin.obstacle.cell();
        assert_eq!(span.content.as_ref(), "  ");
    }
}
