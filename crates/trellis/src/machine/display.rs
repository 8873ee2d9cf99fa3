//! Display and Debug implementations for Trellis

use std::fmt;

use ansi_term::{Colour, Style};

use super::{Switch, Trellis};

/// How to draw a trellis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// `o` and `x` only
    #[default]
    Plain,
    /// Left in red, right in green, the last ball path in bold
    Color,
}

impl Trellis {
    /// Draw the trellis, one line per row.
    ///
    /// Cells are three spaces apart. Odd rows are padded by two spaces on
    /// each side so their switches sit between those of the even rows.
    pub fn render(&self, style: RenderStyle) -> String {
        self.grid
            .iter()
            .enumerate()
            .map(|(row, switches)| {
                let cells: Vec<String> = switches
                    .iter()
                    .enumerate()
                    .map(|(col, &switch)| self.render_cell(row, col, switch, style))
                    .collect();
                let line = cells.join("   ");
                if row % 2 == 1 {
                    format!("  {}  ", line)
                } else {
                    line
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_cell(&self, row: usize, col: usize, switch: Switch, style: RenderStyle) -> String {
        let symbol = switch.symbol().to_string();
        match style {
            RenderStyle::Plain => symbol,
            RenderStyle::Color => {
                let colour = match switch {
                    Switch::Left => Colour::Red,
                    Switch::Right => Colour::Green,
                };
                let mut paint = Style::new().fg(colour);
                if self.ball_path.contains(&(row, col)) {
                    paint = paint.bold();
                }
                paint.paint(symbol).to_string()
            }
        }
    }

    /// Line drawn between frames of a traced drop.
    pub fn separator(&self) -> String {
        "---".repeat(self.cols)
    }
}

impl fmt::Display for Trellis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(RenderStyle::Plain))
    }
}

impl fmt::Debug for Trellis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Trellis C={:?}, S={:?}>", self.grid, self.ball)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_render_fresh() {
        let trellis = Trellis::default();
        assert_eq!(trellis.to_string(), "o   o   o\n  o   o  \no   o   o");
    }

    #[test]
    fn test_plain_render_after_flip() {
        let mut trellis = Trellis::default();
        trellis.flip(0, 2);
        trellis.flip(1, 0);
        assert_eq!(trellis.to_string(), "o   o   x\n  x   o  \no   o   o");
    }

    #[test]
    fn test_color_render_marks_path() {
        let mut trellis = Trellis::default();
        trellis.insert_ball(0).unwrap();
        trellis.step();
        let colored = trellis.render(RenderStyle::Color);
        assert!(colored.contains(&Colour::Green.bold().paint("x").to_string()));
        assert!(colored.contains(&Colour::Red.paint("o").to_string()));
    }

    #[test]
    fn test_debug() {
        let trellis = Trellis::new(0, 1).unwrap();
        assert_eq!(format!("{:?}", trellis), "<Trellis C=[[Left, Left]], S=None>");
    }

    #[test]
    fn test_separator() {
        assert_eq!(Trellis::default().separator(), "---------");
    }
}
