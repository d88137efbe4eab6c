use crossterm::style::Stylize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Reset,
    Red,
    Green,
    Yellow,
    Cyan,
    DarkGrey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub color: Option<Color>,
    pub bold: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Whether output is decorated with ANSI colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub ansi: bool,
}

impl Theme {
    pub const PLAIN: Theme = Theme { ansi: false };
    pub const ANSI: Theme = Theme { ansi: true };

    pub fn paint(&self, text: &str, style: Style) -> String {
        if !self.ansi {
            return text.to_string();
        }
        let mut styled = text.stylize();
        styled = match style.color {
            Some(Color::Red) => styled.red(),
            Some(Color::Green) => styled.green(),
            Some(Color::Yellow) => styled.yellow(),
            Some(Color::Cyan) => styled.cyan(),
            Some(Color::DarkGrey) => styled.dark_grey(),
            Some(Color::Reset) | None => styled,
        };
        if style.bold {
            styled = styled.bold();
        }
        styled.to_string()
    }
}
