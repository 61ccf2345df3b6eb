use super::{Border, Color, TextStyle};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Option<Border>,
    pub border_color: Option<Color>,
    pub text_style: TextStyle,
    pub padding_left: Option<u16>,
    pub padding_right: Option<u16>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    pub fn padding_x(mut self, left: u16, right: u16) -> Self {
        self.padding_left = Some(left);
        self.padding_right = Some(right);
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text_style.underline = true;
        self
    }

    /// Layer `other` on top of `self`: fields set in `other` win, text
    /// attributes accumulate.
    pub fn merge(mut self, other: &Style) -> Self {
        if other.background.is_some() {
            self.background = other.background.clone();
        }
        if other.foreground.is_some() {
            self.foreground = other.foreground.clone();
        }
        if other.border.is_some() {
            self.border = other.border;
        }
        if other.border_color.is_some() {
            self.border_color = other.border_color.clone();
        }
        if other.padding_left.is_some() {
            self.padding_left = other.padding_left;
        }
        if other.padding_right.is_some() {
            self.padding_right = other.padding_right;
        }
        self.text_style.bold |= other.text_style.bold;
        self.text_style.dim |= other.text_style.dim;
        self.text_style.underline |= other.text_style.underline;
        self
    }
}
