//! Style mapping for the select and its parts.
//!
//! Colors are referenced by theme variable name and resolved at draw time,
//! so hosts restyle the widget by swapping the [`Theme`] rather than the
//! mapping below.

use tuidom::{Border, Color, Style, Theme};

use crate::props::SelectType;

pub const PRIMARY_400: &str = "primary400";
pub const MONO_200: &str = "mono200";
pub const NEGATIVE_50: &str = "negative50";
pub const MONO_700: &str = "mono700";
pub const MONO_1000: &str = "mono1000";

/// Icons rendered by the select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    /// Clear-all action in the search layout
    ClearAll,
    /// Caret of the select layout
    Select,
    /// Check mark in front of selected dropdown rows
    Selected,
    /// Magnifier of the search layout
    Loop,
}

impl IconKind {
    pub fn glyph(&self) -> &'static str {
        match self {
            IconKind::ClearAll => "✕",
            IconKind::Select => "▾",
            IconKind::Selected => "✓",
            IconKind::Loop => "⌕",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            IconKind::ClearAll => "clearAll",
            IconKind::Select => "select",
            IconKind::Selected => "selected",
            IconKind::Loop => "loop",
        }
    }
}

/// Theme carrying the color variables the select reads.
#[derive(Debug, Clone)]
pub struct SelectTheme {
    pub primary400: Color,
    pub mono200: Color,
    pub negative50: Color,
    pub mono700: Color,
    pub mono1000: Color,
}

impl Default for SelectTheme {
    fn default() -> Self {
        Self {
            primary400: Color::oklch(0.62, 0.17, 255.0),
            mono200: Color::oklch(0.86, 0.0, 0.0),
            negative50: Color::oklch(0.62, 0.2, 25.0),
            mono700: Color::oklch(0.55, 0.0, 0.0),
            mono1000: Color::oklch(0.15, 0.0, 0.0),
        }
    }
}

impl Theme for SelectTheme {
    fn resolve(&self, name: &str) -> Option<&Color> {
        match name {
            PRIMARY_400 => Some(&self.primary400),
            MONO_200 => Some(&self.mono200),
            NEGATIVE_50 => Some(&self.negative50),
            MONO_700 => Some(&self.mono700),
            MONO_1000 => Some(&self.mono1000),
            _ => None,
        }
    }
}

/// Border of the input container: focus wins over error.
pub fn input_container_style(focused: bool, error: bool) -> Style {
    let border_color = if focused {
        PRIMARY_400
    } else if error {
        NEGATIVE_50
    } else {
        MONO_200
    };
    Style::new()
        .border(Border::Rounded)
        .border_color(Color::var(border_color))
        .padding_x(1, 1)
}

pub fn input_style(disabled: bool) -> Style {
    let style = Style::new();
    if disabled { style.dim() } else { style }
}

pub fn single_selection_style(disabled: bool) -> Style {
    let style = Style::new().foreground(Color::var(MONO_1000));
    if disabled { style.dim() } else { style }
}

pub fn icon_style(kind: IconKind, disabled: bool) -> Style {
    let style = match kind {
        IconKind::ClearAll => Style::new().padding_x(1, 0),
        IconKind::Select => Style::new().padding_x(0, 1),
        IconKind::Selected => Style::new().padding_x(0, 1),
        IconKind::Loop => Style::new().padding_x(1, 0),
    };
    if disabled && kind == IconKind::ClearAll {
        style.dim()
    } else {
        style
    }
}

pub fn dropdown_style() -> Style {
    Style::new()
        .border(Border::Rounded)
        .border_color(Color::var(MONO_200))
}

/// Rows below the input where the dropdown opens.
pub fn dropdown_top(kind: SelectType) -> i16 {
    match kind {
        SelectType::Select => 2,
        SelectType::Search => 3,
    }
}

/// Dropdown row. Selected rows drop their padding to make room for the
/// check mark.
pub fn option_style(selected: bool, disabled: bool, highlighted: bool) -> Style {
    let mut style = if selected {
        Style::new().padding_x(0, 0)
    } else {
        Style::new().padding_x(2, 2)
    };
    if disabled {
        style = style.foreground(Color::var(MONO_700));
    } else if selected {
        style = style.foreground(Color::var(PRIMARY_400));
    }
    if highlighted {
        style = style.bold();
    }
    style
}

pub fn tag_style(disabled: bool) -> Style {
    let style = Style::new()
        .border(Border::Single)
        .border_color(Color::var(PRIMARY_400))
        .padding_x(1, 1);
    if disabled { style.dim() } else { style }
}
