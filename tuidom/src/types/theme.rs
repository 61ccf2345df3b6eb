use crate::types::Color;

/// A theme provides named color variables.
pub trait Theme: Send + Sync {
    /// Resolve a color variable name to a concrete color.
    /// Returns None if the variable is not defined.
    fn resolve(&self, name: &str) -> Option<&Color>;
}

/// Resolve a color to a concrete one, following variables through the theme.
///
/// Unknown variables fall back to black. Chains are followed a bounded
/// number of times so a self-referencing theme cannot loop forever.
pub fn resolve_color(color: &Color, theme: &dyn Theme) -> Color {
    let mut current = color.clone();
    for _ in 0..8 {
        match current {
            Color::Var(ref name) => match theme.resolve(name) {
                Some(next) => current = next.clone(),
                None => return Color::rgb(0, 0, 0),
            },
            concrete => return concrete,
        }
    }
    log::warn!("color variable chain too deep: {color:?}");
    Color::rgb(0, 0, 0)
}
