//! The hand-off point to whatever turns a completed template into displayable text.
//!
//! Pagination stops at the completed template string. Styling, click actions and
//! delivery belong to the embedding application, which plugs in through [`Renderer`].
//! Any `Fn(&str) -> T` closure is a renderer.

/// Turns a completed template into a final display value.
pub trait Renderer {
    type Output;

    fn render(&self, completed: &str) -> Self::Output;
}

/// Passes the completed template through untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainText;

impl Renderer for PlainText {
    type Output = String;

    fn render(&self, completed: &str) -> String {
        completed.to_string()
    }
}

impl<F, T> Renderer for F
where
    F: Fn(&str) -> T,
{
    type Output = T;

    fn render(&self, completed: &str) -> T {
        self(completed)
    }
}
