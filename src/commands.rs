//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The grid never touches the clipboard or the scroll area itself; it asks the
//! host to do so through these.

use crate::grid::Rect;

/// Side effects requested by `update`
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a full redraw of the widget
    Redraw,
    /// Request a redraw of one area only (cursor blink)
    RedrawRect(Rect),
    /// Scroll so that a point is visible with the given margins
    EnsureVisible {
        x: f64,
        y: f64,
        margin_x: f64,
        margin_y: f64,
    },
    /// Put text on the system clipboard
    CopyToClipboard(String),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Check if this command requests any kind of redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw | Cmd::RedrawRect(_) => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::needs_redraw),
            _ => false,
        }
    }

    /// Flatten nested batches into a list, dropping `None`
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            cmd => vec![cmd],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_redraw() {
        assert!(Cmd::Redraw.needs_redraw());
        assert!(Cmd::Batch(vec![Cmd::None, Cmd::Redraw]).needs_redraw());
        assert!(!Cmd::CopyToClipboard("00".into()).needs_redraw());
    }

    #[test]
    fn test_flatten() {
        let cmd = Cmd::Batch(vec![
            Cmd::None,
            Cmd::Redraw,
            Cmd::Batch(vec![Cmd::CopyToClipboard("AB".into())]),
        ]);
        assert_eq!(
            cmd.flatten(),
            vec![Cmd::Redraw, Cmd::CopyToClipboard("AB".into())]
        );
    }
}
