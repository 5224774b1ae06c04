//! Command registry and highlight state for the control bar.

use tackboard_core::Alignment;

/// The eight discrete commands the control bar can deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Add,
    AlignTop,
    AlignBottom,
    AlignLeft,
    AlignRight,
    AlignCenterV,
    AlignCenterH,
    Order,
}

impl Command {
    /// All commands in control-bar order.
    pub fn all() -> &'static [Command] {
        &[
            Command::Add,
            Command::AlignTop,
            Command::AlignBottom,
            Command::AlignLeft,
            Command::AlignRight,
            Command::AlignCenterV,
            Command::AlignCenterH,
            Command::Order,
        ]
    }

    /// Display label for the command's button.
    pub fn label(&self) -> &'static str {
        match self {
            Command::Add => "Add",
            Command::AlignTop => "Top",
            Command::AlignBottom => "Bottom",
            Command::AlignLeft => "Left",
            Command::AlignRight => "Right",
            Command::AlignCenterV => "Center V",
            Command::AlignCenterH => "Center H",
            Command::Order => "Order",
        }
    }

    /// The alignment this command maps to, if it is an alignment command.
    pub fn alignment(&self) -> Option<Alignment> {
        match self {
            Command::AlignTop => Some(Alignment::Top),
            Command::AlignBottom => Some(Alignment::Bottom),
            Command::AlignLeft => Some(Alignment::Left),
            Command::AlignRight => Some(Alignment::Right),
            Command::AlignCenterV => Some(Alignment::CenterV),
            Command::AlignCenterH => Some(Alignment::CenterH),
            Command::Add | Command::Order => None,
        }
    }
}

/// Tracks which command button is visually highlighted.
///
/// Every invocation resets all buttons and highlights the invoked one, so
/// exactly one command is highlighted after the first invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandBar {
    highlighted: Option<Command>,
}

impl CommandBar {
    /// Create a bar with nothing highlighted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an invocation, moving the highlight to `command`.
    pub fn invoke(&mut self, command: Command) {
        self.highlighted = Some(command);
    }

    /// The currently highlighted command, if any command has fired yet.
    pub fn highlighted(&self) -> Option<Command> {
        self.highlighted
    }

    /// Check if a command's button is highlighted.
    pub fn is_highlighted(&self, command: Command) -> bool {
        self.highlighted == Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_eight_commands() {
        assert_eq!(Command::all().len(), 8);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Command::Add.label(), "Add");
        assert_eq!(Command::AlignCenterV.label(), "Center V");
        assert_eq!(Command::Order.label(), "Order");
    }

    #[test]
    fn test_alignment_mapping() {
        assert_eq!(Command::AlignLeft.alignment(), Some(Alignment::Left));
        assert_eq!(Command::AlignCenterH.alignment(), Some(Alignment::CenterH));
        assert!(Command::Add.alignment().is_none());
        assert!(Command::Order.alignment().is_none());
    }

    #[test]
    fn test_exactly_one_highlight() {
        let mut bar = CommandBar::new();
        assert!(bar.highlighted().is_none());

        bar.invoke(Command::Add);
        assert!(bar.is_highlighted(Command::Add));

        bar.invoke(Command::Order);
        assert!(bar.is_highlighted(Command::Order));
        assert!(!bar.is_highlighted(Command::Add));
        let highlighted = Command::all()
            .iter()
            .filter(|c| bar.is_highlighted(**c))
            .count();
        assert_eq!(highlighted, 1);
    }
}
