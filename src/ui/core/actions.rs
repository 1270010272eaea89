use crate::catalog::DismissReason;

/// Overlay dialogs that sit above everything else, including the project modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Filters
    SetFilter(String),
    CycleFilter(isize),

    // Project list navigation
    NextItem,
    PreviousItem,

    // Detail modal
    OpenItem(String),
    RetargetItem(isize),
    CloseModal(DismissReason),

    // Effects
    PulseBurst,

    // Feedback
    ShowLink,

    // Dialogs
    ShowDialog(DialogType),
    HideDialog,

    // Appearance
    CycleIconTheme,

    // App control
    Quit,
    None,
}
