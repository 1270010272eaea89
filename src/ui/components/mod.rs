//! Reusable UI components

pub mod dialog_component;
pub mod dialogs;
pub mod effects_overlay;
pub mod filter_bar;
pub mod header;
pub mod project_list;
pub mod project_modal;
pub mod scroll_prompt;
pub mod scrollbar_helper;
pub mod status_bar;
pub mod toast;

// Component exports
pub use dialog_component::DialogComponent;
pub use effects_overlay::EffectsOverlay;
pub use filter_bar::FilterBarComponent;
pub use header::HeaderComponent;
pub use project_list::ProjectListComponent;
pub use project_modal::ProjectModalComponent;
pub use scroll_prompt::ScrollPromptComponent;
pub use status_bar::{StatusBar, StatusInfo};
pub use toast::ToastComponent;
