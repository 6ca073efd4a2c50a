//! Anchored delete-confirmation prompt.
//!
//! The core is [`placement::resolve`] (where the popup goes) and
//! [`prompt::PromptController`] (open / confirm / cancel lifecycle). The
//! remaining modules are the ratatui host that draws the popup, measures
//! trigger buttons and feeds user input back into the controller.

pub mod action;
pub mod anchor;
pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod messages;
pub mod model;
pub mod placement;
pub mod prompt;
pub mod tui;
pub mod ui;

pub use anchor::MeasureAnchor;
pub use error::MissingAnchorError;
pub use messages::{select_message, MessageKey};
pub use model::prompt::{AnchorRect, Direction, EntityType, PopupPosition, Side};
pub use placement::{resolve, GAP, POPUP_WIDTH};
pub use prompt::{PromptController, PromptSession, PromptState, PromptView};
