//! Browser-independent logic for the quest board client.

pub mod board;
pub mod card;
pub mod client;
pub mod config;
pub mod error;
pub mod flow;
pub mod form;
pub mod request;
pub mod theme;

pub use board::{
  ColumnVisibility,
  QuestBoard
};
pub use client::{
  ActionOutcome,
  QuestClient,
  QuestTransport,
  TransportResponse
};
pub use config::ClientConfig;
pub use error::{
  ClientError,
  QuestAction
};
pub use flow::{
  Followup,
  settle
};
pub use form::QuestForm;
pub use theme::ThemeMode;
