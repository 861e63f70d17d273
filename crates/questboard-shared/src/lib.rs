use std::fmt;

use serde::{
  Deserialize,
  Serialize
};

/// Backend-assigned quest identifier.
///
/// The server currently hands out integers but the client only ever
/// formats ids into request paths, so string ids are accepted too.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
)]
#[serde(untagged)]
pub enum QuestId {
  Number(i64),
  Text(String)
}

impl fmt::Display for QuestId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    match self {
      | Self::Number(value) => {
        write!(f, "{value}")
      }
      | Self::Text(value) => {
        f.write_str(value)
      }
    }
  }
}

impl From<i64> for QuestId {
  fn from(value: i64) -> Self {
    Self::Number(value)
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct Quest {
  pub id:          QuestId,
  #[serde(default)]
  pub title:       String,
  #[serde(default)]
  pub quest_type:  String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub reward:      String,
  #[serde(default)]
  pub creator:     String,
  #[serde(default)]
  pub completed:   bool,
  #[serde(default)]
  pub created_at:  Option<String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct QuestCreate {
  pub title:       String,
  pub quest_type:  String,
  pub description: String,
  pub reward:      String,
  pub creator:     String
}

impl QuestCreate {
  pub const REQUIRED_FIELDS:
    [&'static str; 5] = [
    "title",
    "quest_type",
    "description",
    "reward",
    "creator"
  ];

  pub fn field(
    &self,
    name: &str
  ) -> Option<&str> {
    match name {
      | "title" => Some(&self.title),
      | "quest_type" => {
        Some(&self.quest_type)
      }
      | "description" => {
        Some(&self.description)
      }
      | "reward" => Some(&self.reward),
      | "creator" => {
        Some(&self.creator)
      }
      | _ => None
    }
  }

  pub fn field_mut(
    &mut self,
    name: &str
  ) -> Option<&mut String> {
    match name {
      | "title" => Some(&mut self.title),
      | "quest_type" => {
        Some(&mut self.quest_type)
      }
      | "description" => {
        Some(&mut self.description)
      }
      | "reward" => {
        Some(&mut self.reward)
      }
      | "creator" => {
        Some(&mut self.creator)
      }
      | _ => None
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct QuestPatch {
  pub completed: bool
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct ApiErrorBody {
  pub error: String
}
