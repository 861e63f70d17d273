use chrono::{
  DateTime,
  NaiveDateTime
};
use questboard_shared::Quest;

pub const DELETE_CONFIRMATION: &str =
  "Are you sure you want to delete \
   this quest?";

/// The complete/reactivate affordance on a quest card.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct CompletionToggle {
  pub label:      &'static str,
  pub icon_class: &'static str,
  /// Value sent as `completed` when the button is pressed.
  pub requested:  bool
}

impl CompletionToggle {
  pub fn for_quest(
    quest: &Quest
  ) -> Self {
    if quest.completed {
      Self {
        label:      "Reactivate",
        icon_class: "fas fa-undo",
        requested:  false
      }
    } else {
      Self {
        label:      "Complete",
        icon_class: "fas fa-check",
        requested:  true
      }
    }
  }
}

/// Renders a backend timestamp for the card footer. Anything that does
/// not parse is shown as sent.
pub fn format_created_at(
  raw: &str
) -> String {
  let trimmed = raw.trim();
  if let Ok(parsed) =
    DateTime::parse_from_rfc3339(trimmed)
  {
    return parsed
      .format("%b %-d, %Y")
      .to_string();
  }

  match NaiveDateTime::parse_from_str(
    trimmed,
    "%Y-%m-%dT%H:%M:%S%.f"
  ) {
    | Ok(parsed) => {
      parsed
        .format("%b %-d, %Y")
        .to_string()
    }
    | Err(_) => trimmed.to_string()
  }
}

#[cfg(test)]
mod tests {
  use questboard_shared::QuestId;

  use super::*;

  fn quest(completed: bool) -> Quest {
    Quest {
      id: QuestId::from(1),
      title: "Find the Sword".to_string(),
      quest_type: "Fetch".to_string(),
      description: "...".to_string(),
      reward: "10 gold".to_string(),
      creator: "Alice".to_string(),
      completed,
      created_at: None
    }
  }

  #[test]
  fn active_quest_offers_complete() {
    let toggle =
      CompletionToggle::for_quest(
        &quest(false)
      );
    assert_eq!(toggle.label, "Complete");
    assert_eq!(
      toggle.icon_class,
      "fas fa-check"
    );
    assert!(toggle.requested);
  }

  #[test]
  fn completed_quest_offers_reactivate() {
    let toggle =
      CompletionToggle::for_quest(
        &quest(true)
      );
    assert_eq!(
      toggle.label,
      "Reactivate"
    );
    assert_eq!(
      toggle.icon_class,
      "fas fa-undo"
    );
    assert!(!toggle.requested);
  }

  #[test]
  fn created_at_formats_backend_timestamps()
  {
    assert_eq!(
      format_created_at(
        "2025-03-04T18:22:05.123456"
      ),
      "Mar 4, 2025"
    );
    assert_eq!(
      format_created_at(
        "2025-12-31T23:00:00+00:00"
      ),
      "Dec 31, 2025"
    );
    assert_eq!(
      format_created_at("yesterday"),
      "yesterday"
    );
  }
}
