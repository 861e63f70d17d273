use crate::client::ActionOutcome;
use crate::error::{
  ClientError,
  QuestAction
};
use crate::form::QuestForm;

/// What the page does once a quest action settles.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct Followup {
  pub reload:    bool,
  pub hide_form: bool,
  pub alert:     Option<String>
}

impl Followup {
  /// Closes the form when the action asks for it. Returns whether the
  /// form changed; a failed or declined action leaves the draft as typed.
  pub fn apply_to(
    &self,
    form: &mut QuestForm
  ) -> bool {
    if !self.hide_form
      || !form.is_visible()
    {
      return false;
    }
    form.submit_succeeded();
    true
  }
}

/// Maps a finished mutation to its follow-up. Applied mutations reload
/// the board once, and a created quest also closes the form. Declined
/// actions do nothing. Failures raise the action's alert and nothing
/// else.
pub fn settle(
  action: QuestAction,
  result: &Result<ActionOutcome, ClientError>
) -> Followup {
  let followup = match result {
    | Ok(ActionOutcome::Applied) => {
      Followup {
        reload: action
          != QuestAction::Load,
        hide_form: action
          == QuestAction::Create,
        alert: None
      }
    }
    | Ok(ActionOutcome::Declined) => {
      Followup::default()
    }
    | Err(error) => Followup {
      alert: Some(
        action.alert_message(error)
      ),
      ..Followup::default()
    }
  };
  tracing::debug!(
    action = action.as_key(),
    reload = followup.reload,
    hide_form = followup.hide_form,
    alert = followup.alert.is_some(),
    "quest action settled"
  );
  followup
}

#[cfg(test)]
mod tests {
  use super::*;

  fn open_form() -> QuestForm {
    let mut form = QuestForm::default();
    form.open();
    form.edit(
      "title",
      "Find the Sword".to_string()
    );
    form
  }

  #[test]
  fn created_quest_reloads_and_hides() {
    let followup = settle(
      QuestAction::Create,
      &Ok(ActionOutcome::Applied)
    );
    assert_eq!(
      followup,
      Followup {
        reload:    true,
        hide_form: true,
        alert:     None
      }
    );

    let mut form = open_form();
    assert!(followup.apply_to(&mut form));
    assert_eq!(form, QuestForm::Hidden);
  }

  #[test]
  fn toggle_and_delete_reload_only() {
    for action in [
      QuestAction::Update,
      QuestAction::Delete
    ] {
      let followup = settle(
        action,
        &Ok(ActionOutcome::Applied)
      );
      assert!(followup.reload);
      assert!(!followup.hide_form);
      assert_eq!(followup.alert, None);

      let mut form = open_form();
      let before = form.clone();
      assert!(
        !followup.apply_to(&mut form)
      );
      assert_eq!(form, before);
    }
  }

  #[test]
  fn declined_delete_does_nothing() {
    assert_eq!(
      settle(
        QuestAction::Delete,
        &Ok(ActionOutcome::Declined)
      ),
      Followup::default()
    );
  }

  #[test]
  fn failed_create_alerts_and_keeps_draft()
  {
    let err = ClientError::Http {
      status:  500,
      message: Some(
        "Database is down".to_string()
      )
    };
    let followup = settle(
      QuestAction::Create,
      &Err(err)
    );
    assert!(!followup.reload);
    assert!(!followup.hide_form);
    assert_eq!(
      followup.alert.as_deref(),
      Some(
        "Failed to create quest: \
         Database is down"
      )
    );

    let mut form = open_form();
    let before = form.clone();
    assert!(!followup.apply_to(&mut form));
    assert_eq!(form, before);
  }

  #[test]
  fn failed_update_uses_fixed_alert() {
    let followup = settle(
      QuestAction::Update,
      &Err(ClientError::Network(
        "offline".to_string()
      ))
    );
    assert!(!followup.reload);
    assert_eq!(
      followup.alert.as_deref(),
      Some(
        "Failed to update quest. \
         Please try again later."
      )
    );
  }

  #[test]
  fn load_never_schedules_another_load() {
    let followup = settle(
      QuestAction::Load,
      &Ok(ActionOutcome::Applied)
    );
    assert!(!followup.reload);
    assert!(!followup.hide_form);
  }

  #[test]
  fn hidden_form_is_left_alone() {
    let followup = settle(
      QuestAction::Create,
      &Ok(ActionOutcome::Applied)
    );
    let mut form = QuestForm::Hidden;
    assert!(!followup.apply_to(&mut form));
  }
}
