use questboard_shared::QuestCreate;

use crate::error::ClientError;

/// New-quest form: hidden, or visible with the values typed so far.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub enum QuestForm {
  #[default]
  Hidden,
  Visible(QuestCreate)
}

impl QuestForm {
  /// Shows the form with every field cleared.
  pub fn open(&mut self) {
    *self = Self::Visible(
      QuestCreate::default()
    );
  }

  pub fn cancel(&mut self) {
    *self = Self::Hidden;
  }

  pub fn is_visible(&self) -> bool {
    matches!(self, Self::Visible(_))
  }

  pub fn draft(
    &self
  ) -> Option<&QuestCreate> {
    match self {
      | Self::Visible(draft) => {
        Some(draft)
      }
      | Self::Hidden => None
    }
  }

  /// Stores one field value. Returns `false` when the form is hidden
  /// or the field is unknown.
  pub fn edit(
    &mut self,
    field: &str,
    value: String
  ) -> bool {
    let Self::Visible(draft) = self else {
      return false;
    };
    match draft.field_mut(field) {
      | Some(slot) => {
        *slot = value;
        true
      }
      | None => {
        tracing::warn!(
          field,
          "ignoring edit to unknown \
           quest field"
        );
        false
      }
    }
  }

  /// The payload to POST, or the first required field left blank.
  pub fn submission(
    &self
  ) -> Result<QuestCreate, ClientError> {
    let Self::Visible(draft) = self else {
      return Err(ClientError::Validation(
        "Quest form is not open"
          .to_string()
      ));
    };

    for name in
      QuestCreate::REQUIRED_FIELDS
    {
      let blank = draft
        .field(name)
        .is_none_or(|value| {
          value.trim().is_empty()
        });
      if blank {
        return Err(
          ClientError::missing_field(
            name
          )
        );
      }
    }

    Ok(draft.clone())
  }

  pub fn submit_succeeded(&mut self) {
    *self = Self::Hidden;
  }
}
