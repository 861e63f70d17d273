use std::fmt;

use questboard_shared::ApiErrorBody;

const CREATE_FALLBACK_MESSAGE: &str =
  "Failed to create quest";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
  /// The request never produced a response.
  Network(String),
  /// The backend answered with a non-success status.
  Http {
    status:  u16,
    message: Option<String>
  },
  /// A success response whose body was not the expected JSON.
  Decode(String),
  Validation(String)
}

impl ClientError {
  /// Builds the error for a non-success response from its status and
  /// raw body. Backend `400`s carrying an `error` field are validation
  /// failures.
  pub fn from_response(
    status: u16,
    body: &str
  ) -> Self {
    let message =
      error_message_from_body(body);
    match (status, message) {
      | (400, Some(message)) => {
        Self::Validation(message)
      }
      | (status, message) => {
        Self::Http {
          status,
          message
        }
      }
    }
  }

  pub fn missing_field(
    name: &str
  ) -> Self {
    Self::Validation(format!(
      "Missing required field: {name}"
    ))
  }

  fn create_detail(&self) -> String {
    match self {
      | Self::Http {
        message: Some(message),
        ..
      }
      | Self::Validation(message) => {
        message.clone()
      }
      | Self::Http {
        message: None,
        ..
      } => CREATE_FALLBACK_MESSAGE
        .to_string(),
      | Self::Network(detail)
      | Self::Decode(detail) => {
        if detail.trim().is_empty() {
          CREATE_FALLBACK_MESSAGE
            .to_string()
        } else {
          detail.clone()
        }
      }
    }
  }
}

impl fmt::Display for ClientError {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    match self {
      | Self::Network(detail) => {
        write!(
          f,
          "network failure: {detail}"
        )
      }
      | Self::Http {
        status,
        message: Some(message)
      } => {
        write!(
          f,
          "http {status}: {message}"
        )
      }
      | Self::Http {
        status,
        message: None
      } => write!(f, "http {status}"),
      | Self::Decode(detail) => {
        write!(
          f,
          "invalid response body: \
           {detail}"
        )
      }
      | Self::Validation(message) => {
        write!(
          f,
          "validation failed: \
           {message}"
        )
      }
    }
  }
}

impl std::error::Error for ClientError {}

/// Pulls the backend `error` text out of a failure body, if any.
pub fn error_message_from_body(
  body: &str
) -> Option<String> {
  serde_json::from_str::<ApiErrorBody>(
    body
  )
  .ok()
  .map(|parsed| parsed.error)
  .filter(|message| {
    !message.trim().is_empty()
  })
}

/// The user gesture an error is reported against.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum QuestAction {
  Load,
  Create,
  Update,
  Delete
}

impl QuestAction {
  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Load => "load",
      | Self::Create => "create",
      | Self::Update => "update",
      | Self::Delete => "delete"
    }
  }

  /// Text for the blocking alert shown when this action fails.
  pub fn alert_message(
    self,
    error: &ClientError
  ) -> String {
    match self {
      | Self::Load => {
        "Failed to load quests. Please \
         try again later."
          .to_string()
      }
      | Self::Update => {
        "Failed to update quest. \
         Please try again later."
          .to_string()
      }
      | Self::Delete => {
        "Failed to delete quest. \
         Please try again later."
          .to_string()
      }
      | Self::Create => {
        format!(
          "Failed to create quest: {}",
          error.create_detail()
        )
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn backend_error_text_is_extracted() {
    assert_eq!(
      error_message_from_body(
        r#"{"error":"Missing required field: reward"}"#
      )
      .as_deref(),
      Some(
        "Missing required field: reward"
      )
    );
    assert_eq!(
      error_message_from_body(
        "<html>oops</html>"
      ),
      None
    );
    assert_eq!(
      error_message_from_body(
        r#"{"error":"  "}"#
      ),
      None
    );
  }

  #[test]
  fn bad_request_with_message_is_validation()
  {
    let err = ClientError::from_response(
      400,
      r#"{"error":"Missing required field: title"}"#
    );
    assert_eq!(
      err,
      ClientError::Validation(
        "Missing required field: title"
          .to_string()
      )
    );

    let err = ClientError::from_response(
      500, ""
    );
    assert_eq!(
      err,
      ClientError::Http {
        status:  500,
        message: None
      }
    );
  }

  #[test]
  fn create_alert_falls_back_to_generic_text()
  {
    let err = ClientError::Http {
      status:  500,
      message: None
    };
    assert_eq!(
      QuestAction::Create
        .alert_message(&err),
      "Failed to create quest: Failed \
       to create quest"
    );

    let err = ClientError::from_response(
      500,
      r#"{"error":"Failed to create quest"}"#
    );
    assert_eq!(
      QuestAction::Create
        .alert_message(&err),
      "Failed to create quest: Failed \
       to create quest"
    );
  }

  #[test]
  fn create_alert_carries_backend_message() {
    let err =
      ClientError::missing_field(
        "creator"
      );
    assert_eq!(
      QuestAction::Create
        .alert_message(&err),
      "Failed to create quest: Missing \
       required field: creator"
    );
  }

  #[test]
  fn other_actions_use_fixed_alerts() {
    let err = ClientError::Network(
      "Failed to fetch".to_string()
    );
    assert_eq!(
      QuestAction::Load
        .alert_message(&err),
      "Failed to load quests. Please \
       try again later."
    );
    assert_eq!(
      QuestAction::Update
        .alert_message(&err),
      "Failed to update quest. Please \
       try again later."
    );
    assert_eq!(
      QuestAction::Delete
        .alert_message(&err),
      "Failed to delete quest. Please \
       try again later."
    );
  }
}
