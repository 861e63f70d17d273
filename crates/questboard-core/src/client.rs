use std::future::Future;

use questboard_shared::{
  Quest,
  QuestId
};
use tracing::{
  debug,
  info,
  warn
};

use crate::board::QuestBoard;
use crate::card::{
  CompletionToggle,
  DELETE_CONFIRMATION
};
use crate::error::ClientError;
use crate::form::QuestForm;
use crate::request::{
  QuestEndpoints,
  QuestRequest
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
  pub status: u16,
  pub body:   String
}

impl TransportResponse {
  pub fn is_success(&self) -> bool {
    (200..300).contains(&self.status)
  }

  /// Pairs a status with the outcome of reading its body. A failed
  /// read on a rejected response keeps the status with an empty body
  /// so callers still see an HTTP error.
  pub fn from_body_read(
    status: u16,
    body: Result<String, String>
  ) -> Result<Self, ClientError> {
    match body {
      | Ok(body) => Ok(Self {
        status,
        body
      }),
      | Err(detail)
        if !(200..300).contains(&status) =>
      {
        warn!(
          status,
          %detail,
          "failed reading error body"
        );
        Ok(Self {
          status,
          body: String::new()
        })
      }
      | Err(detail) => {
        Err(ClientError::Decode(format!(
          "failed to read body: {detail}"
        )))
      }
    }
  }
}

/// Sends planned requests. The browser build implements this over
/// `fetch`; tests use an in-memory backend.
pub trait QuestTransport {
  fn send(
    &self,
    request: &QuestRequest
  ) -> impl Future<
    Output = Result<
      TransportResponse,
      ClientError
    >
  >;
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ActionOutcome {
  /// The backend accepted the mutation.
  Applied,
  /// The user backed out before any request was sent.
  Declined
}

/// Quest API operations. Mutations report success only; the caller
/// runs a reload afterwards.
#[derive(Debug, Clone)]
pub struct QuestClient<T> {
  endpoints: QuestEndpoints,
  transport: T
}

impl<T: QuestTransport> QuestClient<T> {
  pub fn new(
    endpoints: QuestEndpoints,
    transport: T
  ) -> Self {
    Self {
      endpoints,
      transport
    }
  }

  pub fn transport(&self) -> &T {
    &self.transport
  }

  pub async fn load(
    &self
  ) -> Result<QuestBoard, ClientError> {
    let request = self.endpoints.list();
    let response =
      self.checked_send(&request).await?;
    let quests = serde_json::from_str::<
      Vec<Quest>
    >(&response.body)
    .map_err(|error| {
      ClientError::Decode(
        error.to_string()
      )
    })?;
    info!(
      total = quests.len(),
      "fetched quest list"
    );
    Ok(QuestBoard::from_quests(quests))
  }

  /// Flips `completed` on the server.
  pub async fn toggle_completion(
    &self,
    quest: &Quest
  ) -> Result<ActionOutcome, ClientError>
  {
    let toggle =
      CompletionToggle::for_quest(quest);
    let request =
      self.endpoints.set_completed(
        &quest.id,
        toggle.requested
      );
    self.checked_send(&request).await?;
    info!(
      id = %quest.id,
      completed = toggle.requested,
      "updated quest completion"
    );
    Ok(ActionOutcome::Applied)
  }

  /// Deletes after `confirm` agrees; a declined prompt sends nothing.
  pub async fn delete<F>(
    &self,
    id: &QuestId,
    confirm: F
  ) -> Result<ActionOutcome, ClientError>
  where
    F: FnOnce(&str) -> bool
  {
    if !confirm(DELETE_CONFIRMATION) {
      debug!(
        %id,
        "quest deletion declined"
      );
      return Ok(ActionOutcome::Declined);
    }

    let request =
      self.endpoints.delete(id);
    self.checked_send(&request).await?;
    info!(%id, "deleted quest");
    Ok(ActionOutcome::Applied)
  }

  /// Posts the form draft. Blank required fields fail before any
  /// request is made.
  pub async fn create(
    &self,
    form: &QuestForm
  ) -> Result<ActionOutcome, ClientError>
  {
    let create = form.submission()?;
    let title = create.title.clone();
    let request =
      self.endpoints.create(create);
    self.checked_send(&request).await?;
    info!(%title, "created quest");
    Ok(ActionOutcome::Applied)
  }

  async fn checked_send(
    &self,
    request: &QuestRequest
  ) -> Result<TransportResponse, ClientError>
  {
    debug!(
      method = request.method.as_str(),
      url = %request.url,
      "sending quest request"
    );
    let response = self
      .transport
      .send(request)
      .await?;
    if response.is_success() {
      return Ok(response);
    }

    warn!(
      method = request.method.as_str(),
      url = %request.url,
      status = response.status,
      "quest request rejected"
    );
    Err(ClientError::from_response(
      response.status,
      &response.body
    ))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unreadable_error_body_keeps_status() {
    let response =
      TransportResponse::from_body_read(
        500,
        Err("stream closed".to_string())
      )
      .expect("status survives");
    assert_eq!(response.status, 500);
    assert!(response.body.is_empty());

    let err = ClientError::from_response(
      response.status,
      &response.body
    );
    assert_eq!(
      crate::QuestAction::Create
        .alert_message(&err),
      "Failed to create quest: Failed \
       to create quest"
    );
  }

  #[test]
  fn unreadable_success_body_is_a_decode_error()
  {
    let err =
      TransportResponse::from_body_read(
        200,
        Err("stream closed".to_string())
      )
      .expect_err("no usable body");
    assert!(matches!(
      err,
      ClientError::Decode(_)
    ));
  }

  #[test]
  fn readable_body_is_passed_through() {
    let response =
      TransportResponse::from_body_read(
        404,
        Ok(r#"{"error":"Quest not found"}"#
          .to_string())
      )
      .expect("body read");
    assert!(!response.is_success());
    assert_eq!(
      response.body,
      r#"{"error":"Quest not found"}"#
    );
  }
}
