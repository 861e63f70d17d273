use questboard_shared::{
  QuestCreate,
  QuestId,
  QuestPatch
};

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Method {
  Get,
  Post,
  Put,
  Delete
}

impl Method {
  pub fn as_str(self) -> &'static str {
    match self {
      | Self::Get => "GET",
      | Self::Post => "POST",
      | Self::Put => "PUT",
      | Self::Delete => "DELETE"
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
  Empty,
  Create(QuestCreate),
  Patch(QuestPatch)
}

/// A fully resolved call against the quest API, ready for the
/// transport to send.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestRequest {
  pub method: Method,
  pub url:    String,
  pub body:   RequestBody
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestEndpoints {
  base: String
}

impl QuestEndpoints {
  pub fn new(base: &str) -> Self {
    let trimmed =
      base.trim().trim_end_matches('/');
    let base = if trimmed.is_empty() {
      "/api/quests".to_string()
    } else {
      trimmed.to_string()
    };
    Self {
      base
    }
  }

  pub fn base(&self) -> &str {
    &self.base
  }

  pub fn list(&self) -> QuestRequest {
    QuestRequest {
      method: Method::Get,
      url:    self.base.clone(),
      body:   RequestBody::Empty
    }
  }

  pub fn create(
    &self,
    create: QuestCreate
  ) -> QuestRequest {
    QuestRequest {
      method: Method::Post,
      url:    self.base.clone(),
      body:   RequestBody::Create(
        create
      )
    }
  }

  pub fn set_completed(
    &self,
    id: &QuestId,
    completed: bool
  ) -> QuestRequest {
    QuestRequest {
      method: Method::Put,
      url:    self.item_url(id),
      body:   RequestBody::Patch(
        QuestPatch {
          completed
        }
      )
    }
  }

  pub fn delete(
    &self,
    id: &QuestId
  ) -> QuestRequest {
    QuestRequest {
      method: Method::Delete,
      url:    self.item_url(id),
      body:   RequestBody::Empty
    }
  }

  fn item_url(
    &self,
    id: &QuestId
  ) -> String {
    format!("{}/{id}", self.base)
  }
}

impl Default for QuestEndpoints {
  fn default() -> Self {
    Self::new("/api/quests")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn base_is_normalized() {
    assert_eq!(
      QuestEndpoints::new(
        "https://quests.example.com/api/quests/"
      )
      .base(),
      "https://quests.example.com/api/quests"
    );
    assert_eq!(
      QuestEndpoints::new("  ").base(),
      "/api/quests"
    );
  }

  #[test]
  fn item_requests_target_the_quest_path()
  {
    let endpoints =
      QuestEndpoints::default();
    let id = QuestId::from(3);

    let put =
      endpoints.set_completed(&id, true);
    assert_eq!(put.method, Method::Put);
    assert_eq!(put.url, "/api/quests/3");
    assert_eq!(
      put.body,
      RequestBody::Patch(QuestPatch {
        completed: true
      })
    );

    let delete = endpoints.delete(&id);
    assert_eq!(
      delete.method.as_str(),
      "DELETE"
    );
    assert_eq!(
      delete.url,
      "/api/quests/3"
    );
    assert_eq!(
      delete.body,
      RequestBody::Empty
    );
  }

  #[test]
  fn list_and_create_hit_the_collection() {
    let endpoints =
      QuestEndpoints::new("/v2/quests");
    assert_eq!(
      endpoints.list().url,
      "/v2/quests"
    );
    let create = endpoints
      .create(QuestCreate::default());
    assert_eq!(
      create.method,
      Method::Post
    );
    assert_eq!(create.url, "/v2/quests");
  }
}
