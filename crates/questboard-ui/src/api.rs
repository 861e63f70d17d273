use gloo::net::http::Request;
use questboard_core::request::{
  Method,
  QuestRequest,
  RequestBody
};
use questboard_core::{
  ClientError,
  QuestTransport,
  TransportResponse
};

/// Sends quest requests through the browser `fetch` API.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq,
)]
pub struct FetchTransport;

impl QuestTransport for FetchTransport {
  async fn send(
    &self,
    request: &QuestRequest
  ) -> Result<TransportResponse, ClientError>
  {
    let url = request.url.as_str();
    let builder = match request.method {
      | Method::Get => Request::get(url),
      | Method::Post => Request::post(url),
      | Method::Put => Request::put(url),
      | Method::Delete => {
        Request::delete(url)
      }
    };

    let prepared = match &request.body {
      | RequestBody::Empty => {
        builder.build()
      }
      | RequestBody::Create(create) => {
        builder.json(create)
      }
      | RequestBody::Patch(patch) => {
        builder.json(patch)
      }
    }
    .map_err(|e| {
      ClientError::Network(format!(
        "failed to build request: {e}"
      ))
    })?;

    let response =
      prepared.send().await.map_err(
        |e| {
          ClientError::Network(
            e.to_string()
          )
        }
      )?;

    let status = response.status();
    let body = response
      .text()
      .await
      .map_err(|e| e.to_string());

    TransportResponse::from_body_read(
      status, body
    )
  }
}
