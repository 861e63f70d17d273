use questboard_core::ThemeMode;

fn local_storage()
-> Option<web_sys::Storage> {
  web_sys::window().and_then(|window| {
    window
      .local_storage()
      .ok()
      .flatten()
  })
}

pub(super) fn load_theme_mode(
  key: &str
) -> ThemeMode {
  let stored =
    local_storage().and_then(
      |storage| {
        storage
          .get_item(key)
          .ok()
          .flatten()
      }
    );

  let theme =
    ThemeMode::from_storage_value(
      stored.as_deref()
    );
  tracing::debug!(
    stored = ?stored,
    theme = theme.storage_value(),
    "loaded theme preference"
  );
  theme
}

pub(super) fn save_theme_mode(
  key: &str,
  theme: ThemeMode
) {
  let Some(storage) = local_storage()
  else {
    tracing::warn!(
      "local storage unavailable; theme \
       not persisted"
    );
    return;
  };

  if let Err(error) = storage.set_item(
    key,
    theme.storage_value()
  ) {
    tracing::error!(
      error = ?error,
      "failed persisting theme"
    );
  }
}

/// Projects the theme onto `<html data-theme=...>`.
pub(super) fn apply_theme(
  theme: ThemeMode
) {
  let Some(root) = web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .and_then(|document| {
      document.document_element()
    })
  else {
    return;
  };

  let _ = root.set_attribute(
    "data-theme",
    theme.as_attribute()
  );
}
