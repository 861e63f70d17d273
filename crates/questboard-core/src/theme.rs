#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub enum ThemeMode {
  #[default]
  Light,
  Dark
}

impl ThemeMode {
  /// Reads a persisted value; anything unrecognized is the default.
  pub fn from_storage_value(
    stored: Option<&str>
  ) -> Self {
    match stored.map(str::trim) {
      | Some("dark") => Self::Dark,
      | _ => Self::Light
    }
  }

  pub fn storage_value(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "light",
      | Self::Dark => "dark"
    }
  }

  /// Value of the document `data-theme` attribute.
  pub fn as_attribute(
    self
  ) -> &'static str {
    self.storage_value()
  }

  pub fn next(self) -> Self {
    match self {
      | Self::Light => Self::Dark,
      | Self::Dark => Self::Light
    }
  }

  /// Icon on the toggle button: a sun offers the way back to light.
  pub fn icon_class(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "fas fa-moon",
      | Self::Dark => "fas fa-sun"
    }
  }
}
