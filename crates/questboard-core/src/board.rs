use questboard_shared::Quest;

/// The rendered split of one quest list fetch.
///
/// Built fresh from every server response; nothing here survives a
/// reload.
#[derive(
  Debug, Clone, Default, PartialEq,
)]
pub struct QuestBoard {
  active:    Vec<Quest>,
  completed: Vec<Quest>
}

impl QuestBoard {
  pub fn empty() -> Self {
    Self::default()
  }

  /// Partitions on `completed`, keeping server order inside each
  /// column.
  pub fn from_quests(
    quests: Vec<Quest>
  ) -> Self {
    let (completed, active): (
      Vec<Quest>,
      Vec<Quest>
    ) = quests
      .into_iter()
      .partition(|quest| quest.completed);
    let board = Self {
      active,
      completed
    };
    tracing::debug!(
      active = board.active.len(),
      completed = board.completed.len(),
      "partitioned quest list"
    );
    board
  }

  pub fn active(&self) -> &[Quest] {
    &self.active
  }

  pub fn completed(&self) -> &[Quest] {
    &self.completed
  }

  pub fn len(&self) -> usize {
    self.active.len()
      + self.completed.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// Show/hide state of a board column. The completed column follows its
/// checkbox; the active column is always shown.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct ColumnVisibility {
  shown: bool
}

impl ColumnVisibility {
  pub fn shown() -> Self {
    Self { shown: true }
  }

  pub fn from_checkbox(
    checked: bool
  ) -> Self {
    Self {
      shown: checked
    }
  }

  pub fn is_shown(self) -> bool {
    self.shown
  }

  pub fn hidden_class(
    self
  ) -> Option<&'static str> {
    (!self.shown).then_some("hidden")
  }
}
