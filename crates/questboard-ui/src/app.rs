mod storage;

use std::rc::Rc;

use gloo::console::log;
use questboard_core::{
  ActionOutcome,
  ClientConfig,
  ClientError,
  ColumnVisibility,
  Followup,
  QuestAction,
  QuestBoard,
  QuestClient,
  QuestForm,
  settle
};
use questboard_shared::{
  Quest,
  QuestId
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Reducible,
  UseReducerDispatcher,
  function_component,
  html,
  use_effect_with,
  use_memo,
  use_reducer,
  use_state
};

use self::storage::{
  apply_theme,
  load_theme_mode,
  save_theme_mode
};
use crate::api::FetchTransport;
use crate::components::{
  QuestColumn,
  QuestFormPanel,
  Topbar
};

const CLIENT_CONFIG_TOML: &str =
  include_str!("../assets/questboard.toml");

type Client = QuestClient<FetchTransport>;

/// Counts requested reloads; the refresh effect runs once per value.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq,
)]
struct ReloadTick(u64);

enum ReloadAction {
  Requested
}

impl Reducible for ReloadTick {
  type Action = ReloadAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    match action {
      | ReloadAction::Requested => {
        Rc::new(Self(
          self.0.saturating_add(1)
        ))
      }
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let config = use_memo((), |_| {
    ClientConfig::from_toml_or_default(
      CLIENT_CONFIG_TOML
    )
  });
  let client = {
    let config = config.clone();
    use_memo((), move |_| {
      Client::new(
        config.endpoints(),
        FetchTransport
      )
    })
  };
  let theme = {
    let key =
      config.theme_storage_key.clone();
    use_state(move || {
      load_theme_mode(&key)
    })
  };
  let show_completed = {
    let initial = config.show_completed;
    use_state(move || initial)
  };
  let board =
    use_state(QuestBoard::empty);
  let form =
    use_state(QuestForm::default);
  let form_busy = use_state(|| false);
  let reload =
    use_reducer(ReloadTick::default);
  let reloader = reload.dispatcher();

  {
    use_effect_with(*theme, move |theme| {
      apply_theme(*theme);
      tracing::debug!(
        theme = theme.storage_value(),
        "applied theme"
      );
      || ()
    });
  }

  {
    let client = client.clone();
    let board = board.clone();
    use_effect_with(
      reload.0,
      move |tick| {
        let tick = *tick;
        let client = client.clone();
        let board = board.clone();

        wasm_bindgen_futures::spawn_local(
          async move {
            tracing::info!(
              tick,
              "reloading quests"
            );
            match client.load().await {
              | Ok(next) => board.set(next),
              | Err(err) => {
                board
                  .set(QuestBoard::empty());
                report_failure(
                  QuestAction::Load,
                  &err
                );
              }
            }
          }
        );

        || ()
      }
    );
  }

  let on_toggle_theme = {
    let theme = theme.clone();
    let key =
      config.theme_storage_key.clone();
    Callback::from(
      move |_: MouseEvent| {
        let next = (*theme).next();
        save_theme_mode(&key, next);
        theme.set(next);
        ui_debug(
          "action.theme.toggle",
          next.storage_value()
        );
      }
    )
  };

  let on_show_completed_change = {
    let show_completed =
      show_completed.clone();
    Callback::from(move |checked: bool| {
      show_completed.set(checked);
      tracing::debug!(
        checked,
        "completed column visibility \
         changed"
      );
    })
  };

  let on_new_quest = {
    let form = form.clone();
    Callback::from(
      move |_: MouseEvent| {
        let mut next = (*form).clone();
        next.open();
        form.set(next);
        ui_debug(
          "action.form.open",
          "clicked New Quest"
        );
      }
    )
  };

  let on_cancel_form = {
    let form = form.clone();
    Callback::from(
      move |_: MouseEvent| {
        let mut next = (*form).clone();
        next.cancel();
        form.set(next);
        ui_debug(
          "action.form.cancel",
          "closed quest form"
        );
      }
    )
  };

  let on_form_input = {
    let form = form.clone();
    Callback::from(
      move |(field, value): (
        String,
        String
      )| {
        let mut next = (*form).clone();
        if next.edit(&field, value) {
          form.set(next);
        }
      }
    )
  };

  let on_form_submit = {
    let client = client.clone();
    let form = form.clone();
    let form_busy = form_busy.clone();
    let reloader = reloader.clone();
    Callback::from(move |()| {
      if *form_busy {
        tracing::warn!(
          "quest submission already in \
           flight"
        );
        return;
      }

      let client = client.clone();
      let form = form.clone();
      let form_busy = form_busy.clone();
      let reloader = reloader.clone();
      let mut snapshot = (*form).clone();
      form_busy.set(true);
      ui_debug(
        "action.form.submit",
        "submitting quest form"
      );

      wasm_bindgen_futures::spawn_local(
        async move {
          let result = client
            .create(&snapshot)
            .await;
          let followup = settle(
            QuestAction::Create,
            &result
          );
          if followup.apply_to(&mut snapshot)
          {
            form.set(snapshot);
          }
          run_followup(
            QuestAction::Create,
            &result,
            &followup,
            &reloader
          );
          form_busy.set(false);
        }
      );
    })
  };

  let on_toggle_completion = {
    let client = client.clone();
    let reloader = reloader.clone();
    Callback::from(move |quest: Quest| {
      let client = client.clone();
      let reloader = reloader.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          let result = client
            .toggle_completion(&quest)
            .await;
          settle_and_follow(
            QuestAction::Update,
            &result,
            &reloader
          );
        }
      );
    })
  };

  let on_delete = {
    let client = client.clone();
    Callback::from(move |id: QuestId| {
      let client = client.clone();
      let reloader = reloader.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          let result = client
            .delete(&id, confirm_dialog)
            .await;
          settle_and_follow(
            QuestAction::Delete,
            &result,
            &reloader
          );
        }
      );
    })
  };

  let completed_visibility =
    ColumnVisibility::from_checkbox(
      *show_completed
    );

  html! {
      <div class="app">
          <Topbar
              theme={*theme}
              show_completed={*show_completed}
              on_new_quest={on_new_quest}
              on_toggle_theme={on_toggle_theme}
              on_show_completed_change={on_show_completed_change}
          />

          <QuestFormPanel
              draft={form.draft().cloned()}
              busy={*form_busy}
              quest_types={config.quest_types.clone()}
              on_input={on_form_input}
              on_submit={on_form_submit}
              on_cancel={on_cancel_form}
          />

          <div class="quest-board">
              <QuestColumn
                  column_id="active-quests-column"
                  list_id="active-quests"
                  title="Active Quests"
                  quests={board.active().to_vec()}
                  visibility={ColumnVisibility::shown()}
                  on_toggle_completion={on_toggle_completion.clone()}
                  on_delete={on_delete.clone()}
              />
              <QuestColumn
                  column_id="completed-quests-column"
                  list_id="completed-quests"
                  title="Completed Quests"
                  quests={board.completed().to_vec()}
                  visibility={completed_visibility}
                  on_toggle_completion={on_toggle_completion}
                  on_delete={on_delete}
              />
          </div>
      </div>
  }
}

fn settle_and_follow(
  action: QuestAction,
  result: &Result<ActionOutcome, ClientError>,
  reloader: &UseReducerDispatcher<
    ReloadTick
  >
) {
  let followup = settle(action, result);
  run_followup(
    action, result, &followup, reloader
  );
}

/// Dispatches rather than sets, so completions that land together each
/// count from the latest tick.
fn run_followup(
  action: QuestAction,
  result: &Result<ActionOutcome, ClientError>,
  followup: &Followup,
  reloader: &UseReducerDispatcher<
    ReloadTick
  >
) {
  if followup.reload {
    reloader
      .dispatch(ReloadAction::Requested);
  }
  if let (Some(message), Err(error)) =
    (&followup.alert, result)
  {
    tracing::error!(
      action = action.as_key(),
      %error,
      "quest action failed"
    );
    gloo::dialogs::alert(message);
  }
}

fn report_failure(
  action: QuestAction,
  error: &ClientError
) {
  tracing::error!(
    action = action.as_key(),
    %error,
    "quest action failed"
  );
  gloo::dialogs::alert(
    &action.alert_message(error)
  );
}

fn confirm_dialog(
  message: &str
) -> bool {
  let confirmed =
    gloo::dialogs::confirm(message);
  ui_debug(
    "dialog.confirm",
    if confirmed {
      "accepted"
    } else {
      "declined"
    }
  );
  confirmed
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
