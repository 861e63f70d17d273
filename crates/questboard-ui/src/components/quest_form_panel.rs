use questboard_shared::QuestCreate;
use web_sys::{
  HtmlInputElement,
  HtmlTextAreaElement,
  InputEvent,
  SubmitEvent
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  classes,
  function_component,
  html
};

const QUEST_TYPE_OPTIONS_ID: &str =
  "quest-type-options";

#[derive(Properties, PartialEq)]
pub struct QuestFormPanelProps {
  /// `None` while the form is hidden.
  pub draft:       Option<QuestCreate>,
  pub busy:        bool,
  pub quest_types: Vec<String>,
  pub on_input:
    Callback<(String, String)>,
  pub on_submit:   Callback<()>,
  pub on_cancel:   Callback<MouseEvent>
}

fn input_handler(
  on_input: &Callback<(String, String)>,
  field: &'static str
) -> Callback<InputEvent> {
  let on_input = on_input.clone();
  Callback::from(move |e: InputEvent| {
    let input: HtmlInputElement =
      e.target_unchecked_into();
    on_input.emit((
      field.to_string(),
      input.value()
    ));
  })
}

#[function_component(QuestFormPanel)]
pub fn quest_form_panel(
  props: &QuestFormPanelProps
) -> Html {
  let hidden = props.draft.is_none();
  let draft = props
    .draft
    .clone()
    .unwrap_or_default();

  let onsubmit = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |e: SubmitEvent| {
        e.prevent_default();
        on_submit.emit(());
      }
    )
  };

  let on_description_input = {
    let on_input =
      props.on_input.clone();
    Callback::from(
      move |e: InputEvent| {
        let area: HtmlTextAreaElement =
          e.target_unchecked_into();
        on_input.emit((
          "description".to_string(),
          area.value()
        ));
      }
    )
  };

  html! {
      <div
          id="quest-form-container"
          class={classes!("quest-form-container", hidden.then_some("hidden"))}
      >
          <h2>{ "Post a New Quest" }</h2>
          <form id="quest-form" {onsubmit}>
              <label>
                  { "Title" }
                  <input
                      name="title"
                      required={true}
                      value={draft.title.clone()}
                      oninput={input_handler(&props.on_input, "title")}
                  />
              </label>
              <label>
                  { "Quest type" }
                  <input
                      name="quest_type"
                      required={true}
                      list={QUEST_TYPE_OPTIONS_ID}
                      value={draft.quest_type.clone()}
                      oninput={input_handler(&props.on_input, "quest_type")}
                  />
                  <datalist id={QUEST_TYPE_OPTIONS_ID}>
                      {
                          for props.quest_types.iter().map(|kind| html! {
                              <option value={kind.clone()} />
                          })
                      }
                  </datalist>
              </label>
              <label>
                  { "Description" }
                  <textarea
                      name="description"
                      required={true}
                      value={draft.description.clone()}
                      oninput={on_description_input}
                  />
              </label>
              <label>
                  { "Reward" }
                  <input
                      name="reward"
                      required={true}
                      value={draft.reward.clone()}
                      oninput={input_handler(&props.on_input, "reward")}
                  />
              </label>
              <label>
                  { "Your name" }
                  <input
                      name="creator"
                      required={true}
                      value={draft.creator.clone()}
                      oninput={input_handler(&props.on_input, "creator")}
                  />
              </label>
              <div class="form-actions">
                  <button
                      id="cancel-btn"
                      type="button"
                      class="btn"
                      onclick={props.on_cancel.clone()}
                  >
                      { "Cancel" }
                  </button>
                  <button type="submit" class="btn ok" disabled={props.busy}>
                      { if props.busy { "Posting..." } else { "Post Quest" } }
                  </button>
              </div>
          </form>
      </div>
  }
}
