use questboard_core::card::CompletionToggle;
use questboard_shared::{
  Quest,
  QuestId
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct QuestCardActionsProps {
  pub quest:                Quest,
  pub on_toggle_completion:
    Callback<Quest>,
  pub on_delete:            Callback<QuestId>
}

#[function_component(QuestCardActions)]
pub fn quest_card_actions(
  props: &QuestCardActionsProps
) -> Html {
  let toggle =
    CompletionToggle::for_quest(
      &props.quest
    );

  html! {
      <div class="quest-actions">
          <button class="btn complete-btn" onclick={{
              let on_toggle = props.on_toggle_completion.clone();
              let quest = props.quest.clone();
              Callback::from(move |_| on_toggle.emit(quest.clone()))
          }}>
              <i class={toggle.icon_class}></i>
              { format!(" {}", toggle.label) }
          </button>
          <button class="btn danger delete-btn" onclick={{
              let on_delete = props.on_delete.clone();
              let id = props.quest.id.clone();
              Callback::from(move |_| on_delete.emit(id.clone()))
          }}>
              <i class="fas fa-trash"></i>
              { " Delete" }
          </button>
      </div>
  }
}
