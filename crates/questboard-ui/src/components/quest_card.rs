use questboard_shared::{
  Quest,
  QuestId
};
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

use super::{
  QuestCardActions,
  QuestCardMeta
};

#[derive(Properties, PartialEq)]
pub struct QuestCardProps {
  pub quest:                Quest,
  pub on_toggle_completion:
    Callback<Quest>,
  pub on_delete:            Callback<QuestId>
}

#[function_component(QuestCard)]
pub fn quest_card(
  props: &QuestCardProps
) -> Html {
  let quest = &props.quest;

  html! {
      <div
          class={classes!("quest-card", quest.completed.then_some("completed"))}
          data-id={quest.id.to_string()}
          data-type={quest.quest_type.clone()}
      >
          <div class="quest-header">
              <h3 class="quest-title">{ &quest.title }</h3>
              <span class="quest-type">{ &quest.quest_type }</span>
          </div>
          <p class="quest-description">{ &quest.description }</p>
          <QuestCardMeta quest={quest.clone()} />
          <QuestCardActions
              quest={quest.clone()}
              on_toggle_completion={props.on_toggle_completion.clone()}
              on_delete={props.on_delete.clone()}
          />
      </div>
  }
}
