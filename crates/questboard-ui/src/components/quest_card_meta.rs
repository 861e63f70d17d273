use questboard_core::card::format_created_at;
use questboard_shared::Quest;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct QuestCardMetaProps {
  pub quest: Quest
}

#[function_component(QuestCardMeta)]
pub fn quest_card_meta(
  props: &QuestCardMetaProps
) -> Html {
  let created = props
    .quest
    .created_at
    .as_deref()
    .map(format_created_at)
    .filter(|value| !value.is_empty());

  html! {
      <div class="quest-meta">
          <span class="quest-reward-label">
              <i class="fas fa-coins"></i>
              { " " }
              <span class="quest-reward">{ &props.quest.reward }</span>
          </span>
          <span class="quest-creator-label">
              <i class="fas fa-user"></i>
              { " " }
              <span class="quest-creator">{ &props.quest.creator }</span>
          </span>
          {
              if let Some(created) = created {
                  html! { <span class="quest-created">{ created }</span> }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
