use questboard_core::ColumnVisibility;
use questboard_shared::{
  Quest,
  QuestId
};
use yew::{
  AttrValue,
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

use super::QuestCard;

#[derive(Properties, PartialEq)]
pub struct QuestColumnProps {
  pub column_id:            AttrValue,
  pub list_id:              AttrValue,
  pub title:                AttrValue,
  pub quests:               Vec<Quest>,
  pub visibility:           ColumnVisibility,
  pub on_toggle_completion:
    Callback<Quest>,
  pub on_delete:            Callback<QuestId>
}

#[function_component(QuestColumn)]
pub fn quest_column(
  props: &QuestColumnProps
) -> Html {
  html! {
      <section
          id={props.column_id.clone()}
          class={classes!("quest-column", props.visibility.hidden_class())}
      >
          <h2 class="quest-column-title">
              { props.title.clone() }
              <span class="badge">{ props.quests.len().to_string() }</span>
          </h2>
          <div id={props.list_id.clone()} class="quest-list">
              {
                  for props.quests.iter().map(|quest| html! {
                      <QuestCard
                          key={quest.id.to_string()}
                          quest={quest.clone()}
                          on_toggle_completion={props.on_toggle_completion.clone()}
                          on_delete={props.on_delete.clone()}
                      />
                  })
              }
          </div>
      </section>
  }
}
