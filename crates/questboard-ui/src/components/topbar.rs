use questboard_core::ThemeMode;
use web_sys::{
  Event,
  HtmlInputElement
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TopbarProps {
  pub theme:           ThemeMode,
  pub show_completed:  bool,
  pub on_new_quest:
    Callback<MouseEvent>,
  pub on_toggle_theme:
    Callback<MouseEvent>,
  pub on_show_completed_change:
    Callback<bool>
}

#[function_component(Topbar)]
pub fn topbar(
  props: &TopbarProps
) -> Html {
  let onchange = {
    let on_change = props
      .on_show_completed_change
      .clone();
    Callback::from(move |e: Event| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_change.emit(input.checked());
    })
  };

  html! {
      <header class="topbar">
          <div class="brand">{ "Quest Board" }</div>
          <button id="new-quest-btn" class="btn" onclick={props.on_new_quest.clone()}>
              <i class="fas fa-plus"></i>{ " New Quest" }
          </button>
          <label class="toggle">
              <input
                  id="show-completed"
                  type="checkbox"
                  checked={props.show_completed}
                  {onchange}
              />
              { " Show completed" }
          </label>
          <button
              id="theme-toggle"
              class="btn"
              title="Toggle theme"
              onclick={props.on_toggle_theme.clone()}
          >
              <i class={props.theme.icon_class()}></i>
          </button>
      </header>
  }
}
