mod quest_card;
mod quest_card_actions;
mod quest_card_meta;
mod quest_column;
mod quest_form_panel;
mod topbar;

pub use quest_card::QuestCard;
pub use quest_card_actions::QuestCardActions;
pub use quest_card_meta::QuestCardMeta;
pub use quest_column::QuestColumn;
pub use quest_form_panel::QuestFormPanel;
pub use topbar::Topbar;
