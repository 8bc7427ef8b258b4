use super::component::ActionRowTag;
use super::{Component, ComponentType, SelectMenu};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActionRow {
    #[serde(rename = "type", default)]
    kind: ActionRowTag,
    pub components: Vec<Component>,
}

impl ActionRow {
    pub fn new(components: Vec<Component>) -> ActionRow {
        ActionRow {
            kind: ActionRowTag::default(),
            components,
        }
    }

    pub fn kind(&self) -> ComponentType {
        ComponentType::ActionRow
    }

    /// Looks up the menu an interaction's `custom_id` refers to.
    pub fn select_menu(&self, custom_id: &str) -> Option<&SelectMenu> {
        self.components.iter().find_map(|component| match component {
            Component::SelectMenu(menu) if &*menu.custom_id == custom_id => Some(menu),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::SelectOption;
    use serde_json::json;

    #[test]
    fn test_round_trip() {
        let payload = json!({
            "type": 1,
            "components": [{
                "type": 3,
                "custom_id": "class_select",
                "options": [
                    { "label": "Rogue", "value": "rogue", "description": "Sneak n stab" },
                    { "label": "Mage", "value": "mage", "emoji": { "id": null, "name": "🧙" } },
                ],
                "placeholder": "Choose a class",
                "min_values": 1,
                "max_values": 2,
            }],
        });

        let row: ActionRow = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(row.components.len(), 1);
        assert_eq!(serde_json::to_value(&row).unwrap(), payload);
    }

    #[test]
    fn test_type_is_always_action_row() {
        let row: ActionRow = serde_json::from_value(json!({ "type": 3, "components": [] })).unwrap();

        assert_eq!(row.kind(), ComponentType::ActionRow);
        assert_eq!(
            serde_json::to_value(&row).unwrap(),
            json!({ "type": 1, "components": [] })
        );
    }

    #[test]
    fn test_select_menu_lookup() {
        let menu = SelectMenu::new("class_select")
            .with_options(vec![SelectOption::new("Rogue", "rogue")]);
        let row = ActionRow::new(vec![menu.into()]);

        assert!(row.select_menu("class_select").is_some());
        assert!(row.select_menu("other").is_none());
    }
}
