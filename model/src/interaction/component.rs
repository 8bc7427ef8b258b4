use super::{ActionRow, SelectMenu};
use crate::ModelError;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;
use tracing::debug;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Component {
    ActionRow(ActionRow),
    SelectMenu(SelectMenu),
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum ComponentType {
    ActionRow = 1,
    Button = 2,
    SelectMenu = 3,
    TextInput = 4,
    UserSelect = 5,
    RoleSelect = 6,
    MentionableSelect = 7,
    ChannelSelect = 8,
}

impl TryFrom<u64> for ComponentType {
    type Error = ModelError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::ActionRow,
            2 => Self::Button,
            3 => Self::SelectMenu,
            4 => Self::TextInput,
            5 => Self::UserSelect,
            6 => Self::RoleSelect,
            7 => Self::MentionableSelect,
            8 => Self::ChannelSelect,
            _ => Err(ModelError::InvalidEnumValue {
                name: "component type",
                value,
            })?,
        })
    }
}

/// The fixed `type` tag of a component struct. Always encodes as `KIND`;
/// whatever was decoded is overridden.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub(crate) struct ComponentTag<const KIND: u8>;

pub(crate) type ActionRowTag = ComponentTag<{ ComponentType::ActionRow as u8 }>;
pub(crate) type SelectMenuTag = ComponentTag<{ ComponentType::SelectMenu as u8 }>;

impl<const KIND: u8> Serialize for ComponentTag<KIND> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(KIND)
    }
}

impl<'de, const KIND: u8> Deserialize<'de> for ComponentTag<KIND> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        if value.as_u64() != Some(KIND as u64) {
            debug!(expected = KIND, got = %value, "Overriding component type");
        }

        Ok(ComponentTag)
    }
}

impl Component {
    pub fn kind(&self) -> ComponentType {
        match self {
            Component::ActionRow(row) => row.kind(),
            Component::SelectMenu(menu) => menu.kind(),
        }
    }
}

impl From<ActionRow> for Component {
    fn from(row: ActionRow) -> Self {
        Component::ActionRow(row)
    }
}

impl From<SelectMenu> for Component {
    fn from(menu: SelectMenu) -> Self {
        Component::SelectMenu(menu)
    }
}

impl<'de> Deserialize<'de> for Component {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        let component_type = value
            .get("type")
            .and_then(Value::as_u64)
            .ok_or_else(|| D::Error::custom("component type was not an integer"))?;

        let component = match ComponentType::try_from(component_type).map_err(D::Error::custom)? {
            ComponentType::ActionRow => serde_json::from_value(value).map(Component::ActionRow),
            ComponentType::SelectMenu => serde_json::from_value(value).map(Component::SelectMenu),
            other => return Err(D::Error::custom(ModelError::UnsupportedComponent(other))),
        }
        .map_err(D::Error::custom)?;

        Ok(component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dispatch_select_menu() {
        let component: Component = serde_json::from_value(json!({
            "type": 3,
            "custom_id": "class_select",
            "options": [{ "label": "Rogue", "value": "rogue" }],
        }))
        .unwrap();

        match component {
            Component::SelectMenu(menu) => assert_eq!(&*menu.custom_id, "class_select"),
            other => panic!("expected select menu, got {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_type() {
        let err = serde_json::from_value::<Component>(json!({
            "type": 2,
            "style": 1,
            "custom_id": "click_one",
        }))
        .unwrap_err();

        assert!(err.to_string().contains("Button"));
    }

    #[test]
    fn test_invalid_type() {
        assert!(serde_json::from_value::<Component>(json!({ "type": 42 })).is_err());
        assert!(serde_json::from_value::<Component>(json!({ "type": "3" })).is_err());
        assert!(serde_json::from_value::<Component>(json!({})).is_err());
    }

    #[test]
    fn test_tag_overrides_decoded_type() {
        let tag: SelectMenuTag = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(serde_json::to_value(tag).unwrap(), json!(3));

        let tag: ActionRowTag = serde_json::from_value(json!("row")).unwrap();
        assert_eq!(serde_json::to_value(tag).unwrap(), json!(1));
    }

    #[test]
    fn test_component_type_convert() {
        assert_eq!(ComponentType::try_from(3).unwrap(), ComponentType::SelectMenu);
        assert!(ComponentType::try_from(0).is_err());
    }
}
