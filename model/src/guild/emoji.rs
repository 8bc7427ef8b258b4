use serde::{Deserialize, Serialize};

use crate::user::User;
use crate::{Nullable, Snowflake};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Emoji {
    /// Null for unicode emojis
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub id: Nullable<Snowflake>,
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub roles: Nullable<Vec<Snowflake>>,
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub user: Nullable<User>,
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub require_colons: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub managed: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub animated: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub available: Nullable<bool>,
}

impl Emoji {
    fn partial(id: Nullable<Snowflake>, name: String, animated: Nullable<bool>) -> Emoji {
        Emoji {
            id,
            name: Nullable::Present(name),
            roles: Nullable::Missing,
            user: Nullable::Missing,
            require_colons: Nullable::Missing,
            managed: Nullable::Missing,
            animated,
            available: Nullable::Missing,
        }
    }

    pub fn unicode(emoji: String) -> Emoji {
        Emoji::partial(Nullable::Null, emoji, Nullable::Missing)
    }

    pub fn custom(id: Snowflake, name: String, animated: bool) -> Emoji {
        Emoji::partial(Nullable::Present(id), name, Nullable::Present(animated))
    }

    pub fn is_custom(&self) -> bool {
        self.id.is_present()
    }

    /// Whether only id, name and animated are set, the shape message components accept.
    pub fn is_partial(&self) -> bool {
        self.roles.is_missing()
            && self.user.is_missing()
            && self.require_colons.is_missing()
            && self.managed.is_missing()
            && self.available.is_missing()
    }

    pub fn to_partial(&self) -> Emoji {
        Emoji {
            id: self.id,
            name: self.name.clone(),
            roles: Nullable::Missing,
            user: Nullable::Missing,
            require_colons: Nullable::Missing,
            managed: Nullable::Missing,
            animated: self.animated,
            available: Nullable::Missing,
        }
    }
}
