use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::convert::TryFrom;
use std::fmt;

use super::PremiumType;
use crate::{json, Nullable, Result, Snowflake};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub discriminator: String,
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub global_name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub avatar: Nullable<String>,
    /// Not sent by the api, populated by the framework when the avatar cdn url is resolved.
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub avatar_url: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub banner: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub accent_color: Nullable<u32>,
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub bot: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub system: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub mfa_enabled: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub locale: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub verified: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub email: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub flags: Nullable<u64>,
    /// Raw code, see [`User::premium`].
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub premium_type: Nullable<u64>,
    #[serde(default, skip_serializing_if = "Nullable::is_missing")]
    pub public_flags: Nullable<u64>,
}

impl User {
    pub fn new(id: Snowflake, username: String, discriminator: String) -> User {
        User {
            id,
            username,
            discriminator,
            global_name: Nullable::Missing,
            avatar: Nullable::Missing,
            avatar_url: Nullable::Missing,
            banner: Nullable::Missing,
            accent_color: Nullable::Missing,
            bot: Nullable::Missing,
            system: Nullable::Missing,
            mfa_enabled: Nullable::Missing,
            locale: Nullable::Missing,
            verified: Nullable::Missing,
            email: Nullable::Missing,
            flags: Nullable::Missing,
            premium_type: Nullable::Missing,
            public_flags: Nullable::Missing,
        }
    }

    pub fn from_value(value: Value) -> Result<User> {
        json::from_value(value)
    }

    /// The full tag, `username#discriminator`.
    pub fn tag(&self) -> String {
        format!("{}#{}", self.username, self.discriminator)
    }

    /// Same as [`User::tag`], under the name the bot framework exposes it by.
    pub fn user(&self) -> String {
        self.tag()
    }

    /// Fails if the stored code is not a known premium type. Missing or null
    /// is treated as no premium.
    pub fn premium(&self) -> Result<PremiumType> {
        PremiumType::try_from(self.premium_type())
    }

    pub fn premium_type(&self) -> u64 {
        self.premium_type.unwrap_or(0)
    }

    pub fn is_bot(&self) -> bool {
        self.bot.unwrap_or(false)
    }

    pub fn is_system(&self) -> bool {
        self.system.unwrap_or(false)
    }

    pub fn is_verified(&self) -> bool {
        self.verified.unwrap_or(false)
    }

    pub fn mfa_enabled(&self) -> bool {
        self.mfa_enabled.unwrap_or(false)
    }

    pub fn flags(&self) -> u64 {
        self.flags.unwrap_or(0)
    }

    pub fn public_flags(&self) -> u64 {
        self.public_flags.unwrap_or(0)
    }

    pub fn accent_color(&self) -> u32 {
        self.accent_color.unwrap_or(0)
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.id.timestamp()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.username, self.discriminator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ModelError;
    use serde_json::json;

    fn ann() -> User {
        User::new(Snowflake(80351110224678912), "Ann".to_owned(), "0001".to_owned())
    }

    #[test]
    fn test_tag() {
        let user = ann();
        assert_eq!(user.tag(), "Ann#0001");
        assert_eq!(user.user(), "Ann#0001");
        assert_eq!(user.to_string(), "Ann#0001");
    }

    #[test]
    fn test_premium() {
        let mut user = ann();
        assert_eq!(user.premium().unwrap(), PremiumType::None);

        user.premium_type = Nullable::Present(2);
        assert_eq!(user.premium().unwrap(), PremiumType::Nitro);

        user.premium_type = Nullable::Null;
        assert_eq!(user.premium().unwrap(), PremiumType::None);

        user.premium_type = Nullable::Present(5);
        assert!(matches!(
            user.premium(),
            Err(ModelError::InvalidEnumValue { value: 5, .. })
        ));
    }

    #[test]
    fn test_defaults() {
        let user: User = serde_json::from_value(json!({
            "id": "80351110224678912",
            "username": "Nelly",
            "discriminator": "1337",
        }))
        .unwrap();

        assert!(!user.is_bot());
        assert!(!user.is_system());
        assert!(!user.is_verified());
        assert!(!user.mfa_enabled());
        assert_eq!(user.flags(), 0);
        assert_eq!(user.public_flags(), 0);
        assert_eq!(user.accent_color(), 0);
        assert!(user.email.is_missing());
    }

    #[test]
    fn test_round_trip() {
        let payload = json!({
            "id": "80351110224678912",
            "username": "Nelly",
            "discriminator": "1337",
            "avatar": "8342729096ea3675442027381ff50dfe",
            "banner": null,
            "accent_color": 16711680,
            "bot": false,
            "verified": true,
            "email": null,
            "flags": 64,
            "premium_type": 1,
            "public_flags": 64,
        });

        let user: User = serde_json::from_value(payload.clone()).unwrap();
        assert!(user.banner.is_null());
        assert!(user.locale.is_missing());
        assert_eq!(user.premium().unwrap(), PremiumType::NitroClassic);

        assert_eq!(serde_json::to_value(&user).unwrap(), payload);
    }

    #[test]
    fn test_missing_required_field() {
        let err = serde_json::from_value::<User>(json!({
            "id": "80351110224678912",
            "discriminator": "1337",
        }))
        .unwrap_err();

        assert!(err.to_string().contains("missing field `username`"));

        let err = User::from_value(json!({ "id": "80351110224678912", "username": "Nelly" }))
            .unwrap_err();
        assert!(matches!(err, ModelError::JsonError(_)));
        assert!(err.to_string().contains("missing field `discriminator`"));
    }

    #[test]
    fn test_created_at() {
        let user = ann();
        assert_eq!(
            user.created_at().unwrap().timestamp_millis(),
            (80351110224678912 >> 22) + 1420070400000
        );
    }
}
