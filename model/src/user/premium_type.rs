use crate::ModelError;
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum PremiumType {
    None = 0,
    NitroClassic = 1,
    Nitro = 2,
}

impl TryFrom<u64> for PremiumType {
    type Error = ModelError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::None,
            1 => Self::NitroClassic,
            2 => Self::Nitro,
            _ => Err(ModelError::InvalidEnumValue {
                name: "premium type",
                value,
            })?,
        })
    }
}
