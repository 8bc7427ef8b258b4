mod error;
pub use error::{BoxError, ModelError, Result};

mod nullable;
pub use nullable::Nullable;

mod snowflake;
pub use snowflake::{Snowflake, DISCORD_EPOCH};

pub mod guild;
pub mod json;
pub mod interaction;
pub mod user;

mod util;
