mod user;
pub use user::User;

mod premium_type;
pub use premium_type::PremiumType;
