// Word validation and round scoring

pub mod scorer;
pub mod session;
pub mod validator;

pub use scorer::Scorer;
pub use session::GameSession;
pub use validator::{WordValidator, DEFAULT_LANGUAGE};
