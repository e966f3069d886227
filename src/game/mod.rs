//! Game core: word bank, per-session state, session store and the round
//! controller that ties them together.

pub mod round;
pub mod session;
pub mod state;
pub mod types;
pub mod word_bank;

pub use round::{DEFAULT_SESSION_ID, RoundController, RoundResult};
pub use session::SessionStore;
pub use state::{GameState, PrerevealPolicy};
pub use types::*;
pub use word_bank::WordBank;
