//! Model-View-Intent (MVI) primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──── fetch result ────────────┘
//! ```
//!
//! - **State**: immutable snapshot of what the view renders
//! - **Intent**: an event that may change the state (a fetch outcome)
//! - **Reducer**: pure function that produces the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
