//! Seasonal effect activation
//!
//! - **Window**: inclusive month/day range test, including spans that wrap
//!   past December
//! - **Selector**: picks at most one effect from the ordered catalog
//! - **Settings**: turns the loosely typed document values into concrete
//!   simulator parameters with defaults
//!
//! ```text
//!   catalog (config order)          today
//!            │                        │
//!            └──────► select_active ◄─┘
//!                          │
//!                 first enabled match
//!                          │
//!                          ▼
//!             Simulator::new(kind, settings)
//! ```

mod selector;
pub mod settings;
mod window;

pub use selector::select_active;
pub use settings::{ConfettiSettings, CrackerSettings, SnowSettings};
pub use window::{contains_month_day, window_contains};
