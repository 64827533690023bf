pub mod blog;
pub mod config;
pub mod error;
pub mod particles;
pub mod seasonal;
pub mod seo;
pub mod theme;
pub mod toggle;

// Re-exports for convenience
pub use blog::{BlogCatalog, BlogFilter, BlogPost};
pub use config::{CONFIG_PATH, parse_portfolio};
pub use error::{ConfigError, FrontMatterError};
pub use particles::{EffectRun, Simulator, Surface, Viewport};
pub use seasonal::select_active;
pub use theme::Theme;
pub use toggle::ToggleButton;
