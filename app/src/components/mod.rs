//! UI Components
//!
//! Home page sections, the site chrome (navigation, footer, toasts) and the
//! seasonal effect host.

pub mod contact;
pub mod education;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod navigation;
pub mod projects;
pub mod seasonal_effects;
pub mod skills;
pub mod theme_switch;
pub mod toast;

pub use contact::ContactSectionView;
pub use education::EducationSection;
pub use experience::ExperienceSection;
pub use footer::SiteFooter;
pub use hero::HeroSection;
pub use navigation::Navigation;
pub use projects::ProjectsSection;
pub use seasonal_effects::SeasonalEffects;
pub use skills::SkillsSection;
pub use theme_switch::ThemeSwitch;
pub use toast::{ToastFrame, ToastSeverity, use_toast_provider};
