pub mod home;
pub mod mobile_suits;
pub mod not_found;
pub mod team_editor;
pub mod team_parts;

pub use home::Home;
pub use mobile_suits::MobileSuits;
pub use not_found::NotFound;
pub use team_editor::TeamEditor;
pub use team_parts::TeamParts;
