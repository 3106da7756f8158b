//! HTTP API handlers for studyhall

pub mod health;
pub mod study_aids;
pub mod syllabus;
pub mod ui;
pub mod video;

pub use health::health_routes;
pub use study_aids::study_aid_routes;
pub use syllabus::syllabus_routes;
pub use ui::ui_routes;
pub use video::video_routes;
