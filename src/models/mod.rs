pub mod incident;
pub mod notification;
pub mod report;

pub use incident::Incident;
pub use notification::Notification;
pub use report::Report;
