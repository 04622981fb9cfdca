pub mod dispatch;
pub mod lesson;
pub mod schema;
pub mod shared;
pub mod student;
pub mod tutor;
