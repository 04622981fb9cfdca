mod lesson;
mod student;
mod tutor;

pub use lesson::LessonCommands;
pub use student::StudentCommands;
pub use tutor::TutorCommands;
