pub mod not_found;
pub mod tutorial;
pub mod tutorials_list;

pub use not_found::NotFoundPage;
pub use tutorial::TutorialPage;
pub use tutorials_list::TutorialsListPage;
