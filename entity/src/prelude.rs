pub use super::equipment::Entity as Equipment;
pub use super::laboratory::Entity as Laboratory;
pub use super::reservation::Entity as Reservation;
pub use super::student::Entity as Student;
pub use super::teacher::Entity as Teacher;
pub use super::time_window::Entity as TimeWindow;
