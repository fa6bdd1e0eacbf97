pub mod prelude;

pub mod equipment;
pub mod laboratory;
pub mod reservation;
pub mod student;
pub mod teacher;
pub mod time_window;
