//! Testing utilities and harness for swipecard

pub mod fake_host;
pub mod robot;
pub mod robot_assertions;

pub use fake_host::{CardId, FakeCard, FakeHost};
pub use robot::SwipeRobot;

pub mod prelude {
    pub use crate::fake_host::{CardId, FakeCard, FakeHost};
    pub use crate::robot::SwipeRobot;
    pub use crate::robot_assertions;
}
