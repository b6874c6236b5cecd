//! Testing utilities and harness for Sliprow

pub mod recording;
pub mod robot;

pub use recording::{EventLog, RecordedEvent, RecordingPresenter};
pub use robot::{RobotRow, SwipeRobot};

pub mod prelude {
    pub use crate::recording::{EventLog, RecordedEvent, RecordingPresenter};
    pub use crate::robot::{RobotRow, SwipeRobot};
}
