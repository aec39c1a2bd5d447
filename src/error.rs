//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Width / height should be positive.
    NonPositiveError,
    /// Cannot edit the board while the game is running.
    EditWhileRunning,
    /// The game is not running.
    NotRunningError,
}
