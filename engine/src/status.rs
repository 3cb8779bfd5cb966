//! The three fixed status lanes of a board.

use crate::{error::Result, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status lane a client belongs to.
///
/// The set of lanes is fixed; anything else arriving from the outside world
/// is rejected at parse time with [`Error::InvalidStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Backlog,
    InProgress,
    Complete,
}

impl Status {
    /// All lanes, in board order.
    pub const ALL: [Status; 3] = [Status::Backlog, Status::InProgress, Status::Complete];

    /// The wire name of this lane.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Backlog => "backlog",
            Status::InProgress => "in-progress",
            Status::Complete => "complete",
        }
    }

    /// Parse a wire name, rejecting anything outside the fixed lane set.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "backlog" => Ok(Status::Backlog),
            "in-progress" => Ok(Status::InProgress),
            "complete" => Ok(Status::Complete),
            other => Err(Error::InvalidStatus(other.to_string())),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Status::parse(s)
    }
}
