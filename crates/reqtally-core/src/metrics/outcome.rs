use std::ops::Range;

use crate::error::{Result, ReqTallyError};

/// Classified result of one handled request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Success,
    Error,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Label value used in text exposition.
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Error => "error",
        }
    }
}

impl From<bool> for Outcome {
    fn from(succeeded: bool) -> Self {
        if succeeded {
            Outcome::Success
        } else {
            Outcome::Error
        }
    }
}

/// Maps an HTTP status code to an [`Outcome`].
///
/// Statuses inside the half-open range `[min, max)` count as success,
/// everything else as error. The default range is `[200, 400)`, so redirects
/// are successes and client/server errors are not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusClassifier {
    success: Range<u16>,
}

impl Default for StatusClassifier {
    fn default() -> Self {
        Self { success: 200..400 }
    }
}

impl StatusClassifier {
    /// Build a classifier for `[min, max)`. Requires `100 <= min < max <= 600`.
    pub fn new(min: u16, max: u16) -> Result<Self> {
        if min < 100 || max > 600 || min >= max {
            return Err(ReqTallyError::BadRequest(format!(
                "success status range must satisfy 100 <= min < max <= 600 (got {min}..{max})"
            )));
        }
        Ok(Self { success: min..max })
    }

    pub fn range(&self) -> Range<u16> {
        self.success.clone()
    }

    pub fn classify(&self, status: u16) -> Outcome {
        self.success.contains(&status).into()
    }
}
