use std::any::Any;

use chrono::{DateTime, Utc};

use crate::State;

/// Wall-clock state.
///
/// Rendering code reads "now" from here instead of calling `Utc::now()`
/// directly, so tests can pin time (relative timestamps, staleness checks).
/// The app refreshes it once per frame.
#[derive(Debug, Clone)]
pub struct Time {
    virt: DateTime<Utc>,
}

impl Default for Time {
    fn default() -> Self {
        Self { virt: Utc::now() }
    }
}

impl Time {
    pub fn now(&self) -> DateTime<Utc> {
        self.virt
    }

    pub fn set(&mut self, now: DateTime<Utc>) {
        self.virt = now;
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.virt
    }
}

impl State for Time {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}
