//! Alarm episode history.
//!
//! One [`AlarmEpisode`] per Normal→Alarmed transition, in trigger order.
//! The log lives in RAM only and is lost on reset.  It grows without bound
//! unless a maximum is configured; allocation failures are reported rather
//! than aborting so the caller can clear and retry.

use serde::{Deserialize, Serialize};

use crate::calendar::DateTime;
use crate::error::HistoryError;
use crate::sensors::temperature::Temperature;

/// A single continuous alarm interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmEpisode {
    /// Alarm threshold in force when the episode opened.
    pub alarm_temperature: Temperature,
    /// Wall-clock time the alarm tripped.
    pub triggered_at: DateTime,
    /// Whole seconds the alarm lasted; 0 while the episode is still open.
    pub duration_secs: u32,
}

impl AlarmEpisode {
    /// A freshly opened episode.
    pub fn open(alarm_temperature: Temperature, triggered_at: DateTime) -> Self {
        Self {
            alarm_temperature,
            triggered_at,
            duration_secs: 0,
        }
    }
}

/// Append-only, truncatable episode log.
#[derive(Debug, Clone, Default)]
pub struct AlarmHistoryLog {
    episodes: Vec<AlarmEpisode>,
    max_episodes: Option<usize>,
}

impl AlarmHistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate room for `capacity` episodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            episodes: Vec::with_capacity(capacity),
            max_episodes: None,
        }
    }

    /// Refuse appends once `max` episodes are stored.
    #[must_use]
    pub fn bounded(mut self, max: usize) -> Self {
        self.max_episodes = Some(max);
        self
    }

    pub fn set_max_episodes(&mut self, max: Option<usize>) {
        self.max_episodes = max;
    }

    pub fn max_episodes(&self) -> Option<usize> {
        self.max_episodes
    }

    /// Add an episode at the end.
    pub fn append(&mut self, episode: AlarmEpisode) -> Result<(), HistoryError> {
        if let Some(capacity) = self.max_episodes {
            if self.episodes.len() >= capacity {
                return Err(HistoryError::Full { capacity });
            }
        }
        self.episodes
            .try_reserve(1)
            .map_err(|_| HistoryError::AllocationFailed)?;
        self.episodes.push(episode);
        Ok(())
    }

    /// Record the duration of the most recent episode.
    ///
    /// Fails without touching anything when the log is empty.
    pub fn close_last(&mut self, duration_secs: u32) -> Result<(), HistoryError> {
        let last = self
            .episodes
            .last_mut()
            .ok_or(HistoryError::CloseOnEmptyLog)?;
        last.duration_secs = duration_secs;
        Ok(())
    }

    /// Discard every episode.  Returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let discarded = self.episodes.len();
        self.episodes.clear();
        self.episodes.shrink_to_fit();
        discarded
    }

    pub fn count(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// Episodes in trigger order.
    pub fn all(&self) -> &[AlarmEpisode] {
        &self.episodes
    }

    pub fn last(&self) -> Option<&AlarmEpisode> {
        self.episodes.last()
    }

    /// Allocated slots, for memory budgeting.
    pub fn capacity(&self) -> usize {
        self.episodes.capacity()
    }
}
