use crate::model::{PriorityBlock, TimePreference};
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tvs_utils::{jsonify, u8s_from_str};

/// Input bounds for instance generation. `priority_blocks` and
/// `time_preferences` may be pre-populated by the caller; when absent or
/// empty they are synthesized during generation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScheduleParams {
    pub opening_time: u32,
    pub closing_time: u32,
    pub min_duration: u32,
    pub max_duration: u32,
    pub min_score: u32,
    pub max_score: u32,
    pub max_consecutive_genre: u32,
    pub channels_count: usize,
    pub switch_penalty: u32,
    pub termination_penalty: u32,
    #[serde(default)]
    pub priority_blocks: Option<Vec<PriorityBlock>>,
    #[serde(default)]
    pub time_preferences: Option<Vec<TimePreference>>,
}

impl ScheduleParams {
    pub fn calc_seed(&self, rand_hash: &str, nonce: u64) -> [u8; 32] {
        u8s_from_str(format!("{:?}", (jsonify(&self), rand_hash, nonce)).as_str())
    }

    /// Bound checks the generator itself does not perform. Callers must
    /// validate before generating; `Instance::generate` does not reject
    /// malformed bounds and its output for them is degenerate.
    pub fn validate(&self) -> Result<()> {
        if self.closing_time <= self.opening_time {
            return Err(anyhow!(
                "closing_time ({}) must be greater than opening_time ({})",
                self.closing_time,
                self.opening_time
            ));
        }
        if self.min_duration < 1 {
            return Err(anyhow!("min_duration must be at least 1"));
        }
        if self.max_duration < self.min_duration {
            return Err(anyhow!(
                "max_duration ({}) must be at least min_duration ({})",
                self.max_duration,
                self.min_duration
            ));
        }
        if self.min_duration > self.closing_time - self.opening_time {
            return Err(anyhow!(
                "min_duration ({}) does not fit within the schedule window ({})",
                self.min_duration,
                self.closing_time - self.opening_time
            ));
        }
        if self.max_score < self.min_score {
            return Err(anyhow!(
                "max_score ({}) must be at least min_score ({})",
                self.max_score,
                self.min_score
            ));
        }
        if self.max_consecutive_genre < 1 {
            return Err(anyhow!("max_consecutive_genre must be at least 1"));
        }
        if self.channels_count < 1 {
            return Err(anyhow!("channels_count must be at least 1"));
        }
        for (i, block) in self.priority_blocks.iter().flatten().enumerate() {
            self.validate_window("Priority block", i, block.start, block.end)?;
            if block.allowed_channels.is_empty() {
                return Err(anyhow!("Priority block {} has no allowed channels", i));
            }
            if let Some(&channel) = block
                .allowed_channels
                .iter()
                .find(|&&channel| channel >= self.channels_count)
            {
                return Err(anyhow!(
                    "Priority block {} references channel ({}) out of bounds",
                    i,
                    channel
                ));
            }
        }
        for (i, preference) in self.time_preferences.iter().flatten().enumerate() {
            self.validate_window("Time preference", i, preference.start, preference.end)?;
        }
        Ok(())
    }

    fn validate_window(&self, what: &str, idx: usize, start: u32, end: u32) -> Result<()> {
        if start >= end || start < self.opening_time || end > self.closing_time {
            return Err(anyhow!(
                "{} {} window [{}, {}) must lie within [{}, {}]",
                what,
                idx,
                start,
                end,
                self.opening_time,
                self.closing_time
            ));
        }
        Ok(())
    }
}
