use crate::model::{Genre, Instance};
use anyhow::{anyhow, Result};

impl Instance {
    /// Structurally verifies the instance: per-channel tiling, duration and
    /// score bounds, the consecutive-genre cap, and auxiliary list windows.
    /// Returns an error describing the first violation found.
    pub fn verify(&self) -> Result<()> {
        if self.channels.len() != self.channels_count {
            return Err(anyhow!(
                "Expected {} channels. Got {}",
                self.channels_count,
                self.channels.len()
            ));
        }

        for (i, channel) in self.channels.iter().enumerate() {
            if channel.channel_id != i {
                return Err(anyhow!(
                    "Channel at position {} has id {}",
                    i,
                    channel.channel_id
                ));
            }

            let mut prev_end = self.opening_time;
            for (j, program) in channel.programs.iter().enumerate() {
                if program.start != prev_end {
                    return Err(anyhow!(
                        "Channel {}: program {} starts at {} but previous program ends at {}",
                        i,
                        j,
                        program.start,
                        prev_end
                    ));
                }
                if program.end <= program.start {
                    return Err(anyhow!(
                        "Channel {}: program {} has empty window [{}, {})",
                        i,
                        j,
                        program.start,
                        program.end
                    ));
                }
                let duration = program.end - program.start;
                if duration < self.min_duration || duration > self.max_duration {
                    return Err(anyhow!(
                        "Channel {}: program {} duration ({}) is outside [{}, {}]",
                        i,
                        j,
                        duration,
                        self.min_duration,
                        self.max_duration
                    ));
                }
                if program.score < self.min_score || program.score > self.max_score {
                    return Err(anyhow!(
                        "Channel {}: program {} score ({}) is outside [{}, {}]",
                        i,
                        j,
                        program.score,
                        self.min_score,
                        self.max_score
                    ));
                }
                let expected_id = format!("channel_{}_program_{}", i, j + 1);
                if program.program_id != expected_id {
                    return Err(anyhow!(
                        "Channel {}: program {} has id '{}'. Expected '{}'",
                        i,
                        j,
                        program.program_id,
                        expected_id
                    ));
                }
                prev_end = program.end;
            }

            if prev_end > self.closing_time {
                return Err(anyhow!(
                    "Channel {}: programs end at {} after closing_time ({})",
                    i,
                    prev_end,
                    self.closing_time
                ));
            }
            if self.closing_time - prev_end >= self.min_duration {
                return Err(anyhow!(
                    "Channel {}: untiled tail [{}, {}) is long enough for another program",
                    i,
                    prev_end,
                    self.closing_time
                ));
            }

            let mut run_length = 0u32;
            let mut last_genre: Option<Genre> = None;
            for program in &channel.programs {
                if Some(program.genre) == last_genre {
                    run_length += 1;
                } else {
                    run_length = 1;
                    last_genre = Some(program.genre);
                }
                if run_length > self.max_consecutive_genre {
                    return Err(anyhow!(
                        "Channel {}: genre '{}' repeats more than {} times consecutively",
                        i,
                        program.genre,
                        self.max_consecutive_genre
                    ));
                }
            }
        }

        for (i, block) in self.priority_blocks.iter().enumerate() {
            self.verify_window("Priority block", i, block.start, block.end)?;
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
        for (i, preference) in self.time_preferences.iter().enumerate() {
            self.verify_window("Time preference", i, preference.start, preference.end)?;
        }

        Ok(())
    }

    fn verify_window(&self, what: &str, idx: usize, start: u32, end: u32) -> Result<()> {
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
