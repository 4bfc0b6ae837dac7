use crate::model::{
    Channel, Genre, Instance, ListSource, PriorityBlock, Program, TimePreference, GENRES,
};
use crate::params::ScheduleParams;
use anyhow::Result;
use rand::{
    rngs::{SmallRng, StdRng},
    Rng, SeedableRng,
};

impl Instance {
    /// Generates a full instance from explicit seed bytes. The scalar params
    /// are passed through untouched; the three collections are populated.
    /// Bounds are not validated here (see `ScheduleParams::validate`).
    pub fn generate(seed: &[u8; 32], params: &ScheduleParams) -> Result<Self> {
        let mut rng = SmallRng::from_seed(StdRng::from_seed(seed.clone()).gen());

        let priority_blocks = ListSource::from_supplied(params.priority_blocks.as_ref())
            .resolve(|| synthesize_priority_blocks(&mut rng, params));
        let time_preferences = ListSource::from_supplied(params.time_preferences.as_ref())
            .resolve(|| synthesize_time_preferences(&mut rng, params));
        let channels = (0..params.channels_count)
            .map(|channel_id| synthesize_channel(&mut rng, params, channel_id))
            .collect();

        Ok(Self {
            seed: seed.clone(),
            opening_time: params.opening_time,
            closing_time: params.closing_time,
            min_duration: params.min_duration,
            max_duration: params.max_duration,
            min_score: params.min_score,
            max_score: params.max_score,
            max_consecutive_genre: params.max_consecutive_genre,
            channels_count: params.channels_count,
            switch_penalty: params.switch_penalty,
            termination_penalty: params.termination_penalty,
            priority_blocks,
            time_preferences,
            channels,
        })
    }
}

fn pick_genre(rng: &mut SmallRng) -> Genre {
    GENRES[rng.gen_range(0..GENRES.len())]
}

fn pick_genre_excluding(rng: &mut SmallRng, excluded: Genre) -> Genre {
    let remaining: Vec<Genre> = GENRES
        .iter()
        .copied()
        .filter(|&genre| genre != excluded)
        .collect();
    remaining[rng.gen_range(0..remaining.len())]
}

// start leaves room for at least min_duration before closing_time
fn synthesize_window(rng: &mut SmallRng, params: &ScheduleParams) -> (u32, u32) {
    let start = rng.gen_range(params.opening_time..=params.closing_time - params.min_duration);
    let end = rng.gen_range(start + params.min_duration..=params.closing_time);
    (start, end)
}

fn synthesize_priority_blocks(rng: &mut SmallRng, params: &ScheduleParams) -> Vec<PriorityBlock> {
    (0..rng.gen_range(1..=3))
        .map(|_| {
            let (start, end) = synthesize_window(rng, params);
            let allowed_channels = (0..rng.gen_range(1..=4))
                .map(|_| rng.gen_range(0..params.channels_count))
                .collect();
            PriorityBlock {
                start,
                end,
                allowed_channels,
            }
        })
        .collect()
}

fn synthesize_time_preferences(
    rng: &mut SmallRng,
    params: &ScheduleParams,
) -> Vec<TimePreference> {
    (0..rng.gen_range(1..=3))
        .map(|_| {
            let (start, end) = synthesize_window(rng, params);
            TimePreference {
                start,
                end,
                preferred_genre: pick_genre(rng),
                bonus: rng.gen_range(10..=50),
            }
        })
        .collect()
}

fn synthesize_channel(rng: &mut SmallRng, params: &ScheduleParams, channel_id: usize) -> Channel {
    let mut programs = Vec::new();
    let mut current_start = params.opening_time;
    let mut last_genre: Option<Genre> = None;
    let mut run_length = 0u32;

    // stop once the remaining gap is too small for a program; it stays untiled
    while params.closing_time - current_start >= params.min_duration {
        let remaining = params.closing_time - current_start;
        let duration = rng.gen_range(params.min_duration..=params.max_duration.min(remaining));
        let end = current_start + duration;

        let mut genre = pick_genre(rng);
        if Some(genre) == last_genre && run_length >= params.max_consecutive_genre {
            // cap reached: re-draw from the rest of the vocabulary
            genre = pick_genre_excluding(rng, genre);
            run_length = 1;
        } else if Some(genre) == last_genre {
            run_length += 1;
        } else {
            run_length = 1;
        }
        last_genre = Some(genre);

        programs.push(Program {
            program_id: format!("channel_{}_program_{}", channel_id, programs.len() + 1),
            start: current_start,
            end,
            genre,
            score: rng.gen_range(params.min_score..=params.max_score),
        });

        current_start = end;
    }

    Channel {
        channel_id,
        channel_name: format!("Channel_{}", channel_id),
        programs,
    }
}
