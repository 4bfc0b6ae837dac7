use serde::{Deserialize, Serialize};

/// The closed genre vocabulary. Genre choice during generation is uniform
/// over this set unless overridden by the consecutive-genre rule.
pub const GENRES: [Genre; 6] = [
    Genre::News,
    Genre::Sports,
    Genre::Music,
    Genre::Movies,
    Genre::Kids,
    Genre::Documentary,
];

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    News,
    Sports,
    Music,
    Movies,
    Kids,
    Documentary,
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Genre::News => write!(f, "news"),
            Genre::Sports => write!(f, "sports"),
            Genre::Music => write!(f, "music"),
            Genre::Movies => write!(f, "movies"),
            Genre::Kids => write!(f, "kids"),
            Genre::Documentary => write!(f, "documentary"),
        }
    }
}

impl std::str::FromStr for Genre {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "news" => Ok(Genre::News),
            "sports" => Ok(Genre::Sports),
            "music" => Ok(Genre::Music),
            "movies" => Ok(Genre::Movies),
            "kids" => Ok(Genre::Kids),
            "documentary" => Ok(Genre::Documentary),
            _ => Err(anyhow::anyhow!("Invalid genre: {}", s)),
        }
    }
}

/// A time window in which a subset of channels is prioritized.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PriorityBlock {
    pub start: u32,
    pub end: u32,
    // 0-based channel indices; duplicates are permitted
    pub allowed_channels: Vec<usize>,
}

/// A time window awarding a bonus to programs of the preferred genre.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimePreference {
    pub start: u32,
    pub end: u32,
    pub preferred_genre: Genre,
    pub bonus: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Program {
    pub program_id: String,
    pub start: u32,
    pub end: u32,
    pub genre: Genre,
    pub score: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Channel {
    pub channel_id: usize,
    pub channel_name: String,
    pub programs: Vec<Program>,
}

/// A fully populated scheduling problem instance. Program windows per channel
/// tile `[opening_time, closing_time)` contiguously, except that a tail gap
/// shorter than `min_duration` is left untiled.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Instance {
    pub seed: [u8; 32],
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
    pub priority_blocks: Vec<PriorityBlock>,
    pub time_preferences: Vec<TimePreference>,
    pub channels: Vec<Channel>,
}

/// Data-sourcing policy for the auxiliary lists: a caller-supplied non-empty
/// list is passed through unchanged, anything else is synthesized.
#[derive(Debug, Clone)]
pub enum ListSource<T> {
    UserSupplied(Vec<T>),
    ToGenerate,
}

impl<T: Clone> ListSource<T> {
    pub fn from_supplied(supplied: Option<&Vec<T>>) -> Self {
        match supplied {
            Some(list) if !list.is_empty() => ListSource::UserSupplied(list.clone()),
            _ => ListSource::ToGenerate,
        }
    }

    pub fn resolve(self, synthesize: impl FnOnce() -> Vec<T>) -> Vec<T> {
        match self {
            ListSource::UserSupplied(list) => list,
            ListSource::ToGenerate => synthesize(),
        }
    }
}
