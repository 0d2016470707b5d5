use serde::Deserialize;

/// Input to one record assembly
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExtractionRequest {
    pub player_name: String,
    pub league: String,
    pub season: String,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub include_keeper_stats: bool,
}

impl ExtractionRequest {
    pub fn new(player_name: &str, league: &str, season: &str) -> Self {
        Self {
            player_name: player_name.to_string(),
            league: league.to_string(),
            season: season.to_string(),
            include_keeper_stats: false,
        }
    }

    pub fn with_keeper_stats(mut self) -> Self {
        self.include_keeper_stats = true;
        self
    }
}

/// Accept true/false, yes/no, 1/0 and blank cells from request files
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    match raw.trim().to_lowercase().as_str() {
        "" | "false" | "no" | "n" | "0" => Ok(false),
        "true" | "yes" | "y" | "1" => Ok(true),
        other => Err(serde::de::Error::custom(format!("invalid keeper flag: {}", other))),
    }
}
