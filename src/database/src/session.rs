use football_core::{SeasonData, SeasonSnapshot};
use log::warn;

/// Save and load of a running game as JSON.
pub struct SessionCodec;

impl SessionCodec {
    pub fn encode(data: &SeasonData) -> Result<String, serde_json::Error> {
        serde_json::to_string(&data.snapshot())
    }

    /// A session that cannot be read is reported as no session at all.
    pub fn decode(json: &str) -> Option<SeasonData> {
        match serde_json::from_str::<SeasonSnapshot>(json) {
            Ok(snapshot) => Some(SeasonData::restore(snapshot)),
            Err(error) => {
                warn!("session ignored: {}", error);
                None
            }
        }
    }
}
