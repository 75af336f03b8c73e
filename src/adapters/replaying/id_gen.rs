//! Replaying adapter for the `IdGenerator` port.

use std::sync::Mutex;

use super::next_output;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::id_gen::IdGenerator;

/// Replays recorded IDs from a cassette.
pub struct ReplayingIdGenerator {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingIdGenerator {
    /// Creates a new replaying ID generator from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl IdGenerator for ReplayingIdGenerator {
    fn generate_id(&self) -> String {
        let output = next_output(&self.replayer, "id_gen", "generate_id");
        output.as_str().expect("id_gen::generate_id: expected string output").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::replaying::test_support::{interaction, make_replayer};
    use serde_json::json;

    #[test]
    fn replays_ids() {
        let replayer = make_replayer(vec![
            interaction(0, "id_gen", "generate_id", json!("lq0a1")),
            interaction(1, "id_gen", "generate_id", json!("lq0a2")),
        ]);
        let gen = ReplayingIdGenerator::new(replayer);
        assert_eq!(gen.generate_id(), "lq0a1");
        assert_eq!(gen.generate_id(), "lq0a2");
    }
}
