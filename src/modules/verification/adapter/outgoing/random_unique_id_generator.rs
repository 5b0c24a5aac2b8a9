use rand::Rng;

use crate::verification::application::domain::unique_id::{
    UNIQUE_ID_ALPHABET, UNIQUE_ID_PREFIX, UNIQUE_ID_SUFFIX_LEN,
};
use crate::verification::application::ports::outgoing::UniqueIdGenerator;

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomUniqueIdGenerator;

impl UniqueIdGenerator for RandomUniqueIdGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..UNIQUE_ID_SUFFIX_LEN)
            .map(|_| {
                let idx = rng.gen_range(0..UNIQUE_ID_ALPHABET.len());
                UNIQUE_ID_ALPHABET[idx] as char
            })
            .collect();

        format!("{UNIQUE_ID_PREFIX}{suffix}")
    }
}
