pub mod assembler;
pub mod classifier;
pub mod clamper;
pub mod lexicon;
pub mod negative;
pub mod safety;
pub mod selector;
pub mod types;

use tracing::debug;

use crate::engine::assembler::assemble;
use crate::engine::clamper::{clamp_segments, POSITIVE_DROP_ORDER, PROMPT_CHAR_BUDGET};
use crate::engine::classifier::classify;
use crate::engine::lexicon::LexiconSet;
use crate::engine::negative::build_negative;
use crate::engine::selector::select_segments;
use crate::engine::types::{
    EnhancementRequest, EnhancementResponse, Hints, Knobs, ResponseMeta,
};
use crate::platforms::Platforms;
use crate::utils::text::{clamp_words, clean_space};

pub const MAX_SUBJECT_WORDS: usize = 160;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("idea must not be empty")]
    EmptyIdea,
    #[error("idea rejected by content screen: {0}")]
    BlockedContent(String),
}

pub struct PromptEngine {
    lexicons: LexiconSet,
}

impl PromptEngine {
    pub fn new(lexicons: LexiconSet) -> Self {
        PromptEngine { lexicons }
    }

    pub fn with_defaults() -> Self {
        PromptEngine::new(LexiconSet::builtin())
    }

    pub fn enhance(
        &self,
        request: &EnhancementRequest,
    ) -> Result<EnhancementResponse, EngineError> {
        let cleaned = clean_space(&request.idea);
        if cleaned.is_empty() {
            return Err(EngineError::EmptyIdea);
        }

        let screened = safety::screen(&cleaned)?;
        let subject = clean_space(&clamp_words(&screened.text, MAX_SUBJECT_WORDS));

        let classification = classify(&subject, &self.lexicons);
        let resolved = select_segments(request, &subject, &classification, &self.lexicons);
        let segments = assemble(resolved, &classification, &subject);
        let prompt = clamp_segments(segments, POSITIVE_DROP_ORDER, PROMPT_CHAR_BUDGET);
        let negative = build_negative(request.negative.as_deref(), &self.lexicons);

        let knobs = Knobs::from_request(request);
        let platforms = Platforms::build(&prompt, &negative, knobs);
        debug!(
            "Enhanced idea into {} prompt chars and {} negative chars",
            prompt.chars().count(),
            negative.chars().count()
        );

        Ok(EnhancementResponse {
            prompt,
            negative,
            platforms,
            meta: ResponseMeta {
                aspect_ratio: knobs.aspect.ratio(),
                sampler: knobs.sampler.as_str(),
                softened: screened.softened,
            },
            hints: Hints::default(),
        })
    }
}
