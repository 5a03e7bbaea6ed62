//! Pipeline composer applying the rewrite passes in their fixed order

use crate::config::NormalizerConfig;
use crate::error::Result;
use crate::rewrite::{
    IncompleteWordRewriter, OmittedTokenRewriter, ParalinguisticRewriter, Rewriter, Stage,
    UnidentifiableRewriter,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Upper bound on full passes over one utterance. Every pass that changes
/// the text consumes markup, so real input settles in two or three.
const MAX_PASSES: usize = 16;

/// Text produced by one stage of the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutput {
    /// Stage that produced the text
    pub stage: Stage,
    /// Utterance after the stage ran
    pub text: String,
    /// Whether the stage changed its input
    pub changed: bool,
}

/// Normalizes CHAT utterances
///
/// Runs unidentifiable → incomplete → omitted → paralinguistic, always in
/// that order. The paralinguistic pass is last because it also collapses the
/// whitespace left behind by earlier deletions.
///
/// A later stage can assemble markup that an earlier stage handles, as in
/// `x(xx)` → `xxx` or `xx[=! a]x` → `xxx`. The four stages are therefore
/// repeated until a pass leaves the text unchanged, which makes
/// [`Normalizer::normalize`] idempotent.
///
/// A `Normalizer` holds no mutable state and can be shared across threads.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: NormalizerConfig,
    unidentifiable: UnidentifiableRewriter,
    incomplete: IncompleteWordRewriter,
    omitted: OmittedTokenRewriter,
    paralinguistic: ParalinguisticRewriter,
}

impl Normalizer {
    /// Create a normalizer from a validated configuration
    pub fn new(config: NormalizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::unchecked(config))
    }

    /// Create a normalizer with a custom unknown token
    pub fn with_unknown_token(token: impl Into<String>) -> Result<Self> {
        let config = NormalizerConfig::builder().unknown_token(token).build()?;
        Ok(Self::unchecked(config))
    }

    pub(crate) fn unchecked(config: NormalizerConfig) -> Self {
        Self {
            unidentifiable: UnidentifiableRewriter::new(config.unknown_token.clone()),
            incomplete: IncompleteWordRewriter,
            omitted: OmittedTokenRewriter,
            paralinguistic: ParalinguisticRewriter,
            config,
        }
    }

    /// The configuration this normalizer was built from
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// The configured unknown token
    pub fn unknown_token(&self) -> &str {
        &self.config.unknown_token
    }

    /// The rewriters in pipeline order
    pub fn stages(&self) -> [&dyn Rewriter; 4] {
        [
            &self.unidentifiable,
            &self.incomplete,
            &self.omitted,
            &self.paralinguistic,
        ]
    }

    /// Normalize a single utterance
    pub fn normalize(&self, utterance: &str) -> String {
        let mut text = self.run_pass(utterance);

        for _ in 1..MAX_PASSES {
            let next = self.run_pass(&text);
            if next == text {
                return text;
            }
            text = next;
        }

        log::warn!("normalization did not settle after {MAX_PASSES} passes: {text:?}");
        text
    }

    /// Normalize a single utterance, keeping the output of every stage
    ///
    /// The first pass always contributes all four stages. Further passes are
    /// appended only while they still change the text, so the last entry is
    /// the result of [`Normalizer::normalize`].
    pub fn trace(&self, utterance: &str) -> Vec<StageOutput> {
        let mut outputs = self.trace_pass(utterance);

        for _ in 1..MAX_PASSES {
            let Some(last) = outputs.last() else {
                break;
            };
            let pass = self.trace_pass(&last.text);
            if pass.iter().all(|output| !output.changed) {
                break;
            }
            outputs.extend(pass);
        }

        outputs
    }

    /// One run of the four stages
    fn run_pass(&self, utterance: &str) -> String {
        let mut text = utterance.to_string();
        for rewriter in self.stages() {
            let next = rewriter.rewrite(&text);
            if next != text {
                log::trace!("{}: {:?} -> {:?}", rewriter.stage(), text, next);
            }
            text = next;
        }
        text
    }

    fn trace_pass(&self, utterance: &str) -> Vec<StageOutput> {
        let mut outputs = Vec::with_capacity(Stage::ALL.len());
        let mut text = utterance.to_string();

        for rewriter in self.stages() {
            let next = rewriter.rewrite(&text);
            outputs.push(StageOutput {
                stage: rewriter.stage(),
                changed: next != text,
                text: next.clone(),
            });
            text = next;
        }

        outputs
    }

    /// Normalize a batch of utterances, preserving order
    #[cfg(feature = "parallel")]
    pub fn normalize_all<S: AsRef<str> + Sync>(&self, utterances: &[S]) -> Vec<String> {
        utterances
            .par_iter()
            .map(|utterance| self.normalize(utterance.as_ref()))
            .collect()
    }

    /// Normalize a batch of utterances, preserving order
    #[cfg(not(feature = "parallel"))]
    pub fn normalize_all<S: AsRef<str> + Sync>(&self, utterances: &[S]) -> Vec<String> {
        utterances
            .iter()
            .map(|utterance| self.normalize(utterance.as_ref()))
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::unchecked(NormalizerConfig::default())
    }
}
