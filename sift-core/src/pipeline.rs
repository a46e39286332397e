//! Pipeline driver.
//!
//! A [`Pipeline`] is an ordered, immutable list of [`Step`]s. Each record runs
//! through every step in order; records never see each other, so a batch may
//! be processed in any record order with identical per-record results.
//!
//! Threading:
//! - [`Pipeline`] is `Send + Sync`. Steps carry only read-only configuration
//!   (the shared stopword set), so one pipeline can serve many batches and
//!   many threads.

use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use sift_types::{Record, Stage, StepKind};

use crate::analyzer::{Step, Transform};
use crate::stopwords::Stopwords;

/// Which steps to run, in which order, and with which stopwords.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Step order. Repeats are allowed.
    /// Default: [`StepKind::STANDARD`].
    pub steps: Vec<StepKind>,
    /// Set used by every stopword filter step.
    /// Default: [`Stopwords::english`].
    pub stopwords: Stopwords,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            steps: StepKind::STANDARD.to_vec(),
            stopwords: Stopwords::english(),
        }
    }
}

impl PipelineConfig {
    /// The first-generation order, with whitespace collapse after tokenization.
    pub fn legacy(stopwords: Stopwords) -> Self {
        Self {
            steps: StepKind::LEGACY.to_vec(),
            stopwords,
        }
    }
}

/// Ordered sequence of steps applied to each record.
#[derive(Debug, Clone)]
pub struct Pipeline {
    steps: SmallVec<[Step; 8]>,
}

impl Pipeline {
    /// Creates a pipeline from steps in execution order.
    ///
    /// Steps whose position makes them ineffective (see
    /// [`Pipeline::ineffective_steps`]) are logged as warnings; they are kept
    /// and still run.
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        let pipeline = Self {
            steps: steps.into_iter().collect(),
        };
        for kind in pipeline.ineffective_steps() {
            warn!(step = %kind, "step position has no effect on tokens");
        }
        debug!(steps = pipeline.len(), "pipeline built");
        pipeline
    }

    /// Builds the steps named in `config`, all sharing its stopword set.
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(
            config
                .steps
                .iter()
                .map(|&kind| Step::from_kind(kind, &config.stopwords)),
        )
    }

    /// [`StepKind::STANDARD`] order with the given stopwords.
    ///
    /// Stemming runs after stopword removal, so the output holds no stopword
    /// as written in the message, but a stem may be one (`"hers"` ends as
    /// `"her"`).
    pub fn standard(stopwords: Stopwords) -> Self {
        Self::from_config(&PipelineConfig {
            steps: StepKind::STANDARD.to_vec(),
            stopwords,
        })
    }

    /// The configured steps in execution order.
    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Names of the configured steps in execution order.
    pub fn kinds(&self) -> impl Iterator<Item = StepKind> + '_ {
        self.steps.iter().map(Transform::kind)
    }

    /// Number of steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when the pipeline has no steps.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps that cannot influence the final tokens because of where they sit.
    ///
    /// - a text-level step after the last tokenization only rewrites
    ///   `clean_text`, which nothing reads again
    /// - a token-level step (tokenization included) followed by another
    ///   tokenization has its tokens replaced
    /// - a token-level step with no tokenization before it sees an empty
    ///   token list
    ///
    /// Without any tokenization step, text-level steps are effective:
    /// `clean_text` is then the output.
    pub fn ineffective_steps(&self) -> Vec<StepKind> {
        let kinds: SmallVec<[StepKind; 8]> = self.kinds().collect();
        let last_tokenize = kinds.iter().rposition(|&k| k == StepKind::Tokenize);

        kinds
            .iter()
            .enumerate()
            .filter(|&(i, &kind)| match kind.stage() {
                Stage::Text => last_tokenize.is_some_and(|last| i > last),
                Stage::Token => last_tokenize.is_none_or(|last| i < last),
            })
            .map(|(_, &kind)| kind)
            .collect()
    }

    /// Runs every step on one record, in order.
    pub fn process(&self, record: &mut Record) {
        for step in &self.steps {
            step.apply(record);
            trace!(step = %step.kind(), tokens = record.tokens.len(), "step applied");
        }
    }

    /// Runs the pipeline on each record of a batch.
    pub fn process_batch(&self, records: &mut [Record]) {
        debug!(records = records.len(), steps = self.len(), "processing batch");
        for record in records.iter_mut() {
            self.process(record);
        }
    }

    /// Builds records from `(label, message)` pairs and processes them.
    pub fn run<I, L, M>(&self, rows: I) -> Vec<Record>
    where
        I: IntoIterator<Item = (L, M)>,
        L: Into<String>,
        M: Into<String>,
    {
        let mut records: Vec<Record> = rows
            .into_iter()
            .map(|(label, message)| Record::new(label, message))
            .collect();
        self.process_batch(&mut records);
        records
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::from_config(&PipelineConfig::default())
    }
}
