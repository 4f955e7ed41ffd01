//! Unified error type for the orchestration layer.

use hr_algo::{AlgoError, ApportionError};
use hr_core::{CoreError, ValidationError};
use hr_io::IoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Algo(#[from] AlgoError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(
        "tally for congress {congress} roll {rollnumber} disagrees with published counts \
         (computed {computed_yea:.0}-{computed_nay:.0}, published {published_yea}-{published_nay})"
    )]
    TallyMismatch {
        congress: u32,
        rollnumber: u32,
        computed_yea: f64,
        computed_nay: f64,
        published_yea: u32,
        published_nay: u32,
    },
}

impl From<ApportionError> for PipelineError {
    fn from(e: ApportionError) -> Self {
        PipelineError::Algo(AlgoError::from(e))
    }
}
