//! Review orchestration: prompt construction, the LLM boundary, the blank
//! template generator, and the end-to-end review pipeline.

pub mod llm;
pub mod pipeline;
pub mod prompt;
pub mod template;

pub use llm::{Llm, OpenRouterClient};
pub use pipeline::{
    BatchOutcome, ProgressReporter, ReviewConfig, ReviewOutcome, SilentProgress, run_batch,
    run_review,
};
pub use prompt::build_review_prompt;
pub use template::render_template;
