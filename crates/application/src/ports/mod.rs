mod answer_source;
mod diff_sink;
mod pacer;

pub use answer_source::AnswerSource;
pub use diff_sink::DiffSink;
pub use pacer::Pacer;

// Re-export for convenience
pub use zonediff_domain::{NormalizedAnswer, QueryKey};
