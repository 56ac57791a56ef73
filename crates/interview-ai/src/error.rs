/// Configuration errors surfaced to the caller.
///
/// Malformed upstream checklist data is deliberately absent here: sloppy
/// judge output degrades to `false` claims instead of failing the call.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("unknown scoring policy `{0}`")]
    UnknownPolicy(String),
    #[error("unknown question role `{0}` (expected `background` or `behavioral`)")]
    UnknownRole(String),
}
