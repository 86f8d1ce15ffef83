/// Failure of a closed-form solve.
///
/// There is exactly one kind: every non-constant coefficient is negligible, so no finite root set
/// exists. `degree` is the nominal degree of the input (2 or 3), not the effective one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error("Degenerate degree-{degree} polynomial: all non-constant coefficients are zero")]
    Degenerate { degree: usize },
}

pub type Result<T> = std::result::Result<T, SolveError>;
