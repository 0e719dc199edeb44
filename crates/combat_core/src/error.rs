use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombatError {
    #[error("not enough energy: card costs {required}, {available} available")]
    InsufficientEnergy { required: u32, available: u32 },
    #[error("unknown enemy kind: {0}")]
    UnknownEnemyKind(String),
}
