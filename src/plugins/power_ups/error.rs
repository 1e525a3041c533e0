use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpError {
    /// A collectible needs a collaborator the receiver doesn't have.
    /// This is a level/actor configuration bug, not a gameplay outcome.
    #[error("{collectible} requires a {capability} capability on the receiver")]
    MissingCapability {
        collectible: &'static str,
        capability: &'static str,
    },
}
