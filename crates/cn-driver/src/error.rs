use cn_core::{AgentId, CnError, NetworkId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Core(#[from] CnError),

    #[error("{what} {got} does not match the run's {expected}")]
    CountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("{0} appears more than once")]
    DuplicateNetwork(NetworkId),

    #[error("{0} is not driven by this run")]
    UnknownNetwork(NetworkId),

    #[error("{agent} in {network} is outside the health table ({agent_count} agents)")]
    AgentOutOfRange {
        agent:       AgentId,
        network:     NetworkId,
        agent_count: usize,
    },

    #[cfg(feature = "parallel")]
    #[error("could not build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type DriverResult<T> = Result<T, DriverError>;
