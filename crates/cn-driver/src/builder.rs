//! Fluent builder for constructing a [`DayDriver`].

use cn_core::{Day, NetworkId, RunConfig};
use cn_network::ContactNetwork;
use log::{info, warn};
use rustc_hash::FxHashSet;

use crate::{DayDriver, DriverError, DriverResult};

/// Fluent builder for [`DayDriver`].
///
/// # Validation
///
/// [`build`](Self::build) rejects:
///
/// | Problem                                             | Error                  |
/// |-----------------------------------------------------|------------------------|
/// | `disease_count == 0` or `num_threads == Some(0)`     | `Core(Config)`         |
/// | A network's parameter table covers other diseases   | `CountMismatch`        |
/// | Two networks with the same `NetworkId`              | `DuplicateNetwork`     |
///
/// # Example
///
/// ```rust,ignore
/// let mut driver = DriverBuilder::new(config)
///     .network(Network::new(NetworkId(0), place, params.clone())?)
///     .build()?;
/// driver.run(&mut health, &mut NoopObserver)?;
/// ```
pub struct DriverBuilder {
    config:   RunConfig,
    networks: Vec<Box<dyn ContactNetwork>>,
}

impl DriverBuilder {
    pub fn new(config: RunConfig) -> Self {
        Self { config, networks: Vec::new() }
    }

    /// Add one network.
    pub fn network<N: ContactNetwork + 'static>(mut self, network: N) -> Self {
        self.networks.push(Box::new(network));
        self
    }

    /// Add already-boxed networks, e.g. a mix of network types.
    pub fn networks<I>(mut self, networks: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn ContactNetwork>>,
    {
        self.networks.extend(networks);
        self
    }

    /// Validate inputs and return a driver positioned at day 0.
    pub fn build(self) -> DriverResult<DayDriver> {
        self.config.validate()?;

        let expected = usize::from(self.config.disease_count);
        let mut seen: FxHashSet<NetworkId> = FxHashSet::default();
        for network in &self.networks {
            if !seen.insert(network.id()) {
                return Err(DriverError::DuplicateNetwork(network.id()));
            }
            let got = network.params().disease_count();
            if got != expected {
                return Err(DriverError::CountMismatch {
                    expected,
                    got,
                    what: "parameter table disease count",
                });
            }
        }
        if self.networks.is_empty() {
            warn!("driver built with no networks; every day will be empty");
        }

        #[cfg(feature = "parallel")]
        let pool = match self.config.num_threads {
            Some(n) => Some(rayon::ThreadPoolBuilder::new().num_threads(n).build()?),
            None    => None,
        };

        info!(
            "driver ready: {} networks, {} diseases, {} days, seed {}",
            self.networks.len(),
            self.config.disease_count,
            self.config.days,
            self.config.seed,
        );

        Ok(DayDriver {
            config:   self.config,
            networks: self.networks,
            current:  Day::ZERO,
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
