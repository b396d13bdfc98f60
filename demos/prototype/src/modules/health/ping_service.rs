use wyre_di::{Args, Construct, DynError};

/// Issues liveness probes against one named target
pub struct PingService {
    target: String,
}

impl PingService {
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Probes the target. The prototype treats every named target as alive.
    pub fn ping(&self) -> bool {
        tracing::debug!("Probing {}", self.target);
        !self.target.is_empty()
    }
}

impl Construct for PingService {
    fn construct(mut args: Args) -> Result<Self, DynError> {
        Ok(PingService {
            target: args.value()?,
        })
    }
}
