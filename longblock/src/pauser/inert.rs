use async_trait::async_trait;

use crate::concurrency::shutdown::ShutdownRx;
use crate::error::{PauseError, PauseResult};
use crate::pauser::base::PauseService;

/// [`PauseService`] used when the debug feature is disabled.
///
/// Never holds and rejects every pause or resume request.
#[derive(Debug, Default, Clone, Copy)]
pub struct InertGate;

impl InertGate {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PauseService for InertGate {
    fn pause_allowed(&self) -> bool {
        false
    }

    fn pause_on_each_block(&self) -> bool {
        false
    }

    async fn hold_if_paused(&self, _shutdown_rx: &mut ShutdownRx) -> PauseResult<()> {
        Ok(())
    }

    fn pause(&self) -> PauseResult<()> {
        Err(PauseError::DebugNotEnabled)
    }

    fn resume(&self) -> PauseResult<()> {
        Err(PauseError::DebugNotEnabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concurrency::shutdown::create_shutdown_channel;
    use crate::error::ErrorKind;

    #[tokio::test]
    async fn inert_gate_never_holds_and_rejects_requests() {
        let gate = InertGate::new();
        let (_shutdown_tx, mut shutdown_rx) = create_shutdown_channel();

        assert!(!gate.pause_allowed());
        assert!(!gate.pause_on_each_block());

        for _ in 0..3 {
            assert_eq!(gate.hold_if_paused(&mut shutdown_rx).await, Ok(()));
            assert_eq!(gate.pause(), Err(PauseError::DebugNotEnabled));
            assert_eq!(gate.resume(), Err(PauseError::DebugNotEnabled));
        }

        assert_eq!(gate.pause().unwrap_err().kind(), ErrorKind::FeatureDisabled);
    }
}
