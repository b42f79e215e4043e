use tracing::{debug, info, trace};
use xyz2mol::engine::progress::{Progress, ProgressCallback};

/// Forwards engine progress events to the log.
pub struct LogProgressHandler;

impl LogProgressHandler {
    pub fn callback() -> ProgressCallback<'static> {
        Box::new(|progress: Progress| match progress {
            Progress::PhaseStart { name } => info!("Starting phase: {}", name),
            Progress::PhaseFinish => debug!("Phase finished."),
            Progress::BondUpgraded {
                iteration,
                atom1_idx,
                atom2_idx,
                order,
            } => trace!(
                "Iteration {}: bond {}-{} raised to order {}",
                iteration,
                atom1_idx + 1,
                atom2_idx + 1,
                order
            ),
            Progress::Message(msg) => info!("{}", msg),
        })
    }
}
