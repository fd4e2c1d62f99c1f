//! Bounded graceful shutdown

use std::{future::Future, io, time::Duration};

use tokio::sync::oneshot;
use tracing::warn;

/// How the server stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrainOutcome {
    /// Every open connection finished on its own
    Drained,
    /// The grace period ran out with connections still open
    TimedOut,
}

/// Drive `server` to completion, allowing at most `grace` once `signalled` fires
///
/// Dropping the server future on timeout closes whatever connections are
/// left.
pub async fn drain_within<F>(
    server: F,
    signalled: oneshot::Receiver<()>,
    grace: Duration,
) -> io::Result<DrainOutcome>
where
    F: Future<Output = io::Result<()>>,
{
    let deadline = async {
        if signalled.await.is_ok() {
            tokio::time::sleep(grace).await;
        } else {
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        result = server => result.map(|()| DrainOutcome::Drained),
        () = deadline => {
            warn!(?grace, "Connections still open after the grace period, forcing shutdown");
            Ok(DrainOutcome::TimedOut)
        }
    }
}
