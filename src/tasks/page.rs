use anyhow::Result;
use tokio::select;
use tokio::sync::mpsc::Receiver;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::events::PageCommand;
use crate::page::TimelinePage;

/// Owns the page for its lifetime: applies commands as they arrive and fires
/// page timers at their deadlines. Returns the page once cancelled or once the
/// command channel closes.
pub async fn run(
    mut page: TimelinePage,
    mut commands: Receiver<PageCommand>,
    cancel: CancellationToken,
) -> Result<TimelinePage> {
    loop {
        let wake = page.next_deadline();
        select! {
            _ = cancel.cancelled() => {
                info!("cancel received; exiting page task");
                break;
            }

            maybe_cmd = commands.recv() => {
                match maybe_cmd {
                    Some(cmd) => page.handle(cmd, Instant::now()),
                    None => {
                        debug!("command channel closed");
                        break;
                    }
                }
            }

            _ = sleep_until(wake.unwrap_or_else(Instant::now)), if wake.is_some() => {
                page.fire_due(Instant::now());
            }
        }
    }

    if page.slideshow().is_active() {
        page.stop_slideshow();
    }
    Ok(page)
}
