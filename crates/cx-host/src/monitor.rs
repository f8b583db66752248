// ABOUTME: Safe removal of installed event monitors.
// ABOUTME: Clears the caller's handle so a monitor is never removed twice.

/// Host that can uninstall an event monitor it handed out earlier.
pub trait EventMonitors {
    type Monitor;

    /// Removing the same monitor twice over-releases it in the host.
    fn remove_monitor(&mut self, monitor: Self::Monitor);
}

/// Remove the monitor stored in `slot`, leaving `None` behind.
///
/// An empty slot is left alone. Returns whether a monitor was removed.
pub fn remove_monitor<H: EventMonitors + ?Sized>(
    host: &mut H,
    slot: &mut Option<H::Monitor>,
) -> bool {
    match slot.take() {
        Some(monitor) => {
            host.remove_monitor(monitor);
            tracing::debug!("Removed event monitor");
            true
        }
        None => false,
    }
}
