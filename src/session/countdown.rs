use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    Tick { remaining_seconds: u32 },
    /// Emitted exactly once, after the final tick.
    Expired,
}

/// Cancellable one-second countdown bound to a session. Ticks once per
/// second until the remaining count reaches zero, then emits a single
/// `Expired` and stops for good.
#[derive(Debug)]
pub struct CountdownTimer {
    handle: JoinHandle<()>,
}

impl CountdownTimer {
    pub fn start(duration_seconds: u32, events: mpsc::UnboundedSender<TimerEvent>) -> Self {
        let handle = tokio::spawn(async move {
            let mut remaining = duration_seconds;
            let mut ticker = time::interval(Duration::from_secs(1));
            // The first interval tick completes immediately.
            ticker.tick().await;

            while remaining > 0 {
                ticker.tick().await;
                remaining -= 1;
                if events
                    .send(TimerEvent::Tick {
                        remaining_seconds: remaining,
                    })
                    .is_err()
                {
                    return;
                }
            }

            let _ = events.send(TimerEvent::Expired);
        });

        Self { handle }
    }

    /// Stops the countdown; no further events are emitted. Cancelling an
    /// already-stopped timer is a no-op.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn collect_events(mut rx: mpsc::UnboundedReceiver<TimerEvent>) -> Vec<TimerEvent> {
        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }
        events
    }

    #[tokio::test(start_paused = true)]
    async fn emits_one_tick_per_second_then_a_single_expiry() {
        let (tx, rx) = mpsc::unbounded_channel();
        let _timer = CountdownTimer::start(3, tx);

        let events = collect_events(rx).await;

        assert_eq!(
            events,
            vec![
                TimerEvent::Tick {
                    remaining_seconds: 2
                },
                TimerEvent::Tick {
                    remaining_seconds: 1
                },
                TimerEvent::Tick {
                    remaining_seconds: 0
                },
                TimerEvent::Expired,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn five_second_timer_ticks_five_times_before_expiry() {
        let (tx, rx) = mpsc::unbounded_channel();
        let _timer = CountdownTimer::start(5, tx);

        let events = collect_events(rx).await;

        let ticks = events
            .iter()
            .filter(|event| matches!(event, TimerEvent::Tick { .. }))
            .count();
        let expiries = events
            .iter()
            .filter(|event| matches!(event, TimerEvent::Expired))
            .count();
        assert_eq!(ticks, 5);
        assert_eq!(expiries, 1);
        assert_eq!(events.last(), Some(&TimerEvent::Expired));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_events_before_expiry() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = CountdownTimer::start(60, tx);

        let first = rx.recv().await;
        assert_eq!(
            first,
            Some(TimerEvent::Tick {
                remaining_seconds: 59
            })
        );

        timer.cancel();

        // Once the task is aborted the sender is dropped and the channel
        // drains to a close with no expiry.
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_is_idempotent() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = CountdownTimer::start(10, tx);

        timer.cancel();
        timer.cancel();

        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_timer_cancels_it() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = CountdownTimer::start(10, tx);
        drop(timer);

        assert_eq!(rx.recv().await, None);
    }
}
