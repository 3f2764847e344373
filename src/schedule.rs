//! Deferred work for the terminal shell.
//!
//! Timers run as tokio tasks and report back over an unbounded channel that
//! the UI loop drains between input polls. Every message carries the session
//! generation that scheduled it so the app can drop stale ones after a restart.

use std::time::Duration;

use tokio::sync::mpsc;

use crate::fireworks::{FRAME_COUNT, FRAME_INTERVAL};

/// Messages posted back to the UI loop by timer tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    /// The feedback delay elapsed; ask the session for the next prompt.
    Advance { generation: u64 },
    /// Draw the next fireworks frame.
    FireworksFrame { generation: u64 },
}

/// Timed work the app asks the shell to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    ScheduleAdvance { generation: u64, delay: Duration },
    StartFireworks { generation: u64 },
}

pub struct Scheduler {
    tx: mpsc::UnboundedSender<AppMessage>,
}

impl Scheduler {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<AppMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn dispatch(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::ScheduleAdvance { generation, delay } => self.advance_after(generation, delay),
            Effect::StartFireworks { generation } => {
                self.fireworks(generation, FRAME_COUNT, FRAME_INTERVAL)
            }
        }
    }

    fn advance_after(&self, generation: u64, delay: Duration) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the UI already exited.
            let _ = tx.send(AppMessage::Advance { generation });
        });
    }

    fn fireworks(&self, generation: u64, frames: usize, every: Duration) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            for _ in 0..frames {
                interval.tick().await;
                if tx.send(AppMessage::FireworksFrame { generation }).is_err() {
                    break;
                }
            }
        });
    }
}
