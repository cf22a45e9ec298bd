//! Typing animation driver
//!
//! Runs a [`Typewriter`] on the tokio timer and hands every frame to a sink.

use std::future::Future;

use tokio::task::JoinHandle;

use crate::domain::services::{Frame, Phase, Typewriter, TypingTimings};

pub struct TypingAnimation {
    typewriter: Typewriter,
    max_cycles: Option<u32>,
}

impl TypingAnimation {
    pub fn new(typewriter: Typewriter) -> Self {
        Self {
            typewriter,
            max_cycles: None,
        }
    }

    pub fn for_subtitles(subtitles: Vec<String>, timings: TypingTimings) -> Self {
        Self::new(Typewriter::new(subtitles, timings))
    }

    /// Stop by itself after `cycles` full passes over the script
    pub fn limit_cycles(mut self, cycles: u32) -> Self {
        self.max_cycles = Some(cycles);
        self
    }

    /// Drive the animation until `shutdown` resolves or the cycle limit is hit
    ///
    /// The sink sees the initial empty frame first. Returns the number of
    /// completed cycles.
    pub async fn run_until<F, S>(mut self, shutdown: S, mut on_frame: F) -> u32
    where
        F: FnMut(&Frame),
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        on_frame(&self.typewriter.frame());

        let mut cycles = 0;
        loop {
            if self.max_cycles.is_some_and(|max| cycles >= max) {
                break;
            }

            tokio::select! {
                _ = &mut shutdown => break,
                _ = tokio::time::sleep(self.typewriter.next_delay()) => {}
            }

            let was_deleting = self.typewriter.phase() == Phase::Deleting;
            let frame = self.typewriter.tick();
            on_frame(&frame);

            if was_deleting && frame.phase == Phase::Typing && frame.index == 0 {
                cycles += 1;
                tracing::trace!(cycles, "typing cycle complete");
            }
        }
        cycles
    }

    /// Run on a background task until the handle is stopped or dropped
    pub fn spawn<F>(self, mut on_frame: F) -> TypingHandle
    where
        F: FnMut(Frame) + Send + 'static,
    {
        let task = tokio::spawn(async move {
            self.run_until(std::future::pending(), |frame| on_frame(frame.clone()))
                .await;
        });
        TypingHandle { task }
    }
}

/// Owner of a spawned animation; dropping it stops the animation
#[derive(Debug)]
pub struct TypingHandle {
    task: JoinHandle<()>,
}

impl TypingHandle {
    /// Cancel the pending timer; no frame is emitted afterwards
    pub fn stop(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TypingHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
