use std::time::Duration;

use crate::notation::Algorithm;

/// Render a solve time the way speedcubing timers do: `s.cc` below a minute,
/// `m:ss.cc` from a minute on. Hundredths are truncated, not rounded.
pub fn format_time(time: Duration) -> String {
    let millis = time.as_millis();
    let seconds = millis / 1000;
    let minutes = seconds / 60;
    let hundredths = (millis % 1000) / 10;

    if minutes > 0 {
        format!("{minutes}:{:02}.{hundredths:02}", seconds % 60)
    } else {
        format!("{seconds}.{hundredths:02}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solve {
    pub time: Duration,
    pub scramble: Algorithm,
}

/// Solves recorded during one practice session, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Session {
    solves: Vec<Solve>,
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    pub fn record(&mut self, time: Duration, scramble: Algorithm) {
        self.solves.push(Solve { time, scramble });
    }

    pub fn solves(&self) -> &[Solve] {
        &self.solves
    }

    pub fn best(&self) -> Option<Duration> {
        self.solves.iter().map(|solve| solve.time).min()
    }

    /// Mean of the `n` most recent solves without their best and worst time.
    ///
    /// `None` if there are fewer than `n` solves or `n` is too small to trim.
    pub fn average_of(&self, n: usize) -> Option<Duration> {
        if n < 3 || self.solves.len() < n {
            return None;
        }

        let mut times = self.solves[self.solves.len() - n..]
            .iter()
            .map(|solve| solve.time)
            .collect::<Vec<_>>();
        times.sort_unstable();

        let trimmed = &times[1..n - 1];
        let total: Duration = trimmed.iter().sum();
        // At most a few thousand solves per session
        #[allow(clippy::cast_possible_truncation)]
        Some(total / trimmed.len() as u32)
    }
}
