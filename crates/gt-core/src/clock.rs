use std::thread;
use std::time::{Duration, Instant};

/// Horloge de cadence : un tick par intervalle fixe.
///
/// Remplace le couple « tick + pause de stabilisation » par un seul
/// intervalle déterministe. Les ticks manqués (rendu plus long que
/// l'intervalle) sont abandonnés, pas rattrapés en rafale.
///
/// # Example
/// ```
/// use gt_core::clock::Pacer;
/// use std::time::Duration;
/// let mut pacer = Pacer::start(Duration::from_millis(1));
/// pacer.wait();
/// assert_eq!(pacer.interval(), Duration::from_millis(1));
/// ```
#[derive(Debug)]
pub struct Pacer {
    interval: Duration,
    deadline: Instant,
}

impl Pacer {
    /// Arme l'horloge : le premier tick tombe un intervalle après l'appel.
    #[must_use]
    pub fn start(interval: Duration) -> Self {
        Self {
            interval,
            deadline: Instant::now() + interval,
        }
    }

    /// Intervalle entre deux ticks.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Échéance du prochain tick.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Bloque jusqu'au prochain tick.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if self.deadline > now {
            thread::sleep(self.deadline - now);
            self.deadline += self.interval;
        } else {
            self.deadline = now + self.interval;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_are_spaced_by_interval() {
        let start = Instant::now();
        let mut pacer = Pacer::start(Duration::from_millis(5));
        for _ in 0..3 {
            pacer.wait();
        }
        assert!(start.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn late_ticks_are_dropped() {
        let mut pacer = Pacer::start(Duration::from_millis(5));
        thread::sleep(Duration::from_millis(30));
        let before = Instant::now();
        pacer.wait();
        // pas de sommeil : on était en retard
        assert!(pacer.deadline() >= before + Duration::from_millis(5));
    }
}
