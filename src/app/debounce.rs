//! Debounce-Gate: fasst Bewegungs-Bursts zu höchstens einer Abfrage zusammen.
//!
//! Zwei Zustände (`Idle`, `Pending`). Alle Übergänge laufen über
//! [`DebounceGate::on_motion`], [`DebounceGate::poll`] und
//! [`DebounceGate::cancel`] im selben Ausführungskontext.

use std::time::{Duration, Instant};

use glam::DVec2;

/// Zustand des Gates. Die Deadline ist das Timer-Handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DebounceState {
    Idle,
    Pending { position: DVec2, deadline: Instant },
}

/// Einzel-Timer mit "letzte Position gewinnt"-Semantik.
#[derive(Debug, Clone)]
pub struct DebounceGate {
    delay: Duration,
    state: DebounceState,
}

impl DebounceGate {
    /// Erstellt ein Gate im Zustand `Idle`.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: DebounceState::Idle,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Ändert das Ruheintervall; ein laufender Timer behält seine Deadline.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    pub fn state(&self) -> DebounceState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, DebounceState::Pending { .. })
    }

    /// Merkt sich die Position und startet den Timer (neu).
    pub fn on_motion(&mut self, position: DVec2, now: Instant) {
        self.state = DebounceState::Pending {
            position,
            deadline: now + self.delay,
        };
    }

    /// Liefert die Position genau einmal, sobald die Deadline erreicht ist.
    ///
    /// Das Gate ist danach wieder `Idle`, sodass eine Bewegung während der
    /// nachgelagerten Verarbeitung einen neuen, unabhängigen Zyklus startet.
    pub fn poll(&mut self, now: Instant) -> Option<DVec2> {
        match self.state {
            DebounceState::Pending { position, deadline } if now >= deadline => {
                self.state = DebounceState::Idle;
                Some(position)
            }
            _ => None,
        }
    }

    /// Deadline des laufenden Timers, damit der Host sein Event-Loop wecken kann.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.state {
            DebounceState::Pending { deadline, .. } => Some(deadline),
            DebounceState::Idle => None,
        }
    }

    /// Verwirft einen laufenden Timer synchron.
    pub fn cancel(&mut self) {
        self.state = DebounceState::Idle;
    }
}
