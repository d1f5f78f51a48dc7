use crate::snake::Millis;

/// Lifecycle of one run
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    Running,
    Paused { since: Millis },
    Dead,
}

/// Owns the run state, pausing freezes the tick clock
#[derive(Debug)]
pub struct Control {
    state: State,
}

impl Control {
    pub fn new() -> Self {
        Self { state: State::Running }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    /// Returns how long the run was paused when it resumes, the caller
    /// shifts the tick clock by that much
    pub fn toggle_pause(&mut self, now: Millis) -> Option<Millis> {
        match self.state {
            State::Running => {
                self.state = State::Paused { since: now };
                None
            }
            State::Paused { since } => {
                self.state = State::Running;
                Some(now.saturating_sub(since))
            }
            State::Dead => None,
        }
    }

    /// Returns false if the run was already over
    pub fn die(&mut self) -> bool {
        let was_alive = self.state != State::Dead;
        self.state = State::Dead;
        was_alive
    }
}

#[test]
fn test_pause_and_death() {
    let mut control = Control::new();
    assert!(control.is_running());
    assert_eq!(control.toggle_pause(1000), None);
    assert_eq!(control.state(), State::Paused { since: 1000 });
    assert_eq!(control.toggle_pause(3500), Some(2500));
    assert!(control.is_running());

    assert!(control.die());
    assert!(!control.die());
    assert_eq!(control.toggle_pause(4000), None);
    assert_eq!(control.state(), State::Dead);
}
