use serde::Serialize;
use uuid::Uuid;

/// Tallies for a single quiz session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    /// Unique session ID, attached to log events and the JSON summary.
    pub id: Uuid,
    /// Number of questions the user asked for.
    pub target: u32,
    pub attempted: u32,
    pub correct: u32,
    pub incorrect: u32,
}

impl SessionStats {
    pub fn new(target: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            target,
            attempted: 0,
            correct: 0,
            incorrect: 0,
        }
    }

    /// Record one answered question.
    pub fn record(&mut self, is_correct: bool) {
        self.attempted += 1;
        if is_correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
    }

    /// Whether the requested number of questions has been answered.
    pub fn is_complete(&self) -> bool {
        self.attempted >= self.target
    }

    /// Score as a percentage of attempted questions, or `None` if nothing was attempted.
    pub fn percentage(&self) -> Option<f64> {
        if self.attempted == 0 {
            None
        } else {
            Some(f64::from(self.correct) / f64::from(self.attempted) * 100.0)
        }
    }
}
