//! Progress events for long runs.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    BuildingRuntime,
    Solving,
    Completed,
}

impl RunStage {
    pub fn label(self) -> &'static str {
        match self {
            RunStage::BuildingRuntime => "building runtime",
            RunStage::Solving => "solving",
            RunStage::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunProgressEvent {
    pub stage: RunStage,
    pub elapsed_wall_s: f64,
    /// Finished grid points, during `Solving`
    pub completed: usize,
    pub total: usize,
}

impl RunProgressEvent {
    pub fn fraction_complete(&self) -> f64 {
        match self.total {
            0 => 0.0,
            total => self.completed as f64 / total as f64,
        }
    }
}
