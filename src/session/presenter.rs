use crate::model::PredictionResult;

/// Which pane is active: the empty prompt or a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    AwaitingInput,
    ShowingResults,
}

/// Two-state machine holding the current prediction, if any.
///
/// The view state is derived from whether a result is held, so
/// `ShowingResults` always has a result and `AwaitingInput` never does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Presenter {
    result: Option<PredictionResult>,
}

impl Presenter {
    /// Returns the current view state.
    pub fn view_state(&self) -> ViewState {
        match self.result {
            Some(_) => ViewState::ShowingResults,
            None => ViewState::AwaitingInput,
        }
    }

    /// Returns the prediction being shown, if any.
    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    /// Replaces any previous prediction and shows the new one.
    pub fn show_results(&mut self, result: PredictionResult) -> &PredictionResult {
        self.result.insert(result)
    }

    /// Clears the prediction and returns to [`ViewState::AwaitingInput`].
    pub fn reset(&mut self) {
        self.result = None;
    }
}
