use std::sync::{Mutex, PoisonError};

use journey_core::model::{OnboardingAnswers, OnboardingFlow, OnboardingStep, OnboardingUpdate};

/// Session-scoped questionnaire state.
///
/// Unlike the journey and chat stores this one is deliberately not
/// persisted: abandoning onboarding part-way restarts it from the top.
#[derive(Default)]
pub struct OnboardingService {
    flow: Mutex<OnboardingFlow>,
}

impl OnboardingService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn step(&self) -> OnboardingStep {
        self.lock().step()
    }

    #[must_use]
    pub fn answers(&self) -> OnboardingAnswers {
        self.lock().answers().clone()
    }

    #[must_use]
    pub fn selected_paths(&self) -> Vec<String> {
        self.lock().selected_paths().to_vec()
    }

    pub fn set_step(&self, step: OnboardingStep) {
        self.lock().set_step(step);
    }

    pub fn next_step(&self) -> OnboardingStep {
        let mut flow = self.lock();
        flow.next_step();
        flow.step()
    }

    pub fn prev_step(&self) -> OnboardingStep {
        let mut flow = self.lock();
        flow.prev_step();
        flow.step()
    }

    pub fn apply(&self, update: OnboardingUpdate) {
        self.lock().apply(update);
    }

    pub fn select_paths(&self, paths: Vec<String>) {
        self.lock().select_paths(paths);
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, OnboardingFlow> {
        self.flow.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
