//
// ─── STEPS ─────────────────────────────────────────────────────────────────────
//

/// One screen of the onboarding questionnaire, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OnboardingStep {
    Name,
    Hobbies,
    Expertise,
    PetPeeves,
    JourneyType,
    TimeCommitment,
    Final,
}

impl OnboardingStep {
    pub const FIRST: Self = OnboardingStep::Name;
    pub const LAST: Self = OnboardingStep::Final;

    const ORDER: [Self; 7] = [
        OnboardingStep::Name,
        OnboardingStep::Hobbies,
        OnboardingStep::Expertise,
        OnboardingStep::PetPeeves,
        OnboardingStep::JourneyType,
        OnboardingStep::TimeCommitment,
        OnboardingStep::Final,
    ];

    /// Zero-based position of this step.
    #[must_use]
    pub fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|step| *step == self)
            .unwrap_or(0)
    }

    /// Following step, clamped at the final screen.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER
            .get(self.index() + 1)
            .copied()
            .unwrap_or(Self::LAST)
    }

    /// Preceding step, clamped at the first screen.
    #[must_use]
    pub fn prev(self) -> Self {
        match self.index() {
            0 => Self::FIRST,
            idx => Self::ORDER[idx - 1],
        }
    }

    #[must_use]
    pub fn is_final(self) -> bool {
        self == Self::LAST
    }
}

impl Default for OnboardingStep {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Whether the learner wants to be led through the program or follow their
/// own pace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JourneyType {
    Lead,
    Follow,
}

//
// ─── ANSWERS ───────────────────────────────────────────────────────────────────
//

/// Everything the questionnaire collects. Free-text fields stay empty until
/// the learner fills them in; the journey type is unset until chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingAnswers {
    pub name: String,
    pub hobbies: String,
    pub expertise: String,
    pub pet_peeves: String,
    pub journey_type: Option<JourneyType>,
    pub time_commitment: String,
    pub additional_details: String,
}

/// Partial update over [`OnboardingAnswers`]: only the fields a step
/// actually collects are set, everything else is left alone.
#[derive(Debug, Clone, Default)]
pub struct OnboardingUpdate {
    pub name: Option<String>,
    pub hobbies: Option<String>,
    pub expertise: Option<String>,
    pub pet_peeves: Option<String>,
    pub journey_type: Option<JourneyType>,
    pub time_commitment: Option<String>,
    pub additional_details: Option<String>,
}

impl OnboardingAnswers {
    pub fn apply(&mut self, update: OnboardingUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(hobbies) = update.hobbies {
            self.hobbies = hobbies;
        }
        if let Some(expertise) = update.expertise {
            self.expertise = expertise;
        }
        if let Some(pet_peeves) = update.pet_peeves {
            self.pet_peeves = pet_peeves;
        }
        if let Some(journey_type) = update.journey_type {
            self.journey_type = Some(journey_type);
        }
        if let Some(time_commitment) = update.time_commitment {
            self.time_commitment = time_commitment;
        }
        if let Some(additional_details) = update.additional_details {
            self.additional_details = additional_details;
        }
    }
}

//
// ─── FLOW ──────────────────────────────────────────────────────────────────────
//

/// View-model state for the onboarding questionnaire: the step the learner
/// is on, their answers so far, and the revenue paths they picked at the
/// end. Session-scoped, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingFlow {
    step: OnboardingStep,
    answers: OnboardingAnswers,
    selected_paths: Vec<String>,
}

impl OnboardingFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    #[must_use]
    pub fn answers(&self) -> &OnboardingAnswers {
        &self.answers
    }

    #[must_use]
    pub fn selected_paths(&self) -> &[String] {
        &self.selected_paths
    }

    pub fn set_step(&mut self, step: OnboardingStep) {
        self.step = step;
    }

    pub fn next_step(&mut self) {
        self.step = self.step.next();
    }

    pub fn prev_step(&mut self) {
        self.step = self.step.prev();
    }

    pub fn apply(&mut self, update: OnboardingUpdate) {
        self.answers.apply(update);
    }

    pub fn select_paths(&mut self, paths: Vec<String>) {
        self.selected_paths = paths;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
