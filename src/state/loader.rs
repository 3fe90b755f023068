//! Loading-screen progression driven by engine onboarding steps.
//!
//! The engine reports its onboarding step and the number of scene objects
//! still loading; this model turns those into the overlay text and decides
//! when the overlay disappears.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use serde::{Deserialize, Serialize};

/// Engine onboarding step as reported over `onboarding:step`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    #[default]
    Start,
    SceneLoading,
    SceneLoaded,
    AwaitingInput,
    Success,
    #[serde(other)]
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderState {
    step: OnboardingStep,
    objects_to_load: u32,
    text: String,
    show_progress: bool,
}

impl Default for LoaderState {
    fn default() -> Self {
        Self {
            step: OnboardingStep::Start,
            objects_to_load: 0,
            text: "Connecting...".to_owned(),
            show_progress: true,
        }
    }
}

impl LoaderState {
    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// False once onboarding succeeded; the overlay renders nothing then.
    pub fn is_visible(&self) -> bool {
        self.show_progress
    }

    /// Apply a step change. Repeating the current step is ignored.
    pub fn set_step(&mut self, step: OnboardingStep) {
        if step == self.step {
            return;
        }
        self.step = step;
        match step {
            OnboardingStep::Start => {
                self.text = "Connecting...".to_owned();
                self.show_progress = true;
            }
            OnboardingStep::SceneLoaded => self.text = "Entering world...".to_owned(),
            OnboardingStep::AwaitingInput => self.text = "Click to join".to_owned(),
            OnboardingStep::Success => self.show_progress = false,
            OnboardingStep::SceneLoading | OnboardingStep::Other => self.text = "Loading...".to_owned(),
        }
    }

    /// Apply a change in the remaining object count. Only changes the text
    /// while the scene is loading.
    pub fn set_objects_to_load(&mut self, count: u32) {
        if count == self.objects_to_load {
            return;
        }
        self.objects_to_load = count;
        if self.step == OnboardingStep::SceneLoading {
            self.text = objects_remaining_text(count);
        }
    }
}

fn objects_remaining_text(count: u32) -> String {
    if count > 1 {
        format!("{count} objects remaining")
    } else {
        format!("{count} object remaining")
    }
}
