use super::constants::{PRELOADER_DELAY_MS, PRELOADER_FADE_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadePhase {
    /// Body forced to transparent right at `load`, with no transition.
    Hidden,
    /// Transition enabled and target opacity set to 1.
    FadingIn,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BodyStyle {
    pub opacity: f32,
    pub transition: Option<String>,
}

impl FadePhase {
    pub const AT_LOAD: FadePhase = FadePhase::Hidden;

    pub fn style(self) -> BodyStyle {
        match self {
            FadePhase::Hidden => BodyStyle {
                opacity: 0.0,
                transition: None,
            },
            FadePhase::FadingIn => BodyStyle {
                opacity: 1.0,
                transition: Some(format!("opacity {}ms ease-in-out", PRELOADER_FADE_MS)),
            },
        }
    }

    /// Delay until the following phase, and that phase. `None` once the
    /// fade has been handed to the browser.
    pub fn next(self) -> Option<(i32, FadePhase)> {
        match self {
            FadePhase::Hidden => Some((PRELOADER_DELAY_MS, FadePhase::FadingIn)),
            FadePhase::FadingIn => None,
        }
    }
}
