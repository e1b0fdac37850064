/// A user-triggerable affordance shown in the action bar of a page.
///
/// Which actions a page offers is decided by the action resolver; what an
/// action does is decided by the engine: `Start`, `Next` and `Skip` all
/// advance to the next page (`Skip` records nothing — skipping is
/// navigation, not validation), `Thanks` ends the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionId {
    /// Leave the title page and begin the questions.
    Start,

    /// Move past a non-required question without answering it.
    Skip,

    /// Move to the next page.
    Next,

    /// Acknowledge the thanks page and close the survey.
    Thanks,
}

impl ActionId {
    /// All actions, in a fixed order. Useful for adapters wiring handlers.
    pub const ALL: [ActionId; 4] = [Self::Start, Self::Skip, Self::Next, Self::Thanks];

    /// The stable string name of this action (used in markup class names).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Skip => "skip",
            Self::Next => "next",
            Self::Thanks => "thanks",
        }
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
