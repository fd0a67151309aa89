//! Change verb classification.
//!
//! Maps a resource's raw action list to one semantic change verb. The verb
//! enum is closed; presentation metadata lives in a separate [`VerbStyle`]
//! lookup so classification carries no dependency on color or markup
//! concepts.

use serde::Serialize;

use crate::error::PlanError;

/// The semantic classification of a resource's action list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Verb {
    /// The resource will be created.
    Create,
    /// The resource will be updated in place.
    Update,
    /// The resource will be destroyed and recreated.
    Replace,
    /// The resource will be destroyed.
    Destroy,
    /// The resource will be read during apply.
    Read,
    /// Nothing will happen to the resource. Excluded from all output.
    NoOp,
}

/// Presentation metadata for a verb: display icon, past-tense description,
/// and the fixed priority used to order the summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerbStyle {
    /// Single-character display icon.
    pub icon: char,
    /// Past-tense description, e.g. "created".
    pub past_tense: &'static str,
    /// Sort priority for the summary line; lower sorts first.
    pub priority: u8,
}

impl Verb {
    /// Classifies an action list into a verb.
    ///
    /// The two-element set `{create, delete}` classifies as [`Verb::Replace`]
    /// regardless of order. Any unrecognized token or combination fails with
    /// [`PlanError::InvalidActionSet`].
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidActionSet`] carrying the offending action
    /// list when no rule matches.
    pub fn classify(actions: &[String]) -> Result<Self, PlanError> {
        let mut sorted: Vec<&str> = actions.iter().map(String::as_str).collect();
        sorted.sort_unstable();

        match sorted.as_slice() {
            ["no-op"] => Ok(Self::NoOp),
            ["create"] => Ok(Self::Create),
            ["update"] => Ok(Self::Update),
            ["delete"] => Ok(Self::Destroy),
            ["read"] => Ok(Self::Read),
            ["create", "delete"] => Ok(Self::Replace),
            _ => Err(PlanError::invalid_actions(actions)),
        }
    }

    /// Returns the presentation metadata for this verb.
    ///
    /// [`Verb::NoOp`] carries placeholder metadata; no-op resources are
    /// excluded from output before styling ever applies.
    #[must_use]
    pub const fn style(self) -> VerbStyle {
        match self {
            Self::Create => VerbStyle {
                icon: '+',
                past_tense: "created",
                priority: 0,
            },
            Self::Destroy => VerbStyle {
                icon: '-',
                past_tense: "destroyed",
                priority: 1,
            },
            Self::Replace => VerbStyle {
                icon: 'r',
                past_tense: "replaced",
                priority: 2,
            },
            Self::Update => VerbStyle {
                icon: '~',
                past_tense: "updated",
                priority: 3,
            },
            Self::Read => VerbStyle {
                icon: '?',
                past_tense: "read",
                priority: 4,
            },
            Self::NoOp => VerbStyle {
                icon: ' ',
                past_tense: "unchanged",
                priority: u8::MAX,
            },
        }
    }

    /// Lowercase verb name, e.g. "create".
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Replace => "replace",
            Self::Destroy => "destroy",
            Self::Read => "read",
            Self::NoOp => "no-op",
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
