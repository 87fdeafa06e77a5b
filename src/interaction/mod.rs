use serde::{Deserialize, Serialize};

/// Opacity regime of one update cycle.
///
/// Highlight always wins over selection; neutral applies when neither is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualMode {
    Highlighted,
    Selected,
    Neutral,
}

impl VisualMode {
    #[must_use]
    pub fn resolve(has_highlights: bool, has_selection: bool) -> Self {
        if has_highlights {
            Self::Highlighted
        } else if has_selection {
            Self::Selected
        } else {
            Self::Neutral
        }
    }
}

/// Pointer transition produced by hover tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverTransition {
    Enter(String),
    Leave(String),
}

/// Hover state owned by the engine.
///
/// Hover is transient: it never feeds back into element opacity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InteractionState {
    hovered: Option<String>,
}

impl InteractionState {
    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Moves hover to `next`, returning the leave/enter transitions in order.
    pub fn hover(&mut self, next: Option<&str>) -> Vec<HoverTransition> {
        if self.hovered.as_deref() == next {
            return Vec::new();
        }
        let mut transitions = Vec::with_capacity(2);
        if let Some(previous) = self.hovered.take() {
            transitions.push(HoverTransition::Leave(previous));
        }
        if let Some(category) = next {
            self.hovered = Some(category.to_owned());
            transitions.push(HoverTransition::Enter(category.to_owned()));
        }
        transitions
    }

    /// Clears hover; returns the category that was hovered.
    pub fn clear(&mut self) -> Option<String> {
        self.hovered.take()
    }
}
