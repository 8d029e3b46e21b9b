//! Alert lifecycle state machine
//!
//! ```text
//!  Hidden ──Present──▶ Entering ──EntranceSettled──▶ Resting
//!    ▲                    │                             │
//!    │                 Dismiss                       Dismiss
//!    │                    ▼                             │
//!    └──UnmountElapsed── Exiting ◀───────────────────────┘
//! ```

/// Scale of the card while it is unmounted and at the start of the entrance
pub const HIDDEN_SCALE: f32 = 0.7;

/// Lifecycle phase of an alert
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AlertPhase {
    /// Not mounted
    #[default]
    Hidden,
    /// Entrance spring is running
    Entering,
    /// Fully visible and at rest
    Resting,
    /// Exit animation is playing, unmount is scheduled
    Exiting,
}

/// Inputs driving [`AlertPhase`] transitions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlertEvent {
    /// Host asked for the alert to be shown
    Present,
    /// Entrance springs came to rest
    EntranceSettled,
    /// Confirm, cancel or backdrop tap
    Dismiss,
    /// Unmount delay after the exit started has passed
    UnmountElapsed,
}

impl AlertPhase {
    /// Handle an event and return the new phase, or None if no transition
    pub fn on_event(&self, event: AlertEvent) -> Option<Self> {
        use AlertEvent::*;
        use AlertPhase::*;

        match (self, event) {
            (Hidden, Present) => Some(Entering),
            (Entering, EntranceSettled) => Some(Resting),
            (Resting, Dismiss) => Some(Exiting),
            // Interrupt the entrance
            (Entering, Dismiss) => Some(Exiting),
            (Exiting, UnmountElapsed) => Some(Hidden),
            _ => None,
        }
    }

    /// Whether the alert is mounted
    pub fn is_visible(&self) -> bool {
        !matches!(self, AlertPhase::Hidden)
    }

    /// Whether taps are still routed to the alert
    pub fn is_interactive(&self) -> bool {
        matches!(self, AlertPhase::Entering | AlertPhase::Resting)
    }

    /// Whether the alert needs animation frames
    pub fn is_animating(&self) -> bool {
        matches!(self, AlertPhase::Entering | AlertPhase::Exiting)
    }
}

/// What caused a dismissal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DismissReason {
    /// Confirm button
    Confirmed,
    /// Cancel button
    Cancelled,
    /// Tap on the dimmed backdrop
    BackdropTapped,
}

/// Values a renderer needs to draw the alert for the current frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlertVisualState {
    /// Whether the alert is mounted at all
    pub visible: bool,
    /// Card scale in `[0, 1]`, applied around the card center
    pub scale: f32,
    /// Card opacity in `[0, 1]`
    pub opacity: f32,
}

impl AlertVisualState {
    pub const HIDDEN: AlertVisualState = AlertVisualState {
        visible: false,
        scale: HIDDEN_SCALE,
        opacity: 0.0,
    };

    pub const RESTING: AlertVisualState = AlertVisualState {
        visible: true,
        scale: 1.0,
        opacity: 1.0,
    };
}

impl Default for AlertVisualState {
    fn default() -> Self {
        Self::HIDDEN
    }
}
