//! The AI answer panel and its request lifecycle.
//!
//! `Hidden -> Loading -> {Answered | NoAnswer | Errored}`. Each request takes a ticket
//! and only the newest ticket may complete the panel, so a slow response to an older
//! query never overwrites a newer one.

use serde::Serialize;

/// Outcome of one proxy round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "text", rename_all = "snake_case")]
pub enum AiAnswer {
    Answered(String),
    NoAnswer(String),
    Errored(String),
}

impl AiAnswer {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Answered(text) | Self::NoAnswer(text) | Self::Errored(text) => text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelState {
    Hidden,
    Loading,
    Answered,
    NoAnswer,
    Errored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct AiPanel {
    visible: bool,
    active: Option<Ticket>,
    answer: Option<AiAnswer>,
    issued: u64,
}

impl AiPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reveal the panel, clear prior content and start loading.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.visible = true;
        self.answer = None;
        self.active = Some(ticket);
        ticket
    }

    /// Finish the request identified by `ticket`.
    ///
    /// Returns false and leaves the panel untouched when the ticket is stale, either
    /// because a newer request began or the panel was hidden meanwhile.
    pub fn complete(&mut self, ticket: Ticket, answer: AiAnswer) -> bool {
        if self.active != Some(ticket) {
            tracing::debug!(?ticket, "dropping stale AI answer");
            return false;
        }
        self.active = None;
        self.answer = Some(answer);
        true
    }

    /// Hide the panel and abandon any in-flight request.
    pub fn hide(&mut self) {
        self.visible = false;
        self.active = None;
        self.answer = None;
    }

    #[must_use]
    pub fn state(&self) -> PanelState {
        if !self.visible {
            return PanelState::Hidden;
        }
        match self.answer {
            None => PanelState::Loading,
            Some(AiAnswer::Answered(_)) => PanelState::Answered,
            Some(AiAnswer::NoAnswer(_)) => PanelState::NoAnswer,
            Some(AiAnswer::Errored(_)) => PanelState::Errored,
        }
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub const fn answer(&self) -> Option<&AiAnswer> {
        self.answer.as_ref()
    }
}
