use serde::Serialize;

/// One of the competitions hosted at the event.
#[derive(Debug, Clone, Serialize)]
pub struct EventRecord {
    pub id: &'static str,
    pub title: &'static str,
    /// Short tagline shown on the card.
    pub description: &'static str,
    pub icon: EventIcon,
    pub details: EventDetails,
}

/// Long-form information shown in an event's detail section.
#[derive(Debug, Clone, Serialize)]
pub struct EventDetails {
    pub long_description: &'static str,
    pub themes: Option<&'static [&'static str]>,
    pub guidelines: Option<&'static [&'static str]>,
    pub how_it_works: &'static [&'static str],
    pub team_size: &'static str,
    pub registration_fee: &'static str,
    pub prize: Prize,
    pub contact: Contact,
}

/// Prize pool split.
#[derive(Debug, Clone, Serialize)]
pub struct Prize {
    pub total: &'static str,
    pub winner: &'static str,
    pub runner: &'static str,
}

/// Coordinators to reach for an event.
#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub phones: &'static [&'static str],
    pub email: &'static str,
}

/// Icon drawn on an event card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum EventIcon {
    Lightbulb,
    Code,
    ChartBar,
}
