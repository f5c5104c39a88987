use serde::Serialize;

/// A sponsor shown in the gallery.
#[derive(Debug, Clone, Serialize)]
pub struct Sponsor {
    pub name: &'static str,
    pub logo_url: &'static str,
}

/// Page-wide information about the event day.
#[derive(Debug, Clone, Serialize)]
pub struct SiteInfo {
    pub event_name: &'static str,
    pub tagline: &'static str,
    pub date: &'static str,
    pub venue: &'static str,
    pub institution: &'static str,
    pub department: &'static str,
    pub presenter: &'static str,
    /// Name used in the footer copyright line.
    pub organiser: &'static str,
}
