use serde::{Deserialize, Serialize};

/// A chapter event as rendered on the public pages and edited in the
/// admin panel. Field names follow the site's JSON wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    /// ISO-8601 calendar date, e.g. "2025-03-15".
    pub date: String,
    pub description: String,
    pub image_url: String,
    pub category: EventCategory,
    pub status: EventStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub gallery_images: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Workshop,
    Talk,
    Competition,
    Networking,
    Exhibition,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Workshop => "workshop",
            EventCategory::Talk => "talk",
            EventCategory::Competition => "competition",
            EventCategory::Networking => "networking",
            EventCategory::Exhibition => "exhibition",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "workshop" => Some(EventCategory::Workshop),
            "talk" => Some(EventCategory::Talk),
            "competition" => Some(EventCategory::Competition),
            "networking" => Some(EventCategory::Networking),
            "exhibition" => Some(EventCategory::Exhibition),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Past,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Past => "past",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "upcoming" => Some(EventStatus::Upcoming),
            "past" => Some(EventStatus::Past),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub date: String,
    pub description: String,
    pub image_url: String,
    pub category: EventCategory,
    pub status: EventStatus,
    pub location: Option<String>,
    pub registration_url: Option<String>,
    pub tags: Vec<String>,
    pub gallery_images: Vec<String>,
}

impl Default for CreateEventRequest {
    fn default() -> Self {
        Self {
            title: String::new(),
            date: String::new(),
            description: String::new(),
            image_url: String::new(),
            category: EventCategory::Workshop,
            status: EventStatus::Upcoming,
            location: None,
            registration_url: None,
            tags: Vec::new(),
            gallery_images: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<EventCategory>,
    pub status: Option<EventStatus>,
    pub location: Option<String>,
    pub registration_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub gallery_images: Option<Vec<String>>,
}
