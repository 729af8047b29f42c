use std::sync::Arc;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    domain::{
        Announcement, BlogPost, CreateEventRequest, CreateTeamMemberRequest, Event, EventStatus,
        TeamMember, UpdateEventRequest, UpdateTeamMemberRequest,
    },
    error::{AppError, Result},
    seed,
    storage::{KeyValueStore, StorageKeys},
};

/// Banner used when an event is created without an image URL.
const FALLBACK_EVENT_IMAGE: &str =
    "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=800&h=600&fit=crop";

/// How a collection was populated at load time. Corrupt persisted values
/// are absorbed here, never surfaced to the caller: a bad snapshot must
/// not take the site down, it just costs the overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Persisted value present and readable; it replaced the defaults.
    Loaded,
    /// Nothing persisted under the key; compiled-in defaults in use.
    Defaults,
    /// Persisted value present but unusable; defaults in use.
    FellBack(String),
}

#[derive(Debug, Clone)]
pub struct LoadReport {
    pub events: LoadOutcome,
    pub team: LoadOutcome,
    pub announcement: LoadOutcome,
}

/// Single source of truth for the site's content within a process
/// lifetime. Collections live in memory; every mutation re-persists the
/// affected collection through the key-value store before returning.
///
/// The repository performs no authorization checks. Gating writes behind
/// an admin session is the caller's job (see `service::AdminService`).
pub struct ContentRepository {
    store: Arc<dyn KeyValueStore>,
    keys: StorageKeys,
    events: Vec<Event>,
    team: Vec<TeamMember>,
    announcement: Announcement,
    blog_posts: Vec<BlogPost>,
    load_report: LoadReport,
}

impl ContentRepository {
    /// Seeds each collection from the compiled-in defaults, then overlays
    /// whatever the store has persisted, when it is readable.
    pub fn open(store: Arc<dyn KeyValueStore>, keys: StorageKeys) -> Self {
        let (events, events_outcome) =
            load_collection(store.as_ref(), &keys.events, seed::default_events());
        let (team, team_outcome) =
            load_collection(store.as_ref(), &keys.team, seed::default_team());
        let (announcement, announcement_outcome) =
            load_value(store.as_ref(), &keys.announcement, seed::default_announcement());

        Self {
            store,
            keys,
            events,
            team,
            announcement,
            blog_posts: seed::default_blog_posts(),
            load_report: LoadReport {
                events: events_outcome,
                team: team_outcome,
                announcement: announcement_outcome,
            },
        }
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    // --- Events ---

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// All events, or only those matching `status`, in insertion order.
    pub fn list_events(&self, status: Option<EventStatus>) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| status.map_or(true, |s| e.status == s))
            .cloned()
            .collect()
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn add_event(&mut self, request: CreateEventRequest) -> Result<Event> {
        validate_event_fields(&request.title, &request.date, &request.description)?;

        let event = Event {
            id: self.fresh_event_id(),
            title: request.title,
            date: request.date,
            description: request.description,
            image_url: if request.image_url.trim().is_empty() {
                FALLBACK_EVENT_IMAGE.to_string()
            } else {
                request.image_url
            },
            category: request.category,
            status: request.status,
            location: request.location,
            registration_url: request.registration_url,
            tags: request.tags,
            gallery_images: request.gallery_images,
        };

        self.events.push(event.clone());
        self.persist_events();
        Ok(event)
    }

    pub fn update_event(&mut self, id: &str, update: UpdateEventRequest) -> Result<Event> {
        let index = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Event not found: {id}")))?;

        // Validate the merged record before touching the collection.
        let current = &self.events[index];
        let title = update.title.as_deref().unwrap_or(&current.title);
        let date = update.date.as_deref().unwrap_or(&current.date);
        let description = update.description.as_deref().unwrap_or(&current.description);
        validate_event_fields(title, date, description)?;

        let event = &mut self.events[index];
        if let Some(title) = update.title {
            event.title = title;
        }
        if let Some(date) = update.date {
            event.date = date;
        }
        if let Some(description) = update.description {
            event.description = description;
        }
        if let Some(image_url) = update.image_url {
            event.image_url = image_url;
        }
        if let Some(category) = update.category {
            event.category = category;
        }
        if let Some(status) = update.status {
            event.status = status;
        }
        if let Some(location) = update.location {
            event.location = Some(location);
        }
        if let Some(registration_url) = update.registration_url {
            event.registration_url = Some(registration_url);
        }
        if let Some(tags) = update.tags {
            event.tags = tags;
        }
        if let Some(gallery_images) = update.gallery_images {
            event.gallery_images = gallery_images;
        }

        let updated = event.clone();
        self.persist_events();
        Ok(updated)
    }

    /// Removes the event with the given id. Missing ids are a no-op:
    /// returns false and nothing is persisted.
    pub fn remove_event(&mut self, id: &str) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        let removed = self.events.len() != before;
        if removed {
            self.persist_events();
        }
        removed
    }

    /// Wholesale swap, used by the snapshot codec after validation and by
    /// the admin "save all" flow. No per-record merging.
    pub fn replace_events(&mut self, events: Vec<Event>) {
        self.events = events;
        self.persist_events();
    }

    // --- Team ---

    pub fn team(&self) -> &[TeamMember] {
        &self.team
    }

    pub fn team_member(&self, id: &str) -> Option<&TeamMember> {
        self.team.iter().find(|m| m.id == id)
    }

    /// Appends a member. Fields may be blank: the admin panel adds empty
    /// rows that get filled in afterwards.
    pub fn add_team_member(&mut self, request: CreateTeamMemberRequest) -> TeamMember {
        let member = TeamMember {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            designation: request.designation,
            photo_url: request.photo_url,
            linkedin_url: request.linkedin_url,
            email: request.email,
            bio: request.bio,
        };
        self.team.push(member.clone());
        self.persist_team();
        member
    }

    pub fn update_team_member(
        &mut self,
        id: &str,
        update: UpdateTeamMemberRequest,
    ) -> Result<TeamMember> {
        let member = self
            .team
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Team member not found: {id}")))?;

        if let Some(name) = update.name {
            member.name = name;
        }
        if let Some(designation) = update.designation {
            member.designation = designation;
        }
        if let Some(photo_url) = update.photo_url {
            member.photo_url = photo_url;
        }
        if let Some(linkedin_url) = update.linkedin_url {
            member.linkedin_url = linkedin_url;
        }
        if let Some(email) = update.email {
            member.email = email;
        }
        if let Some(bio) = update.bio {
            member.bio = bio;
        }

        let updated = member.clone();
        self.persist_team();
        Ok(updated)
    }

    pub fn remove_team_member(&mut self, id: &str) -> bool {
        let before = self.team.len();
        self.team.retain(|m| m.id != id);
        let removed = self.team.len() != before;
        if removed {
            self.persist_team();
        }
        removed
    }

    pub fn replace_team(&mut self, team: Vec<TeamMember>) {
        self.team = team;
        self.persist_team();
    }

    // --- Announcement ---

    pub fn announcement(&self) -> &Announcement {
        &self.announcement
    }

    pub fn save_announcement(&mut self, announcement: Announcement) -> Result<()> {
        if announcement.message.trim().is_empty() {
            return Err(AppError::Validation(
                "Announcement message must not be empty".to_string(),
            ));
        }
        self.announcement = announcement;
        self.persist_announcement();
        Ok(())
    }

    pub fn replace_announcement(&mut self, announcement: Announcement) {
        self.announcement = announcement;
        self.persist_announcement();
    }

    // --- Blog ---

    /// Compiled-in posts; there is no mutation path for these.
    pub fn blog_posts(&self) -> &[BlogPost] {
        &self.blog_posts
    }

    // --- Persistence ---

    fn persist_events(&self) {
        persist(self.store.as_ref(), &self.keys.events, &self.events);
    }

    fn persist_team(&self) {
        persist(self.store.as_ref(), &self.keys.team, &self.team);
    }

    fn persist_announcement(&self) {
        persist(self.store.as_ref(), &self.keys.announcement, &self.announcement);
    }

    fn fresh_event_id(&self) -> String {
        // UUIDs don't collide in practice, but the id contract is
        // collision-freedom within the collection, so check anyway.
        loop {
            let id = Uuid::new_v4().to_string();
            if self.event(&id).is_none() {
                return id;
            }
        }
    }
}

fn validate_event_fields(title: &str, date: &str, description: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(AppError::Validation("Event title must not be empty".to_string()));
    }
    if date.trim().is_empty() {
        return Err(AppError::Validation("Event date must not be empty".to_string()));
    }
    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(AppError::Validation(format!(
            "Event date must be a calendar date (YYYY-MM-DD): {date}"
        )));
    }
    if description.trim().is_empty() {
        return Err(AppError::Validation(
            "Event description must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn load_collection<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
    defaults: Vec<T>,
) -> (Vec<T>, LoadOutcome) {
    match store.get(key) {
        None => (defaults, LoadOutcome::Defaults),
        Some(raw) => match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(items) => (items, LoadOutcome::Loaded),
            Err(e) => {
                tracing::warn!(key, error = %e, "persisted collection unreadable, using defaults");
                (defaults, LoadOutcome::FellBack(e.to_string()))
            }
        },
    }
}

fn load_value<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
    default: T,
) -> (T, LoadOutcome) {
    match store.get(key) {
        None => (default, LoadOutcome::Defaults),
        Some(raw) => match serde_json::from_str::<T>(&raw) {
            Ok(value) => (value, LoadOutcome::Loaded),
            Err(e) => {
                tracing::warn!(key, error = %e, "persisted value unreadable, using default");
                (default, LoadOutcome::FellBack(e.to_string()))
            }
        },
    }
}

fn persist<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => {
            store.set(key, &raw);
            tracing::debug!(key, "persisted collection");
        }
        Err(e) => tracing::error!(key, error = %e, "failed to serialize collection"),
    }
}
