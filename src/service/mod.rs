use std::sync::Arc;

use crate::{
    auth::{AdminSession, AuthService},
    codec::{self, ImportReport},
    domain::{
        Announcement, CreateEventRequest, CreateTeamMemberRequest, Event, TeamMember,
        UpdateEventRequest, UpdateTeamMemberRequest,
    },
    error::{AppError, Result},
    repository::ContentRepository,
};

/// The authorized caller in front of the repository. Every mutation
/// checks the session gate first; the repository itself never does.
/// Reads and export stay open; they expose nothing the public pages
/// don't already render.
pub struct AdminService {
    repo: ContentRepository,
    auth: Arc<AuthService>,
}

impl AdminService {
    pub fn new(repo: ContentRepository, auth: Arc<AuthService>) -> Self {
        Self { repo, auth }
    }

    // --- Session ---

    pub fn login(&self, secret: &str) -> bool {
        self.auth.login(secret)
    }

    pub fn logout(&self) {
        self.auth.logout()
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    pub fn current_session(&self) -> Option<AdminSession> {
        self.auth.current_session()
    }

    // --- Reads ---

    pub fn repo(&self) -> &ContentRepository {
        &self.repo
    }

    pub fn export_snapshot(&self) -> Result<String> {
        codec::export_snapshot(&self.repo)
    }

    // --- Gated mutations ---

    pub fn add_event(&mut self, request: CreateEventRequest) -> Result<Event> {
        self.ensure_admin()?;
        self.repo.add_event(request)
    }

    pub fn update_event(&mut self, id: &str, update: UpdateEventRequest) -> Result<Event> {
        self.ensure_admin()?;
        self.repo.update_event(id, update)
    }

    pub fn remove_event(&mut self, id: &str) -> Result<bool> {
        self.ensure_admin()?;
        Ok(self.repo.remove_event(id))
    }

    pub fn replace_events(&mut self, events: Vec<Event>) -> Result<()> {
        self.ensure_admin()?;
        self.repo.replace_events(events);
        Ok(())
    }

    pub fn add_team_member(&mut self, request: CreateTeamMemberRequest) -> Result<TeamMember> {
        self.ensure_admin()?;
        Ok(self.repo.add_team_member(request))
    }

    pub fn update_team_member(
        &mut self,
        id: &str,
        update: UpdateTeamMemberRequest,
    ) -> Result<TeamMember> {
        self.ensure_admin()?;
        self.repo.update_team_member(id, update)
    }

    pub fn remove_team_member(&mut self, id: &str) -> Result<bool> {
        self.ensure_admin()?;
        Ok(self.repo.remove_team_member(id))
    }

    pub fn replace_team(&mut self, team: Vec<TeamMember>) -> Result<()> {
        self.ensure_admin()?;
        self.repo.replace_team(team);
        Ok(())
    }

    pub fn save_announcement(&mut self, announcement: Announcement) -> Result<()> {
        self.ensure_admin()?;
        self.repo.save_announcement(announcement)
    }

    pub fn import_snapshot(&mut self, text: &str) -> Result<ImportReport> {
        self.ensure_admin()?;
        codec::import_snapshot(&mut self.repo, text).map_err(AppError::from)
    }

    fn ensure_admin(&self) -> Result<()> {
        if self.auth.is_authenticated() {
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }
}
