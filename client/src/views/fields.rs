//! Per-entity form fields.
//!
//! Text inputs are kept exactly as typed; normalization (tag parsing, blank
//! optionals dropped, date conversion) happens when a payload is built.

use models::params::non_blank;
use models::tags::{join_tags, parse_tags};
use models::{
    Blog, CaseStudy, CreateBlog, CreateCaseStudy, CreateTeam, CreateUser, EntityStatus, Role, Seo, Team,
    TeamSocial, UpdateBlog, UpdateCaseStudy, UpdateTeam, UpdateUser, UserProfile,
};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

use super::form::FormFields;
use crate::services::{Blogs, CaseStudies, Teams, Users};

fn optional(value: &str) -> Option<String> {
    non_blank(Some(value.to_owned()))
}

fn required(value: &str, message: &str, errors: &mut Vec<String>) {
    if value.trim().is_empty() {
        errors.push(message.to_owned());
    }
}

/// Lengths are counted in characters, not bytes.
fn max_len(value: &str, limit: usize, label: &str, errors: &mut Vec<String>) {
    if value.chars().count() > limit {
        errors.push(format!("{label} must be at most {limit} characters"));
    }
}

const TITLE_MAX: usize = 200;
const EXCERPT_MAX: usize = 300;
const META_TITLE_MAX: usize = 70;
const META_DESCRIPTION_MAX: usize = 160;

fn seo_limits(meta_title: &str, meta_description: &str, errors: &mut Vec<String>) {
    max_len(meta_title, META_TITLE_MAX, "Meta title", errors);
    max_len(meta_description, META_DESCRIPTION_MAX, "Meta description", errors);
}

fn seo_from_inputs(title: &str, description: &str, keywords: &str) -> Seo {
    let keywords = parse_tags(keywords);
    Seo {
        meta_title: optional(title),
        meta_description: optional(description),
        meta_keywords: (!keywords.is_empty()).then_some(keywords),
    }
}

/// Warning for a status change outside the documented lifecycle. The change
/// is still sent; the backend decides.
fn transition_warning(from: Option<EntityStatus>, to: EntityStatus) -> Option<String> {
    let from = from?;
    (!from.is_documented_transition(to)).then(|| format!("moving from {from} to {to} skips the usual workflow"))
}

// =============================================================================
// BLOG POSTS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlogFields {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub featured_image: String,
    /// Comma-separated tags as typed.
    pub tags_input: String,
    pub status: EntityStatus,
    pub meta_title: String,
    pub meta_description: String,
    pub meta_keywords_input: String,
    loaded_status: Option<EntityStatus>,
}

impl BlogFields {
    #[must_use]
    pub fn status_warning(&self) -> Option<String> {
        transition_warning(self.loaded_status, self.status)
    }
}

impl FormFields for BlogFields {
    type Resource = Blogs;

    const LOAD_FAILED: &'static str = "Failed to load blog post";
    const SAVE_FAILED: &'static str = "Failed to save blog post";

    fn hydrate(blog: &Blog) -> Self {
        Self {
            title: blog.title.clone(),
            content: blog.content.clone(),
            excerpt: blog.excerpt.clone().unwrap_or_default(),
            featured_image: blog.featured_image.clone().unwrap_or_default(),
            tags_input: join_tags(&blog.tags),
            status: blog.status,
            meta_title: blog.seo.meta_title.clone().unwrap_or_default(),
            meta_description: blog.seo.meta_description.clone().unwrap_or_default(),
            meta_keywords_input: blog.seo.meta_keywords.as_deref().map(join_tags).unwrap_or_default(),
            loaded_status: Some(blog.status),
        }
    }

    fn validate(&self, _editing: bool) -> Vec<String> {
        let mut errors = Vec::new();
        required(&self.title, "Title is required", &mut errors);
        required(&self.content, "Content is required", &mut errors);
        max_len(&self.excerpt, EXCERPT_MAX, "Excerpt", &mut errors);
        seo_limits(&self.meta_title, &self.meta_description, &mut errors);
        errors
    }

    fn create_payload(&self) -> CreateBlog {
        CreateBlog {
            title: self.title.clone(),
            content: self.content.clone(),
            excerpt: optional(&self.excerpt),
            featured_image: optional(&self.featured_image),
            tags: Some(parse_tags(&self.tags_input)),
            status: Some(self.status),
            seo: Some(seo_from_inputs(&self.meta_title, &self.meta_description, &self.meta_keywords_input)),
        }
    }

    fn update_payload(&self) -> UpdateBlog {
        let create = self.create_payload();
        UpdateBlog {
            title: Some(create.title),
            content: Some(create.content),
            excerpt: create.excerpt,
            featured_image: create.featured_image,
            tags: create.tags,
            status: create.status,
            seo: create.seo,
        }
    }
}

// =============================================================================
// CASE STUDIES
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaseStudyFields {
    pub title: String,
    pub description: String,
    pub excerpt: String,
    pub featured_image: String,
    pub tags_input: String,
    pub status: EntityStatus,
    /// `YYYY-MM-DDTHH:MM` (taken as UTC) or a full RFC 3339 timestamp.
    /// Blank leaves the publish time to the server.
    pub published_at_input: String,
    pub meta_title: String,
    pub meta_description: String,
    pub meta_keywords_input: String,
    loaded_status: Option<EntityStatus>,
}

/// Parse the publish-time input. `Ok(None)` for blank input.
fn parse_published_at(input: &str) -> Result<Option<OffsetDateTime>, ()> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    if let Ok(at) = OffsetDateTime::parse(input, &Rfc3339) {
        return Ok(Some(at));
    }
    PrimitiveDateTime::parse(input, format_description!("[year]-[month]-[day]T[hour]:[minute]"))
        .map(|at| Some(at.assume_utc()))
        .map_err(|_| ())
}

fn format_published_at(at: OffsetDateTime) -> String {
    at.to_offset(time::UtcOffset::UTC)
        .format(format_description!("[year]-[month]-[day]T[hour]:[minute]"))
        .unwrap_or_default()
}

impl CaseStudyFields {
    #[must_use]
    pub fn status_warning(&self) -> Option<String> {
        transition_warning(self.loaded_status, self.status)
    }

    fn published_at(&self) -> Option<OffsetDateTime> {
        parse_published_at(&self.published_at_input).ok().flatten()
    }
}

impl FormFields for CaseStudyFields {
    type Resource = CaseStudies;

    const LOAD_FAILED: &'static str = "Failed to load case study";
    const SAVE_FAILED: &'static str = "Failed to save case study";

    fn hydrate(cs: &CaseStudy) -> Self {
        Self {
            title: cs.title.clone(),
            description: cs.description.clone(),
            excerpt: cs.excerpt.clone().unwrap_or_default(),
            featured_image: cs.featured_image.clone().unwrap_or_default(),
            tags_input: join_tags(&cs.tags),
            status: cs.status,
            published_at_input: cs.published_at.map(format_published_at).unwrap_or_default(),
            meta_title: cs.seo.meta_title.clone().unwrap_or_default(),
            meta_description: cs.seo.meta_description.clone().unwrap_or_default(),
            meta_keywords_input: cs.seo.meta_keywords.as_deref().map(join_tags).unwrap_or_default(),
            loaded_status: Some(cs.status),
        }
    }

    fn validate(&self, _editing: bool) -> Vec<String> {
        let mut errors = Vec::new();
        required(&self.title, "Title is required", &mut errors);
        required(&self.description, "Description is required", &mut errors);
        max_len(&self.title, TITLE_MAX, "Title", &mut errors);
        max_len(&self.excerpt, EXCERPT_MAX, "Excerpt", &mut errors);
        seo_limits(&self.meta_title, &self.meta_description, &mut errors);
        if parse_published_at(&self.published_at_input).is_err() {
            errors.push("Published date must look like 2024-01-31T09:30".to_owned());
        }
        errors
    }

    fn create_payload(&self) -> CreateCaseStudy {
        CreateCaseStudy {
            title: self.title.clone(),
            description: self.description.clone(),
            excerpt: optional(&self.excerpt),
            featured_image: optional(&self.featured_image),
            tags: Some(parse_tags(&self.tags_input)),
            status: Some(self.status),
            published_at: self.published_at(),
            seo: Some(seo_from_inputs(&self.meta_title, &self.meta_description, &self.meta_keywords_input)),
        }
    }

    fn update_payload(&self) -> UpdateCaseStudy {
        let create = self.create_payload();
        UpdateCaseStudy {
            title: Some(create.title),
            description: Some(create.description),
            excerpt: create.excerpt,
            featured_image: create.featured_image,
            tags: create.tags,
            status: create.status,
            published_at: create.published_at,
            seo: create.seo,
        }
    }
}

// =============================================================================
// TEAM MEMBERS
// =============================================================================

/// Platforms offered when adding a social link.
pub const SOCIAL_PLATFORMS: [&str; 10] = [
    "facebook", "twitter", "instagram", "linkedin", "github", "youtube", "tiktok", "website", "dribbble",
    "behance",
];

pub const DEFAULT_SOCIAL_PLATFORM: &str = "website";

const NAME_MAX: usize = 100;
const BIO_MAX: usize = 1000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamFields {
    pub name: String,
    pub role: String,
    pub photo: String,
    pub bio: String,
    pub socials: Vec<TeamSocial>,
    pub display_order: i32,
    pub is_active: bool,
}

impl Default for TeamFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            role: String::new(),
            photo: String::new(),
            bio: String::new(),
            socials: Vec::new(),
            display_order: 0,
            is_active: true,
        }
    }
}

impl TeamFields {
    /// Append an empty link row.
    pub fn add_social(&mut self) {
        self.socials.push(TeamSocial { platform: DEFAULT_SOCIAL_PLATFORM.to_owned(), url: String::new() });
    }

    /// Edit row `index`; `None` leaves that part unchanged. Out-of-range
    /// indices are ignored.
    pub fn update_social(&mut self, index: usize, platform: Option<&str>, url: Option<&str>) {
        let Some(social) = self.socials.get_mut(index) else {
            return;
        };
        if let Some(platform) = platform {
            platform.clone_into(&mut social.platform);
        }
        if let Some(url) = url {
            url.clone_into(&mut social.url);
        }
    }

    pub fn remove_social(&mut self, index: usize) {
        if index < self.socials.len() {
            self.socials.remove(index);
        }
    }

    /// Rows worth sending: blank URLs are dropped.
    fn valid_socials(&self) -> Vec<TeamSocial> {
        self.socials.iter().filter(|s| !s.url.trim().is_empty()).cloned().collect()
    }
}

impl FormFields for TeamFields {
    type Resource = Teams;

    const LOAD_FAILED: &'static str = "Failed to load team member";
    const SAVE_FAILED: &'static str = "Failed to save team member";

    fn hydrate(member: &Team) -> Self {
        Self {
            name: member.name.clone(),
            role: member.role.clone(),
            photo: member.photo.clone().unwrap_or_default(),
            bio: member.bio.clone().unwrap_or_default(),
            socials: member.socials.clone(),
            display_order: member.display_order,
            is_active: member.is_active,
        }
    }

    fn validate(&self, _editing: bool) -> Vec<String> {
        let mut errors = Vec::new();
        required(&self.name, "Name is required", &mut errors);
        required(&self.role, "Role is required", &mut errors);
        max_len(&self.name, NAME_MAX, "Name", &mut errors);
        max_len(&self.role, NAME_MAX, "Role", &mut errors);
        max_len(&self.bio, BIO_MAX, "Bio", &mut errors);
        errors
    }

    fn create_payload(&self) -> CreateTeam {
        CreateTeam {
            name: self.name.clone(),
            role: self.role.clone(),
            photo: optional(&self.photo),
            bio: optional(&self.bio),
            socials: Some(self.valid_socials()),
            display_order: Some(self.display_order),
            is_active: Some(self.is_active),
        }
    }

    fn update_payload(&self) -> UpdateTeam {
        let create = self.create_payload();
        UpdateTeam {
            name: Some(create.name),
            role: Some(create.role),
            photo: create.photo,
            bio: create.bio,
            socials: create.socials,
            display_order: create.display_order,
            is_active: create.is_active,
        }
    }
}

// =============================================================================
// USERS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserFields {
    pub name: String,
    pub email: String,
    /// Required on create; on edit, blank keeps the current password.
    pub password: String,
    pub role: Option<Role>,
    pub is_active: bool,
}

impl Default for UserFields {
    fn default() -> Self {
        Self { name: String::new(), email: String::new(), password: String::new(), role: None, is_active: true }
    }
}

impl FormFields for UserFields {
    type Resource = Users;

    const LOAD_FAILED: &'static str = "Failed to load user";
    const SAVE_FAILED: &'static str = "Failed to create user";

    fn save_failed(editing: bool) -> &'static str {
        if editing { "Failed to update user" } else { Self::SAVE_FAILED }
    }

    fn hydrate(user: &UserProfile) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            password: String::new(),
            role: Some(user.role),
            is_active: user.is_active,
        }
    }

    fn validate(&self, editing: bool) -> Vec<String> {
        let mut errors = Vec::new();
        required(&self.name, "Name is required", &mut errors);
        required(&self.email, "Email is required", &mut errors);
        if !editing {
            required(&self.password, "Password is required", &mut errors);
        }
        errors
    }

    fn create_payload(&self) -> CreateUser {
        CreateUser {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role: self.role,
            is_active: Some(self.is_active),
        }
    }

    fn update_payload(&self) -> UpdateUser {
        UpdateUser {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            password: (!self.password.is_empty()).then(|| self.password.clone()),
            avatar: None,
            role: self.role,
            is_active: Some(self.is_active),
        }
    }
}

#[cfg(test)]
#[path = "fields_test.rs"]
mod tests;
