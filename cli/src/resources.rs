//! Entity subcommands: blog posts, case studies, team members and users.
//!
//! Every entity gets `list`, `show`, `create`, `update` and `delete`. Lists
//! go through [`ListView`], edits through [`EntityForm`], so the terminal sees
//! exactly the validation, messages and refetch behaviour of the console
//! screens. `update` loads the record first and only overrides the flags
//! given on the command line.

use clap::{Args, Subcommand};
use client::services::{BlogService, CaseStudyService, Resource, ResourceService, TeamService, UserService};
use client::views::fields::{DEFAULT_SOCIAL_PLATFORM, SOCIAL_PLATFORMS};
use client::views::{BlogFields, CaseStudyFields, EntityForm, FormFields, ListView, TeamFields, UserFields};
use dialoguer::Confirm;
use models::{BlogListParams, CaseStudyListParams, EntityStatus, ListQuery, Role, TeamListParams, UserListParams};
use serde::Serialize;
use serde_json::json;

use crate::console::Console;
use crate::{CliError, print_json};

// =============================================================================
// SHARED ARGUMENTS
// =============================================================================

#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    #[arg(long)]
    pub search: Option<String>,
}

impl PageArgs {
    fn query<Q: ListQuery>(&self, limit: u32) -> Q {
        let mut query = Q::default();
        query.set_limit(limit);
        query.set_page(self.page);
        query.set_search(self.search.clone());
        query
    }
}

#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
    pub id: String,
    /// Skip the confirmation prompt.
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Editable fields of blog posts and case studies. All optional so the same
/// set serves `create` and `update`.
#[derive(Args, Debug, Clone, Default)]
pub struct ContentArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub excerpt: Option<String>,
    #[arg(long)]
    pub featured_image: Option<String>,
    /// Comma-separated.
    #[arg(long)]
    pub tags: Option<String>,
    #[arg(long)]
    pub status: Option<EntityStatus>,
    #[arg(long)]
    pub meta_title: Option<String>,
    #[arg(long)]
    pub meta_description: Option<String>,
    /// Comma-separated.
    #[arg(long)]
    pub meta_keywords: Option<String>,
}

macro_rules! apply_content {
    ($args:expr, $fields:expr) => {{
        let args = $args;
        let fields = $fields;
        set(&mut fields.title, args.title);
        set(&mut fields.excerpt, args.excerpt);
        set(&mut fields.featured_image, args.featured_image);
        set(&mut fields.tags_input, args.tags);
        set(&mut fields.meta_title, args.meta_title);
        set(&mut fields.meta_description, args.meta_description);
        set(&mut fields.meta_keywords_input, args.meta_keywords);
        if let Some(status) = args.status {
            fields.status = status;
        }
    }};
}

fn set(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}

// =============================================================================
// BLOG POSTS
// =============================================================================

#[derive(Args, Debug)]
pub struct BlogCommand {
    #[command(subcommand)]
    pub command: BlogSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BlogSubcommand {
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        status: Option<EntityStatus>,
        #[arg(long)]
        tag: Option<String>,
    },
    Show {
        id: String,
    },
    Create(BlogArgs),
    Update {
        id: String,
        #[command(flatten)]
        fields: BlogArgs,
    },
    Delete(DeleteArgs),
    /// Tag usage counts across all posts.
    Tags,
}

#[derive(Args, Debug, Clone, Default)]
pub struct BlogArgs {
    #[command(flatten)]
    pub content_fields: ContentArgs,
    #[arg(long)]
    pub content: Option<String>,
}

impl BlogArgs {
    pub fn apply(self, fields: &mut BlogFields) {
        set(&mut fields.content, self.content);
        apply_content!(self.content_fields, fields);
    }
}

impl BlogCommand {
    pub fn console_path(&self) -> String {
        match &self.command {
            BlogSubcommand::Create(_) => "/blogs/new".to_owned(),
            BlogSubcommand::Update { id, .. } => format!("/blogs/{id}/edit"),
            _ => "/blogs".to_owned(),
        }
    }
}

pub async fn run_blogs(console: &Console, command: BlogCommand) -> Result<(), CliError> {
    console.require_user().await?;
    let service = BlogService::new(console.api().clone());
    match command.command {
        BlogSubcommand::List { page, status, tag } => {
            let mut query: BlogListParams = page.query(console.config.page_limit);
            query = query.with_tag(tag);
            query.status = status;
            run_list(&service, query).await
        }
        BlogSubcommand::Show { id } => print_json(&service.get(&id).await?),
        BlogSubcommand::Create(args) => {
            let mut form = EntityForm::<BlogFields>::create();
            args.apply(&mut form.fields);
            submit(&service, &mut form).await
        }
        BlogSubcommand::Update { id, fields } => {
            let mut form = open::<BlogFields>(&service, &id).await?;
            fields.apply(&mut form.fields);
            warn_status(form.fields.status_warning());
            submit(&service, &mut form).await
        }
        BlogSubcommand::Delete(args) => run_delete(&service, console.config.page_limit, args).await,
        BlogSubcommand::Tags => print_json(&service.tags().await?),
    }
}

// =============================================================================
// CASE STUDIES
// =============================================================================

#[derive(Args, Debug)]
pub struct CaseStudyCommand {
    #[command(subcommand)]
    pub command: CaseStudySubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CaseStudySubcommand {
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        status: Option<EntityStatus>,
        #[arg(long)]
        tag: Option<String>,
    },
    Show {
        id: String,
    },
    Create(CaseStudyArgs),
    Update {
        id: String,
        #[command(flatten)]
        fields: CaseStudyArgs,
    },
    Delete(DeleteArgs),
    /// Tag usage counts across all case studies.
    Tags,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CaseStudyArgs {
    #[command(flatten)]
    pub content_fields: ContentArgs,
    #[arg(long)]
    pub description: Option<String>,
    /// `2024-01-31T09:30` (UTC) or RFC 3339. Empty clears it.
    #[arg(long)]
    pub published_at: Option<String>,
}

impl CaseStudyArgs {
    pub fn apply(self, fields: &mut CaseStudyFields) {
        set(&mut fields.description, self.description);
        set(&mut fields.published_at_input, self.published_at);
        apply_content!(self.content_fields, fields);
    }
}

impl CaseStudyCommand {
    pub fn console_path(&self) -> String {
        match &self.command {
            CaseStudySubcommand::Create(_) => "/case-studies/new".to_owned(),
            CaseStudySubcommand::Update { id, .. } => format!("/case-studies/{id}/edit"),
            _ => "/case-studies".to_owned(),
        }
    }
}

pub async fn run_case_studies(console: &Console, command: CaseStudyCommand) -> Result<(), CliError> {
    console.require_user().await?;
    let service = CaseStudyService::new(console.api().clone());
    match command.command {
        CaseStudySubcommand::List { page, status, tag } => {
            let mut query: CaseStudyListParams = page.query(console.config.page_limit);
            query = query.with_tag(tag);
            query.status = status;
            run_list(&service, query).await
        }
        CaseStudySubcommand::Show { id } => print_json(&service.get(&id).await?),
        CaseStudySubcommand::Create(args) => {
            let mut form = EntityForm::<CaseStudyFields>::create();
            args.apply(&mut form.fields);
            submit(&service, &mut form).await
        }
        CaseStudySubcommand::Update { id, fields } => {
            let mut form = open::<CaseStudyFields>(&service, &id).await?;
            fields.apply(&mut form.fields);
            warn_status(form.fields.status_warning());
            submit(&service, &mut form).await
        }
        CaseStudySubcommand::Delete(args) => run_delete(&service, console.config.page_limit, args).await,
        CaseStudySubcommand::Tags => print_json(&service.tags().await?),
    }
}

// =============================================================================
// TEAM MEMBERS
// =============================================================================

#[derive(Args, Debug)]
pub struct TeamCommand {
    #[command(subcommand)]
    pub command: TeamSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TeamSubcommand {
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        active: Option<bool>,
    },
    Show {
        id: String,
    },
    Create(TeamArgs),
    Update {
        id: String,
        #[command(flatten)]
        fields: TeamArgs,
    },
    Delete(DeleteArgs),
    /// Save a new display order; ids front to back.
    Reorder {
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct TeamArgs {
    #[arg(long)]
    pub name: Option<String>,
    /// Job title shown on the site.
    #[arg(long)]
    pub role: Option<String>,
    #[arg(long)]
    pub photo: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
    #[arg(long)]
    pub display_order: Option<i32>,
    #[arg(long)]
    pub active: Option<bool>,
    /// `platform=url` or a bare URL; repeatable.
    #[arg(long = "social", value_parser = parse_social)]
    pub socials: Vec<(String, String)>,
    /// Drop existing links before adding `--social` ones.
    #[arg(long)]
    pub clear_socials: bool,
}

impl TeamArgs {
    pub fn apply(self, fields: &mut TeamFields) {
        set(&mut fields.name, self.name);
        set(&mut fields.role, self.role);
        set(&mut fields.photo, self.photo);
        set(&mut fields.bio, self.bio);
        if let Some(order) = self.display_order {
            fields.display_order = order;
        }
        if let Some(active) = self.active {
            fields.is_active = active;
        }
        if self.clear_socials {
            while !fields.socials.is_empty() {
                fields.remove_social(0);
            }
        }
        for (platform, url) in self.socials {
            fields.add_social();
            let index = fields.socials.len() - 1;
            fields.update_social(index, Some(&platform), Some(&url));
        }
    }
}

/// Parse a `--social` value. A bare URL is filed under the default platform.
pub fn parse_social(raw: &str) -> Result<(String, String), String> {
    let Some((platform, url)) = raw.split_once('=') else {
        return Ok((DEFAULT_SOCIAL_PLATFORM.to_owned(), raw.trim().to_owned()));
    };
    let platform = platform.trim().to_ascii_lowercase();
    if !SOCIAL_PLATFORMS.contains(&platform.as_str()) {
        return Err(format!("unknown platform `{platform}` (expected one of {})", SOCIAL_PLATFORMS.join(", ")));
    }
    Ok((platform, url.trim().to_owned()))
}

impl TeamCommand {
    pub fn console_path(&self) -> String {
        match &self.command {
            TeamSubcommand::Create(_) => "/teams/new".to_owned(),
            TeamSubcommand::Update { id, .. } => format!("/teams/{id}/edit"),
            _ => "/teams".to_owned(),
        }
    }
}

pub async fn run_teams(console: &Console, command: TeamCommand) -> Result<(), CliError> {
    console.require_user().await?;
    let service = TeamService::new(console.api().clone());
    match command.command {
        TeamSubcommand::List { page, active } => {
            let mut query: TeamListParams = page.query(console.config.page_limit);
            query.is_active = active;
            run_list(&service, query).await
        }
        TeamSubcommand::Show { id } => print_json(&service.get(&id).await?),
        TeamSubcommand::Create(args) => {
            let mut form = EntityForm::<TeamFields>::create();
            args.apply(&mut form.fields);
            submit(&service, &mut form).await
        }
        TeamSubcommand::Update { id, fields } => {
            let mut form = open::<TeamFields>(&service, &id).await?;
            fields.apply(&mut form.fields);
            submit(&service, &mut form).await
        }
        TeamSubcommand::Delete(args) => run_delete(&service, console.config.page_limit, args).await,
        TeamSubcommand::Reorder { ids } => {
            let count = ids.len();
            service.reorder(ids).await?;
            eprintln!("reordered {count} team members");
            Ok(())
        }
    }
}

// =============================================================================
// USERS
// =============================================================================

#[derive(Args, Debug)]
pub struct UserCommand {
    #[command(subcommand)]
    pub command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UserSubcommand {
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        role: Option<Role>,
        #[arg(long)]
        active: Option<bool>,
    },
    Show {
        id: String,
    },
    Create(UserArgs),
    Update {
        id: String,
        #[command(flatten)]
        fields: UserArgs,
    },
    Delete(DeleteArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct UserArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// Required on create; on update only sent when given.
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub role: Option<Role>,
    #[arg(long)]
    pub active: Option<bool>,
}

impl UserArgs {
    pub fn apply(self, fields: &mut UserFields) {
        set(&mut fields.name, self.name);
        set(&mut fields.email, self.email);
        set(&mut fields.password, self.password);
        if self.role.is_some() {
            fields.role = self.role;
        }
        if let Some(active) = self.active {
            fields.is_active = active;
        }
    }
}

impl UserCommand {
    pub fn console_path(&self) -> String {
        match &self.command {
            UserSubcommand::Create(_) => "/users/new".to_owned(),
            UserSubcommand::Update { id, .. } => format!("/users/{id}/edit"),
            _ => "/users".to_owned(),
        }
    }
}

pub async fn run_users(console: &Console, command: UserCommand) -> Result<(), CliError> {
    console.require_user().await?;
    let service = UserService::new(console.api().clone());
    match command.command {
        UserSubcommand::List { page, role, active } => {
            let mut query: UserListParams = page.query(console.config.page_limit);
            query.role = role;
            query.is_active = active;
            run_list(&service, query).await
        }
        UserSubcommand::Show { id } => print_json(&service.get(&id).await?),
        UserSubcommand::Create(args) => {
            let mut form = EntityForm::<UserFields>::create();
            args.apply(&mut form.fields);
            submit(&service, &mut form).await
        }
        UserSubcommand::Update { id, fields } => {
            let mut form = open::<UserFields>(&service, &id).await?;
            fields.apply(&mut form.fields);
            submit(&service, &mut form).await
        }
        UserSubcommand::Delete(args) => run_delete(&service, console.config.page_limit, args).await,
    }
}

// =============================================================================
// GENERIC FLOWS
// =============================================================================

async fn run_list<R: Resource>(service: &ResourceService<R>, query: R::Query) -> Result<(), CliError>
where
    R::Item: Serialize,
{
    let mut view = ListView::<R>::with_query(query);
    view.refresh(service).await;
    if let Some(error) = view.error() {
        return Err(CliError::Failed(error.to_owned()));
    }
    let pagination = view.pagination();
    print_json(&json!({
        "data": view.items(),
        "pagination": {
            "page": pagination.page,
            "pages": pagination.pages,
            "total": pagination.total,
            "limit": pagination.limit,
            "hasNext": pagination.has_next(),
            "hasPrev": pagination.has_prev(),
        },
    }))
}

async fn open<F: FormFields>(service: &ResourceService<F::Resource>, id: &str) -> Result<EntityForm<F>, CliError> {
    let form = EntityForm::<F>::edit(service, id).await;
    if !form.errors().is_empty() {
        return Err(CliError::Failed(form.errors().join("; ")));
    }
    Ok(form)
}

async fn submit<F: FormFields>(service: &ResourceService<F::Resource>, form: &mut EntityForm<F>) -> Result<(), CliError>
where
    <F::Resource as Resource>::Item: Serialize,
{
    match form.submit(service).await {
        Some(item) => print_json(&item),
        None => Err(CliError::Failed(form.errors().join("; "))),
    }
}

fn warn_status(warning: Option<String>) {
    if let Some(warning) = warning {
        eprintln!("warning: {warning}");
    }
}

async fn run_delete<R: Resource>(service: &ResourceService<R>, limit: u32, args: DeleteArgs) -> Result<(), CliError> {
    let mut view = ListView::<R>::new(limit);
    view.request_delete(&args.id);

    let confirmed = args.yes
        || Confirm::new()
            .with_prompt(format!("Delete {} {}? This cannot be undone.", R::NOUN, args.id))
            .default(false)
            .interact()?;
    if !confirmed {
        view.cancel_delete();
        eprintln!("cancelled");
        return Ok(());
    }

    if !view.confirm_delete(service).await {
        return Err(CliError::Failed(view.error().unwrap_or("delete failed").to_owned()));
    }
    eprintln!("deleted {} {}", R::NOUN, args.id);
    Ok(())
}

#[cfg(test)]
#[path = "resources_test.rs"]
mod tests;
