//! Create/edit form state shared by every entity.
//!
//! A form is a flat set of fields ([`FormFields`]) plus the bookkeeping
//! around it: whether it edits an existing record, the error list shown above
//! the form, and the submitting/loading flags. Fields stay populated after a
//! failed submit so the user can correct them.

use crate::services::{Resource, ResourceService};

type Item<F> = <<F as FormFields>::Resource as Resource>::Item;
type Create<F> = <<F as FormFields>::Resource as Resource>::Create;
type Update<F> = <<F as FormFields>::Resource as Resource>::Update;

/// Editable attributes of one entity and how they map to payloads.
pub trait FormFields: Default + Send {
    type Resource: Resource;

    /// Shown when a record cannot be loaded for editing.
    const LOAD_FAILED: &'static str;
    /// Shown when a save fails without a usable server message.
    const SAVE_FAILED: &'static str;

    /// Fallback for a failed save; `editing` is true for updates.
    fn save_failed(_editing: bool) -> &'static str {
        Self::SAVE_FAILED
    }

    fn hydrate(item: &Item<Self>) -> Self;

    /// Required-field checks run before any request. Empty means valid.
    fn validate(&self, editing: bool) -> Vec<String>;

    fn create_payload(&self) -> Create<Self>;
    fn update_payload(&self) -> Update<Self>;
}

#[derive(Debug)]
pub struct EntityForm<F: FormFields> {
    pub fields: F,
    editing: Option<String>,
    errors: Vec<String>,
    submitting: bool,
    loading: bool,
}

impl<F: FormFields> Default for EntityForm<F> {
    fn default() -> Self {
        Self::create()
    }
}

impl<F: FormFields> EntityForm<F> {
    /// Blank form for a new record.
    #[must_use]
    pub fn create() -> Self {
        Self { fields: F::default(), editing: None, errors: Vec::new(), submitting: false, loading: false }
    }

    /// Form for record `id`, hydrated from the service. On failure the form
    /// stays blank and shows the load error.
    pub async fn edit(service: &ResourceService<F::Resource>, id: &str) -> Self {
        let mut form = Self { editing: Some(id.to_owned()), loading: true, ..Self::create() };
        match service.get(id).await {
            Ok(item) => form.fields = F::hydrate(&item),
            Err(e) => {
                tracing::debug!(id, error = %e, "form: load failed");
                form.errors = vec![F::LOAD_FAILED.to_owned()];
            }
        }
        form.loading = false;
        form
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    #[must_use]
    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    #[must_use]
    pub fn submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Validate, then send one create or update request. Returns the saved
    /// record, or `None` with [`Self::errors`] populated.
    pub async fn submit(&mut self, service: &ResourceService<F::Resource>) -> Option<Item<F>> {
        self.errors = self.fields.validate(self.is_editing());
        if !self.errors.is_empty() {
            return None;
        }

        self.submitting = true;
        let result = match &self.editing {
            Some(id) => service.update(id, &self.fields.update_payload()).await,
            None => service.create(&self.fields.create_payload()).await,
        };
        self.submitting = false;

        match result {
            Ok(item) => Some(item),
            Err(e) => {
                self.errors = e.user_messages(F::save_failed(self.is_editing()));
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;
