use models::endpoints::{self, CASE_STUDIES};
use models::{ApiResponse, CaseStudy, CaseStudyListParams, CreateCaseStudy, TagCount, UpdateCaseStudy};

use super::{Resource, ResourceService};
use crate::error::ApiError;

#[derive(Debug, Clone, Copy)]
pub struct CaseStudies;

impl Resource for CaseStudies {
    type Item = CaseStudy;
    type Create = CreateCaseStudy;
    type Update = UpdateCaseStudy;
    type Query = CaseStudyListParams;

    const BASE: &'static str = CASE_STUDIES;
    const NOUN: &'static str = "case study";
    const PLURAL: &'static str = "case studies";

    fn id(item: &CaseStudy) -> &str {
        &item.id
    }
}

pub type CaseStudyService = ResourceService<CaseStudies>;

impl ResourceService<CaseStudies> {
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn tags(&self) -> Result<Vec<TagCount>, ApiError> {
        let body: ApiResponse<Vec<TagCount>> = self.api().get(&endpoints::tags(CASE_STUDIES)).await?;
        Ok(body.data)
    }
}
