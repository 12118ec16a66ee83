use models::endpoints::{self, BLOGS};
use models::{ApiResponse, Blog, BlogListParams, CreateBlog, TagCount, UpdateBlog};

use super::{Resource, ResourceService};
use crate::error::ApiError;

#[derive(Debug, Clone, Copy)]
pub struct Blogs;

impl Resource for Blogs {
    type Item = Blog;
    type Create = CreateBlog;
    type Update = UpdateBlog;
    type Query = BlogListParams;

    const BASE: &'static str = BLOGS;
    const NOUN: &'static str = "blog";
    const PLURAL: &'static str = "blogs";

    fn id(item: &Blog) -> &str {
        &item.id
    }
}

pub type BlogService = ResourceService<Blogs>;

impl ResourceService<Blogs> {
    /// Tag usage counts across all posts.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn tags(&self) -> Result<Vec<TagCount>, ApiError> {
        let body: ApiResponse<Vec<TagCount>> = self.api().get(&endpoints::tags(BLOGS)).await?;
        Ok(body.data)
    }
}
