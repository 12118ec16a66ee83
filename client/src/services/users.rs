use models::endpoints::USERS;
use models::{CreateUser, UpdateUser, UserListParams, UserProfile};

use super::{Resource, ResourceService};

#[derive(Debug, Clone, Copy)]
pub struct Users;

impl Resource for Users {
    type Item = UserProfile;
    type Create = CreateUser;
    type Update = UpdateUser;
    type Query = UserListParams;

    const BASE: &'static str = USERS;
    const NOUN: &'static str = "user";
    const PLURAL: &'static str = "users";

    fn id(item: &UserProfile) -> &str {
        &item.id
    }
}

pub type UserService = ResourceService<Users>;
