//! User Admin Endpoints

use super::{ApiClient, Transport};
use crate::error::{ConsoleError, ConsoleResult};
use crate::models::{ActionResponse, ListEnvelope, NewUser, User};

pub const USERS: &str = "/api/users";
/// Create with `POST`, delete with `DELETE {ADMIN_USERS}/{id}`
pub const ADMIN_USERS: &str = "/api/admin/users";

pub async fn list_users<T: Transport>(client: &ApiClient<T>) -> ConsoleResult<Vec<User>> {
    let envelope: ListEnvelope<User> = client.get_json(USERS).await?;
    Ok(envelope.into_vec())
}

pub async fn create_user<T: Transport>(client: &ApiClient<T>, user: &NewUser) -> ConsoleResult<Option<String>> {
    if user.username.trim().is_empty() || user.password.is_empty() {
        return Err(ConsoleError::validation("Username and password are required"));
    }
    let resp: ActionResponse = client.post_json(ADMIN_USERS, user).await?;
    resp.into_result().map_err(ConsoleError::validation)
}

pub async fn delete_user<T: Transport>(client: &ApiClient<T>, id: u64) -> ConsoleResult<Option<String>> {
    let resp: ActionResponse = client.delete_json(&format!("{}/{}", ADMIN_USERS, id)).await?;
    resp.into_result().map_err(ConsoleError::validation)
}
