use crate::schema::users;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Queryable, Selectable, Insertable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
    pub role: String,
    pub phone: String,
}

/// Body of `POST /users` and `PUT /users/{id}`; every column but the id.
#[derive(Debug, Clone, Deserialize, Insertable, AsChangeset)]
#[diesel(table_name = users)]
#[serde(deny_unknown_fields)]
pub struct UserBody {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
    pub role: String,
    pub phone: String,
}
