use crate::db::DbPool;
use crate::errors::custom::CustomError;
use crate::models::user::{User, UserBody};
use crate::schema::users::dsl as user_dsl;
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use diesel::prelude::*;
use tracing::instrument;

/******************************************/
// Listing Users route
/******************************************/
/**
 * @route   GET /users
 * @access  Public
 */
#[instrument(name = "List users", skip(pool))]
pub async fn list_users(pool: web::Data<DbPool>) -> Result<HttpResponse, CustomError> {
    let users = web::block(move || {
        let mut conn = pool.get()?;
        let users = user_dsl::users
            .select(User::as_select())
            .order(user_dsl::id)
            .load(&mut conn)?;
        Ok::<_, CustomError>(users)
    })
    .await??;

    Ok(HttpResponse::Ok().json(users))
}

/******************************************/
// New User Creation route
/******************************************/
/**
 * @route   POST /users
 * @access  Public
 */
#[instrument(name = "Create new user", skip(pool, req_user), fields(email = %req_user.email))]
pub async fn create_user(
    pool: web::Data<DbPool>,
    req_user: web::Json<UserBody>,
) -> Result<HttpResponse, CustomError> {
    let user_data = req_user.into_inner();
    let user = web::block(move || {
        let mut conn = pool.get()?;
        let user = diesel::insert_into(user_dsl::users)
            .values(&user_data)
            .returning(User::as_returning())
            .get_result(&mut conn)?;
        Ok::<_, CustomError>(user)
    })
    .await??;

    tracing::info!(user_id = user.id, "User created");
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/users/{}", user.id)))
        .finish())
}

/******************************************/
// Reteriving User using id
/******************************************/
/**
 * @route   GET /users/{id}
 * @access  Public
 */
#[instrument(name = "Get user", skip(pool))]
pub async fn get_user(
    pool: web::Data<DbPool>,
    user_id: web::Path<i32>,
) -> Result<HttpResponse, CustomError> {
    let user_id = user_id.into_inner();
    let user = web::block(move || {
        let mut conn = pool.get()?;
        let user = user_dsl::users
            .find(user_id)
            .select(User::as_select())
            .first(&mut conn)
            .optional()?;
        Ok::<_, CustomError>(user)
    })
    .await??
    .ok_or_else(|| CustomError::not_found("User", user_id))?;

    Ok(HttpResponse::Ok().json(user))
}

/******************************************/
// Replacing User fields route
/******************************************/
/**
 * @route   PUT /users/{id}
 * @access  Public
 */
#[instrument(name = "Update user", skip(pool, req_user))]
pub async fn update_user(
    pool: web::Data<DbPool>,
    user_id: web::Path<i32>,
    req_user: web::Json<UserBody>,
) -> Result<HttpResponse, CustomError> {
    let user_id = user_id.into_inner();
    let user_data = req_user.into_inner();
    let updated = web::block(move || {
        let mut conn = pool.get()?;
        let updated = diesel::update(user_dsl::users.find(user_id))
            .set(&user_data)
            .execute(&mut conn)?;
        Ok::<_, CustomError>(updated)
    })
    .await??;

    if updated == 0 {
        return Err(CustomError::not_found("User", user_id));
    }
    Ok(HttpResponse::NoContent().finish())
}

/******************************************/
// Deleting User route
/******************************************/
/**
 * @route   DELETE /users/{id}
 * @access  Public
 */
#[instrument(name = "Delete user", skip(pool))]
pub async fn delete_user(
    pool: web::Data<DbPool>,
    user_id: web::Path<i32>,
) -> Result<HttpResponse, CustomError> {
    let user_id = user_id.into_inner();
    let deleted = web::block(move || {
        let mut conn = pool.get()?;
        let deleted = diesel::delete(user_dsl::users.find(user_id)).execute(&mut conn)?;
        Ok::<_, CustomError>(deleted)
    })
    .await??;

    if deleted == 0 {
        return Err(CustomError::not_found("User", user_id));
    }
    Ok(HttpResponse::NoContent().finish())
}
