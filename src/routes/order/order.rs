use crate::db::DbPool;
use crate::errors::custom::CustomError;
use crate::models::order::{Order, OrderBody};
use crate::schema::orders::dsl as order_dsl;
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use diesel::prelude::*;
use tracing::instrument;

/******************************************/
// Listing Orders route
/******************************************/
/**
 * @route   GET /orders
 * @access  Public
 */
#[instrument(name = "List orders", skip(pool))]
pub async fn list_orders(pool: web::Data<DbPool>) -> Result<HttpResponse, CustomError> {
    let orders = web::block(move || {
        let mut conn = pool.get()?;
        let orders = order_dsl::orders
            .select(Order::as_select())
            .order(order_dsl::id)
            .load(&mut conn)?;
        Ok::<_, CustomError>(orders)
    })
    .await??;

    Ok(HttpResponse::Ok().json(orders))
}

/******************************************/
// New Order Creation route
/******************************************/
/**
 * @route   POST /orders
 * @access  Public
 */
#[instrument(name = "Create new order", skip(pool, req_order), fields(name = %req_order.name))]
pub async fn create_order(
    pool: web::Data<DbPool>,
    req_order: web::Json<OrderBody>,
) -> Result<HttpResponse, CustomError> {
    let order_data = req_order.into_inner();
    let order = web::block(move || {
        let mut conn = pool.get()?;
        let order = diesel::insert_into(order_dsl::orders)
            .values(&order_data)
            .returning(Order::as_returning())
            .get_result(&mut conn)?;
        Ok::<_, CustomError>(order)
    })
    .await??;

    tracing::info!(order_id = order.id, "Order created");
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/orders/{}", order.id)))
        .finish())
}

/******************************************/
// Reteriving Order using id
/******************************************/
/**
 * @route   GET /orders/{id}
 * @access  Public
 */
#[instrument(name = "Get order", skip(pool))]
pub async fn get_order(
    pool: web::Data<DbPool>,
    order_id: web::Path<i32>,
) -> Result<HttpResponse, CustomError> {
    let order_id = order_id.into_inner();
    let order = web::block(move || {
        let mut conn = pool.get()?;
        let order = order_dsl::orders
            .find(order_id)
            .select(Order::as_select())
            .first(&mut conn)
            .optional()?;
        Ok::<_, CustomError>(order)
    })
    .await??
    .ok_or_else(|| CustomError::not_found("Order", order_id))?;

    Ok(HttpResponse::Ok().json(order))
}

/******************************************/
// Replacing Order fields route
/******************************************/
/**
 * @route   PUT /orders/{id}
 * @access  Public
 *
 * Dates must be `YYYY-MM-DD`.
 */
#[instrument(name = "Update order", skip(pool, req_order))]
pub async fn update_order(
    pool: web::Data<DbPool>,
    order_id: web::Path<i32>,
    req_order: web::Json<OrderBody>,
) -> Result<HttpResponse, CustomError> {
    let order_id = order_id.into_inner();
    let order_data = req_order.into_inner();
    let updated = web::block(move || {
        let mut conn = pool.get()?;
        let updated = diesel::update(order_dsl::orders.find(order_id))
            .set(&order_data)
            .execute(&mut conn)?;
        Ok::<_, CustomError>(updated)
    })
    .await??;

    if updated == 0 {
        return Err(CustomError::not_found("Order", order_id));
    }
    Ok(HttpResponse::NoContent().finish())
}

/******************************************/
// Deleting Order route
/******************************************/
/**
 * @route   DELETE /orders/{id}
 * @access  Public
 */
#[instrument(name = "Delete order", skip(pool))]
pub async fn delete_order(
    pool: web::Data<DbPool>,
    order_id: web::Path<i32>,
) -> Result<HttpResponse, CustomError> {
    let order_id = order_id.into_inner();
    let deleted = web::block(move || {
        let mut conn = pool.get()?;
        let deleted = diesel::delete(order_dsl::orders.find(order_id)).execute(&mut conn)?;
        Ok::<_, CustomError>(deleted)
    })
    .await??;

    if deleted == 0 {
        return Err(CustomError::not_found("Order", order_id));
    }
    Ok(HttpResponse::NoContent().finish())
}
