use crate::db::DbPool;
use crate::errors::custom::CustomError;
use crate::models::offer::{Offer, OfferBody};
use crate::schema::offers::dsl as offer_dsl;
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use diesel::prelude::*;
use tracing::instrument;

/**
 * @route   GET /offers
 * @access  Public
 */
#[instrument(name = "List offers", skip(pool))]
pub async fn list_offers(pool: web::Data<DbPool>) -> Result<HttpResponse, CustomError> {
    let offers = web::block(move || {
        let mut conn = pool.get()?;
        let offers = offer_dsl::offers
            .select(Offer::as_select())
            .order(offer_dsl::id)
            .load(&mut conn)?;
        Ok::<_, CustomError>(offers)
    })
    .await??;

    Ok(HttpResponse::Ok().json(offers))
}

/**
 * @route   POST /offers
 * @access  Public
 */
#[instrument(name = "Create new offer", skip(pool, req_offer), fields(order_id = req_offer.order_id, executor_id = req_offer.executor_id))]
pub async fn create_offer(
    pool: web::Data<DbPool>,
    req_offer: web::Json<OfferBody>,
) -> Result<HttpResponse, CustomError> {
    let offer_data = req_offer.into_inner();
    let offer = web::block(move || {
        let mut conn = pool.get()?;
        let offer = diesel::insert_into(offer_dsl::offers)
            .values(&offer_data)
            .returning(Offer::as_returning())
            .get_result(&mut conn)?;
        Ok::<_, CustomError>(offer)
    })
    .await??;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/offers/{}", offer.id)))
        .finish())
}

/**
 * @route   GET /offers/{id}
 * @access  Public
 */
#[instrument(name = "Get offer", skip(pool))]
pub async fn get_offer(
    pool: web::Data<DbPool>,
    offer_id: web::Path<i32>,
) -> Result<HttpResponse, CustomError> {
    let offer_id = offer_id.into_inner();
    let offer = web::block(move || {
        let mut conn = pool.get()?;
        let offer = offer_dsl::offers
            .find(offer_id)
            .select(Offer::as_select())
            .first(&mut conn)
            .optional()?;
        Ok::<_, CustomError>(offer)
    })
    .await??
    .ok_or_else(|| CustomError::not_found("Offer", offer_id))?;

    Ok(HttpResponse::Ok().json(offer))
}

/**
 * @route   PUT /offers/{id}
 * @access  Public
 */
#[instrument(name = "Update offer", skip(pool, req_offer))]
pub async fn update_offer(
    pool: web::Data<DbPool>,
    offer_id: web::Path<i32>,
    req_offer: web::Json<OfferBody>,
) -> Result<HttpResponse, CustomError> {
    let offer_id = offer_id.into_inner();
    let offer_data = req_offer.into_inner();
    let updated = web::block(move || {
        let mut conn = pool.get()?;
        let updated = diesel::update(offer_dsl::offers.find(offer_id))
            .set(&offer_data)
            .execute(&mut conn)?;
        Ok::<_, CustomError>(updated)
    })
    .await??;

    if updated == 0 {
        return Err(CustomError::not_found("Offer", offer_id));
    }
    Ok(HttpResponse::NoContent().finish())
}

/**
 * @route   DELETE /offers/{id}
 * @access  Public
 */
#[instrument(name = "Delete offer", skip(pool))]
pub async fn delete_offer(
    pool: web::Data<DbPool>,
    offer_id: web::Path<i32>,
) -> Result<HttpResponse, CustomError> {
    let offer_id = offer_id.into_inner();
    let deleted = web::block(move || {
        let mut conn = pool.get()?;
        let deleted = diesel::delete(offer_dsl::offers.find(offer_id)).execute(&mut conn)?;
        Ok::<_, CustomError>(deleted)
    })
    .await??;

    if deleted == 0 {
        return Err(CustomError::not_found("Offer", offer_id));
    }
    Ok(HttpResponse::NoContent().finish())
}
