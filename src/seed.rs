use crate::db::DbPool;
use crate::models::{offer::Offer, order::Order, user::User};
use crate::schema::{offers, orders, users};
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::r2d2::PoolError;
use serde::Deserialize;
use thiserror::Error;
use tracing::instrument;

const USERS_FIXTURE: &str = include_str!("../fixtures/users.json");
const ORDERS_FIXTURE: &str = include_str!("../fixtures/orders.json");
const OFFERS_FIXTURE: &str = include_str!("../fixtures/offers.json");

/// Date layout used by the order fixtures, e.g. `01/15/2023`.
pub const FIXTURE_DATE_FORMAT: &str = "%m/%d/%Y";

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Malformed fixture: {0}")]
    Fixture(#[from] serde_json::Error),

    #[error("Malformed fixture date {value:?}: {source}")]
    Date {
        value: String,
        source: chrono::ParseError,
    },

    #[error("Connection Error: {0}")]
    Connection(#[from] PoolError),

    #[error("Insertion Error: {0}")]
    Insertion(#[from] diesel::result::Error),
}

#[derive(Debug, Deserialize)]
struct OrderFixture {
    id: i32,
    name: String,
    description: String,
    start_date: String,
    end_date: String,
    address: String,
    price: i32,
    customer_id: i32,
    executor_id: i32,
}

impl TryFrom<OrderFixture> for Order {
    type Error = SeedError;

    fn try_from(fixture: OrderFixture) -> Result<Self, Self::Error> {
        Ok(Order {
            id: fixture.id,
            name: fixture.name,
            description: fixture.description,
            start_date: parse_fixture_date(&fixture.start_date)?,
            end_date: parse_fixture_date(&fixture.end_date)?,
            address: fixture.address,
            price: fixture.price,
            customer_id: fixture.customer_id,
            executor_id: fixture.executor_id,
        })
    }
}

pub fn parse_fixture_date(value: &str) -> Result<NaiveDate, SeedError> {
    NaiveDate::parse_from_str(value, FIXTURE_DATE_FORMAT).map_err(|source| SeedError::Date {
        value: value.to_string(),
        source,
    })
}

/// Seed records with their dates already converted.
#[derive(Debug)]
pub struct Fixtures {
    pub users: Vec<User>,
    pub orders: Vec<Order>,
    pub offers: Vec<Offer>,
}

impl Fixtures {
    pub fn load() -> Result<Self, SeedError> {
        let users: Vec<User> = serde_json::from_str(USERS_FIXTURE)?;
        let orders = serde_json::from_str::<Vec<OrderFixture>>(ORDERS_FIXTURE)?
            .into_iter()
            .map(Order::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let offers: Vec<Offer> = serde_json::from_str(OFFERS_FIXTURE)?;
        Ok(Self {
            users,
            orders,
            offers,
        })
    }
}

/******************************************/
// Adding seed data to all tables
/******************************************/
/// Offers point at orders and users, so tables are filled in that order.
#[instrument(name = "Seed database", skip(pool))]
pub fn seed_database(pool: &DbPool) -> Result<(), SeedError> {
    let fixtures = Fixtures::load()?;
    let mut conn = pool.get()?;

    for user in &fixtures.users {
        diesel::insert_into(users::table)
            .values(user)
            .execute(&mut conn)?;
    }
    for order in &fixtures.orders {
        diesel::insert_into(orders::table)
            .values(order)
            .execute(&mut conn)?;
    }
    for offer in &fixtures.offers {
        diesel::insert_into(offers::table)
            .values(offer)
            .execute(&mut conn)?;
    }

    tracing::info!(
        users = fixtures.users.len(),
        orders = fixtures.orders.len(),
        offers = fixtures.offers.len(),
        "Successfully seeded database"
    );
    Ok(())
}
