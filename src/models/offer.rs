use crate::schema::offers;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Queryable, Selectable, Insertable)]
#[diesel(table_name = offers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Offer {
    pub id: i32,
    pub order_id: i32,
    pub executor_id: i32,
}

#[derive(Debug, Clone, Deserialize, Insertable, AsChangeset)]
#[diesel(table_name = offers)]
#[serde(deny_unknown_fields)]
pub struct OfferBody {
    pub order_id: i32,
    pub executor_id: i32,
}
