//! Entity to model mappers
//!
//! Conversions between domain entities (deals-core) and database models.
//! Rows whose columns encode closed enums (deal status, vote direction,
//! user role) convert fallibly via `TryFrom`; the rest are infallible.

mod category;
mod comment;
mod coupon;
mod deal;
mod shop;
mod user;
mod vote;
