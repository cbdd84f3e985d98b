use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{
    approve_booking, delete_booking, register_booking, show_booking, show_booking_list,
};

pub fn build_booking_routes() -> Router<AppRegistry> {
    let bookings_routers = Router::new()
        .route("/", post(register_booking).get(show_booking_list))
        .route("/:booking_id", get(show_booking).delete(delete_booking))
        .route("/:booking_id/approve", post(approve_booking));

    Router::new().nest("/bookings", bookings_routers)
}
