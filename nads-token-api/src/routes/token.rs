use actix_web::web;

use crate::handlers::token_handler;
use crate::managers::insight_access::InsightAccess;

/// Every method and path goes through the dispatcher, which routes on the path itself.
pub fn config<A: InsightAccess + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.default_service(web::to(token_handler::dispatch::<A>));
}
