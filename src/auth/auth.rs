use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, error::ErrorUnauthorized};
use futures::future::{Ready, ready};

/// Authenticated driver context, inserted into request extensions by
/// `auth_middleware` after the bearer token has been verified.
#[derive(Debug, Clone)]
pub struct AuthDriver {
    pub driver_id: u64,
    pub username: String,
}

impl FromRequest for AuthDriver {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        match req.extensions().get::<AuthDriver>() {
            Some(driver) => ready(Ok(driver.clone())),
            None => ready(Err(ErrorUnauthorized("Missing driver context"))),
        }
    }
}
