mod handlers;

use crate::error::HandlerError;
use actix_web::{web, Scope};
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use users_repo::user_repo::UserId;

/// The `user_id` query parameter. When it is repeated only the first occurrence counts.
#[derive(Debug, PartialEq)]
pub struct UserIdQuery {
    pub user_id: UserId,
}

impl<'de> Deserialize<'de> for UserIdQuery {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct UserIdQueryVisitor;

        impl<'de> Visitor<'de> for UserIdQueryVisitor {
            type Value = UserIdQuery;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a query string with a user_id parameter")
            }

            fn visit_map<A>(self, mut map: A) -> Result<UserIdQuery, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut user_id = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == "user_id" && user_id.is_none() {
                        user_id = Some(map.next_value::<UserId>()?);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                let user_id = user_id.ok_or_else(|| de::Error::missing_field("user_id"))?;
                Ok(UserIdQuery { user_id })
            }
        }

        deserializer.deserialize_map(UserIdQueryVisitor)
    }
}

pub fn user_service() -> Scope {
    web::scope("/users")
        .service(handlers::create_user)
        .service(handlers::get_user)
        .service(handlers::update_user)
        .service(handlers::delete_user)
}

/// Bodies are decoded as JSON whatever their content type says.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(|err, _req| HandlerError::Decode(err).into())
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| HandlerError::Parse(err).into())
}
