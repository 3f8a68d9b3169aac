use serde::de::DeserializeOwned;
use serde::Serialize;

pub trait Endpoint {
    /// Route path relative to [`crate::constant::API_PREFIX`], in axum path syntax.
    const PATH: &'static str;

    type Response: Serialize + DeserializeOwned;
}

#[macro_export]
macro_rules! endpoint {
    ($request:ty, $path:literal, $response:ty) => {
        impl $crate::common::Endpoint for $request {
            const PATH: &'static str = $path;

            type Response = $response;
        }
    };
}
