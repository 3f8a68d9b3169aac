use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Request {
    pub id: Uuid,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Response;

crate::endpoint!(Request, "/songs/{id}", Response);
