//! Opaque CRUD access to backend resource collections.
//!
//! Customers, stores, tickets and the rest are owned by the backend; the
//! client only moves their JSON around. Lists always come back as a
//! [`Page`], whatever shape the endpoint used.

use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

use crate::client::{JewelLinkClient, RequestAuth};
use crate::error::Result;
use crate::models::Page;

/// Backend resource collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Customers,
    Stores,
    Users,
    Escalations,
    Feedback,
    Support,
    FollowUps,
    Tasks,
    Appointments,
    Tenants,
    TeamMembers,
}

impl Resource {
    /// Collection path relative to `/api/`
    pub fn path(&self) -> &'static str {
        match self {
            Self::Customers => "customers/",
            Self::Stores => "stores/",
            Self::Users => "users/",
            Self::Escalations => "escalations/",
            Self::Feedback => "feedback/",
            Self::Support => "support/tickets/",
            Self::FollowUps => "follow-ups/",
            Self::Tasks => "tasks/",
            Self::Appointments => "appointments/",
            Self::Tenants => "tenants/",
            Self::TeamMembers => "team-members/",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path().trim_end_matches('/'))
    }
}

/// Method group for one [`Resource`], borrowed from the client.
#[derive(Debug, Clone, Copy)]
pub struct ResourceClient<'a> {
    client: &'a JewelLinkClient,
    resource: Resource,
}

impl<'a> ResourceClient<'a> {
    pub(crate) fn new(client: &'a JewelLinkClient, resource: Resource) -> Self {
        Self { client, resource }
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    fn item_path(&self, id: &str) -> String {
        format!("{}{}/", self.resource.path(), id)
    }

    /// List the collection, optionally filtered by query parameters.
    pub async fn list<T: DeserializeOwned>(&self, query: &[(&str, &str)]) -> Result<Page<T>> {
        self.client
            .get_json_with_query(self.resource.path(), query)
            .await
    }

    pub async fn get<T: DeserializeOwned>(&self, id: &str) -> Result<T> {
        self.client
            .send_json(Method::GET, &self.item_path(id), None::<&()>, RequestAuth::Session)
            .await
    }

    pub async fn create<B, T>(&self, body: &B) -> Result<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        self.client
            .send_json(Method::POST, self.resource.path(), Some(body), RequestAuth::Session)
            .await
    }

    /// Partial update (`PATCH`), e.g. a ticket status change
    pub async fn update<B, T>(&self, id: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        self.client
            .send_json(Method::PATCH, &self.item_path(id), Some(body), RequestAuth::Session)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .send(Method::DELETE, &self.item_path(id), None::<&()>, RequestAuth::Session)
            .await?;
        Ok(())
    }
}
