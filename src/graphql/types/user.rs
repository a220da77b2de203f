use async_graphql::*;

use crate::store::UserRecord;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct User {
    pub id: ID,
    pub first_name: String,
    pub last_name: String,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: ID::from(record.id),
            first_name: record.first_name,
            last_name: record.last_name,
        }
    }
}

#[ComplexObject]
impl User {
    /// First and last name joined with a single space
    async fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
