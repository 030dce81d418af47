use bson::Bson;
use serde::Deserialize;

pub const ADMIN_ROLE: &str = "admin";
pub const VENDOR_ROLE: &str = "vendor";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UserAccount {
    #[serde(rename = "_id", default)]
    pub id: Option<Bson>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub vendor_id: Option<Bson>,
}

impl UserAccount {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }

    pub fn email_or_placeholder(&self) -> &str {
        self.email.as_deref().unwrap_or("<no email>")
    }

    pub fn role_or_placeholder(&self) -> &str {
        self.role.as_deref().unwrap_or("<no role>")
    }
}
