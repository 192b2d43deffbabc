//! Contract models for CRM service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

/// Persisted customer record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Store-assigned identifier
    pub id: i64,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
}

/// Full customer field set, used by create and replace
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerData {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
}

/// Partial customer update; `None` leaves the stored field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerPatch {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
}

/// Persisted vendor record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vendor {
    /// Store-assigned identifier
    pub id: i64,
    pub name: Option<String>,
}

/// Full vendor field set, used by create and replace
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorData {
    pub name: Option<String>,
}

/// Partial vendor update; `None` leaves the stored field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorPatch {
    pub name: Option<String>,
}

/// Reference category, loaded as seed data only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryData {
    pub name: Option<String>,
}

/// Models keyed by a store-assigned identifier
pub trait Identified {
    fn id(&self) -> i64;
}

impl Identified for Customer {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for Vendor {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for Category {
    fn id(&self) -> i64 {
        self.id
    }
}

/// A model together with its resource URL.
///
/// The URL is derived from the base path and the current identifier every
/// time a resource is returned; it is never written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource<T> {
    pub item: T,
    pub url: String,
}

impl<T: Identified> Resource<T> {
    /// Pair `item` with the URL `<base_path>/<item id>`
    pub fn located(item: T, base_path: &str) -> Self {
        let url = format!("{}/{}", base_path.trim_end_matches('/'), item.id());
        Self { item, url }
    }
}

impl Customer {
    /// Copy of the scalar fields, without the identifier
    pub fn data(&self) -> CustomerData {
        CustomerData {
            firstname: self.firstname.clone(),
            lastname: self.lastname.clone(),
        }
    }

    /// Overwrite every field present in `patch`
    pub fn apply(&mut self, patch: CustomerPatch) {
        if let Some(firstname) = patch.firstname {
            self.firstname = Some(firstname);
        }
        if let Some(lastname) = patch.lastname {
            self.lastname = Some(lastname);
        }
    }
}

impl Vendor {
    /// Copy of the scalar fields, without the identifier
    pub fn data(&self) -> VendorData {
        VendorData {
            name: self.name.clone(),
        }
    }

    /// Overwrite every field present in `patch`
    pub fn apply(&mut self, patch: VendorPatch) {
        if let Some(name) = patch.name {
            self.name = Some(name);
        }
    }
}
