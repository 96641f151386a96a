//! Identity records returned by the service.
//!
//! Decoding is two-phase: the body first deserializes into private wire
//! records mirroring the service's literal JSON layout, then converts into
//! [`Identity`], parsing the birthdate and photo fields along the way.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{Error, Result};

/// Date format of the service's `mdy` birthday representation.
const BIRTHDATE_FORMAT: &str = "%m/%d/%Y";

/// One generated fake-person entry.
///
/// The service fills only `name`, `surname`, `gender`, and `region` unless
/// the extra-data option was set on the originating request; the remaining
/// fields then come back empty, zero, or absent. That is a service contract,
/// not a client invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    /// First name.
    pub name: String,
    /// Last name.
    pub surname: String,
    /// Gender as reported by the service.
    pub gender: String,
    /// Geographic region the identity was generated for.
    pub region: String,
    /// Age in years.
    pub age: u32,
    /// Honorific (e.g., "ms").
    pub title: String,
    /// Phone number, formatted for the region.
    pub phone: String,
    /// Date of birth, parsed from the service's `mdy` representation.
    pub birthdate: Option<NaiveDate>,
    /// Email address.
    pub email: String,
    /// Generated password.
    pub password: String,
    /// Payment card details.
    pub credit_card: CreditCard,
    /// Profile photo location.
    pub photo: Option<Url>,
}

/// Payment card sub-record of an [`Identity`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditCard {
    /// Expiration date as emitted by the service (e.g., "2/2027").
    pub expiration: String,
    /// Card number.
    pub number: String,
    /// Numeric PIN.
    pub pin: u32,
    /// Numeric security code.
    pub security: u32,
}

/// Wire shape of one identity, mirroring the service's JSON field layout.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct IdentityRecord {
    name: String,
    surname: String,
    gender: String,
    region: String,
    age: u32,
    title: String,
    phone: String,
    birthday: Option<Birthday>,
    email: String,
    password: String,
    credit_card: CreditCard,
    photo: Option<String>,
}

/// Wire shape of the service's birthday object.
///
/// The service also sends `dmy` (day/month/year string) and `raw` (numeric
/// timestamp) representations; only `mdy` is consumed.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Birthday {
    mdy: String,
}

impl TryFrom<IdentityRecord> for Identity {
    type Error = Error;

    fn try_from(record: IdentityRecord) -> Result<Self> {
        let birthdate = record
            .birthday
            .map(|birthday| NaiveDate::parse_from_str(&birthday.mdy, BIRTHDATE_FORMAT))
            .transpose()?;

        let photo = record
            .photo
            .map(|photo| Url::parse(&photo).map_err(Error::InvalidPhoto))
            .transpose()?;

        Ok(Self {
            name: record.name,
            surname: record.surname,
            gender: record.gender,
            region: record.region,
            age: record.age,
            title: record.title,
            phone: record.phone,
            birthdate,
            email: record.email,
            password: record.password,
            credit_card: record.credit_card,
            photo,
        })
    }
}
