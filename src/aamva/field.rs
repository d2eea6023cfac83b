//! Element codes recognized in the DL subfile text and the field each one
//! fills.
use std::{collections::HashMap, fmt, str::FromStr};

use lazy_static::lazy_static;

use super::field_table;

field_table! {
    /// Identity field extracted from a license barcode.
    ///
    /// Each variant is bound to exactly one element code and one canonical
    /// output key.
    pub enum Field {
        /// Customer ID number, embedded in the `ANS` designator line after
        /// a `DAQ` tag.
        LicenseCode: b"ANS" => "licenseCode",

        /// Customer First Name (DAC).
        FirstName: b"DAC" => "firstName",

        /// Customer Middle Name(s) (DAD).
        SecondName: b"DAD" => "secondName",

        /// Address – Street 1 (DAG).
        Address: b"DAG" => "address",

        /// Address – City (DAI).
        City: b"DAI" => "city",

        /// Address – Jurisdiction Code (DAJ).
        State: b"DAJ" => "state",

        /// Address – Postal Code (DAK).
        PostalCode: b"DAK" => "postalCode",

        /// Physical Description – Height (DAU).
        Height: b"DAU" => "height",

        /// Document Expiration Date (DBA).
        LicenseExpirationDate: b"DBA" => "licenseExpirationDate",

        /// Date of Birth (DBB).
        DateOfBirth: b"DBB" => "dateOfBirth",

        /// Physical Description – Sex (DBC).
        Sex: b"DBC" => "Sex",

        /// Document Issue Date (DBD).
        LicenseIssueDate: b"DBD" => "licenseIssueDate",

        /// Jurisdiction-specific vehicle class (DCA).
        LicenseTypeOfVehicle: b"DCA" => "licenseTypeOfVehicle",

        /// Jurisdiction-specific restriction codes (DCB).
        LicenseRestrictions: b"DCB" => "licenseRestrictions",

        /// Jurisdiction-specific endorsement codes (DCD).
        LicenseOtherVehicles: b"DCD" => "licenseOtherVehicles",

        /// Document Discriminator (DCF).
        LicenseId: b"DCF" => "licenseId",

        /// Country Identification (DCG).
        LicenseIssueCountry: b"DCG" => "licenseIssueCountry",

        /// Inventory control number (DCK).
        LicenseId2: b"DCK" => "licenseId2",

        /// Customer Family Name (DCS).
        Surnames: b"DCS" => "surnames",

        /// Compliance Type (DDA).
        LicenseCompliance: b"DDA" => "licenseCompliance",

        /// Card Revision Date (DDB).
        LicenseFormatVersion: b"DDB" => "licenseFormatVersion",

        /// Limited Duration Document Indicator (DDD).
        LicenseType: b"DDD" => "licenseType",

        /// Family name truncation (DDE).
        SurnameAlias: b"DDE" => "surnameAlias",

        /// First name truncation (DDF).
        FirstNameAlias: b"DDF" => "firstNameAlias",

        /// Middle name truncation (DDG).
        SecondNameAlias: b"DDG" => "secondNameAlias",

        /// Florida driver type (ZFC).
        LicenseTypeOfDriver: b"ZFC" => "licenseTypeOfDriver",

        /// Florida state identifier (ZFJ).
        StatalId: b"ZFJ" => "statalId"
    }
}

/// Fields a caller needs before it can accept a scan.
pub const CRITICAL_FIELDS: [Field; 5] = [
    Field::LicenseCode,
    Field::FirstName,
    Field::Surnames,
    Field::DateOfBirth,
    Field::State,
];

lazy_static! {
    static ref FIELDS_BY_NAME: HashMap<&'static str, Field> = {
        let mut map = HashMap::new();

        for f in Field::LIST {
            map.insert(f.name(), f);
        }

        map
    };
}

impl Field {
    /// Looks up the field with the given canonical output key.
    pub fn from_name(name: &str) -> Option<Self> {
        FIELDS_BY_NAME.get(name).copied()
    }

    pub fn parse_name(name: &str) -> Result<Self, UnknownFieldName> {
        Self::from_name(name).ok_or_else(|| UnknownFieldName(name.to_owned()))
    }

    pub fn is_critical(&self) -> bool {
        CRITICAL_FIELDS.contains(self)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown element code `{0}`")]
pub struct UnknownElementCode(pub String);

#[derive(Debug, thiserror::Error)]
#[error("unknown field name `{0}`")]
pub struct UnknownFieldName(pub String);

/// Parses an element code such as `"DAC"`.
impl FromStr for Field {
    type Err = UnknownElementCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <&[u8; 3]>::try_from(s.as_bytes())
            .ok()
            .and_then(Self::from_code)
            .ok_or_else(|| UnknownElementCode(s.to_owned()))
    }
}
