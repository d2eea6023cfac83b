use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{parse, Field, ParsedFields};

/// How the barcode payload was acquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanSource {
    /// Decoded from an uploaded picture.
    Image,

    /// Decoded from a live camera stream.
    Camera,

    /// Typed in by a keyboard-emulating scanner.
    Keyboard,
}

impl ScanSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Camera => "camera",
            Self::Keyboard => "keyboard",
        }
    }
}

impl fmt::Display for ScanSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid scan source `{0}`")]
pub struct InvalidScanSource(pub String);

impl FromStr for ScanSource {
    type Err = InvalidScanSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(Self::Image),
            "camera" => Ok(Self::Camera),
            "keyboard" => Ok(Self::Keyboard),
            _ => Err(InvalidScanSource(s.to_owned())),
        }
    }
}

macro_rules! license_scan {
    ($($(#[$meta:meta])* $field:ident : $variant:ident),*) => {
        /// Barcode section of an intake record.
        ///
        /// Every identity field is always present; a field the barcode did
        /// not carry is the empty string.
        #[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct LicenseScan {
            $($(#[$meta])* pub $field: String,)*

            /// Raw payload, as handed over by the barcode reader.
            pub barcode: String,

            /// Acquisition channel, unset on a cleared record.
            pub barcode_type: Option<ScanSource>,
        }

        impl LicenseScan {
            pub fn get(&self, field: Field) -> &str {
                match field {
                    $(Field::$variant => self.$field.as_str()),*
                }
            }

            fn fill(&mut self, parsed: &ParsedFields) {
                for (field, value) in parsed.iter() {
                    let slot = match field {
                        $(Field::$variant => &mut self.$field),*
                    };
                    *slot = value.to_owned();
                }
            }
        }
    };
}

license_scan! {
    license_code: LicenseCode,
    first_name: FirstName,
    second_name: SecondName,
    address: Address,
    city: City,
    state: State,
    postal_code: PostalCode,
    height: Height,
    license_expiration_date: LicenseExpirationDate,
    date_of_birth: DateOfBirth,
    #[serde(rename = "Sex")]
    sex: Sex,
    license_issue_date: LicenseIssueDate,
    license_type_of_vehicle: LicenseTypeOfVehicle,
    license_restrictions: LicenseRestrictions,
    license_other_vehicles: LicenseOtherVehicles,
    license_id: LicenseId,
    license_issue_country: LicenseIssueCountry,
    license_id2: LicenseId2,
    surnames: Surnames,
    license_compliance: LicenseCompliance,
    license_format_version: LicenseFormatVersion,
    license_type: LicenseType,
    surname_alias: SurnameAlias,
    first_name_alias: FirstNameAlias,
    second_name_alias: SecondNameAlias,
    license_type_of_driver: LicenseTypeOfDriver,
    statal_id: StatalId
}

impl LicenseScan {
    /// Parses `raw` and builds the record from it.
    pub fn from_payload(raw: &str, source: ScanSource) -> Self {
        Self::from_parsed(&parse(raw), raw, source)
    }

    pub fn from_parsed(parsed: &ParsedFields, raw: &str, source: ScanSource) -> Self {
        let mut scan = Self {
            barcode: raw.to_owned(),
            barcode_type: Some(source),
            ..Self::default()
        };
        scan.fill(parsed);
        scan
    }
}
